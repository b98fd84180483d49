mod canvas;
mod compositor;
mod errors;
mod favicon;
pub mod fonts;
mod layout;

pub use compositor::{compose, encode_png, render};
pub use errors::*;
pub use favicon::{decode_favicon, FAVICON_PREFIX};
pub use fonts::{FontRole, FontSet, Typeface};
pub use layout::{CardGeometry, FontSizes, InfoColumn, Point};
pub use motdcard_config::CardVariant;
