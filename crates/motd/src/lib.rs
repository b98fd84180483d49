//! Legacy `§` color-code handling for server MOTDs

pub mod palette;
mod parser;
mod strip;

pub use palette::{lookup, CODE_SENTINEL};
pub use parser::{parse, split_lines};
pub use strip::strip_codes;
