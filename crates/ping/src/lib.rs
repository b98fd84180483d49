mod address;
mod adapter;
mod backend;
mod codec;
mod description;
mod errors;
mod slp;
mod srv;

pub use address::ServerAddress;
pub use adapter::query;
pub use backend::{RawStatus, StatusClient};
pub use description::flatten_description;
pub use errors::*;
pub use slp::SlpClient;
pub use srv::{DnsSrvResolver, SrvResolver, SrvTarget};
