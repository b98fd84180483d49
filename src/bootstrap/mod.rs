pub mod config;
pub mod fonts;
pub mod logging;
pub mod router;
pub mod server;
