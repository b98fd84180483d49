mod models;
mod scale;
mod state;
mod status;

pub use models::AppState;
pub use scale::parse_scale;
pub use status::server_status;
