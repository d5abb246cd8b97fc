pub mod config_loader;
pub mod domain;
pub mod infrastructure;

pub use domain::constants::*;
pub use domain::model::confirm::*;
pub use domain::model::context::*;
pub use domain::model::order::*;
pub use infrastructure::api::placeorder::confirm::*;
pub use infrastructure::http::*;
