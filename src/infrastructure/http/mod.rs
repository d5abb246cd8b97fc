pub mod service;

pub use service::{HttpError, HttpService};
