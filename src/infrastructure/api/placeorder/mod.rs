pub mod confirm;

pub use confirm::{build_confirm_request, ConfirmClient, ConfirmOrderInput};
