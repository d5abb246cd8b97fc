pub mod confirm;
pub mod context;
pub mod order;

pub use confirm::*;
pub use context::*;
pub use order::*;
