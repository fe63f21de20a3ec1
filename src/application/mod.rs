// Application layer - use cases and the ports they drive.

pub mod error;
pub mod ports;
pub mod service;

pub use error::*;
pub use ports::*;
pub use service::*;
