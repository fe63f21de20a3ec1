// Adapters for the application ports, plus the CSV replay driver.

mod clock;
mod console;
pub mod replay;

pub use clock::*;
pub use console::*;
pub use replay::{OperationKind, ReplayError, ReplayReport, Replayer};
