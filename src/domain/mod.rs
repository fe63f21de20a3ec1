mod account;
mod clock;
mod money;
mod statement;
mod transaction;

pub use account::*;
pub use clock::*;
pub use money::*;
pub use statement::*;
pub use transaction::*;
