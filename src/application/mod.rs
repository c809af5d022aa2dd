// Application layer - use cases on top of the pure domain types.
// The calculator service owns the session ledger; the CLI drives it.

pub mod calculator;
pub mod command;
pub mod error;

pub use calculator::*;
pub use command::*;
pub use error::*;
