mod expression;
mod ledger;
mod operator;
mod record;

pub use expression::*;
pub use ledger::*;
pub use operator::*;
pub use record::*;
