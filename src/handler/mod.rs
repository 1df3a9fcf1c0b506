pub use self::engine::{
    Engine, Ledger, LoanCreated, LoanOverview, Overview, PaymentResult,
    Transaction,
};

pub mod engine;
pub mod ledger;
pub mod loan_locks;
pub mod originator;
