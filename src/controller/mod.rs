//! HTTP controllers, one module per route group.

pub mod account_overview;
pub mod customer;
pub mod home;
pub mod ledger;
pub mod lend;
pub mod payment;
