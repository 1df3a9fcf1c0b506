//! Database models module
//!
//! Entity structs for customers, loans and payments, plus the `Table`
//! handle the postgres DAO hangs its queries on.

mod models;
mod table;

pub use models::*;

pub use table::Table;
