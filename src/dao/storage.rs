use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::Error,
    model::{Customer, Loan, NewLoan, NewPayment, Payment},
};

pub type SharedStorage = Arc<dyn Storage>;

/// Persistence the loan engine depends on. Implementations must make
/// `commit_payment` atomic: the payment row and the optional status
/// transition are stored together or not at all.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_customer(&self, id: i64) -> Result<Option<Customer>, Error>;

    async fn insert_customer(&self, name: &str) -> Result<Customer, Error>;

    async fn list_customers(&self) -> Result<Vec<Customer>, Error>;

    async fn get_loan(&self, id: i64) -> Result<Option<Loan>, Error>;

    async fn get_loans_by_customer(
        &self,
        customer_id: i64,
    ) -> Result<Vec<Loan>, Error>;

    async fn insert_loan(&self, loan: &NewLoan) -> Result<Loan, Error>;

    /// Payments of a loan in the order they were recorded.
    async fn get_payments(&self, loan_id: i64) -> Result<Vec<Payment>, Error>;

    async fn commit_payment(
        &self,
        payment: &NewPayment,
        close_loan: bool,
    ) -> Result<Payment, Error>;
}
