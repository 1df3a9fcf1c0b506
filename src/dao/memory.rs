use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    error::Error,
    model::{Customer, Loan, LoanStatus, NewLoan, NewPayment, Payment},
};

use super::Storage;

#[derive(Debug, Default)]
struct Records {
    customers: Vec<Customer>,
    loans: Vec<Loan>,
    payments: Vec<Payment>,
}

/// Process-local store with the same contract as the postgres tables.
/// Ids are assigned sequentially from 1 per entity.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: Mutex<Records>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_customer(&self, id: i64) -> Result<Option<Customer>, Error> {
        let records = self.records.lock().await;
        Ok(records.customers.iter().find(|c| c.id == id).cloned())
    }

    async fn insert_customer(&self, name: &str) -> Result<Customer, Error> {
        let mut records = self.records.lock().await;
        let customer = Customer {
            id: records.customers.len() as i64 + 1,
            name: name.to_owned(),
        };
        records.customers.push(customer.clone());
        Ok(customer)
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, Error> {
        let records = self.records.lock().await;
        Ok(records.customers.clone())
    }

    async fn get_loan(&self, id: i64) -> Result<Option<Loan>, Error> {
        let records = self.records.lock().await;
        Ok(records.loans.iter().find(|l| l.id == id).cloned())
    }

    async fn get_loans_by_customer(
        &self,
        customer_id: i64,
    ) -> Result<Vec<Loan>, Error> {
        let records = self.records.lock().await;
        Ok(records
            .loans
            .iter()
            .filter(|l| l.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn insert_loan(&self, data: &NewLoan) -> Result<Loan, Error> {
        let mut records = self.records.lock().await;
        let loan = Loan {
            id: records.loans.len() as i64 + 1,
            customer_id: data.customer_id,
            principal: data.principal.clone(),
            interest_rate: data.interest_rate.clone(),
            period_years: data.period_years,
            total_amount: data.terms.total_amount.clone(),
            emi_amount: data.terms.emi_amount.clone(),
            total_interest: data.terms.total_interest.clone(),
            start_date: data.start_date,
            status: LoanStatus::Active,
        };
        records.loans.push(loan.clone());
        Ok(loan)
    }

    async fn get_payments(&self, loan_id: i64) -> Result<Vec<Payment>, Error> {
        let records = self.records.lock().await;
        Ok(records
            .payments
            .iter()
            .filter(|p| p.loan_id == loan_id)
            .cloned()
            .collect())
    }

    async fn commit_payment(
        &self,
        data: &NewPayment,
        close_loan: bool,
    ) -> Result<Payment, Error> {
        let mut records = self.records.lock().await;

        let loan = records
            .loans
            .iter_mut()
            .find(|l| l.id == data.loan_id)
            .ok_or(Error::LoanNotFound(data.loan_id))?;

        if !loan.is_active() {
            return Err(Error::LoanNotActive(data.loan_id));
        }

        if close_loan {
            loan.status = LoanStatus::Closed;
        }

        let payment = Payment {
            id: records.payments.len() as i64 + 1,
            loan_id: data.loan_id,
            payment_date: data.payment_date,
            amount: data.amount.clone(),
            payment_type: data.payment_type.clone(),
        };
        records.payments.push(payment.clone());

        Ok(payment)
    }
}
