use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    dao::SharedStorage,
    error::Error,
    helpers::{serialize_money, serialize_timestamp},
    model::{Customer, Loan, LoanStatus, NewLoan, NewPayment, Payment},
    types::{LoanApplication, PaymentOrder},
};

use super::{
    ledger::{evaluate, LedgerSummary},
    loan_locks::LoanLocks,
    originator::originate,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanCreated {
    pub loan_id: i64,
    #[serde(serialize_with = "serialize_money")]
    pub total_amount: BigDecimal,
    #[serde(serialize_with = "serialize_money")]
    pub emi_amount: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentResult {
    pub loan_id: i64,
    #[serde(rename = "updated_balance", serialize_with = "serialize_money")]
    pub balance: BigDecimal,
    #[serde(serialize_with = "serialize_money")]
    pub emi_amount: BigDecimal,
    pub emis_left: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub payment_id: i64,
    #[serde(serialize_with = "serialize_money")]
    pub amount: BigDecimal,
    pub payment_type: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub payment_date: DateTime<Utc>,
}

impl From<Payment> for Transaction {
    fn from(payment: Payment) -> Self {
        Transaction {
            payment_id: payment.id,
            amount: payment.amount,
            payment_type: payment.payment_type,
            payment_date: payment.payment_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ledger {
    pub loan_id: i64,
    pub transactions: Vec<Transaction>,
    #[serde(serialize_with = "serialize_money")]
    pub balance: BigDecimal,
    #[serde(serialize_with = "serialize_money")]
    pub emi_amount: BigDecimal,
    pub emis_left: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanOverview {
    pub loan_id: i64,
    #[serde(serialize_with = "serialize_money")]
    pub principal: BigDecimal,
    #[serde(serialize_with = "serialize_money")]
    pub total_amount: BigDecimal,
    #[serde(serialize_with = "serialize_money")]
    pub emi_amount: BigDecimal,
    #[serde(serialize_with = "serialize_money")]
    pub total_interest: BigDecimal,
    #[serde(serialize_with = "serialize_money")]
    pub amount_paid: BigDecimal,
    pub emis_left: i64,
    pub status: LoanStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub customer_id: i64,
    pub loans: Vec<LoanOverview>,
}

/// Loan accounting operations over an injected store. Balances are always
/// recomputed from the stored payments; nothing is cached between calls.
pub struct Engine {
    storage: SharedStorage,
    locks: LoanLocks,
}

impl Engine {
    pub fn new(storage: SharedStorage) -> Self {
        Engine {
            storage,
            locks: LoanLocks::new(),
        }
    }

    pub async fn create_customer(&self, name: &str) -> Result<Customer, Error> {
        let customer = self.storage.insert_customer(name).await?;
        info!("Customer {} created", customer.id);
        Ok(customer)
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, Error> {
        self.storage.list_customers().await
    }

    pub async fn originate(
        &self,
        application: LoanApplication,
    ) -> Result<LoanCreated, Error> {
        let customer_id = application.customer_id;
        self.storage
            .get_customer(customer_id)
            .await?
            .ok_or(Error::CustomerNotFound(customer_id))?;

        let terms = originate(
            &application.principal,
            &application.interest_rate,
            application.period_years,
        );

        let loan = self
            .storage
            .insert_loan(&NewLoan {
                customer_id,
                principal: application.principal,
                interest_rate: application.interest_rate,
                period_years: application.period_years,
                terms,
                start_date: Utc::now(),
            })
            .await?;

        info!(
            "Loan {} originated for customer {}: total {}, emi {}",
            loan.id, customer_id, loan.total_amount, loan.emi_amount
        );

        Ok(LoanCreated {
            loan_id: loan.id,
            total_amount: loan.total_amount,
            emi_amount: loan.emi_amount,
        })
    }

    pub async fn record_payment(
        &self,
        order: PaymentOrder,
    ) -> Result<PaymentResult, Error> {
        let loan_id = order.loan_id;
        let _guard = self.locks.acquire(loan_id).await;

        let loan = self.load_loan(loan_id).await?;
        if !loan.is_active() {
            warn!("Payment rejected, loan {} is {}", loan_id, loan.status);
            return Err(Error::LoanNotActive(loan_id));
        }

        let payments = self.storage.get_payments(loan_id).await?;
        let summary = evaluate(
            &loan.terms(),
            loan.status,
            &payments,
            Some(&order.amount),
        );

        let payment = self
            .storage
            .commit_payment(
                &NewPayment {
                    loan_id,
                    amount: order.amount,
                    payment_type: order.payment_type,
                    payment_date: Utc::now(),
                },
                summary.should_close,
            )
            .await?;

        info!(
            "Payment {} of {} recorded on loan {}, balance {}",
            payment.id, payment.amount, loan_id, summary.balance
        );

        if summary.should_close {
            info!("Loan {} closed", loan_id);
        }

        Ok(PaymentResult {
            loan_id,
            balance: summary.balance,
            emi_amount: loan.emi_amount,
            emis_left: summary.emis_left,
        })
    }

    pub async fn get_ledger(&self, loan_id: i64) -> Result<Ledger, Error> {
        let loan = self.load_loan(loan_id).await?;
        let payments = self.storage.get_payments(loan_id).await?;
        let LedgerSummary {
            balance, emis_left, ..
        } = evaluate(&loan.terms(), loan.status, &payments, None);

        Ok(Ledger {
            loan_id,
            transactions: payments.into_iter().map(Transaction::from).collect(),
            balance,
            emi_amount: loan.emi_amount,
            emis_left,
        })
    }

    pub async fn get_account_overview(
        &self,
        customer_id: i64,
    ) -> Result<Overview, Error> {
        self.storage
            .get_customer(customer_id)
            .await?
            .ok_or(Error::CustomerNotFound(customer_id))?;

        let loans = self.storage.get_loans_by_customer(customer_id).await?;
        let loans =
            try_join_all(loans.into_iter().map(|loan| self.loan_overview(loan)))
                .await?;

        Ok(Overview { customer_id, loans })
    }

    async fn loan_overview(&self, loan: Loan) -> Result<LoanOverview, Error> {
        let payments = self.storage.get_payments(loan.id).await?;
        let summary = evaluate(&loan.terms(), loan.status, &payments, None);

        Ok(LoanOverview {
            loan_id: loan.id,
            principal: loan.principal,
            total_amount: loan.total_amount,
            emi_amount: loan.emi_amount,
            total_interest: loan.total_interest,
            amount_paid: summary.total_paid,
            emis_left: summary.emis_left,
            status: loan.status,
        })
    }

    async fn load_loan(&self, loan_id: i64) -> Result<Loan, Error> {
        self.storage
            .get_loan(loan_id)
            .await?
            .ok_or(Error::LoanNotFound(loan_id))
    }
}
