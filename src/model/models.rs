//! Entity structs for the lending ledger.

use std::fmt;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// =============================================================================
// CUSTOMER
// =============================================================================

#[derive(Debug, Clone, PartialEq, FromRow, Deserialize, Serialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
}

// =============================================================================
// LOAN
// =============================================================================

#[derive(sqlx::Type, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[sqlx(type_name = "loan_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Active,
    Closed,
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoanStatus::Active => write!(f, "active"),
            LoanStatus::Closed => write!(f, "closed"),
        }
    }
}

/// Amortization terms fixed at origination. `total_interest` and
/// `total_amount` keep full precision; `emi_amount` is already rounded.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanTerms {
    pub total_interest: BigDecimal,
    pub total_amount: BigDecimal,
    pub emi_amount: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Loan {
    pub id: i64,
    pub customer_id: i64,
    pub principal: BigDecimal,
    pub interest_rate: BigDecimal,
    pub period_years: i32,
    pub total_amount: BigDecimal,
    pub emi_amount: BigDecimal,
    pub total_interest: BigDecimal,
    pub start_date: DateTime<Utc>,
    pub status: LoanStatus,
}

impl Loan {
    pub fn terms(&self) -> LoanTerms {
        LoanTerms {
            total_interest: self.total_interest.clone(),
            total_amount: self.total_amount.clone(),
            emi_amount: self.emi_amount.clone(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == LoanStatus::Active
    }
}

#[derive(Debug, Clone)]
pub struct NewLoan {
    pub customer_id: i64,
    pub principal: BigDecimal,
    pub interest_rate: BigDecimal,
    pub period_years: i32,
    pub terms: LoanTerms,
    pub start_date: DateTime<Utc>,
}

// =============================================================================
// PAYMENT
// =============================================================================

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Payment {
    pub id: i64,
    pub loan_id: i64,
    pub payment_date: DateTime<Utc>,
    pub amount: BigDecimal,
    pub payment_type: String,
}

#[derive(Debug, Clone)]
pub struct NewPayment {
    pub loan_id: i64,
    pub amount: BigDecimal,
    pub payment_type: String,
    pub payment_date: DateTime<Utc>,
}
