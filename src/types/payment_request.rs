use bigdecimal::BigDecimal;
use serde::Deserialize;
use serde_json::Number;

use crate::error::Error;

use super::{missing_fields, parse_positive};

#[derive(Debug, Default, Deserialize)]
pub struct PaymentRequest {
    pub loan_id: Option<i64>,
    pub amount: Option<Number>,
    pub payment_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentOrder {
    pub loan_id: i64,
    pub amount: BigDecimal,
    pub payment_type: String,
}

impl PaymentRequest {
    pub fn validate(&self) -> Result<PaymentOrder, Error> {
        let loan_id = match self.loan_id {
            Some(id) if id > 0 => id,
            _ => return Err(missing_fields()),
        };

        let amount = parse_positive("amount", &self.amount)?;

        let payment_type = match &self.payment_type {
            Some(value) if !value.trim().is_empty() => value.clone(),
            _ => return Err(missing_fields()),
        };

        Ok(PaymentOrder {
            loan_id,
            amount,
            payment_type,
        })
    }
}
