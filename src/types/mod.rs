pub use self::{
    customer_request::CustomerRequest,
    lend_request::{LendRequest, LoanApplication},
    payment_request::{PaymentOrder, PaymentRequest},
};

mod customer_request;
mod lend_request;
mod payment_request;

use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero as _};
use serde_json::Number;

use crate::error::Error;

pub(crate) fn missing_fields() -> Error {
    Error::InvalidInput(String::from("Missing required fields."))
}

pub(crate) fn parse_decimal(
    field: &str,
    value: &Number,
) -> Result<BigDecimal, Error> {
    BigDecimal::from_str(&value.to_string()).map_err(|_| {
        Error::InvalidInput(format!("{} is not a decimal number", field))
    })
}

pub(crate) fn parse_positive(
    field: &str,
    value: &Option<Number>,
) -> Result<BigDecimal, Error> {
    let value = value.as_ref().ok_or_else(missing_fields)?;
    let parsed = parse_decimal(field, value)?;

    if parsed <= BigDecimal::zero() {
        return Err(Error::InvalidInput(format!(
            "{} must be greater than zero",
            field
        )));
    }

    Ok(parsed)
}
