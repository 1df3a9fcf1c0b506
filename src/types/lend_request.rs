use bigdecimal::BigDecimal;
use serde::Deserialize;
use serde_json::Number;

use crate::{error::Error, helpers::MONTHS_IN_YEAR};

use super::{missing_fields, parse_positive};

#[derive(Debug, Default, Deserialize)]
pub struct LendRequest {
    pub customer_id: Option<i64>,
    pub principal: Option<Number>,
    pub period_years: Option<Number>,
    pub interest_rate: Option<Number>,
}

/// A loan request whose fields have all been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanApplication {
    pub customer_id: i64,
    pub principal: BigDecimal,
    pub interest_rate: BigDecimal,
    pub period_years: i32,
}

impl LendRequest {
    pub fn validate(&self) -> Result<LoanApplication, Error> {
        let customer_id = match self.customer_id {
            Some(id) if id > 0 => id,
            _ => return Err(missing_fields()),
        };

        let principal = parse_positive("principal", &self.principal)?;

        let period_years = self.period_years.as_ref().ok_or_else(missing_fields)?;
        let period_years = period_years
            .as_i64()
            .and_then(|years| i32::try_from(years).ok())
            .filter(|years| years.checked_mul(MONTHS_IN_YEAR).is_some())
            .ok_or_else(|| {
                Error::InvalidInput(String::from(
                    "period_years must be a whole number of years",
                ))
            })?;

        if period_years <= 0 {
            return Err(Error::InvalidInput(String::from(
                "period_years must be greater than zero",
            )));
        }

        let interest_rate =
            parse_positive("interest_rate", &self.interest_rate)?;

        Ok(LoanApplication {
            customer_id,
            principal,
            interest_rate,
            period_years,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: &str) -> LendRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_validate_accepts_complete_request() {
        let application = request(
            r#"{"customer_id": 3, "principal": 120000, "period_years": 1, "interest_rate": 10.5}"#,
        )
        .validate()
        .unwrap();

        assert_eq!(application.customer_id, 3);
        assert_eq!(application.principal, BigDecimal::from(120000));
        assert_eq!(application.period_years, 1);
        assert_eq!(application.interest_rate.to_string(), "10.5");
    }

    #[test]
    fn test_validate_rejects_zero_rate() {
        let result = request(
            r#"{"customer_id": 1, "principal": 1000, "period_years": 1, "interest_rate": 0}"#,
        )
        .validate();

        assert!(
            matches!(result, Err(Error::InvalidInput(ref message)) if message.contains("interest_rate"))
        );
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let bodies = [
            r#"{"principal": 500, "period_years": 2, "interest_rate": 1}"#,
            r#"{"customer_id": 1, "period_years": 2, "interest_rate": 1}"#,
            r#"{"customer_id": 1, "principal": 500, "interest_rate": 1}"#,
            r#"{"customer_id": 1, "principal": 500, "period_years": 2}"#,
        ];

        for body in bodies {
            let result = request(body).validate();
            assert!(
                matches!(result, Err(Error::InvalidInput(_))),
                "accepted {}",
                body
            );
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range_values() {
        let bodies = [
            r#"{"customer_id": 0, "principal": 500, "period_years": 2, "interest_rate": 1}"#,
            r#"{"customer_id": 1, "principal": 0, "period_years": 2, "interest_rate": 1}"#,
            r#"{"customer_id": 1, "principal": -10, "period_years": 2, "interest_rate": 1}"#,
            r#"{"customer_id": 1, "principal": 500, "period_years": 0, "interest_rate": 1}"#,
            r#"{"customer_id": 1, "principal": 500, "period_years": 1.5, "interest_rate": 1}"#,
            r#"{"customer_id": 1, "principal": 500, "period_years": 2, "interest_rate": -1}"#,
            r#"{"customer_id": 1, "principal": 500, "period_years": 4000000000, "interest_rate": 1}"#,
        ];

        for body in bodies {
            let result = request(body).validate();
            assert!(
                matches!(result, Err(Error::InvalidInput(_))),
                "accepted {}",
                body
            );
        }
    }
}
