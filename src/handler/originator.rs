use bigdecimal::BigDecimal;

use crate::{
    helpers::{round_money, MONTHS_IN_YEAR},
    model::LoanTerms,
};

/// Simple interest over the whole term, split into equal monthly
/// installments. Inputs are expected to be validated by the caller.
pub fn originate(
    principal: &BigDecimal,
    rate_percent: &BigDecimal,
    period_years: i32,
) -> LoanTerms {
    let years = BigDecimal::from(period_years);
    let total_interest =
        principal * &years * rate_percent / BigDecimal::from(100);
    let total_amount = principal + &total_interest;
    let installments = BigDecimal::from(period_years * MONTHS_IN_YEAR);
    let emi_amount = round_money(&(&total_amount / &installments));

    LoanTerms {
        total_interest,
        total_amount,
        emi_amount,
    }
}
