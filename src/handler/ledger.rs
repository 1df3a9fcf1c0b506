use bigdecimal::{BigDecimal, Zero as _};

use crate::{
    helpers::{installments_left, round_money},
    model::{LoanStatus, LoanTerms, Payment},
};

#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSummary {
    pub total_paid: BigDecimal,
    pub balance: BigDecimal,
    pub emis_left: i64,
    pub should_close: bool,
}

/// Folds the whole payment history (plus a payment about to be recorded,
/// if any) into the outstanding position of a loan.
pub fn evaluate(
    terms: &LoanTerms,
    status: LoanStatus,
    payments: &[Payment],
    pending: Option<&BigDecimal>,
) -> LedgerSummary {
    let mut total_paid = payments
        .iter()
        .fold(BigDecimal::zero(), |acc, payment| acc + &payment.amount);

    if let Some(amount) = pending {
        total_paid += amount;
    }

    let mut balance = round_money(&(&terms.total_amount - &total_paid));
    let mut emis_left = installments_left(&balance, &terms.emi_amount);
    let mut should_close = false;

    if balance <= BigDecimal::zero() {
        balance = round_money(&BigDecimal::zero());
        emis_left = 0;
        should_close = status == LoanStatus::Active;
    }

    LedgerSummary {
        total_paid,
        balance,
        emis_left,
        should_close,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::Utc;

    use super::*;
    use crate::handler::originator::originate;

    fn dec(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    fn payment(id: i64, amount: &str) -> Payment {
        Payment {
            id,
            loan_id: 1,
            payment_date: Utc::now(),
            amount: dec(amount),
            payment_type: String::from("regular"),
        }
    }

    fn scenario_terms() -> LoanTerms {
        originate(&dec("120000"), &dec("10"), 1)
    }

    #[test]
    fn test_evaluate_without_payments() {
        let summary =
            evaluate(&scenario_terms(), LoanStatus::Active, &[], None);

        assert_eq!(summary.total_paid, dec("0"));
        assert_eq!(summary.balance.to_string(), "132000.00");
        assert_eq!(summary.emis_left, 12);
        assert!(!summary.should_close);
    }

    #[test]
    fn test_evaluate_counts_pending_payment() {
        let amount = dec("11000");
        let summary = evaluate(
            &scenario_terms(),
            LoanStatus::Active,
            &[],
            Some(&amount),
        );

        assert_eq!(summary.total_paid, dec("11000"));
        assert_eq!(summary.balance.to_string(), "121000.00");
        assert_eq!(summary.emis_left, 11);
        assert!(!summary.should_close);
    }

    #[test]
    fn test_evaluate_partial_installment_counts_as_one() {
        let payments = [payment(1, "11000"), payment(2, "500.50")];
        let summary =
            evaluate(&scenario_terms(), LoanStatus::Active, &payments, None);

        assert_eq!(summary.balance.to_string(), "120499.50");
        assert_eq!(summary.emis_left, 11);
    }

    #[test]
    fn test_evaluate_overpayment_clamps_and_closes() {
        let payments = [payment(1, "11000")];
        let amount = dec("130000");
        let summary = evaluate(
            &scenario_terms(),
            LoanStatus::Active,
            &payments,
            Some(&amount),
        );

        assert_eq!(summary.total_paid, dec("141000"));
        assert_eq!(summary.balance, dec("0"));
        assert_eq!(summary.emis_left, 0);
        assert!(summary.should_close);
    }

    #[test]
    fn test_evaluate_exact_payoff_closes() {
        let payments = [payment(1, "132000")];
        let summary =
            evaluate(&scenario_terms(), LoanStatus::Active, &payments, None);

        assert_eq!(summary.balance, dec("0"));
        assert_eq!(summary.emis_left, 0);
        assert!(summary.should_close);
    }

    #[test]
    fn test_evaluate_closed_loan_does_not_signal_again() {
        let payments = [payment(1, "132000")];
        let summary =
            evaluate(&scenario_terms(), LoanStatus::Closed, &payments, None);

        assert_eq!(summary.balance, dec("0"));
        assert!(!summary.should_close);
    }

    #[test]
    fn test_evaluate_is_order_independent() {
        let forward = [payment(1, "100.10"), payment(2, "2500"), payment(3, "7")];
        let backward = [payment(3, "7"), payment(2, "2500"), payment(1, "100.10")];

        assert_eq!(
            evaluate(&scenario_terms(), LoanStatus::Active, &forward, None),
            evaluate(&scenario_terms(), LoanStatus::Active, &backward, None),
        );
    }

    #[test]
    fn test_evaluate_without_emi_reports_no_installments() {
        let terms = LoanTerms {
            total_interest: dec("0"),
            total_amount: dec("0.01"),
            emi_amount: dec("0"),
        };
        let summary = evaluate(&terms, LoanStatus::Active, &[], None);

        assert_eq!(summary.balance.to_string(), "0.01");
        assert_eq!(summary.emis_left, 0);
        assert!(!summary.should_close);
    }

    #[test]
    fn test_evaluate_payments_never_raise_balance() {
        let terms = originate(&dec("75000"), &dec("9.5"), 3);
        let mut payments = vec![];
        let mut previous =
            evaluate(&terms, LoanStatus::Active, &payments, None);

        for (id, amount) in ["2000", "0.01", "15000.99", "40000", "60000"]
            .into_iter()
            .enumerate()
        {
            payments.push(payment(id as i64, amount));
            let current = evaluate(&terms, LoanStatus::Active, &payments, None);

            assert!(current.balance <= previous.balance);
            assert!(current.emis_left <= previous.emis_left);
            previous = current;
        }

        assert!(previous.should_close);
    }
}
