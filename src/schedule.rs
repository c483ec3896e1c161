use chrono::{Duration, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::types::Installment;

/// days between consecutive installments, fixed by the product
pub const INSTALLMENT_INTERVAL_DAYS: i64 = 7;

/// generate the weekly repayment schedule for a new loan
///
/// Produces exactly `term` installments, the first due on `start_date` and
/// each subsequent one 7 days after the previous. The principal is split
/// evenly, rounded down to the cent; the remainder cents land on the final
/// installment, so the schedule always sums to the principal exactly and no
/// installment can go negative.
///
/// Pure: deterministic for a given `start_date`, no wall-clock access.
pub fn generate(principal: Money, term: u32, start_date: NaiveDate) -> Result<Vec<Installment>> {
    if principal <= Money::ZERO || term == 0 {
        return Err(LoanError::InvalidLoanParameters { principal, term });
    }

    let per_installment = Money::from_decimal(
        (principal.as_decimal() / Decimal::from(term))
            .round_dp_with_strategy(2, RoundingStrategy::ToZero),
    );

    let mut schedule = Vec::with_capacity(term as usize);
    for i in 0..term {
        let amount = if i + 1 == term {
            // final installment absorbs the rounding remainder
            principal - per_installment * Decimal::from(term - 1)
        } else {
            per_installment
        };
        let due_date = start_date + Duration::days(INSTALLMENT_INTERVAL_DAYS * i as i64);
        schedule.push(Installment::new(due_date, amount));
    }

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InstallmentStatus;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_even_split_weekly_schedule() {
        let schedule = generate(Money::from_major(1_000), 4, date(2024, 1, 1)).unwrap();

        assert_eq!(schedule.len(), 4);
        for installment in &schedule {
            assert_eq!(installment.amount_due, Money::from_major(250));
            assert_eq!(installment.status, InstallmentStatus::Pending);
        }
        assert_eq!(schedule[0].due_date, date(2024, 1, 1));
        assert_eq!(schedule[1].due_date, date(2024, 1, 8));
        assert_eq!(schedule[2].due_date, date(2024, 1, 15));
        assert_eq!(schedule[3].due_date, date(2024, 1, 22));
    }

    #[test]
    fn test_remainder_cents_land_on_final_installment() {
        let schedule = generate(Money::from_major(1_000), 3, date(2024, 1, 1)).unwrap();

        assert_eq!(schedule[0].amount_due, Money::from_str_exact("333.33").unwrap());
        assert_eq!(schedule[1].amount_due, Money::from_str_exact("333.33").unwrap());
        assert_eq!(schedule[2].amount_due, Money::from_str_exact("333.34").unwrap());
    }

    #[test]
    fn test_single_installment_term() {
        let schedule = generate(Money::from_major(500), 1, date(2024, 6, 3)).unwrap();

        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].amount_due, Money::from_major(500));
        assert_eq!(schedule[0].due_date, date(2024, 6, 3));
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(matches!(
            generate(Money::from_major(-5), 4, date(2024, 1, 1)),
            Err(LoanError::InvalidLoanParameters { .. })
        ));
        assert!(generate(Money::ZERO, 4, date(2024, 1, 1)).is_err());
        assert!(generate(Money::from_major(1_000), 0, date(2024, 1, 1)).is_err());
    }

    proptest! {
        #[test]
        fn prop_schedule_sums_to_principal(cents in 1i64..=100_000_000, term in 1u32..=120) {
            let principal = Money::from_minor(cents, 2);
            let schedule = generate(principal, term, date(2024, 1, 1)).unwrap();

            prop_assert_eq!(schedule.len(), term as usize);

            let total = schedule
                .iter()
                .map(|i| i.amount_due)
                .fold(Money::ZERO, |acc, x| acc + x);
            prop_assert_eq!(total, principal);
            prop_assert!(schedule.iter().all(|i| !i.amount_due.is_negative()));
        }

        #[test]
        fn prop_due_dates_spaced_seven_days(term in 1u32..=120) {
            let schedule = generate(Money::from_major(10_000), term, date(2024, 1, 1)).unwrap();

            prop_assert_eq!(schedule[0].due_date, date(2024, 1, 1));
            for pair in schedule.windows(2) {
                prop_assert_eq!(pair[1].due_date - pair[0].due_date, Duration::days(7));
            }
        }
    }
}
