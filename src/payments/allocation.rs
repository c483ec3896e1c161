use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::types::{Installment, InstallmentStatus};

/// result of allocating one payment across a schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationOutcome {
    /// portion of the payment absorbed by the schedule
    pub applied: Money,
    /// portion left over after every installment was settled (overpayment)
    pub remainder: Money,
    /// true iff every installment is paid after this allocation
    pub fully_paid: bool,
}

/// allocate a payment across the schedule, oldest installment first
///
/// Walks the schedule in order, skipping settled installments. Each
/// installment is paid down in full if the remaining amount covers it, or
/// partially (leaving it `PartiallyPaid`) if not; allocation stops as soon as
/// the remaining amount hits zero. Whatever survives the whole schedule is
/// returned as `remainder` — the caller decides what to do with an
/// overpayment.
///
/// Mutates the supplied installments in place; touches nothing else. A
/// negative amount or an already-settled schedule is rejected before any
/// mutation.
pub fn allocate(schedule: &mut [Installment], amount: Money) -> Result<AllocationOutcome> {
    if amount.is_negative() {
        return Err(LoanError::InvalidPaymentAmount { amount });
    }
    if schedule.iter().all(Installment::is_paid) {
        return Err(LoanError::LoanAlreadyPaid);
    }

    let mut remaining = amount;
    for installment in schedule.iter_mut() {
        if installment.is_paid() {
            continue;
        }
        if remaining >= installment.amount_due {
            remaining -= installment.amount_due;
            installment.amount_due = Money::ZERO;
            installment.status = InstallmentStatus::Paid;
        } else if remaining.is_zero() {
            break;
        } else {
            installment.amount_due -= remaining;
            installment.status = InstallmentStatus::PartiallyPaid;
            remaining = Money::ZERO;
            break;
        }
    }

    Ok(AllocationOutcome {
        applied: amount - remaining,
        remainder: remaining,
        fully_paid: schedule.iter().all(Installment::is_paid),
    })
}
