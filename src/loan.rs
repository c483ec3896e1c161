use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::LoanApplication;
use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::events::{Event, EventStore};
use crate::payments::{allocate, AllocationOutcome};
use crate::schedule;
use crate::types::{Installment, LoanId, LoanStatus, LoanSummary, UserId};

/// loan aggregate
///
/// The serde form of this struct is the persisted state shape: the store
/// reads and writes whole `Loan` records. The schedule is created together
/// with the loan and is never reordered or resized afterwards; installments
/// are mutated only through `receive_payment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub user_id: UserId,
    pub principal: Money,
    pub term: u32,
    pub pan_number: String,
    pub schedule: Vec<Installment>,
    pub status: LoanStatus,
}

impl Loan {
    /// create a new loan with its repayment schedule
    pub fn originate(
        user_id: UserId,
        application: &LoanApplication,
        start_date: NaiveDate,
    ) -> Result<Self> {
        application.validate()?;
        let schedule = schedule::generate(application.principal, application.term, start_date)?;

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            principal: application.principal,
            term: application.term,
            pan_number: application.pan_number.clone(),
            schedule,
            status: LoanStatus::Pending,
        })
    }

    /// sum of what is still owed across the schedule
    pub fn amount_outstanding(&self) -> Money {
        self.schedule
            .iter()
            .map(|i| i.amount_due)
            .fold(Money::ZERO, |acc, x| acc + x)
    }

    pub fn is_fully_paid(&self) -> bool {
        self.schedule.iter().all(Installment::is_paid)
    }

    /// overwrite the status
    ///
    /// Transitions are unrestricted among the four enumerated values; admin
    /// calls may move a loan out of Paid or Rejected. Returns the previous
    /// status.
    pub fn set_status(&mut self, new_status: LoanStatus) -> LoanStatus {
        std::mem::replace(&mut self.status, new_status)
    }

    /// apply a repayment to the schedule
    ///
    /// Delegates to the allocator, then recomputes the aggregate status:
    /// settling the last installment forces `Paid`; partial progress leaves
    /// the status untouched. Rejected without mutation when the loan is
    /// already settled.
    pub fn receive_payment(
        &mut self,
        amount: Money,
        now: DateTime<Utc>,
        events: &mut EventStore,
    ) -> Result<AllocationOutcome> {
        if self.status == LoanStatus::Paid {
            return Err(LoanError::LoanAlreadyPaid);
        }

        let paid_before: Vec<bool> = self.schedule.iter().map(Installment::is_paid).collect();
        let outcome = allocate(&mut self.schedule, amount)?;

        events.emit(Event::PaymentReceived {
            loan_id: self.id,
            amount,
            applied: outcome.applied,
            remainder: outcome.remainder,
            timestamp: now,
        });

        for (installment, was_paid) in self.schedule.iter().zip(paid_before) {
            if installment.is_paid() && !was_paid {
                events.emit(Event::InstallmentSettled {
                    loan_id: self.id,
                    due_date: installment.due_date,
                    timestamp: now,
                });
            }
        }

        if outcome.fully_paid {
            let old_status = self.set_status(LoanStatus::Paid);
            events.emit(Event::StatusChanged {
                loan_id: self.id,
                old_status,
                new_status: LoanStatus::Paid,
                timestamp: now,
            });
            events.emit(Event::LoanSettled {
                loan_id: self.id,
                timestamp: now,
            });
        }

        Ok(outcome)
    }

    pub fn summary(&self) -> LoanSummary {
        LoanSummary {
            id: self.id,
            principal: self.principal,
            status: self.status,
            amount_outstanding: self.amount_outstanding(),
        }
    }
}
