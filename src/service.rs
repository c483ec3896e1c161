use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::config::LoanApplication;
use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::events::{Event, EventStore};
use crate::loan::Loan;
use crate::payments::PaymentReceipt;
use crate::store::{LoanStore, UserDirectory};
use crate::types::{AdminLoanSummary, LoanId, LoanStatus, LoanSummary};

/// single loan joined with the borrower's display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanDetails {
    pub loan: Loan,
    pub borrower_name: String,
}

/// orchestration layer over the loan engine
///
/// Every operation is fetch, pure call, persist. Mutating operations run
/// inside the store's per-loan serialization boundary, which upholds the
/// at-most-one-concurrent-mutation rule the engine requires.
pub struct LoanService<S, U> {
    store: S,
    users: U,
    events: EventStore,
}

impl<S: LoanStore, U: UserDirectory> LoanService<S, U> {
    pub fn new(store: S, users: U) -> Self {
        Self {
            store,
            users,
            events: EventStore::new(),
        }
    }

    /// create a loan for a user, scheduling repayments from today
    pub fn create_loan(
        &mut self,
        user_id: &str,
        application: LoanApplication,
        time: &SafeTimeProvider,
    ) -> Result<LoanId> {
        let now = time.now();
        let loan = Loan::originate(user_id.to_string(), &application, now.date_naive())?;
        let loan_id = loan.id;
        self.store.insert(loan)?;

        self.events.emit(Event::LoanOriginated {
            loan_id,
            user_id: user_id.to_string(),
            principal: application.principal,
            term: application.term,
            timestamp: now,
        });

        Ok(loan_id)
    }

    pub fn loan(&self, id: LoanId) -> Result<Loan> {
        self.store.get(id)
    }

    /// loan joined with the borrower's display name
    pub fn loan_details(&self, id: LoanId) -> Result<LoanDetails> {
        let loan = self.store.get(id)?;
        let borrower_name = self
            .users
            .display_name(&loan.user_id)?
            .ok_or_else(|| LoanError::UserNotFound {
                id: loan.user_id.clone(),
            })?;

        Ok(LoanDetails {
            loan,
            borrower_name,
        })
    }

    /// borrower-facing listing with the amount left on each loan
    pub fn loans_for_user(&self, user_id: &str) -> Result<Vec<LoanSummary>> {
        Ok(self
            .store
            .list_for_user(user_id)?
            .iter()
            .map(Loan::summary)
            .collect())
    }

    /// admin listing across all borrowers
    pub fn all_loans(&self) -> Result<Vec<AdminLoanSummary>> {
        let mut summaries = Vec::new();
        for loan in self.store.list_all()? {
            let borrower_name = self
                .users
                .display_name(&loan.user_id)?
                .ok_or_else(|| LoanError::UserNotFound {
                    id: loan.user_id.clone(),
                })?;
            summaries.push(AdminLoanSummary {
                id: loan.id,
                principal: loan.principal,
                term: loan.term,
                status: loan.status,
                borrower_name,
            });
        }
        Ok(summaries)
    }

    /// admin status update
    ///
    /// The target arrives as a raw string and is parsed before the store is
    /// touched; anything outside the four enumerated values is rejected.
    pub fn update_loan_status(
        &mut self,
        id: LoanId,
        new_status: &str,
        time: &SafeTimeProvider,
    ) -> Result<()> {
        let new_status: LoanStatus = new_status.parse()?;
        let now = time.now();

        let old_status = self
            .store
            .with_loan_mut(id, |loan| Ok(loan.set_status(new_status)))?;

        if old_status != new_status {
            self.events.emit(Event::StatusChanged {
                loan_id: id,
                old_status,
                new_status,
                timestamp: now,
            });
        }

        Ok(())
    }

    /// record a repayment against a loan
    pub fn record_repayment(
        &mut self,
        id: LoanId,
        amount: Money,
        time: &SafeTimeProvider,
    ) -> Result<PaymentReceipt> {
        let now = time.now();
        let events = &mut self.events;
        self.store.with_loan_mut(id, |loan| {
            let outcome = loan.receive_payment(amount, now, events)?;
            Ok(PaymentReceipt {
                loan_id: id,
                amount_received: amount,
                amount_applied: outcome.applied,
                remainder: outcome.remainder,
                outstanding_after: loan.amount_outstanding(),
                fully_paid: outcome.fully_paid,
            })
        })
    }

    /// drain the events collected by the operations so far
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }
}
