use std::collections::HashMap;
use std::sync::Mutex;

use crate::errors::{LoanError, Result};
use crate::loan::Loan;
use crate::types::LoanId;

/// durable keyed storage for loans
///
/// Persistence is an external collaborator; the engine only needs these
/// operations. `with_loan_mut` is the per-loan serialization boundary:
/// implementations must run the closure as an atomic read-modify-write for
/// that loan id, so two concurrent repayments against one loan cannot
/// interleave. Operations on distinct loans are independent.
pub trait LoanStore {
    fn insert(&self, loan: Loan) -> Result<()>;

    fn get(&self, id: LoanId) -> Result<Loan>;

    fn list_for_user(&self, user_id: &str) -> Result<Vec<Loan>>;

    fn list_all(&self) -> Result<Vec<Loan>>;

    /// atomically read, mutate, and persist one loan
    ///
    /// A closure error aborts the update; the engine validates before it
    /// mutates, so a failed call leaves the stored record unchanged.
    fn with_loan_mut<R, F>(&self, id: LoanId, f: F) -> Result<R>
    where
        F: FnOnce(&mut Loan) -> Result<R>;
}

/// read-only lookup of user display names, owned by the identity system
pub trait UserDirectory {
    fn display_name(&self, user_id: &str) -> Result<Option<String>>;
}

/// in-memory loan store for tests and demos
///
/// The map lock is held for the whole of `with_loan_mut`, which gives the
/// per-loan exclusivity the trait demands (coarser than required, but
/// correct).
#[derive(Debug, Default)]
pub struct InMemoryLoanStore {
    loans: Mutex<HashMap<LoanId, Loan>>,
}

impl InMemoryLoanStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, HashMap<LoanId, Loan>>> {
        self.loans.lock().map_err(|_| LoanError::Storage {
            message: "loan store lock poisoned".to_string(),
        })
    }
}

impl LoanStore for InMemoryLoanStore {
    fn insert(&self, loan: Loan) -> Result<()> {
        self.locked()?.insert(loan.id, loan);
        Ok(())
    }

    fn get(&self, id: LoanId) -> Result<Loan> {
        self.locked()?
            .get(&id)
            .cloned()
            .ok_or(LoanError::LoanNotFound { id })
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<Loan>> {
        Ok(self
            .locked()?
            .values()
            .filter(|loan| loan.user_id == user_id)
            .cloned()
            .collect())
    }

    fn list_all(&self) -> Result<Vec<Loan>> {
        Ok(self.locked()?.values().cloned().collect())
    }

    fn with_loan_mut<R, F>(&self, id: LoanId, f: F) -> Result<R>
    where
        F: FnOnce(&mut Loan) -> Result<R>,
    {
        let mut loans = self.locked()?;
        let loan = loans.get_mut(&id).ok_or(LoanError::LoanNotFound { id })?;
        f(loan)
    }
}

/// in-memory user directory for tests and demos
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    names: Mutex<HashMap<String, String>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, user_id: impl Into<String>, full_name: impl Into<String>) {
        if let Ok(mut names) = self.names.lock() {
            names.insert(user_id.into(), full_name.into());
        }
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn display_name(&self, user_id: &str) -> Result<Option<String>> {
        let names = self.names.lock().map_err(|_| LoanError::Storage {
            message: "user directory lock poisoned".to_string(),
        })?;
        Ok(names.get(user_id).cloned())
    }
}
