use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{LoanError, Result};

/// loan creation request
///
/// Validated up front; a request that fails validation never reaches the
/// store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanApplication {
    /// amount borrowed, repaid in equal weekly installments
    pub principal: Money,
    /// number of weekly installments
    pub term: u32,
    /// opaque identity string supplied by the borrower
    pub pan_number: String,
}

impl LoanApplication {
    pub fn new(principal: Money, term: u32, pan_number: impl Into<String>) -> Self {
        Self {
            principal,
            term,
            pan_number: pan_number.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.principal <= Money::ZERO || self.term == 0 {
            return Err(LoanError::InvalidLoanParameters {
                principal: self.principal,
                term: self.term,
            });
        }
        Ok(())
    }
}
