pub mod allocation;

use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::LoanId;

pub use allocation::{allocate, AllocationOutcome};

/// receipt returned to the caller after a repayment is recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub loan_id: LoanId,
    pub amount_received: Money,
    pub amount_applied: Money,
    /// overpayment handed back to the caller; never applied anywhere
    pub remainder: Money,
    pub outstanding_after: Money,
    pub fully_paid: bool,
}
