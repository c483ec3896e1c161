use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::LoanError;

/// unique identifier for a loan
pub type LoanId = Uuid;

/// opaque reference to the borrowing user, validated upstream
pub type UserId = String;

/// loan status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanStatus {
    /// created, awaiting admin review
    Pending,
    /// approved by an admin
    Approved,
    /// every scheduled installment settled
    Paid,
    /// rejected by an admin
    Rejected,
}

impl LoanStatus {
    fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Pending => "PENDING",
            LoanStatus::Approved => "APPROVED",
            LoanStatus::Paid => "PAID",
            LoanStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// admin status updates arrive as raw strings; anything outside the four
/// enumerated values is rejected before any loan is touched
impl FromStr for LoanStatus {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(LoanStatus::Pending),
            "APPROVED" => Ok(LoanStatus::Approved),
            "PAID" => Ok(LoanStatus::Paid),
            "REJECTED" => Ok(LoanStatus::Rejected),
            other => Err(LoanError::InvalidStatusValue {
                value: other.to_string(),
            }),
        }
    }
}

/// scheduled installment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstallmentStatus {
    /// nothing allocated yet
    Pending,
    /// some but not all of the original amount allocated
    PartiallyPaid,
    /// settled in full
    Paid,
}

/// scheduled installment
///
/// `amount_due` holds what is still owed on this installment and only ever
/// decreases; `amount_due == 0` exactly when `status == Paid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    pub due_date: NaiveDate,
    pub amount_due: Money,
    pub status: InstallmentStatus,
}

impl Installment {
    pub fn new(due_date: NaiveDate, amount_due: Money) -> Self {
        Self {
            due_date,
            amount_due,
            status: InstallmentStatus::Pending,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.status == InstallmentStatus::Paid
    }
}

/// borrower-facing loan listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub id: LoanId,
    pub principal: Money,
    pub status: LoanStatus,
    pub amount_outstanding: Money,
}

/// admin-facing loan listing entry, joined with the borrower's name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminLoanSummary {
    pub id: LoanId,
    pub principal: Money,
    pub term: u32,
    pub status: LoanStatus,
    pub borrower_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_enumerated_values() {
        assert_eq!("PENDING".parse::<LoanStatus>().unwrap(), LoanStatus::Pending);
        assert_eq!("APPROVED".parse::<LoanStatus>().unwrap(), LoanStatus::Approved);
        assert_eq!("PAID".parse::<LoanStatus>().unwrap(), LoanStatus::Paid);
        assert_eq!("REJECTED".parse::<LoanStatus>().unwrap(), LoanStatus::Rejected);
    }

    #[test]
    fn test_status_rejects_unknown_values() {
        let err = "CANCELLED".parse::<LoanStatus>().unwrap_err();
        assert!(matches!(
            err,
            LoanError::InvalidStatusValue { value } if value == "CANCELLED"
        ));

        // parsing is case-sensitive, matching the original admin api
        assert!("approved".parse::<LoanStatus>().is_err());
    }

    #[test]
    fn test_status_serde_forms() {
        let json = serde_json::to_string(&InstallmentStatus::PartiallyPaid).unwrap();
        assert_eq!(json, "\"PARTIALLY_PAID\"");
        let back: InstallmentStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, InstallmentStatus::PartiallyPaid);
    }
}
