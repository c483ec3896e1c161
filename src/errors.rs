use thiserror::Error;

use crate::decimal::Money;
use crate::types::LoanId;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("invalid loan parameters: principal {principal}, term {term}")]
    InvalidLoanParameters {
        principal: Money,
        term: u32,
    },

    #[error("invalid payment amount: {amount}")]
    InvalidPaymentAmount {
        amount: Money,
    },

    #[error("invalid status value: {value}")]
    InvalidStatusValue {
        value: String,
    },

    #[error("loan already marked as paid")]
    LoanAlreadyPaid,

    #[error("loan not found: {id}")]
    LoanNotFound {
        id: LoanId,
    },

    #[error("user not found: {id}")]
    UserNotFound {
        id: String,
    },

    #[error("storage failure: {message}")]
    Storage {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, LoanError>;
