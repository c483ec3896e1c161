pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod loan;
pub mod payments;
pub mod schedule;
pub mod service;
pub mod store;
pub mod types;

// re-export key types
pub use config::LoanApplication;
pub use decimal::Money;
pub use errors::{LoanError, Result};
pub use events::{Event, EventStore};
pub use loan::Loan;
pub use payments::{allocate, AllocationOutcome, PaymentReceipt};
pub use service::{LoanDetails, LoanService};
pub use store::{InMemoryLoanStore, InMemoryUserDirectory, LoanStore, UserDirectory};
pub use types::{
    AdminLoanSummary, Installment, InstallmentStatus, LoanId, LoanStatus, LoanSummary, UserId,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
