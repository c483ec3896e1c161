/// quick start - minimal example to get started
use loan_servicing_rs::{
    InMemoryLoanStore, InMemoryUserDirectory, LoanApplication, LoanService, Money,
};
use loan_servicing_rs::{SafeTimeProvider, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::System);

    let users = InMemoryUserDirectory::new();
    users.register("user-1", "Asha Kumar");
    let mut service = LoanService::new(InMemoryLoanStore::new(), users);

    // borrow $1,000 over 4 weekly installments
    let loan_id = service.create_loan(
        "user-1",
        LoanApplication::new(Money::from_major(1_000), 4, "ABCDE1234F"),
        &time,
    )?;

    // admin approves
    service.update_loan_status(loan_id, "APPROVED", &time)?;

    // first repayment
    let receipt = service.record_repayment(loan_id, Money::from_major(250), &time)?;
    println!(
        "applied {} / outstanding {}",
        receipt.amount_applied, receipt.outstanding_after
    );

    Ok(())
}
