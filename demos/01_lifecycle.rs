/// full lifecycle - origination, approval, repayments, settlement
///
/// Runs on test time so the schedule dates are reproducible, and prints the
/// persisted loan shape plus the events each step emitted.
use loan_servicing_rs::chrono::{TimeZone, Utc};
use loan_servicing_rs::{
    InMemoryLoanStore, InMemoryUserDirectory, LoanApplication, LoanService, Money,
};
use loan_servicing_rs::{SafeTimeProvider, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
    ));

    let users = InMemoryUserDirectory::new();
    users.register("user-1", "Asha Kumar");
    let mut service = LoanService::new(InMemoryLoanStore::new(), users);

    let loan_id = service.create_loan(
        "user-1",
        LoanApplication::new(Money::from_major(1_000), 4, "ABCDE1234F"),
        &time,
    )?;
    println!("== created loan {loan_id}");

    service.update_loan_status(loan_id, "APPROVED", &time)?;

    // a short payment, then one that clears the rest with change left over
    for amount in [Money::from_major(375), Money::from_major(700)] {
        let receipt = service.record_repayment(loan_id, amount, &time)?;
        println!(
            "== paid {amount}: applied {}, remainder {}, outstanding {}",
            receipt.amount_applied, receipt.remainder, receipt.outstanding_after
        );
    }

    let details = service.loan_details(loan_id)?;
    println!("== borrower: {}", details.borrower_name);
    println!("{}", serde_json::to_string_pretty(&details.loan)?);

    for event in service.take_events() {
        println!("event: {event:?}");
    }

    Ok(())
}
