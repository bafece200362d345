use in_memory::repository::Repository;
use std::sync::Arc;
use use_cases::check_in::CheckInInteractor;
use use_cases::check_out::CheckOutInteractor;
use use_cases::clock::SystemClock;
use use_cases::reports::ParkingReportsInteractor;
use use_cases::{App, AppImpl};

mod sample_data;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared_kernel::tracing::config_telemetry("parking_demo")?;
    start().await
}

async fn start() -> anyhow::Result<()> {
    let repository = Repository::from_config()?;
    let app = AppImpl::new(repository, Arc::new(SystemClock));

    for vehicle in sample_data::vehicles()
        .into_iter()
        .chain([sample_data::late_arrival()])
    {
        match app.check_in().check_in(vehicle).await {
            Ok(outcome) if outcome.is_admitted() => println!("Welcome to AlkeParking!"),
            Ok(_) => println!("Sorry, the check-in failed"),
            Err(err) => {
                tracing::error!("Check-in could not be processed: {err:?}");
                println!("Sorry, the check-in failed")
            }
        }
    }

    for plate in ["CC333GG", "AA111CC", "A1111CC"] {
        let outcome = app.check_out().check_out(plate.to_string()).await?;
        match outcome.fee() {
            Some(fee) => println!("Your fee is {fee}. Come back soon."),
            None => println!("Sorry, the check-out failed"),
        }
    }

    let account = app.reports().show_account().await?;
    println!(
        "{} vehicles have checked out and have earnings of ${}",
        account.completed_checkouts(),
        account.total_earnings()
    );

    for plate in app.reports().list_vehicles().await? {
        println!("Vehicle plate is {plate}");
    }
    Ok(())
}
