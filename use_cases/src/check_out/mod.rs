use crate::clock::Clock;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entities::parking_lot::CheckOutOutcome;
use entities::vehicles::Plate;
#[cfg(test)]
use mockall::automock;
use std::sync::Arc;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CheckOutRepo: Send + Sync {
    /// Charges and removes the vehicle in a single step, as of `at`.
    async fn check_out(&self, plate: Plate, at: DateTime<Utc>) -> anyhow::Result<CheckOutOutcome>;
}

#[async_trait]
pub trait CheckOutInteractor: Send + Sync {
    async fn check_out(&self, plate: String) -> anyhow::Result<CheckOutOutcome>;
}

pub struct CheckOutInteractorImpl {
    repo: Arc<dyn CheckOutRepo>,
    clock: Arc<dyn Clock>,
}

impl CheckOutInteractorImpl {
    pub fn new(repo: Arc<dyn CheckOutRepo>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

#[async_trait]
impl CheckOutInteractor for CheckOutInteractorImpl {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn check_out(&self, plate: String) -> anyhow::Result<CheckOutOutcome> {
        // An empty plate can never have been admitted.
        let Ok(plate) = Plate::try_from(plate) else {
            return Ok(CheckOutOutcome::NotFound);
        };

        let outcome = self.repo.check_out(plate, self.clock.now()).await?;
        match &outcome {
            CheckOutOutcome::CheckedOut(receipt) => tracing::info!(
                fee = receipt.fee,
                parked_minutes = receipt.parked_minutes,
                discount_applied = receipt.discount_applied,
                "Vehicle checked out"
            ),
            CheckOutOutcome::NotFound => tracing::info!("No such vehicle is parked"),
        }
        Ok(outcome)
    }
}
