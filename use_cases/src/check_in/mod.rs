use crate::clock::Clock;
use async_trait::async_trait;
use entities::parking_lot::CheckInOutcome;
use entities::vehicles::{DiscountCard, Plate, Vehicle, VehicleType};
#[cfg(test)]
use mockall::automock;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct VehicleInput {
    pub plate: String,
    pub vehicle_type: VehicleType,
    pub discount_card: Option<String>,
}

#[derive(Error, Debug)]
pub enum CheckInError {
    #[error("Invalid vehicle: {0}")]
    InvalidVehicle(String),
    #[error("Internal error")]
    InternalError(#[from] anyhow::Error),
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CheckInRepo: Send + Sync {
    async fn check_in(&self, vehicle: Vehicle) -> anyhow::Result<CheckInOutcome>;
}

#[async_trait]
pub trait CheckInInteractor: Send + Sync {
    async fn check_in(&self, vehicle: VehicleInput) -> Result<CheckInOutcome, CheckInError>;
}

pub struct CheckInInteractorImpl {
    repo: Arc<dyn CheckInRepo>,
    clock: Arc<dyn Clock>,
}

impl CheckInInteractorImpl {
    pub fn new(repo: Arc<dyn CheckInRepo>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

#[async_trait]
impl CheckInInteractor for CheckInInteractorImpl {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn check_in(&self, vehicle: VehicleInput) -> Result<CheckInOutcome, CheckInError> {
        let plate = Plate::try_from(vehicle.plate)
            .map_err(|err| CheckInError::InvalidVehicle(format!("plate {err}")))?;
        let vehicle = Vehicle::new(
            plate,
            vehicle.vehicle_type,
            vehicle.discount_card.map(DiscountCard::from),
            self.clock.now(),
        );

        let outcome = self.repo.check_in(vehicle).await?;
        match outcome {
            CheckInOutcome::Admitted => tracing::info!("Vehicle admitted"),
            CheckInOutcome::Rejected => tracing::info!("Vehicle turned away"),
        }
        Ok(outcome)
    }
}
