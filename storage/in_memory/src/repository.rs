use crate::configuration::Settings;
use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entities::parking_lot::{Account, Capacity, CheckInOutcome, CheckOutOutcome, ParkingLot};
use entities::vehicles::{Plate, Vehicle};
use std::sync::Arc;
use tokio::sync::Mutex;
use use_cases::check_in::CheckInRepo;
use use_cases::check_out::CheckOutRepo;
use use_cases::reports::ParkingReportsRepo;

/// Owns the lot. Each operation runs as one critical section with no await
/// point inside, so capacity checks and checkouts cannot interleave.
#[derive(Clone)]
pub struct Repository {
    lot: Arc<Mutex<ParkingLot>>,
}

impl Repository {
    pub fn new(capacity: Capacity) -> Self {
        Self {
            lot: Arc::new(Mutex::new(ParkingLot::new(capacity))),
        }
    }

    pub fn from_config() -> anyhow::Result<Self> {
        Self::from_settings(&Settings::parse()?)
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let capacity = Capacity::try_from(settings.parking.capacity)
            .context("Invalid parking configuration")?;
        tracing::info!(capacity = capacity.get(), "Parking lot opened");
        Ok(Self::new(capacity))
    }

    pub async fn occupancy(&self) -> usize {
        self.lot.lock().await.occupancy()
    }
}

#[async_trait]
impl CheckInRepo for Repository {
    async fn check_in(&self, vehicle: Vehicle) -> anyhow::Result<CheckInOutcome> {
        Ok(self.lot.lock().await.check_in(vehicle))
    }
}

#[async_trait]
impl CheckOutRepo for Repository {
    async fn check_out(&self, plate: Plate, at: DateTime<Utc>) -> anyhow::Result<CheckOutOutcome> {
        Ok(self.lot.lock().await.check_out(plate.as_ref(), at))
    }
}

#[async_trait]
impl ParkingReportsRepo for Repository {
    async fn account(&self) -> anyhow::Result<Account> {
        Ok(self.lot.lock().await.account())
    }

    async fn parked_plates(&self) -> anyhow::Result<Vec<Plate>> {
        Ok(self.lot.lock().await.plates())
    }
}
