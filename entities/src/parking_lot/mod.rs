mod account;

pub use account::Account;

use crate::fees::{calculate_fee, Amount};
use crate::vehicles::{Plate, Vehicle, VehicleType};
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared_kernel::date_time::TimeFrame;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("parking capacity must be greater than zero")]
pub struct CapacityError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Capacity(NonZeroUsize);

impl Capacity {
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for Capacity {
    type Error = CapacityError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(value).map(Capacity).ok_or(CapacityError)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CheckInOutcome {
    Admitted,
    Rejected,
}

impl CheckInOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(self, CheckInOutcome::Admitted)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Receipt {
    pub plate: Plate,
    pub vehicle_type: VehicleType,
    pub stay: TimeFrame<DateTime<Utc>>,
    pub parked_minutes: i64,
    pub discount_applied: bool,
    pub fee: Amount,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CheckOutOutcome {
    CheckedOut(Receipt),
    NotFound,
}

impl CheckOutOutcome {
    pub fn fee(&self) -> Option<Amount> {
        match self {
            CheckOutOutcome::CheckedOut(receipt) => Some(receipt.fee),
            CheckOutOutcome::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.fee().is_some()
    }
}

/// The set of parked vehicles, keyed by plate, and the lot's takings.
///
/// Occupancy never exceeds the capacity given at construction.
#[derive(Debug)]
pub struct ParkingLot {
    capacity: Capacity,
    vehicles: HashMap<Plate, Vehicle>,
    account: Account,
}

impl ParkingLot {
    pub fn new(capacity: Capacity) -> Self {
        Self {
            capacity,
            vehicles: HashMap::new(),
            account: Account::default(),
        }
    }

    /// Admits the vehicle unless the lot is full. A plate that is already
    /// parked is admitted again without touching the stored record.
    pub fn check_in(&mut self, vehicle: Vehicle) -> CheckInOutcome {
        let already_parked = self.vehicles.contains_key(vehicle.plate());
        if self.vehicles.len() >= self.capacity.get() && !already_parked {
            tracing::info!(
                plate = %vehicle.plate(),
                capacity = self.capacity.get(),
                "Lot is full, vehicle rejected"
            );
            return CheckInOutcome::Rejected;
        }

        if already_parked {
            tracing::info!(plate = %vehicle.plate(), "Vehicle is already parked");
        }
        self.vehicles
            .entry(vehicle.plate().clone())
            .or_insert(vehicle);
        CheckInOutcome::Admitted
    }

    /// Charges and removes the vehicle with `plate`, as of `at`.
    pub fn check_out(&mut self, plate: &str, at: DateTime<Utc>) -> CheckOutOutcome {
        let Some(vehicle) = self.vehicles.remove(plate) else {
            return CheckOutOutcome::NotFound;
        };

        let stay = vehicle.stay_until(at);
        let parked_minutes = stay.elapsed_minutes();
        if parked_minutes < 0 {
            tracing::warn!(
                plate = %vehicle.plate(),
                parked_minutes,
                "Checkout is earlier than check-in, charging the flat fee"
            );
        }
        let discount_applied = vehicle.has_discount_card();
        let fee = calculate_fee(vehicle.vehicle_type(), parked_minutes, discount_applied);
        self.account.record_checkout(fee);

        CheckOutOutcome::CheckedOut(Receipt {
            plate: vehicle.plate().clone(),
            vehicle_type: vehicle.vehicle_type(),
            stay,
            parked_minutes,
            discount_applied,
            fee,
        })
    }

    pub fn account(&self) -> Account {
        self.account
    }

    pub fn plates(&self) -> Vec<Plate> {
        self.vehicles.keys().cloned().collect()
    }

    pub fn is_parked(&self, plate: &str) -> bool {
        self.vehicles.contains_key(plate)
    }

    pub fn occupancy(&self) -> usize {
        self.vehicles.len()
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }
}
