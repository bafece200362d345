use crate::fees::Amount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::date_time::TimeFrame;
use shared_kernel::non_empty_string;
use std::hash::{Hash, Hasher};

non_empty_string!(Plate);

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum VehicleType {
    Car,
    Motorcycle,
    MiniBus,
    Bus,
}

impl VehicleType {
    /// Charged for the first two hours, or any part of them.
    pub const fn hour_fee(&self) -> Amount {
        match self {
            VehicleType::Car => 20,
            VehicleType::Motorcycle => 15,
            VehicleType::MiniBus => 25,
            VehicleType::Bus => 30,
        }
    }
}

/// Only whether a card is presented matters for pricing, never its value.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct DiscountCard(String);

impl DiscountCard {
    pub fn inner(&self) -> String {
        self.0.clone()
    }
}

impl From<String> for DiscountCard {
    fn from(value: String) -> Self {
        DiscountCard(value)
    }
}

impl From<&str> for DiscountCard {
    fn from(value: &str) -> Self {
        DiscountCard(value.to_owned())
    }
}

impl AsRef<str> for DiscountCard {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A vehicle as handed to the lot at check-in. Two vehicles with the same
/// plate are the same vehicle, whatever the other fields say.
#[derive(Clone, Debug, Serialize)]
pub struct Vehicle {
    plate: Plate,
    vehicle_type: VehicleType,
    discount_card: Option<DiscountCard>,
    check_in_time: DateTime<Utc>,
}

impl Vehicle {
    pub fn new(
        plate: Plate,
        vehicle_type: VehicleType,
        discount_card: Option<DiscountCard>,
        check_in_time: DateTime<Utc>,
    ) -> Self {
        Self {
            plate,
            vehicle_type,
            discount_card,
            check_in_time,
        }
    }

    pub fn plate(&self) -> &Plate {
        &self.plate
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    pub fn discount_card(&self) -> Option<&DiscountCard> {
        self.discount_card.as_ref()
    }

    pub fn has_discount_card(&self) -> bool {
        self.discount_card.is_some()
    }

    pub fn check_in_time(&self) -> DateTime<Utc> {
        self.check_in_time
    }

    pub fn stay_until(&self, at: DateTime<Utc>) -> TimeFrame<DateTime<Utc>> {
        TimeFrame {
            from: self.check_in_time,
            to: at,
        }
    }

    pub fn parked_minutes(&self, at: DateTime<Utc>) -> i64 {
        self.stay_until(at).elapsed_minutes()
    }
}

impl PartialEq for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        self.plate == other.plate
    }
}

impl Eq for Vehicle {}

impl Hash for Vehicle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.plate.hash(state);
    }
}
