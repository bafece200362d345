use crate::vehicles::VehicleType;

pub type Amount = u64;

/// Stays up to this long pay the flat hourly fee.
const FLAT_RATE_MINUTES: i64 = 120;
const BLOCK_MINUTES: i64 = 15;
const DISCOUNTED_PERCENT: Amount = 85;

/// Amount due for a stay of `parked_minutes`.
///
/// The first two hours cost `hour_fee`. Every started 15 minute block after
/// that adds a quarter of `hour_fee`, truncated. A discount card takes 15% off,
/// rounded down. Zero or negative durations pay the flat fee.
pub fn calculate_fee(
    vehicle_type: VehicleType,
    parked_minutes: i64,
    has_discount_card: bool,
) -> Amount {
    let hour_fee = vehicle_type.hour_fee();
    let base = if parked_minutes <= FLAT_RATE_MINUTES {
        hour_fee
    } else {
        let excess_minutes = parked_minutes - FLAT_RATE_MINUTES;
        let blocks = (excess_minutes + BLOCK_MINUTES - 1) / BLOCK_MINUTES;
        hour_fee.saturating_add((blocks as Amount).saturating_mul(hour_fee / 4))
    };

    if has_discount_card {
        apply_discount(base)
    } else {
        base
    }
}

// floor(amount * 0.85) without going through floats or overflowing.
fn apply_discount(amount: Amount) -> Amount {
    amount / 100 * DISCOUNTED_PERCENT + amount % 100 * DISCOUNTED_PERCENT / 100
}
