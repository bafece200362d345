use entities::vehicles::VehicleType;
use use_cases::check_in::VehicleInput;

const VEHICLES: [(&str, VehicleType, Option<&str>); 20] = [
    ("AA111AA", VehicleType::Car, Some("DISCOUNT_CARD_001")),
    ("B222BBB", VehicleType::Motorcycle, None),
    ("CC333CC", VehicleType::MiniBus, None),
    ("DD444DD", VehicleType::Bus, Some("DISCOUNT_CARD_002")),
    ("AA111BB", VehicleType::Car, Some("DISCOUNT_CARD_003")),
    ("B222CCC", VehicleType::Motorcycle, Some("DISCOUNT_CARD_004")),
    ("CC333DD", VehicleType::MiniBus, None),
    ("DD444EE", VehicleType::Bus, Some("DISCOUNT_CARD_005")),
    ("AA111CC", VehicleType::Car, None),
    ("B222DDD", VehicleType::Motorcycle, None),
    ("CC333EE", VehicleType::MiniBus, None),
    ("DD444GG", VehicleType::Bus, Some("DISCOUNT_CARD_006")),
    ("AA111DD", VehicleType::Car, Some("DISCOUNT_CARD_007")),
    ("B222EEE", VehicleType::Motorcycle, None),
    ("CC333FF", VehicleType::MiniBus, None),
    ("CC443FF", VehicleType::Motorcycle, None),
    ("A12345F", VehicleType::MiniBus, None),
    ("P00089", VehicleType::MiniBus, Some("DISCOUNT_CARD_010")),
    ("PR45234", VehicleType::MiniBus, None),
    ("IU89023", VehicleType::Car, Some("DISCOUNT_CARD_009")),
];

fn to_input((plate, vehicle_type, discount_card): (&str, VehicleType, Option<&str>)) -> VehicleInput {
    VehicleInput {
        plate: plate.to_string(),
        vehicle_type,
        discount_card: discount_card.map(str::to_string),
    }
}

pub fn vehicles() -> Vec<VehicleInput> {
    VEHICLES.into_iter().map(to_input).collect()
}

/// One vehicle past the default capacity of 20.
pub fn late_arrival() -> VehicleInput {
    to_input(("CC333GG", VehicleType::Car, None))
}
