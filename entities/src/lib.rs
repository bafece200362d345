pub mod fees;
pub mod parking_lot;
pub mod vehicles;
