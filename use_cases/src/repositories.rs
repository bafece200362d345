use crate::check_in::CheckInRepo;
use crate::check_out::CheckOutRepo;
use crate::reports::ParkingReportsRepo;

pub trait Repository: CheckInRepo + CheckOutRepo + ParkingReportsRepo + Clone {}

impl<T> Repository for T where T: Clone + CheckInRepo + CheckOutRepo + ParkingReportsRepo {}
