use crate::check_in::{CheckInInteractor, CheckInInteractorImpl};
use crate::check_out::{CheckOutInteractor, CheckOutInteractorImpl};
use crate::clock::Clock;
use crate::reports::{ParkingReportsInteractor, ParkingReportsInteractorImpl};
use crate::repositories::Repository;
use std::sync::Arc;

pub mod check_in;
pub mod check_out;
pub mod clock;
pub mod reports;
mod repositories;

pub trait App {
    fn check_in(&self) -> &dyn CheckInInteractor;
    fn check_out(&self) -> &dyn CheckOutInteractor;
    fn reports(&self) -> &dyn ParkingReportsInteractor;
}

pub struct AppImpl {
    check_in: Arc<dyn CheckInInteractor>,
    check_out: Arc<dyn CheckOutInteractor>,
    reports: Arc<dyn ParkingReportsInteractor>,
}

impl App for AppImpl {
    fn check_in(&self) -> &dyn CheckInInteractor {
        self.check_in.as_ref()
    }

    fn check_out(&self) -> &dyn CheckOutInteractor {
        self.check_out.as_ref()
    }

    fn reports(&self) -> &dyn ParkingReportsInteractor {
        self.reports.as_ref()
    }
}

impl AppImpl {
    pub fn new<R: Repository + 'static>(repo: R, clock: Arc<dyn Clock>) -> Self {
        let repository = Arc::new(repo);
        let check_in = CheckInInteractorImpl::new(repository.clone(), clock.clone());
        let check_out = CheckOutInteractorImpl::new(repository.clone(), clock);
        let reports = ParkingReportsInteractorImpl::new(repository);

        Self {
            check_in: Arc::new(check_in),
            check_out: Arc::new(check_out),
            reports: Arc::new(reports),
        }
    }
}
