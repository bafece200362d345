use crate::fees::Amount;
use serde::Serialize;

/// Running totals of the lot, only ever moved forward by a checkout.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Account {
    completed_checkouts: u64,
    total_earnings: Amount,
}

impl Account {
    pub fn completed_checkouts(&self) -> u64 {
        self.completed_checkouts
    }

    pub fn total_earnings(&self) -> Amount {
        self.total_earnings
    }

    pub(crate) fn record_checkout(&mut self, fee: Amount) {
        self.completed_checkouts = self.completed_checkouts.saturating_add(1);
        self.total_earnings = self.total_earnings.saturating_add(fee);
    }
}
