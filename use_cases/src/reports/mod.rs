use async_trait::async_trait;
use entities::parking_lot::Account;
use entities::vehicles::Plate;
#[cfg(test)]
use mockall::automock;
use std::sync::Arc;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ParkingReportsRepo: Send + Sync {
    async fn account(&self) -> anyhow::Result<Account>;

    async fn parked_plates(&self) -> anyhow::Result<Vec<Plate>>;
}

#[async_trait]
pub trait ParkingReportsInteractor: Send + Sync {
    async fn show_account(&self) -> anyhow::Result<Account>;

    /// Plates of every parked vehicle, in no particular order.
    async fn list_vehicles(&self) -> anyhow::Result<Vec<Plate>>;
}

pub struct ParkingReportsInteractorImpl {
    repo: Arc<dyn ParkingReportsRepo>,
}

impl ParkingReportsInteractorImpl {
    pub fn new(repo: Arc<dyn ParkingReportsRepo>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ParkingReportsInteractor for ParkingReportsInteractorImpl {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn show_account(&self) -> anyhow::Result<Account> {
        self.repo.account().await
    }

    #[tracing::instrument(err, skip(self), level = "info")]
    async fn list_vehicles(&self) -> anyhow::Result<Vec<Plate>> {
        self.repo.parked_plates().await
    }
}

#[cfg(test)]
mod tests {
    use crate::reports::{
        MockParkingReportsRepo, ParkingReportsInteractor, ParkingReportsInteractorImpl,
    };
    use entities::parking_lot::Account;
    use entities::vehicles::Plate;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_account_comes_from_the_repository() {
        let mut mock_repo = MockParkingReportsRepo::new();
        mock_repo
            .expect_account()
            .times(1)
            .returning(|| Ok(Account::default()));
        let interactor = ParkingReportsInteractorImpl::new(Arc::new(mock_repo));

        let account = interactor.show_account().await.unwrap();

        assert_eq!(account.completed_checkouts(), 0);
        assert_eq!(account.total_earnings(), 0);
    }

    #[tokio::test]
    async fn test_listing_returns_every_parked_plate() {
        let mut mock_repo = MockParkingReportsRepo::new();
        mock_repo.expect_parked_plates().returning(|| {
            ["AA111AA", "B222BBB"]
                .into_iter()
                .map(Plate::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map_err(anyhow::Error::from)
        });
        let interactor = ParkingReportsInteractorImpl::new(Arc::new(mock_repo));

        let plates = interactor.list_vehicles().await.unwrap();

        assert_eq!(plates.len(), 2);
        assert!(plates.iter().any(|plate| plate == "B222BBB"));
    }
}
