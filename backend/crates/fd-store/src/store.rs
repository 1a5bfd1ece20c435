use crate::{
    ClaimRepository, JsonFile, OfferRepository, Result as StoreResult, StoreError,
    UserRepository,
};

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The three collections of the marketplace, opened from one data directory.
#[derive(Clone)]
pub struct Store {
    data_dir: PathBuf,
    pub offers: OfferRepository,
    pub claims: ClaimRepository,
    pub users: UserRepository,
}

impl Store {
    /// Open (and create if needed) the data directory.
    ///
    /// Collection files are created lazily on first write.
    pub async fn open(
        data_dir: impl Into<PathBuf>,
        offers_file: &str,
        claims_file: &str,
        users_file: &str,
    ) -> StoreResult<Self> {
        let data_dir = data_dir.into();

        tokio::fs::create_dir_all(&data_dir)
            .await
            .map_err(|e| StoreError::io(&data_dir, e))?;

        let offers = Arc::new(JsonFile::new(data_dir.join(offers_file)));
        let claims = Arc::new(JsonFile::new(data_dir.join(claims_file)));
        let users = Arc::new(JsonFile::new(data_dir.join(users_file)));

        log::info!("Opened data directory {}", data_dir.display());

        Ok(Self {
            offers: OfferRepository::new(offers.clone(), claims.clone()),
            claims: ClaimRepository::new(offers, claims),
            users: UserRepository::new(users),
            data_dir,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
