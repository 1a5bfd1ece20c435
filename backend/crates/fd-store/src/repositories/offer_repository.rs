//! Offer repository for CRUD operations on the offers file.

use crate::{JsonFile, Result as StoreResult, StoreError};

use fd_core::{Claim, Offer};

use std::sync::Arc;

use uuid::Uuid;

#[derive(Clone)]
pub struct OfferRepository {
    offers: Arc<JsonFile<Offer>>,
    claims: Arc<JsonFile<Claim>>,
}

impl OfferRepository {
    pub fn new(offers: Arc<JsonFile<Offer>>, claims: Arc<JsonFile<Claim>>) -> Self {
        Self { offers, claims }
    }

    pub async fn find_all(&self) -> StoreResult<Vec<Offer>> {
        self.offers.read_all().await
    }

    pub async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Offer>> {
        let offers = self.offers.read_all().await?;
        Ok(offers.into_iter().find(|o| o.id == id))
    }

    pub async fn find_by_donor(&self, donor_id: Uuid) -> StoreResult<Vec<Offer>> {
        let offers = self.offers.read_all().await?;
        Ok(offers.into_iter().filter(|o| o.donor_id == donor_id).collect())
    }

    pub async fn create(&self, offer: &Offer) -> StoreResult<()> {
        let mut offers = self.offers.lock().await?;

        if offers.iter().any(|o| o.id == offer.id) {
            return Err(StoreError::conflict(format!(
                "Offer {} already exists",
                offer.id
            )));
        }

        offers.push(offer.clone());
        offers.commit().await
    }

    /// Apply `patch` to the stored offer while the offers file is locked.
    ///
    /// The patch sees the current record, so fields it leaves alone (claim
    /// metadata in particular) keep whatever a concurrent claim wrote. An
    /// error from the patch leaves the file untouched.
    pub async fn modify<F, E>(&self, id: Uuid, patch: F) -> Result<Offer, E>
    where
        F: FnOnce(&mut Offer) -> Result<(), E>,
        E: From<StoreError>,
    {
        let mut offers = self.offers.lock().await?;

        let existing = offers
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::not_found("Offer", id))?;
        let mut updated = existing.clone();
        patch(&mut updated)?;
        *existing = updated.clone();

        offers.commit().await?;
        Ok(updated)
    }

    /// Remove an offer together with every claim on it.
    ///
    /// Returns the removed offer and the number of claims dropped with it.
    pub async fn delete(&self, id: Uuid) -> StoreResult<(Offer, usize)> {
        let mut offers = self.offers.lock().await?;
        let mut claims = self.claims.lock().await?;

        let index = offers
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| StoreError::not_found("Offer", id))?;
        let removed = offers.remove(index);

        let before = claims.len();
        claims.retain(|c| c.offer_id != id);
        let dropped_claims = before - claims.len();

        offers.commit().await?;
        if dropped_claims > 0 {
            claims.commit().await?;
        }

        Ok((removed, dropped_claims))
    }
}
