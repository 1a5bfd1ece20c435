//! Claim repository.
//!
//! Creating or releasing a claim also rewrites the claimed offer, so both
//! files are locked (offers first, then claims) for the whole operation.

use crate::{JsonFile, Result as StoreResult, StoreError};

use fd_core::{Claim, Offer};

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

#[derive(Clone)]
pub struct ClaimRepository {
    offers: Arc<JsonFile<Offer>>,
    claims: Arc<JsonFile<Claim>>,
}

impl ClaimRepository {
    pub fn new(offers: Arc<JsonFile<Offer>>, claims: Arc<JsonFile<Claim>>) -> Self {
        Self { offers, claims }
    }

    pub async fn find_all(&self) -> StoreResult<Vec<Claim>> {
        self.claims.read_all().await
    }

    pub async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Claim>> {
        let claims = self.claims.read_all().await?;
        Ok(claims.into_iter().find(|c| c.id == id))
    }

    /// Record a claim and mark its offer as claimed.
    ///
    /// Fails with `NotFound` when the offer does not exist and with
    /// `Conflict` when the offer is already held by a claim or is past the
    /// claimable stages.
    pub async fn create(&self, claim: &Claim) -> StoreResult<Offer> {
        let mut offers = self.offers.lock().await?;

        let offer = offers
            .iter_mut()
            .find(|o| o.id == claim.offer_id)
            .ok_or_else(|| StoreError::not_found("Offer", claim.offer_id))?;

        if let Some(holder) = offer.claimed_by {
            return Err(StoreError::conflict(format!(
                "Offer {} is already held by {}",
                offer.id, holder
            )));
        }
        if !offer.is_claimable() {
            return Err(StoreError::conflict(format!(
                "Offer {} is {} and cannot be claimed",
                offer.id, offer.status
            )));
        }

        let mut claims = self.claims.lock().await?;
        if claims.iter().any(|c| c.id == claim.id) {
            return Err(StoreError::conflict(format!(
                "Claim {} already exists",
                claim.id
            )));
        }

        offer.mark_claimed(claim.recipient_id, claim.created_at);
        let updated = offer.clone();
        claims.push(claim.clone());

        offers.commit().await?;
        claims.commit().await?;

        Ok(updated)
    }

    /// Remove a claim. If its offer is still held by the claiming recipient
    /// the offer is released back to `confirmed`.
    ///
    /// Returns the removed claim and the offer as it stands afterwards (if
    /// the offer still exists).
    pub async fn delete(&self, id: Uuid) -> StoreResult<(Claim, Option<Offer>)> {
        let mut offers = self.offers.lock().await?;
        let mut claims = self.claims.lock().await?;

        let index = claims
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("Claim", id))?;
        let removed = claims.remove(index);

        let mut offer_changed = false;
        let offer = match offers.iter_mut().find(|o| o.id == removed.offer_id) {
            Some(offer) => {
                if offer.claimed_by == Some(removed.recipient_id) {
                    offer.release_claim(Utc::now());
                    offer_changed = true;
                }
                Some(offer.clone())
            }
            None => {
                log::warn!(
                    "Claim {} referenced missing offer {}",
                    removed.id,
                    removed.offer_id
                );
                None
            }
        };

        if offer_changed {
            offers.commit().await?;
        }
        claims.commit().await?;

        Ok((removed, offer))
    }
}
