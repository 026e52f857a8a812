//! Trait abstraction for the listing data layer to enable mocking in tests

use super::StoreError;
use crate::state::forms::{GeneralValues, ListingValues};
use crate::state::{Listing, Transaction};
use async_trait::async_trait;
use uuid::Uuid;

/// Create/update/fetch operations the forms and transaction panel delegate to
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Create a draft listing from the General tab
    async fn create_listing_draft(&self, values: GeneralValues) -> Result<Listing, StoreError>;

    /// Merge tab values into an existing listing, optionally publishing it
    async fn update_listing(
        &self,
        id: Uuid,
        values: ListingValues,
        publish: bool,
    ) -> Result<Listing, StoreError>;

    /// Fetch a listing by id
    async fn show_listing(&self, id: Uuid) -> Result<Listing, StoreError>;

    /// List all transactions
    async fn list_transactions(&self) -> Result<Vec<Transaction>, StoreError>;

    /// Cancel a requested or accepted transaction
    async fn cancel_transaction(&self, id: Uuid) -> Result<Transaction, StoreError>;
}
