//! JSON file backed listing store
//!
//! The whole document is read and rewritten per operation under a mutex.
//! A missing file reads as an empty store.

use super::traits::ListingStore;
use super::StoreError;
use crate::state::forms::{GeneralValues, ListingValues};
use crate::state::{Listing, ListingState, Transaction, TransactionState};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    listings: Vec<Listing>,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<StoreDocument, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StoreDocument::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, doc: &StoreDocument) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(doc)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl ListingStore for FileStore {
    async fn create_listing_draft(&self, values: GeneralValues) -> Result<Listing, StoreError> {
        let _guard = self.lock.lock().await;
        let mut doc = self.read().await?;
        let listing = Listing::draft(values);
        doc.listings.push(listing.clone());
        self.write(&doc).await?;
        tracing::info!("Created draft listing {}", listing.id);
        Ok(listing)
    }

    async fn update_listing(
        &self,
        id: Uuid,
        values: ListingValues,
        publish: bool,
    ) -> Result<Listing, StoreError> {
        let _guard = self.lock.lock().await;
        let mut doc = self.read().await?;
        let listing = doc
            .listings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(StoreError::ListingNotFound(id))?;
        listing.apply(values);
        if publish {
            listing.state = ListingState::Published;
        }
        let updated = listing.clone();
        self.write(&doc).await?;
        tracing::info!("Updated listing {id} (publish={publish})");
        Ok(updated)
    }

    async fn show_listing(&self, id: Uuid) -> Result<Listing, StoreError> {
        let _guard = self.lock.lock().await;
        let doc = self.read().await?;
        doc.listings
            .into_iter()
            .find(|l| l.id == id)
            .ok_or(StoreError::ListingNotFound(id))
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        let _guard = self.lock.lock().await;
        let mut transactions = self.read().await?.transactions;
        transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(transactions)
    }

    async fn cancel_transaction(&self, id: Uuid) -> Result<Transaction, StoreError> {
        let _guard = self.lock.lock().await;
        let mut doc = self.read().await?;
        let tx = doc
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::TransactionNotFound(id))?;
        if !tx.can_cancel() {
            return Err(StoreError::NotCancellable {
                id,
                state: tx.state,
            });
        }
        tx.state = TransactionState::Cancelled;
        let cancelled = tx.clone();
        self.write(&doc).await?;
        tracing::info!("Cancelled transaction {id}");
        Ok(cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::PricingValues;
    use crate::state::{Money, PricingType};
    use chrono::{Duration, Utc};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use tokio_test::{assert_err, assert_ok};

    fn temp_store() -> FileStore {
        let path = std::env::temp_dir()
            .join("listing-tui-tests")
            .join(format!("{}.json", Uuid::new_v4()));
        FileStore::new(path)
    }

    fn general() -> GeneralValues {
        GeneralValues {
            title: "Forest bathing".to_string(),
            description: "Slow walks".to_string(),
            tags: "outdoors".to_string(),
            difficulty: vec!["beginner".to_string()],
            hours: Some("4".to_string()),
            custom_hours: None,
        }
    }

    fn transaction(state: TransactionState, age_hours: i64) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            listing_id: Uuid::new_v4(),
            listing_title: "Yoga".to_string(),
            customer_name: "Sam".to_string(),
            state,
            created_at: Utc::now() - Duration::hours(age_hours),
        }
    }

    async fn seed(store: &FileStore, transactions: Vec<Transaction>) {
        let doc = StoreDocument {
            listings: Vec::new(),
            transactions,
        };
        store.write(&doc).await.unwrap();
    }

    async fn cleanup(store: &FileStore) {
        let _ = tokio::fs::remove_file(store.path()).await;
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_store() {
        let store = temp_store();
        assert!(store.list_transactions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_then_show() {
        let store = temp_store();
        let created = store.create_listing_draft(general()).await.unwrap();
        assert_eq!(created.state, ListingState::Draft);

        let shown = store.show_listing(created.id).await.unwrap();
        assert_eq!(shown, created);
        cleanup(&store).await;
    }

    #[tokio::test]
    async fn test_update_pricing_and_publish() {
        let store = temp_store();
        let created = store.create_listing_draft(general()).await.unwrap();
        let values = ListingValues::Pricing(PricingValues {
            pricing_type: Some(PricingType::Package),
            package_quantity: Some(Decimal::from(3)),
            price: Some(Money::new(500, "USD")),
            hours: None,
        });

        let updated = store.update_listing(created.id, values, true).await.unwrap();
        assert_eq!(updated.state, ListingState::Published);
        assert_eq!(updated.price, Some(Money::new(500, "USD")));
        assert_eq!(updated.title, "Forest bathing");

        let shown = store.show_listing(created.id).await.unwrap();
        assert_eq!(shown.package_quantity, Some(Decimal::from(3)));
        cleanup(&store).await;
    }

    #[tokio::test]
    async fn test_update_unknown_listing() {
        let store = temp_store();
        let id = Uuid::new_v4();
        let err = store
            .update_listing(id, ListingValues::General(general()), false)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::ListingNotFound(e) if e == id));
    }

    #[tokio::test]
    async fn test_list_transactions_newest_first() {
        let store = temp_store();
        let old = transaction(TransactionState::Accepted, 48);
        let new = transaction(TransactionState::Requested, 1);
        seed(&store, vec![old.clone(), new.clone()]).await;

        let listed = store.list_transactions().await.unwrap();
        assert_eq!(listed[0].id, new.id);
        assert_eq!(listed[1].id, old.id);
        cleanup(&store).await;
    }

    #[tokio::test]
    async fn test_cancel_transaction() {
        let store = temp_store();
        let tx = transaction(TransactionState::Accepted, 1);
        seed(&store, vec![tx.clone()]).await;

        let cancelled = assert_ok!(store.cancel_transaction(tx.id).await);
        assert_eq!(cancelled.state, TransactionState::Cancelled);

        let err = assert_err!(store.cancel_transaction(tx.id).await);
        assert!(matches!(err, StoreError::NotCancellable { .. }));
        cleanup(&store).await;
    }

    #[tokio::test]
    async fn test_malformed_document() {
        let store = temp_store();
        tokio::fs::create_dir_all(store.path().parent().unwrap())
            .await
            .unwrap();
        tokio::fs::write(store.path(), "not json").await.unwrap();
        let err = store.list_transactions().await.unwrap_err();
        assert!(matches!(err, StoreError::Serde(_)));
        cleanup(&store).await;
    }
}
