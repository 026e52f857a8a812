//! Data layer errors

use crate::state::TransactionState;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Listing {0} not found")]
    ListingNotFound(Uuid),

    #[error("Transaction {0} not found")]
    TransactionNotFound(Uuid),

    #[error("Transaction {id} cannot be cancelled in state {state:?}")]
    NotCancellable { id: Uuid, state: TransactionState },

    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store document is malformed: {0}")]
    Serde(#[from] serde_json::Error),
}
