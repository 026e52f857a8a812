//! Listing data layer
//!
//! The forms never perform I/O; the app hands submitted values to a
//! [`ListingStore`] and folds the results back into form props.

mod error;
mod file_store;
mod traits;

pub use error::StoreError;
pub use file_store::FileStore;
pub use traits::ListingStore;

#[cfg(test)]
pub use traits::MockListingStore;
