//! Application state module

mod app_state;
pub mod forms;
mod listing;
mod money;
mod transaction;

pub use app_state::*;
pub use listing::*;
pub use money::*;
pub use transaction::*;
