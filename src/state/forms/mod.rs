//! Form domain layer
//!
//! Typed listing forms built from [`FormField`]s with validator chains, and
//! the shared submit-readiness contract in [`Form`].

mod field;
mod form_state;
mod general_form;
mod pricing_form;
pub mod validators;

pub use field::{FieldKind, FormField};
pub use form_state::{FetchErrors, Form, FormProps, ListingValues, SubmitState};
pub use general_form::{GeneralForm, GeneralValues};
pub use pricing_form::{PricingForm, PricingValues};
