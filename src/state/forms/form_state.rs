//! Shared form contract: focus traversal, validity, and submit readiness

use super::field::FormField;
use super::general_form::GeneralValues;
use super::pricing_form::PricingValues;
use serde::{Deserialize, Serialize};

/// Value record handed to the submit handler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tab", rename_all = "camelCase")]
pub enum ListingValues {
    General(GeneralValues),
    Pricing(PricingValues),
}

/// Failures reported by the data layer, shown inline above the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchErrors {
    pub update_listing_error: Option<String>,
    pub create_listing_draft_error: Option<String>,
    pub show_listings_error: Option<String>,
}

/// Read-only inputs supplied by the caller on every render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormProps {
    pub disabled: bool,
    pub ready: bool,
    pub updated: bool,
    pub update_in_progress: bool,
    pub fetch_errors: FetchErrors,
    /// Message key of the submit button label
    pub save_action_msg: &'static str,
}

impl Default for FormProps {
    fn default() -> Self {
        Self {
            disabled: false,
            ready: false,
            updated: false,
            update_in_progress: false,
            fetch_errors: FetchErrors::default(),
            save_action_msg: "EditListingWizard.saveEditGeneral",
        }
    }
}

/// Derived state of the submit control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitState {
    pub in_progress: bool,
    pub ready: bool,
    pub disabled: bool,
}

impl SubmitState {
    pub fn derive(invalid: bool, pristine: bool, props: &FormProps) -> Self {
        let in_progress = props.update_in_progress;
        Self {
            in_progress,
            ready: (props.updated && pristine) || props.ready,
            disabled: invalid || props.disabled || in_progress,
        }
    }
}

/// Trait for common form operations
///
/// Focus positions are the visible fields in order followed by the submit
/// button. Hidden fields are neither focusable nor validated.
pub trait Form {
    /// Fields currently shown, in focus order
    fn visible_fields(&self) -> Vec<&FormField>;
    fn field_mut(&mut self, name: &str) -> Option<&mut FormField>;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    /// Whether the current values equal the values the form was loaded with
    fn pristine(&self) -> bool;
    fn values(&self) -> ListingValues;

    fn field_count(&self) -> usize {
        self.visible_fields().len() + 1
    }

    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field().min(count - 1);
        self.set_active_field((current + 1) % count);
    }

    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field().min(count - 1);
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }

    fn is_submit_active(&self) -> bool {
        self.active_field() >= self.visible_fields().len()
    }

    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.visible_fields().get(index).copied()
    }

    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let name = self.get_field(self.active_field())?.name.clone();
        self.field_mut(&name)
    }

    /// Any visible field fails its validator chain
    fn invalid(&self) -> bool {
        self.visible_fields().iter().any(|f| f.error().is_some())
    }

    fn submit_state(&self, props: &FormProps) -> SubmitState {
        SubmitState::derive(self.invalid(), self.pristine(), props)
    }

    /// Mark every visible field touched so its error shows
    fn touch_all(&mut self) {
        let names: Vec<String> = self.visible_fields().iter().map(|f| f.name.clone()).collect();
        for name in names {
            if let Some(field) = self.field_mut(&name) {
                field.touched = true;
            }
        }
    }

    /// Values for the submit handler, or `None` while the submit control is
    /// disabled
    fn submit(&mut self, props: &FormProps) -> Option<ListingValues> {
        if self.submit_state(props).disabled {
            self.touch_all();
            return None;
        }
        Some(self.values())
    }
}
