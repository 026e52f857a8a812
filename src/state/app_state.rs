//! Application state definitions

use super::forms::{FetchErrors, Form, FormProps, GeneralForm, PricingForm};
use super::listing::Listing;
use super::transaction::TransactionPanelState;
use crate::config::MarketplaceConfig;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    General,
    Pricing,
    Transactions,
}

impl View {
    pub const ALL: [View; 3] = [View::General, View::Pricing, View::Transactions];

    /// Message key of the tab label
    pub fn label_key(self) -> &'static str {
        match self {
            Self::General => "EditListingWizard.tabLabelGeneral",
            Self::Pricing => "EditListingWizard.tabLabelPricing",
            Self::Transactions => "EditListingWizard.tabLabelTransactions",
        }
    }

    pub fn is_form_view(self) -> bool {
        matches!(self, Self::General | Self::Pricing)
    }
}

/// Per-tab result of the last save round-trip
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabStatus {
    pub updated: bool,
    pub update_in_progress: bool,
    pub fetch_errors: FetchErrors,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_view: View,
    pub market: MarketplaceConfig,
    /// Listing being edited; `None` until the first draft is created
    pub listing: Option<Listing>,
    pub listing_loading: bool,
    pub general_form: GeneralForm,
    pub pricing_form: PricingForm,
    pub general_status: TabStatus,
    pub pricing_status: TabStatus,
    /// Set once the listing is published in this session
    pub new_listing_published: bool,
    pub transactions: TransactionPanelState,
    /// Modal error queue
    pub errors: VecDeque<String>,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(market: MarketplaceConfig) -> Self {
        Self {
            current_view: View::default(),
            general_form: GeneralForm::new(&market),
            pricing_form: PricingForm::new(&market),
            market,
            listing: None,
            listing_loading: false,
            general_status: TabStatus::default(),
            pricing_status: TabStatus::default(),
            new_listing_published: false,
            transactions: TransactionPanelState::default(),
            errors: VecDeque::new(),
            status_message: None,
        }
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    pub fn status_mut(&mut self, view: View) -> Option<&mut TabStatus> {
        match view {
            View::General => Some(&mut self.general_status),
            View::Pricing => Some(&mut self.pricing_status),
            View::Transactions => None,
        }
    }

    /// Replace both forms with the stored listing
    pub fn load_listing(&mut self, listing: Listing) {
        let general_focus = self.general_form.active_field_index;
        let pricing_focus = self.pricing_form.active_field_index;

        self.general_form = GeneralForm::from_values(&self.market, listing.general_values());
        self.pricing_form = PricingForm::from_values(
            &self.market,
            listing.pricing_values(&self.market.custom_hours_option),
        );
        self.general_form.set_active_field(general_focus);
        self.pricing_form.set_active_field(pricing_focus);
        self.listing = Some(listing);
        self.listing_loading = false;
    }

    /// Re-initialize the tab that was saved, keeping edits on the other tab
    pub fn apply_saved_listing(&mut self, view: View, listing: Listing) {
        match view {
            View::General => {
                let focus = self.general_form.active_field_index;
                self.general_form =
                    GeneralForm::from_values(&self.market, listing.general_values());
                self.general_form.set_active_field(focus);
                self.pricing_form
                    .set_hours(listing.effective_hours(&self.market.custom_hours_option));
            }
            View::Pricing => {
                let focus = self.pricing_form.active_field_index;
                self.pricing_form = PricingForm::from_values(
                    &self.market,
                    listing.pricing_values(&self.market.custom_hours_option),
                );
                self.pricing_form.set_active_field(focus);
            }
            View::Transactions => {}
        }
        self.listing = Some(listing);
    }

    fn is_new_listing(&self) -> bool {
        !self.listing.as_ref().is_some_and(Listing::is_published)
    }

    pub fn general_props(&self) -> FormProps {
        FormProps {
            disabled: self.listing_loading,
            ready: self.new_listing_published,
            updated: self.general_status.updated,
            update_in_progress: self.general_status.update_in_progress,
            fetch_errors: self.general_status.fetch_errors.clone(),
            save_action_msg: if self.is_new_listing() {
                "EditListingWizard.saveNewGeneral"
            } else {
                "EditListingWizard.saveEditGeneral"
            },
        }
    }

    pub fn pricing_props(&self) -> FormProps {
        FormProps {
            disabled: self.listing.is_none() || self.listing_loading,
            ready: self.new_listing_published,
            updated: self.pricing_status.updated,
            update_in_progress: self.pricing_status.update_in_progress,
            fetch_errors: self.pricing_status.fetch_errors.clone(),
            save_action_msg: if self.is_new_listing() {
                "EditListingWizard.saveNewPricing"
            } else {
                "EditListingWizard.saveEditPricing"
            },
        }
    }

    /// Props of the form on screen, if the view is a form
    pub fn active_props(&self) -> Option<FormProps> {
        match self.current_view {
            View::General => Some(self.general_props()),
            View::Pricing => Some(self.pricing_props()),
            View::Transactions => None,
        }
    }

    pub fn active_form_mut(&mut self) -> Option<&mut dyn Form> {
        match self.current_view {
            View::General => Some(&mut self.general_form),
            View::Pricing => Some(&mut self.pricing_form),
            View::Transactions => None,
        }
    }
}
