//! Pricing tab: pricing type, package quantity, unit price, and the derived
//! total

use super::field::{ChoiceOption, FormField, Label};
use super::form_state::{Form, ListingValues};
use super::validators::{greater_than_zero, money_subunit_amount_at_least, required, Validator};
use crate::config::MarketplaceConfig;
use crate::state::{Money, PricingType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Longest package quantity the input accepts
pub const QUANTITY_MAX_CHARS: usize = 6;

/// Values submitted by the Pricing tab
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingValues {
    pub pricing_type: Option<PricingType>,
    pub package_quantity: Option<Decimal>,
    pub price: Option<Money>,
    /// Program length supplied by the General tab, echoed read-only
    pub hours: Option<Decimal>,
}

/// Which branch of the form is active, selected by the pricing type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingMode {
    Unselected,
    Hourly,
    Package,
}

impl PricingMode {
    pub fn from_type(pricing_type: Option<PricingType>) -> Self {
        match pricing_type {
            None => Self::Unselected,
            Some(PricingType::Hourly) => Self::Hourly,
            Some(PricingType::Package) => Self::Package,
        }
    }

    /// Message key of the unit price label
    pub fn price_label(self) -> &'static str {
        match self {
            Self::Hourly => "EditProgramListingPricingForm.pricePerHour",
            Self::Unselected | Self::Package => "EditProgramListingPricingForm.pricePerPackage",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PricingForm {
    pub pricing_type: FormField,
    pub hours: FormField,
    pub package_quantity: FormField,
    pub price: FormField,
    currency: String,
    initial: PricingValues,
    pub active_field_index: usize,
}

impl PricingForm {
    pub fn new(market: &MarketplaceConfig) -> Self {
        Self::from_values(market, PricingValues::default())
    }

    pub fn from_values(market: &MarketplaceConfig, values: PricingValues) -> Self {
        let type_options = vec![
            ChoiceOption::new(
                PricingType::PACKAGE,
                Label::Message("EditProgramListingPricingForm.packageLabel"),
            ),
            ChoiceOption::new(
                PricingType::HOURLY,
                Label::Message("EditProgramListingPricingForm.hourlyLabel"),
            ),
        ];

        let mut form = Self {
            pricing_type: FormField::radio(
                "pricingType",
                "EditProgramListingPricingForm.pricingTypeLabel",
                type_options,
                values.pricing_type.map(|t| t.as_str().to_string()),
            )
            .with_validators(vec![required(
                "EditProgramListingPricingForm.pricingTypeRequired",
            )]),
            hours: FormField::read_only(
                "hours",
                "EditProgramListingPricingForm.hoursLabel",
                values.hours.map(|h| h.to_string()).unwrap_or_default(),
            ),
            package_quantity: FormField::number(
                "packageQuantity",
                "EditProgramListingPricingForm.quantityLabel",
                values.package_quantity,
            )
            .with_max_chars(QUANTITY_MAX_CHARS)
            .with_validators(vec![
                required("EditProgramListingPricingForm.quantityRequired"),
                greater_than_zero("EditProgramListingPricingForm.quantityGreaterThanZero"),
            ]),
            price: FormField::currency(
                "price",
                "EditProgramListingPricingForm.pricePerPackage",
                &market.currency,
                values.price.as_ref(),
            )
            .with_placeholder("EditListingPricingForm.priceInputPlaceholder")
            .with_validators(price_validators(market)),
            currency: market.currency.clone(),
            initial: PricingValues::default(),
            active_field_index: 0,
        };
        form.initial = form.pricing_values();
        form
    }

    pub fn mode(&self) -> PricingMode {
        PricingMode::from_type(self.pricing_type.as_choice().and_then(PricingType::parse))
    }

    /// Replace the externally supplied program length
    pub fn set_hours(&mut self, hours: Option<Decimal>) {
        self.hours
            .set_text(hours.map(|h| h.to_string()).unwrap_or_default());
        self.initial.hours = hours;
    }

    /// Unit price × quantity (package) or × hours (otherwise); zero without
    /// a price, `None` when the total overflows
    pub fn total_price(&self) -> Option<Money> {
        let Some(unit) = self.price.as_money() else {
            return Some(Money::zero(&self.currency));
        };
        let multiplier = match self.mode() {
            PricingMode::Package => self.package_quantity.as_number(),
            PricingMode::Hourly | PricingMode::Unselected => self.hours.as_number(),
        }
        .unwrap_or(Decimal::ZERO);
        unit.times(multiplier)
    }

    pub fn pricing_values(&self) -> PricingValues {
        PricingValues {
            pricing_type: self.pricing_type.as_choice().and_then(PricingType::parse),
            package_quantity: self.package_quantity.as_number(),
            price: self.price.as_money().cloned(),
            hours: self.hours.as_number(),
        }
    }
}

fn price_validators(market: &MarketplaceConfig) -> Vec<Validator> {
    let mut validators = vec![required("EditProgramListingPricingForm.priceRequired")];
    if market.listing_minimum_price_subunits > 0 {
        let min = Money::new(market.listing_minimum_price_subunits, &market.currency);
        validators.push(money_subunit_amount_at_least(
            "EditProgramListingPricingForm.priceTooLow",
            &min,
        ));
    }
    validators
}

impl Form for PricingForm {
    fn visible_fields(&self) -> Vec<&FormField> {
        let mut fields = vec![&self.pricing_type];
        match self.mode() {
            PricingMode::Hourly => fields.push(&self.hours),
            PricingMode::Package => fields.push(&self.package_quantity),
            PricingMode::Unselected => {}
        }
        fields.push(&self.price);
        fields
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        [
            &mut self.pricing_type,
            &mut self.hours,
            &mut self.package_quantity,
            &mut self.price,
        ]
        .into_iter()
        .find(|f| f.name == name)
    }

    fn active_field(&self) -> usize {
        self.active_field_index
    }

    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }

    fn pristine(&self) -> bool {
        self.pricing_values() == self.initial
    }

    fn invalid(&self) -> bool {
        self.visible_fields().iter().any(|f| f.error().is_some()) || self.total_price().is_none()
    }

    fn values(&self) -> ListingValues {
        ListingValues::Pricing(self.pricing_values())
    }
}
