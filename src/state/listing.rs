//! Listing and transaction records exchanged with the data layer

use super::forms::{GeneralValues, ListingValues, PricingValues};
use super::money::Money;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// How a listing is priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingType {
    Hourly,
    Package,
}

impl PricingType {
    pub const HOURLY: &'static str = "hourly";
    pub const PACKAGE: &'static str = "package";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => Self::HOURLY,
            Self::Package => Self::PACKAGE,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            Self::HOURLY => Some(Self::Hourly),
            Self::PACKAGE => Some(Self::Package),
            _ => None,
        }
    }
}

/// Publication state of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingState {
    #[default]
    Draft,
    Published,
}

/// A program listing as stored by the data layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: Uuid,
    #[serde(default)]
    pub state: ListingState,
    pub title: String,
    pub description: String,
    pub tags: String,
    #[serde(default)]
    pub difficulty: Vec<String>,
    pub hours: Option<String>,
    pub custom_hours: Option<Decimal>,
    pub pricing_type: Option<PricingType>,
    pub package_quantity: Option<Decimal>,
    pub price: Option<Money>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    /// Create a draft from the General tab values
    pub fn draft(values: GeneralValues) -> Self {
        let now = Utc::now();
        let mut listing = Self {
            id: Uuid::new_v4(),
            state: ListingState::Draft,
            title: String::new(),
            description: String::new(),
            tags: String::new(),
            difficulty: Vec::new(),
            hours: None,
            custom_hours: None,
            pricing_type: None,
            package_quantity: None,
            price: None,
            created_at: now,
            updated_at: now,
        };
        listing.apply_general(values);
        listing
    }

    /// Merge submitted form values into the record
    pub fn apply(&mut self, values: ListingValues) {
        match values {
            ListingValues::General(general) => self.apply_general(general),
            ListingValues::Pricing(pricing) => self.apply_pricing(pricing),
        }
        self.updated_at = Utc::now();
    }

    fn apply_general(&mut self, values: GeneralValues) {
        self.title = values.title;
        self.description = values.description;
        self.tags = values.tags;
        self.difficulty = values.difficulty;
        self.hours = values.hours;
        self.custom_hours = values.custom_hours;
    }

    fn apply_pricing(&mut self, values: PricingValues) {
        // hours belong to the General tab and are only echoed by pricing
        self.pricing_type = values.pricing_type;
        self.package_quantity = values.package_quantity;
        self.price = values.price;
    }

    /// Program length in hours, resolving the custom option
    pub fn effective_hours(&self, custom_hours_option: &str) -> Option<Decimal> {
        match self.hours.as_deref() {
            Some(option) if option == custom_hours_option => self.custom_hours,
            Some(option) => Decimal::from_str(option).ok(),
            None => None,
        }
    }

    pub fn general_values(&self) -> GeneralValues {
        GeneralValues {
            title: self.title.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
            difficulty: self.difficulty.clone(),
            hours: self.hours.clone(),
            custom_hours: self.custom_hours,
        }
    }

    pub fn pricing_values(&self, custom_hours_option: &str) -> PricingValues {
        PricingValues {
            pricing_type: self.pricing_type,
            package_quantity: self.package_quantity,
            price: self.price.clone(),
            hours: self.effective_hours(custom_hours_option),
        }
    }

    pub fn is_published(&self) -> bool {
        self.state == ListingState::Published
    }
}

/// Lifecycle state of a booking transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionState {
    Requested,
    Accepted,
    Cancelled,
    Completed,
}

impl TransactionState {
    /// Message key for the state label
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Requested => "TransactionPanel.stateRequested",
            Self::Accepted => "TransactionPanel.stateAccepted",
            Self::Cancelled => "TransactionPanel.stateCancelled",
            Self::Completed => "TransactionPanel.stateCompleted",
        }
    }
}

/// A booking made against a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub listing_title: String,
    pub customer_name: String,
    pub state: TransactionState,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn can_cancel(&self) -> bool {
        matches!(
            self.state,
            TransactionState::Requested | TransactionState::Accepted
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn general(hours: &str, custom: Option<Decimal>) -> GeneralValues {
        GeneralValues {
            title: "Forest bathing".to_string(),
            description: "Slow walks".to_string(),
            tags: "outdoors".to_string(),
            difficulty: vec!["beginner".to_string()],
            hours: Some(hours.to_string()),
            custom_hours: custom,
        }
    }

    #[test]
    fn test_pricing_type_round_trip_names() {
        assert_eq!(PricingType::parse("hourly"), Some(PricingType::Hourly));
        assert_eq!(PricingType::parse("package"), Some(PricingType::Package));
        assert_eq!(PricingType::parse("monthly"), None);
        assert_eq!(PricingType::Package.as_str(), "package");
    }

    #[test]
    fn test_pricing_type_serializes_lowercase() {
        let json = serde_json::to_string(&PricingType::Hourly).unwrap();
        assert_eq!(json, "\"hourly\"");
    }

    #[test]
    fn test_draft_copies_general_values() {
        let listing = Listing::draft(general("4", None));
        assert_eq!(listing.state, ListingState::Draft);
        assert_eq!(listing.title, "Forest bathing");
        assert_eq!(listing.general_values(), general("4", None));
        assert!(listing.price.is_none());
    }

    #[test]
    fn test_effective_hours_from_option() {
        let listing = Listing::draft(general("8", None));
        assert_eq!(listing.effective_hours("custom"), Some(Decimal::from(8)));
    }

    #[test]
    fn test_effective_hours_from_custom() {
        let listing = Listing::draft(general("custom", Some(Decimal::new(35, 1))));
        assert_eq!(listing.effective_hours("custom"), Some(Decimal::new(35, 1)));
    }

    #[test]
    fn test_apply_pricing_keeps_general_fields() {
        let mut listing = Listing::draft(general("2", None));
        listing.apply(ListingValues::Pricing(PricingValues {
            pricing_type: Some(PricingType::Package),
            package_quantity: Some(Decimal::from(3)),
            price: Some(Money::new(500, "USD")),
            hours: Some(Decimal::from(99)),
        }));
        assert_eq!(listing.pricing_type, Some(PricingType::Package));
        assert_eq!(listing.price, Some(Money::new(500, "USD")));
        assert_eq!(listing.hours.as_deref(), Some("2"));
    }

    #[test]
    fn test_transaction_can_cancel() {
        let mut tx = Transaction {
            id: Uuid::new_v4(),
            listing_id: Uuid::new_v4(),
            listing_title: "Yoga".to_string(),
            customer_name: "Sam".to_string(),
            state: TransactionState::Requested,
            created_at: Utc::now(),
        };
        assert!(tx.can_cancel());
        tx.state = TransactionState::Accepted;
        assert!(tx.can_cancel());
        tx.state = TransactionState::Cancelled;
        assert!(!tx.can_cancel());
        tx.state = TransactionState::Completed;
        assert!(!tx.can_cancel());
    }
}
