//! General tab: title, description, tags, difficulty, and program length

use super::field::{ChoiceOption, FormField, Label};
use super::form_state::{Form, ListingValues};
use super::validators::{greater_than_zero, max_length, required};
use crate::config::MarketplaceConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const TITLE_MAX_LENGTH: usize = 60;

const HOUR_OPTIONS: [&str; 3] = ["2", "4", "8"];

/// Values submitted by the General tab
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralValues {
    pub title: String,
    pub description: String,
    pub tags: String,
    pub difficulty: Vec<String>,
    pub hours: Option<String>,
    pub custom_hours: Option<Decimal>,
}

#[derive(Debug, Clone)]
pub struct GeneralForm {
    pub title: FormField,
    pub description: FormField,
    pub tags: FormField,
    pub difficulty: FormField,
    pub hours: FormField,
    pub custom_hours: FormField,
    custom_hours_option: String,
    initial: GeneralValues,
    pub active_field_index: usize,
}

impl GeneralForm {
    pub fn new(market: &MarketplaceConfig) -> Self {
        Self::from_values(market, GeneralValues::default())
    }

    pub fn from_values(market: &MarketplaceConfig, values: GeneralValues) -> Self {
        let difficulty_options = market
            .difficulty_options
            .iter()
            .map(|o| ChoiceOption::new(&o.key, Label::Plain(o.label.clone())))
            .collect();

        let mut hour_options: Vec<ChoiceOption> = HOUR_OPTIONS
            .iter()
            .map(|h| ChoiceOption::new(h, Label::Plain(h.to_string())))
            .collect();
        hour_options.push(ChoiceOption::new(
            &market.custom_hours_option,
            Label::Message("EditProgramListingGeneralForm.customHoursOption"),
        ));

        let mut form = Self {
            title: FormField::text(
                "title",
                "EditProgramListingGeneralForm.title",
                values.title.clone(),
            )
            .with_placeholder("EditProgramListingGeneralForm.titlePlaceholder")
            .with_max_chars(TITLE_MAX_LENGTH)
            .with_validators(vec![
                required("EditProgramListingGeneralForm.titleRequired"),
                max_length("EditProgramListingGeneralForm.maxLength", TITLE_MAX_LENGTH),
            ]),
            description: FormField::text_area(
                "description",
                "EditProgramListingGeneralForm.description",
                values.description.clone(),
            )
            .with_placeholder("EditProgramListingGeneralForm.descriptionPlaceholder")
            .with_validators(vec![required(
                "EditProgramListingGeneralForm.descriptionRequired",
            )]),
            tags: FormField::text(
                "tags",
                "EditProgramListingGeneralForm.tags",
                values.tags.clone(),
            )
            .with_placeholder("EditProgramListingGeneralForm.tagsPlaceholder")
            .with_validators(vec![required("EditProgramListingGeneralForm.tagsRequired")]),
            difficulty: FormField::checkboxes(
                &market.difficulty_key,
                "EditProgramListingGeneralForm.difficultyLabel",
                difficulty_options,
                values.difficulty.clone(),
            )
            .with_validators(vec![required(
                "EditProgramListingGeneralForm.difficultyRequired",
            )]),
            hours: FormField::radio(
                "hours",
                "EditProgramListingGeneralForm.hoursLabel",
                hour_options,
                values.hours.clone(),
            )
            .with_validators(vec![required(
                "EditProgramListingGeneralForm.hoursPlaceholderRequiredNumber",
            )]),
            custom_hours: FormField::number(
                "customHours",
                "EditProgramListingGeneralForm.hoursCustomPlaceholder",
                values.custom_hours,
            )
            .with_placeholder("EditProgramListingGeneralForm.hoursCustomPlaceholder")
            .with_validators(vec![
                required("EditProgramListingGeneralForm.hoursCustomPlaceholderRequiredNumber"),
                greater_than_zero("EditProgramListingGeneralForm.hoursGreaterThanZero"),
            ]),
            custom_hours_option: market.custom_hours_option.clone(),
            initial: GeneralValues::default(),
            active_field_index: 0,
        };
        form.initial = form.general_values();
        form
    }

    /// The custom hours input is shown only for the custom option
    pub fn shows_custom_hours(&self) -> bool {
        self.hours.as_choice() == Some(self.custom_hours_option.as_str())
    }

    pub fn general_values(&self) -> GeneralValues {
        GeneralValues {
            title: self.title.as_text().to_string(),
            description: self.description.as_text().to_string(),
            tags: self.tags.as_text().to_string(),
            difficulty: self.difficulty.as_choices().to_vec(),
            hours: self.hours.as_choice().map(str::to_string),
            custom_hours: self.custom_hours.as_number(),
        }
    }
}

impl Form for GeneralForm {
    fn visible_fields(&self) -> Vec<&FormField> {
        let mut fields = vec![
            &self.title,
            &self.description,
            &self.tags,
            &self.difficulty,
            &self.hours,
        ];
        if self.shows_custom_hours() {
            fields.push(&self.custom_hours);
        }
        fields
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        [
            &mut self.title,
            &mut self.description,
            &mut self.tags,
            &mut self.difficulty,
            &mut self.hours,
            &mut self.custom_hours,
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
        self.general_values() == self.initial
    }

    fn values(&self) -> ListingValues {
        ListingValues::General(self.general_values())
    }
}
