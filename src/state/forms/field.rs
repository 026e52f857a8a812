//! Form field value objects

use super::validators::{compose, parse_number, ValidationError, Validator};
use crate::i18n::Messages;
use crate::state::Money;
use rust_decimal::Decimal;

/// Label that is either a catalog key or literal data (e.g. a taxonomy label)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Message(&'static str),
    Plain(String),
}

impl Label {
    pub fn resolve(&self, messages: &dyn Messages) -> String {
        match self {
            Label::Message(key) => messages.text(key),
            Label::Plain(text) => text.clone(),
        }
    }
}

/// One option of a radio or checkbox group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: String,
    pub label: Label,
}

impl ChoiceOption {
    pub fn new(value: &str, label: Label) -> Self {
        Self {
            value: value.to_string(),
            label,
        }
    }
}

/// Input control used for a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Number,
    Currency { currency: String },
    Radio(Vec<ChoiceOption>),
    Checkboxes(Vec<ChoiceOption>),
    ReadOnly,
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Raw currency input and its parsed amount, if parseable
    Money {
        input: String,
        money: Option<Money>,
    },
    Choice(Option<String>),
    Choices(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: Label,
    pub placeholder: Option<&'static str>,
    pub kind: FieldKind,
    pub value: FieldValue,
    pub validators: Vec<Validator>,
    /// Input cap in characters for text kinds
    pub max_chars: Option<usize>,
    /// Set once the user edits the field or a submit is refused
    pub touched: bool,
    /// Highlighted option for radio/checkbox kinds
    pub option_cursor: usize,
}

impl FormField {
    fn new(name: &str, label: Label, kind: FieldKind, value: FieldValue) -> Self {
        Self {
            name: name.to_string(),
            label,
            placeholder: None,
            kind,
            value,
            validators: Vec::new(),
            max_chars: None,
            touched: false,
            option_cursor: 0,
        }
    }

    /// Create a new single-line text field
    pub fn text(name: &str, label: &'static str, value: String) -> Self {
        Self::new(
            name,
            Label::Message(label),
            FieldKind::Text,
            FieldValue::Text(value),
        )
    }

    /// Create a new multiline text field
    pub fn text_area(name: &str, label: &'static str, value: String) -> Self {
        Self::new(
            name,
            Label::Message(label),
            FieldKind::TextArea,
            FieldValue::Text(value),
        )
    }

    /// Create a numeric text field
    pub fn number(name: &str, label: &'static str, value: Option<Decimal>) -> Self {
        Self::new(
            name,
            Label::Message(label),
            FieldKind::Number,
            FieldValue::Text(value.map(|n| n.to_string()).unwrap_or_default()),
        )
    }

    /// Create a currency input holding major units
    pub fn currency(name: &str, label: &'static str, currency: &str, value: Option<&Money>) -> Self {
        let input = value
            .map(|m| m.major_units().to_string())
            .unwrap_or_default();
        Self::new(
            name,
            Label::Message(label),
            FieldKind::Currency {
                currency: currency.to_string(),
            },
            FieldValue::Money {
                input,
                money: value.cloned(),
            },
        )
    }

    /// Create a radio group; the cursor starts on the selected option
    pub fn radio(
        name: &str,
        label: &'static str,
        options: Vec<ChoiceOption>,
        selected: Option<String>,
    ) -> Self {
        let cursor = selected
            .as_deref()
            .and_then(|s| options.iter().position(|o| o.value == s))
            .unwrap_or(0);
        let mut field = Self::new(
            name,
            Label::Message(label),
            FieldKind::Radio(options),
            FieldValue::Choice(selected),
        );
        field.option_cursor = cursor;
        field
    }

    /// Create a checkbox group
    pub fn checkboxes(
        name: &str,
        label: &'static str,
        options: Vec<ChoiceOption>,
        checked: Vec<String>,
    ) -> Self {
        Self::new(
            name,
            Label::Message(label),
            FieldKind::Checkboxes(options),
            FieldValue::Choices(checked),
        )
    }

    /// Create a display-only field
    pub fn read_only(name: &str, label: &'static str, value: String) -> Self {
        Self::new(
            name,
            Label::Message(label),
            FieldKind::ReadOnly,
            FieldValue::Text(value),
        )
    }

    pub fn with_placeholder(mut self, key: &'static str) -> Self {
        self.placeholder = Some(key);
        self
    }

    pub fn with_validators(mut self, validators: Vec<Validator>) -> Self {
        self.validators = validators;
        self
    }

    pub fn with_max_chars(mut self, max: usize) -> Self {
        self.max_chars = Some(max);
        self
    }

    /// First failing validator of the chain
    pub fn error(&self) -> Option<ValidationError> {
        compose(&self.validators, &self.value)
    }

    /// Error to show: only once the field has been touched
    pub fn visible_error(&self) -> Option<ValidationError> {
        if self.touched {
            self.error()
        } else {
            None
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::TextArea)
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, FieldKind::Radio(_) | FieldKind::Checkboxes(_))
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self.kind, FieldKind::ReadOnly)
    }

    pub fn options(&self) -> &[ChoiceOption] {
        match &self.kind {
            FieldKind::Radio(options) | FieldKind::Checkboxes(options) => options,
            _ => &[],
        }
    }

    /// Get the text value (raw input for currency, empty for choices)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Money { input, .. } => input,
            FieldValue::Choice(_) | FieldValue::Choices(_) => "",
        }
    }

    /// Parsed numeric value of a text field
    pub fn as_number(&self) -> Option<Decimal> {
        match &self.value {
            FieldValue::Text(s) => parse_number(s),
            _ => None,
        }
    }

    pub fn as_money(&self) -> Option<&Money> {
        match &self.value {
            FieldValue::Money { money, .. } => money.as_ref(),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Choice(choice) => choice.as_deref(),
            _ => None,
        }
    }

    pub fn as_choices(&self) -> &[String] {
        match &self.value {
            FieldValue::Choices(choices) => choices,
            _ => &[],
        }
    }

    pub fn is_checked(&self, value: &str) -> bool {
        match &self.value {
            FieldValue::Choice(choice) => choice.as_deref() == Some(value),
            FieldValue::Choices(choices) => choices.iter().any(|c| c == value),
            _ => false,
        }
    }

    /// Replace the text of a text-like field without marking it touched
    pub fn set_text(&mut self, value: String) {
        match &mut self.value {
            FieldValue::Text(s) => *s = value,
            FieldValue::Money { input, money } => {
                if let FieldKind::Currency { currency } = &self.kind {
                    *money = Money::parse_major(&value, currency);
                }
                *input = value;
            }
            _ => {}
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if self.is_read_only() || self.is_choice() {
            return;
        }
        let accepted = match self.kind {
            FieldKind::Number | FieldKind::Currency { .. } => {
                c.is_ascii_digit() || (c == '.' && !self.as_text().contains('.'))
            }
            _ => !c.is_control() || (c == '\n' && self.is_multiline()),
        };
        if !accepted {
            return;
        }
        if let Some(max) = self.max_chars {
            if self.as_text().chars().count() >= max {
                return;
            }
        }
        let mut text = self.as_text().to_string();
        text.push(c);
        self.set_text(text);
        self.touched = true;
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if self.is_read_only() || self.is_choice() {
            return;
        }
        let mut text = self.as_text().to_string();
        if text.pop().is_some() {
            self.set_text(text);
        }
        self.touched = true;
    }

    /// Move the option highlight forward (wraps around)
    pub fn next_option(&mut self) {
        let count = self.options().len();
        if count > 0 {
            self.option_cursor = (self.option_cursor + 1) % count;
        }
    }

    /// Move the option highlight backward (wraps around)
    pub fn prev_option(&mut self) {
        let count = self.options().len();
        if count > 0 {
            self.option_cursor = if self.option_cursor == 0 {
                count - 1
            } else {
                self.option_cursor - 1
            };
        }
    }

    /// Select (radio) or toggle (checkbox) the highlighted option
    pub fn toggle_option(&mut self) {
        let Some(option) = self.options().get(self.option_cursor) else {
            return;
        };
        let value = option.value.clone();
        match &mut self.value {
            FieldValue::Choice(choice) => *choice = Some(value),
            FieldValue::Choices(choices) => {
                if let Some(pos) = choices.iter().position(|c| *c == value) {
                    choices.remove(pos);
                } else {
                    choices.push(value);
                }
            }
            _ => return,
        }
        self.touched = true;
    }

    /// Get the display value for rendering
    pub fn display_value(&self, messages: &dyn Messages) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Money { input, .. } => match &self.kind {
                FieldKind::Currency { currency } if !input.is_empty() => {
                    format!("{input} {currency}")
                }
                _ => input.clone(),
            },
            FieldValue::Choice(_) | FieldValue::Choices(_) => self
                .options()
                .iter()
                .filter(|o| self.is_checked(&o.value))
                .map(|o| o.label.resolve(messages))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use crate::state::forms::validators::{greater_than_zero, required};

    fn hour_options() -> Vec<ChoiceOption> {
        ["2", "4", "8"]
            .iter()
            .map(|h| ChoiceOption::new(h, Label::Plain(h.to_string())))
            .collect()
    }

    mod text_tests {
        use super::*;

        #[test]
        fn test_push_and_pop() {
            let mut field = FormField::text("title", "T", String::new());
            field.push_char('h');
            field.push_char('i');
            assert_eq!(field.as_text(), "hi");
            field.pop_char();
            assert_eq!(field.as_text(), "h");
            assert!(field.touched);
        }

        #[test]
        fn test_max_chars_caps_input() {
            let mut field = FormField::text("title", "T", "ab".to_string()).with_max_chars(3);
            field.push_char('c');
            field.push_char('d');
            assert_eq!(field.as_text(), "abc");
        }

        #[test]
        fn test_newline_only_in_text_area() {
            let mut line = FormField::text("t", "T", String::new());
            line.push_char('\n');
            assert_eq!(line.as_text(), "");

            let mut area = FormField::text_area("d", "D", String::new());
            area.push_char('\n');
            assert_eq!(area.as_text(), "\n");
            assert!(area.is_multiline());
        }

        #[test]
        fn test_untouched_field_hides_error() {
            let field = FormField::text("t", "T", String::new())
                .with_validators(vec![required("Form.required")]);
            assert!(field.error().is_some());
            assert!(field.visible_error().is_none());
        }
    }

    mod number_tests {
        use super::*;

        #[test]
        fn test_number_filters_input() {
            let mut field = FormField::number("hours", "H", None);
            for c in "1a.5.-".chars() {
                field.push_char(c);
            }
            assert_eq!(field.as_text(), "1.5");
            assert_eq!(field.as_number(), Some(Decimal::new(15, 1)));
        }

        #[test]
        fn test_number_with_validators() {
            let mut field = FormField::number("q", "Q", None)
                .with_validators(vec![required("req"), greater_than_zero("gtz")]);
            assert_eq!(field.error().unwrap().key, "req");
            field.push_char('0');
            assert_eq!(field.error().unwrap().key, "gtz");
            field.push_char('5');
            assert!(field.error().is_none());
        }
    }

    mod currency_tests {
        use super::*;

        #[test]
        fn test_typing_parses_money() {
            let mut field = FormField::currency("price", "P", "USD", None);
            for c in "12.5".chars() {
                field.push_char(c);
            }
            assert_eq!(field.as_money(), Some(&Money::new(1250, "USD")));
        }

        #[test]
        fn test_initial_money_renders_major_units() {
            let field = FormField::currency("price", "P", "USD", Some(&Money::new(500, "USD")));
            assert_eq!(field.as_text(), "5.00");
            let catalog = Catalog::default();
            assert_eq!(field.display_value(&catalog), "5.00 USD");
        }

        #[test]
        fn test_backspace_reparses() {
            let mut field = FormField::currency("price", "P", "USD", None);
            for c in "1.234".chars() {
                field.push_char(c);
            }
            assert!(field.as_money().is_none());
            field.pop_char();
            assert_eq!(field.as_money(), Some(&Money::new(123, "USD")));
        }
    }

    mod choice_tests {
        use super::*;

        #[test]
        fn test_radio_selects_highlighted() {
            let mut field = FormField::radio("hours", "H", hour_options(), None);
            field.next_option();
            field.toggle_option();
            assert_eq!(field.as_choice(), Some("4"));
            field.next_option();
            field.toggle_option();
            assert_eq!(field.as_choice(), Some("8"));
            assert!(field.touched);
        }

        #[test]
        fn test_radio_cursor_starts_on_selection() {
            let field = FormField::radio("hours", "H", hour_options(), Some("8".to_string()));
            assert_eq!(field.option_cursor, 2);
        }

        #[test]
        fn test_cursor_wraps() {
            let mut field = FormField::radio("hours", "H", hour_options(), None);
            field.prev_option();
            assert_eq!(field.option_cursor, 2);
            field.next_option();
            assert_eq!(field.option_cursor, 0);
        }

        #[test]
        fn test_checkbox_toggle() {
            let mut field = FormField::checkboxes("difficulty", "D", hour_options(), vec![]);
            field.toggle_option();
            assert_eq!(field.as_choices(), &["2".to_string()]);
            field.toggle_option();
            assert!(field.as_choices().is_empty());
        }

        #[test]
        fn test_typing_ignored_on_choice() {
            let mut field = FormField::radio("hours", "H", hour_options(), None);
            field.push_char('x');
            assert!(field.as_choice().is_none());
            assert!(!field.touched);
        }

        #[test]
        fn test_display_value_lists_checked_labels() {
            let field = FormField::checkboxes(
                "difficulty",
                "D",
                hour_options(),
                vec!["2".to_string(), "8".to_string()],
            );
            assert_eq!(field.display_value(&Catalog::default()), "2, 8");
        }
    }

    #[test]
    fn test_read_only_ignores_input() {
        let mut field = FormField::read_only("hours", "H", "4".to_string());
        field.push_char('1');
        field.pop_char();
        assert_eq!(field.as_text(), "4");
    }
}
