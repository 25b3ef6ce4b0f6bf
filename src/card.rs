// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Card details form with per-field blur validation
//!
//! Each field moves `Empty -> Focused -> Unfocused(status)`. Status is only
//! computed when the field loses focus; editing an invalid field clears the
//! error straight away and waits for the next blur to check again.

use serde::{Deserialize, Serialize};
use tracing::debug;

// =============================================================================
// Field values
// =============================================================================

/// Which input a field is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Cardholder name
    Name,
    /// 16-digit card number
    CardNumber,
    /// Two-digit month and year
    Expiry,
    /// 3-digit security code
    Cvv,
}

impl FieldKind {
    /// Label above the input
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Name => "Cardholder name",
            Self::CardNumber => "Card number",
            Self::Expiry => "Expiry date (MM/YY)",
            Self::Cvv => "CVV",
        }
    }

    /// Placeholder text
    #[must_use]
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "e.g. Jane Appleseed",
            Self::CardNumber => "e.g. 1234 5678 9123 0000",
            Self::Expiry => "MM YY",
            Self::Cvv => "CVV",
        }
    }

    /// Whether the input takes digits only
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Name)
    }
}

/// A field value, carrying the slots its kind needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardField {
    /// Cardholder name
    Name {
        /// Text as typed
        value: String,
    },
    /// Card number
    CardNumber {
        /// Text as typed
        value: String,
    },
    /// Expiry month and year
    Expiry {
        /// Month text
        month: String,
        /// Year text
        year: String,
    },
    /// Security code
    Cvv {
        /// Text as typed
        value: String,
    },
}

/// An edit to one slot of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// The single text slot of name, number or CVV
    Text(String),
    /// The month slot of the expiry field
    Month(String),
    /// The year slot of the expiry field
    Year(String),
}

fn is_digits(text: &str, len: usize) -> bool {
    text.len() == len && text.bytes().all(|b| b.is_ascii_digit())
}

impl CardField {
    /// Empty value of `kind`
    #[must_use]
    pub fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Name => Self::Name { value: String::new() },
            FieldKind::CardNumber => Self::CardNumber { value: String::new() },
            FieldKind::Expiry => Self::Expiry { month: String::new(), year: String::new() },
            FieldKind::Cvv => Self::Cvv { value: String::new() },
        }
    }

    /// Kind of this value
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Name { .. } => FieldKind::Name,
            Self::CardNumber { .. } => FieldKind::CardNumber,
            Self::Expiry { .. } => FieldKind::Expiry,
            Self::Cvv { .. } => FieldKind::Cvv,
        }
    }

    /// True when nothing has been typed into any slot
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Name { value } | Self::CardNumber { value } | Self::Cvv { value } => value.is_empty(),
            Self::Expiry { month, year } => month.is_empty() && year.is_empty(),
        }
    }

    /// True when every slot is filled in
    #[must_use]
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Expiry { month, year } => !month.is_empty() && !year.is_empty(),
            _ => !self.is_empty(),
        }
    }

    /// Format check for this kind
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Name { value } => !value.trim().is_empty(),
            Self::CardNumber { value } => is_digits(value, 16),
            Self::Expiry { month, year } => is_digits(month, 2) && is_digits(year, 2),
            Self::Cvv { value } => is_digits(value, 3),
        }
    }

    /// Write `input` into the matching slot. Returns false when the slot does
    /// not exist on this kind.
    pub fn apply(&mut self, input: FieldInput) -> bool {
        match (self, input) {
            (
                Self::Name { value } | Self::CardNumber { value } | Self::Cvv { value },
                FieldInput::Text(text),
            ) => *value = text,
            (Self::Expiry { month, .. }, FieldInput::Month(text)) => *month = text,
            (Self::Expiry { year, .. }, FieldInput::Year(text)) => *year = text,
            _ => return false,
        }
        true
    }
}

// =============================================================================
// Field state machine
// =============================================================================

/// Result of the last blur check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    /// Not checked since the last edit
    #[default]
    Unvalidated,
    /// Passed on the last blur
    Valid,
    /// Failed on the last blur
    Invalid,
}

/// Where a field is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "status", rename_all = "lowercase")]
pub enum FieldPhase {
    /// Untouched or cleared, not focused
    Empty,
    /// Has input focus
    Focused,
    /// Lost focus with the given status
    Unfocused(FieldStatus),
}

/// One form field: value, focus and last validation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    value: CardField,
    focused: bool,
    status: FieldStatus,
}

impl FormField {
    /// Empty, unfocused field of `kind`
    #[must_use]
    pub fn new(kind: FieldKind) -> Self {
        Self {
            value: CardField::empty(kind),
            focused: false,
            status: FieldStatus::Unvalidated,
        }
    }

    /// Field kind
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.value.kind()
    }

    /// Current value
    #[must_use]
    pub fn value(&self) -> &CardField {
        &self.value
    }

    /// Last validation result
    #[must_use]
    pub fn status(&self) -> FieldStatus {
        self.status
    }

    /// Whether the error message should show
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.status == FieldStatus::Invalid
    }

    /// Lifecycle phase
    #[must_use]
    pub fn phase(&self) -> FieldPhase {
        if self.focused {
            FieldPhase::Focused
        } else if self.value.is_empty() && self.status == FieldStatus::Unvalidated {
            FieldPhase::Empty
        } else {
            FieldPhase::Unfocused(self.status)
        }
    }

    /// Input gained focus
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Input lost focus; run the check
    pub fn blur(&mut self) {
        self.focused = false;
        self.status = if self.value.is_empty() {
            FieldStatus::Unvalidated
        } else if self.value.is_valid() {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        };
        debug!("{:?} blurred: {:?}", self.kind(), self.status);
    }

    /// Edit a slot. Any previous result is dropped until the next blur.
    /// Returns false when `input` does not fit this field's kind.
    pub fn edit(&mut self, input: FieldInput) -> bool {
        if !self.value.apply(input) {
            tracing::warn!("Ignoring edit: no such slot on {:?} field", self.kind());
            return false;
        }
        self.status = FieldStatus::Unvalidated;
        true
    }
}

// =============================================================================
// Form
// =============================================================================

/// Plain copy of what was entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    /// Cardholder name
    pub name: String,
    /// Card number
    pub card_number: String,
    /// Expiry month
    pub expiry_month: String,
    /// Expiry year
    pub expiry_year: String,
    /// Security code
    pub cvv: String,
}

/// The four card fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardForm {
    /// Cardholder name
    pub name: FormField,
    /// Card number
    pub card_number: FormField,
    /// Expiry month and year
    pub expiry: FormField,
    /// Security code
    pub cvv: FormField,
}

impl Default for CardForm {
    fn default() -> Self {
        Self {
            name: FormField::new(FieldKind::Name),
            card_number: FormField::new(FieldKind::CardNumber),
            expiry: FormField::new(FieldKind::Expiry),
            cvv: FormField::new(FieldKind::Cvv),
        }
    }
}

impl CardForm {
    /// Empty form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Field by kind
    #[must_use]
    pub fn field(&self, kind: FieldKind) -> &FormField {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::CardNumber => &self.card_number,
            FieldKind::Expiry => &self.expiry,
            FieldKind::Cvv => &self.cvv,
        }
    }

    /// Mutable field by kind
    pub fn field_mut(&mut self, kind: FieldKind) -> &mut FormField {
        match kind {
            FieldKind::Name => &mut self.name,
            FieldKind::CardNumber => &mut self.card_number,
            FieldKind::Expiry => &mut self.expiry,
            FieldKind::Cvv => &mut self.cvv,
        }
    }

    /// Fields in screen order
    #[must_use]
    pub fn fields(&self) -> [&FormField; 4] {
        [&self.name, &self.card_number, &self.expiry, &self.cvv]
    }

    /// Confirm is enabled once every field has input
    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        self.fields().iter().all(|f| f.value().is_complete())
    }

    /// Whether every field passes its format check
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields().iter().all(|f| f.value().is_valid())
    }

    /// Blur every field, as on submit
    pub fn validate_all(&mut self) {
        for kind in [FieldKind::Name, FieldKind::CardNumber, FieldKind::Expiry, FieldKind::Cvv] {
            self.field_mut(kind).blur();
        }
    }

    /// Copy of the entered text
    #[must_use]
    pub fn details(&self) -> CardDetails {
        let mut details = CardDetails::default();
        for field in self.fields() {
            match field.value().clone() {
                CardField::Name { value } => details.name = value,
                CardField::CardNumber { value } => details.card_number = value,
                CardField::Expiry { month, year } => {
                    details.expiry_month = month;
                    details.expiry_year = year;
                }
                CardField::Cvv { value } => details.cvv = value,
            }
        }
        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(kind: FieldKind, text: &str) -> FormField {
        let mut field = FormField::new(kind);
        field.focus();
        field.edit(FieldInput::Text(text.into()));
        field
    }

    #[test]
    fn test_card_number_length() {
        let mut short = typed(FieldKind::CardNumber, "123456789012345");
        short.blur();
        assert_eq!(short.status(), FieldStatus::Invalid);

        let mut exact = typed(FieldKind::CardNumber, "1234567890123456");
        exact.blur();
        assert_eq!(exact.status(), FieldStatus::Valid);
    }

    #[test]
    fn test_card_number_rejects_non_digits() {
        let mut field = typed(FieldKind::CardNumber, "1234 5678 9012 3");
        field.blur();
        assert!(field.is_invalid());
    }

    #[test]
    fn test_edit_clears_invalid() {
        let mut field = typed(FieldKind::Cvv, "12");
        field.blur();
        assert!(field.is_invalid());

        field.focus();
        field.edit(FieldInput::Text("123".into()));
        assert_eq!(field.status(), FieldStatus::Unvalidated);

        field.blur();
        assert_eq!(field.status(), FieldStatus::Valid);
    }

    #[test]
    fn test_phases() {
        let mut field = FormField::new(FieldKind::Name);
        assert_eq!(field.phase(), FieldPhase::Empty);

        field.focus();
        assert_eq!(field.phase(), FieldPhase::Focused);

        field.blur();
        assert_eq!(field.phase(), FieldPhase::Empty);

        field.focus();
        field.edit(FieldInput::Text("Jane Appleseed".into()));
        field.blur();
        assert_eq!(field.phase(), FieldPhase::Unfocused(FieldStatus::Valid));
    }

    #[test]
    fn test_blank_name_is_invalid() {
        let mut field = typed(FieldKind::Name, "   ");
        field.blur();
        assert!(field.is_invalid());
    }

    #[test]
    fn test_expiry_slots() {
        let mut field = FormField::new(FieldKind::Expiry);
        assert!(!field.edit(FieldInput::Text("09".into())));

        assert!(field.edit(FieldInput::Month("09".into())));
        field.blur();
        assert!(field.is_invalid());

        assert!(field.edit(FieldInput::Year("27".into())));
        field.blur();
        assert_eq!(field.status(), FieldStatus::Valid);
    }

    #[test]
    fn test_form_submit_enabled() {
        let mut form = CardForm::new();
        assert!(!form.submit_enabled());

        form.name.edit(FieldInput::Text("Jane".into()));
        form.card_number.edit(FieldInput::Text("1234".into()));
        form.expiry.edit(FieldInput::Month("1".into()));
        form.cvv.edit(FieldInput::Text("1".into()));
        assert!(!form.submit_enabled());

        form.expiry.edit(FieldInput::Year("2".into()));
        assert!(form.submit_enabled());
        assert!(!form.is_valid());

        form.validate_all();
        assert_eq!(form.name.status(), FieldStatus::Valid);
        assert!(form.card_number.is_invalid());
    }

    #[test]
    fn test_details() {
        let mut form = CardForm::new();
        form.field_mut(FieldKind::Name).edit(FieldInput::Text("Jane".into()));
        form.field_mut(FieldKind::Expiry).edit(FieldInput::Year("29".into()));

        let details = form.details();
        assert_eq!(details.name, "Jane");
        assert_eq!(details.expiry_year, "29");
        assert_eq!(details.cvv, "");
    }

    #[test]
    fn test_field_metadata() {
        assert_eq!(FieldKind::Expiry.title(), "Expiry date (MM/YY)");
        assert!(FieldKind::Cvv.is_numeric());
        assert!(!FieldKind::Name.is_numeric());
    }
}
