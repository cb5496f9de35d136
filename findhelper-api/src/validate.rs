//! Client-side validation of the service-provider form.
//!
//! Pure and synchronous: called once at submit time, never while typing.
//! Only the free-text fields are checked here; the availability and location
//! selects are constrained by their option lists in the UI, and the category
//! field is read-only.

use serde::Serialize;

/// Identity of a form field, used to key validation errors and drive
/// focus order in UIs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    #[default]
    Fname,
    Lname,
    Experience,
    CostPerHour,
    AvailabilityTime,
    AvailableLocations,
    CategoryName,
}

impl FormField {
    /// Human-readable label for UI display.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Fname => "First Name",
            Self::Lname => "Last Name",
            Self::Experience => "Experience",
            Self::CostPerHour => "Cost per Hour",
            Self::AvailabilityTime => "Availability Time",
            Self::AvailableLocations => "Available Locations",
            Self::CategoryName => "Category Name",
        }
    }

    /// Whether the user may edit this field.
    #[must_use]
    pub fn is_editable(self) -> bool {
        !matches!(self, Self::CategoryName)
    }
}

/// Per-field validation errors, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(FormField, &'static str)>,
}

impl FieldErrors {
    /// True when every checked field passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message recorded for `field`, if any.
    #[must_use]
    pub fn message_for(&self, field: FormField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| *msg)
    }

    /// Drop the error recorded for `field`, if any.
    pub fn clear(&mut self, field: FormField) {
        self.errors.retain(|(f, _)| *f != field);
    }

    fn push(&mut self, field: FormField, message: &'static str) {
        self.errors.push((field, message));
    }
}

/// Editable field values handed to [`validate`].
#[derive(Debug, Clone, Copy)]
pub struct FormValues<'a> {
    pub fname: &'a str,
    pub lname: &'a str,
    pub experience: &'a str,
    pub cost_per_hour: &'a str,
}

/// Validate the free-text form fields.
///
/// Rules (matching the production frontend):
/// - first/last name: non-empty, ASCII letters only;
/// - experience / cost per hour: non-empty and numeric-parseable, with no
///   range check (negative and decimal forms pass).
///
/// Returns the per-field error map; an empty map means the form may be
/// submitted.
#[must_use]
pub fn validate(values: &FormValues<'_>) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if !is_letters_only(values.fname) {
        errors.push(FormField::Fname, "First Name must contain only letters.");
    }
    if !is_letters_only(values.lname) {
        errors.push(FormField::Lname, "Last Name must contain only letters.");
    }
    if !is_numeric(values.experience) {
        errors.push(FormField::Experience, "Experience must be a number.");
    }
    if !is_numeric(values.cost_per_hour) {
        errors.push(FormField::CostPerHour, "Cost Per Hour must be a number.");
    }

    errors
}

fn is_letters_only(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_numeric(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    // NaN parses as a float but is not a number the backend accepts.
    value.trim().parse::<f64>().is_ok_and(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<'a>(
        fname: &'a str,
        lname: &'a str,
        experience: &'a str,
        cost: &'a str,
    ) -> FormValues<'a> {
        FormValues {
            fname,
            lname,
            experience,
            cost_per_hour: cost,
        }
    }

    #[test]
    fn all_valid_passes() {
        let errors = validate(&values("Jane", "Doe", "5", "40.5"));
        assert!(errors.is_empty());
    }

    #[test]
    fn letters_only_names_pass() {
        for name in ["a", "Jane", "McGregor", "ZZZZ"] {
            let errors = validate(&values(name, name, "1", "1"));
            assert!(errors.is_empty(), "expected {name:?} to pass");
        }
    }

    #[test]
    fn names_with_digits_spaces_or_symbols_fail() {
        for name in ["Jane1", "Jane Doe", "O'Brien", "Anne-Marie", "J@ne", ""] {
            let errors = validate(&values(name, "Doe", "1", "1"));
            assert_eq!(
                errors.message_for(FormField::Fname),
                Some("First Name must contain only letters."),
                "expected {name:?} to fail"
            );
        }
    }

    #[test]
    fn lname_error_has_its_own_message() {
        let errors = validate(&values("Jane", "Doe2", "1", "1"));
        assert!(errors.message_for(FormField::Fname).is_none());
        assert_eq!(
            errors.message_for(FormField::Lname),
            Some("Last Name must contain only letters.")
        );
    }

    #[test]
    fn numeric_fields_accept_negative_and_decimal() {
        for v in ["5", "0", "-3", "40.5", "-0.25", "1e3"] {
            let errors = validate(&values("Jane", "Doe", v, v));
            assert!(errors.is_empty(), "expected {v:?} to pass");
        }
    }

    #[test]
    fn numeric_fields_reject_empty_and_text() {
        for v in ["", "five", "4o", "NaN", "1.2.3"] {
            let errors = validate(&values("Jane", "Doe", v, "1"));
            assert_eq!(
                errors.message_for(FormField::Experience),
                Some("Experience must be a number."),
                "expected {v:?} to fail"
            );
        }
    }

    #[test]
    fn multiple_failures_are_all_reported() {
        let errors = validate(&values("", "", "", ""));
        assert!(errors.message_for(FormField::Fname).is_some());
        assert!(errors.message_for(FormField::Lname).is_some());
        assert!(errors.message_for(FormField::Experience).is_some());
        assert!(errors.message_for(FormField::CostPerHour).is_some());
    }

    #[test]
    fn clear_drops_single_field() {
        let mut errors = validate(&values("", "", "1", "1"));
        errors.clear(FormField::Fname);
        assert!(errors.message_for(FormField::Fname).is_none());
        assert!(errors.message_for(FormField::Lname).is_some());
    }

    #[test]
    fn category_is_not_editable() {
        assert!(!FormField::CategoryName.is_editable());
        assert!(FormField::Fname.is_editable());
    }
}
