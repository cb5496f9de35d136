//! Update-profile form state (the view-model).

use findhelper_api::validate::{validate, FieldErrors, FormField, FormValues};
use findhelper_api::{AvailabilityTime, Location, ServiceProvider, UpdateServiceProviderRequest};

/// Banner text shown when the initial load fails.
pub const FETCH_ERROR_MESSAGE: &str = "An error occurred while fetching the data.";
/// Banner text shown when the update request fails.
pub const SUBMIT_ERROR_MESSAGE: &str = "An error occurred. Please try again.";
/// Acknowledgment text shown when the update succeeds.
pub const SUCCESS_MESSAGE: &str = "Service Provider updated successfully";

/// Focus/traversal order of the form fields.
pub const FIELD_ORDER: [FormField; 7] = [
    FormField::Fname,
    FormField::Lname,
    FormField::Experience,
    FormField::CostPerHour,
    FormField::AvailabilityTime,
    FormField::AvailableLocations,
    FormField::CategoryName,
];

/// The editable service-provider form.
///
/// Every field is a materialized `String` (empty when the backend had no
/// value), which keeps rendering and editing uniform. Only the update layer
/// mutates this struct.
#[derive(Debug, Default)]
pub struct FormState {
    pub fname: String,
    pub lname: String,
    pub experience: String,
    pub cost_per_hour: String,
    /// Availability slot wire name ("" = not selected).
    pub availability_time: String,
    /// Selected location name ("" = not selected).
    pub available_locations: String,
    /// Read-only; populated by the backend, still part of the payload.
    pub category_name: String,

    /// Location list fetched alongside the record; immutable after load.
    pub locations: Vec<Location>,

    /// Per-field validation errors from the last submit attempt.
    pub errors: FieldErrors,
    /// Top-level banner error. Overwritten by each new failure.
    pub banner_error: Option<String>,

    /// Initial/refresh load in flight.
    pub loading: bool,
    /// Update request in flight; blocks further submits.
    pub submitting: bool,
    /// Monotonic load counter; completions carrying an older value are stale.
    pub load_generation: u64,

    /// Currently focused field.
    pub focus: FormField,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Loading ==========

    /// Start a (re)load: bump the generation, mark loading, clear the banner.
    /// Returns the generation the completion event must carry to be applied.
    pub fn begin_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.loading = true;
        self.banner_error = None;
        self.load_generation
    }

    /// Project a fetched record and location list into the form.
    pub fn apply_loaded(&mut self, provider: ServiceProvider, locations: Vec<Location>) {
        self.fname = provider.fname;
        self.lname = provider.lname;
        self.experience = provider.experience;
        self.cost_per_hour = provider.cost_per_hour;
        self.availability_time = provider.availability_time;
        self.available_locations = provider.available_locations;
        self.category_name = provider.category_name;
        self.locations = locations;
        self.loading = false;
        self.banner_error = None;
        self.errors = FieldErrors::default();
    }

    /// Record a failed load: fields keep their defaults, the banner is set.
    pub fn load_failed(&mut self) {
        self.loading = false;
        self.banner_error = Some(FETCH_ERROR_MESSAGE.to_string());
    }

    // ========== Focus ==========

    pub fn focus_next(&mut self) {
        self.focus = Self::neighbor(self.focus, 1);
    }

    pub fn focus_prev(&mut self) {
        self.focus = Self::neighbor(self.focus, FIELD_ORDER.len() - 1);
    }

    fn neighbor(field: FormField, step: usize) -> FormField {
        let index = FIELD_ORDER
            .iter()
            .position(|f| *f == field)
            .unwrap_or_default();
        FIELD_ORDER[(index + step) % FIELD_ORDER.len()]
    }

    /// Whether the focused field is a select control.
    #[must_use]
    pub fn focus_is_select(&self) -> bool {
        matches!(
            self.focus,
            FormField::AvailabilityTime | FormField::AvailableLocations
        )
    }

    // ========== Editing ==========

    /// Current value of `field`.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Fname => &self.fname,
            FormField::Lname => &self.lname,
            FormField::Experience => &self.experience,
            FormField::CostPerHour => &self.cost_per_hour,
            FormField::AvailabilityTime => &self.availability_time,
            FormField::AvailableLocations => &self.available_locations,
            FormField::CategoryName => &self.category_name,
        }
    }

    /// Append `ch` to the focused field. Selects and the read-only category
    /// field ignore typed input. Editing clears the field's inline error.
    pub fn input(&mut self, ch: char) {
        let field = self.focus;
        if let Some(value) = self.text_field_mut(field) {
            value.push(ch);
            self.errors.clear(field);
        }
    }

    /// Remove the last character of the focused field.
    pub fn backspace(&mut self) {
        let field = self.focus;
        if let Some(value) = self.text_field_mut(field) {
            value.pop();
            self.errors.clear(field);
        }
    }

    fn text_field_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Fname => Some(&mut self.fname),
            FormField::Lname => Some(&mut self.lname),
            FormField::Experience => Some(&mut self.experience),
            FormField::CostPerHour => Some(&mut self.cost_per_hour),
            // Selects cycle via ←/→; category is read-only.
            FormField::AvailabilityTime
            | FormField::AvailableLocations
            | FormField::CategoryName => None,
        }
    }

    // ========== Selects ==========

    /// Options for the focused select, "" first (the not-selected state).
    #[must_use]
    pub fn select_options(&self) -> Vec<&str> {
        match self.focus {
            FormField::AvailabilityTime => std::iter::once("")
                .chain(AvailabilityTime::ALL.iter().map(|a| a.wire_name()))
                .collect(),
            FormField::AvailableLocations => std::iter::once("")
                .chain(self.locations.iter().map(|l| l.location.as_str()))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Cycle the focused select forward or backward through its options,
    /// wrapping at either end. No-op on non-select fields.
    pub fn cycle_option(&mut self, forward: bool) {
        let options: Vec<String> = self.select_options().iter().map(ToString::to_string).collect();
        if options.is_empty() {
            return;
        }
        let current = self.value(self.focus);
        let index = options
            .iter()
            .position(|o| o == current)
            .unwrap_or_default();
        let next = if forward {
            (index + 1) % options.len()
        } else {
            (index + options.len() - 1) % options.len()
        };
        let value = options[next].clone();
        match self.focus {
            FormField::AvailabilityTime => self.availability_time = value,
            FormField::AvailableLocations => self.available_locations = value,
            _ => {}
        }
    }

    // ========== Submitting ==========

    /// Validate the form and, when it passes, build the update payload.
    ///
    /// On failure the per-field errors are stored for rendering and `None`
    /// is returned: the caller must not issue the request.
    pub fn prepare_submit(&mut self) -> Option<UpdateServiceProviderRequest> {
        let errors = validate(&FormValues {
            fname: &self.fname,
            lname: &self.lname,
            experience: &self.experience,
            cost_per_hour: &self.cost_per_hour,
        });

        if errors.is_empty() {
            self.errors = FieldErrors::default();
            Some(UpdateServiceProviderRequest {
                fname: self.fname.clone(),
                lname: self.lname.clone(),
                experience: self.experience.clone(),
                cost_per_hour: self.cost_per_hour.clone(),
                availability_time: self.availability_time.clone(),
                available_locations: self.available_locations.clone(),
                category_name: self.category_name.clone(),
            })
        } else {
            self.errors = errors;
            None
        }
    }
}
