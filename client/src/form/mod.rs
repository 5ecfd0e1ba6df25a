//! Generic form controller shared by every account form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `FormController` owns field values, per-field errors, and the submit
//! lifecycle as plain data so it can be driven from tests without a browser.
//! `hook::use_form` wraps it in a signal and runs the async halves
//! (submit handler, existence check) on the UI task.
//!
//! Lifecycle: `Idle -> Editing -> Validating -> {Invalid, Submitting}`,
//! `Submitting -> {Succeeded, Failed}`. Any edit returns to `Editing`.


pub mod hook;
pub mod validate;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Live field values keyed by field name.
pub type FormState = BTreeMap<String, String>;

/// Field name to human-readable message. A missing key means the field is valid.
pub type ErrorState = BTreeMap<String, String>;

type ValidateFn = Arc<dyn Fn(&FormState) -> ErrorState + Send + Sync>;
type ConflictMessageFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Editing,
    Validating,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

/// What `begin_submit` decided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Validation passed; run the submit handler with this snapshot.
    Proceed(FormState),
    /// Validation failed; the handler must not run.
    Rejected(ErrorState),
    /// A submission is already in flight.
    Busy,
}

#[derive(Clone)]
pub struct FormController {
    values: FormState,
    errors: ErrorState,
    /// "Already exists" results from the existence check, kept apart from
    /// validation so a re-validate does not drop them.
    conflicts: ErrorState,
    phase: FormPhase,
    submit_error: Option<String>,
    validate: ValidateFn,
    conflict_message: ConflictMessageFn,
}

impl fmt::Debug for FormController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormController")
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("conflicts", &self.conflicts)
            .field("phase", &self.phase)
            .field("submit_error", &self.submit_error)
            .finish_non_exhaustive()
    }
}

impl FormController {
    /// Create a form whose schema is the key set of `initial`.
    pub fn new<I, K, V, F>(initial: I, validate: F) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
        F: Fn(&FormState) -> ErrorState + Send + Sync + 'static,
    {
        Self {
            values: initial.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            errors: ErrorState::new(),
            conflicts: ErrorState::new(),
            phase: FormPhase::Idle,
            submit_error: None,
            validate: Arc::new(validate),
            conflict_message: Arc::new(|field: &str| format!("{field} already exists")),
        }
    }

    /// Override the message shown when the existence check reports a conflict.
    #[must_use]
    pub fn with_conflict_message<F>(mut self, message: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.conflict_message = Arc::new(message);
        self
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map_or("", String::as_str)
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Failure reported by the last submit handler, if any.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Set `field` to `value`. Returns `false` for a field outside the schema.
    ///
    /// A field that currently shows an error is re-validated and its error is
    /// cleared once it validates clean.
    pub fn handle_change(&mut self, field: &str, value: impl Into<String>) -> bool {
        let Some(slot) = self.values.get_mut(field) else {
            return false;
        };
        *slot = value.into();
        self.conflicts.remove(field);

        if self.errors.contains_key(field) {
            match self.validation_errors().remove(field) {
                Some(message) => {
                    self.errors.insert(field.to_owned(), message);
                }
                None => {
                    self.errors.remove(field);
                }
            }
        }

        if self.phase != FormPhase::Submitting {
            self.phase = FormPhase::Editing;
            self.submit_error = None;
        }
        true
    }

    /// Validate the full form and decide whether the submit handler may run.
    pub fn begin_submit(&mut self) -> SubmitDecision {
        if self.phase == FormPhase::Submitting {
            return SubmitDecision::Busy;
        }
        self.phase = FormPhase::Validating;

        let mut errors = self.validation_errors();
        for (field, message) in &self.conflicts {
            errors.entry(field.clone()).or_insert_with(|| message.clone());
        }
        self.errors = errors;

        if self.errors.is_empty() {
            self.phase = FormPhase::Submitting;
            self.submit_error = None;
            SubmitDecision::Proceed(self.values.clone())
        } else {
            self.phase = FormPhase::Invalid;
            SubmitDecision::Rejected(self.errors.clone())
        }
    }

    /// Record the submit handler's outcome. Ignored unless a submission is pending.
    pub fn finish_submit<E: fmt::Display>(&mut self, result: Result<(), E>) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        match result {
            Ok(()) => self.phase = FormPhase::Succeeded,
            Err(e) => {
                let message = e.to_string();
                leptos::logging::warn!("form submit failed: {message}");
                self.phase = FormPhase::Failed;
                self.submit_error = Some(message);
            }
        }
    }

    /// Snapshot of `field` to hand to the existence check.
    ///
    /// `None` for fields outside the schema and for empty values.
    pub fn begin_check(&self, field: &str) -> Option<String> {
        self.values.get(field).filter(|v| !v.is_empty()).cloned()
    }

    /// Merge an existence-check result computed for `checked_value`.
    ///
    /// A result for a value that is no longer current is discarded. A failed
    /// check is logged and leaves error state unchanged.
    pub fn apply_check<E: fmt::Display>(&mut self, field: &str, checked_value: &str, outcome: Result<bool, E>) {
        if self.values.get(field).map(String::as_str) != Some(checked_value) {
            return;
        }
        match outcome {
            Ok(true) => {
                let message = (self.conflict_message)(field);
                self.conflicts.insert(field.to_owned(), message.clone());
                self.errors.insert(field.to_owned(), message);
            }
            Ok(false) => {
                if let Some(previous) = self.conflicts.remove(field) {
                    if self.errors.get(field) == Some(&previous) {
                        self.errors.remove(field);
                    }
                }
            }
            Err(e) => leptos::logging::warn!("existence check for {field} failed: {e}"),
        }
    }

    /// Validation result restricted to the form's own fields.
    fn validation_errors(&self) -> ErrorState {
        let mut errors = (self.validate)(&self.values);
        errors.retain(|field, _| self.values.contains_key(field));
        errors
    }
}
