//! Modal form state for the registry views.
//!
//! A form holds raw text input plus the identifier of the record being
//! edited, if any. `validate` turns the input into the registry's field set;
//! the registry alone assigns identifiers.

pub mod appointment;
pub mod patient;
pub mod physiotherapist;
pub mod staff;

pub use appointment::AppointmentForm;
pub use patient::PatientForm;
pub use physiotherapist::PhysiotherapistForm;
pub use staff::StaffForm;

use crate::registry::{Entity, Outcome, RecordId, Registry};
use crate::validation::FieldErrors;

/// What a successful save did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Saved {
    Added(RecordId),
    Updated(RecordId),
    /// The record being edited no longer exists; nothing was written.
    Missing(RecordId),
}

pub trait RecordForm {
    type Record: Entity;

    fn validate(&self) -> Result<<Self::Record as Entity>::Fields, FieldErrors>;

    /// Id of the record under edit, `None` when creating.
    fn editing_id(&self) -> Option<&RecordId>;

    fn set_errors(&mut self, errors: FieldErrors);

    /// Clear all input and close the form.
    fn reset(&mut self);
}

/// Validate `form` and write it to `registry`.
///
/// On validation failure the errors are stored on the form, which stays
/// open, and nothing is saved. On success the form is reset.
pub fn save<F: RecordForm>(form: &mut F, registry: &mut Registry<F::Record>) -> Option<Saved> {
    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => {
            form.set_errors(errors);
            return None;
        }
    };

    let saved = match form.editing_id().cloned() {
        Some(id) => match registry.edit(&id, fields) {
            Outcome::Applied => Saved::Updated(id),
            Outcome::Missing => Saved::Missing(id),
        },
        None => Saved::Added(registry.add(fields).id().clone()),
    };
    form.reset();
    Some(saved)
}
