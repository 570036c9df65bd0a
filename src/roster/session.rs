use crate::model::Student;

/// Form controller state: whether a submit creates or updates a record.
///
/// At most one edit session exists at a time. `Editing` holds a by-value
/// snapshot of the record taken when the edit began, not a live binding, so
/// later store reloads do not change what the form was seeded with. The
/// session ends on successful update, explicit cancel, or successful delete
/// of the same record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Editing(Student),
}

impl FormState {
    pub fn is_editing(&self) -> bool {
        matches!(self, FormState::Editing(_))
    }

    /// The id of the record being edited, if any.
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            FormState::Editing(student) => student.id.as_deref(),
            FormState::Idle => None,
        }
    }

    /// The snapshot the form was seeded with, if editing.
    pub fn snapshot(&self) -> Option<&Student> {
        match self {
            FormState::Editing(student) => Some(student),
            FormState::Idle => None,
        }
    }
}
