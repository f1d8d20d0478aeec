use crate::domain::TaskId;

/// User intent reported by the presentation layer.
///
/// Each event is translated into a fresh [`TaskList`](crate::domain::TaskList)
/// snapshot by [`apply`](crate::domain::apply); nothing mutates the list in
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEvent {
    /// The new-task input field content changed to this exact string.
    InputChanged(String),
    /// The new-task input field was submitted.
    Submitted,
    /// A task's checkbox was toggled to this value.
    CheckToggled { id: TaskId, checked: bool },
    /// A task's text edit was completed with this value.
    TextEdited { id: TaskId, text: String },
}
