//! State transition services for the terminal to-do list.
//!
//! This module provides the pure transition function that turns a task
//! list snapshot and a user event into the next snapshot. All list
//! updates in the application flow through here.

use super::errors::{DomainError, DomainResult};
use super::events::TaskEvent;
use super::models::{TaskId, TaskList, TaskRecord};

/// Computes the next task list snapshot for a user event.
///
/// The input list is never mutated; the result is always a freshly built
/// value. Events carrying an id that is not present in the list fail with
/// [`DomainError::UnknownTask`], leaving the caller free to keep the old
/// snapshot.
///
/// Submitting with an empty pending input is accepted and creates a task
/// with empty text.
///
/// # Examples
///
/// ```
/// use ttodo::domain::{apply, TaskEvent, TaskList};
///
/// let list = TaskList::default();
/// let list = apply(&list, TaskEvent::InputChanged("Walk dog".to_string())).unwrap();
/// let list = apply(&list, TaskEvent::Submitted).unwrap();
///
/// assert_eq!(list.tasks[0].text, "Walk dog");
/// assert!(!list.tasks[0].completed);
/// assert!(list.pending_input.is_empty());
/// ```
pub fn apply(list: &TaskList, event: TaskEvent) -> DomainResult<TaskList> {
    match event {
        TaskEvent::InputChanged(text) => Ok(TaskList {
            pending_input: text,
            ..list.clone()
        }),
        TaskEvent::Submitted => Ok(submit(list)),
        TaskEvent::CheckToggled { id, checked } => {
            replace_task(list, id, |task| TaskRecord {
                completed: checked,
                ..task.clone()
            })
        }
        TaskEvent::TextEdited { id, text } => replace_task(list, id, |task| TaskRecord {
            text,
            ..task.clone()
        }),
    }
}

/// Prepends a new uncompleted task built from the pending input.
///
/// The new record becomes index 0 and receives a fresh id; the pending
/// input is cleared.
fn submit(list: &TaskList) -> TaskList {
    let record = TaskRecord {
        id: TaskId(list.next_id),
        text: list.pending_input.clone(),
        completed: false,
    };

    let mut tasks = Vec::with_capacity(list.tasks.len() + 1);
    tasks.push(record);
    tasks.extend(list.tasks.iter().cloned());

    TaskList {
        tasks,
        pending_input: String::new(),
        next_id: list.next_id + 1,
    }
}

/// Replaces the record with the given id by `f(old)`, leaving all other
/// records untouched.
fn replace_task<F>(list: &TaskList, id: TaskId, f: F) -> DomainResult<TaskList>
where
    F: FnOnce(&TaskRecord) -> TaskRecord,
{
    let index = list.position(id).ok_or(DomainError::UnknownTask(id))?;

    let mut tasks = list.tasks.clone();
    tasks[index] = f(&tasks[index]);

    Ok(TaskList {
        tasks,
        ..list.clone()
    })
}
