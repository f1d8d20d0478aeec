/// Opaque stable identifier for a task, assigned at creation.
///
/// Ids are never reused within a session, so views and events can refer
/// to a task without depending on its current position in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    /// Ordered task records, newest first.
    pub tasks: Vec<TaskRecord>,
    /// Content of the not-yet-submitted new-task field.
    pub pending_input: String,
    /// Next id to hand out on submit.
    pub next_id: u64,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::seeded(&[
            (false, "Buy groceries"),
            (true, "Do chores"),
            (false, "Prepare dinner"),
        ])
    }
}

impl TaskList {
    /// Builds a list from `(completed, text)` pairs, assigning fresh ids in order.
    pub fn seeded(seed: &[(bool, &str)]) -> Self {
        let tasks: Vec<TaskRecord> = seed
            .iter()
            .enumerate()
            .map(|(i, &(completed, text))| TaskRecord {
                id: TaskId(i as u64),
                text: text.to_string(),
                completed,
            })
            .collect();
        Self {
            next_id: tasks.len() as u64,
            tasks,
            pending_input: String::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TaskRecord> {
        self.tasks.get(index)
    }

    pub fn find(&self, id: TaskId) -> Option<&TaskRecord> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }
}
