use crate::domain::TaskId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    UnknownTask(TaskId),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::UnknownTask(id) => {
                write!(f, "Unknown task: {}", id)
            }
        }
    }
}

impl std::error::Error for DomainError {}

pub type DomainResult<T> = Result<T, DomainError>;
