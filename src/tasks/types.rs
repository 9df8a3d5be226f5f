use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "Working on it")]
    WorkingOnIt,
    Stuck,
    #[serde(rename = "Waiting for review")]
    WaitingForReview,
    Done,
    Error,
    Info,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::WorkingOnIt => "Working on it",
            TaskStatus::Stuck => "Stuck",
            TaskStatus::WaitingForReview => "Waiting for review",
            TaskStatus::Done => "Done",
            TaskStatus::Error => "Error",
            TaskStatus::Info => "Info",
        }
    }

    /// Error and Info records describe the batch, not real work items.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, TaskStatus::Error | TaskStatus::Info)
    }
}

/// One extracted task as returned by the backend. Field names on the wire
/// are camelCase (`dueDate`); confidence may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub item: String,
    pub assignee: String,
    pub priority: Priority,
    pub status: TaskStatus,
    #[serde(rename = "dueDate", default)]
    pub due_date: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub description: String,
}

impl Task {
    /// Absent confidence renders as empty, never as a null literal.
    pub fn confidence_text(&self) -> String {
        self.confidence.map(|c| c.to_string()).unwrap_or_default()
    }
}
