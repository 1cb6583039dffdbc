use super::enums::{Category, Priority};
use crate::error::ValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque task identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generate a fresh unique id
    pub fn generate() -> Self {
        Self(format!("task_{}", Uuid::new_v4().simple()))
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn default_estimate() -> u32 {
    1
}

/// A tracked task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub priority: Priority,
    /// May be 0 in imported data
    #[serde(default = "default_estimate")]
    pub estimated_pomodoros: u32,
    #[serde(default)]
    pub completed_pomodoros: u32,
    /// Seconds credited by completed focus sessions
    #[serde(default)]
    pub time_spent: u64,
    #[serde(default)]
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

impl Task {
    /// Build a new task from a draft, applying defaults
    pub fn from_draft(draft: TaskDraft) -> Self {
        let estimated_pomodoros = draft.estimate();
        Self {
            id: TaskId::generate(),
            name: draft.name,
            description: draft.description,
            category: draft.category,
            priority: draft.priority,
            estimated_pomodoros,
            completed_pomodoros: 0,
            time_spent: 0,
            is_completed: false,
            created_at: Utc::now(),
            deadline: draft.deadline,
        }
    }

    /// Replace the user-editable fields from a draft
    pub fn apply_draft(&mut self, draft: TaskDraft) {
        self.estimated_pomodoros = draft.estimate();
        self.name = draft.name;
        self.description = draft.description;
        self.category = draft.category;
        self.priority = draft.priority;
        self.deadline = draft.deadline;
    }

    /// Credit one completed focus session
    pub fn credit_focus_session(&mut self, seconds: u64) {
        self.completed_pomodoros = self.completed_pomodoros.saturating_add(1);
        self.time_spent = self.time_spent.saturating_add(seconds);
    }

    /// Pomodoro progress as a whole percentage, 0 when nothing is estimated
    pub fn pomodoro_percent(&self) -> u32 {
        if self.estimated_pomodoros == 0 {
            return 0;
        }
        let done = u64::from(self.completed_pomodoros);
        let estimate = u64::from(self.estimated_pomodoros);
        // Round half up, matching percentage display elsewhere
        ((done * 200 + estimate) / (estimate * 2)) as u32
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_completed && self.deadline.is_some_and(|d| d < today)
    }
}

/// User-supplied fields for creating or editing a task
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    /// None or 0 falls back to a single pomodoro
    pub estimated_pomodoros: Option<u32>,
    pub deadline: Option<NaiveDate>,
}

impl TaskDraft {
    #[cfg(test)]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Trim text fields and reject a blank name
    pub fn validated(mut self) -> Result<Self, ValidationError> {
        self.name = self.name.trim().to_string();
        self.description = self.description.trim().to_string();
        if self.name.is_empty() {
            return Err(ValidationError::BlankName);
        }
        Ok(self)
    }

    fn estimate(&self) -> u32 {
        match self.estimated_pomodoros {
            Some(n) if n > 0 => n,
            _ => default_estimate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_draft_defaults() {
        let task = Task::from_draft(TaskDraft::named("Write report"));
        assert_eq!(task.name, "Write report");
        assert_eq!(task.description, "");
        assert_eq!(task.category, Category::Work);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.estimated_pomodoros, 1);
        assert_eq!(task.completed_pomodoros, 0);
        assert_eq!(task.time_spent, 0);
        assert!(!task.is_completed);
        assert!(task.deadline.is_none());
        assert!(task.id.as_str().starts_with("task_"));
    }

    #[test]
    fn test_zero_estimate_draft_becomes_one() {
        let mut draft = TaskDraft::named("Zero");
        draft.estimated_pomodoros = Some(0);
        assert_eq!(Task::from_draft(draft).estimated_pomodoros, 1);
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(TaskId::generate(), TaskId::generate());
    }

    #[test]
    fn test_validated_trims_and_rejects_blank() {
        let draft = TaskDraft::named("  Read  ").validated().unwrap();
        assert_eq!(draft.name, "Read");

        assert_eq!(
            TaskDraft::named("   ").validated(),
            Err(ValidationError::BlankName)
        );
    }

    #[test]
    fn test_apply_draft_keeps_counters() {
        let mut task = Task::from_draft(TaskDraft::named("Old"));
        task.credit_focus_session(1500);
        task.is_completed = true;
        let id = task.id.clone();
        let created = task.created_at;

        let mut draft = TaskDraft::named("New");
        draft.priority = Priority::High;
        draft.estimated_pomodoros = Some(3);
        task.apply_draft(draft);

        assert_eq!(task.name, "New");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.estimated_pomodoros, 3);
        assert_eq!(task.id, id);
        assert_eq!(task.created_at, created);
        assert_eq!(task.completed_pomodoros, 1);
        assert_eq!(task.time_spent, 1500);
        assert!(task.is_completed);
    }

    #[test]
    fn test_pomodoro_percent() {
        let mut task = Task::from_draft(TaskDraft::named("T"));
        task.estimated_pomodoros = 3;
        task.completed_pomodoros = 1;
        assert_eq!(task.pomodoro_percent(), 33);
        task.completed_pomodoros = 2;
        assert_eq!(task.pomodoro_percent(), 67);
        task.estimated_pomodoros = 0;
        assert_eq!(task.pomodoro_percent(), 0);
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let json = r#"{
            "id": "task_1700000000000_abc123xyz",
            "name": "Imported",
            "estimatedPomodoros": 0,
            "timeSpent": 3000,
            "createdAt": "2024-01-15T10:00:00.000Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id.as_str(), "task_1700000000000_abc123xyz");
        assert_eq!(task.estimated_pomodoros, 0);
        assert_eq!(task.time_spent, 3000);
        assert_eq!(task.category, Category::Work);
        assert!(task.deadline.is_none());
    }

    #[test]
    fn test_is_overdue() {
        let mut task = Task::from_draft(TaskDraft::named("Due"));
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        task.deadline = NaiveDate::from_ymd_opt(2024, 3, 9);
        assert!(task.is_overdue(today));
        task.is_completed = true;
        assert!(!task.is_overdue(today));
    }
}
