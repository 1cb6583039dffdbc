use crate::domain::{Task, TaskDraft, TaskFilter, TaskId};

/// Ordered collection of tasks
///
/// The store trusts its callers: drafts are validated at the tracker boundary
/// and persistence happens after each mutation, outside the store.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new task built from the draft
    pub fn create(&mut self, draft: TaskDraft) -> &Task {
        self.tasks.push(Task::from_draft(draft));
        &self.tasks[self.tasks.len() - 1]
    }

    /// Replace the editable fields of a task; false if the id is unknown
    pub fn update(&mut self, id: &TaskId, draft: TaskDraft) -> bool {
        match self.find_by_id_mut(id) {
            Some(task) => {
                task.apply_draft(draft);
                true
            }
            None => false,
        }
    }

    /// Remove a task; false if the id is unknown
    pub fn delete(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| &t.id != id);
        self.tasks.len() != before
    }

    /// Flip completion, returning the new state
    pub fn toggle_completion(&mut self, id: &TaskId) -> Option<bool> {
        let task = self.find_by_id_mut(id)?;
        task.is_completed = !task.is_completed;
        Some(task.is_completed)
    }

    /// Tasks matching the filter, in insertion order
    pub fn query(&self, filter: TaskFilter) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |t| match filter {
            TaskFilter::All => true,
            TaskFilter::Active => !t.is_completed,
            TaskFilter::Completed => t.is_completed,
        })
    }

    pub fn find_by_id(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    fn find_by_id_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }

    /// Credit a completed focus session to a task; false if the id is unknown
    pub fn credit_focus_session(&mut self, id: &TaskId, seconds: u64) -> bool {
        match self.find_by_id_mut(id) {
            Some(task) => {
                task.credit_focus_session(seconds);
                true
            }
            None => false,
        }
    }

    /// Wholesale replace (import)
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}
