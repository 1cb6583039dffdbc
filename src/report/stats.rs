use crate::domain::{Category, Task};

/// Headline analytics across all tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Seconds
    pub total_time_spent: u64,
    pub tasks_completed: usize,
    pub pomodoros_completed: u64,
    /// Completed-task ratio as a whole percentage
    pub productivity_score: u32,
}

/// One row of the per-task analytics table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBreakdown<'a> {
    pub name: &'a str,
    pub category: Category,
    pub time_spent: u64,
    pub completed_pomodoros: u32,
    pub percent_complete: u32,
}

/// Round `part / whole * 100` half up; 0 for an empty whole
fn percent(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part * 200 + whole) / (whole * 2)) as u32
}

/// Calculate the summary metrics
pub fn summary(tasks: &[Task]) -> Summary {
    let total_time_spent = tasks.iter().map(|t| t.time_spent).sum();
    let tasks_completed = tasks.iter().filter(|t| t.is_completed).count();
    let pomodoros_completed = tasks.iter().map(|t| u64::from(t.completed_pomodoros)).sum();

    Summary {
        total_time_spent,
        tasks_completed,
        pomodoros_completed,
        productivity_score: productivity_score(tasks),
    }
}

/// Completed tasks as a percentage of all tasks (0 with no tasks)
pub fn productivity_score(tasks: &[Task]) -> u32 {
    let completed = tasks.iter().filter(|t| t.is_completed).count();
    percent(completed as u64, tasks.len() as u64)
}

/// Lazily produce one breakdown row per task, in store order
pub fn per_task_breakdown(tasks: &[Task]) -> impl Iterator<Item = TaskBreakdown<'_>> + '_ {
    tasks.iter().map(|task| TaskBreakdown {
        name: &task.name,
        category: task.category,
        time_spent: task.time_spent,
        completed_pomodoros: task.completed_pomodoros,
        percent_complete: if task.is_completed {
            100
        } else {
            task.pomodoro_percent()
        },
    })
}
