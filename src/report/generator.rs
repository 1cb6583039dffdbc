use crate::domain::{format_time, AnalyticsRange, Task};
use crate::persistence::atomic_write;
use crate::report::stats::{per_task_breakdown, summary};
use anyhow::Result;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Render the analytics report as markdown
pub fn render_report(tasks: &[Task], range: AnalyticsRange, report_date: NaiveDate) -> String {
    let summary = summary(tasks);
    let mut report = String::new();

    // Header
    report.push_str(&format!("# Productivity Report - {}\n\n", report_date));
    // The range only labels the report; aggregation covers every task
    report.push_str(&format!("_Range: {}_\n\n", range.name()));

    // Summary Section
    report.push_str("## Summary\n\n");
    report.push_str(&format!(
        "- **Total Time Tracked:** {}\n",
        format_time(summary.total_time_spent)
    ));
    report.push_str(&format!(
        "- **Tasks Completed:** {}/{}\n",
        summary.tasks_completed,
        tasks.len()
    ));
    report.push_str(&format!(
        "- **Pomodoro Sessions:** {}\n",
        summary.pomodoros_completed
    ));
    report.push_str(&format!(
        "- **Productivity Score:** {}%\n\n",
        summary.productivity_score
    ));

    // Tasks Breakdown Section
    report.push_str("## Tasks Breakdown\n\n");
    if tasks.is_empty() {
        report.push_str("_No tasks yet._\n");
        return report;
    }

    report.push_str("| Task | Category | Time Spent | Pomodoros | Progress |\n");
    report.push_str("|------|----------|------------|-----------|----------|\n");
    for row in per_task_breakdown(tasks) {
        report.push_str(&format!(
            "| {} | {} | {} | {} | {}% |\n",
            row.name.replace('|', "\\|"),
            row.category.name(),
            format_time(row.time_spent),
            row.completed_pomodoros,
            row.percent_complete
        ));
    }

    report
}

/// Write a report for `report_date`, defaulting to `<dir>/report-YYYY-MM-DD.md`
pub fn generate_report(
    data_dir: &Path,
    tasks: &[Task],
    range: AnalyticsRange,
    report_date: NaiveDate,
    output_path: Option<PathBuf>,
) -> Result<PathBuf> {
    let report = render_report(tasks, range, report_date);

    let output = output_path
        .unwrap_or_else(|| data_dir.join(format!("report-{}.md", report_date.format("%Y-%m-%d"))));

    atomic_write(&output, &report)?;
    tracing::info!(path = %output.display(), tasks = tasks.len(), "report written");

    Ok(output)
}
