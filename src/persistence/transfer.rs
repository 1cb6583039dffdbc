//! Backup documents for export and import.

use crate::domain::{Settings, Task};
use crate::error::ImportError;
use crate::persistence::files::atomic_write;
use crate::persistence::snapshot::Snapshot;
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Exported backup: the snapshot plus the moment it was taken
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument<'a> {
    pub tasks: &'a [Task],
    pub settings: &'a Settings,
    pub export_date: DateTime<Utc>,
}

impl ExportDocument<'_> {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Default name for a backup taken on `date`
pub fn export_filename(date: NaiveDate) -> String {
    format!("tempo-backup-{}.json", date.format("%Y-%m-%d"))
}

/// Write an export document to `path`
pub fn write_export(path: &Path, document: &ExportDocument<'_>) -> Result<()> {
    atomic_write(path, &document.to_json()?)?;
    tracing::info!(path = %path.display(), tasks = document.tasks.len(), "exported backup");
    Ok(())
}

/// Validate and decode a backup document
///
/// Both `tasks` and `settings` must be present and non-null. Missing settings
/// fields take their defaults; values of the wrong type are rejected. Extra
/// keys such as `exportDate` are ignored.
pub fn parse_import(content: &str) -> Result<Snapshot, ImportError> {
    let mut value: Value = serde_json::from_str(content)?;

    let Some(object) = value.as_object_mut() else {
        return Err(ImportError::MissingKeys);
    };
    let tasks = object.remove("tasks").filter(|v| !v.is_null());
    let settings = object.remove("settings").filter(|v| !v.is_null());

    match (tasks, settings) {
        (Some(tasks), Some(settings)) => Ok(Snapshot {
            tasks: serde_json::from_value(tasks)?,
            settings: serde_json::from_value(settings)?,
        }),
        _ => Err(ImportError::MissingKeys),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, TaskDraft};
    use pretty_assertions::assert_eq;

    fn sample() -> (Vec<Task>, Settings) {
        let mut draft = TaskDraft::named("Study Rust");
        draft.category = Category::Study;
        draft.estimated_pomodoros = Some(3);
        draft.deadline = NaiveDate::from_ymd_opt(2024, 6, 30);
        let mut task = Task::from_draft(draft);
        task.credit_focus_session(1500);

        let mut settings = Settings::default();
        settings.pomodoro.long_break_duration = 20;
        settings.display.accent_color = "#4ECDC4".to_string();

        (vec![task, Task::from_draft(TaskDraft::named("Inbox zero"))], settings)
    }

    #[test]
    fn test_export_then_import_reproduces_state() {
        let (tasks, settings) = sample();
        let json = ExportDocument {
            tasks: &tasks,
            settings: &settings,
            export_date: Utc::now(),
        }
        .to_json()
        .unwrap();

        let snapshot = parse_import(&json).unwrap();
        assert_eq!(snapshot.tasks, tasks);
        assert_eq!(snapshot.settings, settings);
    }

    #[test]
    fn test_export_document_keys() {
        let (tasks, settings) = sample();
        let value = serde_json::to_value(ExportDocument {
            tasks: &tasks,
            settings: &settings,
            export_date: Utc::now(),
        })
        .unwrap();
        assert!(value.get("exportDate").is_some());
        assert!(value["tasks"][0].get("estimatedPomodoros").is_some());
    }

    #[test]
    fn test_export_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
        assert_eq!(export_filename(date), "tempo-backup-2024-02-09.json");
    }

    #[test]
    fn test_missing_or_null_keys_rejected() {
        for doc in [
            r#"{"tasks": []}"#,
            r#"{"settings": {}}"#,
            r#"{"tasks": null, "settings": {}}"#,
            r#"[1, 2, 3]"#,
        ] {
            assert!(
                matches!(parse_import(doc), Err(ImportError::MissingKeys)),
                "accepted {doc}"
            );
        }
    }

    #[test]
    fn test_partial_settings_accepted() {
        let snapshot = parse_import(r#"{"tasks": [], "settings": {}}"#).unwrap();
        assert!(snapshot.tasks.is_empty());
        assert_eq!(snapshot.settings, Settings::default());

        let snapshot =
            parse_import(r#"{"tasks": [], "settings": {"pomodoro": {"focusDuration": 30}}}"#)
                .unwrap();
        assert_eq!(snapshot.settings.pomodoro.focus_duration, 30);
        assert_eq!(snapshot.settings.pomodoro.short_break_duration, 5);
    }

    #[test]
    fn test_unparsable_rejected() {
        assert!(matches!(
            parse_import("not json at all"),
            Err(ImportError::Malformed(_))
        ));
        // Keys present but the wrong shape
        assert!(matches!(
            parse_import(r#"{"tasks": "nope", "settings": {}}"#),
            Err(ImportError::Malformed(_))
        ));
    }

    #[test]
    fn test_write_export() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (tasks, settings) = sample();
        let path = temp_dir.path().join("backup.json");
        write_export(
            &path,
            &ExportDocument {
                tasks: &tasks,
                settings: &settings,
                export_date: Utc::now(),
            },
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(parse_import(&content).unwrap().tasks.len(), 2);
    }
}
