use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Name of the per-project data directory
pub const DATA_DIR_NAME: &str = ".tempo";

/// Get the tempo directory - an explicit override wins, then a local .tempo,
/// then the global ~/.tempo
fn get_tempo_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }

    // Check for local .tempo directory
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_tempo(&current_dir) {
        return Ok(local_dir);
    }

    // Fall back to global ~/.tempo
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(DATA_DIR_NAME))
}

/// Find local .tempo directory by walking up the directory tree
fn find_local_tempo(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let tempo_dir = current.join(DATA_DIR_NAME);
        if tempo_dir.is_dir() {
            return Some(tempo_dir);
        }

        current = current.parent()?;
    }
}

/// Resolve the tempo directory and make sure it exists
pub fn ensure_tempo_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    let dir = get_tempo_dir(override_dir)?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .tempo directory in the current directory
pub fn init_local_tempo() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let tempo_dir = current_dir.join(DATA_DIR_NAME);

    if tempo_dir.exists() {
        anyhow::bail!("Tempo directory already exists: {}", tempo_dir.display());
    }

    fs::create_dir_all(&tempo_dir)
        .with_context(|| format!("Failed to create directory: {}", tempo_dir.display()))?;

    Ok(tempo_dir)
}

/// Path of the snapshot file inside a data directory
pub fn snapshot_file(dir: &Path) -> PathBuf {
    dir.join("tempo.json")
}

/// Path of the log file used while the TUI owns the terminal
pub fn log_file(dir: &Path) -> PathBuf {
    dir.join("tempo.log")
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Create temp file in the same directory
    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    // Atomically rename temp file to target
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, None if the file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Copy a file aside with a timestamp suffix
pub fn backup_file<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(path.to_path_buf());
    }

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let backup_path = path.with_extension(format!("bak.{}.json", timestamp));

    fs::copy(path, &backup_path)
        .with_context(|| format!("Failed to backup file: {}", path.display()))?;

    Ok(backup_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_dir_wins() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = get_tempo_dir(Some(temp_dir.path())).unwrap();
        assert_eq!(dir, temp_dir.path());
    }

    #[test]
    fn test_find_local_tempo_walks_up() {
        let temp_dir = tempfile::tempdir().unwrap();
        let local = temp_dir.path().join(DATA_DIR_NAME);
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&local).unwrap();
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_local_tempo(&nested), Some(local));
    }

    #[test]
    fn test_ensure_creates_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let target = temp_dir.path().join("data");
        let dir = ensure_tempo_dir(Some(&target)).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_atomic_write_and_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.json");

        atomic_write(&test_file, "{}").unwrap();
        assert_eq!(read_file(&test_file).unwrap().as_deref(), Some("{}"));

        atomic_write(&test_file, "[]").unwrap();
        assert_eq!(read_file(&test_file).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_read_nonexistent_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("nonexistent.json");

        assert!(read_file(&test_file).unwrap().is_none());
    }

    #[test]
    fn test_backup_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("tempo.json");

        atomic_write(&test_file, "corrupt").unwrap();
        let backup_path = backup_file(&test_file).unwrap();

        assert_ne!(backup_path, test_file);
        assert_eq!(read_file(&backup_path).unwrap().as_deref(), Some("corrupt"));
    }
}
