pub mod files;
pub mod snapshot;
pub mod transfer;

pub use files::{atomic_write, ensure_tempo_dir, init_local_tempo, log_file, snapshot_file};
#[cfg(test)]
pub use snapshot::MemorySnapshotStore;
pub use snapshot::{FileSnapshotStore, Snapshot, SnapshotRef, SnapshotStore};
pub use transfer::{export_filename, parse_import, write_export, ExportDocument};
