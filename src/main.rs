mod app;
mod domain;
mod error;
mod input;
mod notifications;
mod persistence;
mod pomodoro;
mod report;
mod store;
mod ticker;
mod tracker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use notifications::SystemNotifier;
use persistence::{
    ensure_tempo_dir, export_filename, init_local_tempo, log_file, snapshot_file, write_export,
    FileSnapshotStore,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use tracker::Tracker;

#[derive(Parser)]
#[command(name = "tempo")]
#[command(about = "A terminal task tracker with a Pomodoro focus timer", long_about = None)]
struct Cli {
    /// Data directory. Defaults to the nearest .tempo directory, then ~/.tempo
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .tempo directory in the current directory
    Init,
    /// Export tasks and settings to a backup file
    Export {
        /// Output file path. Defaults to ./tempo-backup-YYYY-MM-DD.json
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replace all tasks and settings with a backup file
    Import {
        /// Backup file produced by `tempo export`
        file: PathBuf,
    },
    /// Delete all tasks and reset settings
    Clear {
        /// Skip the safety check
        #[arg(long)]
        yes: bool,
    },
    /// Generate an analytics report
    Report {
        /// Date to stamp the report with (YYYY-MM-DD format). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
        /// Output file path. Defaults to <data dir>/report-YYYY-MM-DD.md
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Where log lines go
enum LogSink<'a> {
    Stderr,
    File(&'a Path),
}

fn init_logging(sink: LogSink<'_>) -> Result<()> {
    let filter = EnvFilter::try_from_env("TEMPO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    match sink {
        LogSink::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .try_init();
        }
        LogSink::File(path) => {
            // The TUI owns the terminal, so logs go to a file
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
    }
    Ok(())
}

fn load_tracker(data_dir: &Path) -> Tracker {
    Tracker::load(
        Box::new(FileSnapshotStore::new(snapshot_file(data_dir))),
        Box::new(SystemNotifier),
    )
}

/// Load for commands that read the user's data; a bad snapshot aborts them
fn load_tracker_strict(data_dir: &Path) -> Result<Tracker> {
    let path = snapshot_file(data_dir);
    Tracker::try_load(
        Box::new(FileSnapshotStore::new(&path)),
        Box::new(SystemNotifier),
    )
    .with_context(|| format!("Could not read {}; nothing was written", path.display()))
}

/// Report queued error toasts on stderr for CLI commands
fn print_errors(tracker: &Tracker) {
    for toast in tracker.toasts().active() {
        if toast.severity != notifications::Severity::Success {
            eprintln!("{}: {}", toast.title, toast.message);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // Run the normal TUI application
        return run_tui(cli.dir.as_deref());
    };

    init_logging(LogSink::Stderr)?;

    match command {
        Commands::Init => {
            // Initialize local .tempo directory
            let tempo_dir = init_local_tempo()?;
            println!("Initialized tempo directory: {}", tempo_dir.display());
            println!();
            println!("Tempo will now use this local directory for its data.");
            println!("Run 'tempo' to start tracking tasks.");
        }
        Commands::Export { output } => {
            let data_dir = ensure_tempo_dir(cli.dir.as_deref())?;
            let tracker = load_tracker_strict(&data_dir)?;

            let today = chrono::Local::now().date_naive();
            let path = output.unwrap_or_else(|| PathBuf::from(export_filename(today)));
            write_export(&path, &tracker.export_document())?;
            println!(
                "Exported {} tasks to {}",
                tracker.task_store().len(),
                path.display()
            );
        }
        Commands::Import { file } => {
            let data_dir = ensure_tempo_dir(cli.dir.as_deref())?;
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read backup: {}", file.display()))?;

            let mut tracker = load_tracker(&data_dir);
            tracker.import_document(&content)?;
            print_errors(&tracker);
            println!(
                "Imported {} tasks into {}",
                tracker.task_store().len(),
                data_dir.display()
            );
        }
        Commands::Clear { yes } => {
            if !yes {
                anyhow::bail!(
                    "This will permanently delete all your tasks and reset settings. Re-run with --yes to confirm."
                );
            }
            let data_dir = ensure_tempo_dir(cli.dir.as_deref())?;
            let mut tracker = load_tracker(&data_dir);
            tracker.clear_all_data();
            print_errors(&tracker);
            println!("All data cleared in {}", data_dir.display());
        }
        Commands::Report { date, output } => {
            let report_date = match date {
                Some(date_str) => chrono::NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                    .map_err(|e| anyhow::anyhow!("Invalid date format. Use YYYY-MM-DD: {}", e))?,
                None => chrono::Local::now().date_naive(),
            };

            let data_dir = ensure_tempo_dir(cli.dir.as_deref())?;
            let tracker = load_tracker_strict(&data_dir)?;

            println!("Generating report for {}...", report_date);
            let report_path = report::generate_report(
                &data_dir,
                tracker.task_store().tasks(),
                tracker.analytics_range(),
                report_date,
                output,
            )?;
            println!("Report generated: {}", report_path.display());
        }
    }

    Ok(())
}

fn run_tui(dir: Option<&Path>) -> Result<()> {
    // Ensure tempo directory exists
    let data_dir = ensure_tempo_dir(dir)?;
    init_logging(LogSink::File(&log_file(&data_dir)))?;

    // Show which directory we're using
    eprintln!("Using tempo directory: {}", data_dir.display());
    tracing::info!(dir = %data_dir.display(), "starting tui");

    let tracker = load_tracker(&data_dir);
    let mut app = AppState::new(tracker, data_dir);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = &result {
        tracing::error!("TUI exited with error: {:#}", err);
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Run due timer seconds and expire toasts
        app.tick(Instant::now());
    }
}
