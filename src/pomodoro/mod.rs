pub mod engine;

pub use engine::{PomodoroEngine, SessionOutcome};
