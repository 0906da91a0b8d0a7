//! Static configuration
//!
//! Storage keys, limits, palette and the built-in default project.

use crate::scale::ScaleState;

/// Local storage key holding the project record
pub const DATA_KEY: &str = "ganttroll-data";
/// Local storage key holding the theme preference
pub const THEME_KEY: &str = "ganttroll-theme";
/// Version tag written into every project record
pub const RECORD_VERSION: &str = "1.0";

pub const MAX_TASK_NAME_CHARS: usize = 30;
pub const MAX_PROJECT_NAME_CHARS: usize = 50;

pub const DEFAULT_PROJECT_NAME: &str = "Mi Proyecto";

/// Colors handed out to new tasks
pub const PALETTE: &[&str] = &[
    "#6366f1", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#06b6d4",
];

/// Geometry given to a freshly added task: (days, weeks, months)
pub const NEW_TASK_GEOMETRY: [ScaleState; 3] = [
    ScaleState::new(0.0, 3.0),
    ScaleState::new(0.0, 1.0),
    ScaleState::new(0.0, 1.0),
];

/// Seed data for the three built-in tasks:
/// (id, name, color, days, weeks, months)
pub const DEFAULT_TASKS: &[(u64, &str, &str, ScaleState, ScaleState, ScaleState)] = &[
    (
        1,
        "Diseño UI/UX",
        "#6366f1",
        ScaleState::new(0.0, 4.0),
        ScaleState::new(0.0, 1.0),
        ScaleState::new(0.0, 1.0),
    ),
    (
        2,
        "Desarrollo Frontend",
        "#10b981",
        ScaleState::new(3.0, 7.0),
        ScaleState::new(1.0, 2.0),
        ScaleState::new(0.0, 1.0),
    ),
    (
        3,
        "Testing QA",
        "#f59e0b",
        ScaleState::new(8.0, 3.0),
        ScaleState::new(2.0, 1.0),
        ScaleState::new(0.0, 1.0),
    ),
];

/// Runtime settings used by the view layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    /// Pixel ratio handed to the canvas snapshot
    pub export_pixel_ratio: f64,
    /// Delay before capturing the off-screen clone
    pub export_settle_ms: u32,
    /// Records kept by the in-memory log buffer
    pub log_buffer_lines: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_pixel_ratio: 2.0,
            export_settle_ms: 100,
            log_buffer_lines: 500,
        }
    }
}
