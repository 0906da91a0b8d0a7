//! GanttRoll Core
//!
//! Everything the chart editor does that does not need a browser:
//! - project: task list, active scale, visible window
//! - timeline: unit <-> pixel geometry, unit dates, ISO weeks
//! - gesture: drag/resize state machine
//! - labels: header and range text
//! - persistence: storage record and theme preference

pub mod config;
pub mod error;
pub mod gesture;
pub mod labels;
pub mod persistence;
pub mod project;
pub mod scale;
pub mod task;
pub mod timeline;

pub use config::AppConfig;
pub use error::{GanttError, Result};
pub use gesture::Gesture;
pub use persistence::{KeyValueStore, MemoryStore, Theme};
pub use project::Project;
pub use scale::{Scale, ScaleState, ScaleStates, Unit};
pub use task::{Task, TaskId, TaskSeed};
pub use timeline::BarGeometry;
