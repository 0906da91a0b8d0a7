//! UI Components
//!
//! Leptos components of the chart editor.

mod delete_modal;
mod gantt_chart;
pub mod project_header;
mod task_row;
mod toolbar;

pub use delete_modal::DeleteModal;
pub use gantt_chart::GanttChart;
pub use project_header::ProjectHeader;
pub use task_row::TaskRow;
pub use toolbar::Toolbar;
