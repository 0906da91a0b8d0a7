//! Persistence
//!
//! JSON record stored under a single key of a key-value store, plus the theme
//! preference. The browser implements [`KeyValueStore`] over `localStorage`;
//! [`MemoryStore`] backs tests and the fallback when storage is unavailable.

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::NaiveDate;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::{DATA_KEY, MAX_TASK_NAME_CHARS, RECORD_VERSION, THEME_KEY};
use crate::error::{GanttError, Result};
use crate::labels::truncate_chars;
use crate::project::Project;
use crate::scale::Scale;
use crate::task::Task;

/// Minimal string key-value storage
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Record written to storage
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectRecord<'a> {
    tasks: &'a [Task],
    current_scale: Scale,
    current_start_date: String,
    project_name: &'a str,
    version: &'static str,
}

/// Record read back; every field is optional so partial records still load
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredProject {
    #[serde(default)]
    tasks: Option<Vec<Task>>,
    #[serde(default)]
    current_scale: Option<String>,
    #[serde(default)]
    current_start_date: Option<String>,
    #[serde(default)]
    project_name: Option<String>,
}

/// Serialize the project in the storage record format
pub fn project_to_json(project: &Project) -> Result<String> {
    let record = ProjectRecord {
        tasks: &project.tasks,
        current_scale: project.current_scale,
        current_start_date: format!("{}T00:00:00.000Z", project.current_start_date.format("%Y-%m-%d")),
        project_name: &project.project_name,
        version: RECORD_VERSION,
    };
    Ok(serde_json::to_string(&record)?)
}

/// Overlay a stored record onto `base`, adopting only fields that are present
/// and valid.
pub fn merge_record(base: &mut Project, json: &str) -> Result<()> {
    let stored: StoredProject = serde_json::from_str(json)?;

    if let Some(mut tasks) = stored.tasks {
        for task in &mut tasks {
            task.name = truncate_chars(&task.name, MAX_TASK_NAME_CHARS);
        }
        base.tasks = tasks;
    }
    if let Some(scale) = stored.current_scale {
        if !base.set_scale(&scale) {
            warn!("ignoring unknown stored scale {:?}", scale);
        }
    }
    if let Some(date) = stored.current_start_date {
        match parse_start_date(&date) {
            Ok(parsed) => base.current_start_date = parsed,
            Err(e) => warn!("{}", e),
        }
    }
    if let Some(name) = stored.project_name {
        base.rename_project(&name);
    }
    Ok(())
}

/// Accepts `YYYY-MM-DD` optionally followed by a time part
pub fn parse_start_date(value: &str) -> Result<NaiveDate> {
    value
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .ok_or_else(|| GanttError::InvalidDate(value.to_string()))
}

/// Load the project from `store`, falling back to `defaults` on a missing or
/// corrupt record.
pub fn load_project(store: &dyn KeyValueStore, defaults: Project) -> Project {
    let raw = match store.get_item(DATA_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("no saved project, using defaults");
            return defaults;
        }
        Err(e) => {
            warn!("failed to read saved project: {}", e);
            return defaults;
        }
    };

    let mut project = defaults.clone();
    match merge_record(&mut project, &raw) {
        Ok(()) => {
            info!("loaded project {:?} with {} tasks", project.project_name, project.tasks.len());
            project
        }
        Err(e) => {
            warn!("error loading saved data: {}", e);
            defaults
        }
    }
}

pub fn save_project(store: &dyn KeyValueStore, project: &Project) -> Result<()> {
    let json = project_to_json(project)?;
    store.set_item(DATA_KEY, &json)
}

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Body class applied for this theme
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Light => "light-theme",
            Theme::Dark => "dark-theme",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Stored theme; anything other than `"light"` means dark
pub fn load_theme(store: &dyn KeyValueStore) -> Theme {
    match store.get_item(THEME_KEY) {
        Ok(Some(value)) if value == "light" => Theme::Light,
        Ok(_) => Theme::Dark,
        Err(e) => {
            warn!("failed to read theme: {}", e);
            Theme::Dark
        }
    }
}

pub fn save_theme(store: &dyn KeyValueStore, theme: Theme) -> Result<()> {
    store.set_item(THEME_KEY, theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ScaleState;
    use crate::task::TaskSeed;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn defaults() -> Project {
        Project::with_defaults(date(2024, 1, 3))
    }

    /// Store whose reads always fail
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Err(GanttError::Storage("denied".to_string()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(GanttError::Storage("denied".to_string()))
        }
    }

    #[test]
    fn test_load_empty_storage_gives_defaults() {
        let store = MemoryStore::new();
        let project = load_project(&store, defaults());
        assert_eq!(project, defaults());
        assert_eq!(project.tasks.len(), 3);
        assert_eq!(project.current_scale, Scale::Days);
    }

    #[test]
    fn test_load_corrupt_storage_gives_defaults() {
        let store = MemoryStore::new();
        store.set_item(DATA_KEY, "{not json").unwrap();
        assert_eq!(load_project(&store, defaults()), defaults());

        store.set_item(DATA_KEY, r#"{"tasks": 5}"#).unwrap();
        assert_eq!(load_project(&store, defaults()), defaults());

        assert_eq!(load_project(&BrokenStore, defaults()), defaults());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        let mut project = defaults();
        project.add_task(TaskSeed::new(1_700_000_000_000, 0.3));
        project.set_scale("months");
        project.navigate(1);
        project.rename_project("Lanzamiento");
        project.task_mut(2).unwrap().state_mut(Scale::Months).duration = 2.75;

        save_project(&store, &project).unwrap();
        let loaded = load_project(&store, defaults());
        assert_eq!(loaded, project);
    }

    #[test]
    fn test_record_shape() {
        let json = project_to_json(&defaults()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], "1.0");
        assert_eq!(value["currentScale"], "days");
        assert_eq!(value["currentStartDate"], "2024-01-01T00:00:00.000Z");
        assert_eq!(value["projectName"], "Mi Proyecto");
        assert_eq!(value["tasks"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_load_record_written_by_browser_app() {
        let store = MemoryStore::new();
        let raw = r##"{
            "tasks": [{"id": 1717171717171, "name": "Tarea 1", "color": "#ef4444",
                "scaleStates": {
                    "days": {"startOffset": 2.3, "duration": 3},
                    "weeks": {"startOffset": 0, "duration": 1},
                    "months": {"startOffset": 0, "duration": 1}}}],
            "currentScale": "weeks",
            "currentStartDate": "2024-06-03T09:41:12.512Z",
            "projectName": "Web",
            "version": "1.0"
        }"##;
        store.set_item(DATA_KEY, raw).unwrap();
        let project = load_project(&store, defaults());
        assert_eq!(project.tasks.len(), 1);
        assert_eq!(project.tasks[0].id, 1_717_171_717_171);
        assert_eq!(project.tasks[0].state(Scale::Days), ScaleState::new(2.3, 3.0));
        assert_eq!(project.current_scale, Scale::Weeks);
        assert_eq!(project.current_start_date, date(2024, 6, 3));
        assert_eq!(project.project_name, "Web");
    }

    #[test]
    fn test_invalid_fields_are_ignored_individually() {
        let store = MemoryStore::new();
        store
            .set_item(
                DATA_KEY,
                r#"{"currentScale": "years", "currentStartDate": "yesterday", "projectName": "  "}"#,
            )
            .unwrap();
        assert_eq!(load_project(&store, defaults()), defaults());
    }

    #[test]
    fn test_stored_names_are_cut_to_limits() {
        let store = MemoryStore::new();
        let raw = format!(
            r##"{{"tasks": [{{"id": 1, "name": "{}", "color": "#6366f1",
                "scaleStates": {{
                    "days": {{"startOffset": 0, "duration": 1}},
                    "weeks": {{"startOffset": 0, "duration": 1}},
                    "months": {{"startOffset": 0, "duration": 1}}}}}}],
              "projectName": "{}"}}"##,
            "t".repeat(45),
            "p".repeat(70)
        );
        store.set_item(DATA_KEY, &raw).unwrap();
        let project = load_project(&store, defaults());
        assert_eq!(project.tasks[0].name.chars().count(), MAX_TASK_NAME_CHARS);
        assert_eq!(project.project_name.chars().count(), crate::config::MAX_PROJECT_NAME_CHARS);
    }

    #[test]
    fn test_add_task_after_loading_max_id() {
        let store = MemoryStore::new();
        let raw = r##"{"tasks": [{"id": 18446744073709551615, "name": "Última", "color": "#6366f1",
            "scaleStates": {
                "days": {"startOffset": 0, "duration": 1},
                "weeks": {"startOffset": 0, "duration": 1},
                "months": {"startOffset": 0, "duration": 1}}}]}"##;
        store.set_item(DATA_KEY, raw).unwrap();
        let mut project = load_project(&store, defaults());
        assert_eq!(project.tasks[0].id, u64::MAX);

        let id = project.add_task(TaskSeed::new(5, 0.0));
        assert_eq!(id, 5);
        assert_eq!(project.tasks.len(), 2);
    }

    #[test]
    fn test_parse_start_date() {
        assert_eq!(parse_start_date("2024-02-29").unwrap(), date(2024, 2, 29));
        assert_eq!(parse_start_date("2024-02-29T23:00:00.000Z").unwrap(), date(2024, 2, 29));
        assert!(parse_start_date("2024-02").is_err());
        assert!(parse_start_date("2023-02-29").is_err());
    }

    #[test]
    fn test_theme_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(load_theme(&store), Theme::Dark);
        save_theme(&store, Theme::Light).unwrap();
        assert_eq!(load_theme(&store), Theme::Light);
        store.set_item(THEME_KEY, "sepia").unwrap();
        assert_eq!(load_theme(&store), Theme::Dark);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.body_class(), "dark-theme");
    }
}
