//! Project State
//!
//! Ordered task list plus the active scale, visible window anchor and project
//! name. Every mutation here is synchronous; persisting is the caller's job.

use chrono::{Datelike, Days, Local, NaiveDate};
use log::debug;

use crate::config::{DEFAULT_PROJECT_NAME, MAX_PROJECT_NAME_CHARS, MAX_TASK_NAME_CHARS};
use crate::labels::truncate_chars;
use crate::scale::Scale;
use crate::task::{default_tasks, Task, TaskId, TaskSeed};

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// Display order
    pub tasks: Vec<Task>,
    pub current_scale: Scale,
    pub current_start_date: NaiveDate,
    pub project_name: String,
}

impl Default for Project {
    fn default() -> Self {
        Self::with_defaults(Local::now().date_naive())
    }
}

impl Project {
    /// Built-in project anchored on the Monday of `today`'s week
    pub fn with_defaults(today: NaiveDate) -> Self {
        Self {
            tasks: default_tasks(),
            current_scale: Scale::Days,
            current_start_date: monday_of(today),
            project_name: DEFAULT_PROJECT_NAME.to_string(),
        }
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Append a task named after its position, returning its id
    pub fn add_task(&mut self, seed: TaskSeed) -> TaskId {
        let id = self.fresh_id(seed.id_hint);
        let name = format!("Tarea {}", self.tasks.len() + 1);
        debug!("add_task id={} name={}", id, name);
        self.tasks.push(Task::new(id, name, seed.color().to_string()));
        id
    }

    /// `hint` raised past every existing id. Once `u64::MAX` is taken the
    /// hint is used if free, else the lowest free id.
    fn fresh_id(&self, hint: TaskId) -> TaskId {
        let max = self.tasks.iter().map(|t| t.id).max();
        match max.map_or(Some(0), |max| max.checked_add(1)) {
            Some(next_free) => hint.max(next_free),
            None if self.task(hint).is_none() => hint,
            None => (0..).find(|id| self.task(*id).is_none()).unwrap_or(hint),
        }
    }

    /// Returns whether a task was removed
    pub fn remove_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            debug!("remove_task id={}", id);
        }
        removed
    }

    /// Store the trimmed name, cut to the length limit; blank names are rejected
    pub fn rename_task(&mut self, id: TaskId, new_name: &str) -> bool {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return false;
        }
        match self.task_mut(id) {
            Some(task) => {
                task.name = truncate_chars(trimmed, MAX_TASK_NAME_CHARS);
                true
            }
            None => false,
        }
    }

    pub fn recolor_task(&mut self, id: TaskId, color: &str) -> bool {
        match self.task_mut(id) {
            Some(task) => {
                task.color = color.to_string();
                true
            }
            None => false,
        }
    }

    /// Move `moving_id` into the slot currently held by `before_id`.
    ///
    /// The target index is taken before removal, so dragging downwards lands
    /// the task just after the target.
    pub fn reorder_task(&mut self, moving_id: TaskId, before_id: TaskId) -> bool {
        if moving_id == before_id {
            return false;
        }
        let from = self.tasks.iter().position(|t| t.id == moving_id);
        let to = self.tasks.iter().position(|t| t.id == before_id);
        let (Some(from), Some(to)) = (from, to) else {
            return false;
        };
        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        debug!("reorder_task {} -> index {}", moving_id, to);
        true
    }

    /// Switch scale by name; unknown names are ignored
    pub fn set_scale(&mut self, name: &str) -> bool {
        match name.parse::<Scale>() {
            Ok(scale) => {
                self.current_scale = scale;
                true
            }
            Err(_) => false,
        }
    }

    /// Shift the visible window by one viewport
    pub fn navigate(&mut self, direction: i32) {
        self.current_start_date = self.current_scale.step(self.current_start_date, direction);
    }

    /// Anchor on `today`, snapped to Monday under the day scale
    pub fn reset_to_today(&mut self, today: NaiveDate) {
        self.current_start_date = match self.current_scale {
            Scale::Days => monday_of(today),
            _ => today,
        };
    }

    /// Store the trimmed name, cut to the length limit; blank names are rejected
    pub fn rename_project(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.project_name = truncate_chars(trimmed, MAX_PROJECT_NAME_CHARS);
        true
    }
}

/// Most recent Monday on or before `date`
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}
