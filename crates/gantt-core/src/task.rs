//! Task entity

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_TASKS, NEW_TASK_GEOMETRY, PALETTE};
use crate::scale::{Scale, ScaleState, ScaleStates};

pub type TaskId = u64;

/// A bar on the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub color: String,
    pub scale_states: ScaleStates,
}

impl Task {
    pub fn new(id: TaskId, name: String, color: String) -> Self {
        let [days, weeks, months] = NEW_TASK_GEOMETRY;
        Self {
            id,
            name,
            color,
            scale_states: ScaleStates { days, weeks, months },
        }
    }

    pub fn state(&self, scale: Scale) -> ScaleState {
        self.scale_states.get(scale)
    }

    pub fn state_mut(&mut self, scale: Scale) -> &mut ScaleState {
        self.scale_states.get_mut(scale)
    }
}

/// Entropy for a new task, supplied by the caller.
///
/// In the browser `id_hint` is the clock in milliseconds and `palette_roll`
/// comes from `Math.random()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskSeed {
    pub id_hint: TaskId,
    /// Uniform value in `[0, 1)`
    pub palette_roll: f64,
}

impl TaskSeed {
    pub fn new(id_hint: TaskId, palette_roll: f64) -> Self {
        Self {
            id_hint,
            palette_roll,
        }
    }

    pub fn color(&self) -> &'static str {
        let roll = if self.palette_roll.is_finite() {
            self.palette_roll.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let index = ((roll * PALETTE.len() as f64) as usize).min(PALETTE.len() - 1);
        PALETTE[index]
    }
}

/// The three built-in tasks shown on first start
pub fn default_tasks() -> Vec<Task> {
    DEFAULT_TASKS
        .iter()
        .map(|(id, name, color, days, weeks, months)| Task {
            id: *id,
            name: name.to_string(),
            color: color.to_string(),
            scale_states: ScaleStates {
                days: *days,
                weeks: *weeks,
                months: *months,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_roll_maps_into_palette() {
        assert_eq!(TaskSeed::new(0, 0.0).color(), PALETTE[0]);
        assert_eq!(TaskSeed::new(0, 0.999).color(), PALETTE[PALETTE.len() - 1]);
        assert_eq!(TaskSeed::new(0, 1.0).color(), PALETTE[PALETTE.len() - 1]);
        assert_eq!(TaskSeed::new(0, f64::NAN).color(), PALETTE[0]);
        assert_eq!(TaskSeed::new(0, -3.0).color(), PALETTE[0]);
    }

    #[test]
    fn test_task_json_uses_original_field_names() {
        let task = Task::new(7, "Tarea 1".to_string(), "#ef4444".to_string());
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["scaleStates"]["days"]["duration"], 3.0);
        assert_eq!(value["scaleStates"]["weeks"]["startOffset"], 0.0);
    }

    #[test]
    fn test_default_tasks() {
        let tasks = default_tasks();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[1].name, "Desarrollo Frontend");
        assert_eq!(tasks[1].state(Scale::Days), ScaleState::new(3.0, 7.0));
        assert_eq!(tasks[2].state(Scale::Weeks), ScaleState::new(2.0, 1.0));
    }
}
