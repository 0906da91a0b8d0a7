//! Drag/Resize gesture state machine
//!
//! A gesture snapshots the bar geometry when the pointer goes down and
//! recomputes from that snapshot on every move, writing straight into the
//! task. Persisting happens once, on release.

use log::debug;

use crate::project::Project;
use crate::scale::{Scale, ScaleState};
use crate::task::TaskId;
use crate::timeline::{apply_drag, apply_resize_right, units_from_pixel_delta};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Moving the whole bar
    Dragging {
        task: TaskId,
        scale: Scale,
        start_pointer_x: f64,
        start_state: ScaleState,
    },
    /// Moving the right edge; `start_state.start_offset` is the anchor
    Resizing {
        task: TaskId,
        scale: Scale,
        start_pointer_x: f64,
        start_state: ScaleState,
    },
}

impl Gesture {
    pub fn is_active(&self) -> bool {
        !matches!(self, Gesture::Idle)
    }

    /// Task currently under a gesture
    pub fn task(&self) -> Option<TaskId> {
        match self {
            Gesture::Idle => None,
            Gesture::Dragging { task, .. } | Gesture::Resizing { task, .. } => Some(*task),
        }
    }

    /// Start moving `task`. Refused while another gesture is active.
    pub fn begin_drag(&mut self, project: &Project, task: TaskId, pointer_x: f64) -> bool {
        let Some((scale, start_state)) = self.snapshot(project, task) else {
            return false;
        };
        debug!("drag start task={} scale={}", task, scale);
        *self = Gesture::Dragging {
            task,
            scale,
            start_pointer_x: pointer_x,
            start_state,
        };
        true
    }

    /// Start resizing `task` from its right edge. Refused while another
    /// gesture is active.
    pub fn begin_resize(&mut self, project: &Project, task: TaskId, pointer_x: f64) -> bool {
        let Some((scale, start_state)) = self.snapshot(project, task) else {
            return false;
        };
        debug!("resize start task={} scale={}", task, scale);
        *self = Gesture::Resizing {
            task,
            scale,
            start_pointer_x: pointer_x,
            start_state,
        };
        true
    }

    fn snapshot(&self, project: &Project, task: TaskId) -> Option<(Scale, ScaleState)> {
        if self.is_active() {
            return None;
        }
        let scale = project.current_scale;
        project.task(task).map(|t| (scale, t.state(scale)))
    }

    /// Apply the pointer position to the live task geometry.
    /// Returns whether anything was written.
    pub fn pointer_move(&self, project: &mut Project, pointer_x: f64, unit_width: f64) -> bool {
        match *self {
            Gesture::Idle => false,
            Gesture::Dragging {
                task,
                scale,
                start_pointer_x,
                start_state,
            } => {
                let delta = units_from_pixel_delta(pointer_x - start_pointer_x, unit_width);
                let Some(t) = project.task_mut(task) else {
                    return false;
                };
                t.state_mut(scale).start_offset = apply_drag(start_state, scale, delta);
                true
            }
            Gesture::Resizing {
                task,
                scale,
                start_pointer_x,
                start_state,
            } => {
                let delta = units_from_pixel_delta(pointer_x - start_pointer_x, unit_width);
                let Some(t) = project.task_mut(task) else {
                    return false;
                };
                t.state_mut(scale).duration = apply_resize_right(start_state, scale, delta);
                true
            }
        }
    }

    /// End the gesture, returning the task that needs persisting
    pub fn release(&mut self) -> Option<TaskId> {
        let task = self.task();
        if let Some(id) = task {
            debug!("gesture end task={}", id);
        }
        *self = Gesture::Idle;
        task
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn project() -> Project {
        Project::with_defaults(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[test]
    fn test_drag_writes_live_state() {
        let mut p = project();
        let mut g = Gesture::default();
        assert!(g.begin_drag(&p, 1, 500.0));
        // 14 day units over 1400px
        assert!(g.pointer_move(&mut p, 650.0, 100.0));
        assert_eq!(p.task(1).unwrap().state(Scale::Days).start_offset, 1.5);
        assert!(g.pointer_move(&mut p, 550.0, 100.0));
        assert_eq!(p.task(1).unwrap().state(Scale::Days).start_offset, 0.5);
        assert_eq!(g.release(), Some(1));
        assert_eq!(g, Gesture::Idle);
    }

    #[test]
    fn test_drag_is_clamped() {
        let mut p = project();
        let mut g = Gesture::default();
        g.begin_drag(&p, 2, 0.0);
        g.pointer_move(&mut p, -10_000.0, 100.0);
        assert_eq!(p.task(2).unwrap().state(Scale::Days).start_offset, 0.0);
        g.pointer_move(&mut p, 10_000.0, 100.0);
        // 14 units - 7 duration
        assert_eq!(p.task(2).unwrap().state(Scale::Days).start_offset, 7.0);
    }

    #[test]
    fn test_resize_anchors_offset() {
        let mut p = project();
        let mut g = Gesture::default();
        assert!(g.begin_resize(&p, 3, 0.0));
        g.pointer_move(&mut p, 125.0, 100.0);
        let state = p.task(3).unwrap().state(Scale::Days);
        assert_eq!(state.start_offset, 8.0);
        assert_eq!(state.duration, 4.25);
        g.pointer_move(&mut p, 10_000.0, 100.0);
        assert_eq!(p.task(3).unwrap().state(Scale::Days).duration, 6.0);
        g.pointer_move(&mut p, -10_000.0, 100.0);
        assert_eq!(p.task(3).unwrap().state(Scale::Days).duration, 1.0);
    }

    #[test]
    fn test_only_one_gesture_at_a_time() {
        let p = project();
        let mut g = Gesture::default();
        assert!(g.begin_drag(&p, 1, 0.0));
        assert!(!g.begin_resize(&p, 2, 0.0));
        assert!(!g.begin_drag(&p, 3, 0.0));
        assert_eq!(g.task(), Some(1));
    }

    #[test]
    fn test_unknown_task_is_refused() {
        let p = project();
        let mut g = Gesture::default();
        assert!(!g.begin_drag(&p, 99, 0.0));
        assert!(!g.is_active());
        assert_eq!(g.release(), None);
    }

    #[test]
    fn test_gesture_only_touches_its_scale() {
        let mut p = project();
        p.set_scale("weeks");
        let mut g = Gesture::default();
        g.begin_drag(&p, 1, 0.0);
        g.pointer_move(&mut p, 300.0, 100.0);
        g.release();
        let task = p.task(1).unwrap();
        assert_eq!(task.state(Scale::Weeks).start_offset, 3.0);
        assert_eq!(task.state(Scale::Days).start_offset, 0.0);
        assert_eq!(task.state(Scale::Months).start_offset, 0.0);
    }

    #[test]
    fn test_move_while_idle_does_nothing() {
        let mut p = project();
        let before = p.clone();
        assert!(!Gesture::Idle.pointer_move(&mut p, 400.0, 100.0));
        assert_eq!(p, before);
    }
}
