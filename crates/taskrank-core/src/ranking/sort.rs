//! Ranker: the externally visible entry point of the core.

use crate::error::ValidationError;
use crate::task::Task;
use crate::window::Window;

use super::metric::priority_metric;
use super::relevance::get_relevant_tasks;

/// Filter `tasks` to `window` and order the survivors by descending
/// priority score.
///
/// The sort is stable: tasks with equal scores keep their input order.
/// Input tasks are never mutated; the result is a fresh, request-scoped
/// list.
///
/// # Errors
/// Fails fast with [`ValidationError::InvalidTimeRange`] when the window
/// does not span a positive duration, before any task is scored.
pub fn rank(tasks: &[Task], window: &Window) -> Result<Vec<Task>, ValidationError> {
    window.validate()?;

    let mut scored: Vec<(f64, Task)> = get_relevant_tasks(tasks, window)
        .into_iter()
        .map(|task| (priority_metric(&task, window), task))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    Ok(scored.into_iter().map(|(_, task)| task).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Deadline, TimeTracking};
    use chrono::{DateTime, TimeZone, Utc};
    use proptest::prelude::*;

    fn dt(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap()
    }

    fn window() -> Window {
        Window::new(dt(3, 18), dt(6, 18))
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|task| task.id.as_str()).collect()
    }

    #[test]
    fn closer_deadlines_rank_first() {
        let tasks = vec![
            Task::new("far", "far").with_deadline(Deadline::new(dt(6, 12))),
            Task::new("near", "near").with_deadline(Deadline::new(dt(4, 18))),
            Task::new("mid", "mid").with_deadline(Deadline::new(dt(5, 18))),
        ];

        let ranked = rank(&tasks, &window()).unwrap();
        assert_eq!(ids(&ranked), ["near", "mid", "far"]);
    }

    #[test]
    fn archived_and_completed_never_appear() {
        let tasks = vec![
            Task::new("a", "a")
                .with_archived(true)
                .with_deadline(Deadline::new(dt(4, 18))),
            Task::new("b", "b").with_deadline(Deadline::new(dt(5, 18))),
            Task::new("c", "c")
                .with_completed(true)
                .with_deadline(Deadline::new(dt(4, 18))),
        ];

        let ranked = rank(&tasks, &window()).unwrap();
        assert_eq!(ids(&ranked), ["b"]);
    }

    #[test]
    fn equal_scores_keep_input_order() {
        // Identical tracking, no deadlines: every score ties, so the
        // stable sort must reproduce the input order.
        let tasks = vec![
            Task::new("first", "t").with_time_tracking(TimeTracking::new(5.0, 3.0)),
            Task::new("second", "t").with_time_tracking(TimeTracking::new(5.0, 3.0)),
            Task::new("third", "t").with_time_tracking(TimeTracking::new(5.0, 3.0)),
        ];

        let ranked = rank(&tasks, &window()).unwrap();
        assert_eq!(ids(&ranked), ["first", "second", "third"]);
    }

    #[test]
    fn remaining_work_breaks_deadline_ties() {
        // Same deadline; the task with less work logged carries the larger
        // time-tracking multiplier and wins.
        let tasks = vec![
            Task::new("mostly-done", "t")
                .with_deadline(Deadline::new(dt(5, 18)))
                .with_time_tracking(TimeTracking::new(5.0, 4.0)),
            Task::new("untouched", "t")
                .with_deadline(Deadline::new(dt(5, 18)))
                .with_time_tracking(TimeTracking::new(5.0, 0.0)),
        ];

        let ranked = rank(&tasks, &window()).unwrap();
        assert_eq!(ids(&ranked), ["untouched", "mostly-done"]);
    }

    #[test]
    fn degenerate_window_is_rejected() {
        let tasks = vec![Task::new("1", "task1")];
        let window = Window::new(dt(6, 18), dt(3, 18));

        assert!(matches!(
            rank(&tasks, &window),
            Err(ValidationError::InvalidTimeRange { .. })
        ));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(rank(&[], &window()).unwrap().is_empty());
    }

    #[test]
    fn all_irrelevant_input_yields_empty_output() {
        let tasks = vec![
            Task::new("1", "task1").with_archived(true),
            Task::new("2", "task2").with_deadline(Deadline::new(dt(1, 18))),
        ];

        assert!(rank(&tasks, &window()).unwrap().is_empty());
    }

    prop_compose! {
        fn arb_task(index: usize)(
            deadline_offset in proptest::option::of(1i64..1_000_000),
            start_offset in proptest::option::of(-500_000i64..259_200),
            tracking in proptest::option::of((1u32..100, 0u32..150)),
        ) -> Task {
            let base = Utc.with_ymd_and_hms(2024, 5, 3, 18, 0, 0).unwrap();
            let mut task = Task::new(index.to_string(), format!("task{index}"));
            if let Some(offset) = deadline_offset {
                let mut deadline = Deadline::new(base + chrono::Duration::seconds(offset));
                if let Some(start) = start_offset {
                    deadline = deadline.with_start_date(base + chrono::Duration::seconds(start));
                }
                task = task.with_deadline(deadline);
            }
            if let Some((plan, work)) = tracking {
                task = task.with_time_tracking(TimeTracking::new(plan as f64, work as f64));
            }
            task
        }
    }

    proptest! {
        // Every ranked output is sorted descending by the priority score.
        #[test]
        fn output_is_sorted_descending(tasks in proptest::collection::vec((0usize..8).prop_flat_map(arb_task), 0..12)) {
            let w = window();
            let ranked = rank(&tasks, &w).unwrap();
            for pair in ranked.windows(2) {
                let lhs = crate::ranking::priority_metric(&pair[0], &w);
                let rhs = crate::ranking::priority_metric(&pair[1], &w);
                prop_assert!(lhs >= rhs);
            }
        }

        // Tasks with no signals all score zero; ranking them is the
        // identity on relevant input.
        #[test]
        fn zero_signal_tasks_preserve_order(count in 0usize..10) {
            let tasks: Vec<Task> = (0..count)
                .map(|i| Task::new(i.to_string(), format!("task{i}")))
                .collect();

            let ranked = rank(&tasks, &window()).unwrap();
            prop_assert_eq!(ids(&ranked), ids(&tasks));
        }
    }
}
