//! Summary arithmetic behind `GET /api/stats`.

use crate::types::{StatsResponse, TodoStatus};

/// Aggregate todo completion flags and a user count into a `StatsResponse`.
///
/// `completion_rate` is a percentage rounded to two decimals, `0.0` for an
/// empty todo list.
pub fn summarize(todos: &[TodoStatus], total_users: usize) -> StatsResponse {
    let total = todos.len() as u64;
    let completed = todos.iter().filter(|todo| todo.is_done()).count() as u64;

    StatsResponse {
        total_todos: total,
        completed_todos: completed,
        pending_todos: total - completed,
        completion_rate: completion_rate(completed, total),
        total_users: total_users as u64,
    }
}

fn completion_rate(completed: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = completed as f64 * 100.0 / total as f64;
    (percent * 100.0).round() / 100.0
}
