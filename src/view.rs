use chrono::NaiveDate;

use crate::model::{Filter, Task};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

/// Selects tasks by filter, then sorts ascending by due date. The sort
/// is stable, so tasks sharing a due date keep their list order.
pub fn project(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    let mut view: Vec<&Task> = tasks
        .iter()
        .filter(|t| match filter {
            Filter::All => true,
            Filter::Pending => !t.completed,
            Filter::Done => t.completed,
        })
        .collect();
    view.sort_by(|a, b| a.due.cmp(&b.due));
    view
}

pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    !task.completed && task.due < today
}

pub fn summarize(tasks: &[Task]) -> Summary {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    Summary {
        total,
        pending: total - completed,
        completed,
    }
}
