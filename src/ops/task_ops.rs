use crate::model::task::{Task, TaskId, TaskList};

/// Error type for task operations
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("a task titled \"{0}\" already exists")]
    DuplicateTitle(String),
    #[error("task title is empty")]
    EmptyTitle,
}

// ---------------------------------------------------------------------------
// Id minting
// ---------------------------------------------------------------------------

/// Mint a fresh id from the creation timestamp (milliseconds). If the
/// timestamp collides with or precedes an existing id, bump past the
/// current maximum so ids stay unique and ordered.
pub fn mint_id(list: &TaskList, now_ms: i64) -> TaskId {
    match list.iter().map(|t| t.id).max() {
        Some(max) if max >= now_ms => max + 1,
        _ => now_ms,
    }
}

// ---------------------------------------------------------------------------
// The four store operations
//
// All of these are pure: they take the current list and return a new one.
// Unknown ids are no-ops, not errors: ids only ever come from rendered rows.
// ---------------------------------------------------------------------------

/// Append a new task. Rejects an empty title and a title some task already
/// carries (the only user-visible failure in the app).
pub fn add_task(list: &TaskList, title: &str, now_ms: i64) -> Result<TaskList, TaskError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    if list.contains_title(title) {
        return Err(TaskError::DuplicateTitle(title.to_string()));
    }

    let id = mint_id(list, now_ms);
    let mut tasks: Vec<Task> = list.iter().cloned().collect();
    tasks.push(Task::new(id, title.to_string()));
    Ok(TaskList::from_tasks(tasks))
}

/// Flip `done` on the task with the given id.
pub fn toggle_task(list: &TaskList, id: TaskId) -> TaskList {
    TaskList::from_tasks(
        list.iter()
            .map(|t| {
                if t.id == id {
                    Task {
                        done: !t.done,
                        ..t.clone()
                    }
                } else {
                    t.clone()
                }
            })
            .collect(),
    )
}

/// Replace the title of the task with the given id. A blank draft is a
/// no-op; committing it must never produce a blank-titled task.
pub fn rename_task(list: &TaskList, id: TaskId, new_title: &str) -> TaskList {
    let new_title = new_title.trim();
    if new_title.is_empty() {
        return list.clone();
    }
    TaskList::from_tasks(
        list.iter()
            .map(|t| {
                if t.id == id {
                    Task {
                        title: new_title.to_string(),
                        ..t.clone()
                    }
                } else {
                    t.clone()
                }
            })
            .collect(),
    )
}

/// Filter the task with the given id out of the list. Confirmation happens
/// upstream; by the time this runs the user has already said yes.
pub fn remove_task(list: &TaskList, id: TaskId) -> TaskList {
    TaskList::from_tasks(list.iter().filter(|t| t.id != id).cloned().collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
