/// Task identifier. Minted from the creation timestamp in milliseconds and
/// bumped past any existing id, so ids are unique and roughly ordered by
/// creation time.
pub type TaskId = i64;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Task title text (non-empty after trimming)
    pub title: String,
    pub done: bool,
}

impl Task {
    /// Create a new task, not yet done.
    pub fn new(id: TaskId, title: String) -> Self {
        Task {
            id,
            title,
            done: false,
        }
    }
}

/// The task collection. Insertion order only: append-only growth,
/// filter-based removal. The ops layer always builds a fresh list; nothing
/// mutates a stored task in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList { tasks: Vec::new() }
    }

    /// Build a list from an already-assembled task vector.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        TaskList { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Task at a display position.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Task with the given id.
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Display position of the task with the given id.
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    /// Whether any task already carries this exact title.
    pub fn contains_title(&self, title: &str) -> bool {
        self.tasks.iter().any(|t| t.title == title)
    }
}
