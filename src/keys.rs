use serde::Serialize;

/// One key binding: the chord(s), what it does, and the mode it applies in.
/// This table is the single source for both the `?` help overlay and
/// `jot keys`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Binding {
    pub keys: &'static str,
    pub action: &'static str,
    pub mode: &'static str,
}

const fn b(keys: &'static str, action: &'static str, mode: &'static str) -> Binding {
    Binding { keys, action, mode }
}

/// The full binding table, in help-screen order.
pub const BINDINGS: &[Binding] = &[
    b("j/k, \u{2193}/\u{2191}", "Move cursor down/up", "list"),
    b("g / G", "Jump to first / last task", "list"),
    b("a", "Add a task", "list"),
    b("space, x", "Toggle done", "list"),
    b("e, enter", "Edit title", "list"),
    b("d", "Remove task (asks first)", "list"),
    b("/", "Search", "list"),
    b("n / N", "Next / previous match", "list"),
    b("?", "Help", "list"),
    b("q", "Quit", "list"),
    b("enter", "Add the task, keep typing", "add"),
    b("esc", "Back to the list", "add"),
    b("enter", "Save title", "edit"),
    b("esc", "Cancel, keep the old title", "edit"),
    b("ctrl+t", "Toggle done without leaving the edit", "edit"),
    b("enter", "Keep highlight and return", "search"),
    b("esc", "Cancel search", "search"),
    b("y, enter", "Yes, remove it", "confirm"),
    b("n, esc", "No, keep it", "confirm"),
    b("\u{2190}/\u{2192}, home/end", "Move in the text", "text entry"),
    b("ctrl+w", "Delete word left", "text entry"),
    b("ctrl+u", "Clear to start", "text entry"),
];
