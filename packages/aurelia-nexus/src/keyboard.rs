//! Keyboard bindings for the Aurelia Nexus terminal
//!
//! Maps raw terminal key events onto the few actions the interface knows.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to the interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Append a character to the input field
    Insert(char),
    /// Append pasted text to the input field
    Paste(String),
    /// Delete the last character of the input field
    Backspace,
    /// Send the input
    Submit,
    /// Leave the application
    Quit,
    /// Nothing to do
    Ignore,
}

/// Resolve a terminal event into an action.
pub fn action_for(event: &Event) -> InputAction {
    match event {
        Event::Key(key) => action_for_key(key),
        // The input is a single line
        Event::Paste(text) => {
            let line: String = text.chars().filter(|c| !c.is_control()).collect();
            if line.is_empty() {
                InputAction::Ignore
            } else {
                InputAction::Paste(line)
            }
        }
        _ => InputAction::Ignore,
    }
}

fn action_for_key(key: &KeyEvent) -> InputAction {
    // Releases and repeats arrive as separate events on some platforms
    if key.kind != KeyEventKind::Press {
        return InputAction::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => InputAction::Quit,
        KeyCode::Char(_) if ctrl => InputAction::Ignore,
        KeyCode::Char(c) => InputAction::Insert(c),
        KeyCode::Backspace => InputAction::Backspace,
        KeyCode::Enter => InputAction::Submit,
        KeyCode::Esc => InputAction::Quit,
        _ => InputAction::Ignore,
    }
}

/// Apply an editing action to the current input text.
///
/// Returns `None` when the action does not edit the input.
pub fn edit(input: &str, action: InputAction) -> Option<String> {
    match action {
        InputAction::Insert(c) => {
            let mut text = input.to_string();
            text.push(c);
            Some(text)
        }
        InputAction::Paste(pasted) => Some(format!("{input}{pasted}")),
        InputAction::Backspace => {
            let mut text = input.to_string();
            text.pop();
            Some(text)
        }
        _ => None,
    }
}
