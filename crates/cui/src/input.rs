use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    /// Enter or Space: the primary button, or confirm inside a modal.
    Primary,
    ToggleHold(usize),
    OpenBetSelector,
    Click { column: u16, row: u16 },
    MoveUp,
    MoveDown,
    Dismiss,
}

pub fn map_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::Dismiss,
        KeyCode::Enter | KeyCode::Char(' ') => InputAction::Primary,
        KeyCode::Up | KeyCode::Char('k') => InputAction::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => InputAction::MoveDown,
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('b') => InputAction::OpenBetSelector,
        KeyCode::Char(c @ '1'..='5') => InputAction::ToggleHold(c as usize - '1' as usize),
        _ => InputAction::None,
    }
}

pub fn map_mouse(mouse: MouseEvent) -> InputAction {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => InputAction::Click {
            column: mouse.column,
            row: mouse.row,
        },
        _ => InputAction::None,
    }
}
