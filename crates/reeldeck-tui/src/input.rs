use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Actions that can be triggered by user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    MoveDown,
    MoveUp,
    MoveRight,
    MoveLeft,
    JumpToStart,
    JumpToEnd,
    /// First 'g' of a "gg" sequence was pressed
    PendingG,
    Select,
    /// Jump straight to a navigation destination
    SelectNav(usize),
    NavNext,
    NavPrev,
    TogglePosters,
    CycleTheme,
    Help,
    ExitMode,
    None,
}

/// Convert key events to actions based on current app state
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // Help overlay: any key dismisses it
    if app.mode == Mode::Help {
        return Action::ExitMode;
    }

    let binding = KeyBinding::new(key.code, key.modifiers);

    // "gg" sequence: first press arms it, second press fires
    if keymap.is_g_prefix(&binding) {
        if app.pending_key == Some('g') {
            return keymap
                .get_pending_g_action()
                .cloned()
                .unwrap_or(Action::None);
        }
        return Action::PendingG;
    }

    // Number keys jump straight to a nav destination
    if let KeyCode::Char(c @ '1'..='9') = key.code {
        if key.modifiers == KeyModifiers::NONE {
            let index = (c as u8 - b'1') as usize;
            if index < app.nav.len() {
                return Action::SelectNav(index);
            }
            return Action::None;
        }
    }

    keymap.get(&binding).cloned().unwrap_or(Action::None)
}

/// Convert mouse events to actions
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = app.hit_test_nav(mouse.column, mouse.row) {
                return Action::SelectNav(index);
            }
            Action::None
        }
        MouseEventKind::ScrollUp => {
            if in_area(app.carousel_area, mouse.column, mouse.row) {
                return Action::MoveLeft;
            }
            Action::None
        }
        MouseEventKind::ScrollDown => {
            if in_area(app.carousel_area, mouse.column, mouse.row) {
                return Action::MoveRight;
            }
            Action::None
        }
        _ => Action::None,
    }
}

fn in_area(area: ratatui::layout::Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}
