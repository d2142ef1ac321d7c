use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_search_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let Some(input) = app.search_input.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => input.clear(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Enter => {
            if app.commit_search() {
                app.selected_index = 0;
                enqueue_action(action_tx, Action::LoadProjects);
            }
        }
        KeyCode::Esc => app.cancel_search(),
        _ => {}
    }
}
