use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_detail_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => app.close_detail(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_detail_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_detail_up(),
        KeyCode::Char('a') => {
            let Some(id) = app.detail.as_ref().map(|p| p.id) else {
                return;
            };
            if app.toggle_applied(id) {
                app.set_status("Application sent");
            } else {
                app.set_status("Application withdrawn");
            }
        }
        _ => {}
    }
}
