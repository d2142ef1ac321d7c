use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod detail;
mod filter_modal;
mod list;
mod search;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // Overlays take every key while open.
    if app.search_input.is_some() {
        search::handle_search_key(key, app, action_tx);
        return;
    }
    if app.filter_modal.is_some() {
        filter_modal::handle_filter_modal_key(key, app, action_tx);
        return;
    }

    match app.current_view {
        View::List => list::handle_list_key(key, app, action_tx),
        View::Detail => detail::handle_detail_key(key, app),
    }
}
