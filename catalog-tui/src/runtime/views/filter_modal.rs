use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_filter_modal_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let options = &app.filter_options;
    let Some(modal) = app.filter_modal.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Tab => modal.next_section(),
        KeyCode::BackTab => modal.prev_section(),
        KeyCode::Down | KeyCode::Char('j') => modal.move_down(options),
        KeyCode::Up | KeyCode::Char('k') => modal.move_up(),
        KeyCode::Char(' ') => modal.toggle_current(options),
        KeyCode::Char('c') => modal.clear(),
        KeyCode::Enter => {
            if app.apply_filter_modal() {
                enqueue_action(action_tx, Action::LoadProjects);
            }
        }
        KeyCode::Esc => app.close_filter_modal(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use super::super::super::action_queue::Action;
    use super::super::test_support::press;
    use crate::app::{App, SortOrder};
    use crate::types::test_support::filter_options;

    fn modal_app() -> App {
        let mut app = App::new();
        app.filter_options = filter_options();
        app.applied_filters.skills = vec![100];
        app
    }

    #[test]
    fn f_opens_modal_seeded_from_applied_filters() {
        let mut app = modal_app();
        press(&mut app, &[KeyCode::Char('f')]);

        let modal = app.filter_modal.as_ref().unwrap();
        assert_eq!(modal.draft.skills, vec![100]);
    }

    #[test]
    fn enter_applies_draft_and_reloads() {
        let mut app = modal_app();
        // Skills section, second option (Python).
        let actions = press(
            &mut app,
            &[
                KeyCode::Char('f'),
                KeyCode::Tab,
                KeyCode::Char('j'),
                KeyCode::Char(' '),
                KeyCode::Enter,
            ],
        );

        assert_eq!(actions, vec![Action::LoadProjects]);
        assert!(app.filter_modal.is_none());
        assert_eq!(app.applied_filters.skills, vec![100, 200]);
    }

    #[test]
    fn esc_discards_draft() {
        let mut app = modal_app();
        let actions = press(
            &mut app,
            &[KeyCode::Char('f'), KeyCode::Char('c'), KeyCode::Esc],
        );

        assert!(actions.is_empty());
        assert!(app.filter_modal.is_none());
        assert_eq!(app.applied_filters.skills, vec![100]);
    }

    #[test]
    fn clear_then_apply_resets_everything() {
        let mut app = modal_app();
        app.applied_filters.sort_by = SortOrder::Oldest;

        press(
            &mut app,
            &[KeyCode::Char('f'), KeyCode::Char('c'), KeyCode::Enter],
        );

        assert!(!app.applied_filters.has_id_filters());
        assert_eq!(app.applied_filters.sort_by, SortOrder::Newest);
    }

    #[test]
    fn list_keys_are_captured_while_open() {
        let mut app = modal_app();
        press(&mut app, &[KeyCode::Char('f'), KeyCode::Char('q')]);
        assert!(app.running);
    }
}
