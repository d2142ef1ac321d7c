use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_list_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Enter => {
            if let Some(project) = app.selected_project() {
                let id = project.id;
                enqueue_action(action_tx, Action::OpenProject { id });
            }
        }
        KeyCode::Char('f') => app.open_filter_modal(),
        KeyCode::Char('/') => app.start_search_edit(),
        KeyCode::Char('s') => {
            app.toggle_sort();
            app.set_status(format!("Sorted by {}", app.applied_filters.sort_by.label()));
            enqueue_action(action_tx, Action::LoadProjects);
        }
        KeyCode::Char('r') => {
            enqueue_action(action_tx, Action::LoadFilterOptions);
            enqueue_action(action_tx, Action::LoadProjects);
        }
        KeyCode::Right | KeyCode::Char('l') => app.focus_next_chip(),
        KeyCode::Left | KeyCode::Char('h') => app.focus_prev_chip(),
        KeyCode::Char('d') | KeyCode::Delete => {
            if app.remove_focused_chip() {
                enqueue_action(action_tx, Action::LoadProjects);
            }
        }
        KeyCode::Char('x') => {
            if app.clear_filters() {
                enqueue_action(action_tx, Action::LoadProjects);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use super::super::super::action_queue::Action;
    use super::super::test_support::press;
    use crate::app::{App, SortOrder, View};
    use crate::types::test_support::project;

    fn list_app() -> App {
        let mut app = App::new();
        app.set_projects(vec![project(1, "a"), project(2, "b")]);
        app
    }

    #[test]
    fn enter_opens_selected_project() {
        let mut app = list_app();
        let actions = press(&mut app, &[KeyCode::Char('j'), KeyCode::Enter]);
        assert_eq!(actions, vec![Action::OpenProject { id: 2 }]);
    }

    #[test]
    fn enter_on_empty_list_does_nothing() {
        let mut app = App::new();
        assert!(press(&mut app, &[KeyCode::Enter]).is_empty());
        assert_eq!(app.current_view, View::List);
    }

    #[test]
    fn sort_toggle_reloads() {
        let mut app = list_app();
        let actions = press(&mut app, &[KeyCode::Char('s')]);
        assert_eq!(app.applied_filters.sort_by, SortOrder::Oldest);
        assert_eq!(actions, vec![Action::LoadProjects]);
    }

    #[test]
    fn clearing_filters_reloads_only_when_something_changed() {
        let mut app = list_app();
        assert!(press(&mut app, &[KeyCode::Char('x')]).is_empty());

        app.applied_filters.skills = vec![100];
        let actions = press(&mut app, &[KeyCode::Char('x')]);
        assert_eq!(actions, vec![Action::LoadProjects]);
        assert!(app.applied_filters.skills.is_empty());
    }

    #[test]
    fn removing_focused_chip_reloads() {
        let mut app = list_app();
        app.applied_filters.skills = vec![100, 200];

        assert!(press(&mut app, &[KeyCode::Char('d')]).is_empty());

        let actions = press(&mut app, &[KeyCode::Right, KeyCode::Right, KeyCode::Delete]);
        assert_eq!(actions, vec![Action::LoadProjects]);
        assert_eq!(app.applied_filters.skills, vec![100]);
        assert_eq!(app.focused_chip, Some(0));
    }

    #[test]
    fn reload_fetches_options_and_projects() {
        let mut app = list_app();
        let actions = press(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(actions, vec![Action::LoadFilterOptions, Action::LoadProjects]);
    }

    #[test]
    fn q_quits() {
        let mut app = list_app();
        press(&mut app, &[KeyCode::Char('q')]);
        assert!(!app.running);
    }
}
