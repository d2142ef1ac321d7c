use crate::api::ApiClient;
use crate::app::App;
use anyhow::Result;

use super::action_queue::Action;

pub(super) async fn run_action(action: Action, app: &mut App, client: &ApiClient) -> Result<()> {
    match action {
        Action::LoadProjects => load_projects(app, client).await,
        Action::LoadFilterOptions => load_filter_options(app, client).await,
        Action::OpenProject { id } => open_project(id, app, client).await,
    }
    Ok(())
}

pub(crate) async fn load_projects(app: &mut App, client: &ApiClient) {
    match client.list_projects(&app.applied_filters).await {
        Ok(projects) => {
            app.set_projects(projects);
            app.clear_status();
        }
        Err(e) => app.set_status(format!("Could not load projects: {}", e)),
    }
}

pub(crate) async fn load_filter_options(app: &mut App, client: &ApiClient) {
    match client.get_filter_options().await {
        Ok(options) => app.filter_options = options,
        Err(e) => app.set_status(format!("Could not load filter options: {}", e)),
    }
}

async fn open_project(id: i64, app: &mut App, client: &ApiClient) {
    match client.get_project(id).await {
        Ok(project) => {
            app.clear_status();
            app.open_detail(project);
        }
        Err(e) => app.set_status(format!("Could not open project: {}", e)),
    }
}
