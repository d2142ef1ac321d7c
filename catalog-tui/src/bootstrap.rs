use crate::api::ApiClient;
use crate::app::App;
use crate::runtime::{load_filter_options, load_projects};

/// Fetch the filter options and the first listing before the UI starts.
pub async fn initialize_app_state(app: &mut App, client: &ApiClient) {
    app.is_loading = true;

    load_filter_options(app, client).await;
    load_projects(app, client).await;

    app.is_loading = false;
}
