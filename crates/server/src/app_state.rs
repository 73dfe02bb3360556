use dashboard_api::DashboardContext;

use crate::config::RunMode;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) dashboard: DashboardContext,
    pub(crate) run_mode: RunMode,
}
