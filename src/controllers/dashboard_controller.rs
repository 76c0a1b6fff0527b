use crate::dto::dashboard_dto::DashboardResponse;
use crate::services::DashboardService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct DashboardController {
    service: DashboardService,
}

impl DashboardController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: DashboardService::new(&state.repositories),
        }
    }

    pub async fn resumo(&self) -> Result<DashboardResponse, AppError> {
        self.service.resumo().await
    }
}
