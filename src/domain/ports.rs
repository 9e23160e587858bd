use crate::domain::model::{
    AppointmentRequest, BarberService, Branch, BranchId, Company, CompanyId, Employee, EmployeeId,
    Notice, ServiceCategory, ServiceId,
};
use async_trait::async_trait;

/// Filters accepted by `GET /employees/company/{id}/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeQuery {
    pub branch: Option<BranchId>,
    pub services: Vec<ServiceId>,
    pub is_active: Option<bool>,
}

/// Filters accepted by `GET /service-categories/company/{id}/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryQuery {
    pub branch: Option<BranchId>,
    pub is_active: Option<bool>,
}

/// Filters accepted by `GET /barber-services/company/{id}/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceQuery {
    pub branch: Option<BranchId>,
    pub employee: Option<EmployeeId>,
    pub is_active: Option<bool>,
}

/// The remote reservation API. Every call resolves to `None` on failure; the
/// implementation is responsible for logging and notifying the user.
#[async_trait]
pub trait ReservationApi: Send + Sync {
    async fn get_companies(&self) -> Option<Vec<Company>>;
    async fn get_company_details(&self, company_id: CompanyId) -> Option<Company>;
    async fn get_branches_by_company(&self, company_id: CompanyId) -> Option<Vec<Branch>>;
    async fn get_employees_by_company(
        &self,
        company_id: CompanyId,
        query: &EmployeeQuery,
    ) -> Option<Vec<Employee>>;
    async fn get_service_categories_by_company(
        &self,
        company_id: CompanyId,
        query: &CategoryQuery,
    ) -> Option<Vec<ServiceCategory>>;
    async fn get_services_by_company(
        &self,
        company_id: CompanyId,
        query: &ServiceQuery,
    ) -> Option<Vec<BarberService>>;
    async fn create_appointment(&self, request: &AppointmentRequest)
        -> Option<serde_json::Value>;
}

/// Sink for user-facing notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn company_id(&self) -> Option<CompanyId>;
    fn slot_step_minutes(&self) -> u32;
}
