use crate::domain::model::{
    AppointmentRequest, BarberService, Branch, Company, CompanyId, Employee, Notice,
    ResultEnvelope, ServiceCategory,
};
use crate::domain::ports::{
    CategoryQuery, ConfigProvider, EmployeeQuery, Notifier, ReservationApi, ServiceQuery,
};
use crate::utils::error::{BookingError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://barbershop.woow.uz/api/v1.0/reservation";

const LOAD_FAILED: &str = "Failed to load data";

type QueryParams = Vec<(&'static str, String)>;

/// HTTP implementation of [`ReservationApi`].
pub struct ReservationClient {
    base_url: String,
    client: Client,
    notifier: Arc<dyn Notifier>,
}

impl ReservationClient {
    pub fn new(base_url: impl Into<String>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_client(base_url, Client::new(), notifier)
    }

    pub fn with_client(
        base_url: impl Into<String>,
        client: Client,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client,
            notifier,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;
        Ok(Self::with_client(config.base_url(), client, notifier))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, endpoint: &str, query: &QueryParams) -> Result<T> {
        let url = self.url(endpoint);
        tracing::debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        tracing::debug!("GET {} -> {}", endpoint, status);

        if !status.is_success() {
            return Err(BookingError::Http {
                status: status.as_u16(),
                message: format!("HTTP error! status: {}", status.as_u16()),
            });
        }

        Ok(response.json::<T>().await?)
    }

    /// Posts the appointment and surfaces the failure instead of swallowing it.
    pub async fn try_create_appointment(
        &self,
        request: &AppointmentRequest,
    ) -> Result<serde_json::Value> {
        let url = self.url("/appointments/create/");
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&[request])
            .send()
            .await?;
        let status = response.status();
        tracing::debug!("POST /appointments/create/ -> {}", status);

        if !status.is_success() {
            let body: Option<serde_json::Value> = response.json().await.ok();
            let message = body
                .as_ref()
                .and_then(|b| b.get("error"))
                .and_then(|e| e.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            return Err(BookingError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn swallow<T>(&self, endpoint: &str, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("API Error on {}: {}", endpoint, e);
                self.notifier.notify(Notice::error(LOAD_FAILED));
                None
            }
        }
    }
}

fn employee_params(query: &EmployeeQuery) -> QueryParams {
    let mut params = Vec::new();
    if let Some(branch) = query.branch {
        params.push(("branch", branch.to_string()));
    }
    for service in &query.services {
        params.push(("services", service.to_string()));
    }
    if let Some(is_active) = query.is_active {
        params.push(("is_active", is_active.to_string()));
    }
    params
}

fn category_params(query: &CategoryQuery) -> QueryParams {
    let mut params = Vec::new();
    if let Some(branch) = query.branch {
        params.push(("branch", branch.to_string()));
    }
    if let Some(is_active) = query.is_active {
        params.push(("is_active", is_active.to_string()));
    }
    params
}

fn service_params(query: &ServiceQuery) -> QueryParams {
    let mut params = Vec::new();
    if let Some(branch) = query.branch {
        params.push(("branch", branch.to_string()));
    }
    if let Some(employee) = query.employee {
        params.push(("employee", employee.to_string()));
    }
    if let Some(is_active) = query.is_active {
        params.push(("is_active", is_active.to_string()));
    }
    params
}

#[async_trait]
impl ReservationApi for ReservationClient {
    async fn get_companies(&self) -> Option<Vec<Company>> {
        let endpoint = "/companies/";
        let result = self
            .fetch_json::<ResultEnvelope<Company>>(endpoint, &Vec::new())
            .await
            .map(|envelope| envelope.result);
        self.swallow(endpoint, result)
    }

    async fn get_company_details(&self, company_id: CompanyId) -> Option<Company> {
        let endpoint = format!("/companies/detail/{}/", company_id);
        let result = self.fetch_json::<Company>(&endpoint, &Vec::new()).await;
        self.swallow(&endpoint, result)
    }

    async fn get_branches_by_company(&self, company_id: CompanyId) -> Option<Vec<Branch>> {
        let endpoint = format!("/branches/company/{}/", company_id);
        let result = self.fetch_json::<Vec<Branch>>(&endpoint, &Vec::new()).await;
        self.swallow(&endpoint, result)
    }

    async fn get_employees_by_company(
        &self,
        company_id: CompanyId,
        query: &EmployeeQuery,
    ) -> Option<Vec<Employee>> {
        let endpoint = format!("/employees/company/{}/", company_id);
        let result = self
            .fetch_json::<ResultEnvelope<Employee>>(&endpoint, &employee_params(query))
            .await
            .map(|envelope| envelope.result);
        self.swallow(&endpoint, result)
    }

    async fn get_service_categories_by_company(
        &self,
        company_id: CompanyId,
        query: &CategoryQuery,
    ) -> Option<Vec<ServiceCategory>> {
        let endpoint = format!("/service-categories/company/{}/", company_id);
        let result = self
            .fetch_json::<Vec<ServiceCategory>>(&endpoint, &category_params(query))
            .await;
        self.swallow(&endpoint, result)
    }

    async fn get_services_by_company(
        &self,
        company_id: CompanyId,
        query: &ServiceQuery,
    ) -> Option<Vec<BarberService>> {
        let endpoint = format!("/barber-services/company/{}/", company_id);
        let result = self
            .fetch_json::<ResultEnvelope<BarberService>>(&endpoint, &service_params(query))
            .await
            .map(|envelope| envelope.result);
        self.swallow(&endpoint, result)
    }

    async fn create_appointment(
        &self,
        request: &AppointmentRequest,
    ) -> Option<serde_json::Value> {
        match self.try_create_appointment(request).await {
            Ok(created) => Some(created),
            Err(e) => {
                // The booking form reports this one itself.
                tracing::error!("API Error on /appointments/create/: {}", e);
                None
            }
        }
    }
}
