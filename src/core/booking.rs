use crate::core::filters::{filter_branches, filter_employees};
use crate::core::time_slots::generate_time_slots_every;
use crate::domain::model::{
    AppointmentRequest, BarberService, Branch, BranchId, CompanyId, Employee, EmployeeId,
    FieldError, Notice, ServiceId,
};
use crate::domain::ports::{EmployeeQuery, Notifier, ReservationApi, ServiceQuery};
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::is_valid_phone;
use chrono::NaiveDate;

/// Everything the booking form chooses from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingData {
    pub company_id: CompanyId,
    pub employees: Vec<Employee>,
    pub services: Vec<BarberService>,
    pub branches: Vec<Branch>,
}

/// The configured company, or the first one the API lists.
pub async fn resolve_company_id(
    api: &dyn ReservationApi,
    configured: Option<CompanyId>,
) -> Option<CompanyId> {
    if configured.is_some() {
        return configured;
    }
    api.get_companies()
        .await
        .and_then(|companies| companies.first().map(|c| c.id))
}

impl BookingData {
    /// Resolves the company, then fetches its roster, services and branches
    /// concurrently. A failed part degrades to an empty list.
    pub async fn load(api: &dyn ReservationApi, company: Option<CompanyId>) -> Option<Self> {
        let company_id = resolve_company_id(api, company).await?;

        let employee_query = EmployeeQuery {
            is_active: Some(true),
            ..Default::default()
        };
        let service_query = ServiceQuery {
            is_active: Some(true),
            ..Default::default()
        };

        let (employees, services, branches) = tokio::join!(
            api.get_employees_by_company(company_id, &employee_query),
            api.get_services_by_company(company_id, &service_query),
            api.get_branches_by_company(company_id),
        );

        let data = Self {
            company_id,
            employees: employees.unwrap_or_default(),
            services: services.unwrap_or_default(),
            branches: branches
                .unwrap_or_default()
                .into_iter()
                .filter(|b| b.is_active)
                .collect(),
        };
        tracing::debug!(
            "booking data for company {}: {} employees, {} services, {} branches",
            company_id,
            data.employees.len(),
            data.services.len(),
            data.branches.len()
        );
        Some(data)
    }

    /// The main branch, falling back to the first one.
    pub fn main_branch(&self) -> Option<&Branch> {
        self.branches
            .iter()
            .find(|b| b.is_main)
            .or_else(|| self.branches.first())
    }

    pub fn branch(&self, id: BranchId) -> Option<&Branch> {
        self.branches.iter().find(|b| b.id == id)
    }

    pub fn service(&self, id: ServiceId) -> Option<&BarberService> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }
}

/// Selection state of the booking form.
///
/// Choices cascade: service, then branch, then specialist, then time. Changing
/// an upstream choice clears everything below it.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingForm {
    service: Option<ServiceId>,
    branch: Option<BranchId>,
    specialist: Option<EmployeeId>,
    date: Option<NaiveDate>,
    time: Option<String>,
    pub full_name: String,
    pub phone: String,
    pub telegram: String,
    slot_step_minutes: u32,
}

impl BookingForm {
    pub fn new(today: NaiveDate, slot_step_minutes: u32) -> Self {
        Self {
            service: None,
            branch: None,
            specialist: None,
            date: Some(today),
            time: None,
            full_name: String::new(),
            phone: String::new(),
            telegram: String::new(),
            slot_step_minutes,
        }
    }

    pub fn service(&self) -> Option<ServiceId> {
        self.service
    }

    pub fn branch(&self) -> Option<BranchId> {
        self.branch
    }

    pub fn specialist(&self) -> Option<EmployeeId> {
        self.specialist
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn available_branches(&self, data: &BookingData) -> Vec<Branch> {
        filter_branches(&data.branches, &data.employees, self.service)
    }

    pub fn available_specialists(&self, data: &BookingData) -> Vec<Employee> {
        filter_employees(&data.employees, self.service, self.branch)
    }

    /// Start times for the selected branch; empty until a branch is chosen.
    pub fn available_times(&self, data: &BookingData) -> Result<Vec<String>> {
        match self.branch.and_then(|id| data.branch(id)) {
            Some(branch) => generate_time_slots_every(
                &branch.opening_time,
                &branch.closing_time,
                self.slot_step_minutes,
            ),
            None => Ok(Vec::new()),
        }
    }

    pub fn select_service(&mut self, service: ServiceId, data: &BookingData) -> Result<()> {
        if data.service(service).is_none() {
            return Err(BookingError::InvalidSelection {
                field: "service".to_string(),
                reason: format!("service {} is not offered", service),
            });
        }
        self.service = Some(service);
        self.branch = None;
        self.specialist = None;
        self.time = None;
        Ok(())
    }

    pub fn select_branch(&mut self, branch: BranchId, data: &BookingData) -> Result<()> {
        if !self.available_branches(data).iter().any(|b| b.id == branch) {
            return Err(BookingError::InvalidSelection {
                field: "branch".to_string(),
                reason: format!("branch {} has no specialist for the chosen service", branch),
            });
        }
        self.branch = Some(branch);
        self.specialist = None;
        self.time = None;
        Ok(())
    }

    pub fn select_specialist(&mut self, specialist: EmployeeId, data: &BookingData) -> Result<()> {
        if !self.available_specialists(data).iter().any(|e| e.id == specialist) {
            return Err(BookingError::InvalidSelection {
                field: "specialist".to_string(),
                reason: format!(
                    "specialist {} does not offer the chosen service at this branch",
                    specialist
                ),
            });
        }
        self.specialist = Some(specialist);
        Ok(())
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    pub fn select_time(&mut self, time: &str, data: &BookingData) -> Result<()> {
        let slots = self.available_times(data)?;
        if !slots.iter().any(|slot| slot == time) {
            return Err(BookingError::InvalidSelection {
                field: "time".to_string(),
                reason: format!("{} is outside the branch's working hours", time),
            });
        }
        self.time = Some(time.to_string());
        Ok(())
    }

    /// Every field-level problem with the current input.
    pub fn field_errors(&self, today: NaiveDate) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.branch.is_none() {
            errors.push(FieldError::new("branch", "Choose a branch"));
        }
        if self.specialist.is_none() {
            errors.push(FieldError::new("specialist", "Choose a specialist"));
        }
        if self.service.is_none() {
            errors.push(FieldError::new("service", "Choose a service"));
        }
        match self.date {
            None => errors.push(FieldError::new("date", "Choose a date")),
            Some(date) if date < today => {
                errors.push(FieldError::new("date", "The date cannot be in the past"))
            }
            Some(_) => {}
        }
        if self.time.as_deref().map_or(true, str::is_empty) {
            errors.push(FieldError::new("time", "Choose a time"));
        }

        if self.full_name.trim().chars().count() < 2 {
            errors.push(FieldError::new(
                "full_name",
                "Enter your name (at least 2 characters)",
            ));
        }

        let phone = self.phone.trim();
        if phone.chars().count() < 7 {
            errors.push(FieldError::new(
                "phone",
                "Enter your phone number (digits only)",
            ));
        } else if !is_valid_phone(phone) {
            errors.push(FieldError::new(
                "phone",
                "Enter a valid phone number (7-15 digits, no extra symbols)",
            ));
        }

        errors
    }

    pub fn validate(&self, today: NaiveDate) -> Result<()> {
        let errors = self.field_errors(today);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(BookingError::ValidationFailed { errors })
        }
    }

    pub fn to_request(&self, today: NaiveDate) -> Result<AppointmentRequest> {
        self.validate(today)?;

        let missing = |field: &str| BookingError::ValidationFailed {
            errors: vec![FieldError::new("form", format!("{} is missing", field))],
        };
        let telegram = self.telegram.trim();

        Ok(AppointmentRequest {
            specialist: self.specialist.ok_or_else(|| missing("specialist"))?,
            services: vec![self.service.ok_or_else(|| missing("service"))?],
            date: self
                .date
                .ok_or_else(|| missing("date"))?
                .format("%Y-%m-%d")
                .to_string(),
            time: self.time.clone().ok_or_else(|| missing("time"))?,
            full_name: self.full_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            user_tg: (!telegram.is_empty()).then(|| telegram.to_string()),
            branch: self.branch.ok_or_else(|| missing("branch"))?,
        })
    }

    /// Clears every field and puts the date back on `today`.
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today, self.slot_step_minutes);
    }

    /// Validates and sends the booking. One call to the API per successful
    /// validation; the form is cleared only when the API accepts it.
    pub async fn submit(
        &mut self,
        api: &dyn ReservationApi,
        notifier: &dyn Notifier,
        today: NaiveDate,
    ) -> Result<serde_json::Value> {
        let request = match self.to_request(today) {
            Ok(request) => request,
            Err(e) => {
                notifier.notify(Notice::error("Please fill in all required fields"));
                return Err(e);
            }
        };

        tracing::info!(
            "submitting booking: specialist {} on {} at {}",
            request.specialist,
            request.date,
            request.time
        );

        match api.create_appointment(&request).await {
            Some(created) => {
                notifier.notify(Notice::success("Booking created successfully!"));
                self.reset(today);
                Ok(created)
            }
            None => {
                notifier.notify(Notice::error("Could not create the booking"));
                Err(BookingError::SubmissionFailed {
                    message: "the reservation API rejected the request".to_string(),
                })
            }
        }
    }
}
