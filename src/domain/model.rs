use serde::{Deserialize, Deserializer, Serialize};

pub type CompanyId = u64;
pub type BranchId = u64;
pub type EmployeeId = u64;
pub type ServiceId = u64;
pub type CategoryId = u64;

/// The reservation API sends `null` for blank text fields; treat it like a missing value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub id: CompanyId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub photo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub headline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ya_grade: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link_inst: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link_vk: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link_tg: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link_whatsapp: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link_fb: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link_youtube: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branch {
    pub id: BranchId,
    pub company: CompanyId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub photo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub landmark: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone_number_main: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone_number_admin: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id_tg_bot_group: i64,
    pub is_main: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub opening_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub closing_time: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub photo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub grade: String,
    pub is_active: bool,
    pub branch: BranchId,
    #[serde(deserialize_with = "null_as_default")]
    pub services: Vec<ServiceId>,
}

impl Employee {
    pub fn offers(&self, service: ServiceId) -> bool {
        self.services.contains(&service)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceCategory {
    pub id: CategoryId,
    pub company: CompanyId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub photo: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarberService {
    pub id: ServiceId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
    pub is_active: bool,
    pub branch: BranchId,
    pub category: CategoryId,
    pub duration: Option<String>,
    pub description: Option<String>,
}

/// Payload for `POST /appointments/create/`. The API expects it wrapped in a one-element array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub specialist: EmployeeId,
    pub services: Vec<ServiceId>,
    pub date: String,
    pub time: String,
    pub full_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_tg: Option<String>,
    pub branch: BranchId,
}

/// `{ "result": [...] }` wrapper used by the list endpoints that paginate.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub result: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A short user-facing message, shown once and then forgotten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}
