pub mod api_data;
pub mod booking;
pub mod catalog;
pub mod filters;
pub mod map_widget;
pub mod sections;
pub mod time_slots;

pub use crate::domain::model::{
    AppointmentRequest, BarberService, Branch, Company, Employee, Notice, ServiceCategory,
};
pub use crate::domain::ports::{ConfigProvider, Notifier, ReservationApi};
pub use crate::utils::error::Result;
