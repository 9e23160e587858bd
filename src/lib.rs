pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{Cli, Command};

pub use adapters::http::ReservationClient;
pub use adapters::notify::{MemoryNotifier, TerminalNotifier};
pub use config::AppConfig;
pub use core::booking::{BookingData, BookingForm};
pub use utils::error::{BookingError, Result};
