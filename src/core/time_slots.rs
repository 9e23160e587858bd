use crate::utils::error::{BookingError, Result};
use chrono::{NaiveTime, Timelike};

pub const DEFAULT_SLOT_STEP_MINUTES: u32 = 15;

/// Parses "HH:MM" or the API's "HH:MM:SS" into minutes past midnight.
pub fn parse_clock(value: &str) -> Result<u32> {
    let trimmed = value.trim();
    let time = NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| BookingError::InvalidTime {
            value: value.to_string(),
        })?;
    Ok(time.hour() * 60 + time.minute())
}

pub fn format_clock(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Bookable start times from `opening` up to, but not including, `closing`,
/// every 15 minutes.
pub fn generate_time_slots(opening: &str, closing: &str) -> Result<Vec<String>> {
    generate_time_slots_every(opening, closing, DEFAULT_SLOT_STEP_MINUTES)
}

pub fn generate_time_slots_every(opening: &str, closing: &str, step_minutes: u32) -> Result<Vec<String>> {
    if step_minutes == 0 {
        return Err(BookingError::InvalidConfigValueError {
            field: "booking.slot_step_minutes".to_string(),
            value: "0".to_string(),
            reason: "Slot step must be positive".to_string(),
        });
    }

    let open = parse_clock(opening)?;
    let close = parse_clock(closing)?;

    // Overnight hours (closing before opening) produce no slots.
    Ok((open..close)
        .step_by(step_minutes as usize)
        .map(format_clock)
        .collect())
}
