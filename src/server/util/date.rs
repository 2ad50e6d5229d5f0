use chrono::{DateTime, Months, Utc};

use crate::server::error::{internal::InternalError, AppError};

/// Adds whole calendar months to a timestamp.
///
/// Days past the end of the target month are clamped (Jan 31 + 1 month = Feb 28/29).
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - The shifted timestamp
/// - `Err(AppError::InternalErr(DateOverflow))` - Result is outside chrono's range
pub fn add_months(from: DateTime<Utc>, months: i32) -> Result<DateTime<Utc>, AppError> {
    let shifted = u32::try_from(months)
        .ok()
        .and_then(|m| from.checked_add_months(Months::new(m)))
        .ok_or(InternalError::DateOverflow { months })?;

    Ok(shifted)
}

/// Formats the billing period (`YYYY-MM`) a timestamp falls in.
pub fn billing_period(at: DateTime<Utc>) -> String {
    at.format("%Y-%m").to_string()
}
