//! Field validation shared by the services.

use crate::server::error::AppError;

/// Trims a required text field, rejecting empty values.
pub fn required_text(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional text field, mapping blank input to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Normalizes an email to lowercase and checks it looks like an address.
pub fn email(value: &str) -> Result<String, AppError> {
    let email = value.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(AppError::BadRequest("A valid email address is required".to_string())),
    }
}

/// Uppercases an identifier and checks it is exactly `len` ASCII alphanumerics.
pub fn fixed_alphanumeric(field: &str, value: &str, len: usize) -> Result<String, AppError> {
    let normalized = value.trim().to_uppercase();
    if normalized.len() != len || !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::BadRequest(format!(
            "{} must be {} letters or digits",
            field, len
        )));
    }
    Ok(normalized)
}

/// Rejects amounts that are zero or negative.
pub fn positive_amount(field: &str, value: i64) -> Result<i64, AppError> {
    if value <= 0 {
        return Err(AppError::BadRequest(format!("{} must be greater than 0", field)));
    }
    Ok(value)
}

/// Checks a URL uses the http or https scheme.
pub fn http_url(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        Ok(trimmed.to_string())
    } else {
        Err(AppError::BadRequest(format!("{} must be an http(s) URL", field)))
    }
}

/// Largest page size a listing will serve.
pub const MAX_PER_PAGE: u64 = 100;

/// Highest zero-indexed page number a listing will serve.
pub const MAX_PAGE: u64 = 1_000_000;

/// Checks a page selection before it reaches the paginator.
pub fn page(page: u64, per_page: u64) -> Result<(), AppError> {
    if per_page == 0 || per_page > MAX_PER_PAGE {
        return Err(AppError::BadRequest(format!(
            "entries must be between 1 and {}",
            MAX_PER_PAGE
        )));
    }
    if page > MAX_PAGE {
        return Err(AppError::BadRequest(format!(
            "page must not exceed {}",
            MAX_PAGE
        )));
    }
    Ok(())
}
