use crate::server::error::AppError;

/// Weekday names accepted by the activity filter.
const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Validates a zero-padded 24-hour `"HH:MM"` time.
///
/// Schedule times are compared as strings, so anything other than this exact
/// shape would order incorrectly.
///
/// # Arguments
/// - `field` - Name of the query parameter, used in the error message
/// - `value` - Time supplied by the client
///
/// # Returns
/// - `Ok(String)` - The time, unchanged
/// - `Err(AppError::BadRequest)` - Not a valid `"HH:MM"` time
pub fn parse_schedule_time(field: &str, value: String) -> Result<String, AppError> {
    let valid = match value.as_bytes() {
        [h1, h2, b':', m1, m2] if [h1, h2, m1, m2].iter().all(|b| b.is_ascii_digit()) => {
            let hours = (h1 - b'0') * 10 + (h2 - b'0');
            let minutes = (m1 - b'0') * 10 + (m2 - b'0');
            hours < 24 && minutes < 60
        }
        _ => false,
    };

    if !valid {
        return Err(AppError::BadRequest(format!(
            "Invalid {}: expected HH:MM, got `{}`",
            field, value
        )));
    }

    Ok(value)
}

/// Validates a capitalized English weekday name such as `"Monday"`.
///
/// # Returns
/// - `Ok(String)` - The day, unchanged
/// - `Err(AppError::BadRequest)` - Not one of the seven weekday names
pub fn parse_weekday(value: String) -> Result<String, AppError> {
    if !WEEKDAYS.contains(&value.as_str()) {
        return Err(AppError::BadRequest(format!("Invalid day `{}`", value)));
    }

    Ok(value)
}

/// Normalizes a student email address.
///
/// Only surrounding whitespace is removed and emptiness rejected; the address
/// is otherwise stored as given.
pub fn parse_email(value: String) -> Result<String, AppError> {
    let email = value.trim();
    if email.is_empty() {
        return Err(AppError::BadRequest("Email is required".to_string()));
    }

    Ok(email.to_string())
}
