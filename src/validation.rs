use serde::Serialize;
use serde_json::Value;
use validator::ValidateEmail;

use crate::models::InsertRating;

/// A single failed rule, reported under `details` in the 400 response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Checks an arbitrary JSON value against the rating rules: `name` and
/// `message` non-empty strings, `email` a valid address, `rating` an integer
/// from 1 to 5. All fields are required. Violations are collected per field so
/// the caller sees every problem at once, not just the first.
pub fn validate_rating_input(input: &Value) -> Result<InsertRating, Vec<FieldViolation>> {
    let mut details = Vec::new();

    let name = string_field(input, "name", &mut details);
    let email = string_field(input, "email", &mut details);
    let rating = integer_field(input, "rating", &mut details);
    let message = string_field(input, "message", &mut details);

    if let Some(ref name) = name {
        if name.trim().is_empty() {
            details.push(FieldViolation::new("name", "must not be empty"));
        }
    }
    if let Some(ref email) = email {
        if !email.validate_email() {
            details.push(FieldViolation::new("email", "must be a valid address"));
        }
    }
    if let Some(rating) = rating {
        if !(1..=5).contains(&rating) {
            details.push(FieldViolation::new("rating", "must be between 1 and 5"));
        }
    }
    if let Some(ref message) = message {
        if message.trim().is_empty() {
            details.push(FieldViolation::new("message", "must not be empty"));
        }
    }

    match (name, email, rating, message) {
        (Some(name), Some(email), Some(rating), Some(message)) if details.is_empty() => {
            Ok(InsertRating {
                name,
                email,
                rating: rating as i16,
                message,
            })
        }
        _ => Err(details),
    }
}

fn string_field(input: &Value, field: &str, details: &mut Vec<FieldViolation>) -> Option<String> {
    match input.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            details.push(FieldViolation::new(field, "must be a string"));
            None
        }
        None => {
            details.push(FieldViolation::new(field, "is required"));
            None
        }
    }
}

fn integer_field(input: &Value, field: &str, details: &mut Vec<FieldViolation>) -> Option<i64> {
    match input.get(field) {
        Some(Value::Number(n)) => match n.as_i64() {
            Some(v) => Some(v),
            None => {
                details.push(FieldViolation::new(field, "must be an integer"));
                None
            }
        },
        Some(_) => {
            details.push(FieldViolation::new(field, "must be an integer"));
            None
        }
        None => {
            details.push(FieldViolation::new(field, "is required"));
            None
        }
    }
}
