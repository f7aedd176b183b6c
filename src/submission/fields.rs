use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::models::NewContact;

pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_EMAIL_CHARS: usize = 254;
pub const MAX_MESSAGE_CHARS: usize = 5000;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .unwrap()
});

// ASCII only; `\d` would also accept other Unicode digits.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

/// Turn an untyped body into a [`NewContact`], reporting the first field
/// that fails. Fields are checked in form order: name, email, phone, message.
pub fn parse_contact(raw: &Value) -> Result<NewContact, ValidationError> {
    let Some(obj) = raw.as_object() else {
        return Err(ValidationError::new(
            "body",
            "Request body must be an object",
        ));
    };

    let name = required_text(obj, "name", "Name is required", "Name must be text")?;
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(ValidationError::new("name", "Name is too long"));
    }

    let email = required_text(obj, "email", "Email is required", "Invalid email")?;
    if !is_valid_email(email) {
        return Err(ValidationError::new("email", "Invalid email"));
    }

    let phone = required_text(
        obj,
        "phone",
        "Phone number is required",
        "Phone number must be exactly 10 digits",
    )?;
    if !is_valid_phone(phone) {
        return Err(ValidationError::new(
            "phone",
            "Phone number must be exactly 10 digits",
        ));
    }

    let message = required_text(obj, "message", "Message is required", "Message must be text")?;
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ValidationError::new("message", "Message is too long"));
    }

    Ok(NewContact {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        message: message.to_string(),
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email.chars().count() <= MAX_EMAIL_CHARS
        && !email.contains("..")
        && !email.starts_with('.')
        && !email.contains(".@")
        && EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Trimmed string value of `field`. Missing, null and whitespace-only values
/// fail with `missing_message`; numbers, booleans, arrays and objects with
/// `wrong_type_message`.
fn required_text<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
    missing_message: &str,
    wrong_type_message: &str,
) -> Result<&'a str, ValidationError> {
    match obj.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim()),
        None | Some(Value::Null) | Some(Value::String(_)) => {
            Err(ValidationError::new(field, missing_message))
        }
        Some(_) => Err(ValidationError::new(field, wrong_type_message)),
    }
}
