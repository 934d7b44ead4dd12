//! Entry-form validation. These checks run before any store access, so a
//! malformed input never reaches a document mutation.

use crate::error::DirectoryError;

/// Email must look like `something@domain.tld` with no whitespace.
pub fn email(value: &str) -> Result<(), DirectoryError> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(DirectoryError::Validation(
            "Please enter a valid email address.".to_string(),
        ))
    }
}

/// Phone numbers are exactly ten digits.
pub fn phone(value: &str, field: &str) -> Result<(), DirectoryError> {
    if value.len() == 10 && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(DirectoryError::Validation(format!(
            "{field} must be a 10-digit phone number."
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_emails() {
        assert!(email("student@campus.edu").is_ok());
        assert!(email("a.b@c.d.e").is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        for bad in ["", "no-at.sign", "a@nodot", "a b@c.d", "a@.d", "@c.d"] {
            assert!(email(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn phone_must_be_ten_digits() {
        assert!(phone("9876543210", "Phone").is_ok());
        assert!(phone("987654321", "Phone").is_err());
        assert!(phone("98765432100", "Phone").is_err());
        assert!(phone("98765x3210", "Phone").is_err());
    }
}
