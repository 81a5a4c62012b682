use crate::error::AppError;

/// Accept anything non-empty that contains `@`, trimmed of surrounding whitespace
pub(crate) fn validate_email(input: &str) -> Result<&str, AppError> {
    let email = input.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::InvalidEmail);
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_address_with_at_sign() {
        assert_eq!(validate_email("a@b.com").unwrap(), "a@b.com");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_email("  a@b.com\n").unwrap(), "a@b.com");
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert!(matches!(validate_email(""), Err(AppError::InvalidEmail)));
        assert!(matches!(validate_email("   "), Err(AppError::InvalidEmail)));
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert!(matches!(
            validate_email("student.ntnu.edu.tw"),
            Err(AppError::InvalidEmail)
        ));
    }

    #[test]
    fn only_requires_an_at_sign() {
        // the form is intentionally lenient
        assert!(validate_email("@").is_ok());
    }
}
