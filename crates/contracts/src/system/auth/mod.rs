use serde::{Deserialize, Serialize};

use crate::shared::validation::ValidationError;

/// Body of `POST /auth/request-otp`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRequest {
    pub email: String,
}

/// Body of `POST /auth/verify-otp`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpVerifyRequest {
    pub email: String,
    pub otp_code: String,
}

/// Response of `POST /auth/request-otp`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpResponse {
    pub message: String,
    pub email: String,
    /// Seconds until the emailed code expires
    pub expires_in: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub expires_in: u64,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Identity returned by `GET /auth/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub email: String,
    pub domain: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
    pub email: String,
}

/// Length of the emailed one-time code
pub const OTP_CODE_LENGTH: usize = 6;

/// Validate an email address typed into the login form.
///
/// Returns the trimmed address on success.
pub fn validate_email(input: &str) -> Result<String, ValidationError> {
    let email = input.trim();
    if email.is_empty() {
        return Err(ValidationError::Required("Email"));
    }
    if email.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail);
    }

    let (local, domain) = email
        .split_once('@')
        .ok_or(ValidationError::InvalidEmail)?;
    if local.is_empty() || domain.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(email.to_string())
}

/// Validate a one-time code: required, fixed length, digits only.
pub fn validate_otp_code(input: &str, len: usize) -> Result<String, ValidationError> {
    let code = input.trim();
    if code.is_empty() {
        return Err(ValidationError::Required("Code"));
    }
    if code.chars().count() != len {
        return Err(ValidationError::CodeLength(len));
    }
    if !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::CodeNotNumeric);
    }
    Ok(code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert_eq!(
            validate_email("  user@company.com ").unwrap(),
            "user@company.com"
        );
        assert_eq!(validate_email("a.b@mail.co.th").unwrap(), "a.b@mail.co.th");
    }

    #[test]
    fn test_validate_email_rejects() {
        assert_eq!(validate_email(""), Err(ValidationError::Required("Email")));
        assert_eq!(validate_email("   "), Err(ValidationError::Required("Email")));
        for bad in [
            "user",
            "@company.com",
            "user@",
            "user@company",
            "user@company.",
            "user@@company.com",
            "us er@company.com",
            "user@.com",
        ] {
            assert_eq!(validate_email(bad), Err(ValidationError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn test_validate_otp_code() {
        assert_eq!(validate_otp_code(" 123456 ", 6).unwrap(), "123456");
        assert_eq!(
            validate_otp_code("", 6),
            Err(ValidationError::Required("Code"))
        );
        assert_eq!(
            validate_otp_code("12345", 6),
            Err(ValidationError::CodeLength(6))
        );
        assert_eq!(
            validate_otp_code("1234567", 6),
            Err(ValidationError::CodeLength(6))
        );
        assert_eq!(
            validate_otp_code("12a456", 6),
            Err(ValidationError::CodeNotNumeric)
        );
    }

    #[test]
    fn test_token_type_defaults_to_bearer() {
        let token: TokenResponse =
            serde_json::from_str(r#"{"access_token":"abc","expires_in":86400}"#).unwrap();
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.expires_in, 86400);
    }
}
