//! Two-step sign-in: email first, then the emailed code with a countdown.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginStep {
    #[default]
    Email,
    Code {
        email: String,
        remaining_secs: u32,
    },
}

impl LoginStep {
    pub fn code_sent(email: String, expires_in: u32) -> Self {
        LoginStep::Code {
            email,
            remaining_secs: expires_in,
        }
    }

    /// One second elapsed. Returns `false` once the countdown has run out.
    pub fn tick(&mut self) -> bool {
        match self {
            LoginStep::Code { remaining_secs, .. } => {
                *remaining_secs = remaining_secs.saturating_sub(1);
                *remaining_secs > 0
            }
            LoginStep::Email => false,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            LoginStep::Code { email, .. } => Some(email),
            LoginStep::Email => None,
        }
    }

    pub fn remaining_secs(&self) -> Option<u32> {
        match self {
            LoginStep::Code { remaining_secs, .. } => Some(*remaining_secs),
            LoginStep::Email => None,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_secs() == Some(0)
    }

    pub fn can_submit_code(&self) -> bool {
        matches!(self.remaining_secs(), Some(secs) if secs > 0)
    }
}

/// `m:ss`, e.g. 300 -> `5:00`
pub fn format_countdown(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Code lifetime for the hint under the email form: whole minutes when
/// it divides evenly, otherwise `m:ss`
pub fn format_ttl(secs: u32) -> String {
    match secs / 60 {
        1 if secs % 60 == 0 => "1 minute".to_string(),
        mins if mins > 0 && secs % 60 == 0 => format!("{} minutes", mins),
        _ => format_countdown(secs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_email_step() {
        let step = LoginStep::default();
        assert_eq!(step, LoginStep::Email);
        assert_eq!(step.email(), None);
        assert!(!step.can_submit_code());
        assert!(!step.is_expired());
    }

    #[test]
    fn test_countdown_saturates_at_zero() {
        let mut step = LoginStep::code_sent("user@company.com".to_string(), 2);
        assert_eq!(step.email(), Some("user@company.com"));
        assert!(step.can_submit_code());

        assert!(step.tick());
        assert_eq!(step.remaining_secs(), Some(1));

        assert!(!step.tick());
        assert_eq!(step.remaining_secs(), Some(0));
        assert!(step.is_expired());
        assert!(!step.can_submit_code());

        assert!(!step.tick());
        assert_eq!(step.remaining_secs(), Some(0));
    }

    #[test]
    fn test_tick_on_email_step_is_noop() {
        let mut step = LoginStep::Email;
        assert!(!step.tick());
        assert_eq!(step, LoginStep::Email);
    }

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(300), "5:00");
        assert_eq!(format_countdown(65), "1:05");
        assert_eq!(format_countdown(9), "0:09");
        assert_eq!(format_countdown(0), "0:00");
    }

    #[test]
    fn test_format_ttl() {
        assert_eq!(format_ttl(300), "5 minutes");
        assert_eq!(format_ttl(60), "1 minute");
        assert_eq!(format_ttl(90), "1:30");
        assert_eq!(format_ttl(45), "0:45");
    }
}
