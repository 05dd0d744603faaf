use contracts::system::auth::UserInfo;

/// Session state shared through `AuthProvider`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Stored-session probe finished (or there was nothing to probe)
    pub checked: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn signed_in(&mut self, user: UserInfo) {
        self.user = Some(user);
        self.is_loading = false;
        self.error = None;
        self.checked = true;
    }

    pub fn failed(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }

    /// Request finished without changing the identity
    pub fn finish(&mut self) {
        self.is_loading = false;
    }

    pub fn signed_out(&mut self) {
        *self = AuthState {
            checked: true,
            ..AuthState::default()
        };
    }

    /// Token rejected by the service mid-session
    pub fn expired(&mut self, message: String) {
        self.signed_out();
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserInfo {
        UserInfo {
            email: "user@company.com".to_string(),
            domain: "company.com".to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_unauthenticated() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert!(state.user.is_none());
        assert!(state.error.is_none());
        assert!(!state.is_loading);
        assert!(!state.checked);
    }

    #[test]
    fn test_request_sets_loading_then_clears() {
        let mut state = AuthState::default();
        state.error = Some("old".to_string());

        state.begin();
        assert!(state.is_loading);
        assert!(state.error.is_none());

        state.finish();
        assert!(!state.is_loading);
    }

    #[test]
    fn test_sign_in_and_out() {
        let mut state = AuthState::default();
        state.begin();
        state.signed_in(user());
        assert!(state.is_authenticated());
        assert!(!state.is_loading);
        assert!(state.checked);

        state.signed_out();
        assert!(!state.is_authenticated());
        assert!(state.checked);
    }

    #[test]
    fn test_failure_keeps_identity() {
        let mut state = AuthState::default();
        state.signed_in(user());
        state.begin();
        state.failed("boom".to_string());
        assert!(state.is_authenticated());
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("boom"));

        state.clear_error();
        assert!(state.error.is_none());
    }

    #[test]
    fn test_expired_drops_user_and_reports() {
        let mut state = AuthState::default();
        state.signed_in(user());
        state.expired("Session expired".to_string());
        assert!(!state.is_authenticated());
        assert_eq!(state.error.as_deref(), Some("Session expired"));
    }
}
