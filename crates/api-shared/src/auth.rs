use std::env;

/// Password accepted for demo logins when `EPR_DEMO_PASSWORD` is not set.
pub const DEFAULT_DEMO_PASSWORD: &str = "test";

/// Checks a supplied password against the configured demo password.
///
/// The expected password is read from the `EPR_DEMO_PASSWORD` environment
/// variable at call time, falling back to the demo default.
pub fn verify_demo_password(provided: &str) -> bool {
    let expected =
        env::var("EPR_DEMO_PASSWORD").unwrap_or_else(|_| DEFAULT_DEMO_PASSWORD.to_string());
    provided == expected
}

/// Generates an opaque session token for a successful login.
pub fn new_session_token() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_default_demo_password() {
        assert!(verify_demo_password(DEFAULT_DEMO_PASSWORD));
    }

    #[test]
    fn rejects_wrong_password() {
        assert!(!verify_demo_password("not-the-password"));
        assert!(!verify_demo_password(""));
    }

    #[test]
    fn session_tokens_are_unique_uuids() {
        let first = new_session_token();
        let second = new_session_token();
        assert!(uuid::Uuid::parse_str(&first).is_ok());
        assert_ne!(first, second);
    }
}
