use super::{Session, SessionError};

// Placeholder credentials, not a security boundary.
const USERNAME: &str = "user";
const PASSWORD: &str = "password";

/// Checks a submitted credential pair against the fixed literal.
pub fn verify(username: &str, password: &str) -> bool {
    username == USERNAME && password == PASSWORD
}

impl Session {
    /// Logs the session in. On success the one-shot welcome banner is armed,
    /// on failure nothing changes and the user may simply retry.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), SessionError> {
        if !verify(username, password) {
            return Err(SessionError::InvalidCredentials);
        }
        self.logged_in = true;
        self.banner_pending = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::session::{Session, SessionError};

    use super::verify;

    #[test]
    fn verify_accepts_only_the_fixed_pair() {
        assert!(verify("user", "password"));
        assert!(!verify("user", "Password"));
        assert!(!verify("admin", "password"));
        assert!(!verify("", ""));
    }

    #[test]
    fn failed_login_leaves_session_untouched() {
        let mut session = Session::new();
        assert_eq!(
            session.login("user", "hunter2"),
            Err(SessionError::InvalidCredentials)
        );
        assert_eq!(session, Session::new());
    }

    #[test]
    fn successful_login_arms_the_banner() {
        let mut session = Session::new();
        session.login("user", "password").unwrap();
        assert!(session.is_logged_in());
        assert!(session.take_banner());
    }
}
