//! Admin credential verification

use tracing::error;

/// Configured admin identity.
///
/// Sourced from process configuration; compared, never persisted or
/// logged. Either half may be unset, which is a configuration error and
/// fails every verification.
#[derive(Clone, Default)]
pub struct AdminCredentials {
    email: Option<String>,
    password: Option<String>,
}

impl AdminCredentials {
    pub fn new(email: Option<String>, password: Option<String>) -> Self {
        Self { email, password }
    }

    /// Compare a submitted email against the configured admin email,
    /// trimmed and case-insensitive.
    pub fn verify_email(&self, candidate: &str) -> bool {
        let Some(configured) = self.email.as_deref() else {
            error!("ADMIN_EMAIL is not configured; rejecting login");
            return false;
        };
        configured.trim().eq_ignore_ascii_case(candidate.trim())
    }

    /// Compare a submitted password against the configured admin password
    /// in constant time.
    ///
    /// The equal-length short circuit is deliberate: length is treated as
    /// non-secret. Past that, every byte pair is XORed and the results
    /// OR-accumulated so the comparison takes the same time regardless of
    /// where the first mismatch sits.
    pub fn verify_password(&self, candidate: &str) -> bool {
        let Some(configured) = self.password.as_deref() else {
            error!("ADMIN_PASSWORD is not configured; rejecting login");
            return false;
        };

        let a = configured.as_bytes();
        let b = candidate.as_bytes();
        if a.len() != b.len() {
            return false;
        }

        let mut diff = 0u8;
        for (x, y) in a.iter().zip(b.iter()) {
            diff |= x ^ y;
        }
        diff == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> AdminCredentials {
        AdminCredentials::new(
            Some("admin@example.com".to_string()),
            Some("hunter2secret".to_string()),
        )
    }

    #[test]
    fn test_email_is_case_insensitive_and_trimmed() {
        let creds = creds();
        assert!(creds.verify_email("admin@example.com"));
        assert!(creds.verify_email("Admin@Example.COM"));
        assert!(creds.verify_email("  admin@example.com \n"));
        assert!(!creds.verify_email("other@example.com"));
    }

    #[test]
    fn test_password_exact_match_only() {
        let creds = creds();
        assert!(creds.verify_password("hunter2secret"));
        assert!(!creds.verify_password("hunter2secreT"));
        assert!(!creds.verify_password("hunter2secret "));
        assert!(!creds.verify_password(""));
        // Same length, mismatch in the first byte vs the last byte.
        assert!(!creds.verify_password("Xunter2secret"));
        assert!(!creds.verify_password("hunter2secreX"));
    }

    #[test]
    fn test_unset_credentials_always_fail() {
        let creds = AdminCredentials::default();
        assert!(!creds.verify_email("admin@example.com"));
        assert!(!creds.verify_password("anything"));
    }
}
