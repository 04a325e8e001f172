//! Route guards.

use std::fmt;

use super::session::SessionState;

/// Who may reach a view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    /// Anyone, logged in or not.
    Public,
    /// Any logged-in user.
    Authenticated,
    /// Logged-in users holding the admin role.
    Admin,
    /// Only the owner of the given account.
    SelfOnly(String),
}

/// Why a session was turned away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Denied {
    /// Nobody is logged in.
    LoginRequired,
    /// Logged in, but not allowed here.
    Unauthorized,
}

impl fmt::Display for Denied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denied::LoginRequired => f.write_str("login required"),
            Denied::Unauthorized => f.write_str("401 unauthorized"),
        }
    }
}

impl std::error::Error for Denied {}

impl Access {
    /// Check a session against this rule.
    pub fn check(&self, session: &SessionState) -> Result<(), Denied> {
        if *self == Access::Public {
            return Ok(());
        }
        if !session.is_authenticated() {
            return Err(Denied::LoginRequired);
        }

        let allowed = match self {
            Access::Public | Access::Authenticated => true,
            Access::Admin => session.is_admin(),
            Access::SelfOnly(email) => session
                .email
                .as_deref()
                .is_some_and(|own| own.eq_ignore_ascii_case(email)),
        };

        if allowed { Ok(()) } else { Err(Denied::Unauthorized) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthToken;
    use crate::model::ADMIN_ROLE;

    fn user(email: &str) -> SessionState {
        SessionState::logged_in(AuthToken::new("tok"), email)
    }

    #[test]
    fn public_lets_everyone_in() {
        assert_eq!(Access::Public.check(&SessionState::default()), Ok(()));
    }

    #[test]
    fn anonymous_needs_login() {
        let anon = SessionState::default();
        assert_eq!(Access::Authenticated.check(&anon), Err(Denied::LoginRequired));
        assert_eq!(Access::Admin.check(&anon), Err(Denied::LoginRequired));
        assert_eq!(
            Access::SelfOnly("a@b.com".to_string()).check(&anon),
            Err(Denied::LoginRequired)
        );
    }

    #[test]
    fn admin_needs_role() {
        let mut session = user("a@b.com");
        assert_eq!(Access::Authenticated.check(&session), Ok(()));
        assert_eq!(Access::Admin.check(&session), Err(Denied::Unauthorized));

        session.role = Some(ADMIN_ROLE.to_string());
        assert_eq!(Access::Admin.check(&session), Ok(()));
    }

    #[test]
    fn self_only_matches_email() {
        let session = user("a@b.com");
        assert_eq!(Access::SelfOnly("A@B.com".to_string()).check(&session), Ok(()));
        assert_eq!(
            Access::SelfOnly("c@d.com".to_string()).check(&session),
            Err(Denied::Unauthorized)
        );
    }
}
