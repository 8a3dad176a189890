//! Session context supplied by the external identity provider.

/// Opaque identifier of an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The current identity context, passed explicitly to every operation that
/// cares about it.
///
/// Sign-up/sign-in and token persistence belong to the hosted identity
/// provider; this type only carries the nullable user it reports. Lifecycle:
/// created anonymous, [`Session::sign_in`] at session start,
/// [`Session::sign_out`] clears it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<UserId>,
}

impl Session {
    /// An unauthenticated session.
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    /// A session for an already-authenticated user.
    pub fn authenticated(user: UserId) -> Self {
        Self { user: Some(user) }
    }

    pub fn sign_in(&mut self, user: UserId) {
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }

    /// The current user, or `None` while unauthenticated.
    pub fn current_user(&self) -> Option<&UserId> {
        self.user.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_lifecycle() {
        let mut session = Session::anonymous();
        assert!(session.current_user().is_none());

        session.sign_in(UserId::new("u1"));
        assert_eq!(session.current_user().map(UserId::as_str), Some("u1"));

        session.sign_out();
        assert!(session.current_user().is_none());
    }
}
