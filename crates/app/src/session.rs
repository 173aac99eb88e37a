use dioxus::prelude::*;
use shared_types::{AuthUser, Role};

/// Where the app stands with respect to the caller's identity.
///
/// `Unknown` is the state before the session cookie has been resolved
/// against the server — guards must hold rather than redirect while in
/// it, otherwise a signed-in user refreshing a protected page gets
/// bounced to the login screen for a frame.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionPhase {
    Unknown,
    Guest,
    Authenticated(AuthUser),
}

impl SessionPhase {
    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            SessionPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionPhase::Authenticated(_))
    }
}

/// Global session state, provided once at the app root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub phase: Signal<SessionPhase>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            phase: Signal::new(SessionPhase::Unknown),
        }
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.phase.set(SessionPhase::Authenticated(user));
    }

    pub fn set_guest(&mut self) {
        self.phase.set(SessionPhase::Guest);
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase.read().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.phase.read().role() == Some(Role::Admin)
    }

    pub fn display_name(&self) -> Option<String> {
        self.phase.read().user().map(|u| u.display_name.clone())
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
