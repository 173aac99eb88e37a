//! Route guard decisions, kept pure so the rule table is testable
//! without a renderer.

use shared_types::Role;

use crate::routes::Route;
use crate::session::SessionPhase;

/// What a guard layout should do for the current render.
#[derive(Clone, Debug, PartialEq)]
pub enum GuardDecision {
    /// Render the guarded outlet.
    Allow,
    /// Navigate away instead of rendering.
    Redirect(Route),
    /// Session not resolved yet — render a placeholder, decide next frame.
    Pending,
}

/// Default landing route for a signed-in user.
pub fn landing(role: Role) -> Route {
    match role {
        Role::Admin => Route::Dashboard {},
        Role::User => Route::Home {},
    }
}

/// Guard for routes that require a signed-in user with `required` role.
///
/// Guests go to the login screen. An authenticated user whose role does
/// not satisfy the requirement goes to `fallback` — never to login,
/// which could loop for a signed-in user.
pub fn protected(phase: &SessionPhase, required: Role, fallback: Route) -> GuardDecision {
    match phase {
        SessionPhase::Unknown => GuardDecision::Pending,
        SessionPhase::Guest => GuardDecision::Redirect(Route::Login {}),
        SessionPhase::Authenticated(user) => {
            if user.role.satisfies(required) {
                GuardDecision::Allow
            } else {
                GuardDecision::Redirect(fallback)
            }
        }
    }
}

/// Guard for login/register: signed-in users are sent to their landing
/// route instead of being shown the form again.
pub fn public_only(phase: &SessionPhase) -> GuardDecision {
    match phase {
        SessionPhase::Unknown => GuardDecision::Pending,
        SessionPhase::Guest => GuardDecision::Allow,
        SessionPhase::Authenticated(user) => GuardDecision::Redirect(landing(user.role)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::AuthUser;

    fn user_with(role: Role) -> SessionPhase {
        SessionPhase::Authenticated(AuthUser {
            id: "u1".into(),
            email: "user@example.com".into(),
            display_name: "Test User".into(),
            role,
        })
    }

    #[test]
    fn unknown_phase_always_holds() {
        let phase = SessionPhase::Unknown;
        assert_eq!(
            protected(&phase, Role::User, Route::Home {}),
            GuardDecision::Pending
        );
        assert_eq!(
            protected(&phase, Role::Admin, Route::Home {}),
            GuardDecision::Pending
        );
        assert_eq!(public_only(&phase), GuardDecision::Pending);
    }

    #[test]
    fn guest_is_sent_to_login_from_protected_routes() {
        let phase = SessionPhase::Guest;
        assert_eq!(
            protected(&phase, Role::User, Route::Home {}),
            GuardDecision::Redirect(Route::Login {})
        );
        assert_eq!(
            protected(&phase, Role::Admin, Route::Home {}),
            GuardDecision::Redirect(Route::Login {})
        );
    }

    #[test]
    fn guest_may_view_login_and_register() {
        assert_eq!(public_only(&SessionPhase::Guest), GuardDecision::Allow);
    }

    #[test]
    fn matching_role_is_allowed_through() {
        assert_eq!(
            protected(&user_with(Role::User), Role::User, Route::Home {}),
            GuardDecision::Allow
        );
        assert_eq!(
            protected(&user_with(Role::Admin), Role::Admin, Route::Home {}),
            GuardDecision::Allow
        );
    }

    #[test]
    fn admin_satisfies_the_user_requirement() {
        assert_eq!(
            protected(&user_with(Role::Admin), Role::User, Route::Home {}),
            GuardDecision::Allow
        );
    }

    #[test]
    fn customer_hitting_admin_routes_falls_back_to_home_not_login() {
        assert_eq!(
            protected(&user_with(Role::User), Role::Admin, Route::Home {}),
            GuardDecision::Redirect(Route::Home {})
        );
    }

    #[test]
    fn signed_in_admin_is_redirected_off_the_login_form() {
        assert_eq!(
            public_only(&user_with(Role::Admin)),
            GuardDecision::Redirect(Route::Dashboard {})
        );
    }

    #[test]
    fn signed_in_customer_is_redirected_off_the_login_form() {
        assert_eq!(
            public_only(&user_with(Role::User)),
            GuardDecision::Redirect(Route::Home {})
        );
    }

    #[test]
    fn landing_route_depends_on_role() {
        assert_eq!(landing(Role::Admin), Route::Dashboard {});
        assert_eq!(landing(Role::User), Route::Home {});
    }
}
