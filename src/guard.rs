//! Per-navigation access decision.

use crate::routes::{Route, Visibility};
use crate::session::AuthStatus;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Render,
    /// Navigate elsewhere, replacing the current history entry.
    Redirect(Route),
    /// Session restoration has not finished; render nothing route-specific yet.
    Wait,
}

pub fn check(route: &Route, status: AuthStatus) -> Access {
    match (route.visibility(), status) {
        (Visibility::Public, _) => Access::Render,
        (_, AuthStatus::Checking) => Access::Wait,
        (Visibility::Protected, AuthStatus::Authenticated) => Access::Render,
        (Visibility::Protected, AuthStatus::Unauthenticated) => Access::Redirect(Route::Login),
        (Visibility::Unmatched, AuthStatus::Authenticated) => Access::Redirect(Route::Dashboard),
        (Visibility::Unmatched, AuthStatus::Unauthenticated) => Access::Redirect(Route::Login),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::session::{Credentials, Session, SessionAction};
    use yew_router::Routable;

    const PROTECTED: [Route; 6] = [
        Route::Dashboard,
        Route::Income,
        Route::Expenses,
        Route::Budget,
        Route::Reports,
        Route::Profile,
    ];

    fn signed_in() -> Session {
        Session::default().apply(SessionAction::SignedIn(Credentials {
            token: "t".to_string(),
            user: User {
                id: "1".to_string(),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            },
        }))
    }

    #[test]
    fn protected_routes_render_when_signed_in() {
        for route in PROTECTED {
            assert_eq!(check(&route, AuthStatus::Authenticated), Access::Render);
        }
    }

    #[test]
    fn after_logout_every_protected_route_goes_to_login() {
        let session = signed_in().apply(SessionAction::SignedOut);
        for route in PROTECTED {
            assert_eq!(
                check(&route, session.status()),
                Access::Redirect(Route::Login)
            );
        }
    }

    #[test]
    fn unknown_paths_depend_on_session() {
        assert_eq!(
            check(&Route::NotFound, signed_in().status()),
            Access::Redirect(Route::Dashboard)
        );
        assert_eq!(
            check(&Route::NotFound, AuthStatus::Unauthenticated),
            Access::Redirect(Route::Login)
        );
    }

    #[test]
    fn nothing_redirects_while_checking() {
        for route in PROTECTED.iter().chain([Route::NotFound].iter()) {
            assert_eq!(check(route, AuthStatus::Checking), Access::Wait);
        }
    }

    #[test]
    fn auth_screens_are_always_reachable() {
        for status in [
            AuthStatus::Checking,
            AuthStatus::Authenticated,
            AuthStatus::Unauthenticated,
        ] {
            assert_eq!(check(&Route::Login, status), Access::Render);
            assert_eq!(check(&Route::Register, status), Access::Render);
        }
    }

    #[test]
    fn route_paths() {
        assert_eq!(Route::Dashboard.to_path(), "/");
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::Expenses.to_path(), "/expenses");
    }
}
