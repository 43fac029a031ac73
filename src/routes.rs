use yew_router::prelude::*;

use crate::stores::AuthStore;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/projects")]
    Projects,
    #[at("/experiences")]
    Experiences,
    #[at("/technologies")]
    Technologies,
    #[at("/social-networks")]
    SocialNetworks,
    #[at("/users")]
    Users,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login | Route::NotFound)
    }
}

/// Outcome of evaluating a navigation target against the session.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteDecision {
    /// Session still unresolved; show the loading placeholder only.
    Loading,
    Render,
    Redirect(Route),
}

/// The route guard. Stateless: re-evaluated on every session change and
/// every navigation event.
pub fn decide(store: &AuthStore, route: &Route) -> RouteDecision {
    if store.loading {
        return RouteDecision::Loading;
    }

    match route {
        Route::Home => RouteDecision::Redirect(if store.is_authenticated {
            Route::Dashboard
        } else {
            Route::Login
        }),
        Route::Login if store.is_authenticated => RouteDecision::Redirect(Route::Dashboard),
        route if route.requires_auth() && !store.is_authenticated => {
            RouteDecision::Redirect(Route::Login)
        }
        _ => RouteDecision::Render,
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use yew::prelude::Reducible;

    use super::*;
    use crate::models::AuthUser;
    use crate::stores::AuthAction;

    const PROTECTED: [Route; 6] = [
        Route::Dashboard,
        Route::Projects,
        Route::Experiences,
        Route::Technologies,
        Route::SocialNetworks,
        Route::Users,
    ];

    fn resolved(authenticated: bool) -> AuthStore {
        let action = if authenticated {
            AuthAction::CheckSucceeded {
                seq: 1,
                user: AuthUser {
                    id: "u1".to_string(),
                    username: "admin".to_string(),
                    fullname: "Admin".to_string(),
                },
            }
        } else {
            AuthAction::CheckFailed { seq: 1 }
        };
        (*Rc::new(AuthStore::default()).reduce(action)).clone()
    }

    #[test]
    fn unresolved_session_renders_only_the_spinner() {
        let store = AuthStore::default();
        for route in PROTECTED.iter().chain([Route::Login, Route::Home].iter()) {
            assert_eq!(decide(&store, route), RouteDecision::Loading);
        }
    }

    #[test]
    fn anonymous_is_redirected_from_every_protected_route() {
        let store = resolved(false);
        for route in &PROTECTED {
            assert_eq!(decide(&store, route), RouteDecision::Redirect(Route::Login));
        }
    }

    #[test]
    fn authenticated_renders_every_protected_route() {
        let store = resolved(true);
        for route in &PROTECTED {
            assert_eq!(decide(&store, route), RouteDecision::Render);
        }
    }

    #[test]
    fn login_route_redirects_away_when_authenticated() {
        let store = resolved(true);
        assert_eq!(
            decide(&store, &Route::Login),
            RouteDecision::Redirect(Route::Dashboard)
        );
    }

    #[test]
    fn login_route_renders_when_anonymous() {
        let store = resolved(false);
        assert_eq!(decide(&store, &Route::Login), RouteDecision::Render);
    }

    #[test]
    fn home_redirects_by_auth_state() {
        assert_eq!(
            decide(&resolved(true), &Route::Home),
            RouteDecision::Redirect(Route::Dashboard)
        );
        assert_eq!(
            decide(&resolved(false), &Route::Home),
            RouteDecision::Redirect(Route::Login)
        );
    }

    #[test]
    fn not_found_renders_regardless_of_session() {
        assert_eq!(decide(&resolved(true), &Route::NotFound), RouteDecision::Render);
        assert_eq!(decide(&resolved(false), &Route::NotFound), RouteDecision::Render);
    }

    #[test]
    fn cold_start_scenario_anonymous_visitor() {
        // App start: everything behind the spinner.
        let store = AuthStore::default();
        assert_eq!(decide(&store, &Route::Dashboard), RouteDecision::Loading);

        // check_auth resolves anonymous: dashboard redirects to login.
        let store = resolved(false);
        assert_eq!(
            decide(&store, &Route::Dashboard),
            RouteDecision::Redirect(Route::Login)
        );
    }

    #[test]
    fn logout_scenario_redirects_protected_navigation() {
        let store = resolved(true);
        assert_eq!(decide(&store, &Route::Dashboard), RouteDecision::Render);

        let store = (*Rc::new(store).reduce(AuthAction::LoggedOut { seq: 2 })).clone();
        assert_eq!(
            decide(&store, &Route::Dashboard),
            RouteDecision::Redirect(Route::Login)
        );
    }
}
