use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use yew::prelude::*;

use crate::models::AuthUser;

/// Handle to the session store, provided once at the application root.
pub type AuthContext = UseReducerHandle<AuthStore>;

static SEQ: AtomicU64 = AtomicU64::new(1);

/// Allocate the sequence number for one session-action invocation. The
/// store drops any resolution older than the last one it applied, so a
/// stale `check_auth` can never overwrite a later `logout`.
pub fn next_seq() -> u64 {
    SEQ.fetch_add(1, Ordering::Relaxed)
}

/// Client-side record of the current user's authentication status.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthStore {
    pub user: Option<AuthUser>,
    pub is_authenticated: bool,
    /// True from application start until the first `check_auth` resolves.
    pub loading: bool,
    /// Last login failure message; cleared on successful login.
    pub error: Option<String>,
    last_applied_seq: u64,
}

impl Default for AuthStore {
    fn default() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            loading: true,
            error: None,
            last_applied_seq: 0,
        }
    }
}

/// Resolution of one session action. Every variant carries the sequence
/// number allocated when the action was fired.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    CheckStarted { seq: u64 },
    CheckSucceeded { seq: u64, user: AuthUser },
    CheckFailed { seq: u64 },
    LoginSucceeded { seq: u64, user: AuthUser },
    LoginFailed { seq: u64, message: String },
    /// Applied on logout success and failure alike: the local session is
    /// always cleared, even if the server call failed.
    LoggedOut { seq: u64 },
}

impl AuthAction {
    fn seq(&self) -> u64 {
        match self {
            AuthAction::CheckStarted { seq }
            | AuthAction::CheckSucceeded { seq, .. }
            | AuthAction::CheckFailed { seq }
            | AuthAction::LoginSucceeded { seq, .. }
            | AuthAction::LoginFailed { seq, .. }
            | AuthAction::LoggedOut { seq } => *seq,
        }
    }
}

impl Reducible for AuthStore {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: AuthAction) -> Rc<Self> {
        let seq = action.seq();
        if seq < self.last_applied_seq {
            log::warn!("⏭️ Ignoring stale session outcome (seq {} < {})", seq, self.last_applied_seq);
            return self;
        }

        let mut next = (*self).clone();
        next.last_applied_seq = seq;

        match action {
            AuthAction::CheckStarted { .. } => {
                next.loading = true;
            }
            AuthAction::CheckSucceeded { user, .. } => {
                next.is_authenticated = true;
                next.user = Some(user);
                next.loading = false;
            }
            AuthAction::CheckFailed { .. } => {
                next.is_authenticated = false;
                next.user = None;
                next.loading = false;
            }
            AuthAction::LoginSucceeded { user, .. } => {
                next.is_authenticated = true;
                next.user = Some(user);
                next.error = None;
            }
            AuthAction::LoginFailed { message, .. } => {
                next.error = Some(message);
            }
            AuthAction::LoggedOut { .. } => {
                next.is_authenticated = false;
                next.user = None;
            }
        }

        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> AuthUser {
        AuthUser {
            id: "u1".to_string(),
            username: name.to_string(),
            fullname: format!("{} Fullname", name),
        }
    }

    fn apply(store: AuthStore, action: AuthAction) -> AuthStore {
        (*Rc::new(store).reduce(action)).clone()
    }

    #[test]
    fn starts_loading_and_anonymous() {
        let store = AuthStore::default();
        assert!(store.loading);
        assert!(!store.is_authenticated);
        assert!(store.user.is_none());
        assert!(store.error.is_none());
    }

    #[test]
    fn check_success_authenticates() {
        let store = apply(
            AuthStore::default(),
            AuthAction::CheckSucceeded { seq: 1, user: user("admin") },
        );
        assert!(store.is_authenticated);
        assert!(!store.loading);
        assert_eq!(store.user.as_ref().unwrap().username, "admin");
    }

    #[test]
    fn check_failure_is_anonymous_not_fatal() {
        let store = apply(AuthStore::default(), AuthAction::CheckFailed { seq: 1 });
        assert!(!store.is_authenticated);
        assert!(store.user.is_none());
        assert!(!store.loading);
        assert!(store.error.is_none());
    }

    #[test]
    fn loading_drops_exactly_once() {
        let store = apply(AuthStore::default(), AuthAction::CheckFailed { seq: 1 });
        assert!(!store.loading);

        // Subsequent login/logout outcomes never re-enter loading.
        let store = apply(store, AuthAction::LoginSucceeded { seq: 2, user: user("admin") });
        assert!(!store.loading);
        let store = apply(store, AuthAction::LoggedOut { seq: 3 });
        assert!(!store.loading);
    }

    #[test]
    fn login_failure_sets_error_and_keeps_auth_untouched() {
        let store = apply(AuthStore::default(), AuthAction::CheckFailed { seq: 1 });
        let store = apply(
            store,
            AuthAction::LoginFailed { seq: 2, message: "Incorrect credentials".to_string() },
        );
        assert_eq!(store.error.as_deref(), Some("Incorrect credentials"));
        assert!(!store.is_authenticated);
        assert!(store.user.is_none());
    }

    #[test]
    fn login_success_clears_previous_error() {
        let store = apply(AuthStore::default(), AuthAction::CheckFailed { seq: 1 });
        let store = apply(
            store,
            AuthAction::LoginFailed { seq: 2, message: "Incorrect credentials".to_string() },
        );
        let store = apply(store, AuthAction::LoginSucceeded { seq: 3, user: user("admin") });
        assert!(store.error.is_none());
        assert!(store.is_authenticated);
    }

    #[test]
    fn logout_clears_session() {
        let store = apply(
            AuthStore::default(),
            AuthAction::CheckSucceeded { seq: 1, user: user("admin") },
        );
        let store = apply(store, AuthAction::LoggedOut { seq: 2 });
        assert!(!store.is_authenticated);
        assert!(store.user.is_none());
    }

    #[test]
    fn stale_check_cannot_overwrite_logout() {
        // logout (seq 3) resolves before a check fired earlier (seq 2).
        let store = apply(
            AuthStore::default(),
            AuthAction::CheckSucceeded { seq: 1, user: user("admin") },
        );
        let store = apply(store, AuthAction::LoggedOut { seq: 3 });
        let store = apply(store, AuthAction::CheckSucceeded { seq: 2, user: user("admin") });

        assert!(!store.is_authenticated, "stale resolution must be dropped");
        assert!(store.user.is_none());
    }

    #[test]
    fn authenticated_implies_user_present() {
        let actions = vec![
            AuthAction::CheckStarted { seq: 1 },
            AuthAction::CheckFailed { seq: 2 },
            AuthAction::LoginFailed { seq: 3, message: "Incorrect credentials".to_string() },
            AuthAction::LoginSucceeded { seq: 4, user: user("admin") },
            AuthAction::LoggedOut { seq: 5 },
            AuthAction::CheckSucceeded { seq: 6, user: user("other") },
            AuthAction::LoggedOut { seq: 7 },
        ];

        let mut store = AuthStore::default();
        for action in actions {
            store = apply(store, action);
            if store.is_authenticated {
                assert!(store.user.is_some());
            }
        }
    }
}
