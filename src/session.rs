//! Session holder: who is logged in, if anyone.
//!
//! The session lives in a `use_reducer` handle provided at the app root. It starts in
//! [`AuthStatus::Checking`] until the copy kept in `sessionStorage` has been validated,
//! so a page reload never redirects to the login screen before restoration finishes.

use std::rc::Rc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::SESSION_STORAGE_KEY;
use crate::error::{ApiError, AuthError};
use crate::http::HttpClient;
use crate::models::{AuthResponse, User};

/// Token and user, always held together.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub token: String,
    pub user: User,
}

impl From<AuthResponse> for Credentials {
    fn from(resp: AuthResponse) -> Self {
        Self {
            token: resp.token,
            user: resp.user,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Checking,
    Authenticated,
    Unauthenticated,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    restored: bool,
    credentials: Option<Credentials>,
}

pub enum SessionAction {
    /// Restoration finished with whatever survived validation.
    Restored(Option<Credentials>),
    SignedIn(Credentials),
    /// Fresh profile data for the signed-in user. Ignored when signed out.
    UserRefreshed(User),
    SignedOut,
    /// A request sent with `token` was rejected. Ends the session only if it still
    /// holds that token.
    Expired { token: Option<String> },
}

impl Session {
    pub fn status(&self) -> AuthStatus {
        match (self.restored, &self.credentials) {
            (false, _) => AuthStatus::Checking,
            (true, Some(_)) => AuthStatus::Authenticated,
            (true, None) => AuthStatus::Unauthenticated,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.token.as_str())
    }

    pub fn user(&self) -> Option<&User> {
        self.credentials.as_ref().map(|c| &c.user)
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// API client carrying the current token, if any.
    pub fn client(&self) -> HttpClient {
        HttpClient::new(self.token().map(str::to_owned))
    }

    pub fn apply(&self, action: SessionAction) -> Session {
        match action {
            // Only the initial state comes from restoration; a sign-in that won the
            // race is kept.
            SessionAction::Restored(_) if self.restored => self.clone(),
            SessionAction::Restored(credentials) => Session {
                restored: true,
                credentials,
            },
            SessionAction::SignedIn(credentials) => Session {
                restored: true,
                credentials: Some(credentials),
            },
            SessionAction::UserRefreshed(user) => Session {
                restored: self.restored,
                credentials: self
                    .credentials
                    .as_ref()
                    .map(|c| Credentials {
                        token: c.token.clone(),
                        user,
                    }),
            },
            SessionAction::SignedOut => Session {
                restored: true,
                credentials: None,
            },
            SessionAction::Expired { token } if token.as_deref() == self.token() => Session {
                restored: true,
                credentials: None,
            },
            SessionAction::Expired { .. } => self.clone(),
        }
    }
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Authentication endpoints of the finance API.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError>;
    async fn register(&self, name: &str, email: &str, password: &str)
        -> Result<AuthResponse, ApiError>;
    async fn current_user(&self) -> Result<User, ApiError>;
}

pub async fn login(
    api: &impl AuthApi,
    email: &str,
    password: &str,
) -> Result<Credentials, AuthError> {
    match api.login(email.trim(), password).await {
        Ok(resp) => {
            tracing::info!(user = %resp.user.id, "signed in");
            Ok(resp.into())
        }
        Err(err) => {
            tracing::warn!(%err, "login failed");
            Err(AuthError::InvalidCredentials)
        }
    }
}

pub async fn register(
    api: &impl AuthApi,
    name: &str,
    email: &str,
    password: &str,
) -> Result<Credentials, AuthError> {
    match api.register(name.trim(), email.trim(), password).await {
        Ok(resp) => {
            tracing::info!(user = %resp.user.id, "registered");
            Ok(resp.into())
        }
        Err(err) => {
            tracing::warn!(%err, "registration failed");
            Err(AuthError::RegistrationFailed)
        }
    }
}

/// Validates a stored session against `/auth/me`.
///
/// A 401 drops it. Any other failure keeps it: the server still rejects a bad token on
/// the next call.
pub async fn restore(api: &impl AuthApi, stored: Credentials) -> Option<Credentials> {
    match api.current_user().await {
        Ok(mut user) => {
            if user.id.is_empty() {
                user.id = stored.user.id.clone();
            }
            Some(Credentials {
                token: stored.token,
                user,
            })
        }
        Err(ApiError::Unauthorized) => {
            tracing::info!("stored session rejected");
            None
        }
        Err(err) => {
            tracing::warn!(%err, "could not validate stored session, keeping it");
            Some(stored)
        }
    }
}

pub type SessionHandle = UseReducerHandle<Session>;

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("use_session called outside SessionProvider")
}

/// The action a failed page request implies for the session, if any.
pub fn expiry(sent_with: &HttpClient, err: &ApiError) -> Option<SessionAction> {
    err.is_unauthorized().then(|| SessionAction::Expired {
        token: sent_with.token().map(str::to_owned),
    })
}

/// Ends the session when a request made with its token was rejected as unauthorized.
pub fn end_if_unauthorized(session: &SessionHandle, sent_with: &HttpClient, err: &ApiError) {
    if let Some(action) = expiry(sent_with, err) {
        tracing::info!("session expired");
        session.dispatch(action);
    }
}

fn load_stored() -> Option<Credentials> {
    let storage = web_sys::window()?.session_storage().ok()??;
    let raw = storage.get_item(SESSION_STORAGE_KEY).ok()??;
    match serde_json::from_str::<Credentials>(&raw) {
        Ok(credentials) => Some(credentials),
        Err(err) => {
            tracing::warn!(%err, "discarding unreadable stored session");
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
            None
        }
    }
}

fn store(credentials: Option<&Credentials>) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.session_storage() {
            match credentials.map(serde_json::to_string) {
                Some(Ok(raw)) => {
                    let _ = storage.set_item(SESSION_STORAGE_KEY, &raw);
                }
                Some(Err(err)) => tracing::error!(%err, "could not persist session"),
                None => {
                    let _ = storage.remove_item(SESSION_STORAGE_KEY);
                }
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(Session::default);

    {
        let session = session.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let restored = match load_stored() {
                        Some(stored) => {
                            let client = HttpClient::new(Some(stored.token.clone()));
                            restore(&client, stored).await
                        }
                        None => None,
                    };
                    session.dispatch(SessionAction::Restored(restored));
                });
                || ()
            },
            (),
        );
    }

    {
        let status = session.status();
        let credentials = session.credentials().cloned();
        use_effect_with_deps(
            move |(status, credentials)| {
                if *status != AuthStatus::Checking {
                    store(credentials.as_ref());
                }
                || ()
            },
            (status, credentials),
        );
    }

    html! {
        <ContextProvider<SessionHandle> context={session}>
            { for props.children.iter() }
        </ContextProvider<SessionHandle>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            token: "t0k3n".to_string(),
            user: user(),
        }
    }

    /// In-memory stand-in for the auth endpoints.
    struct FakeAuth {
        accept_password: &'static str,
        me: Result<User, ApiError>,
    }

    impl FakeAuth {
        fn new() -> Self {
            Self {
                accept_password: "correct horse",
                me: Ok(user()),
            }
        }
    }

    #[async_trait(?Send)]
    impl AuthApi for FakeAuth {
        async fn login(&self, _email: &str, password: &str) -> Result<AuthResponse, ApiError> {
            if password == self.accept_password {
                Ok(AuthResponse {
                    token: "t0k3n".to_string(),
                    user: user(),
                })
            } else {
                Err(ApiError::Status { status: 400 })
            }
        }

        async fn register(
            &self,
            name: &str,
            email: &str,
            _password: &str,
        ) -> Result<AuthResponse, ApiError> {
            if email == "taken@example.com" {
                return Err(ApiError::Status { status: 400 });
            }
            Ok(AuthResponse {
                token: "fresh".to_string(),
                user: User {
                    id: "u2".to_string(),
                    name: name.to_string(),
                    email: email.to_string(),
                },
            })
        }

        async fn current_user(&self) -> Result<User, ApiError> {
            self.me.clone()
        }
    }

    fn assert_consistent(session: &Session) {
        assert_eq!(session.token().is_some(), session.user().is_some());
    }

    #[test]
    fn starts_checking_with_nothing() {
        let session = Session::default();
        assert_eq!(session.status(), AuthStatus::Checking);
        assert_consistent(&session);
    }

    #[test]
    fn token_and_user_travel_together_through_every_action() {
        let mut session = Session::default();
        let actions = vec![
            SessionAction::UserRefreshed(user()),
            SessionAction::Restored(None),
            SessionAction::UserRefreshed(user()),
            SessionAction::SignedIn(credentials()),
            SessionAction::UserRefreshed(User {
                name: "Ada L.".to_string(),
                ..user()
            }),
            SessionAction::Expired {
                token: Some("stale".to_string()),
            },
            SessionAction::SignedOut,
            SessionAction::Restored(Some(credentials())),
        ];
        for action in actions {
            session = session.apply(action);
            assert_consistent(&session);
        }
        assert_eq!(session.status(), AuthStatus::Unauthenticated);
    }

    #[test]
    fn logout_clears_everything() {
        let session = Session::default()
            .apply(SessionAction::SignedIn(credentials()))
            .apply(SessionAction::SignedOut);
        assert_eq!(session.status(), AuthStatus::Unauthenticated);
        assert_eq!(session.token(), None);
        assert_eq!(session.user(), None);
    }

    #[test]
    fn successful_login_yields_credentials() {
        let creds = block_on(login(&FakeAuth::new(), " ada@example.com ", "correct horse")).unwrap();
        let session = Session::default()
            .apply(SessionAction::Restored(None))
            .apply(SessionAction::SignedIn(creds));
        assert_eq!(session.token(), Some("t0k3n"));
        assert_eq!(session.user().map(|u| u.name.as_str()), Some("Ada"));
    }

    #[test]
    fn wrong_password_is_invalid_credentials_and_leaves_session_alone() {
        let session = Session::default().apply(SessionAction::Restored(None));
        let err = block_on(login(&FakeAuth::new(), "ada@example.com", "nope")).unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(session.status(), AuthStatus::Unauthenticated);
    }

    #[test]
    fn failed_registration_reports_generic_message() {
        let err = block_on(register(&FakeAuth::new(), "Ada", "taken@example.com", "pw")).unwrap_err();
        assert_eq!(err.to_string(), "Registration failed");

        let creds = block_on(register(&FakeAuth::new(), " Bob ", "bob@example.com", "pw")).unwrap();
        assert_eq!(creds.user.name, "Bob");
        assert_eq!(creds.token, "fresh");
    }

    #[test]
    fn restore_drops_rejected_token() {
        let api = FakeAuth {
            me: Err(ApiError::Unauthorized),
            ..FakeAuth::new()
        };
        assert_eq!(block_on(restore(&api, credentials())), None);
    }

    #[test]
    fn restore_keeps_session_when_server_unreachable() {
        let api = FakeAuth {
            me: Err(ApiError::Network("offline".to_string())),
            ..FakeAuth::new()
        };
        assert_eq!(block_on(restore(&api, credentials())), Some(credentials()));
    }

    #[test]
    fn restore_refreshes_profile_and_keeps_id() {
        let api = FakeAuth {
            me: Ok(User {
                id: String::new(),
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
            }),
            ..FakeAuth::new()
        };
        let restored = block_on(restore(&api, credentials())).unwrap();
        assert_eq!(restored.user.id, "u1");
        assert_eq!(restored.user.name, "Ada Lovelace");
    }

    fn fresh() -> Credentials {
        Credentials {
            token: "new".to_string(),
            user: User {
                name: "New".to_string(),
                ..user()
            },
        }
    }

    #[test]
    fn late_restore_does_not_override_a_sign_in() {
        let signed_in = Session::default().apply(SessionAction::SignedIn(fresh()));

        let dropped = signed_in.apply(SessionAction::Restored(None));
        assert_eq!(dropped.status(), AuthStatus::Authenticated);
        assert_eq!(dropped.token(), Some("new"));

        let stale = signed_in.apply(SessionAction::Restored(Some(credentials())));
        assert_eq!(stale.token(), Some("new"));
        assert_eq!(stale.user().map(|u| u.name.as_str()), Some("New"));
    }

    #[test]
    fn unauthorized_page_request_ends_the_session() {
        let session = Session::default().apply(SessionAction::Restored(Some(credentials())));
        let client = session.client();

        let action = expiry(&client, &ApiError::Unauthorized).unwrap();
        let session = session.apply(action);
        assert_eq!(session.status(), AuthStatus::Unauthenticated);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn other_failures_keep_the_session() {
        let client = HttpClient::new(Some("t0k3n".to_string()));
        for err in [
            ApiError::Network("offline".to_string()),
            ApiError::Status { status: 500 },
            ApiError::Status { status: 403 },
            ApiError::Decode("bad json".to_string()),
        ] {
            assert!(expiry(&client, &err).is_none());
        }
    }

    #[test]
    fn rejection_of_an_old_token_spares_a_newer_sign_in() {
        let old_client = HttpClient::new(Some("t0k3n".to_string()));
        let session = Session::default()
            .apply(SessionAction::Restored(Some(credentials())))
            .apply(SessionAction::SignedOut)
            .apply(SessionAction::SignedIn(fresh()));

        let action = expiry(&old_client, &ApiError::Unauthorized).unwrap();
        let session = session.apply(action);
        assert_eq!(session.status(), AuthStatus::Authenticated);
        assert_eq!(session.token(), Some("new"));
    }
}
