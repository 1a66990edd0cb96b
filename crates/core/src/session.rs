//! Mock authentication state: two states (anonymous, authenticated) with
//! field-presence validation only. This is deliberately not a security
//! boundary; the token is a fixed mock value.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::domain::session::{AuthSession, UserProfile};
use crate::storage::KeyValueStore;

const MOCK_TOKEN: &str = "mock-jwt-token";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("email and password are required")]
    MissingFields,
    #[error("password confirmation does not match")]
    PasswordMismatch,
    #[error("the terms and conditions must be accepted")]
    TermsNotAccepted,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub agree_to_terms: bool,
}

pub struct SessionManager {
    session: Option<AuthSession>,
    store: Box<dyn KeyValueStore>,
    snapshot_key: String,
}

impl SessionManager {
    /// Restores a persisted session; a malformed blob is discarded (and the
    /// stale key removed) so the state resets to anonymous.
    pub fn restore(mut store: Box<dyn KeyValueStore>, snapshot_key: impl Into<String>) -> Self {
        let snapshot_key = snapshot_key.into();
        let session = match store.get(&snapshot_key) {
            Some(raw) => match serde_json::from_str::<AuthSession>(&raw) {
                Ok(session) => Some(session),
                Err(error) => {
                    warn!(key = %snapshot_key, %error, "discarding malformed auth snapshot");
                    store.remove(&snapshot_key);
                    None
                }
            },
            None => None,
        };

        Self { session, store, snapshot_key }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn current(&self) -> Option<&AuthSession> {
        self.session.as_ref()
    }

    /// Field-presence validation only, then straight to authenticated.
    pub fn login(&mut self, request: LoginRequest) -> Result<&AuthSession, AuthError> {
        if request.email.trim().is_empty() || request.password.trim().is_empty() {
            return Err(AuthError::MissingFields);
        }

        self.install(UserProfile {
            email: request.email,
            display_name: "Gothic User".to_string(),
        })
    }

    pub fn register(&mut self, request: RegisterRequest) -> Result<&AuthSession, AuthError> {
        if request.email.trim().is_empty() || request.password.trim().is_empty() {
            return Err(AuthError::MissingFields);
        }
        if request.password != request.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if !request.agree_to_terms {
            return Err(AuthError::TermsNotAccepted);
        }

        let display_name = format!("{} {}", request.first_name.trim(), request.last_name.trim());
        self.install(UserProfile { email: request.email, display_name })
    }

    pub fn logout(&mut self) {
        self.session = None;
        self.store.remove(&self.snapshot_key);
    }

    fn install(&mut self, profile: UserProfile) -> Result<&AuthSession, AuthError> {
        let session =
            AuthSession { profile, token: MOCK_TOKEN.to_string(), signed_in_at: Utc::now() };

        match serde_json::to_string(&session) {
            Ok(snapshot) => self.store.set(&self.snapshot_key, &snapshot),
            Err(error) => warn!(%error, "auth snapshot serialization failed"),
        }

        Ok(self.session.insert(session))
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthError, LoginRequest, RegisterRequest, SessionManager};
    use crate::storage::{KeyValueStore, MemoryStore};

    const KEY: &str = "gothic-auth";

    fn manager() -> SessionManager {
        SessionManager::restore(Box::new(MemoryStore::new()), KEY)
    }

    fn valid_register() -> RegisterRequest {
        RegisterRequest {
            email: "morticia@night.mail".to_string(),
            password: "belfry".to_string(),
            confirm_password: "belfry".to_string(),
            first_name: "Morticia".to_string(),
            last_name: "Graves".to_string(),
            agree_to_terms: true,
        }
    }

    #[test]
    fn starts_anonymous() {
        assert!(!manager().is_authenticated());
    }

    #[test]
    fn login_requires_both_fields() {
        let mut sessions = manager();
        let result = sessions.login(LoginRequest {
            email: "morticia@night.mail".to_string(),
            ..LoginRequest::default()
        });
        assert_eq!(result.unwrap_err(), AuthError::MissingFields);
        assert!(!sessions.is_authenticated());
    }

    #[test]
    fn login_with_fields_present_authenticates() {
        let mut sessions = manager();
        let session = sessions
            .login(LoginRequest {
                email: "morticia@night.mail".to_string(),
                password: "belfry".to_string(),
                remember_me: true,
            })
            .expect("login");
        assert_eq!(session.profile.display_name, "Gothic User");
        assert!(sessions.is_authenticated());
    }

    #[test]
    fn register_checks_confirmation_and_terms() {
        let mut sessions = manager();

        let mismatched =
            RegisterRequest { confirm_password: "different".to_string(), ..valid_register() };
        assert_eq!(sessions.register(mismatched).unwrap_err(), AuthError::PasswordMismatch);

        let no_terms = RegisterRequest { agree_to_terms: false, ..valid_register() };
        assert_eq!(sessions.register(no_terms).unwrap_err(), AuthError::TermsNotAccepted);

        let session = sessions.register(valid_register()).expect("register");
        assert_eq!(session.profile.display_name, "Morticia Graves");
    }

    #[test]
    fn logout_returns_to_anonymous() {
        let mut sessions = manager();
        sessions
            .login(LoginRequest {
                email: "morticia@night.mail".to_string(),
                password: "belfry".to_string(),
                remember_me: false,
            })
            .expect("login");

        sessions.logout();
        assert!(!sessions.is_authenticated());
        assert!(sessions.current().is_none());
    }

    #[test]
    fn malformed_snapshot_resets_to_anonymous() {
        let mut store = MemoryStore::new();
        store.set(KEY, "{corrupt");

        let sessions = SessionManager::restore(Box::new(store), KEY);
        assert!(!sessions.is_authenticated());
    }

    #[test]
    fn valid_snapshot_restores_the_session() {
        let mut seeded = MemoryStore::new();
        {
            let mut sessions = SessionManager::restore(Box::new(MemoryStore::new()), KEY);
            let session = sessions
                .login(LoginRequest {
                    email: "morticia@night.mail".to_string(),
                    password: "belfry".to_string(),
                    remember_me: true,
                })
                .expect("login");
            seeded.set(KEY, &serde_json::to_string(session).expect("serialize"));
        }

        let restored = SessionManager::restore(Box::new(seeded), KEY);
        assert!(restored.is_authenticated());
        assert_eq!(restored.current().expect("session").profile.email, "morticia@night.mail");
    }
}
