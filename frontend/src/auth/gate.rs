use log::{error, info};

use crate::auth::session::{Session, SessionError, SessionProvider};
use crate::config;

/// Where the callback page sends the user once the session lookup settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Community,
    Login { error: Option<String> },
}

impl Destination {
    pub fn href(&self) -> String {
        match self {
            Destination::Community => config::COMMUNITY_PATH.to_string(),
            Destination::Login { error: None } => config::LOGIN_PATH.to_string(),
            Destination::Login { error: Some(message) } => {
                format!("{}?error={}", config::LOGIN_PATH, urlencoding::encode(message))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Pending,
    Authenticated,
    Unauthenticated,
    Errored,
}

/// Client side route change.
pub trait Navigate {
    fn navigate(&self, destination: &Destination);
}

pub fn resolve(outcome: Result<Option<Session>, SessionError>) -> (GateState, Destination) {
    match outcome {
        Ok(Some(session)) => {
            info!(
                "Session found for user {} ({})",
                session.user.id,
                session.user.email.as_deref().unwrap_or("no email")
            );
            (GateState::Authenticated, Destination::Community)
        }
        Ok(None) => (GateState::Unauthenticated, Destination::Login { error: None }),
        Err(SessionError::Provider { message }) => {
            error!("Auth callback error: {}", message);
            (GateState::Errored, Destination::Login { error: Some(message) })
        }
        Err(SessionError::Unexpected(reason)) => {
            error!("Unexpected error during auth callback: {}", reason);
            (GateState::Errored, Destination::Login { error: None })
        }
    }
}

/// Looks the session up once and performs exactly one navigation.
pub async fn run_callback_gate<P, N>(provider: &P, navigator: &N) -> GateState
where
    P: SessionProvider,
    N: Navigate,
{
    let (state, destination) = resolve(provider.get_session().await);
    info!("Auth callback redirecting to {}", destination.href());
    navigator.navigate(&destination);
    state
}
