//! Login gating: run an action only once the visitor is logged in.
//!
//! [`LoginGate::login_if_needed`] resolves immediately for a logged in
//! visitor. Otherwise the request is parked in [`LoginGateService`] until the
//! login dialog reports how the login went.

use futures::channel::oneshot;
use futures::future::{self, FutureExt, LocalBoxFuture};
use leptos::prelude::*;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use super::context::AuthState;

/// Why the visitor is asked to log in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    LogIn,
    CreateTopic,
}

impl LoginAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginAction::LogIn => "LoginToLogIn",
            LoginAction::CreateTopic => "LoginToCreateTopic",
        }
    }
}

impl std::fmt::Display for LoginAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("login cancelled")]
    Cancelled,
}

pub trait LoginGate: Send + Sync {
    /// Resolves with `Ok(())` once the visitor is authenticated.
    /// `return_to_url` must already have its `#` escaped.
    fn login_if_needed(
        &self,
        action: LoginAction,
        return_to_url: String,
    ) -> LocalBoxFuture<'static, Result<(), LoginError>>;
}

type Reply = Arc<Mutex<Option<oneshot::Sender<Result<(), LoginError>>>>>;

/// A request waiting for the login dialog
#[derive(Clone)]
pub struct PendingLogin {
    pub action: LoginAction,
    pub return_to_url: String,
    reply: Reply,
}

impl PendingLogin {
    fn resolve(&self, outcome: Result<(), LoginError>) {
        let sender = match self.reply.lock() {
            Ok(mut reply) => reply.take(),
            Err(_) => None,
        };
        if let Some(sender) = sender {
            // The waiting task may have been dropped already
            let _ = sender.send(outcome);
        }
    }
}

#[derive(Clone, Copy)]
pub struct LoginGateService {
    auth: Signal<AuthState>,
    pending: RwSignal<Vec<PendingLogin>>,
}

impl LoginGateService {
    pub fn new(auth: impl Into<Signal<AuthState>>) -> Self {
        Self {
            auth: auth.into(),
            pending: RwSignal::new(Vec::new()),
        }
    }

    /// Tracked: the login dialog is shown while this is true
    pub fn has_pending(&self) -> bool {
        self.pending.with(|p| !p.is_empty())
    }

    pub fn has_pending_untracked(&self) -> bool {
        self.pending.with_untracked(|p| !p.is_empty())
    }

    #[cfg(test)]
    fn pending_count(&self) -> usize {
        self.pending.with_untracked(|p| p.len())
    }

    /// The login dialog was shown or hidden. Hiding it while requests wait
    /// abandons them; returns whether anything was cancelled.
    pub fn dialog_visibility_changed(&self, open: bool) -> bool {
        if open || !self.has_pending_untracked() {
            return false;
        }
        self.cancel_all();
        true
    }

    /// Return URL of the most recent request, for redirect based sign-up
    pub fn latest_return_to_url(&self) -> Option<String> {
        self.pending
            .with(|p| p.last().map(|request| request.return_to_url.clone()))
    }

    pub fn latest_action(&self) -> Option<LoginAction> {
        self.pending.with(|p| p.last().map(|request| request.action))
    }

    /// Resolve every waiting request with the same outcome
    pub fn resolve_all(&self, outcome: Result<(), LoginError>) {
        let mut drained = Vec::new();
        self.pending.update(|p| drained = std::mem::take(p));
        log::debug!("Resolving {} pending login request(s)", drained.len());
        for request in drained {
            request.resolve(outcome.clone());
        }
    }

    pub fn cancel_all(&self) {
        self.resolve_all(Err(LoginError::Cancelled));
    }
}

impl LoginGate for LoginGateService {
    fn login_if_needed(
        &self,
        action: LoginAction,
        return_to_url: String,
    ) -> LocalBoxFuture<'static, Result<(), LoginError>> {
        if self.auth.with_untracked(AuthState::is_authenticated) {
            return future::ready(Ok(())).boxed_local();
        }

        log::info!("{}: login required, return to {}", action, return_to_url);
        let (sender, receiver) = oneshot::channel();
        self.pending.update(|p| {
            p.push(PendingLogin {
                action,
                return_to_url,
                reply: Arc::new(Mutex::new(Some(sender))),
            })
        });

        async move { receiver.await.unwrap_or(Err(LoginError::Cancelled)) }.boxed_local()
    }
}
