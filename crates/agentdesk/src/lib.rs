// SPDX-FileCopyrightText: 2026 Agentdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Agentdesk: the wired console stack.
//!
//! [`App`] assembles the whole pipeline from a [`DeskConfig`]: persistent
//! store, restored session, router with the console route table, the
//! authenticated request pipeline, and one typed client per backend
//! resource. A UI host embeds `App` and supplies the [`Notifier`] that
//! surfaces notices to the user.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use agentdesk_api::{AgentClient, KnowledgeClient, PluginClient, UserClient, WorkflowDrafts};
use agentdesk_config::DeskConfig;
use agentdesk_core::{DeskError, Notifier, PersistentStore, TracingNotifier, UserProfile};
use agentdesk_http::Http;
use agentdesk_router::Router;
use agentdesk_session::SessionStore;
use agentdesk_store::FileStore;

pub use agentdesk_config::{load_and_validate, render_errors, ConfigError};
pub use agentdesk_core::{Location, NoticeLevel};

/// The assembled console stack.
pub struct App {
    session: Arc<SessionStore>,
    router: Arc<Router>,
    agents: AgentClient,
    knowledge: KnowledgeClient,
    plugins: PluginClient,
    users: UserClient,
    workflows: WorkflowDrafts,
}

impl App {
    /// Wires the stack over the file store named by the configuration.
    pub fn new(config: &DeskConfig, notifier: Arc<dyn Notifier>) -> Result<Self, DeskError> {
        let store = Arc::new(FileStore::open(&config.storage.state_path)?);
        Self::with_store(config, store, notifier)
    }

    /// Wires the stack over the default tracing notifier. Useful for
    /// headless hosts where notices only need to reach the logs.
    pub fn headless(config: &DeskConfig) -> Result<Self, DeskError> {
        Self::new(config, Arc::new(TracingNotifier))
    }

    /// Wires the stack over an injected store implementation.
    pub fn with_store(
        config: &DeskConfig,
        store: Arc<dyn PersistentStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, DeskError> {
        let session = Arc::new(SessionStore::restore(store.clone()));
        let router = Arc::new(Router::with_console_routes(
            session.clone(),
            config.console.title.clone(),
        ));
        let http = Arc::new(Http::new(
            config.api.base_url.clone(),
            Duration::from_secs(config.api.timeout_secs),
            session.clone(),
            notifier,
            router.clone(),
        )?);

        info!(
            base_url = %config.api.base_url,
            restored = session.is_logged_in(),
            "console stack wired"
        );

        Ok(Self {
            session,
            router,
            agents: AgentClient::new(http.clone()),
            knowledge: KnowledgeClient::new(http.clone()),
            plugins: PluginClient::new(http.clone()),
            users: UserClient::new(http),
            workflows: WorkflowDrafts::new(store),
        })
    }

    /// Authenticates and establishes the session.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<UserProfile, DeskError> {
        let profile = self
            .users
            .login(&agentdesk_api::users::LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await?;
        self.session.login(profile.clone())?;
        Ok(profile)
    }

    /// Clears the session and every piece of persisted local state.
    pub fn sign_out(&self) -> Result<(), DeskError> {
        self.session.logout()
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn router(&self) -> &Arc<Router> {
        &self.router
    }

    pub fn agents(&self) -> &AgentClient {
        &self.agents
    }

    pub fn knowledge(&self) -> &KnowledgeClient {
        &self.knowledge
    }

    pub fn plugins(&self) -> &PluginClient {
        &self.plugins
    }

    pub fn users(&self) -> &UserClient {
        &self.users
    }

    pub fn workflows(&self) -> &WorkflowDrafts {
        &self.workflows
    }
}

/// Initializes the tracing subscriber with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("agentdesk={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
