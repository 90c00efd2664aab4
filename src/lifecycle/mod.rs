use crate::{Error, Result, config::Config, summarizer::Summarizer};
use std::env;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

// Lifecycle states
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleState {
    Stopped,
    Running,
}

/// Cloneable handle through which request handlers reach the summarizer.
/// Holds a value only between lifecycle start and stop.
#[derive(Clone, Default)]
pub struct ServiceHandle {
    inner: Arc<RwLock<Option<Arc<Summarizer>>>>,
}

impl ServiceHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<Arc<Summarizer>> {
        self.inner.read().await.clone()
    }

    pub async fn set(&self, summarizer: Arc<Summarizer>) {
        *self.inner.write().await = Some(summarizer);
    }

    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }
}

/// Two-state machine owning the summarizer singleton.
///
/// `start` reads the API credential from the environment and constructs the
/// summarizer; both are fatal failures that leave the state at `Stopped`.
/// `stop` clears the published handle. Any other transition is invalid.
pub struct ServiceLifecycle {
    state: LifecycleState,
    handle: ServiceHandle,
}

impl ServiceLifecycle {
    pub fn new() -> Self {
        Self {
            state: LifecycleState::Stopped,
            handle: ServiceHandle::new(),
        }
    }

    pub fn current_state(&self) -> &LifecycleState {
        &self.state
    }

    pub fn handle(&self) -> ServiceHandle {
        self.handle.clone()
    }

    pub async fn start(&mut self, config: &Config) -> Result<()> {
        if self.state != LifecycleState::Stopped {
            return Err(Error::InvalidTransition {
                current: format!("{:?}", self.state),
                requested: "Running".to_string(),
            });
        }

        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            Error::config("OPENAI_API_KEY not set in environment. Application cannot start.")
        })?;

        let summarizer = Summarizer::new(config, api_key).await?;
        self.handle.set(Arc::new(summarizer)).await;
        self.state = LifecycleState::Running;

        info!("Summarizer service initialized");
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<()> {
        if self.state != LifecycleState::Running {
            return Err(Error::InvalidTransition {
                current: format!("{:?}", self.state),
                requested: "Stopped".to_string(),
            });
        }

        self.handle.clear().await;
        self.state = LifecycleState::Stopped;

        info!("Summarizer service stopped");
        Ok(())
    }
}

impl Default for ServiceLifecycle {
    fn default() -> Self {
        Self::new()
    }
}
