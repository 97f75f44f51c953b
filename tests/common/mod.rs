//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use interview_assist::ai::{
    Delay, GenerateContentResponse, ModelError, ModelProvider, RetryPolicy,
};
use interview_assist::assistant::PromptRouter;
use interview_assist::server::AskServer;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Provider replaying scripted outcomes, repeating the last one forever.
pub struct StubProvider {
    outcomes: Mutex<VecDeque<Outcome>>,
    prompts: Mutex<Vec<String>>,
}

/// One scripted provider outcome.
#[derive(Clone)]
pub enum Outcome {
    Text(String),
    Response(GenerateContentResponse),
    Status(u16),
    Transport,
}

impl Outcome {
    fn into_result(self) -> Result<GenerateContentResponse, ModelError> {
        match self {
            Self::Text(text) => Ok(GenerateContentResponse::from_text(text)),
            Self::Response(response) => Ok(response),
            Self::Status(status) => Err(ModelError::Api {
                status,
                message: format!("stub status {status}"),
            }),
            Self::Transport => Err(ModelError::RequestFailed("connection refused".to_string())),
        }
    }
}

impl StubProvider {
    pub fn new(outcomes: Vec<Outcome>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn text(text: &str) -> Arc<Self> {
        Self::new(vec![Outcome::Text(text.to_string())])
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelProvider for StubProvider {
    async fn generate(&self, prompt: &str) -> Result<GenerateContentResponse, ModelError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let mut outcomes = self.outcomes.lock().unwrap();
        let outcome = if outcomes.len() > 1 {
            outcomes.pop_front()
        } else {
            outcomes.front().cloned()
        };
        outcome
            .unwrap_or(Outcome::Status(500))
            .into_result()
    }

    fn model(&self) -> &str {
        "stub-model"
    }
}

/// Delay that returns immediately and counts waits.
#[derive(Default)]
pub struct InstantDelay {
    waits: AtomicU32,
}

impl InstantDelay {
    pub fn waits(&self) -> u32 {
        self.waits.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Delay for InstantDelay {
    async fn wait(&self, _duration: Duration) {
        self.waits.fetch_add(1, Ordering::SeqCst);
    }
}

/// A server running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub delay: Arc<InstantDelay>,
    cancel: CancellationToken,
    handle: JoinHandle<std::io::Result<()>>,
}

impl TestServer {
    /// Start a server answering with `provider`, using an instant delay.
    pub async fn start(provider: Arc<dyn ModelProvider>) -> Self {
        let delay = Arc::new(InstantDelay::default());
        let router = PromptRouter::new(provider)
            .with_retry_policy(RetryPolicy::default())
            .with_delay(delay.clone());
        let app = AskServer::new(router).build_router();

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get address");

        let cancel = CancellationToken::new();
        let shutdown = cancel.clone();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move { shutdown.cancelled().await })
                .await
        });

        Self {
            addr,
            delay,
            cancel,
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub async fn shutdown(self) {
        self.cancel.cancel();
        let _ = tokio::time::timeout(Duration::from_secs(2), self.handle).await;
    }
}
