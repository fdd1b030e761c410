#![cfg(feature = "std")]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::transport::{Reply, Request, Transport};

/// Transport that answers from a queue of canned outcomes and records every
/// request it sees. Clones share the same queue and log.
#[derive(Clone, Default)]
pub struct InMemoryTransport {
    replies: Arc<Mutex<VecDeque<anyhow::Result<Reply>>>>,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a completed exchange.
    pub fn push_reply(&self, reply: Reply) {
        self.lock_replies().push_back(Ok(reply));
    }

    /// Queue an exchange that fails before any response arrives.
    pub fn push_failure(&self, reason: &str) {
        self.lock_replies()
            .push_back(Err(anyhow::anyhow!("{}", reason)));
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<Request> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn lock_replies(&self) -> std::sync::MutexGuard<'_, VecDeque<anyhow::Result<Reply>>> {
        self.replies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait::async_trait]
impl Transport for InMemoryTransport {
    async fn send(&self, request: Request) -> anyhow::Result<Reply> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request);
        let next = self.lock_replies().pop_front();
        next.unwrap_or_else(|| Err(anyhow::anyhow!("Channel closed")))
    }
}
