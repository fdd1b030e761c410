use alloc::{boxed::Box, string::String};

/// HTTP verbs the client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A bodiless request against the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: &'static str,
}

impl Request {
    pub const fn get(path: &'static str) -> Self {
        Self { method: Method::Get, path }
    }

    pub const fn post(path: &'static str) -> Self {
        Self { method: Method::Post, path }
    }
}

/// Status and raw body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One round trip to the server. An `Err` means the exchange never
/// completed; any status code, including 5xx, is returned as a [`Reply`].
///
/// Takes `&self` so requests may overlap.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> anyhow::Result<Reply>;
}

#[cfg(feature = "std")]
pub mod http;
#[cfg(feature = "std")]
pub mod in_memory;
