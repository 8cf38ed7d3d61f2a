//! Runtime settings for the server process.

use std::net::SocketAddr;
use std::time::Duration;

/// Which [`crate::store::TutorialStore`] implementation backs the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub store_backend: StoreBackend,
    pub bind_addr: SocketAddr,
    /// Prefix for the resource routes, e.g. `/api`.
    pub api_prefix: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub max_body_bytes: usize,
    pub api: ApiSettings,
}

/// Settings consulted by request handling.
#[derive(Clone, Debug, Default)]
pub struct ApiSettings {
    /// Reject create/update bodies whose title is missing or blank.
    pub require_title: bool,
}
