// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Roomgate: issues LiveKit participant tokens that dispatch a voice agent
//! into a freshly named room.

pub mod config;
pub mod error;
pub mod identity;
pub mod issuer;
pub mod state;
pub mod test_support;
pub mod token;
pub mod transport;

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::config::GateConfig;
use crate::state::GateState;
use crate::token::DispatchProfile;
use crate::transport::build_router;

/// Run the token server until `shutdown` is cancelled.
pub async fn run(config: GateConfig, shutdown: CancellationToken) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);

    let dispatch = match config.dispatch_config {
        Some(ref path) => {
            let profile = DispatchProfile::load(path)?;
            tracing::info!(path = %path.display(), agent = %profile.agent_name, "loaded dispatch profile");
            profile
        }
        None => DispatchProfile::default(),
    };

    if let Some(var) = config.missing_credential() {
        tracing::warn!("{var} is not set; connection requests will fail until it is configured");
    }

    let state = Arc::new(GateState::new(config, dispatch));
    let router = build_router(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("roomgate listening on {addr}");
    axum::serve(listener, router).with_graceful_shutdown(shutdown.cancelled_owned()).await?;

    Ok(())
}
