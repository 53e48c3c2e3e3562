// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::config::GateConfig;
use crate::token::DispatchProfile;

/// Shared roomgate state. Immutable after startup.
pub struct GateState {
    pub config: GateConfig,
    /// Agent dispatched into every room this service hands out.
    pub dispatch: DispatchProfile,
}

impl GateState {
    pub fn new(config: GateConfig, dispatch: DispatchProfile) -> Self {
        Self { config, dispatch }
    }
}
