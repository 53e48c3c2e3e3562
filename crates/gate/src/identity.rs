// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Random participant identities and room names.

use rand::Rng;

/// Exclusive upper bound of the numeric suffix.
pub const SUFFIX_SPACE: u32 = 10_000;

/// Draw a suffix uniformly from `0..SUFFIX_SPACE`.
pub fn random_suffix() -> u32 {
    rand::rng().random_range(0..SUFFIX_SPACE)
}

/// `prefix` followed by a fresh random suffix.
pub fn generate(prefix: &str) -> String {
    format!("{prefix}{}", random_suffix())
}
