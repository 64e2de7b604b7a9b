// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Three tiers decide a field score: exact equality, substring containment,
//! and a longest-common-subsequence fallback. The tiers are ordered so that
//! cheap, high-confidence checks short-circuit before the O(nm) table is built.
//! Ranking is separate and opt-in; the engine reports results in input order.

mod core;
pub mod ranking;

pub use self::core::*;
