// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: the fallback when the query is not a substring.
//!
//! A longest-common-subsequence table over code points, one witness recovered
//! by backtracking, and a score that rewards witnesses whose characters sit
//! next to each other.

mod lcs;

pub use lcs::*;
