// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility modules for string processing.
//!
//! Query normalization and the bookkeeping between the two index spaces the
//! engine works in: code point indices (what the LCS table sees) and byte
//! offsets (what callers slice `&str` with).

pub mod normalize;
pub mod offsets;
