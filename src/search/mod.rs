// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: from a raw query and a question bank to a result set.
//!
//! `fields` picks the best field of one item; `engine` runs that over the
//! whole bank, drops zero scores, and recomputes the reported positions.

pub mod engine;
pub mod fields;

pub use engine::*;
pub use fields::best_field;
