// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 configwiz contributors

//! Utility modules
//!
//! Common utilities for the configwiz CLI.

pub mod colors;

pub use colors::*;
