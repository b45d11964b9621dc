// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Black-box specifications for the `larksync` binary.
//!
//! The files under `cli/` are registered as test targets of the
//! `larksync` package so they can run the freshly built binary.
