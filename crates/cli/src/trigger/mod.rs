// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote synchronization trigger with status log.
//!
//! # Lifecycle
//!
//! ```text
//!            trigger_sync()
//!   Idle ───────────────────► Running ──ok──► Succeeded
//!    ▲                          │  │
//!    └──── future dropped ──────┘  └──err──► Failed
//! ```
//!
//! A second `trigger_sync()` while Running is ignored. Every settled call
//! opens the log panel so the outcome is visible; the panel only closes on
//! an explicit `close()`/`toggle()` or an outside click.

mod outside_click;
mod sync_trigger;

pub use outside_click::{ClickTarget, ElementId, OutsideClickSubscription};
pub use sync_trigger::{Phase, SyncOutcome, SyncTrigger};
