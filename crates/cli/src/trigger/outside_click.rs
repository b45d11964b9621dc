// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Closing the log panel on clicks elsewhere in the host UI.
//!
//! The host publishes every pointer-down as a [`ClickTarget`] on a
//! `tokio::sync::broadcast` channel. A trigger subscribes for as long as it
//! is mounted; dropping the returned [`OutsideClickSubscription`] stops the
//! listener.

use std::sync::Arc;

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;

use super::sync_trigger::SyncTrigger;

/// Identifier of a host UI element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// Where a click landed: the element chain from the root down to the
/// element that was hit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    path: Vec<ElementId>,
}

impl ClickTarget {
    pub fn new(path: Vec<ElementId>) -> Self {
        ClickTarget { path }
    }

    /// Whether the click hit `element` or one of its descendants.
    pub fn contains(&self, element: ElementId) -> bool {
        self.path.contains(&element)
    }

    /// The element that was hit, if any.
    pub fn leaf(&self) -> Option<ElementId> {
        self.path.last().copied()
    }
}

/// Live outside-click listener; dropping it unsubscribes.
#[derive(Debug)]
pub struct OutsideClickSubscription {
    handle: JoinHandle<()>,
}

impl OutsideClickSubscription {
    /// Whether the listener is still running.
    pub fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for OutsideClickSubscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl SyncTrigger {
    /// Close the log panel whenever the host reports a click outside the
    /// trigger. Must be called from within a tokio runtime.
    pub fn watch_outside_clicks(
        self: &Arc<Self>,
        mut clicks: broadcast::Receiver<ClickTarget>,
    ) -> OutsideClickSubscription {
        let trigger = Arc::clone(self);
        let handle = tokio::spawn(async move {
            loop {
                match clicks.recv().await {
                    Ok(target) => {
                        if !trigger.is_inside(&target) {
                            trigger.close();
                        }
                    }
                    // Missed clicks may have landed outside
                    Err(RecvError::Lagged(missed)) => {
                        tracing::warn!(missed, "outside-click listener lagged, closing panel");
                        trigger.close();
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
        OutsideClickSubscription { handle }
    }
}
