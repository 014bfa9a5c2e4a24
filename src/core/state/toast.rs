use std::collections::VecDeque;

use crate::{
    core::{cmd::Cmd, msg::toast::ToastMsg},
    domain::Notification,
};

/// A notification on screen, identified for its expiry timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Queue of visible toasts, newest last
///
/// At most `limit` toasts are kept; pushing beyond it drops the oldest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastState {
    toasts: VecDeque<Toast>,
    next_id: u64,
    limit: usize,
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ToastState {
    pub fn new(limit: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 1,
            limit: limit.max(1),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Show a notification and schedule its dismissal
    pub fn push(&mut self, notification: Notification) -> Vec<Cmd> {
        let id = self.next_id;
        self.next_id += 1;

        let after_ms = notification.duration_ms;
        log::debug!("toast {id}: {}", notification.title);
        self.toasts.push_back(Toast { id, notification });
        while self.toasts.len() > self.limit {
            self.toasts.pop_front();
        }

        vec![Cmd::ScheduleToastExpiry { id, after_ms }]
    }

    /// Toast-specific update function
    pub fn update(&mut self, msg: ToastMsg) -> Vec<Cmd> {
        match msg {
            // Expiry of a toast that was already replaced is a no-op
            ToastMsg::Expired { id } => self.toasts.retain(|toast| toast.id != id),
            ToastMsg::Cleared => self.toasts.clear(),
        }
        vec![]
    }
}
