//! Fixed-window per-user rate limiting.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

pub const DEFAULT_MAX_REQUESTS: u32 = 5;

pub fn default_window() -> Duration {
    Duration::seconds(60)
}

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    reset_at: DateTime<Utc>,
}

/// Allows at most `max_requests` per user in each window.
///
/// A user's window opens on their first request and closes `window` later.
/// The first request strictly after `reset_at` opens a fresh window.
#[derive(Debug)]
pub struct FixedWindowLimiter {
    max_requests: u32,
    window: Duration,
    windows: HashMap<String, Window>,
}

impl Default for FixedWindowLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REQUESTS, default_window())
    }
}

impl FixedWindowLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: HashMap::new(),
        }
    }

    /// Record a request from `user` at `now` and report whether it is allowed.
    pub fn check(&mut self, user: &str, now: DateTime<Utc>) -> bool {
        let fresh = Window {
            count: 0,
            reset_at: now + self.window,
        };
        if !self.windows.contains_key(user) {
            self.prune(now);
        }
        let window = self.windows.entry(user.to_string()).or_insert(fresh);
        if now > window.reset_at {
            *window = fresh;
        }

        if window.count >= self.max_requests {
            debug!(user, count = window.count, "rate limit reached");
            return false;
        }
        window.count += 1;
        true
    }

    /// Drop every window that has closed by `now`. Runs whenever a user
    /// without an open window arrives.
    pub fn prune(&mut self, now: DateTime<Utc>) {
        self.windows.retain(|_, window| now <= window.reset_at);
    }

    /// Number of users with a window still held.
    pub fn tracked_users(&self) -> usize {
        self.windows.len()
    }
}
