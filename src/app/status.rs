use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Status line with a ready message and a queue of transient toasts.
///
/// Toasts are shown one at a time, oldest first, each for the toast TTL, so a
/// burst of notifications plays back in order instead of overwriting itself.
#[derive(Debug, Clone)]
pub struct StatusLine {
    ready: String,
    queue: VecDeque<String>,
    current: Option<(String, Instant)>,
}

impl StatusLine {
    pub fn new(ready: impl Into<String>) -> Self {
        Self {
            ready: ready.into(),
            queue: VecDeque::new(),
            current: None,
        }
    }

    /// Enqueues a transient message.
    pub fn toast(&mut self, message: impl Into<String>) {
        self.queue.push_back(message.into());
    }

    /// Rotates the queue: promotes the next message once the current one has
    /// been shown for `ttl`.
    pub fn tick(&mut self, ttl: Duration) {
        let expired = match &self.current {
            Some((_, shown_at)) => shown_at.elapsed() >= ttl,
            None => true,
        };
        if expired {
            self.current = self
                .queue
                .pop_front()
                .map(|message| (message, Instant::now()));
        }
    }

    /// Drops the current toast and everything queued behind it.
    pub fn dismiss(&mut self) {
        self.current = None;
        self.queue.clear();
    }

    pub fn message(&self) -> &str {
        match &self.current {
            Some((message, _)) => message,
            None => &self.ready,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_play_back_in_order() {
        let mut status = StatusLine::new("ready");
        assert_eq!(status.message(), "ready");

        status.toast("first");
        status.toast("second");

        status.tick(Duration::ZERO);
        assert_eq!(status.message(), "first");
        status.tick(Duration::ZERO);
        assert_eq!(status.message(), "second");
        status.tick(Duration::ZERO);
        assert_eq!(status.message(), "ready");
    }

    #[test]
    fn unexpired_toasts_stay_visible() {
        let mut status = StatusLine::new("ready");
        status.toast("sticky");
        status.tick(Duration::from_secs(60));
        status.tick(Duration::from_secs(60));
        assert_eq!(status.message(), "sticky");
    }

    #[test]
    fn dismiss_clears_the_whole_queue() {
        let mut status = StatusLine::new("ready");
        status.toast("one");
        status.toast("two");
        status.tick(Duration::ZERO);
        status.dismiss();
        status.tick(Duration::ZERO);
        assert_eq!(status.message(), "ready");
    }
}
