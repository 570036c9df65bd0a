use chrono::{DateTime, Duration, Utc};

/// How long a notice stays visible before it dismisses itself.
pub const DISMISS_AFTER_SECS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub content: String,
}

impl Notice {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            content: content.into(),
        }
    }
}

/// Holds posted notices until they expire.
///
/// Each notice carries its own dismissal deadline, stamped at post time.
/// Expiry is a sweep over deadlines rather than one scheduled callback per
/// notice, so rapid successive posts cannot accumulate timers: dropping a
/// notice drops its deadline with it.
#[derive(Debug)]
pub struct NoticeBoard {
    entries: Vec<(Notice, DateTime<Utc>)>,
    ttl: Duration,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            ttl: Duration::seconds(DISMISS_AFTER_SECS),
        }
    }

    pub fn post(&mut self, notice: Notice) {
        self.post_at(Utc::now(), notice);
    }

    pub fn post_at(&mut self, now: DateTime<Utc>, notice: Notice) {
        self.entries.push((notice, now + self.ttl));
    }

    /// Drop every notice whose deadline has passed.
    pub fn sweep(&mut self, now: DateTime<Utc>) {
        self.entries.retain(|(_, deadline)| *deadline > now);
    }

    pub fn active(&self) -> impl Iterator<Item = &Notice> {
        self.entries.iter().map(|(notice, _)| notice)
    }

    /// Take every pending notice off the board.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.entries)
            .into_iter()
            .map(|(notice, _)| notice)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn notices_expire_after_their_deadline() {
        let mut board = NoticeBoard::new();
        board.post_at(t0(), Notice::success("saved"));

        board.sweep(t0() + Duration::seconds(DISMISS_AFTER_SECS - 1));
        assert_eq!(board.active().count(), 1);

        board.sweep(t0() + Duration::seconds(DISMISS_AFTER_SECS));
        assert!(board.is_empty());
    }

    #[test]
    fn rapid_posts_keep_independent_deadlines() {
        let mut board = NoticeBoard::new();
        board.post_at(t0(), Notice::error("first"));
        board.post_at(t0() + Duration::seconds(2), Notice::error("second"));

        board.sweep(t0() + Duration::seconds(4));
        let remaining: Vec<_> = board.active().collect();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].content, "second");
    }

    #[test]
    fn sweep_is_idempotent() {
        let mut board = NoticeBoard::new();
        board.post_at(t0(), Notice::info("hello"));
        let later = t0() + Duration::seconds(10);
        board.sweep(later);
        board.sweep(later);
        assert!(board.is_empty());
    }

    #[test]
    fn drain_empties_the_board() {
        let mut board = NoticeBoard::new();
        board.post(Notice::success("one"));
        board.post(Notice::warning("two"));

        let drained = board.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].content, "one");
        assert!(board.is_empty());
    }
}
