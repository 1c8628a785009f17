//! コピー完了の一時フラグ
//!
//! 現在時刻は呼び出し側から渡す。フラグは期限を過ぎると操作に関係なく消える。

use std::time::{Duration, Instant};

/// 既定の表示時間
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFeedback<Id> {
    duration: Duration,
    copied: Option<(Id, Instant)>,
}

impl<Id: PartialEq> Default for CopyFeedback<Id> {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

impl<Id: PartialEq> CopyFeedback<Id> {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            copied: None,
        }
    }

    /// コピー成功を記録（以前のフラグは置き換える）
    pub fn mark(&mut self, id: Id, now: Instant) {
        self.copied = Some((id, now + self.duration));
    }

    /// 期限内ならコピー済みのID
    pub fn copied_id(&self, now: Instant) -> Option<&Id> {
        match &self.copied {
            Some((id, deadline)) if now < *deadline => Some(id),
            _ => None,
        }
    }

    pub fn is_copied(&self, id: &Id, now: Instant) -> bool {
        self.copied_id(now) == Some(id)
    }

    /// 期限切れのフラグを消す。状態が変わったら true
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = matches!(&self.copied, Some((_, deadline)) if now >= *deadline);
        if expired {
            self.copied = None;
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_is_set_immediately_after_success() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::default();
        feedback.mark("coding-1", start);
        assert!(feedback.is_copied(&"coding-1", start));
        assert!(feedback.is_copied(&"coding-1", start + Duration::from_millis(1999)));
    }

    #[test]
    fn flag_clears_after_two_seconds() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::default();
        feedback.mark("coding-1", start);
        let later = start + Duration::from_millis(2000);
        assert!(!feedback.is_copied(&"coding-1", later));
        assert!(feedback.tick(later));
        assert_eq!(feedback.copied_id(start), None);
    }

    #[test]
    fn tick_before_deadline_keeps_flag() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::default();
        feedback.mark(1u32, start);
        assert!(!feedback.tick(start + Duration::from_millis(500)));
        assert_eq!(feedback.copied_id(start), Some(&1));
    }

    #[test]
    fn newer_copy_replaces_older_flag() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::default();
        feedback.mark("a", start);
        let second = start + Duration::from_millis(1500);
        feedback.mark("b", second);
        assert!(!feedback.is_copied(&"a", second));
        assert!(feedback.is_copied(&"b", start + Duration::from_millis(3000)));
        assert!(!feedback.is_copied(&"b", start + Duration::from_millis(3500)));
    }

    #[test]
    fn custom_duration() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::new(Duration::from_millis(100));
        feedback.mark("x", start);
        assert!(!feedback.is_copied(&"x", start + Duration::from_millis(100)));
    }
}
