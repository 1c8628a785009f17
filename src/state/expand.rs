//! 展開/折りたたみ
//!
//! 兄弟カードのうち展開できるのは常に1つだけ。

/// 展開中のカード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandState<Id> {
    expanded: Option<Id>,
}

impl<Id> Default for ExpandState<Id> {
    fn default() -> Self {
        Self { expanded: None }
    }
}

impl<Id: PartialEq> ExpandState<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同じIDなら折りたたみ、別のIDならそれだけを展開
    pub fn toggle(&mut self, id: Id) {
        if self.expanded.as_ref() == Some(&id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id);
        }
    }

    pub fn is_expanded(&self, id: &Id) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    pub fn expanded(&self) -> Option<&Id> {
        self.expanded.as_ref()
    }
}
