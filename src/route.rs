//! ページルート
//!
//! 外部に公開しているナビゲーション契約。パラメータやクエリ文字列は持たない。

use crate::error::{AilpError, Result};
use std::str::FromStr;

/// ページ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Agents,
    Models,
    Prompts,
    Tutorials,
    Workflow,
}

impl Page {
    /// ナビゲーション順の全ページ
    pub fn all() -> &'static [Page] {
        &[
            Page::Home,
            Page::Tutorials,
            Page::Models,
            Page::Workflow,
            Page::Agents,
            Page::Prompts,
            Page::About,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Agents => "/agents",
            Page::Models => "/models",
            Page::Prompts => "/prompts",
            Page::Tutorials => "/tutorials",
            Page::Workflow => "/workflow",
        }
    }

    /// ナビゲーションラベル
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "首页",
            Page::About => "关于我",
            Page::Agents => "智能体",
            Page::Models => "大模型",
            Page::Prompts => "提示词",
            Page::Tutorials => "教程",
            Page::Workflow => "工作流",
        }
    }

    /// パスから解決（完全一致、末尾スラッシュのみ許容）
    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" if trimmed.starts_with('/') => "/",
            other => other,
        };
        Page::all().iter().copied().find(|p| p.path() == normalized)
    }

    /// ナビゲーション順での位置
    pub fn index(&self) -> usize {
        Page::all().iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Self {
        let pages = Page::all();
        pages[index % pages.len()]
    }

    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Self {
        Self::from_index(self.index() + Page::all().len() - 1)
    }
}

impl FromStr for Page {
    type Err = AilpError;

    fn from_str(s: &str) -> Result<Self> {
        Page::from_path(s).ok_or_else(|| AilpError::UnknownRoute(s.to_string()))
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_round_trips_for_every_page() {
        for page in Page::all() {
            assert_eq!(Page::from_path(page.path()), Some(*page));
        }
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Page::from_path("/models/"), Some(Page::Models));
        assert_eq!(Page::from_path("/"), Some(Page::Home));
    }

    #[test]
    fn unknown_paths_are_rejected() {
        assert_eq!(Page::from_path("/resources"), None);
        assert_eq!(Page::from_path("models"), None);
        assert_eq!(Page::from_path("/models/1"), None);
        assert_eq!(Page::from_path(""), None);
    }

    #[test]
    fn from_str_reports_unknown_route() {
        let err = "/nope".parse::<Page>().unwrap_err();
        assert!(matches!(err, AilpError::UnknownRoute(p) if p == "/nope"));
    }

    #[test]
    fn navigation_order_matches_tab_bar() {
        let titles: Vec<&str> = Page::all().iter().map(|p| p.title()).collect();
        assert_eq!(
            titles,
            vec!["首页", "教程", "大模型", "工作流", "智能体", "提示词", "关于我"]
        );
    }

    #[test]
    fn next_and_prev_wrap_around() {
        assert_eq!(Page::About.next(), Page::Home);
        assert_eq!(Page::Home.prev(), Page::About);
        assert_eq!(Page::Home.next(), Page::Tutorials);
    }
}
