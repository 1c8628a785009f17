//! チュートリアルのフォルダ/動画ナビゲーション
//!
//! 状態は {FolderList, FolderDetail(folderId)}。
//! FolderDetail から戻るときは分類・難易度・検索をすべて初期値に戻す。

use crate::catalog::{Catalog, EntryId, Folder, Video};
use crate::error::Result;
use crate::filter::{filter_videos, Selector, VideoQuery};

/// 動画分類の選択肢
pub const VIDEO_CATEGORIES: &[&str] = &["全部", "基础", "进阶", "实战", "高级"];

/// 難易度の選択肢
pub const VIDEO_LEVELS: &[&str] = &["全部", "初级", "中级", "高级"];

/// 表示中のビュー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TutorialView {
    #[default]
    FolderList,
    FolderDetail(EntryId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialNav {
    view: TutorialView,
    category: Selector,
    level: Selector,
    search: String,
    latest_count: usize,
}

impl Default for TutorialNav {
    fn default() -> Self {
        Self::new(6)
    }
}

impl TutorialNav {
    /// `latest_count` はフォルダ一覧で見せる最新動画の件数
    pub fn new(latest_count: usize) -> Self {
        Self {
            view: TutorialView::FolderList,
            category: Selector::All,
            level: Selector::All,
            search: String::new(),
            latest_count,
        }
    }

    pub fn view(&self) -> TutorialView {
        self.view
    }

    pub fn category(&self) -> &Selector {
        &self.category
    }

    pub fn level(&self) -> &Selector {
        &self.level
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// フォルダを開く
    ///
    /// 存在しないIDは NotFound を返し、状態は変えない。
    pub fn open_folder(&mut self, catalog: &Catalog, id: EntryId) -> Result<()> {
        catalog.require_folder(id)?;
        self.view = TutorialView::FolderDetail(id);
        tracing::debug!(folder = id, "opened tutorial folder");
        Ok(())
    }

    /// フォルダ一覧へ戻り、絞り込み条件を初期化
    pub fn back(&mut self) {
        self.view = TutorialView::FolderList;
        self.category = Selector::All;
        self.level = Selector::All;
        self.search.clear();
    }

    pub fn set_category(&mut self, category: Selector) {
        self.category = category;
    }

    pub fn set_level(&mut self, level: Selector) {
        self.level = level;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn push_search(&mut self, c: char) {
        self.search.push(c);
    }

    pub fn pop_search(&mut self) {
        self.search.pop();
    }

    /// 開いているフォルダ
    pub fn current_folder<'a>(&self, catalog: &'a Catalog) -> Option<&'a Folder> {
        match self.view {
            TutorialView::FolderList => None,
            TutorialView::FolderDetail(id) => catalog.find_folder(id),
        }
    }

    /// 現在の条件での動画クエリ（FolderList では None）
    pub fn query(&self) -> Option<VideoQuery> {
        match self.view {
            TutorialView::FolderList => None,
            TutorialView::FolderDetail(id) => Some(VideoQuery {
                category: self.category.clone(),
                level: self.level.clone(),
                search: self.search.clone(),
                ..VideoQuery::in_folder(id)
            }),
        }
    }

    /// 表示する動画
    ///
    /// - FolderList: 全動画の先頭 `latest_count` 件
    /// - FolderDetail: フォルダ → 分類 → 難易度 → 検索 の順に絞り込んだ結果
    pub fn visible_videos<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Video> {
        match self.query() {
            None => catalog.videos.iter().take(self.latest_count).collect(),
            Some(query) => filter_videos(&catalog.videos, &query),
        }
    }

    /// 見出しに出す件数ラベル
    pub fn header_label(&self, catalog: &Catalog) -> String {
        match self.current_folder(catalog) {
            None => format!(
                "{}个视频 · {}个文件夹",
                catalog.videos.len(),
                catalog.folders.len()
            ),
            Some(folder) => format!(
                "{} - {}个视频",
                folder.name,
                self.visible_videos(catalog).len()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AilpError;

    fn catalog() -> Catalog {
        Catalog::bundled().unwrap()
    }

    #[test]
    fn folder_list_shows_first_six_videos() {
        let catalog = catalog();
        let nav = TutorialNav::default();
        let ids: Vec<EntryId> = nav.visible_videos(&catalog).iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn folder_list_label_reports_totals() {
        let catalog = catalog();
        let nav = TutorialNav::default();
        let label = nav.header_label(&catalog);
        assert_eq!(
            label,
            format!("{}个视频 · {}个文件夹", catalog.videos.len(), catalog.folders.len())
        );
    }

    #[test]
    fn folder_two_with_advanced_level() {
        let catalog = catalog();
        let mut nav = TutorialNav::default();
        nav.open_folder(&catalog, 2).unwrap();
        nav.set_level(Selector::parse("高级"));

        let shown = nav.visible_videos(&catalog);
        let expected: Vec<EntryId> = catalog
            .videos
            .iter()
            .filter(|v| v.folder_id == 2 && v.level == "高级")
            .map(|v| v.id)
            .collect();
        let ids: Vec<EntryId> = shown.iter().map(|v| v.id).collect();
        assert_eq!(ids, expected);
        assert!(!ids.is_empty());
    }

    #[test]
    fn empty_result_in_folder() {
        let catalog = catalog();
        let mut nav = TutorialNav::default();
        nav.open_folder(&catalog, 1).unwrap();
        nav.set_level(Selector::parse("高级"));
        assert!(nav.visible_videos(&catalog).is_empty());
        assert!(nav.header_label(&catalog).ends_with("0个视频"));
    }

    #[test]
    fn back_resets_filters() {
        let catalog = catalog();
        let mut nav = TutorialNav::default();
        nav.open_folder(&catalog, 3).unwrap();
        nav.set_category(Selector::parse("实战"));
        nav.set_level(Selector::parse("中级"));
        nav.set_search("函数");

        nav.back();
        assert_eq!(nav.view(), TutorialView::FolderList);
        assert!(nav.category().is_all());
        assert!(nav.level().is_all());
        assert_eq!(nav.search(), "");
    }

    #[test]
    fn opening_unknown_folder_is_not_found() {
        let catalog = catalog();
        let mut nav = TutorialNav::default();
        nav.open_folder(&catalog, 4).unwrap();

        let err = nav.open_folder(&catalog, 99).unwrap_err();
        assert!(matches!(err, AilpError::NotFound { kind: "folder", .. }));
        assert_eq!(nav.view(), TutorialView::FolderDetail(4));
    }

    #[test]
    fn search_narrows_after_level() {
        let catalog = catalog();
        let mut nav = TutorialNav::default();
        nav.open_folder(&catalog, 1).unwrap();
        nav.set_search("gpt");
        let ids: Vec<EntryId> = nav.visible_videos(&catalog).iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 5]);

        nav.set_level(Selector::parse("初级"));
        let ids: Vec<EntryId> = nav.visible_videos(&catalog).iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1]);
    }
}
