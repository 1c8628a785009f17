//! 画面状態コントローラ
//!
//! - `expand`: カードの展開/折りたたみ
//! - `favorites`: お気に入りプロンプト（永続化あり）
//! - `tutorial_nav`: フォルダ/動画ナビゲーション
//! - `copy_feedback`: コピー完了表示の一時フラグ

mod copy_feedback;
mod expand;
mod favorites;
mod tutorial_nav;

pub use copy_feedback::CopyFeedback;
pub use expand::ExpandState;
pub use favorites::{FavoritesController, FAVORITES_KEY};
pub use tutorial_nav::{TutorialNav, TutorialView, VIDEO_CATEGORIES, VIDEO_LEVELS};
