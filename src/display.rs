//! 表示用ヘルパー
//!
//! 短いコード（アイコンキー、色キー、分類コード、モデル種別、難易度）を
//! 表示値へ変換する。

mod color;
mod icon;
mod labels;

pub use color::{level_color, video_category_color, ColorKey};
pub use icon::IconKind;
pub use labels::{category_name, model_type_name, rating_stars, resource_category_name};
