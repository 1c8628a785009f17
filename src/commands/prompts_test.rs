use super::*;
use crate::clipboard::mock::{FailingClipboard, RecordingClipboard};
use crate::config::Config;
use crate::error::ErrorCode;
use crate::state::FAVORITES_KEY;
use crate::storage::KeyValueStore;
use tempfile::TempDir;

fn context(dir: &TempDir) -> AppContext {
    AppContext {
        catalog: Catalog::bundled().unwrap(),
        config: Config::default(),
        data_dir: dir.path().to_path_buf(),
    }
}

#[test]
fn collect_rows_marks_favorites() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);
    ctx.store().set(FAVORITES_KEY, r#"["coding-3"]"#).unwrap();
    let favorites = FavoritesController::load(ctx.store());

    let rows = collect_rows(&ctx.catalog, &Selector::parse("coding"), &favorites, false);
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|r| r.category == "coding"));
    let favorite_ids: Vec<&str> = rows
        .iter()
        .filter(|r| r.favorite)
        .map(|r| r.prompt.id.as_str())
        .collect();
    assert_eq!(favorite_ids, vec!["coding-3"]);
}

#[test]
fn collect_rows_only_favorites() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);
    ctx.store()
        .set(FAVORITES_KEY, r#"["design-1","writing-5"]"#)
        .unwrap();
    let favorites = FavoritesController::load(ctx.store());

    let rows = collect_rows(&ctx.catalog, &Selector::All, &favorites, true);
    let ids: Vec<&str> = rows.iter().map(|r| r.prompt.id.as_str()).collect();
    assert_eq!(ids, vec!["writing-5", "design-1"]);
}

#[test]
fn favorite_toggles_persisted_state() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);
    favorite(&ctx, "writing-2").unwrap();
    assert!(FavoritesController::load(ctx.store()).contains("writing-2"));
    favorite(&ctx, "writing-2").unwrap();
    assert!(!FavoritesController::load(ctx.store()).contains("writing-2"));
}

#[test]
fn favorite_unknown_prompt_is_not_found() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);
    let err = favorite(&ctx, "writing-42").unwrap_err();
    assert_eq!(err.code(), ErrorCode::Cat001);
    assert!(FavoritesController::load(ctx.store()).is_empty());
}

#[tokio::test]
async fn copy_writes_template_to_clipboard() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);
    let clipboard = RecordingClipboard::default();
    copy(&ctx, &clipboard, "coding-2").await.unwrap();
    let template = ctx.catalog.find_prompt("coding-2").unwrap().template.clone();
    assert_eq!(clipboard.contents(), vec![template]);
}

#[tokio::test]
async fn copy_failure_is_logged_not_raised() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);
    assert!(copy(&ctx, &FailingClipboard, "coding-2").await.is_ok());
}

#[tokio::test]
async fn copy_unknown_prompt_is_not_found() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);
    let clipboard = RecordingClipboard::default();
    let err = copy(&ctx, &clipboard, "coding-42").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::Cat001);
    assert!(clipboard.contents().is_empty());
}
