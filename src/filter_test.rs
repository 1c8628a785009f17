use super::*;
use crate::catalog::{Catalog, ModelKind};

fn catalog() -> Catalog {
    Catalog::bundled().unwrap()
}

fn make_video(id: EntryId, folder_id: EntryId, category: &str, level: &str, title: &str) -> Video {
    Video {
        id,
        folder_id,
        title: title.to_string(),
        description: String::new(),
        duration: "10:00".to_string(),
        thumbnail: String::new(),
        category: category.to_string(),
        level: level.to_string(),
        views: "100".to_string(),
    }
}

// ========================================
// Selector
// ========================================

#[test]
fn selector_all_aliases() {
    assert_eq!(Selector::parse("all"), Selector::All);
    assert_eq!(Selector::parse("全部"), Selector::All);
    assert_eq!(Selector::parse("基础"), Selector::Only("基础".to_string()));
}

#[test]
fn selector_blank_or_padded_is_not_all() {
    assert_eq!(Selector::parse(""), Selector::Only(String::new()));
    assert_eq!(Selector::parse(" all "), Selector::Only(" all ".to_string()));

    let catalog = catalog();
    let cats = &catalog.prompt_categories;
    assert!(filter_prompts(cats, &Selector::parse("")).is_empty());
    assert!(filter_prompts(cats, &Selector::parse(" coding ")).is_empty());
    assert_eq!(filter_prompts(cats, &Selector::parse("coding")).len(), 5);
}

#[test]
fn selector_matches_exactly() {
    let sel = Selector::parse("text");
    assert!(sel.matches("text"));
    assert!(!sel.matches("Text"));
    assert!(!sel.matches("texts"));
}

// ========================================
// models
// ========================================

#[test]
fn filter_models_all_is_identity() {
    let catalog = catalog();
    let result = filter_models(&catalog.models, &Selector::All);
    assert_eq!(result.len(), catalog.models.len());
}

#[test]
fn filter_models_by_type() {
    let catalog = catalog();
    let result = filter_models(&catalog.models, &Selector::parse("audio"));
    assert!(!result.is_empty());
    assert!(result.iter().all(|m| m.kind == ModelKind::Audio));
    let expected = catalog
        .models
        .iter()
        .filter(|m| m.kind == ModelKind::Audio)
        .count();
    assert_eq!(result.len(), expected);
}

#[test]
fn filter_models_unknown_type_is_empty() {
    let catalog = catalog();
    assert!(filter_models(&catalog.models, &Selector::parse("video")).is_empty());
}

// ========================================
// prompts
// ========================================

#[test]
fn filter_prompts_all_flattens_in_order() {
    let catalog = catalog();
    let result = filter_prompts(&catalog.prompt_categories, &Selector::All);
    let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
    let expected: Vec<&str> = catalog.all_prompts().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, expected);
    assert_eq!(ids[0], "writing-1");
}

#[test]
fn filter_prompts_by_category() {
    let catalog = catalog();
    let result = filter_prompts(&catalog.prompt_categories, &Selector::parse("coding"));
    assert_eq!(result.len(), 5);
    assert!(result.iter().all(|p| p.id.starts_with("coding-")));
}

#[test]
fn filter_prompts_unknown_category_is_empty() {
    let catalog = catalog();
    assert!(filter_prompts(&catalog.prompt_categories, &Selector::parse("data")).is_empty());
}

// ========================================
// resources
// ========================================

#[test]
fn filter_resources_by_category() {
    let catalog = catalog();
    let result = filter_resources(&catalog.resources, &Selector::parse("tools"));
    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|r| r.category == "tools"));
    assert_eq!(
        filter_resources(&catalog.resources, &Selector::All).len(),
        catalog.resources.len()
    );
}

// ========================================
// text search
// ========================================

#[test]
fn matches_text_empty_query_matches() {
    assert!(matches_text("", "anything", ""));
}

#[test]
fn matches_text_checks_title_and_description() {
    assert!(matches_text("rag", "RAG 实战", ""));
    assert!(matches_text("embedding", "向量数据库", "Embedding 基础"));
    assert!(!matches_text("agent", "向量数据库", "Embedding 基础"));
}

#[test]
fn search_is_case_insensitive_on_bundled_videos() {
    let catalog = catalog();
    let upper = VideoQuery {
        search: "GPT".to_string(),
        ..VideoQuery::default()
    };
    let lower = VideoQuery {
        search: "gpt".to_string(),
        ..VideoQuery::default()
    };
    let upper_ids: Vec<EntryId> = filter_videos(&catalog.videos, &upper).iter().map(|v| v.id).collect();
    let lower_ids: Vec<EntryId> = filter_videos(&catalog.videos, &lower).iter().map(|v| v.id).collect();
    assert_eq!(upper_ids, lower_ids);
    assert_eq!(upper_ids, vec![1, 5]);
}

// ========================================
// videos
// ========================================

#[test]
fn filter_videos_narrows_in_sequence() {
    let videos = vec![
        make_video(1, 1, "基础", "初级", "a"),
        make_video(2, 2, "基础", "初级", "b"),
        make_video(3, 2, "进阶", "高级", "c"),
        make_video(4, 2, "高级", "高级", "d"),
    ];
    let query = VideoQuery {
        folder: Some(2),
        category: Selector::All,
        level: Selector::parse("高级"),
        search: String::new(),
    };
    let ids: Vec<EntryId> = filter_videos(&videos, &query).iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![3, 4]);

    let query = VideoQuery {
        category: Selector::parse("进阶"),
        ..query
    };
    let ids: Vec<EntryId> = filter_videos(&videos, &query).iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![3]);
}

#[test]
fn filter_videos_dangling_folder_matches_nothing() {
    let catalog = catalog();
    assert!(filter_videos(&catalog.videos, &VideoQuery::in_folder(999)).is_empty());
}

#[test]
fn folder_two_advanced_level_on_bundled_data() {
    let catalog = catalog();
    let query = VideoQuery {
        level: Selector::parse("高级"),
        ..VideoQuery::in_folder(2)
    };
    let result = filter_videos(&catalog.videos, &query);
    let ids: Vec<EntryId> = result.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![7, 8]);
    assert!(result.iter().all(|v| v.folder_id == 2 && v.level == "高级"));
}
