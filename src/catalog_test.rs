use super::*;
use std::collections::HashSet;

fn bundled() -> Catalog {
    Catalog::bundled().expect("bundled data should parse")
}

fn videos_in_folder(catalog: &Catalog, folder_id: EntryId) -> usize {
    catalog
        .videos
        .iter()
        .filter(|v| v.folder_id == folder_id)
        .count()
}

fn assert_unique<T: std::hash::Hash + Eq + std::fmt::Debug>(ids: impl Iterator<Item = T>) {
    let mut seen = HashSet::new();
    for id in ids {
        assert!(seen.insert(id), "duplicate id");
    }
}

#[test]
fn bundled_collections_are_not_empty() {
    let catalog = bundled();
    assert!(!catalog.models.is_empty());
    assert!(!catalog.workflows.is_empty());
    assert!(!catalog.agents.is_empty());
    assert!(catalog.prompt_count() > 0);
    assert!(!catalog.folders.is_empty());
    assert!(!catalog.videos.is_empty());
    assert!(!catalog.resources.is_empty());
}

#[test]
fn ids_are_unique_per_collection() {
    let catalog = bundled();
    assert_unique(catalog.models.iter().map(|m| m.id));
    assert_unique(catalog.workflows.iter().map(|w| w.id));
    assert_unique(catalog.agents.iter().map(|a| a.id));
    assert_unique(catalog.all_prompts().map(|p| p.id.clone()));
    assert_unique(catalog.folders.iter().map(|f| f.id));
    assert_unique(catalog.videos.iter().map(|v| v.id));
    assert_unique(catalog.resources.iter().map(|r| r.id));
}

#[test]
fn every_bundled_video_references_a_folder() {
    let catalog = bundled();
    for video in &catalog.videos {
        assert!(
            catalog.find_folder(video.folder_id).is_some(),
            "video {} references missing folder {}",
            video.id,
            video.folder_id
        );
    }
}

#[test]
fn folder_counts_match_bundled_videos() {
    let catalog = bundled();
    for folder in &catalog.folders {
        assert_eq!(folder.count as usize, videos_in_folder(&catalog, folder.id));
    }
}

#[test]
fn workflow_steps_are_numbered_in_order() {
    let catalog = bundled();
    for workflow in &catalog.workflows {
        let numbers: Vec<u32> = workflow.steps.iter().map(|s| s.step).collect();
        let expected: Vec<u32> = (1..=workflow.steps.len() as u32).collect();
        assert_eq!(numbers, expected, "workflow {}", workflow.id);
    }
}

#[test]
fn resource_ratings_are_in_range() {
    let catalog = bundled();
    assert!(catalog.resources.iter().all(|r| (1..=5).contains(&r.rating)));
}

#[test]
fn find_prompt_searches_all_categories() {
    let catalog = bundled();
    assert_eq!(catalog.find_prompt("coding-2").unwrap().title, "单元测试生成");
    assert!(catalog.find_prompt("coding-99").is_none());
}

#[test]
fn require_folder_reports_not_found() {
    let catalog = bundled();
    assert!(catalog.require_folder(2).is_ok());
    let err = catalog.require_folder(404).unwrap_err();
    assert!(matches!(err, AilpError::NotFound { kind: "folder", .. }));
}

#[test]
fn model_type_is_deserialized_from_type_field() {
    let json = r#"{"id":1,"name":"m","type":"audio","company":"c","description":"d","icon":"Mic","features":[]}"#;
    let model: Model = serde_json::from_str(json).unwrap();
    assert_eq!(model.kind, ModelKind::Audio);
}

#[test]
fn unknown_model_type_is_rejected() {
    let json = r#"{"id":1,"name":"m","type":"video","company":"c","description":"d","icon":"Mic","features":[]}"#;
    assert!(serde_json::from_str::<Model>(json).is_err());
}

#[test]
fn dangling_folder_reference_yields_zero_videos() {
    let mut catalog = bundled();
    catalog.videos[0].folder_id = 999;
    assert_eq!(videos_in_folder(&catalog, 999), 1);
    assert!(catalog.find_folder(999).is_none());
}

#[test]
fn prompt_category_of_finds_owner() {
    let catalog = bundled();
    assert_eq!(catalog.prompt_category_of("design-3"), Some("design"));
    assert_eq!(catalog.prompt_category_of("design-9"), None);
}
