use super::*;
use crate::catalog::{Model, ModelKind};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = ModelKind> {
    prop_oneof![
        Just(ModelKind::Text),
        Just(ModelKind::Image),
        Just(ModelKind::Audio),
        Just(ModelKind::Multimodal),
    ]
}

fn models_strategy() -> impl Strategy<Value = Vec<Model>> {
    prop::collection::vec(kind_strategy(), 0..12).prop_map(|kinds| {
        kinds
            .into_iter()
            .enumerate()
            .map(|(i, kind)| Model {
                id: i as u32 + 1,
                name: format!("model-{i}"),
                kind,
                company: "c".to_string(),
                description: String::new(),
                icon: "Sparkles".to_string(),
                features: vec![],
            })
            .collect()
    })
}

proptest! {
    /// `all` / `全部` は恒等フィルタ
    #[test]
    fn prop_all_selector_is_identity(models in models_strategy(), alias in prop_oneof![Just("all"), Just("全部")]) {
        let result = filter_models(&models, &Selector::parse(alias));
        prop_assert_eq!(result.len(), models.len());
        for (a, b) in result.iter().zip(models.iter()) {
            prop_assert_eq!(*a, b);
        }
    }

    /// 結果は全て条件を満たし、満たす要素は全て残る
    #[test]
    fn prop_selector_keeps_exactly_matching(models in models_strategy(), kind in kind_strategy()) {
        let result = filter_models(&models, &Selector::parse(kind.as_str()));
        prop_assert!(result.iter().all(|m| m.kind == kind));
        let expected = models.iter().filter(|m| m.kind == kind).count();
        prop_assert_eq!(result.len(), expected);
    }

    /// 大文字小文字を区別しない
    #[test]
    fn prop_search_is_case_insensitive(
        query in "[a-zA-Z]{0,6}",
        title in "[a-zA-Z ]{0,20}",
        description in "[a-zA-Z ]{0,20}",
    ) {
        prop_assert_eq!(
            matches_text(&query.to_uppercase(), &title, &description),
            matches_text(&query.to_lowercase(), &title, &description)
        );
    }

    /// 空クエリは常に一致
    #[test]
    fn prop_empty_query_matches_everything(title in ".{0,20}", description in ".{0,20}") {
        prop_assert!(matches_text("", &title, &description));
    }
}
