//! 表示ラベル

/// モデル種別コード → 表示名（未知のコードはそのまま）
pub fn model_type_name(code: &str) -> &str {
    match code {
        "text" => "文本生成",
        "image" => "图像生成",
        "audio" => "语音处理",
        "multimodal" => "多模态",
        other => other,
    }
}

/// プロンプト分類コード → 表示名
pub fn category_name(code: &str) -> &str {
    match code {
        "all" => "全部",
        "writing" => "写作",
        "coding" => "编程",
        "design" => "设计",
        "data" => "数据分析",
        "learning" => "学习",
        other => other,
    }
}

/// リソース分類コード → 表示名
pub fn resource_category_name(code: &str) -> &str {
    match code {
        "all" => "全部",
        "docs" => "文档",
        "tutorials" => "教程",
        "tools" => "工具",
        "community" => "社区",
        other => other,
    }
}

/// 評価を5段階の星で表す
pub fn rating_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_type_names() {
        assert_eq!(model_type_name("multimodal"), "多模态");
        assert_eq!(model_type_name("audio"), "语音处理");
        assert_eq!(model_type_name("video"), "video");
    }

    #[test]
    fn category_names() {
        assert_eq!(category_name("all"), "全部");
        assert_eq!(category_name("coding"), "编程");
        assert_eq!(category_name("unknown"), "unknown");
        assert_eq!(resource_category_name("community"), "社区");
    }

    #[test]
    fn rating_stars_pads_to_five() {
        assert_eq!(rating_stars(3), "★★★☆☆");
        assert_eq!(rating_stars(0), "☆☆☆☆☆");
        assert_eq!(rating_stars(9), "★★★★★");
    }
}
