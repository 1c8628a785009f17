//! アイコンキー

/// 既知のアイコン
///
/// 未知のキーは `Unknown` に落とす。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconKind {
    MessageSquare,
    FileText,
    BookOpen,
    Terminal,
    Globe,
    Image,
    Sparkles,
    Palette,
    Mic,
    Volume2,
    Video,
    Search,
    Code,
    Code2,
    CheckCircle2,
    Star,
    Copy,
    Check,
    Download,
    Play,
    ExternalLink,
    ArrowRight,
    GraduationCap,
    PieChart,
    BarChart,
    BarChart3,
    TrendingUp,
    PenTool,
    Brush,
    Headphones,
    Zap,
    RefreshCw,
    Lightbulb,
    Folder,
    Book,
    Rocket,
    #[default]
    Unknown,
}

impl IconKind {
    /// キーから解決
    ///
    /// フォルダ用の小文字キー（`folder`, `book`, `sparkles`, `rocket`）も受け付ける。
    pub fn from_key(key: &str) -> Self {
        match key {
            "MessageSquare" => IconKind::MessageSquare,
            "FileText" => IconKind::FileText,
            "BookOpen" => IconKind::BookOpen,
            "Terminal" => IconKind::Terminal,
            "Globe" => IconKind::Globe,
            "Image" => IconKind::Image,
            "Sparkles" | "sparkles" => IconKind::Sparkles,
            "Palette" => IconKind::Palette,
            "Mic" => IconKind::Mic,
            "Volume2" => IconKind::Volume2,
            "Video" => IconKind::Video,
            "Search" => IconKind::Search,
            "Code" => IconKind::Code,
            "Code2" => IconKind::Code2,
            "CheckCircle2" => IconKind::CheckCircle2,
            "Star" => IconKind::Star,
            "Copy" => IconKind::Copy,
            "Check" => IconKind::Check,
            "Download" => IconKind::Download,
            "Play" => IconKind::Play,
            "ExternalLink" => IconKind::ExternalLink,
            "ArrowRight" => IconKind::ArrowRight,
            "GraduationCap" => IconKind::GraduationCap,
            "PieChart" => IconKind::PieChart,
            "BarChart" => IconKind::BarChart,
            "BarChart3" => IconKind::BarChart3,
            "TrendingUp" => IconKind::TrendingUp,
            "PenTool" => IconKind::PenTool,
            "Brush" => IconKind::Brush,
            "Headphones" => IconKind::Headphones,
            "Zap" => IconKind::Zap,
            "RefreshCw" => IconKind::RefreshCw,
            "Lightbulb" => IconKind::Lightbulb,
            "folder" => IconKind::Folder,
            "book" => IconKind::Book,
            "rocket" => IconKind::Rocket,
            _ => IconKind::Unknown,
        }
    }

    /// 端末用の短いグリフ
    pub fn glyph(&self) -> &'static str {
        match self {
            IconKind::MessageSquare => "💬",
            IconKind::FileText => "📄",
            IconKind::BookOpen | IconKind::Book => "📖",
            IconKind::Terminal => "⌨",
            IconKind::Globe => "🌐",
            IconKind::Image => "🖼",
            IconKind::Sparkles => "✨",
            IconKind::Palette | IconKind::Brush => "🎨",
            IconKind::Mic => "🎤",
            IconKind::Volume2 | IconKind::Headphones => "🎧",
            IconKind::Video | IconKind::Play => "▶",
            IconKind::Search => "🔍",
            IconKind::Code | IconKind::Code2 => "</>",
            IconKind::CheckCircle2 | IconKind::Check => "✓",
            IconKind::Star => "★",
            IconKind::Copy => "⧉",
            IconKind::Download => "⬇",
            IconKind::ExternalLink | IconKind::ArrowRight => "→",
            IconKind::GraduationCap => "🎓",
            IconKind::PieChart | IconKind::BarChart | IconKind::BarChart3 => "📊",
            IconKind::TrendingUp => "📈",
            IconKind::PenTool => "✎",
            IconKind::Zap => "⚡",
            IconKind::RefreshCw => "↻",
            IconKind::Lightbulb => "💡",
            IconKind::Folder => "📁",
            IconKind::Rocket => "🚀",
            IconKind::Unknown => "•",
        }
    }
}
