/// Error codes with category prefix
///
/// Categories:
/// - IO: File system operations
/// - CFG: Configuration parsing/validation
/// - STO: Key-value storage
/// - CLP: Clipboard access
/// - CAT: Catalog lookups and bundled data
/// - TUI: Terminal UI errors
/// - VAL: Route validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // I/O errors (IO001-IO099)
    /// File not found
    Io001,
    /// Permission denied
    Io002,

    // Config errors (CFG001-CFG099)
    /// Invalid config format
    Cfg001,

    // Storage errors (STO001-STO099)
    /// Storage read/write failed
    Sto001,

    // Clipboard errors (CLP001-CLP099)
    /// No clipboard tool available
    Clp001,
    /// Clipboard write failed
    Clp002,

    // Catalog errors (CAT001-CAT099)
    /// Entry not found
    Cat001,
    /// Bundled data is invalid
    Cat002,

    // TUI errors (TUI001-TUI099)
    /// Terminal initialization failed
    Tui001,

    // Validation errors (VAL001-VAL099)
    /// Unknown page route
    Val001,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "CAT001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "IO001",
            ErrorCode::Io002 => "IO002",
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Sto001 => "STO001",
            ErrorCode::Clp001 => "CLP001",
            ErrorCode::Clp002 => "CLP002",
            ErrorCode::Cat001 => "CAT001",
            ErrorCode::Cat002 => "CAT002",
            ErrorCode::Tui001 => "TUI001",
            ErrorCode::Val001 => "VAL001",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "The specified file or directory was not found",
            ErrorCode::Io002 => "Permission denied when accessing the file or directory",
            ErrorCode::Cfg001 => "The configuration file has an invalid format",
            ErrorCode::Sto001 => "The local storage file could not be read or written",
            ErrorCode::Clp001 => "No clipboard tool was found on this system",
            ErrorCode::Clp002 => "Writing to the system clipboard failed",
            ErrorCode::Cat001 => "The requested catalog entry does not exist",
            ErrorCode::Cat002 => "The bundled catalog data could not be parsed",
            ErrorCode::Tui001 => "Failed to initialize the terminal interface",
            ErrorCode::Val001 => "The page route is not one of the known routes",
        }
    }

    /// Returns remediation steps
    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "1. Verify the file path is correct\n2. Check if the file was moved or deleted",
            ErrorCode::Io002 => "1. Check file/directory permissions\n2. Set AILP_HOME to a writable directory",
            ErrorCode::Cfg001 => "1. Check the syntax of config.toml\n2. Remove the file to fall back to defaults",
            ErrorCode::Sto001 => "1. Check that AILP_HOME is writable\n2. Delete storage.json to reset local state",
            ErrorCode::Clp001 => "1. Install pbcopy, wl-copy, xclip or xsel\n2. Use 'ailp prompts show <id>' and copy manually",
            ErrorCode::Clp002 => "1. Check that a graphical session is available\n2. Retry the copy",
            ErrorCode::Cat001 => "1. Check the id for typos\n2. Use the matching list command to see available ids",
            ErrorCode::Cat002 => "1. Reinstall ailp\n2. Report the issue with debug logs",
            ErrorCode::Tui001 => "1. Ensure your terminal supports the required features\n2. Try a different terminal emulator",
            ErrorCode::Val001 => "1. Use 'ailp routes' to list the available pages",
        }
    }

    /// 全エラーコード
    pub fn all() -> &'static [ErrorCode] {
        &[
            ErrorCode::Io001,
            ErrorCode::Io002,
            ErrorCode::Cfg001,
            ErrorCode::Sto001,
            ErrorCode::Clp001,
            ErrorCode::Clp002,
            ErrorCode::Cat001,
            ErrorCode::Cat002,
            ErrorCode::Tui001,
            ErrorCode::Val001,
        ]
    }
}
