//! Constants used throughout the Blueprint application

/// Default project name offered by the interactive prompt
pub const DEFAULT_PROJECT_NAME: &str = "myproject";

/// Default project description
pub const DEFAULT_DESCRIPTION: &str = "A Python project using DDD + Hexagonal Architecture";

/// Default author name
pub const DEFAULT_AUTHOR: &str = "Author";

/// Default database backend
pub const DEFAULT_DB: &str = "none";

/// Default Python version
pub const DEFAULT_PYTHON_VERSION: &str = "3.14";

/// Database backends a project can be generated with
pub const DB_CHOICES: &[&str] = &["postgres", "none"];

/// Python versions the generated code supports (PEP 695 generics need 3.12+)
pub const SUPPORTED_PYTHON_VERSIONS: &[&str] = &["3.12", "3.13", "3.14"];

/// Name argument that scaffolds into the output directory itself
pub const IN_PLACE_INDICATOR: &str = ".";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Python keywords, which cannot be used as a package name
pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise",
    "return", "try", "while", "with", "yield",
];

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
