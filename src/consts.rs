/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Storage keys, kept compatible with the page's localStorage layout
pub(crate) const THEME_KEY: &str = "theme";
pub(crate) const USAGE_KEY: &str = "toolUsage";
pub(crate) const URL_HISTORY_KEY: &str = "urlHistory";

/// Maximum number of shortened URLs kept in history
pub(crate) const URL_HISTORY_LIMIT: usize = 50;

/// Number of entries shown by `usage`
pub(crate) const MOST_USED_LIMIT: usize = 5;

pub(crate) const DEFAULT_SHORT_BASE_URL: &str = "https://short.ly/";
pub(crate) const DEFAULT_MAX_WIDTH: u32 = 800;
pub(crate) const DEFAULT_QR_SIZE: u32 = 300;
pub(crate) const DEFAULT_PASSWORD_LENGTH: usize = 16;
