// Blueprint - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Blueprint Directory";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "Blueprint";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Catalog limits
// =============================================================================

/// Maximum size of a catalog JSON file in bytes.
pub const MAX_CATALOG_FILE_SIZE: u64 = 1024 * 1024; // 1 MB

/// Maximum number of company records accepted from a catalog file.
/// The directory renders every record each frame, so the list is kept small.
pub const MAX_CATALOG_RECORDS: usize = 500;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Placeholder shown in the empty search box.
pub const SEARCH_PLACEHOLDER: &str = "Search companies...";

/// Edge length of the generated window icon in pixels.
pub const ICON_SIZE: u32 = 64;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted values for `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
