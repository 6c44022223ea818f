//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `shelf_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "shelf.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "shelf";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SHELF";

/// Separator between prefix and nested keys (e.g. `SHELF__AUTH__USERNAME`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default HTTP server port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default server host
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

// ============================================================================
// AUTHENTICATION CONSTANTS
// ============================================================================

/// Realm advertised in `WWW-Authenticate` challenges
pub const DEFAULT_AUTH_REALM: &str = "shelf";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured log filter
pub const LOG_ENV_VAR: &str = "SHELF_LOG";

/// Fallback file stem for rolling log files
pub const DEFAULT_LOG_FILE_STEM: &str = "shelf";

// ============================================================================
// DI BINDING NAMES
// ============================================================================

/// Binding name of the book repository
pub const REPOSITORY_BINDING: &str = "repository";

/// Binding name of the authentication settings
pub const SETTINGS_BINDING: &str = "settings";
