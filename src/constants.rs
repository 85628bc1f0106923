//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and API routes so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "userdir";

/// Crate version, baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `User-Agent` header sent with every API request.
pub const USER_AGENT: &str = concat!("userdir/", env!("CARGO_PKG_VERSION"));

/// Local config filename (e.g. `.userdir.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".userdir.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "userdir";

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ── Pagination ──────────────────────────────────────────────────────

/// Page size sent by `list_users`. The server contract fixes it at 5.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// First page number; lower values are normalized up to this.
pub const FIRST_PAGE: u32 = 1;

/// Role filter value meaning "no role filter".
pub const ROLE_ALL: &str = "all";

// ── API routes ──────────────────────────────────────────────────────

pub const ROUTE_LIST_USERS: &str = "/users/";
pub const ROUTE_REGISTER_USER: &str = "/users/register";
pub const ROUTE_DELETE_USER: &str = "/users/delete";
pub const ROUTE_UPDATE_USER: &str = "/users/update";
pub const ROUTE_GET_USER: &str = "/users/get_user";
pub const ROUTE_USERS_BY_FILTER: &str = "/users/get_users_by_filter";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_BASE_URL: &str = "USERDIR_BASE_URL";
pub const ENV_TOKEN: &str = "USERDIR_TOKEN";
pub const ENV_TIMEOUT: &str = "USERDIR_TIMEOUT";
pub const ENV_REPORT_URL: &str = "USERDIR_REPORT_URL";
pub const ENV_LOG: &str = "USERDIR_LOG";
