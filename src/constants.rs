pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/products";
pub const DEFAULT_TITLE: &str = "Menu";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub const MENU_ROOT_ID: &str = "all-tables-container";
pub const OPTIONS_ROOT_ID: &str = "options";

pub const TABLES_PER_CONTAINER: usize = 2;
pub const CONTAINER_ID_PREFIX: &str = "tables-";
pub const HEADER_ID_PREFIX: &str = "header-";
