pub const APPLICATION_NAME: &str = "Manual Finder";

pub const QUERY_SUFFIX: &str = "operations and maintenance manual";

pub const DUCKDUCKGO_HTML_ENDPOINT: &str = "https://html.duckduckgo.com/html/";
pub const SEARCH_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub const DEFAULT_TRUSTED_DOMAINS: &[&str] = &[
    ".trane.com",
    ".carrier.com",
    ".daikin.com",
    ".york.com",
    ".lg.com",
];

pub const DEFAULT_CLOSE_MATCH_THRESHOLD: f64 = 0.5;
pub const DEFAULT_TRUSTED_DOMAIN_BONUS: u32 = 3;
pub const DEFAULT_MAKE_MATCH_BONUS: u32 = 2;
pub const DEFAULT_MAX_RESULTS: usize = 15;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_MANUAL_FILENAME: &str = "manual.pdf";
pub const PDF_MAGIC: &[u8; 4] = b"%PDF";

pub const SETTINGS_DIR_NAME: &str = "manual-finder";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const PROMPT_MAKE: &str = "Enter the Make (e.g., Trane): ";
pub const PROMPT_MODEL: &str = "Enter the Model (e.g., RTU-1234): ";
pub const PROMPT_RETRY: &str = "Try a different Make/Model? (y/n): ";
pub const PROMPT_DOWNLOAD: &str = "Download this manual? (y/n): ";
pub const PROMPT_OPEN_BROWSER: &str = "Open the manual link in your browser? (y/n): ";
