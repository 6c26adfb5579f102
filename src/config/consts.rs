// src/config/consts.rs

// Net config
pub const JFT_URL: &str = "https://www.jftna.org/jft/";
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; NA Happy Hour Site)";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Cache
pub const CACHE_TTL_SECS: u64 = 3600; // one hour, same as the upstream revalidate hint
pub const STORE_DIR: &str = ".store";
pub const STORE_FILE: &str = "jft.json";

// Server
pub const BIND_ADDR: &str = "127.0.0.1:3000";
pub const API_PATH: &str = "/api/jft";
pub const HEALTH_PATH: &str = "/health";

// Parse
pub const TABLE_OPEN: &str = "<table";
pub const TABLE_CLOSE: &str = "</table>";
pub const REFLECTION_PREFIX: &str = "just for today:";
pub const HEADER_LINES: usize = 3; // date, title, quote

// Dates: "October 18"
pub const DATE_FORMAT: &str = "%B %-d";

// Record defaults
pub const DEFAULT_TITLE: &str = "Daily Meditation";
pub const DEFAULT_QUOTE: &str = "";
pub const DEFAULT_REFLECTION: &str = "Just for today, I will focus on my recovery.";

// Fallback record
pub const FALLBACK_TITLE: &str = "Daily Meditation";
pub const FALLBACK_QUOTE: &str = "We can find meaning and purpose in our lives through recovery.";
pub const FALLBACK_CONTENT: &str =
    "Unable to load today's meditation. Please visit jftna.org directly for the daily reading.";
pub const FALLBACK_REFLECTION: &str = "I will stay clean and work my program today.";

// Env overrides
pub const ENV_URL: &str = "JFT_URL";
pub const ENV_USER_AGENT: &str = "JFT_USER_AGENT";
pub const ENV_TIMEOUT: &str = "JFT_TIMEOUT_SECS";
pub const ENV_CACHE_TTL: &str = "JFT_CACHE_TTL_SECS";
pub const ENV_BIND: &str = "JFT_BIND";
pub const ENV_STORE_DIR: &str = "JFT_STORE_DIR";
pub const ENV_LOG_FILE: &str = "JFT_LOG_FILE";
