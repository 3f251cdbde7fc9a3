// src/config/consts.rs
use std::time::Duration;

// Net config
pub const MARKET_SUMMARY_URL: &str = "https://www.psx.com.pk/market-summary";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

// Retry policy
pub const RETRY_TOTAL: u32 = 5;
pub const RETRY_BACKOFF: Duration = Duration::from_secs(1);
pub const RETRY_STATUSES: &[u16] = &[500, 502, 503, 504];

// Extraction
pub const DEFAULT_TABLE_SELECTOR: &str = "table.stock-table-class";
pub const COLUMNS: [&str; 5] = ["Symbol", "Company", "Price", "Change", "Volume"];

// Logging
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "market_summary";
