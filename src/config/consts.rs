// src/config/consts.rs

// Scrape targets
pub const SCHEDULE_TABLE: &str = ".rgMasterTable";
pub const MEN_PANEL_ID: &str = "cpMain_cpMain_pnlMen";
pub const WOMEN_PANEL_ID: &str = "cpMain_cpMain_pnlWomen";

// Net
pub const USER_AGENT: &str = "team_sheet/0.1";

// Sheet
pub const SHEET_NAME: &str = "Sheet";
pub const ANSWER_YES: &str = "Yes";
pub const ANSWER_NO: &str = "No";
pub const ANSWER_MAYBE: &str = "Maybe";
pub const WIDTH_PADDING: usize = 2;

// Total-row threshold, pinned to B6 regardless of how many games exist.
// With no games B6 is blank; readers count that as 0, so it shows the warning fill.
pub const THRESHOLD_ROW: u32 = 6;
pub const THRESHOLD_COL: u16 = 2;
pub const THRESHOLD_MIN: i32 = 7;

// Output
pub const DEFAULT_FILE: &str = "team.xlsx";
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

// Web
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
