use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const DATA_DIR: &str = ".poolplan";

/// Key for the current in-progress plan.
pub const CURRENT_PLAN_KEY: &str = "pool-planner-data";

/// Key for the list of named saved plans.
pub const SAVED_PLANS_KEY: &str = "pool-planner-saved-plans";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn data_dir(root: &Path) -> PathBuf {
    root.join(DATA_DIR)
}

pub fn key_path(root: &Path, key: &str) -> PathBuf {
    data_dir(root).join(format!("{key}.json"))
}
