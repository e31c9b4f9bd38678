pub mod budget;
pub mod export;
pub mod extra;
pub mod import;
pub mod init;
pub mod maintenance;
pub mod materials;
pub mod plan;
pub mod products;
pub mod recommend;
pub mod reset;
pub mod roi;
pub mod safety;
pub mod set;
pub mod show;
pub mod timeline;

use poolplan_core::plan::PlanRecord;
use poolplan_core::planner::Planner;
use poolplan_core::store::FileStore;
use std::path::Path;

pub(crate) fn planner(root: &Path) -> Planner<FileStore> {
    Planner::new(FileStore::open(root))
}

/// Current plan, or an empty record when nothing has been stored yet.
pub(crate) fn current_plan(root: &Path) -> PlanRecord {
    planner(root).load_current().unwrap_or_default()
}

/// Persist the current plan, mirroring the wizard's write-through behavior.
/// Storage failures are logged by the planner, not surfaced here.
pub(crate) fn mirror(root: &Path, plan: &PlanRecord) {
    planner(root).save_current(plan);
}
