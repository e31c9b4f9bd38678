use crate::error::{PlanError, Result};
use crate::paths::{CURRENT_PLAN_KEY, SAVED_PLANS_KEY};
use crate::plan::PlanRecord;
use crate::store::KvStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// SavedPlan
// ---------------------------------------------------------------------------

/// A named, timestamped snapshot of a plan record. Field names match the
/// persisted JSON layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlan {
    pub id: String,
    pub name: String,
    pub data: PlanRecord,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Planner
// ---------------------------------------------------------------------------

/// Persistence adapter over an injected key-value store. The current plan
/// mirrors every mutation (fire-and-forget, last write wins); saved plans
/// live as a single list blob under one key.
pub struct Planner<S: KvStore> {
    store: S,
}

impl<S: KvStore> Planner<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    // ---------------------------------------------------------------------------
    // Current plan
    // ---------------------------------------------------------------------------

    /// Mirror the current plan to storage. Failures are reported as `false`
    /// and logged, never propagated: losing one mirror write must not break
    /// the planning flow.
    pub fn save_current(&self, plan: &PlanRecord) -> bool {
        let json = match serde_json::to_string(plan) {
            Ok(json) => json,
            Err(err) => {
                warn!("failed to encode current plan: {err}");
                return false;
            }
        };
        match self.store.set(CURRENT_PLAN_KEY, &json) {
            Ok(()) => true,
            Err(err) => {
                warn!("failed to store current plan: {err}");
                false
            }
        }
    }

    /// Load the current plan. Absent, unreadable, or unparsable state all
    /// resolve to `None`; the caller starts from an empty plan.
    pub fn load_current(&self) -> Option<PlanRecord> {
        let json = match self.store.get(CURRENT_PLAN_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(err) => {
                warn!("failed to read current plan: {err}");
                return None;
            }
        };
        match serde_json::from_str(&json) {
            Ok(plan) => {
                debug!("restored current plan");
                Some(plan)
            }
            Err(err) => {
                warn!("stored plan is unparsable, starting fresh: {err}");
                None
            }
        }
    }

    pub fn clear_current(&self) -> bool {
        match self.store.remove(CURRENT_PLAN_KEY) {
            Ok(()) => true,
            Err(err) => {
                warn!("failed to clear current plan: {err}");
                false
            }
        }
    }

    // ---------------------------------------------------------------------------
    // Saved plans
    // ---------------------------------------------------------------------------

    /// Snapshot the given plan under a name. Explicit user action, so
    /// storage failures surface to the caller.
    pub fn save_plan(&self, name: &str, data: &PlanRecord) -> Result<SavedPlan> {
        let mut plans = self.list_plans();
        let now = Utc::now();
        let plan = SavedPlan {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            data: data.clone(),
            created_at: now,
            updated_at: now,
        };
        plans.push(plan.clone());
        self.write_plans(&plans)?;
        Ok(plan)
    }

    /// All saved plans, oldest first. Absent or corrupt state reads as an
    /// empty list.
    pub fn list_plans(&self) -> Vec<SavedPlan> {
        let json = match self.store.get(SAVED_PLANS_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("failed to read saved plans: {err}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&json) {
            Ok(plans) => plans,
            Err(err) => {
                warn!("saved plans list is unparsable: {err}");
                Vec::new()
            }
        }
    }

    pub fn get_plan(&self, id: &str) -> Result<SavedPlan> {
        self.list_plans()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| PlanError::PlanNotFound(id.to_string()))
    }

    pub fn delete_plan(&self, id: &str) -> Result<()> {
        let mut plans = self.list_plans();
        let before = plans.len();
        plans.retain(|p| p.id != id);
        if plans.len() == before {
            return Err(PlanError::PlanNotFound(id.to_string()));
        }
        self.write_plans(&plans)
    }

    /// Replace a saved plan's data in place, refreshing `updated_at`.
    pub fn update_plan(&self, id: &str, data: &PlanRecord) -> Result<SavedPlan> {
        let mut plans = self.list_plans();
        let plan = plans
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| PlanError::PlanNotFound(id.to_string()))?;
        plan.data = data.clone();
        plan.updated_at = Utc::now();
        let updated = plan.clone();
        self.write_plans(&plans)?;
        Ok(updated)
    }

    fn write_plans(&self, plans: &[SavedPlan]) -> Result<()> {
        let json = serde_json::to_string(plans)?;
        self.store.set(SAVED_PLANS_KEY, &json)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn planner() -> Planner<MemoryStore> {
        Planner::new(MemoryStore::new())
    }

    #[test]
    fn current_plan_roundtrip() {
        let planner = planner();
        assert!(planner.load_current().is_none());

        let mut plan = PlanRecord::new();
        plan.pool_type = "In-Ground".into();
        plan.extras = vec!["Slide".into()];
        assert!(planner.save_current(&plan));

        let restored = planner.load_current().unwrap();
        assert_eq!(restored, plan);
    }

    #[test]
    fn save_current_swallows_store_failure() {
        let store = MemoryStore::new();
        store.set_failing(true);
        let planner = Planner::new(store);
        assert!(!planner.save_current(&PlanRecord::new()));
        assert!(planner.load_current().is_none());
    }

    #[test]
    fn unparsable_current_plan_reads_as_none() {
        let store = MemoryStore::new();
        store.set(CURRENT_PLAN_KEY, "not json").unwrap();
        let planner = Planner::new(store);
        assert!(planner.load_current().is_none());
    }

    #[test]
    fn save_list_delete_roundtrip() {
        let planner = planner();
        let saved = planner.save_plan("Test", &PlanRecord::new()).unwrap();

        let plans = planner.list_plans();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].name, "Test");
        assert_eq!(plans[0].id, saved.id);

        planner.delete_plan(&saved.id).unwrap();
        assert!(planner.list_plans().is_empty());
    }

    #[test]
    fn delete_unknown_plan_fails() {
        let planner = planner();
        assert!(matches!(
            planner.delete_plan("missing"),
            Err(PlanError::PlanNotFound(_))
        ));
    }

    #[test]
    fn update_plan_refreshes_data_and_timestamp() {
        let planner = planner();
        let saved = planner.save_plan("Test", &PlanRecord::new()).unwrap();

        let mut revised = PlanRecord::new();
        revised.finish = "Pebble".into();
        let updated = planner.update_plan(&saved.id, &revised).unwrap();
        assert_eq!(updated.data.finish, "Pebble");
        assert!(updated.updated_at >= saved.updated_at);

        let listed = planner.get_plan(&saved.id).unwrap();
        assert_eq!(listed.data.finish, "Pebble");
        assert_eq!(listed.created_at, saved.created_at);
    }

    #[test]
    fn saved_plan_json_uses_camel_case() {
        let planner = planner();
        planner.save_plan("Test", &PlanRecord::new()).unwrap();
        let plans = planner.list_plans();
        let json = serde_json::to_string(&plans).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
    }

    #[test]
    fn list_survives_corrupt_blob() {
        let store = MemoryStore::new();
        store.set(SAVED_PLANS_KEY, "[{broken").unwrap();
        let planner = Planner::new(store);
        assert!(planner.list_plans().is_empty());
    }
}
