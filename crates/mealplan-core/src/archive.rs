use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use mealplan_types::PlanExport;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Finished plans keyed by the time they were saved.
///
/// Encodes as `{ "<rfc3339 timestamp>": <PlanExport>, .. }` for the
/// persistence collaborator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedPlans {
    plans: BTreeMap<DateTime<Utc>, PlanExport>,
}

impl SavedPlans {
    pub fn new() -> Self {
        Self::default()
    }

    /// Archive `export` stamped with the current time and return the stamp.
    ///
    /// Never overwrites: a stamp already taken is nudged forward by a
    /// nanosecond until it is free.
    pub fn save(&mut self, export: PlanExport) -> DateTime<Utc> {
        let mut saved_at = Utc::now();
        while self.plans.contains_key(&saved_at) {
            saved_at += Duration::nanoseconds(1);
        }
        self.save_at(saved_at, export);
        saved_at
    }

    /// Archive `export` under an explicit stamp, replacing any plan already
    /// saved there.
    pub fn save_at(&mut self, saved_at: DateTime<Utc>, export: PlanExport) -> Option<PlanExport> {
        debug!(saved_at = %saved_at, days = export.len(), "archived plan");
        self.plans.insert(saved_at, export)
    }

    pub fn get(&self, saved_at: &DateTime<Utc>) -> Option<&PlanExport> {
        self.plans.get(saved_at)
    }

    pub fn remove(&mut self, saved_at: &DateTime<Utc>) -> Option<PlanExport> {
        self.plans.remove(saved_at)
    }

    /// Most recently stamped plan.
    pub fn latest(&self) -> Option<(&DateTime<Utc>, &PlanExport)> {
        self.plans.last_key_value()
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = (&DateTime<Utc>, &PlanExport)> {
        self.plans.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
