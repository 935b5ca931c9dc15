//! One user's planning session: the plan being edited, the catalog it draws
//! recipes from, finished plans, and a slot for unfinished work.

use chrono::{DateTime, Utc};
use mealplan_types::{DayId, MealId, PlanExport};
use tracing::{debug, info};

use crate::archive::SavedPlans;
use crate::catalog::RecipeCatalog;
use crate::config::PlanLimits;
use crate::error::SessionError;
use crate::plan::MealPlan;

#[derive(Debug)]
pub struct PlanSession<C> {
    plan: MealPlan,
    catalog: C,
    saved: SavedPlans,
    draft: Option<PlanExport>,
    limits: PlanLimits,
    /// Fingerprint of the last saved or checkpointed export.
    baseline: Option<String>,
}

impl<C: RecipeCatalog> PlanSession<C> {
    /// Out-of-range `limits` are clamped as in [`MealPlan::with_limits`].
    pub fn new(catalog: C, limits: PlanLimits) -> Self {
        let plan = MealPlan::with_limits(limits);
        Self {
            limits: plan.limits(),
            plan,
            catalog,
            saved: SavedPlans::new(),
            draft: None,
            baseline: None,
        }
    }

    /// Resume a session with plans and a draft loaded from storage.
    pub fn with_history(mut self, saved: SavedPlans, draft: Option<PlanExport>) -> Self {
        self.saved = saved;
        self.draft = draft;
        self
    }

    pub fn plan(&self) -> &MealPlan {
        &self.plan
    }

    pub fn plan_mut(&mut self) -> &mut MealPlan {
        &mut self.plan
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn saved_plans(&self) -> &SavedPlans {
        &self.saved
    }

    pub fn draft(&self) -> Option<&PlanExport> {
        self.draft.as_ref()
    }

    /// Throw the current plan away and start from an empty one.
    pub fn start_new_plan(&mut self) {
        self.plan = MealPlan::with_limits(self.limits);
        self.baseline = None;
        info!("started new plan");
    }

    /// Resolve a recipe in the catalog and assign it to a meal.
    ///
    /// `Ok(false)` when the day or meal does not exist.
    pub fn assign_recipe(
        &mut self,
        day_id: DayId,
        meal_id: MealId,
        cuisine: &str,
        name: &str,
    ) -> Result<bool, SessionError> {
        let recipe =
            self.catalog
                .lookup(cuisine, name)
                .ok_or_else(|| SessionError::UnknownRecipe {
                    cuisine: cuisine.to_string(),
                    name: name.to_string(),
                })?;
        Ok(self.plan.select_recipe_for_meal(recipe, day_id, meal_id))
    }

    /// Archive the current plan and return its stamp.
    pub fn save_current_plan(&mut self) -> Result<DateTime<Utc>, SessionError> {
        let export = self.plan.get_meal_plan_data();
        self.baseline = Some(export.fingerprint()?);
        let saved_at = self.saved.save(export);
        info!(saved_at = %saved_at, "saved plan");
        Ok(saved_at)
    }

    /// Replace the current plan with a rebuilt copy of `export`.
    ///
    /// The current plan is kept if the rebuild fails. The baseline is the
    /// rebuilt plan's own export, so numbering gaps in `export` do not count
    /// as changes.
    pub fn restore_plan(&mut self, export: &PlanExport) -> Result<(), SessionError> {
        let plan = MealPlan::restore(export, &self.catalog, self.limits)?;
        self.baseline = Some(plan.get_meal_plan_data().fingerprint()?);
        self.plan = plan;
        debug!(days = self.plan.day_count(), "restored plan into session");
        Ok(())
    }

    /// Store the current plan as the unfinished draft.
    pub fn checkpoint_draft(&mut self) -> Result<(), SessionError> {
        let export = self.plan.get_meal_plan_data();
        self.baseline = Some(export.fingerprint()?);
        self.draft = Some(export);
        debug!("checkpointed draft");
        Ok(())
    }

    /// Rebuild the draft into the current plan and clear the draft slot.
    pub fn restore_draft(&mut self) -> Result<(), SessionError> {
        let draft = self.draft.as_ref().ok_or(SessionError::NoDraft)?;
        let plan = MealPlan::restore(draft, &self.catalog, self.limits)?;
        self.baseline = Some(plan.get_meal_plan_data().fingerprint()?);
        self.plan = plan;
        self.draft = None;
        info!("restored draft");
        Ok(())
    }

    pub fn take_draft(&mut self) -> Option<PlanExport> {
        self.draft.take()
    }

    pub fn discard_draft(&mut self) {
        if self.draft.take().is_some() {
            debug!("discarded draft");
        }
    }

    /// Whether the plan differs from what was last saved, checkpointed or
    /// restored. A fresh plan counts as changed once it has any day.
    pub fn has_unsaved_changes(&self) -> Result<bool, SessionError> {
        let export = self.plan.get_meal_plan_data();
        match &self.baseline {
            Some(baseline) => Ok(*baseline != export.fingerprint()?),
            None => Ok(!export.is_empty()),
        }
    }
}
