use mealplan_types::PlanExport;
use tracing::{debug, warn};

use crate::catalog::RecipeCatalog;
use crate::config::PlanLimits;
use crate::error::RestoreError;
use crate::plan::MealPlan;

impl MealPlan {
    /// Rebuild a plan from an export by replaying appends and recipe
    /// assignments in ascending day and meal number order.
    ///
    /// Each exported record becomes one meal, so gaps in hand-built numbering
    /// collapse. Each day is filled completely before it is linked into the
    /// plan. Recipes are resolved through `catalog` by cuisine and name. The new plan starts with an empty ledger. Nothing is
    /// returned on failure, so a caller's current plan is never half-replaced.
    pub fn restore(
        export: &PlanExport,
        catalog: &impl RecipeCatalog,
        limits: PlanLimits,
    ) -> Result<Self, RestoreError> {
        let mut plan = Self::with_limits(limits);

        for (day_number, day_export) in export.iter() {
            let mut day = plan.detached_day();

            for (meal_number, record) in day_export.iter() {
                let recipe = catalog
                    .lookup(&record.cuisine, &record.name)
                    .ok_or_else(|| RestoreError::UnknownRecipe {
                        day_number,
                        meal_number,
                        cuisine: record.cuisine.clone(),
                        name: record.name.clone(),
                    })
                    .inspect_err(|err| warn!(error = %err, "restore rejected"))?;

                day.append_meal_with(Some(recipe)).inspect_err(|err| {
                    warn!(day_number, meal_number, error = %err, "restore rejected");
                })?;
            }

            plan.push_day(day).inspect_err(|err| {
                warn!(day_number, error = %err, "restore rejected");
            })?;
        }

        debug!(
            days = plan.day_count(),
            meals = export.meal_count(),
            "restored plan"
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use mealplan_types::{DayExport, Ingredient, MealRecord, Recipe};
    use similar_asserts::assert_eq;

    use super::*;
    use crate::catalog::SelectionMenu;
    use crate::error::PlanError;
    use crate::invariants::validate_plan;

    fn menu() -> SelectionMenu {
        SelectionMenu::from_raw([
            Recipe::new("Tomato Spaghetti", "Italian")
                .with_ingredient(Ingredient::new("Spaghetti pasta", 1.0, "box"))
                .with_step("Boil water."),
            Recipe::new("Pad Thai", "Thai").with_step("Soak noodles."),
            Recipe::new("Pepperoni Pizza", "Italian").with_step("Bake."),
        ])
    }

    fn record(menu: &SelectionMenu, cuisine: &str, name: &str) -> MealRecord {
        MealRecord::from_recipe(&menu.lookup(cuisine, name).unwrap())
    }

    #[test_log::test]
    fn export_restore_export_is_stable() {
        let menu = menu();
        let mut plan = MealPlan::new();
        for (cuisine, name) in [("Italian", "Tomato Spaghetti"), ("Thai", "Pad Thai")] {
            let d = plan.append_new_day().unwrap();
            for _ in 0..2 {
                let m = plan.day_mut(d).unwrap().append_new_meal().unwrap();
                plan.select_recipe_for_meal(menu.lookup(cuisine, name).unwrap(), d, m);
            }
        }
        plan.append_new_day().unwrap();
        let export = plan.get_meal_plan_data();

        let restored = MealPlan::restore(&export, &menu, PlanLimits::default()).unwrap();

        assert_eq!(restored.get_meal_plan_data(), export);
        assert_eq!(restored.day_count(), 3);
        assert!(validate_plan(&restored).is_empty());
    }

    #[test]
    fn replays_in_number_order_and_collapses_gaps() {
        let menu = menu();
        let mut day = DayExport::new();
        day.insert(4, record(&menu, "Italian", "Pepperoni Pizza"));
        day.insert(2, record(&menu, "Thai", "Pad Thai"));
        let mut export = PlanExport::new();
        export.insert(3, day);
        export.insert(1, DayExport::new());

        let plan = MealPlan::restore(&export, &menu, PlanLimits::default()).unwrap();

        let days: Vec<usize> = plan.days().map(|d| d.meal_count()).collect();
        assert_eq!(days, vec![0, 2]);
        let last = plan.day(plan.last_day().unwrap()).unwrap();
        let names: Vec<&str> = last
            .meals()
            .map(|m| m.recipe().unwrap().name.as_str())
            .collect();
        assert_eq!(names, vec!["Pad Thai", "Pepperoni Pizza"]);
    }

    #[test]
    fn unknown_recipe_fails_restore() {
        let menu = menu();
        let mut day = DayExport::new();
        let mut stale = record(&menu, "Italian", "Tomato Spaghetti");
        stale.name = "Lasagne".to_string();
        day.insert(1, stale);
        let mut export = PlanExport::new();
        export.insert(1, day);

        let err = MealPlan::restore(&export, &menu, PlanLimits::default()).unwrap_err();
        assert!(matches!(
            err,
            RestoreError::UnknownRecipe { day_number: 1, meal_number: 1, ref name, .. } if name == "Lasagne"
        ));
    }

    #[test]
    fn oversized_export_fails_restore() {
        let menu = menu();
        let mut export = PlanExport::new();
        for n in 1..=3 {
            export.insert(n, DayExport::new());
        }

        let limits = PlanLimits::default().max_days(2);
        let err = MealPlan::restore(&export, &menu, limits).unwrap_err();
        assert!(matches!(
            err,
            RestoreError::Capacity(PlanError::DayCapacityExceeded { max: 2 })
        ));

        let mut day = DayExport::new();
        for n in 1..=6 {
            day.insert(n, record(&menu, "Thai", "Pad Thai"));
        }
        let mut export = PlanExport::new();
        export.insert(1, day);
        let err = MealPlan::restore(&export, &menu, PlanLimits::default()).unwrap_err();
        assert!(matches!(
            err,
            RestoreError::Capacity(PlanError::MealCapacityExceeded { max: 5, .. })
        ));
    }
}
