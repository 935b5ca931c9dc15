use mealplan_types::{DayExport, MealRecord, PlanExport};

use crate::plan::MealPlan;

impl MealPlan {
    /// Materialize the plan as an ordinal-indexed export.
    ///
    /// Days are numbered 1..N and assigned meals 1..K in traversal order at
    /// the time of the call. Meals without a recipe are skipped and take no
    /// number, so keys are always contiguous and match what
    /// [`MealPlan::restore`] replays. Every day gets an entry, even when it
    /// holds no assigned meals.
    pub fn get_meal_plan_data(&self) -> PlanExport {
        let mut export = PlanExport::new();
        for (day_number, day) in (1u32..).zip(self.days()) {
            let mut day_export = DayExport::new();
            let assigned = day.meals().filter_map(|meal| meal.recipe());
            for (meal_number, recipe) in (1u32..).zip(assigned) {
                day_export.insert(meal_number, MealRecord::from_recipe(recipe));
            }
            export.insert(day_number, day_export);
        }
        export
    }
}

#[cfg(test)]
mod tests {
    use mealplan_types::{Ingredient, Nutrition, Recipe};
    use similar_asserts::assert_eq;

    use super::*;
    use crate::catalog::SelectionMenu;
    use crate::config::PlanLimits;

    fn spaghetti() -> Recipe {
        Recipe::new("Tomato Spaghetti", "Italian")
            .with_ingredient(Ingredient::new("Spaghetti pasta", 1.0, "box"))
            .with_ingredient(Ingredient::new("Tomato Sauce", 1.0, "jar"))
            .with_step("Boil water.")
            .with_step("Add pasta.")
    }

    fn pizza() -> Recipe {
        Recipe::new("Pepperoni Pizza", "Italian")
            .with_ingredient(Ingredient::new("Pizza dough", 1.0, "box"))
            .with_step("Bake.")
            .with_nutrition(
                Nutrition::new(4.0)
                    .with_calories_per_serving(285.5)
                    .with_macros(12.5, 35.5, 10.5),
            )
    }

    #[test]
    fn empty_plan_exports_nothing() {
        let export = MealPlan::new().get_meal_plan_data();
        assert!(export.is_empty());
        insta::assert_json_snapshot!(export, @"{}");
    }

    #[test]
    fn days_without_recipes_are_present_but_empty() {
        let mut plan = MealPlan::new();
        let d = plan.append_new_day().unwrap();
        plan.append_new_day().unwrap();
        plan.day_mut(d).unwrap().append_new_meal().unwrap();

        let export = plan.get_meal_plan_data();
        assert_eq!(export.len(), 2);
        assert!(export.iter().all(|(_, day)| day.is_empty()));
        assert_eq!(export.meal_count(), 0);
    }

    #[test]
    fn numbering_follows_traversal_not_creation() {
        let mut plan = MealPlan::new();
        let d1 = plan.append_new_day().unwrap();
        let d2 = plan.append_new_day().unwrap();
        let m1 = plan.day_mut(d2).unwrap().append_new_meal().unwrap();
        let m2 = plan.day_mut(d2).unwrap().append_new_meal().unwrap();
        plan.select_recipe_for_meal(spaghetti(), d2, m1);
        plan.select_recipe_for_meal(pizza(), d2, m2);

        plan.swap_days(d1, d2);
        plan.day_mut(d2).unwrap().swap_meals(m1, m2);

        let export = plan.get_meal_plan_data();
        let first = export.get(1).unwrap();
        assert_eq!(first.get(1).unwrap().name, "Pepperoni Pizza");
        assert_eq!(first.get(2).unwrap().name, "Tomato Spaghetti");
        assert!(export.get(2).unwrap().is_empty());
    }

    #[test]
    fn unassigned_meals_take_no_number() {
        let mut plan = MealPlan::new();
        let d = plan.append_new_day().unwrap();
        let day = plan.day_mut(d).unwrap();
        day.append_new_meal().unwrap();
        let m2 = day.append_new_meal().unwrap();
        day.append_new_meal().unwrap();
        let m4 = day.append_new_meal().unwrap();
        plan.select_recipe_for_meal(spaghetti(), d, m2);
        plan.select_recipe_for_meal(pizza(), d, m4);

        let export = plan.get_meal_plan_data();
        let day_export = export.get(1).unwrap();
        let numbers: Vec<u32> = day_export.iter().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(day_export.get(1).unwrap().name, "Tomato Spaghetti");
        assert_eq!(day_export.get(2).unwrap().name, "Pepperoni Pizza");
    }

    #[test]
    fn export_survives_restore_with_leading_unassigned_meal() {
        let mut plan = MealPlan::new();
        let d = plan.append_new_day().unwrap();
        let day = plan.day_mut(d).unwrap();
        day.append_new_meal().unwrap();
        let m = day.append_new_meal().unwrap();
        plan.select_recipe_for_meal(pizza(), d, m);
        let export = plan.get_meal_plan_data();

        let menu = SelectionMenu::from_raw([pizza()]);
        let restored = MealPlan::restore(&export, &menu, PlanLimits::default()).unwrap();

        assert_eq!(restored.get_meal_plan_data(), export);
        assert_eq!(
            restored.get_meal_plan_data().fingerprint().unwrap(),
            export.fingerprint().unwrap()
        );
    }

    #[test]
    fn export_wire_shape() {
        let mut plan = MealPlan::new();
        let d = plan.append_new_day().unwrap();
        let m = plan.day_mut(d).unwrap().append_new_meal().unwrap();
        plan.select_recipe_for_meal(pizza(), d, m);

        let wire = serde_json::to_value(plan.get_meal_plan_data()).unwrap();
        assert_eq!(
            wire,
            serde_json::json!({
                "1": {
                    "1": {
                        "name": "Pepperoni Pizza",
                        "cuisine": "Italian",
                        "ingredients": [{ "name": "Pizza dough", "amount": 1.0, "unit": "box" }],
                        "steps": ["Bake."],
                        "nutrition": {
                            "servings": 4.0,
                            "caloriesPerServing": 285.5,
                            "protein": 12.5,
                            "carbohydrates": 35.5,
                            "fat": 10.5
                        }
                    }
                }
            })
        );
    }
}
