use serde::{Deserialize, Serialize};

/// A named quantity of one ingredient.
///
/// Used both inside recipes and as a ledger entry declared by the user.
/// `amount` is signed: the ledger may go negative when assigned meals need
/// more than the user declared on hand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }
}

/// One instruction in a recipe.
///
/// Encoded on the wire as a bare string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Step {
    pub description: String,
}

impl Step {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl From<String> for Step {
    fn from(description: String) -> Self {
        Self { description }
    }
}

impl From<Step> for String {
    fn from(step: Step) -> Self {
        step.description
    }
}

/// Nutrition facts for a whole recipe.
///
/// Only `servings` is guaranteed by the catalog; the macro fields are
/// frequently missing for user-submitted recipes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    pub servings: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_per_serving: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
}

impl Nutrition {
    pub fn new(servings: f64) -> Self {
        Self {
            servings,
            calories_per_serving: None,
            protein: None,
            carbohydrates: None,
            fat: None,
        }
    }

    pub fn with_calories_per_serving(mut self, calories: f64) -> Self {
        self.calories_per_serving = Some(calories);
        self
    }

    /// Set protein, carbohydrates and fat in one call.
    pub fn with_macros(mut self, protein: f64, carbohydrates: f64, fat: f64) -> Self {
        self.protein = Some(protein);
        self.carbohydrates = Some(carbohydrates);
        self.fat = Some(fat);
        self
    }
}

/// A catalog recipe. Read-only to the planner.
///
/// The JSON shape matches the catalog's raw menu records; unknown fields
/// (image metadata and the like) are ignored on decode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub cuisine: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, cuisine: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cuisine: cuisine.into(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            nutrition: None,
        }
    }

    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.steps.push(Step::new(step));
        self
    }

    pub fn with_nutrition(mut self, nutrition: Nutrition) -> Self {
        self.nutrition = Some(nutrition);
        self
    }
}
