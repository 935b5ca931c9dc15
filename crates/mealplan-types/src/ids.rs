use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of days a single plan may hold.
pub const MAX_DAYS: usize = 7;

/// Maximum number of meals a single day may hold.
pub const MAX_MEALS_PER_DAY: usize = 5;

/// Identifies a day within a meal plan.
///
/// Random (UUID v4) so ids never collide across plans that are later merged by
/// the persistence layer. Ordinal position is never derived from the id.
///
/// Display: `"day:1b4e28ba"` (first 4 bytes of the uuid in hex)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayId(Uuid);

/// Identifies a meal within its owning day.
///
/// Display: `"meal:1b4e28ba"`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealId(Uuid);

impl DayId {
    /// Fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl MealId {
    /// Fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DayId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for MealId {
    fn default() -> Self {
        Self::new()
    }
}

fn short_hex(uuid: &Uuid) -> String {
    hex::encode(&uuid.as_bytes()[..4])
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day:{}", short_hex(&self.0))
    }
}

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "meal:{}", short_hex(&self.0))
    }
}
