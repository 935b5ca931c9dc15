use mealplan_types::{MAX_DAYS, MAX_MEALS_PER_DAY};

use crate::chain::{Chain, ChainKey};
use crate::error::{PlanViolation, SequenceScope};

/// Member count within both the configured limit and the hard maximum.
pub(crate) fn check<K: ChainKey, T>(
    chain: &Chain<K, T>,
    scope: SequenceScope,
    violations: &mut Vec<PlanViolation>,
) {
    let hard_max = match scope {
        SequenceScope::Days => MAX_DAYS,
        SequenceScope::Meals(_) => MAX_MEALS_PER_DAY,
    };
    let max = chain.capacity.min(hard_max);
    if chain.len() > max {
        violations.push(PlanViolation::CapacityExceeded {
            scope,
            len: chain.len(),
            max,
        });
    }
}
