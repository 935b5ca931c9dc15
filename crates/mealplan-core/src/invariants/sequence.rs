//! Link consistency of one sequence.
//!
//! A single forward walk from the head checks every back link, so together
//! with the head/tail boundary checks this covers both walk directions.

use crate::chain::{Chain, ChainKey};
use crate::error::{PlanViolation, SequenceScope};

pub(crate) fn check<K: ChainKey, T>(
    chain: &Chain<K, T>,
    scope: SequenceScope,
    violations: &mut Vec<PlanViolation>,
) {
    if let Some(head) = chain.head.and_then(|slot| chain.link(slot)) {
        if head.prev.is_some() {
            violations.push(PlanViolation::HeadHasPrevious {
                scope,
                node: head.key.uuid(),
            });
        }
    }
    if let Some(tail) = chain.tail.and_then(|slot| chain.link(slot)) {
        if tail.next.is_some() {
            violations.push(PlanViolation::TailHasNext {
                scope,
                node: tail.key.uuid(),
            });
        }
    }

    let mut reachable = 0usize;
    let mut previous: Option<usize> = None;
    let mut cursor = chain.head;
    let mut walk_complete = true;

    while let Some(slot) = cursor {
        if reachable >= chain.slots.len() {
            violations.push(PlanViolation::Cycle { scope });
            walk_complete = false;
            break;
        }
        let Some(link) = chain.link(slot) else {
            violations.push(PlanViolation::VacantLink { scope });
            walk_complete = false;
            break;
        };

        if let Some(prev_slot) = previous {
            if link.prev != Some(prev_slot) {
                if let Some(prev_link) = chain.link(prev_slot) {
                    violations.push(PlanViolation::BrokenBackLink {
                        scope,
                        from: prev_link.key.uuid(),
                        to: link.key.uuid(),
                    });
                }
            }
        }
        // Reachable but not indexed (or indexed elsewhere).
        if chain.index.get(&link.key) != Some(&slot) {
            violations.push(PlanViolation::DanglingIndex {
                scope,
                node: link.key.uuid(),
            });
        }

        reachable += 1;
        previous = Some(slot);
        cursor = link.next;
    }

    if walk_complete && previous != chain.tail {
        violations.push(PlanViolation::TailMismatch { scope });
    }
    if reachable != chain.index.len() {
        violations.push(PlanViolation::MembershipMismatch {
            scope,
            indexed: chain.index.len(),
            reachable,
        });
    }

    // Indexed but vacant or pointing at another node.
    for (key, &slot) in &chain.index {
        if !matches!(chain.link(slot), Some(link) if link.key == *key) {
            violations.push(PlanViolation::DanglingIndex {
                scope,
                node: key.uuid(),
            });
        }
    }
}
