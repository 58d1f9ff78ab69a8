//! Roster composition: expands a user count into an ordered persona
//! assignment sequence.
//!
//! Every persona appears at least once when the count allows (coverage
//! guarantee); remaining slots are filled by weighted choice; the final
//! order is shuffled from the same stream so persona adjacency is
//! unpredictable but reproducible.

use crate::persona::Persona;
use crate::rng::StreamRng;

/// Build the persona assignment for `user_count` users.
///
/// When `user_count` is below the catalog size the coverage list is
/// truncated (first N personas in catalog order); config validation keeps
/// real runs well above that.
pub fn build_roster<'a>(
    personas: &'a [Persona],
    user_count: usize,
    rng: &mut StreamRng,
) -> Vec<&'a Persona> {
    let mut roster: Vec<&Persona> = personas.iter().take(user_count).collect();

    let total_weight: f64 = personas.iter().map(|p| p.weight).sum();
    while roster.len() < user_count {
        roster.push(pick_weighted(personas, total_weight, rng));
    }

    // Fisher-Yates from the same stream: deterministic order per seed.
    for i in (1..roster.len()).rev() {
        let j = rng.next_u64_below(i as u64 + 1) as usize;
        roster.swap(i, j);
    }
    roster
}

fn pick_weighted<'a>(personas: &'a [Persona], total_weight: f64, rng: &mut StreamRng) -> &'a Persona {
    let roll = rng.next_f64() * total_weight;
    let mut cumulative = 0.0;
    for p in personas {
        cumulative += p.weight;
        if roll < cumulative {
            return p;
        }
    }
    personas.last().expect("catalog is never empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::catalog;
    use crate::rng::{RngBank, StreamSlot};

    fn roster_rng(seed: u64) -> StreamRng {
        RngBank::new(seed).for_stream(StreamSlot::Roster)
    }

    #[test]
    fn roster_has_requested_length() {
        let roster = build_roster(catalog(), 73, &mut roster_rng(5));
        assert_eq!(roster.len(), 73);
    }

    #[test]
    fn every_persona_is_covered() {
        let roster = build_roster(catalog(), 50, &mut roster_rng(5));
        for p in catalog() {
            assert!(
                roster.iter().any(|r| r.name == p.name),
                "persona {} missing from roster",
                p.name
            );
        }
    }

    #[test]
    fn small_count_truncates_coverage() {
        let roster = build_roster(catalog(), 3, &mut roster_rng(5));
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn roster_is_deterministic() {
        let a: Vec<&str> = build_roster(catalog(), 60, &mut roster_rng(42))
            .iter()
            .map(|p| p.name)
            .collect();
        let b: Vec<&str> = build_roster(catalog(), 60, &mut roster_rng(42))
            .iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(a, b);
    }
}
