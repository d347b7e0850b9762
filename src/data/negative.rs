//! Negative triple synthesis by entity corruption

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::Rng;

use super::triples::Triple;

/// How many corruption attempts to make before accepting a candidate that
/// collides with a known positive. Small, densely connected corpora can make
/// collision-free corruption impossible.
const MAX_CORRUPTION_ATTEMPTS: usize = 10;

/// Synthesize one negative triple per positive by corrupting the head or
/// tail with an entity drawn uniformly from the corpus vocabulary.
///
/// Corruptions that reproduce a known positive are resampled a bounded
/// number of times. The output is deterministic for a given rng state and
/// corpus, and the output order follows the positive order, so negatives
/// can be split in lockstep with their positives.
pub fn synthesize_negatives(positives: &[Triple], rng: &mut StdRng) -> Vec<Triple> {
    let known: HashSet<&Triple> = positives.iter().collect();

    // Sorted entity pool keeps sampling independent of hash iteration order.
    let mut entities: Vec<&str> = positives
        .iter()
        .flat_map(|t| [t.head.as_str(), t.tail.as_str()])
        .collect();
    entities.sort_unstable();
    entities.dedup();

    positives
        .iter()
        .map(|pos| {
            let mut candidate = corrupt(pos, &entities, rng);
            for _ in 0..MAX_CORRUPTION_ATTEMPTS {
                if !known.contains(&candidate) {
                    break;
                }
                candidate = corrupt(pos, &entities, rng);
            }
            candidate
        })
        .collect()
}

fn corrupt(pos: &Triple, entities: &[&str], rng: &mut StdRng) -> Triple {
    let replacement = entities[rng.random_range(0..entities.len())];
    if rng.random_bool(0.5) {
        Triple::new(replacement, pos.relation.clone(), pos.tail.clone())
    } else {
        Triple::new(pos.head.clone(), pos.relation.clone(), replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn chain_corpus(n: usize) -> Vec<Triple> {
        (0..n)
            .map(|i| Triple::new(format!("e{i}"), "linked_to", format!("e{}", i + 1)))
            .collect()
    }

    #[test]
    fn test_one_negative_per_positive() {
        let positives = chain_corpus(20);
        let mut rng = StdRng::seed_from_u64(7);
        let negatives = synthesize_negatives(&positives, &mut rng);
        assert_eq!(negatives.len(), positives.len());
    }

    #[test]
    fn test_negatives_keep_relation_and_one_endpoint() {
        let positives = chain_corpus(20);
        let mut rng = StdRng::seed_from_u64(7);
        let negatives = synthesize_negatives(&positives, &mut rng);
        for (pos, neg) in positives.iter().zip(&negatives) {
            assert_eq!(pos.relation, neg.relation);
            assert!(pos.head == neg.head || pos.tail == neg.tail);
        }
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let positives = chain_corpus(30);
        let a = synthesize_negatives(&positives, &mut StdRng::seed_from_u64(42));
        let b = synthesize_negatives(&positives, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let positives = chain_corpus(30);
        let a = synthesize_negatives(&positives, &mut StdRng::seed_from_u64(1));
        let b = synthesize_negatives(&positives, &mut StdRng::seed_from_u64(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_corruptions_avoid_positives_when_possible() {
        // A sparse chain leaves plenty of non-positive corruptions, so the
        // bounded resampling should avoid every known triple.
        let positives = chain_corpus(50);
        let known: HashSet<&Triple> = positives.iter().collect();
        let negatives =
            synthesize_negatives(&positives, &mut StdRng::seed_from_u64(13));
        let collisions = negatives.iter().filter(|n| known.contains(n)).count();
        assert_eq!(collisions, 0);
    }
}
