//! Vocabulary construction and integer encoding of triples

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::triples::Triple;

/// An integer-encoded (head, relation, tail) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncodedTriple {
    pub head: usize,
    pub relation: usize,
    pub tail: usize,
}

/// Entity-to-id and relation-to-id bijections for one trial.
///
/// Ids are dense and assigned in sorted label order, so two mappings built
/// from the same triples are identical. A mapping is owned by the trial that
/// built it: the trained model's embedding rows are only interpretable
/// through the mapping used to encode its training data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyMapping {
    entity_to_id: HashMap<String, usize>,
    relation_to_id: HashMap<String, usize>,
}

impl VocabularyMapping {
    /// Build a fresh mapping from the entities and relations in `triples`.
    pub fn from_triples(triples: &[Triple]) -> Self {
        let mut entities: Vec<&str> = triples
            .iter()
            .flat_map(|t| [t.head.as_str(), t.tail.as_str()])
            .collect();
        entities.sort_unstable();
        entities.dedup();

        let mut relations: Vec<&str> = triples.iter().map(|t| t.relation.as_str()).collect();
        relations.sort_unstable();
        relations.dedup();

        Self {
            entity_to_id: entities
                .into_iter()
                .enumerate()
                .map(|(id, label)| (label.to_string(), id))
                .collect(),
            relation_to_id: relations
                .into_iter()
                .enumerate()
                .map(|(id, label)| (label.to_string(), id))
                .collect(),
        }
    }

    pub fn num_entities(&self) -> usize {
        self.entity_to_id.len()
    }

    pub fn num_relations(&self) -> usize {
        self.relation_to_id.len()
    }

    pub fn entity_id(&self, label: &str) -> Option<usize> {
        self.entity_to_id.get(label).copied()
    }

    pub fn relation_id(&self, label: &str) -> Option<usize> {
        self.relation_to_id.get(label).copied()
    }

    /// Entity-to-id table, for callers that persist or inspect the winning
    /// trial's vocabulary.
    pub fn entity_to_id(&self) -> &HashMap<String, usize> {
        &self.entity_to_id
    }

    /// Relation-to-id table.
    pub fn relation_to_id(&self) -> &HashMap<String, usize> {
        &self.relation_to_id
    }

    /// Encode triples with this mapping.
    ///
    /// Triples naming an entity or relation absent from the mapping are
    /// dropped: test-time labels unseen during training cannot be scored by
    /// the trial's model and are excluded rather than treated as fatal.
    pub fn encode(&self, triples: &[Triple]) -> Vec<EncodedTriple> {
        triples
            .iter()
            .filter_map(|t| {
                Some(EncodedTriple {
                    head: self.entity_id(&t.head)?,
                    relation: self.relation_id(&t.relation)?,
                    tail: self.entity_id(&t.tail)?,
                })
            })
            .collect()
    }
}

/// Encode triples, building the mapping from the input when none is given.
///
/// Mirrors the two call shapes of the encoding seam: the training partition
/// is encoded with a fresh mapping, every later partition with the training
/// partition's mapping.
pub fn encode_triples(
    triples: &[Triple],
    existing: Option<&VocabularyMapping>,
) -> (Vec<EncodedTriple>, VocabularyMapping) {
    match existing {
        Some(mapping) => (mapping.encode(triples), mapping.clone()),
        None => {
            let mapping = VocabularyMapping::from_triples(triples);
            (mapping.encode(triples), mapping)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_triples() -> Vec<Triple> {
        vec![
            Triple::new("einstein", "won", "nobel_prize"),
            Triple::new("curie", "won", "nobel_prize"),
            Triple::new("paris", "capital_of", "france"),
        ]
    }

    #[test]
    fn test_mapping_is_dense_and_sorted() {
        let mapping = VocabularyMapping::from_triples(&sample_triples());
        // Entities: curie, einstein, france, nobel_prize, paris (sorted)
        assert_eq!(mapping.num_entities(), 5);
        assert_eq!(mapping.entity_id("curie"), Some(0));
        assert_eq!(mapping.entity_id("einstein"), Some(1));
        assert_eq!(mapping.entity_id("paris"), Some(4));
        // Relations: capital_of, won
        assert_eq!(mapping.num_relations(), 2);
        assert_eq!(mapping.relation_id("capital_of"), Some(0));
        assert_eq!(mapping.relation_id("won"), Some(1));
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let triples = sample_triples();
        let a = VocabularyMapping::from_triples(&triples);
        let b = VocabularyMapping::from_triples(&triples);
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_round_trip() {
        let triples = sample_triples();
        let mapping = VocabularyMapping::from_triples(&triples);
        let encoded = mapping.encode(&triples);
        assert_eq!(encoded.len(), triples.len());
        // Re-encoding with the same mapping reproduces identical indices.
        assert_eq!(mapping.encode(&triples), encoded);
        assert_eq!(
            encoded[0],
            EncodedTriple {
                head: 1,
                relation: 1,
                tail: 3
            }
        );
    }

    #[test]
    fn test_encode_drops_unseen_labels() {
        let train = sample_triples();
        let mapping = VocabularyMapping::from_triples(&train);
        let test = vec![
            Triple::new("einstein", "won", "nobel_prize"),
            Triple::new("bohr", "won", "nobel_prize"),
            Triple::new("einstein", "born_in", "ulm"),
        ];
        let encoded = mapping.encode(&test);
        assert_eq!(encoded.len(), 1);
    }

    #[test]
    fn test_encode_triples_builds_fresh_mapping() {
        let triples = sample_triples();
        let (encoded, mapping) = encode_triples(&triples, None);
        assert_eq!(encoded.len(), 3);
        assert_eq!(mapping, VocabularyMapping::from_triples(&triples));
    }

    #[test]
    fn test_encode_triples_reuses_existing_mapping() {
        let train = sample_triples();
        let mapping = VocabularyMapping::from_triples(&train);
        let extra = vec![Triple::new("bohr", "won", "nobel_prize")];
        let (encoded, returned) = encode_triples(&extra, Some(&mapping));
        assert!(encoded.is_empty());
        assert_eq!(returned, mapping);
    }
}
