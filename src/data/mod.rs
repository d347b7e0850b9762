//! Triple corpus loading, negative synthesis, splitting, and encoding
//!
//! The pipeline from a raw triple file to trainable tensors:
//!
//! ```text
//! load_corpus ──► synthesize_negatives ──► train_test_split
//!                                               │
//!                       per trial: VocabularyMapping ──► encode
//! ```
//!
//! The corpus and its synthesized negatives are produced once per search and
//! shared read-only by every trial; the vocabulary mapping is rebuilt per
//! trial from that trial's training partition so each model's input
//! dimensions stay tied to the encoding that produced them.

mod encode;
mod negative;
mod split;
mod triples;

pub use encode::{encode_triples, EncodedTriple, VocabularyMapping};
pub use negative::synthesize_negatives;
pub use split::{train_test_split, Split};
pub use triples::{load_corpus, Triple};
