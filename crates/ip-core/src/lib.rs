//! Phonetic tokenization for Indian languages.
//!
//! Turns free text into weighted phonetic keys for a full-text index
//! (Postgres `tsvector` literal) and turns a search phrase into a compact
//! `tsquery` expression over the same keys. Words are matched by how they
//! sound, so inconsistent romanized spellings land on the same keys.
//!
//! The phonetic algorithms themselves are pluggable: anything implementing
//! [`PhoneticEncoder`] can be registered for a language tag.
//!
//! Zero I/O. No opinions about storage or transport.

pub mod constants;
pub mod encoder;
pub mod error;
pub mod language;
pub mod query;
pub mod tokenizer;
pub mod tsvector;
pub mod weighting;

pub use constants::{OR_SEPARATOR, PRIMARY_WEIGHT, SECONDARY_WEIGHT, TERTIARY_WEIGHT};
pub use encoder::{KeySet, PhoneticEncoder};
pub use error::{Error, Result};
pub use language::Language;
pub use query::build_query;
pub use tokenizer::{IndicPhone, IndicPhoneBuilder, Tokenizer};
pub use weighting::{TokenVector, WeightedToken};
