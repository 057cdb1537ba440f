//! Text processing, requirement extraction and match scoring

pub mod patterns;
pub mod annotator;
pub mod document;
pub mod tokenizer;
pub mod requirements;
pub mod similarity;
pub mod scorer;
pub mod facts;
pub mod keyword_matcher;
pub mod word_cloud;
pub mod analyzer;

pub use scorer::{MatchResult, MatchScorer};
pub use facts::{FactExtractor, StructuredFacts};
