mod accumulator;
pub mod classifier;
mod error;
mod extractor;
mod morpheme;
mod tagger;
pub mod util;

pub use accumulator::{Offer, Word, WordAccumulator};
pub use classifier::{classify, classify_or, Classification, Features};
pub use error::{ExtractError, ExtractResult};
pub use extractor::{Extractor, Words};
pub use morpheme::{Node, NodeBuf};
pub use tagger::Tagger;

#[cfg(test)]
mod test_support;
