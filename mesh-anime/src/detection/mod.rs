//! Anime detection core
//!
//! Pure decision logic, no I/O:
//! - `signals` reads path, filename, title and stream languages
//! - `script` classifies title script (kana / other Japanese / none)
//! - `keywords` holds the filename keyword set
//! - `verdict` folds signals into flags and the property writes they imply

pub mod keywords;
pub mod script;
pub mod signals;
pub mod verdict;

pub use keywords::KeywordSet;
pub use script::TitleScript;
pub use signals::{ClassificationInput, FileType, Signals};
pub use verdict::{ClassificationVerdict, LocalizedTitle, PropertyOp, PropertyWriteBatch};

/// Extract signals and combine them into a verdict
pub fn classify(input: &ClassificationInput, keywords: &KeywordSet) -> ClassificationVerdict {
    let signals = Signals::extract(input, keywords);
    tracing::debug!(file = %input.file_name, ?signals, "Extracted anime signals");
    ClassificationVerdict::combine(input, &signals)
}
