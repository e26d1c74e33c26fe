pub mod annotations;
pub mod builder;
pub mod entry;
pub mod error;
pub mod grouper;
pub mod highlight;
pub mod lookup;
pub mod markup;
pub mod preprocess;
pub mod render;
pub mod similarity;

pub use builder::{build_entry, resolve_headword};
pub use entry::{DictionaryEntry, DictionaryEntryItem, Direction};
pub use error::{FetchError, LookupError};
pub use highlight::{SynonymSet, highlight_synonyms};
pub use lookup::{Lookup, PageFetcher, SpellingCorrector};
pub use markup::{Document, NodeId, NodeRef};
pub use render::{RenderOptions, RenderedMessage, render};
pub use similarity::{delta, is_same_word, longest_common_substring, normalize};
