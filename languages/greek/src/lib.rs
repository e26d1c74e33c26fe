//! Greek <-> English dictionary support

mod annotations;
mod greeklish;
mod speller;

pub use annotations::{ENGLISH_ANNOTATIONS, GREEK_ANNOTATIONS, LATIN_CEILING, greek_english};
pub use greeklish::greeklish_to_greek;
pub use speller::GreekSpeller;
