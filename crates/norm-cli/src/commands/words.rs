//! Words command implementation.

use norm_core::Lang;
use text_normalizer::num_to_words;

/// Run the words command.
pub fn run(number: u64, lang: Lang) {
    println!("{}", num_to_words(number, lang));
}
