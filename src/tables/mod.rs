// 📚 Static tables - letters, number traits, tree-of-life paths, Hebrew signs
// All tables are immutable and shared process-wide

pub mod letters;
pub mod paths;
pub mod signs;
pub mod traits;

pub use letters::{gematria, letter, letter_meaning, letter_value, HebrewLetter, LETTERS};
pub use paths::{is_path_number, path_definition, PathDefinition, PATHS};
pub use signs::{hebrew_sign, HebrewSign, UNKNOWN_SIGN};
pub use traits::{number_trait, NumberTrait, NUMBER_TRAITS};
