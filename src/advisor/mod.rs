/// Advisor module
///
/// Finds the snaps that provide a command that wasn't found, either under
/// the exact name typed or under a name one typo away.

pub mod candidates;
pub mod finder;
pub mod lookup;

pub use candidates::similar_words;
pub use finder::{Finder, NotImplementedFinder, SqliteFinder, Suggestion};
pub use lookup::{Advice, Advisor, RestoreFinder, MAX_FUZZY_LEN, MIN_FUZZY_LEN};
