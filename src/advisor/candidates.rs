/// Near-miss generator for misspelled command names
///
/// Every word returned is exactly one edit away from the input: one char
/// deleted, two neighbours swapped, one char replaced or one char inserted.
/// Nothing further than that, so the number of lookups stays bounded.

use std::collections::HashSet;

/// Characters that can legally appear in a command name.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz-_0123456789";

/// Upper bound on how many candidates `similar_words` can return for a
/// word of `len` chars (before duplicates collapse).
pub fn max_candidates(len: usize) -> usize {
    let alphabet = ALPHABET.len();
    len + len.saturating_sub(1) + len * alphabet + (len + 1) * alphabet
}

/// Generate all words one edit away from `word`.
///
/// The result holds no duplicates. Order is the order each word was first
/// produced in (deletes, transposes, replaces, inserts), which keeps
/// downstream lookups deterministic. The input is taken as-is: no trimming
/// or lowercasing. It may show up in its own result, e.g. when a char is
/// replaced by itself.
pub fn similar_words(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut words = Candidates::with_capacity(max_candidates(chars.len()));

    // deletes
    for i in 0..chars.len() {
        words.push(splice(&chars, i, 1, None));
    }

    // transposes
    for i in 0..chars.len().saturating_sub(1) {
        let mut swapped = chars.clone();
        swapped.swap(i, i + 1);
        words.push(swapped.into_iter().collect());
    }

    // replaces
    for i in 0..chars.len() {
        for c in ALPHABET.chars() {
            words.push(splice(&chars, i, 1, Some(c)));
        }
    }

    // inserts
    for i in 0..=chars.len() {
        for c in ALPHABET.chars() {
            words.push(splice(&chars, i, 0, Some(c)));
        }
    }

    words.into_vec()
}

/// Rebuild `chars` with `remove` chars dropped at `at` and `insert` put there.
fn splice(chars: &[char], at: usize, remove: usize, insert: Option<char>) -> String {
    let mut out = String::with_capacity(chars.len() + 1);
    out.extend(&chars[..at]);
    out.extend(insert);
    out.extend(&chars[at + remove..]);
    out
}

/// Insertion-ordered set of generated words.
struct Candidates {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl Candidates {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
            ordered: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, word: String) {
        if self.seen.insert(word.clone()) {
            self.ordered.push(word);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}
