/// Replaces denylisted words in chirp bodies with a fixed mask.
///
/// Matching is case-insensitive but whole-token only: tokens are whatever
/// sits between single ASCII spaces, so punctuation stuck to a word defeats
/// the match and tabs/newlines never split. Non-matching tokens pass through
/// byte-for-byte, and runs of consecutive spaces survive the split/join
/// round-trip unchanged.
pub struct Censor {
    denylist: Vec<String>,
}

impl Censor {
    pub fn new(words: &[&str]) -> Self {
        Censor {
            denylist: words.iter().map(|w| w.to_uppercase()).collect(),
        }
    }

    pub fn clean(&self, input: &str) -> String {
        let mut tokens: Vec<&str> = input.split(' ').collect();
        for token in tokens.iter_mut() {
            let upper = token.to_uppercase();
            if self.denylist.iter().any(|bad| *bad == upper) {
                *token = "****";
            }
        }
        tokens.join(" ")
    }
}

impl Default for Censor {
    fn default() -> Self {
        Censor::new(&["kerfuffle", "sharbert", "fornax"])
    }
}
