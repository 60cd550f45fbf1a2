use crate::stopwords::is_stopword;
use crate::{ExtractedDocument, TokenizedDocument};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"[a-z][a-z0-9]*").expect("valid regex");
}

const MIN_TOKEN_LEN: usize = 3;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tokens {
    pub unigrams: Vec<String>,
    pub bigrams: Vec<String>,
}

fn keep(token: &str) -> bool {
    token.len() >= MIN_TOKEN_LEN
        && !is_stopword(token)
        && !token.bytes().all(|b| b.is_ascii_digit())
}

/// Tokenize clean text into lowercase unigrams and bigrams.
///
/// Bigrams pair neighbours in the *filtered* sequence, so a dropped word
/// never appears inside one even when it sat between two kept words.
pub fn tokenize(text: &str) -> Tokens {
    let lowered = text.to_lowercase();
    let unigrams: Vec<String> = WORD
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| keep(w))
        .map(str::to_owned)
        .collect();
    let bigrams = unigrams.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])).collect();
    Tokens { unigrams, bigrams }
}

pub fn tokenize_document(doc: ExtractedDocument) -> TokenizedDocument {
    let Tokens { unigrams, bigrams } = tokenize(&doc.clean_text);
    TokenizedDocument { id: doc.id, display_name: doc.display_name, unigrams, bigrams }
}
