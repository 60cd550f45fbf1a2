//! Fixed stopword set.
//!
//! Membership decides which terms are indexable, so the list is treated
//! as a versioned constant: any edit must bump [`STOPWORDS_VERSION`].

use lazy_static::lazy_static;
use std::collections::HashSet;

pub const STOPWORDS_VERSION: u32 = 1;

const WORDS: &[&str] = &[
    // articles, conjunctions, prepositions
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "from", "as", "into", "through", "during", "before",
    "after", "above", "below", "between", "under", "over", "out", "off",
    "up", "down", "about", "against", "among", "throughout", "despite",
    "towards", "upon", "within", "without", "according", "alongside",
    // pronouns
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
    "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "her", "hers", "herself", "it", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "these", "those", "there", "here", "where", "when", "why", "how",
    // common verbs
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "will", "would", "could", "should",
    "may", "might", "must", "shall", "can", "need", "dare", "ought", "used",
    "get", "gets", "got", "getting", "make", "makes", "made", "making",
    "go", "goes", "went", "gone", "going", "take", "takes", "took", "taken",
    "come", "comes", "came", "coming", "see", "sees", "saw", "seen", "seeing",
    "know", "knows", "knew", "known", "think", "thinks", "thought", "thinking",
    "want", "wants", "wanted", "give", "gives", "gave", "given", "find",
    "use", "uses", "using", "say", "says", "said",
    // quantifiers, determiners
    "all", "any", "both", "each", "every", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "just", "also", "even", "still", "already", "always",
    "never", "ever", "often", "usually", "sometimes", "again", "further",
    "then", "once", "much", "many", "another", "several", "enough",
    // generic nouns
    "thing", "things", "something", "nothing", "anything", "everything",
    "someone", "anyone", "everyone", "nobody", "people", "person", "way",
    "ways", "time", "times", "year", "years", "day", "days", "part", "parts",
    "place", "case", "cases", "point", "points", "fact", "facts", "example",
    "lot", "lots", "kind", "type", "number", "set", "different", "following",
    "note", "notes", "page", "section",
    // misc
    "however", "therefore", "thus", "hence", "although", "though", "while",
    "whereas", "whether", "because", "since", "unless", "until", "if",
    "well", "back", "like", "now", "new", "first", "last", "long", "great",
    "little", "good", "right", "big", "high", "small", "large", "next",
    "early", "young", "old", "important", "able", "bad", "etc", "eg", "ie",
    "via", "per", "based", "related", "include", "includes", "including",
];

lazy_static! {
    static ref STOPWORDS: HashSet<&'static str> = WORDS.iter().copied().collect();
}

/// Expects an already lowercased token.
pub fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

pub fn all() -> impl Iterator<Item = &'static str> { WORDS.iter().copied() }
