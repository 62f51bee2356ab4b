//! Frequency-based keyword ranking for page text.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Default number of keywords returned by [`extract_keywords`].
pub const DEFAULT_MAX_FEATURES: usize = 20;

/// English stop words longer than three characters. Shorter words are
/// dropped before this list is consulted.
const STOP_WORDS: &[&str] = &[
    "about", "above", "across", "after", "afterwards", "again", "against", "almost", "alone",
    "along", "already", "also", "although", "always", "among", "amongst", "amoungst", "amount",
    "another", "anyhow", "anyone", "anything", "anyway", "anywhere", "around", "back", "became",
    "because", "become", "becomes", "becoming", "been", "before", "beforehand", "behind", "being",
    "below", "beside", "besides", "between", "beyond", "bill", "both", "bottom", "call", "cannot",
    "cant", "computer", "could", "couldnt", "describe", "detail", "done", "down", "during", "each",
    "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "even", "ever", "every",
    "everyone", "everything", "everywhere", "except", "fifteen", "fifty", "fify", "fill", "find",
    "fire", "first", "five", "former", "formerly", "forty", "found", "four", "from", "front",
    "full", "further", "give", "hasnt", "have", "hence", "here", "hereafter", "hereby", "herein",
    "hereupon", "hers", "herself", "himself", "however", "hundred", "indeed", "interest", "into",
    "itself", "keep", "last", "latter", "latterly", "least", "less", "made", "many", "meanwhile",
    "might", "mill", "mine", "more", "moreover", "most", "mostly", "move", "much", "must", "myself",
    "name", "namely", "neither", "never", "nevertheless", "next", "nine", "nobody", "none", "noone",
    "nothing", "nowhere", "often", "once", "only", "onto", "other", "others", "otherwise", "ours",
    "ourselves", "over", "part", "perhaps", "please", "rather", "same", "seem", "seemed", "seeming",
    "seems", "serious", "several", "should", "show", "side", "since", "sincere", "sixty", "some",
    "somehow", "someone", "something", "sometime", "sometimes", "somewhere", "still", "such",
    "system", "take", "than", "that", "their", "them", "themselves", "then", "thence", "there",
    "thereafter", "thereby", "therefore", "therein", "thereupon", "these", "they", "thick", "thin",
    "third", "this", "those", "though", "three", "through", "throughout", "thru", "thus",
    "together", "towards", "twelve", "twenty", "under", "until", "upon", "very", "well", "were",
    "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas", "whereby",
    "wherein", "whereupon", "wherever", "whether", "which", "while", "whither", "whoever", "whole",
    "whom", "whose", "will", "with", "within", "without", "would", "your", "yours", "yourself",
    "yourselves",
];

fn non_word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s]").expect("static regex"))
}

/// Rank the most frequent content words of `text`.
///
/// Text is lowercased and stripped of punctuation; words of three
/// characters or fewer and English stop words are ignored. Ties are broken
/// alphabetically. At most `max_features` words are returned.
pub fn extract_keywords(text: &str, max_features: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = non_word().replace_all(&lowered, " ");

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in cleaned.split_whitespace() {
        if word.chars().count() > 3 && !STOP_WORDS.contains(&word) {
            *counts.entry(word).or_default() += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    ranked
        .into_iter()
        .take(max_features)
        .map(|(word, _)| word.to_string())
        .collect()
}
