//! Keyword-density extractor.

use clipsmith_models::{SignalSample, TimedWord};

/// Punctuation stripped from word edges before matching.
const EDGE_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '"', '\''];

/// Score transcript regions where trigger keywords cluster.
///
/// Matching is case-insensitive and whole-word: "wait" matches "Wait," but
/// not "waiting". Multi-word phrases in the keyword list ("no way",
/// "wait for it") match runs of consecutive words. For every matched word a
/// sample is emitted at that word's start time whose value is the number of
/// matched words within `window` seconds either side of it.
///
/// No matches at all yields an empty signal so fusion treats the keyword
/// channel as absent rather than uniformly cold.
pub fn keyword_density(
    words: &[TimedWord],
    keywords: &[String],
    window: f64,
) -> Vec<SignalSample> {
    if words.is_empty() || keywords.is_empty() {
        return Vec::new();
    }

    let tokens: Vec<String> = words.iter().map(|w| normalize_token(&w.text)).collect();
    let phrases: Vec<Vec<String>> = keywords
        .iter()
        .map(|k| {
            k.split_whitespace()
                .map(normalize_token)
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
        })
        .filter(|p| !p.is_empty())
        .collect();

    let mut matched = vec![false; words.len()];
    for phrase in &phrases {
        if phrase.len() == 1 {
            for (i, token) in tokens.iter().enumerate() {
                if token == &phrase[0] {
                    matched[i] = true;
                }
            }
        } else if tokens.len() >= phrase.len() {
            for i in 0..=(tokens.len() - phrase.len()) {
                if tokens[i..i + phrase.len()] == phrase[..] {
                    for slot in &mut matched[i..i + phrase.len()] {
                        *slot = true;
                    }
                }
            }
        }
    }

    words
        .iter()
        .enumerate()
        .filter(|(i, _)| matched[*i])
        .map(|(_, word)| {
            let hits = words
                .iter()
                .zip(&matched)
                .filter(|(other, hit)| **hit && (other.start - word.start).abs() <= window)
                .count();
            SignalSample::new(word.start, hits as f64)
        })
        .collect()
}

fn normalize_token(text: &str) -> String {
    text.trim()
        .trim_matches(|c: char| EDGE_PUNCTUATION.contains(&c))
        .to_lowercase()
}
