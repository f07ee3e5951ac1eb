//! Query filtering over raw zettel bodies.
//!
//! A query is a space-separated list of terms, all of which must hold:
//!
//! | Term | Holds when the body |
//! |------|---------------------|
//! | `rust` | contains "rust" in any case |
//! | `Rust` | contains "Rust" exactly |
//! | `!draft` | does not contain "draft" in any case |
//!
//! Terms are literal text, never patterns.

use regex::{Regex, RegexBuilder};

use crate::models::Zettel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Keep only zettels with exactly one tag
    pub unique: bool,
}

#[derive(Debug)]
struct Term {
    regex: Regex,
    negated: bool,
}

impl Term {
    fn parse(raw: &str) -> Option<Self> {
        let (negated, text) = match raw.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let case_insensitive = !text.chars().any(char::is_uppercase);
        // Escaped input always compiles; a failure would be a size limit.
        let regex = RegexBuilder::new(&regex::escape(text))
            .case_insensitive(case_insensitive)
            .build()
            .ok()?;
        Some(Self { regex, negated })
    }

    fn holds(&self, body: &str) -> bool {
        self.regex.is_match(body) != self.negated
    }
}

/// Indices of the zettels matching `query`, in display order.
///
/// Matches are ordered by first tag text (case-insensitive; untagged zettels
/// sort first) and then by how many `@` characters the body holds.
pub fn search(query: &str, zettels: &[Zettel], options: SearchOptions) -> Vec<usize> {
    let terms: Vec<Term> = query
        .split(' ')
        .filter(|raw| !raw.is_empty())
        .filter_map(Term::parse)
        .collect();

    let mut matches: Vec<usize> = zettels
        .iter()
        .enumerate()
        .filter(|(_, zettel)| terms.iter().all(|term| term.holds(&zettel.body)))
        .filter(|(_, zettel)| !options.unique || zettel.tags().len() == 1)
        .map(|(index, _)| index)
        .collect();

    matches.sort_by_cached_key(|&index| sort_key(&zettels[index]));
    log::debug!("query {query:?} matched {} zettels", matches.len());
    matches
}

fn sort_key(zettel: &Zettel) -> (String, usize) {
    let first_tag = zettel
        .tags()
        .into_iter()
        .next()
        .map(|tag| tag.text.to_lowercase())
        .unwrap_or_default();
    let markers = zettel.body.matches('@').count();
    (first_tag, markers)
}
