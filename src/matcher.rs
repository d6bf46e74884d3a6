//! Query matching for the template picker
//!
//! Both the query and the candidate text are lowercased and stripped of
//! whitespace before comparison. Matching is done with nucleo atoms, either
//! as a contiguous substring or as a fuzzy subsequence. Filtering keeps the
//! input order; there is no ranking.

use log::debug;
use nucleo::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo::{Config, Matcher, Utf32Str};
use serde::{Deserialize, Serialize};

/// How a query is compared against candidate text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Query characters appear in order, gaps allowed
    #[default]
    Fuzzy,
    /// Query appears as one contiguous run
    Substring,
}

impl MatchPolicy {
    const fn atom_kind(self) -> AtomKind {
        match self {
            Self::Fuzzy => AtomKind::Fuzzy,
            Self::Substring => AtomKind::Substring,
        }
    }
}

/// Lowercase and drop all whitespace
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Decides which candidates a query includes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateMatcher {
    policy: MatchPolicy,
}

impl TemplateMatcher {
    #[must_use]
    pub const fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    /// Does `query` match the candidate text?
    ///
    /// An empty query matches everything.
    #[must_use]
    pub fn matches(&self, query: &str, candidate: &str) -> bool {
        self.matches_any(query, &[candidate])
    }

    /// Does `query` match at least one of the candidate fields?
    #[must_use]
    pub fn matches_any<S: AsRef<str>>(&self, query: &str, fields: &[S]) -> bool {
        let needle = normalize(query);
        if needle.is_empty() {
            return true;
        }
        let atom = self.atom(&needle);
        let mut matcher = Matcher::new(Config::DEFAULT);
        let mut buf = Vec::new();
        fields
            .iter()
            .any(|field| Self::score(&atom, &mut matcher, &mut buf, field.as_ref()))
    }

    /// Indices of the candidates the query includes, in input order
    pub fn filter<'a, I, S>(&self, query: &str, candidates: I) -> Vec<usize>
    where
        I: IntoIterator<Item = &'a [S]>,
        S: AsRef<str> + 'a,
    {
        let needle = normalize(query);
        let atom = (!needle.is_empty()).then(|| self.atom(&needle));
        let mut matcher = Matcher::new(Config::DEFAULT);
        let mut buf = Vec::new();

        let indices: Vec<usize> = candidates
            .into_iter()
            .enumerate()
            .filter(|(_, fields)| {
                atom.as_ref().is_none_or(|atom| {
                    fields
                        .iter()
                        .any(|field| Self::score(atom, &mut matcher, &mut buf, field.as_ref()))
                })
            })
            .map(|(idx, _)| idx)
            .collect();

        debug!(
            "filter {:?} ({:?}) kept {} candidates",
            query,
            self.policy,
            indices.len()
        );
        indices
    }

    fn atom(&self, needle: &str) -> Atom {
        Atom::new(
            needle,
            CaseMatching::Ignore,
            Normalization::Smart,
            self.policy.atom_kind(),
            false,
        )
    }

    fn score(atom: &Atom, matcher: &mut Matcher, buf: &mut Vec<char>, field: &str) -> bool {
        let haystack = normalize(field);
        atom.score(Utf32Str::new(&haystack, buf), matcher).is_some()
    }
}
