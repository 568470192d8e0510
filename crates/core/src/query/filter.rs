//! Filter compiler: raw query keys to a substring-match predicate.

use super::{QueryField, QueryParams};

/// `field LIKE '%needle%'`, case-sensitive, with the needle matched literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contains<F> {
    pub field: F,
    pub needle: String,
}

impl<F> Contains<F> {
    /// The bound value for a `LIKE ... ESCAPE '\'` comparison.
    ///
    /// `%`, `_` and `\` in the needle are escaped so they match themselves.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.needle.len() + 2);
        pattern.push('%');
        for c in self.needle.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

/// A conjunction of [`Contains`] clauses. No clauses means match-all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate<F> {
    clauses: Vec<Contains<F>>,
}

impl<F> Predicate<F> {
    pub fn clauses(&self) -> &[Contains<F>] {
        &self.clauses
    }

    pub fn is_match_all(&self) -> bool {
        self.clauses.is_empty()
    }

    /// True when some needle contains a NUL character. No stored text can
    /// contain one, so such a predicate matches no rows.
    pub fn is_match_none(&self) -> bool {
        self.clauses.iter().any(|c| c.needle.contains('\0'))
    }
}

impl<F> Default for Predicate<F> {
    fn default() -> Self {
        Self {
            clauses: Vec::new(),
        }
    }
}

/// Compile raw query parameters into a predicate.
///
/// Only keys present in `allow` survive; everything else is dropped without
/// error. Clauses are emitted in allow-list order so the generated SQL is
/// stable regardless of parameter order. Blank values are skipped.
pub fn compile<F: QueryField>(params: &QueryParams, allow: &[(&str, F)]) -> Predicate<F> {
    let clauses = allow
        .iter()
        .filter_map(|(key, field)| {
            let needle = params.get(*key)?;
            if needle.is_empty() {
                return None;
            }
            Some(Contains {
                field: *field,
                needle: needle.clone(),
            })
        })
        .collect();

    Predicate { clauses }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
