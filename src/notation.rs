//! Textual notation for permutations.
//!
//! Three forms are understood:
//!
//! * `e`, the identity.
//! * A product of cycles such as `(1 2 3)(4 5)`. Elements are 1-based positions, or labels when a
//!   label table is configured. The leftmost cycle acts first.
//! * A matrix literal such as `[231]`, listing the 1-based image of every position as a base-36
//!   digit. This is only available without a label table.
use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::Error;
use crate::perm::Perm;
use crate::El;

/// Digits available for matrix literals.
pub const MATRIX_RADIX: u32 = 36;

/// Name of the identity element.
pub const IDENTITY: &str = "e";

fn cycles_regex() -> &'static Regex {
    static CYCLES: OnceLock<Regex> = OnceLock::new();
    CYCLES.get_or_init(|| Regex::new(r"^\s*(\([^()]+\)\s*)+$").expect("valid regex"))
}

fn cycle_regex() -> &'static Regex {
    static CYCLE: OnceLock<Regex> = OnceLock::new();
    CYCLE.get_or_init(|| Regex::new(r"\(([^()]+)\)").expect("valid regex"))
}

/// How permutations of one degree are written and read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notation {
    labels: Option<Vec<String>>,
    prefer_matrix_below: usize,
}

impl Notation {
    /// Cycle notation with 1-based positions.
    pub fn new() -> Notation {
        Notation::default()
    }

    /// Cycle notation using one label per position.
    pub fn with_labels<I, S>(degree: usize, labels: I) -> Result<Notation, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != degree {
            return Err(Error::LabelCount {
                expected: degree,
                actual: labels.len(),
            });
        }
        let mut seen = HashSet::new();
        for label in labels.iter() {
            if label.is_empty()
                || label
                    .chars()
                    .any(|c| c.is_whitespace() || "()[]".contains(c))
            {
                return Err(Error::InvalidLabel(label.clone()));
            }
            if !seen.insert(label.as_str()) {
                return Err(Error::DuplicateLabel(label.clone()));
            }
        }
        Ok(Notation {
            labels: Some(labels),
            prefer_matrix_below: 0,
        })
    }

    /// Write unlabelled permutations of degree below `threshold` as matrix literals.
    ///
    /// The threshold is capped at [`MATRIX_RADIX`] since every image has to fit in one digit.
    pub fn prefer_matrix_below(mut self, threshold: usize) -> Notation {
        self.prefer_matrix_below = threshold.min(MATRIX_RADIX as usize);
        self
    }

    /// The label table, if any.
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    fn uses_matrix(&self, degree: usize) -> bool {
        self.labels.is_none() && degree < self.prefer_matrix_below
    }

    fn write_element(&self, out: &mut String, el: El) {
        match &self.labels {
            Some(labels) => out.push_str(&labels[el as usize]),
            None => out.push_str(&(el + 1).to_string()),
        }
    }

    /// Render a permutation.
    pub fn name(&self, perm: &Perm) -> String {
        if self.uses_matrix(perm.degree()) {
            let mut out = String::with_capacity(perm.degree() + 2);
            out.push('[');
            for &p_i in perm.as_slice() {
                out.extend(std::char::from_digit(p_i + 1, MATRIX_RADIX));
            }
            out.push(']');
            return out;
        }

        let mut out = String::new();
        for cycle in perm.cycles() {
            out.push('(');
            for (k, el) in cycle.enumerate() {
                if k > 0 {
                    out.push(' ');
                }
                self.write_element(&mut out, el);
            }
            out.push(')');
        }
        if out.is_empty() {
            out.push_str(IDENTITY);
        }
        out
    }

    /// Parse a permutation of the given degree.
    ///
    /// Returns None for malformed text, unknown elements and matrix literals that are not
    /// permutations.
    pub fn parse(&self, degree: usize, text: &str) -> Option<Perm> {
        let text = text.trim();
        if text == IDENTITY {
            return Some(Perm::identity(degree));
        }
        if let Some(inner) = text.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            return self.parse_matrix(degree, inner);
        }
        self.parse_cycles(degree, text)
    }

    fn parse_matrix(&self, degree: usize, inner: &str) -> Option<Perm> {
        if self.labels.is_some() {
            return None;
        }
        let images = inner
            .chars()
            .map(|c| match c.to_digit(MATRIX_RADIX) {
                Some(d) if d >= 1 => Some(d - 1),
                _ => None,
            })
            .collect::<Option<Vec<El>>>()?;
        if images.len() != degree {
            return None;
        }
        Perm::from_vec(images)
    }

    fn parse_cycles(&self, degree: usize, text: &str) -> Option<Perm> {
        if !cycles_regex().is_match(text) {
            return None;
        }
        let mut cycles = vec![];
        for captures in cycle_regex().captures_iter(text) {
            let cycle = captures[1]
                .split_whitespace()
                .map(|token| self.resolve(degree, token))
                .collect::<Option<Vec<El>>>()?;
            if cycle.is_empty() {
                return None;
            }
            cycles.push(cycle);
        }
        Perm::from_cycles(degree, &cycles)
    }

    fn resolve(&self, degree: usize, token: &str) -> Option<El> {
        match &self.labels {
            Some(labels) => labels.iter().position(|l| l == token).map(|i| i as El),
            None => {
                if !token.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                let position: usize = token.parse().ok()?;
                if position == 0 || position > degree {
                    return None;
                }
                Some((position - 1) as El)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled() -> Notation {
        Notation::with_labels(5, vec!["A", "B", "C", "D", "E"]).unwrap()
    }

    #[test]
    fn identity() {
        assert_eq!(Notation::new().name(&Perm::identity(4)), "e");
        assert_eq!(Notation::new().parse(4, "e"), Some(Perm::identity(4)));
        assert_eq!(labelled().name(&Perm::identity(5)), "e");
    }

    #[test]
    fn cycles_one_based() {
        let notation = Notation::new();
        let perm = Perm::from_vec(vec![2, 3, 1, 0, 5, 4]).unwrap();
        assert_eq!(notation.name(&perm), "(1 3 2 4)(5 6)");
        assert_eq!(notation.parse(6, "(1 3 2 4)(5 6)"), Some(perm.clone()));
        assert_eq!(notation.parse(6, "  (5 6) (1 3 2 4) "), Some(perm));
    }

    #[test]
    fn large_positions() {
        let notation = Notation::new();
        let perm = Perm::from_cycles(12, &[vec![0u32, 9, 11]]).unwrap();
        assert_eq!(notation.name(&perm), "(1 10 12)");
        assert_eq!(notation.parse(12, "(1 10 12)"), Some(perm));
    }

    #[test]
    fn cycles_with_labels() {
        let notation = labelled();
        let perm = notation.parse(5, "(A C)(B E D)").unwrap();
        assert_eq!(perm.as_slice(), &[2, 4, 0, 1, 3]);
        assert_eq!(notation.name(&perm), "(A C)(B E D)");
        assert_eq!(notation.parse(5, "(A F)"), None);
        assert_eq!(notation.parse(5, "(1 2)"), None);
    }

    #[test]
    fn malformed_cycles() {
        let notation = Notation::new();
        for text in &[
            "", "(", "(1 2", "1 2)", "((1 2))", "(1 (2))", "()", "( )", "(1 2)x", "(0 1)",
            "(1 7)", "(1 1)", "(+1 2)", "(1,2)",
        ] {
            assert_eq!(notation.parse(6, text), None, "{:?}", text);
        }
    }

    #[test]
    fn matrix_literals() {
        let notation = Notation::new().prefer_matrix_below(8);
        let perm = Perm::from_vec(vec![1, 2, 0]).unwrap();
        assert_eq!(notation.name(&perm), "[231]");
        assert_eq!(notation.name(&Perm::identity(3)), "[123]");
        assert_eq!(notation.parse(3, "[231]"), Some(perm));
        assert_eq!(notation.parse(3, "[23]"), None);
        assert_eq!(notation.parse(3, "[221]"), None);
        assert_eq!(notation.parse(3, "[234]"), None);
        assert_eq!(notation.parse(3, "[031]"), None);

        // Matrix literals are accepted even when not preferred for output.
        assert_eq!(Notation::new().parse(3, "[132]"), Notation::new().parse(3, "(2 3)"));
        assert_eq!(labelled().parse(5, "[12345]"), None);
    }

    #[test]
    fn base36_digits() {
        let notation = Notation::new().prefer_matrix_below(100);
        let mut images = (0..12).collect::<Vec<El>>();
        images.swap(9, 11);
        let perm = Perm::from_vec(images).unwrap();
        assert_eq!(notation.name(&perm), "[123456789cba]");
        assert_eq!(notation.parse(12, "[123456789CBA]"), Some(perm));

        // Degree 36 does not fit in single digits and falls back to cycles.
        assert_eq!(notation.name(&Perm::identity(36)), "e");
    }

    #[test]
    fn invalid_labels() {
        assert_eq!(
            Notation::with_labels(3, vec!["A", "B"]),
            Err(Error::LabelCount {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            Notation::with_labels(2, vec!["A", "A"]),
            Err(Error::DuplicateLabel("A".to_string()))
        );
        assert_eq!(
            Notation::with_labels(2, vec!["A", "B C"]),
            Err(Error::InvalidLabel("B C".to_string()))
        );
        assert_eq!(
            Notation::with_labels(2, vec!["A", ""]),
            Err(Error::InvalidLabel("".to_string()))
        );
    }
}
