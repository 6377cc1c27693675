use std::iter::Enumerate;
use std::str::Lines;

use thiserror::Error;

/// One `key = value` line together with the section it appeared under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    /// 1-based line number of the `key = value` line.
    pub line: u32,
    /// Name of the enclosing section; `""` before the first header.
    pub section: &'a str,
    pub key: &'a str,
    pub value: &'a str,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct SyntaxError {
    pub line: u32,
    pub kind: SyntaxErrorKind,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A `[` header line without a closing `]`.
    #[error("unterminated section header")]
    UnterminatedSection,
    /// A non-comment line without a `=` separator.
    #[error("expected `key = value`")]
    MissingSeparator,
    /// A `=` line with nothing before the separator.
    #[error("empty key")]
    EmptyKey,
}

/// Iterator over the entries of a pad definition.
///
/// Blank lines and lines starting with `;` or `#` are skipped. Section
/// headers update the section carried by subsequent entries; text after the
/// closing `]` is ignored. Keys and values are trimmed, values may be empty,
/// and no quote or escape processing is applied. The first syntax error ends
/// the stream.
pub struct Scanner<'a> {
    lines: Enumerate<Lines<'a>>,
    section: &'a str,
    failed: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);
        Self {
            lines: input.lines().enumerate(),
            section: "",
            failed: false,
        }
    }

    fn fail(&mut self, line: u32, kind: SyntaxErrorKind) -> Option<<Self as Iterator>::Item> {
        self.failed = true;
        Some(Err(SyntaxError { line, kind }))
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Entry<'a>, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        for (index, raw) in self.lines.by_ref() {
            let line = index as u32 + 1;
            let text = raw.trim();
            if text.is_empty() || text.starts_with(';') || text.starts_with('#') {
                continue;
            }

            if let Some(rest) = text.strip_prefix('[') {
                let Some(end) = rest.find(']') else {
                    return self.fail(line, SyntaxErrorKind::UnterminatedSection);
                };
                self.section = rest[..end].trim();
                continue;
            }

            let Some((key, value)) = text.split_once('=') else {
                return self.fail(line, SyntaxErrorKind::MissingSeparator);
            };
            let key = key.trim();
            if key.is_empty() {
                return self.fail(line, SyntaxErrorKind::EmptyKey);
            }

            return Some(Ok(Entry {
                line,
                section: self.section,
                key,
                value: value.trim(),
            }));
        }

        None
    }
}
