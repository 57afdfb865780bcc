//! Per-field conversion diagnostics.
//!
//! Malformed payload data never aborts a conversion; each skipped field is
//! reported as a [`Diagnostic`] carrying the path to the offending value.

use std::fmt;

/// Non-fatal conversion condition codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// A payload value cannot be coerced to the field's declared type.
    InvalidType,
    /// A list- or map-typed field's payload value is not the right shape of
    /// container.
    MalformedCollection,
}

impl DiagnosticCode {
    pub fn name(self) -> &'static str {
        match self {
            Self::InvalidType => "INVALID_TYPE",
            Self::MalformedCollection => "MALFORMED_COLLECTION",
        }
    }
}

/// One step on the path from the payload root to a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// A non-fatal, per-field conversion report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub path: Vec<PathSegment>,
    pub detail: String,
}

impl Diagnostic {
    pub fn new(code: DiagnosticCode, path: Vec<PathSegment>, detail: impl Into<String>) -> Self {
        Self {
            code,
            path,
            detail: detail.into(),
        }
    }

    /// JSON-Pointer-style rendering of the path, e.g. `/DeleteJobs/1/Uuid`.
    /// The payload root renders as an empty string.
    pub fn pointer(&self) -> String {
        let mut out = String::new();
        for segment in &self.path {
            out.push('/');
            match segment {
                PathSegment::Key(k) => out.push_str(k),
                PathSegment::Index(i) => out.push_str(&i.to_string()),
            }
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {:?}: {}", self.code.name(), self.pointer(), self.detail)
    }
}
