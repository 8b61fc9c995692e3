//! Diagnostics produced while ingesting and assembling word files.
//!
//! Issues are values, not failures: a run always completes and hands back
//! every issue it found alongside whatever could be salvaged.

use thiserror::Error;

/// How seriously the host should treat an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// The kind of an issue, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    InvalidName,
    InvalidWord,
    EmptySource,
    DuplicatePropertyName,
    ReservedPropertyName,
}

impl IssueKind {
    /// Stable diagnostic identifier for this kind
    pub fn code(self) -> &'static str {
        match self {
            IssueKind::InvalidName => "FWDN-codegen-001",
            IssueKind::InvalidWord => "FWDN-codegen-002",
            IssueKind::EmptySource => "FWDN-codegen-003",
            IssueKind::DuplicatePropertyName => "FWDN-codegen-004",
            IssueKind::ReservedPropertyName => "FWDN-codegen-005",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            IssueKind::EmptySource => Severity::Warning,
            IssueKind::InvalidName
            | IssueKind::InvalidWord
            | IssueKind::DuplicatePropertyName
            | IssueKind::ReservedPropertyName => Severity::Error,
        }
    }
}

/// One rejected name or word, one empty source, or one unusable accessor name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ValidationIssue {
    /// The source name is not purely alphabetic.
    #[error("words file name contains non-alphabet characters: {name}")]
    InvalidName { name: String },

    /// A line of a source is not purely alphabetic.
    #[error("word contains non-alphabet characters: {word:?} (source: {source_name}, line {line})")]
    InvalidWord {
        word: String,
        source_name: String,
        /// Zero-based line index within the source text
        line: usize,
    },

    /// The source text is empty or blank.
    #[error("source file was empty: {source_name}")]
    EmptySource { source_name: String },

    /// Two accepted sources map to the same accessor name.
    #[error("property name {property_name} from {source_name} is already defined by {first_source}")]
    DuplicatePropertyName {
        property_name: String,
        source_name: String,
        first_source: String,
    },

    /// The accessor name is a Rust keyword and cannot be emitted.
    #[error("property name {property_name} from {source_name} is a reserved identifier")]
    ReservedPropertyName {
        property_name: String,
        source_name: String,
    },
}

impl ValidationIssue {
    pub fn kind(&self) -> IssueKind {
        match self {
            ValidationIssue::InvalidName { .. } => IssueKind::InvalidName,
            ValidationIssue::InvalidWord { .. } => IssueKind::InvalidWord,
            ValidationIssue::EmptySource { .. } => IssueKind::EmptySource,
            ValidationIssue::DuplicatePropertyName { .. } => IssueKind::DuplicatePropertyName,
            ValidationIssue::ReservedPropertyName { .. } => IssueKind::ReservedPropertyName,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    pub fn severity(&self) -> Severity {
        self.kind().severity()
    }

    /// Name of the source the issue belongs to
    pub fn source_name(&self) -> &str {
        match self {
            ValidationIssue::InvalidName { name } => name,
            ValidationIssue::InvalidWord { source_name, .. }
            | ValidationIssue::EmptySource { source_name }
            | ValidationIssue::DuplicatePropertyName { source_name, .. }
            | ValidationIssue::ReservedPropertyName { source_name, .. } => source_name,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}
