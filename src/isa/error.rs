use std::fmt;

use super::diagnostic::{ArchDiagnostic, ArgSpan, DiagnosticLevel};
use super::subset::ExtensionGroup;

/// Where an architecture string came from; only affects how errors are worded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArchOrigin {
    /// Passed straight to [`crate::isa::parse`].
    Direct,
    /// The value of a `-march=` option.
    March,
    /// The default architecture of the named CPU.
    Cpu(String),
}

/// Reason an architecture string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArchErrorKind {
    /// Missing `rv32` / `rv64` prefix.
    MalformedBase,
    /// First subset after the base is not `e`, `i` or `g`.
    InvalidBaseLetter,
    /// `e` base combined with a width other than 32.
    IncompatibleBaseWidth { xlen: u32 },
    UnknownExtension(char),
    OutOfCanonicalOrder(char),
    /// A `p` inside a multi-letter version with no digit after it.
    MissingVersionDigits { major: u32 },
    VersionOutOfRange,
    MultiLetterNameTooShort(ExtensionGroup),
    MissingGroupSeparator(ExtensionGroup),
    DuplicateExtension(String),
    /// `e`, `i` or `g` added to a set that already has members.
    BaseNotFirst(String),
    TrailingGarbage(String),
    /// An empty name handed to [`crate::isa::SubsetList::add`].
    EmptyName,
}

impl ArchErrorKind {
    /// Stable identifier used by [`ArchDiagnostic`].
    pub fn code(&self) -> &'static str {
        match self {
            ArchErrorKind::MalformedBase => "arch::base",
            ArchErrorKind::InvalidBaseLetter => "arch::base-letter",
            ArchErrorKind::IncompatibleBaseWidth { .. } => "arch::base-width",
            ArchErrorKind::UnknownExtension(_) => "arch::unknown-extension",
            ArchErrorKind::OutOfCanonicalOrder(_) => "arch::canonical-order",
            ArchErrorKind::MissingVersionDigits { .. } => "arch::version-digits",
            ArchErrorKind::VersionOutOfRange => "arch::version-range",
            ArchErrorKind::MultiLetterNameTooShort(_) => "arch::name-too-short",
            ArchErrorKind::MissingGroupSeparator(_) => "arch::separator",
            ArchErrorKind::DuplicateExtension(_) => "arch::duplicate",
            ArchErrorKind::BaseNotFirst(_) => "arch::base-not-first",
            ArchErrorKind::TrailingGarbage(_) => "arch::trailing",
            ArchErrorKind::EmptyName => "arch::empty-name",
        }
    }
}

impl fmt::Display for ArchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchErrorKind::MalformedBase => write!(f, "ISA string must begin with rv32 or rv64"),
            ArchErrorKind::InvalidBaseLetter => {
                write!(f, "first ISA subset must be 'e', 'i' or 'g'")
            }
            ArchErrorKind::IncompatibleBaseWidth { xlen } => {
                write!(f, "rv{xlen}e is not a valid base ISA")
            }
            ArchErrorKind::UnknownExtension(ext) => write!(f, "unsupported ISA subset '{ext}'"),
            ArchErrorKind::OutOfCanonicalOrder(ext) => {
                write!(f, "ISA string is not in canonical order. '{ext}'")
            }
            ArchErrorKind::MissingVersionDigits { major } => {
                write!(f, "expect number after '{major}p'")
            }
            ArchErrorKind::VersionOutOfRange => write!(f, "version number is too large"),
            ArchErrorKind::MultiLetterNameTooShort(group) => {
                write!(f, "name of {} must be more than 1 letter", group.description())
            }
            ArchErrorKind::MissingGroupSeparator(group) => {
                write!(f, "{} must separate with _", group.description())
            }
            ArchErrorKind::DuplicateExtension(name) => {
                write!(f, "ISA subset '{name}' appears more than once")
            }
            ArchErrorKind::BaseNotFirst(name) => {
                write!(f, "'{name}' may only be the first ISA subset")
            }
            ArchErrorKind::TrailingGarbage(rest) => {
                write!(f, "unexpected ISA string at end: '{rest}'")
            }
            ArchErrorKind::EmptyName => write!(f, "ISA subset name is empty"),
        }
    }
}

/// A rejected architecture string together with the byte offset of the offending text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchError {
    pub arch: String,
    pub origin: ArchOrigin,
    pub offset: usize,
    pub kind: ArchErrorKind,
}

impl ArchError {
    pub fn new(
        arch: impl Into<String>,
        origin: ArchOrigin,
        offset: usize,
        kind: ArchErrorKind,
    ) -> Self {
        Self {
            arch: arch.into(),
            origin,
            offset,
            kind,
        }
    }

    /// Remainder of the input starting at the offending position.
    pub fn fragment(&self) -> &str {
        self.arch.get(self.offset..).unwrap_or("")
    }

    pub fn to_diagnostic(&self) -> ArchDiagnostic {
        let end = match &self.kind {
            ArchErrorKind::TrailingGarbage(rest) => self.offset + rest.len(),
            _ => (self.offset + 1).min(self.arch.len()),
        };
        ArchDiagnostic::new(
            DiagnosticLevel::Error,
            self.kind.code(),
            self.to_string(),
            Some(ArgSpan::new(self.offset, end.max(self.offset))),
        )
    }
}

impl fmt::Display for ArchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.origin {
            ArchOrigin::Cpu(cpu) => write!(f, "-mcpu={cpu}: -march={}: {}", self.arch, self.kind),
            ArchOrigin::March | ArchOrigin::Direct => {
                write!(f, "-march={}: {}", self.arch, self.kind)
            }
        }
    }
}

impl std::error::Error for ArchError {}
