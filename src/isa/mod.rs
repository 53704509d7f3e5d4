//! Architecture string pipeline: version reader, phase-driven parser, ordered subset set.
//!
//! Parsing is a pure function of the input string and the static implication table, so
//! separate calls never share state and may run on different threads.

pub mod diagnostic;
pub mod error;
pub mod flags;
pub mod parser;
pub mod subset;

pub use diagnostic::{ArchDiagnostic, ArgSpan, DiagnosticLevel};
pub use error::{ArchError, ArchErrorKind, ArchOrigin};
pub use flags::{ArchFlags, EXTENSION_FLAGS};
pub use parser::Parser;
pub use subset::{
    ExtensionGroup, IMPLIED_SUBSETS, STANDARD_EXTENSIONS, Subset, SubsetList, single_letter_rank,
    subset_order,
};

/// Parses `arch` as if it came straight from an API caller.
pub fn parse(arch: &str) -> Result<SubsetList, ArchError> {
    Parser::new(arch, ArchOrigin::Direct).parse()
}

/// Renders `list` in canonical form; see [`SubsetList::to_arch_string`].
pub fn render(list: &SubsetList, versions: bool) -> String {
    list.to_arch_string(versions)
}

/// Parses `arch` and renders it back without versions, spelling out implied extensions.
pub fn expand(arch: &str) -> Result<String, ArchError> {
    parse(arch).map(|list| list.to_arch_string(false))
}
