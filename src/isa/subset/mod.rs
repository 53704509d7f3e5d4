//! Ordered, versioned set of ISA subsets produced by the parser.
//!
//! The set is kept in canonical order at all times: [`SubsetList::add`] finds the slot with
//! [`subset_order`] instead of appending, so implied subsets discovered after parsing land
//! in the same place they would have if written by hand.

mod implied;
mod order;

use std::cmp::Ordering;
use std::fmt;

use log::trace;
use smallvec::SmallVec;

use super::error::ArchErrorKind;

pub use implied::{IMPLIED_SUBSETS, implied_by};
pub use order::{ExtensionGroup, STANDARD_EXTENSIONS, single_letter_rank, subset_order};

/// One named extension with its version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subset {
    pub name: String,
    pub major_version: u32,
    pub minor_version: u32,
    /// Version was written in the source string rather than defaulted.
    pub explicit_version: bool,
}

impl Subset {
    pub fn new(
        name: impl Into<String>,
        major_version: u32,
        minor_version: u32,
        explicit_version: bool,
    ) -> Self {
        Self {
            name: name.into(),
            major_version,
            minor_version,
            explicit_version,
        }
    }

    pub fn is_single_letter(&self) -> bool {
        self.name.chars().nth(1).is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubsetList {
    xlen: u32,
    subsets: SmallVec<[Subset; 16]>,
}

impl SubsetList {
    pub fn new(xlen: u32) -> Self {
        Self {
            xlen,
            subsets: SmallVec::new(),
        }
    }

    pub fn xlen(&self) -> u32 {
        self.xlen
    }

    pub fn len(&self) -> usize {
        self.subsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Subset> {
        self.subsets.iter()
    }

    /// Subset names in list order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.subsets.iter().map(|subset| subset.name.as_str())
    }

    /// Inserts a subset at its canonical position.
    ///
    /// Names must be non-empty. `e`, `i` and `g` are only accepted into an empty set, and a
    /// name already present (ignoring case) is rejected.
    pub fn add(
        &mut self,
        name: &str,
        major_version: u32,
        minor_version: u32,
        explicit_version: bool,
    ) -> Result<(), ArchErrorKind> {
        if name.is_empty() {
            return Err(ArchErrorKind::EmptyName);
        }
        if !self.subsets.is_empty() && matches!(name, "e" | "i" | "g") {
            return Err(ArchErrorKind::BaseNotFirst(name.to_string()));
        }
        if self.lookup(name).is_some() {
            return Err(ArchErrorKind::DuplicateExtension(name.to_string()));
        }
        self.insert_sorted(Subset::new(
            name,
            major_version,
            minor_version,
            explicit_version,
        ));
        Ok(())
    }

    /// Returns the index the subset landed at.
    fn insert_sorted(&mut self, subset: Subset) -> usize {
        let index = self
            .subsets
            .iter()
            .position(|existing| subset_order(&subset.name, &existing.name) == Ordering::Less)
            .unwrap_or(self.subsets.len());
        trace!(
            "insert subset {}{}p{} at {index}",
            subset.name, subset.major_version, subset.minor_version
        );
        self.subsets.insert(index, subset);
        index
    }

    /// Case-insensitive lookup ignoring versions.
    pub fn lookup(&self, name: &str) -> Option<&Subset> {
        self.subsets
            .iter()
            .find(|subset| subset.name.eq_ignore_ascii_case(name))
    }

    /// Case-insensitive lookup; each supplied version component must match exactly.
    pub fn lookup_version(
        &self,
        name: &str,
        major_version: Option<u32>,
        minor_version: Option<u32>,
    ) -> Option<&Subset> {
        let subset = self.lookup(name)?;
        if major_version.is_some_and(|major| major != subset.major_version) {
            return None;
        }
        if minor_version.is_some_and(|minor| minor != subset.minor_version) {
            return None;
        }
        Some(subset)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Adds every subset implied by a member that is not already present. Implied subsets
    /// inherit the trigger's version and explicitness.
    ///
    /// The walk runs over the live list, so a subset added ahead of the cursor is itself
    /// visited and expanded (`k` -> `zkn` -> `zkne`, ...).
    pub fn apply_implied(&mut self) {
        let mut cursor = 0;
        while cursor < self.subsets.len() {
            let trigger = self.subsets[cursor].clone();
            for implied in implied_by(&trigger.name) {
                if self.contains(implied) {
                    continue;
                }
                trace!("{} implies {implied}", trigger.name);
                let index = self.insert_sorted(Subset::new(
                    implied,
                    trigger.major_version,
                    trigger.minor_version,
                    trigger.explicit_version,
                ));
                if index <= cursor {
                    cursor += 1;
                }
            }
            cursor += 1;
        }
    }

    /// Renders `rv<xlen>` followed by every subset in order.
    ///
    /// With `versions` unset, defaulted single letters run together (`rv64imafdc`); explicitly
    /// versioned and multi-letter subsets always get their own `_` segment.
    pub fn to_arch_string(&self, versions: bool) -> String {
        let mut out = format!("rv{}", self.xlen);
        for (index, subset) in self.subsets.iter().enumerate() {
            let versioned = versions || subset.explicit_version;
            if index > 0 && (versioned || !subset.is_single_letter()) {
                out.push('_');
            }
            out.push_str(&subset.name);
            if versioned {
                out.push_str(&format!("{}p{}", subset.major_version, subset.minor_version));
            }
        }
        out
    }

    /// Same width and the same names and versions in the same order. Explicitness is ignored,
    /// so a set equals the reparse of its own versioned rendering.
    pub fn same_extensions(&self, other: &SubsetList) -> bool {
        self.xlen == other.xlen
            && self.subsets.len() == other.subsets.len()
            && self.subsets.iter().zip(&other.subsets).all(|(a, b)| {
                a.name.eq_ignore_ascii_case(&b.name)
                    && a.major_version == b.major_version
                    && a.minor_version == b.minor_version
            })
    }
}

impl fmt::Display for SubsetList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_arch_string(true))
    }
}

impl<'a> IntoIterator for &'a SubsetList {
    type Item = &'a Subset;
    type IntoIter = std::slice::Iter<'a, Subset>;

    fn into_iter(self) -> Self::IntoIter {
        self.subsets.iter()
    }
}
