//! Phase-driven parser that turns an architecture string into a [`SubsetList`].
//!
//! Phases run strictly in order with no backtracking: base width, the standard single-letter
//! run, then the supervisor, hypervisor, sub-extension and non-standard groups. Whatever is
//! left afterwards is an error. Implied subsets are added once the whole string is accepted.

mod multiletter;
mod standard;
mod version;

use log::debug;

use super::error::{ArchError, ArchErrorKind, ArchOrigin};
use super::subset::{ExtensionGroup, SubsetList};

pub use version::{Version, read_version};

pub struct Parser<'src> {
    arch: &'src str,
    origin: ArchOrigin,
    offset: usize,
    list: SubsetList,
}

impl<'src> Parser<'src> {
    pub fn new(arch: &'src str, origin: ArchOrigin) -> Self {
        Self {
            arch,
            origin,
            offset: 0,
            list: SubsetList::default(),
        }
    }

    /// Runs every phase; on failure the partially built set is dropped.
    pub fn parse(mut self) -> Result<SubsetList, ArchError> {
        debug!("parsing architecture string {:?}", self.arch);
        match self.parse_phases() {
            Ok(()) => {
                debug!(
                    "parsed {:?} into {}",
                    self.arch,
                    self.list.to_arch_string(true)
                );
                Ok(self.list)
            }
            Err(err) => {
                debug!("rejected architecture string: {err}");
                Err(err)
            }
        }
    }

    fn parse_phases(&mut self) -> Result<(), ArchError> {
        self.parse_base()?;
        self.parse_standard()?;
        for group in ExtensionGroup::ALL {
            self.parse_multiletter(group)?;
        }
        let rest = self.rest();
        if !rest.is_empty() {
            return Err(self.error(ArchErrorKind::TrailingGarbage(rest.to_string())));
        }
        self.list.apply_implied();
        Ok(())
    }

    fn parse_base(&mut self) -> Result<(), ArchError> {
        let xlen = if self.arch.starts_with("rv32") {
            32
        } else if self.arch.starts_with("rv64") {
            64
        } else {
            return Err(self.error(ArchErrorKind::MalformedBase));
        };
        self.list = SubsetList::new(xlen);
        self.offset += 4;
        Ok(())
    }

    fn rest(&self) -> &'src str {
        &self.arch[self.offset..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self, ch: char) {
        self.offset += ch.len_utf8();
    }

    fn read_version(
        &mut self,
        default_major: u32,
        default_minor: u32,
        standard: bool,
    ) -> Result<Version, ArchError> {
        let (version, consumed) = read_version(self.rest(), default_major, default_minor, standard)
            .map_err(|kind| self.error(kind))?;
        self.offset += consumed;
        Ok(version)
    }

    /// Adds `name`, blaming `offset` if the set refuses it.
    fn add_at(&mut self, offset: usize, name: &str, version: Version) -> Result<(), ArchError> {
        self.list
            .add(name, version.major, version.minor, version.explicit)
            .map_err(|kind| self.error_at(offset, kind))
    }

    fn error(&self, kind: ArchErrorKind) -> ArchError {
        self.error_at(self.offset, kind)
    }

    fn error_at(&self, offset: usize, kind: ArchErrorKind) -> ArchError {
        ArchError::new(self.arch, self.origin.clone(), offset, kind)
    }
}
