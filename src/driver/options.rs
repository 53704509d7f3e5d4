//! `-march=` / `-mcpu=` handling on top of the parser.
//!
//! [`ArchContext`] is the "current architecture" of one compilation session. It is owned by
//! the caller and threaded through option processing; a successful `-march=` replaces the
//! whole set, a failed one leaves the previous set in place.

use std::fmt;

use log::debug;

use crate::isa::diagnostic::{ArchDiagnostic, DiagnosticLevel};
use crate::isa::error::{ArchError, ArchOrigin};
use crate::isa::flags::ArchFlags;
use crate::isa::parser::Parser;
use crate::isa::subset::SubsetList;

use super::cpu::{find_cpu, resolve_tune};

/// Target option as seen by the driver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetOption {
    March(String),
    Mcpu(String),
}

impl TargetOption {
    /// Recognizes `-march=VALUE` and `-mcpu=VALUE`.
    pub fn from_arg(arg: &str) -> Option<Self> {
        if let Some(value) = arg.strip_prefix("-march=") {
            Some(TargetOption::March(value.to_string()))
        } else {
            arg.strip_prefix("-mcpu=")
                .map(|value| TargetOption::Mcpu(value.to_string()))
        }
    }
}

/// Warning for an argument [`TargetOption::from_arg`] did not recognize.
pub fn unrecognized_option(arg: &str) -> ArchDiagnostic {
    ArchDiagnostic::new(
        DiagnosticLevel::Warning,
        "option::unrecognized",
        format!("ignoring unrecognized argument '{arg}'"),
        None,
    )
}

#[derive(Debug)]
pub enum OptionError {
    Arch(ArchError),
    UnknownCpu(String),
}

impl OptionError {
    pub fn to_diagnostic(&self) -> ArchDiagnostic {
        match self {
            OptionError::Arch(err) => err.to_diagnostic(),
            OptionError::UnknownCpu(_) => ArchDiagnostic::new(
                DiagnosticLevel::Error,
                "cpu::unknown",
                self.to_string(),
                None,
            ),
        }
    }
}

impl From<ArchError> for OptionError {
    fn from(err: ArchError) -> Self {
        OptionError::Arch(err)
    }
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::Arch(err) => write!(f, "{err}"),
            OptionError::UnknownCpu(cpu) => write!(f, "-mcpu={cpu}: unknown CPU"),
        }
    }
}

impl std::error::Error for OptionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptionError::Arch(err) => Some(err),
            OptionError::UnknownCpu(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ArchContext {
    current: Option<SubsetList>,
    flags: ArchFlags,
}

impl ArchContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&SubsetList> {
        self.current.as_ref()
    }

    pub fn flags(&self) -> ArchFlags {
        self.flags
    }

    /// Applies one option. `-mcpu=` only validates the CPU name; it never touches the
    /// current architecture.
    pub fn handle_option(&mut self, option: &TargetOption) -> Result<(), OptionError> {
        match option {
            TargetOption::March(arch) => {
                self.parse_arch_string(arch, ArchOrigin::March)?;
                Ok(())
            }
            TargetOption::Mcpu(cpu) => match find_cpu(cpu) {
                Some(_) => Ok(()),
                None => Err(OptionError::UnknownCpu(cpu.clone())),
            },
        }
    }

    /// Parses `arch` and installs it as the current architecture, recomputing every
    /// architecture-owned flag.
    pub fn parse_arch_string(
        &mut self,
        arch: &str,
        origin: ArchOrigin,
    ) -> Result<&SubsetList, ArchError> {
        let list = Parser::new(arch, origin).parse()?;
        self.flags = self.flags.apply_arch(&list);
        debug!(
            "current architecture is now {} (flags {:?})",
            list.to_arch_string(false),
            self.flags
        );
        Ok(self.current.insert(list))
    }

    /// Rendering of the current architecture; empty when nothing was parsed yet.
    pub fn arch_str(&self, versions: bool) -> String {
        self.current
            .as_ref()
            .map(|list| list.to_arch_string(versions))
            .unwrap_or_default()
    }
}

/// Normalizes `arch` into a `-march=` argument with implied extensions spelled out.
pub fn expand_arch(arch: &str) -> Result<String, ArchError> {
    let list = Parser::new(arch, ArchOrigin::March).parse()?;
    Ok(format!("-march={}", list.to_arch_string(false)))
}

/// `-march=` argument for `cpu`'s default architecture, or for `default_arch` when the CPU
/// is unknown. Empty when neither is available.
pub fn expand_arch_from_cpu(cpu: &str, default_arch: Option<&str>) -> Result<String, ArchError> {
    let (arch, origin) = match find_cpu(cpu) {
        Some(info) => (info.arch, ArchOrigin::Cpu(cpu.to_string())),
        None => match default_arch {
            Some(arch) => (arch, ArchOrigin::March),
            None => return Ok(String::new()),
        },
    };
    let list = Parser::new(arch, origin).parse()?;
    Ok(format!("-march={}", list.to_arch_string(false)))
}

/// `-mtune=` default derived from `-mcpu=`.
pub fn default_mtune<'a>(cpu: &str, fallback: &'a str) -> &'a str {
    resolve_tune(cpu, fallback)
}
