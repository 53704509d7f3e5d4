//! RISC-V architecture string parsing and canonicalization.
//!
//! [`isa`] turns `-march=` style strings such as `rv64gc_zba_zicsr2p0` into an ordered,
//! versioned [`SubsetList`] and renders it back in canonical form. [`driver`] holds the
//! collaborators that sit around the parser in a compiler driver: the CPU table and the
//! caller-owned option state.

pub mod driver;
pub mod isa;

pub use driver::{
    ArchContext, CpuInfo, OptionError, TargetOption, default_mtune, expand_arch,
    expand_arch_from_cpu, find_cpu, resolve_tune, unrecognized_option,
};
pub use isa::{
    ArchDiagnostic, ArchError, ArchErrorKind, ArchFlags, ArchOrigin, Subset, SubsetList, expand,
    parse, render,
};
