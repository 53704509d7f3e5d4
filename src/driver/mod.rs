//! Driver-side collaborators: the CPU table and caller-owned option state.

pub mod cpu;
pub mod options;

pub use cpu::{CPU_TABLE, CpuInfo, find_cpu, resolve_tune};
pub use options::{
    ArchContext, OptionError, TargetOption, default_mtune, expand_arch, expand_arch_from_cpu,
    unrecognized_option,
};
