//! Known CPUs with their default architecture and tuning model.

use std::sync::OnceLock;

use ahash::AHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CpuInfo {
    pub name: &'static str,
    pub arch: &'static str,
    pub tune: &'static str,
}

impl CpuInfo {
    const fn new(name: &'static str, arch: &'static str, tune: &'static str) -> Self {
        Self { name, arch, tune }
    }
}

pub const CPU_TABLE: &[CpuInfo] = &[
    CpuInfo::new("sifive-e20", "rv32imc", "rocket"),
    CpuInfo::new("sifive-e21", "rv32imac", "rocket"),
    CpuInfo::new("sifive-e24", "rv32imafc", "rocket"),
    CpuInfo::new("sifive-e31", "rv32imac", "sifive-3-series"),
    CpuInfo::new("sifive-e34", "rv32imafc", "sifive-3-series"),
    CpuInfo::new("sifive-e76", "rv32imafc", "sifive-7-series"),
    CpuInfo::new("sifive-s21", "rv64imac", "rocket"),
    CpuInfo::new("sifive-s51", "rv64imac", "sifive-5-series"),
    CpuInfo::new("sifive-s54", "rv64imafdc", "sifive-5-series"),
    CpuInfo::new("sifive-s76", "rv64imafdc", "sifive-7-series"),
    CpuInfo::new("sifive-u54", "rv64imafdc", "sifive-5-series"),
    CpuInfo::new("sifive-u74", "rv64imafdc", "sifive-7-series"),
];

fn cpu_index() -> &'static AHashMap<&'static str, &'static CpuInfo> {
    static INDEX: OnceLock<AHashMap<&'static str, &'static CpuInfo>> = OnceLock::new();
    INDEX.get_or_init(|| CPU_TABLE.iter().map(|cpu| (cpu.name, cpu)).collect())
}

/// Exact, case-sensitive name lookup.
pub fn find_cpu(name: &str) -> Option<&'static CpuInfo> {
    cpu_index().get(name).copied()
}

/// Tuning model of `cpu`, or `fallback` when the CPU is unknown.
pub fn resolve_tune<'a>(cpu: &str, fallback: &'a str) -> &'a str {
    find_cpu(cpu).map_or(fallback, |cpu| cpu.tune)
}
