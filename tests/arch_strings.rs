use rvarch::{ArchContext, ArchErrorKind, ArchOrigin, TargetOption, expand, parse, render};
use rvarch::isa::ExtensionGroup;

fn names(arch: &str) -> Vec<String> {
    parse(arch)
        .expect("valid arch string")
        .names()
        .map(str::to_string)
        .collect()
}

#[test]
fn rv32imafdc_keeps_its_letters() {
    let list = parse("rv32imafdc").expect("parse");
    assert_eq!(list.xlen(), 32);
    assert_eq!(names("rv32imafdc"), ["i", "m", "a", "f", "d", "c"]);
    assert_eq!(render(&list, false), "rv32imafdc");
}

#[test]
fn zkn_expands_after_parsing() {
    let list = parse("rv32i_zkn").expect("parse");
    for implied in ["zkne", "zknd", "zknh", "zkg", "zkb"] {
        let subset = list.lookup(implied).expect("implied subset present");
        assert_eq!((subset.major_version, subset.minor_version), (2, 0));
        assert!(!subset.explicit_version);
    }
    assert_eq!(render(&list, false), "rv32i_zkb_zkg_zkn_zknd_zkne_zknh");
}

#[test]
fn k_expands_through_zkn() {
    let list = parse("rv32ik").expect("parse");
    assert_eq!(
        render(&list, false),
        "rv32ik_zkb_zkg_zkn_zknd_zkne_zknh_zkr"
    );
    let rendered = render(&list, true);
    let again = parse(&rendered).expect("reparse");
    assert!(again.same_extensions(&list));
    assert_eq!(render(&again, true), rendered);
}

#[test]
fn d_without_f_gets_f() {
    assert_eq!(names("rv64id_zba"), ["i", "f", "d", "zba"]);
    assert_eq!(names("rv64ifd_zba"), names("rv64id_zba"));
}

#[test]
fn rv64e_is_not_a_base() {
    let err = parse("rv64e").expect_err("rv64e");
    assert_eq!(err.kind, ArchErrorKind::IncompatibleBaseWidth { xlen: 64 });
    assert_eq!(err.to_string(), "-march=rv64e: rv64e is not a valid base ISA");
}

#[test]
fn rv64gc_zba_ztso_round_trips() {
    let list = parse("rv64gc_zba_ztso").expect("parse");
    let rendered = render(&list, true);
    let again = parse(&rendered).expect("reparse");
    assert!(again.same_extensions(&list));
    assert_eq!(render(&again, true), rendered);
}

#[test]
fn bare_supervisor_prefix_is_too_short() {
    let err = parse("rv64imc_s").expect_err("bare s");
    assert_eq!(
        err.kind,
        ArchErrorKind::MultiLetterNameTooShort(ExtensionGroup::Supervisor)
    );
    assert_eq!(err.fragment(), "s");
}

#[test]
fn explicit_versions_survive_unversioned_rendering() {
    let list = parse("rv64gc_zba_zicsr2p0").expect("parse");
    assert_eq!(render(&list, false), "rv64imafdc_zicsr2p0_zba");
    assert_eq!(expand("rv64i2p1_m").expect("expand"), "rv64i2p1m");
}

#[test]
fn driver_session_replaces_state_wholesale() {
    let mut ctx = ArchContext::new();
    for arg in ["-march=rv64gc", "-mcpu=not-a-core", "-march=rv32e_zkn"] {
        let option = TargetOption::from_arg(arg).expect("target option");
        let _ = ctx.handle_option(&option);
    }
    assert_eq!(ctx.arch_str(false), "rv32e_zkb_zkg_zkn_zknd_zkne_zknh");

    let err = ctx
        .parse_arch_string("rv32ex", ArchOrigin::March)
        .expect_err("x is not a standard letter");
    assert_eq!(
        err.kind,
        ArchErrorKind::MultiLetterNameTooShort(ExtensionGroup::NonStandard)
    );
    assert_eq!(ctx.arch_str(false), "rv32e_zkb_zkg_zkn_zknd_zkne_zknh");
}
