use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::subsequence;

use rvarch::isa::subset_order;
use rvarch::{parse, render};

const STANDARD: [&str; 14] = [
    "m", "a", "f", "d", "q", "l", "c", "b", "j", "k", "t", "p", "v", "n",
];

/// Grouped in canonical s, h, z, x order.
const MULTI: [&str; 10] = [
    "svinval",
    "sstc",
    "hfoo",
    "zicsr",
    "zifencei",
    "zba",
    "zbb",
    "zkn",
    "ztso",
    "xventanacondops",
];

fn version() -> impl Strategy<Value = String> {
    prop_oneof![
        2 => Just(String::new()),
        1 => (0u32..5, 0u32..5).prop_map(|(major, minor)| format!("{major}p{minor}")),
    ]
}

/// (full string, string with the base letter spelled out as `imafd` when it was `g`).
fn arch_string(with_versions: bool) -> impl Strategy<Value = (String, String)> {
    (
        any::<bool>(),
        0u8..3,
        subsequence(STANDARD.to_vec(), 0..=STANDARD.len()),
        subsequence(MULTI.to_vec(), 0..=MULTI.len()),
        vec(version(), 25),
        any::<bool>(),
    )
        .prop_map(move |(rv64, base, standard, multi, versions, underscores)| {
            let base = match (base, rv64) {
                (1, false) => "e",
                (2, _) => "g",
                _ => "i",
            };
            let mut versions = versions
                .into_iter()
                .map(move |version| if with_versions { version } else { String::new() });
            let mut next_version = move || versions.next().unwrap_or_default();

            let base_version = next_version();
            let mut suffix = String::new();
            for ext in standard {
                let position = STANDARD.iter().position(|known| *known == ext);
                if base == "g" && position < Some(4) {
                    continue;
                }
                if underscores {
                    suffix.push('_');
                }
                suffix.push_str(ext);
                suffix.push_str(&next_version());
            }
            for ext in multi {
                suffix.push('_');
                suffix.push_str(ext);
                suffix.push_str(&next_version());
            }

            let prefix = if rv64 { "rv64" } else { "rv32" };
            let full = format!("{prefix}{base}{base_version}{suffix}");
            let spelled = if base == "g" {
                format!("{prefix}imafd{suffix}")
            } else {
                full.clone()
            };
            (full, spelled)
        })
}

proptest! {
    #[test]
    fn versioned_rendering_is_a_fixed_point((arch, _) in arch_string(true)) {
        let list = parse(&arch).expect("generated string is valid");
        let rendered = render(&list, true);
        let again = parse(&rendered).expect("rendering reparses");
        prop_assert!(again.same_extensions(&list), "{arch} -> {rendered}");
        prop_assert_eq!(render(&again, true), rendered);
    }

    #[test]
    fn unversioned_input_renders_without_versions((arch, _) in arch_string(false)) {
        let list = parse(&arch).expect("generated string is valid");
        let rendered = render(&list, false);
        prop_assert!(!rendered.chars().skip(4).any(|c| c.is_ascii_digit()), "{}", rendered);
    }

    #[test]
    fn g_matches_imafd((arch, spelled) in arch_string(false)) {
        let from_g = parse(&arch).expect("generated string is valid");
        let from_letters = parse(&spelled).expect("spelled-out string is valid");
        prop_assert_eq!(from_g, from_letters);
    }

    #[test]
    fn order_is_antisymmetric(a in "[a-z]{1,6}", b in "[a-z]{1,6}") {
        prop_assert_eq!(subset_order(&a, &b), subset_order(&b, &a).reverse());
    }
}
