/// `(trigger, implied)` pairs. A trigger may appear several times. The table is acyclic;
/// chains such as `k` -> `zkn` -> `zkne` are resolved by the implication pass.
pub const IMPLIED_SUBSETS: &[(&str, &str)] = &[
    ("d", "f"),
    ("k", "zkn"),
    ("k", "zkr"),
    ("zkn", "zkne"),
    ("zkn", "zknd"),
    ("zkn", "zknh"),
    ("zkn", "zkg"),
    ("zkn", "zkb"),
    ("zks", "zksed"),
    ("zks", "zksh"),
    ("zks", "zkg"),
    ("zks", "zkb"),
    ("p", "zbpbo"),
    ("p", "zpn"),
    ("p", "zpsf"),
];

/// Extensions directly implied by `ext`.
pub fn implied_by(ext: &str) -> impl Iterator<Item = &'static str> + '_ {
    IMPLIED_SUBSETS
        .iter()
        .filter(move |(trigger, _)| *trigger == ext)
        .map(|(_, implied)| *implied)
}
