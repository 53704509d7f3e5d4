//! Canonical ordering between subset names.

use std::cmp::Ordering;

/// Every supported single-letter standard extension, in canonical order. `i` and `e` are the
/// base subsets and rank ahead of this list.
pub const STANDARD_EXTENSIONS: &str = "mafdqlcbjktpvn";

/// Class of a multi-letter extension, selected by its first letter.
///
/// Variants are declared in canonical order, which is also the order the parser visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExtensionGroup {
    Supervisor,
    Hypervisor,
    SubExtension,
    NonStandard,
}

impl ExtensionGroup {
    pub const ALL: [ExtensionGroup; 4] = [
        ExtensionGroup::Supervisor,
        ExtensionGroup::Hypervisor,
        ExtensionGroup::SubExtension,
        ExtensionGroup::NonStandard,
    ];

    pub fn prefix(self) -> char {
        match self {
            ExtensionGroup::Supervisor => 's',
            ExtensionGroup::Hypervisor => 'h',
            ExtensionGroup::SubExtension => 'z',
            ExtensionGroup::NonStandard => 'x',
        }
    }

    pub fn from_prefix(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.prefix() == ch)
    }

    pub fn description(self) -> &'static str {
        match self {
            ExtensionGroup::Supervisor => "supervisor extension",
            ExtensionGroup::Hypervisor => "hypervisor extension",
            ExtensionGroup::SubExtension => "sub-extension",
            ExtensionGroup::NonStandard => "non-standard extension",
        }
    }
}

/// Rank of a single-letter subset; lower sorts first.
///
/// Letters outside [`STANDARD_EXTENSIONS`] rank after every known letter, alphabetically
/// among themselves.
pub fn single_letter_rank(ext: char) -> u32 {
    match ext {
        'i' => 0,
        'e' => 1,
        _ => match STANDARD_EXTENSIONS.find(ext) {
            Some(pos) => pos as u32 + 2,
            None => STANDARD_EXTENSIONS.len() as u32 + 2 + ext as u32,
        },
    }
}

/// (class, category) rank of a multi-letter subset. Only `z` names carry a category: the
/// single-letter rank of their second character.
fn multi_letter_rank(name: &str) -> (u32, u32) {
    let mut chars = name.chars();
    let class = chars
        .next()
        .and_then(ExtensionGroup::from_prefix)
        .map_or(ExtensionGroup::ALL.len() as u32, |group| group as u32);
    let category = if class == ExtensionGroup::SubExtension as u32 {
        chars.next().map_or(0, single_letter_rank)
    } else {
        0
    };
    (class, category)
}

fn single_letter(name: &str) -> Option<char> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

/// Total order used for insertion and rendering. `Ordering::Less` means `a` comes first.
///
/// Single letters precede multi-letter names. Multi-letter names of equal class and
/// category fall back to byte order of the full name.
pub fn subset_order(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    match (single_letter(a), single_letter(b)) {
        (Some(a), Some(b)) => single_letter_rank(a).cmp(&single_letter_rank(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => multi_letter_rank(a)
            .cmp(&multi_letter_rank(b))
            .then_with(|| a.cmp(b)),
    }
}
