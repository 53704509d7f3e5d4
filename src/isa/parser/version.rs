//! `<major>[p<minor>]` suffix reader.

use crate::isa::error::ArchErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub explicit: bool,
}

impl Version {
    pub fn implicit(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            explicit: false,
        }
    }

    pub fn explicit(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            explicit: true,
        }
    }
}

/// Reads an optional version at the start of `input` and returns it with the number of
/// bytes consumed.
///
/// Without leading digits the defaults are returned and nothing is consumed. A `p` that is
/// not followed by a digit ends a standard extension's version (the `p` is the next
/// extension) but is an error for multi-letter extensions.
pub fn read_version(
    input: &str,
    default_major: u32,
    default_minor: u32,
    standard: bool,
) -> Result<(Version, usize), ArchErrorKind> {
    let bytes = input.as_bytes();
    let Some((major, mut end)) = read_number(bytes, 0)? else {
        return Ok((Version::implicit(default_major, default_minor), 0));
    };
    let mut minor = 0;
    if bytes.get(end) == Some(&b'p') {
        match read_number(bytes, end + 1)? {
            Some((value, next)) => {
                minor = value;
                end = next;
            }
            None if standard => {}
            None => return Err(ArchErrorKind::MissingVersionDigits { major }),
        }
    }
    Ok((Version::explicit(major, minor), end))
}

fn read_number(bytes: &[u8], start: usize) -> Result<Option<(u32, usize)>, ArchErrorKind> {
    let digits = bytes[start..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if digits == 0 {
        return Ok(None);
    }
    let mut value: u32 = 0;
    for &digit in &bytes[start..start + digits] {
        value = value
            .checked_mul(10)
            .and_then(|value| value.checked_add(u32::from(digit - b'0')))
            .ok_or(ArchErrorKind::VersionOutOfRange)?;
    }
    Ok(Some((value, start + digits)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_version_uses_defaults() {
        assert_eq!(read_version("mafd", 2, 0, true), Ok((Version::implicit(2, 0), 0)));
        assert_eq!(read_version("", 1, 9, true), Ok((Version::implicit(1, 9), 0)));
        assert_eq!(read_version("p", 2, 0, true), Ok((Version::implicit(2, 0), 0)));
    }

    #[test]
    fn major_only_is_explicit_with_zero_minor() {
        assert_eq!(read_version("3_zba", 2, 0, false), Ok((Version::explicit(3, 0), 1)));
        assert_eq!(read_version("10", 2, 0, true), Ok((Version::explicit(10, 0), 2)));
    }

    #[test]
    fn major_and_minor() {
        assert_eq!(read_version("2p1c", 2, 0, true), Ok((Version::explicit(2, 1), 3)));
        assert_eq!(read_version("0p0", 2, 0, false), Ok((Version::explicit(0, 0), 3)));
    }

    #[test]
    fn dangling_p_starts_next_standard_extension() {
        assert_eq!(read_version("2pv", 2, 0, true), Ok((Version::explicit(2, 0), 1)));
        assert_eq!(read_version("2p", 2, 0, true), Ok((Version::explicit(2, 0), 1)));
    }

    #[test]
    fn dangling_p_is_an_error_for_multi_letter_extensions() {
        assert_eq!(
            read_version("2p_zbb", 2, 0, false),
            Err(ArchErrorKind::MissingVersionDigits { major: 2 })
        );
    }

    #[test]
    fn overflowing_version_is_rejected() {
        assert_eq!(
            read_version("99999999999", 2, 0, true),
            Err(ArchErrorKind::VersionOutOfRange)
        );
    }
}
