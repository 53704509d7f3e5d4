use crate::isa::error::{ArchError, ArchErrorKind};
use crate::isa::subset::{ExtensionGroup, STANDARD_EXTENSIONS};

use super::Parser;

/// Letters covered by the `g` shorthand: everything before `q`.
fn g_expansion() -> &'static str {
    let end = STANDARD_EXTENSIONS
        .find('q')
        .unwrap_or(STANDARD_EXTENSIONS.len());
    &STANDARD_EXTENSIONS[..end]
}

impl<'src> Parser<'src> {
    /// Base letter (`i`, `e` or `g`) followed by single-letter extensions in canonical order.
    pub(super) fn parse_standard(&mut self) -> Result<(), ArchError> {
        let base_offset = self.offset;
        let mut remaining = STANDARD_EXTENSIONS;
        match self.peek() {
            Some('i') => {
                self.advance('i');
                let version = self.read_version(2, 0, true)?;
                self.add_at(base_offset, "i", version)?;
            }
            Some('e') => {
                self.advance('e');
                let version = self.read_version(1, 9, true)?;
                self.add_at(base_offset, "e", version)?;
                let xlen = self.list.xlen();
                if xlen > 32 {
                    return Err(
                        self.error_at(base_offset, ArchErrorKind::IncompatibleBaseWidth { xlen })
                    );
                }
            }
            Some('g') => {
                self.advance('g');
                let version = self.read_version(2, 0, true)?;
                self.add_at(base_offset, "i", version)?;
                let expansion = g_expansion();
                let mut buf = [0u8; 4];
                for ext in expansion.chars() {
                    self.add_at(base_offset, ext.encode_utf8(&mut buf), version)?;
                }
                remaining = &STANDARD_EXTENSIONS[expansion.len()..];
            }
            _ => return Err(self.error(ArchErrorKind::InvalidBaseLetter)),
        }

        while let Some(ch) = self.peek() {
            if ch == '_' {
                self.advance(ch);
                continue;
            }
            if ExtensionGroup::from_prefix(ch).is_some() {
                break;
            }
            let ext_offset = self.offset;
            remaining = match remaining.find(ch) {
                Some(pos) => &remaining[pos + ch.len_utf8()..],
                None if STANDARD_EXTENSIONS.contains(ch) => {
                    return Err(self.error(ArchErrorKind::OutOfCanonicalOrder(ch)));
                }
                None => return Err(self.error(ArchErrorKind::UnknownExtension(ch))),
            };
            self.advance(ch);
            let version = self.read_version(2, 0, true)?;
            let mut buf = [0u8; 4];
            self.add_at(ext_offset, ch.encode_utf8(&mut buf), version)?;
        }
        Ok(())
    }
}
