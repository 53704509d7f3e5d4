use crate::isa::error::{ArchError, ArchErrorKind};
use crate::isa::subset::ExtensionGroup;

use super::Parser;

impl<'src> Parser<'src> {
    /// Consumes `_`-separated names starting with the group's prefix. Stops at the first
    /// token that belongs to another group.
    pub(super) fn parse_multiletter(&mut self, group: ExtensionGroup) -> Result<(), ArchError> {
        let prefix = group.prefix();
        while let Some(ch) = self.peek() {
            if ch == '_' {
                self.advance(ch);
                continue;
            }
            if ch != prefix {
                break;
            }

            let start = self.offset;
            let rest = self.rest();
            let name_len = rest
                .char_indices()
                .skip(1)
                .find(|&(_, c)| c == '_' || c.is_ascii_digit())
                .map_or(rest.len(), |(index, _)| index);
            let name = &rest[..name_len];
            self.offset += name_len;

            let version = self.read_version(2, 0, false)?;
            if name.len() == prefix.len_utf8() {
                return Err(self.error_at(start, ArchErrorKind::MultiLetterNameTooShort(group)));
            }
            self.add_at(start, name, version)?;

            if !matches!(self.peek(), None | Some('_')) {
                return Err(self.error(ArchErrorKind::MissingGroupSeparator(group)));
            }
        }
        Ok(())
    }
}
