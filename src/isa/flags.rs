//! Feature bits derived from a parsed architecture.

use bitflags::bitflags;

use super::subset::SubsetList;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ArchFlags: u32 {
        const IS_64BIT     = 1 << 0;
        const RVE          = 1 << 1;
        const MUL          = 1 << 2;
        const ATOMIC       = 1 << 3;
        const HARD_FLOAT   = 1 << 4;
        const DOUBLE_FLOAT = 1 << 5;
        const RVC          = 1 << 6;

        // Scalar crypto.
        const ZKG   = 1 << 8;
        const ZKB   = 1 << 9;
        const ZKR   = 1 << 10;
        const ZKNE  = 1 << 11;
        const ZKND  = 1 << 12;
        const ZKNH  = 1 << 13;
        const ZKSED = 1 << 14;
        const ZKSH  = 1 << 15;

        // Packed SIMD.
        const ZBPBO = 1 << 16;
        const ZPN   = 1 << 17;
        const ZPSF  = 1 << 18;

        /// Every bit owned by the architecture string.
        const ARCH_MASK = Self::IS_64BIT.bits()
            | Self::RVE.bits()
            | Self::MUL.bits()
            | Self::ATOMIC.bits()
            | Self::HARD_FLOAT.bits()
            | Self::DOUBLE_FLOAT.bits()
            | Self::RVC.bits()
            | Self::ZKG.bits()
            | Self::ZKB.bits()
            | Self::ZKR.bits()
            | Self::ZKNE.bits()
            | Self::ZKND.bits()
            | Self::ZKNH.bits()
            | Self::ZKSED.bits()
            | Self::ZKSH.bits()
            | Self::ZBPBO.bits()
            | Self::ZPN.bits()
            | Self::ZPSF.bits();
    }
}

/// Extension name to feature bit, in table order.
pub const EXTENSION_FLAGS: &[(&str, ArchFlags)] = &[
    ("e", ArchFlags::RVE),
    ("m", ArchFlags::MUL),
    ("a", ArchFlags::ATOMIC),
    ("f", ArchFlags::HARD_FLOAT),
    ("d", ArchFlags::DOUBLE_FLOAT),
    ("c", ArchFlags::RVC),
    ("zkg", ArchFlags::ZKG),
    ("zkb", ArchFlags::ZKB),
    ("zkr", ArchFlags::ZKR),
    ("zkne", ArchFlags::ZKNE),
    ("zknd", ArchFlags::ZKND),
    ("zknh", ArchFlags::ZKNH),
    ("zksed", ArchFlags::ZKSED),
    ("zksh", ArchFlags::ZKSH),
    ("zbpbo", ArchFlags::ZBPBO),
    ("zpn", ArchFlags::ZPN),
    ("zpsf", ArchFlags::ZPSF),
];

impl ArchFlags {
    pub fn from_subsets(list: &SubsetList) -> Self {
        let mut flags = if list.xlen() == 64 {
            ArchFlags::IS_64BIT
        } else {
            ArchFlags::empty()
        };
        for (ext, flag) in EXTENSION_FLAGS {
            if list.lookup(ext).is_some() {
                flags |= *flag;
            }
        }
        flags
    }

    /// Replaces the architecture-owned bits of `self` with those of `list`, keeping any
    /// other bits the caller stores alongside.
    pub fn apply_arch(self, list: &SubsetList) -> Self {
        (self - ArchFlags::ARCH_MASK) | ArchFlags::from_subsets(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa::parse;

    #[test]
    fn flags_follow_extensions() {
        let list = parse("rv64gc").expect("parse");
        let flags = ArchFlags::from_subsets(&list);
        assert_eq!(
            flags,
            ArchFlags::IS_64BIT
                | ArchFlags::MUL
                | ArchFlags::ATOMIC
                | ArchFlags::HARD_FLOAT
                | ArchFlags::DOUBLE_FLOAT
                | ArchFlags::RVC
        );
    }

    #[test]
    fn implied_crypto_subsets_set_their_bits() {
        let list = parse("rv32i_zkn").expect("parse");
        let flags = ArchFlags::from_subsets(&list);
        assert!(flags.contains(ArchFlags::ZKNE | ArchFlags::ZKND | ArchFlags::ZKNH));
        assert!(flags.contains(ArchFlags::ZKG | ArchFlags::ZKB));
        assert!(!flags.contains(ArchFlags::IS_64BIT));
        assert!(!flags.contains(ArchFlags::ZKR));
    }

    #[test]
    fn scalar_crypto_letter_sets_every_crypto_bit() {
        let list = parse("rv64gk").expect("parse");
        let flags = ArchFlags::from_subsets(&list);
        assert!(flags.contains(
            ArchFlags::ZKNE | ArchFlags::ZKND | ArchFlags::ZKNH | ArchFlags::ZKG | ArchFlags::ZKB
        ));
        assert!(flags.contains(ArchFlags::ZKR));
        assert!(!flags.intersects(ArchFlags::ZKSED | ArchFlags::ZKSH));
    }

    #[test]
    fn apply_arch_clears_previous_bits() {
        let previous = ArchFlags::from_subsets(&parse("rv64imafdc").expect("parse"));
        let next = previous.apply_arch(&parse("rv32ec").expect("parse"));
        assert_eq!(next, ArchFlags::RVE | ArchFlags::RVC);
    }
}
