//! Boot ROM selection and the raw byte payloads used to prime the
//! machine before cartridge execution starts at 0x0100.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// Identifies which boot ROM (if any) is mapped into the lower
/// addresses of the address space while booting.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BootRom {
    /// No boot ROM is attached, the machine starts directly at the
    /// cartridge's entry point with the post-boot register state.
    #[default]
    None,

    /// The original DMG (original Game Boy) boot ROM.
    Dmg,

    /// The Super Game Boy boot ROM.
    Sgb,

    /// Hacktix's open-source DMG boot ROM replacement.
    DmgBootix,

    /// Hacktix's open-source MGB (Game Boy Pocket) boot ROM replacement.
    MgbBootix,

    /// The original CGB (Game Boy Color) boot ROM.
    Cgb,

    /// A custom open-source CGB boot ROM replacement.
    CgbBoytacean,

    /// A boot ROM provided externally, outside of the statically
    /// bundled set above, typically loaded from a file.
    Other,
}

impl BootRom {
    /// Whether this boot ROM is appropriate for running a DMG-mode
    /// session (plain Game Boy or Game Boy Pocket compatibility).
    pub fn is_dmg_compat(&self) -> bool {
        matches!(
            self,
            Self::None | Self::Dmg | Self::Sgb | Self::DmgBootix | Self::MgbBootix | Self::Other
        )
    }

    /// Whether this boot ROM is appropriate for running a CGB-mode
    /// session (Game Boy Color).
    pub fn is_cgb_compat(&self) -> bool {
        matches!(self, Self::None | Self::Cgb | Self::CgbBoytacean | Self::Other)
    }
}

/// The original DMG boot ROM, 256 bytes mapped at 0x0000-0x00FF.
pub static DMG_BOOT: &[u8] = include_bytes!("../res/boot/dmg_boot.bin");

/// The Super Game Boy boot ROM, 256 bytes mapped at 0x0000-0x00FF.
pub static SGB_BOOT: &[u8] = include_bytes!("../res/boot/sgb_boot.bin");

/// Hacktix's open-source DMG boot ROM replacement.
pub static DMG_BOOTIX: &[u8] = include_bytes!("../res/boot/dmg_bootix.bin");

/// Hacktix's open-source MGB boot ROM replacement.
pub static MGB_BOOTIX: &[u8] = include_bytes!("../res/boot/mgb_bootix.bin");

/// The original CGB boot ROM, 2304 bytes mapped at 0x0000-0x08FF.
pub static CGB_BOOT: &[u8] = include_bytes!("../res/boot/cgb_boot.bin");

/// A custom open-source CGB boot ROM replacement.
pub static CGB_BOYTACEAN: &[u8] = include_bytes!("../res/boot/cgb_boytacean.bin");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_dmg_compat() {
        assert!(BootRom::Dmg.is_dmg_compat());
        assert!(BootRom::DmgBootix.is_dmg_compat());
        assert!(!BootRom::Cgb.is_dmg_compat());
        assert!(!BootRom::CgbBoytacean.is_dmg_compat());
    }

    #[test]
    fn test_is_cgb_compat() {
        assert!(BootRom::Cgb.is_cgb_compat());
        assert!(BootRom::CgbBoytacean.is_cgb_compat());
        assert!(!BootRom::Dmg.is_cgb_compat());
        assert!(!BootRom::Sgb.is_cgb_compat());
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(BootRom::default(), BootRom::None);
    }

    #[test]
    fn test_boot_rom_sizes() {
        assert_eq!(DMG_BOOT.len(), 256);
        assert_eq!(SGB_BOOT.len(), 256);
        assert_eq!(DMG_BOOTIX.len(), 256);
        assert_eq!(MGB_BOOTIX.len(), 256);
        assert_eq!(CGB_BOOT.len(), 2304);
        assert_eq!(CGB_BOYTACEAN.len(), 2304);
    }
}
