//! Static assets bundled into the SDL frontend binary.

/// Window icon, shown by the OS window manager while the
/// emulator is running.
pub static ICON: &[u8] = include_bytes!("../../../res/icon/icon.png");
