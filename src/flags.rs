use bitflags::bitflags;

bitflags! {
    /// Style flags stored with every cell.
    ///
    /// On the wire this is an opaque 16-bit value, so bits without a name
    /// are kept rather than dropped.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellFlags: u16 {
        const BOLD             = 1 << 0;
        const UNDERLINE        = 1 << 1;
        const ITALIC           = 1 << 2;
        const CURLY_UNDERLINE  = 1 << 3;
        const DOUBLE_UNDERLINE = 1 << 4;
        const DOTTED_UNDERLINE = 1 << 5;
        const STRIKE_THROUGH   = 1 << 6;

        const _ = !0;
    }
}

impl CellFlags {
    /// Builds flags from any integer, keeping only the low 16 bits.
    pub fn from_bits_lossy(bits: u32) -> Self {
        Self::from_bits_retain((bits & 0xFFFF) as u16)
    }
}
