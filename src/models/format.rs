/// Barcode symbologies the native decoder can be asked to report.
///
/// The discriminants are the decoder's own bitmask values, so a [`FormatSet`]
/// can be handed to the native layer unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolFormat {
    /// Sentinel: detect every supported symbology
    All = 0,
    /// Code 128
    Code128 = 1,
    /// Code 39
    Code39 = 2,
    /// Code 93
    Code93 = 4,
    /// Codabar
    Codabar = 8,
    /// Data Matrix
    DataMatrix = 16,
    /// EAN-13
    Ean13 = 32,
    /// EAN-8
    Ean8 = 64,
    /// Interleaved 2 of 5
    Itf = 128,
    /// QR code
    QrCode = 256,
    /// UPC-A
    UpcA = 512,
    /// UPC-E
    UpcE = 1024,
    /// PDF417
    Pdf417 = 2048,
    /// Aztec
    Aztec = 4096,
}

impl SymbolFormat {
    /// Map a requested format name onto a symbology.
    ///
    /// Unknown names degrade to [`SymbolFormat::All`] rather than failing; a
    /// misconfigured scanner detects everything instead of nothing.
    pub fn from_name(name: &str) -> Self {
        match name {
            "code_128" => Self::Code128,
            "code_39" => Self::Code39,
            "code_93" => Self::Code93,
            "codabar" => Self::Codabar,
            "data_matrix" => Self::DataMatrix,
            "ean_13" => Self::Ean13,
            "ean_8" => Self::Ean8,
            "itf" => Self::Itf,
            "qr" => Self::QrCode,
            "upc_a" => Self::UpcA,
            "upc_e" => Self::UpcE,
            "pdf_417" => Self::Pdf417,
            "aztec" => Self::Aztec,
            "all" => Self::All,
            _ => Self::All,
        }
    }

    /// The bitmask value understood by the native decoder
    pub fn bits(self) -> u32 {
        self as u32
    }
}

/// Set of requested symbologies, stored as the decoder's bitmask.
///
/// A zero mask is the "all formats" sentinel (the decoder's own convention),
/// so the empty set is unrepresentable: an unrestricted set is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSet(u32);

impl FormatSet {
    /// The unrestricted set (detect every symbology)
    pub const ALL: Self = Self(0);

    /// Build a set from requested format names.
    ///
    /// An empty list, any unknown name, or an explicit `"all"` yields the
    /// unrestricted set.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mask = 0u32;
        let mut any = false;
        for name in names {
            any = true;
            match SymbolFormat::from_name(name.as_ref()) {
                SymbolFormat::All => return Self::ALL,
                format => mask |= format.bits(),
            }
        }
        if any { Self(mask) } else { Self::ALL }
    }

    /// True if this is the unrestricted sentinel
    pub fn is_all(&self) -> bool {
        self.0 == 0
    }

    /// True if the set requests the given symbology
    pub fn contains(&self, format: SymbolFormat) -> bool {
        self.is_all() || self.0 & format.bits() != 0
    }

    /// The raw bitmask to hand to the native decoder
    pub fn bits(&self) -> u32 {
        self.0
    }
}

impl Default for FormatSet {
    fn default() -> Self {
        Self::ALL
    }
}
