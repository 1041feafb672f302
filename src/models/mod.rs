pub mod barcode;
pub mod format;
pub mod rect;

pub use barcode::{Barcode, Detection, StructuredPayload};
pub use format::{FormatSet, SymbolFormat};
pub use rect::{ImageRect, NormalizedRect, RawRect, Size, ViewRect};
