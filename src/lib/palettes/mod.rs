pub mod pal_hex;
pub(crate) mod pal_paintnet;
pub mod pal_plt;
pub mod palette;

/// Number of hex digits that make up one 32-bit ARGB value.
const ARGB_HEX_DIGITS: usize = 8;
