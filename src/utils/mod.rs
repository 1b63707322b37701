// Utils compartidos

pub mod deck_ffi;
pub mod i18n;

pub use i18n::*;
