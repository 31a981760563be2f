mod catalog;
mod error;
mod ext;
pub mod extract;
pub mod hash;
mod record;
pub mod resolve;

pub use {catalog::*, error::*, ext::ResultExt, record::*};

/// Directory offsets count blocks of `1 << BLOCK_SHIFT` bytes
pub const BLOCK_SHIFT: u32 = 11;
pub const BLOCK_SIZE: u64 = 1 << BLOCK_SHIFT;
