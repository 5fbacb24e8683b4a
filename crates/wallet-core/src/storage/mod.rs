//! Storage layer for wallet records.
//!
//! This module provides:
//! - **traits**: The `RecordStore` interface the CLI persists through
//! - **block**: The five-line text block codec
//! - **text**: `TextStore`, the file-backed implementation

pub mod block;
pub mod text;
pub mod traits;

pub use block::{decode_blocks, encode_block, encode_blocks, BlockParser, LINES_PER_BLOCK};
pub use text::TextStore;
pub use traits::RecordStore;
