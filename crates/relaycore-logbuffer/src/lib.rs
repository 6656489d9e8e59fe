//! Log-buffer primitives for an append-only messaging transport.
//!
//! A term buffer is a fixed-capacity byte region that one or more writer
//! threads fill with length-prefixed frames in strictly increasing offset
//! order, no gaps. Each frame's length field is published last, with
//! release ordering, so an acquire read of a non-zero length means the
//! whole frame is visible. [`FrameScanner`] walks such a region on a single
//! consuming thread, handing out MTU-bounded batches of whole frames as
//! they become available.

pub mod buffer;
pub mod error;
pub mod frame;
pub mod scanner;
pub mod term;

pub use buffer::AtomicBuffer;
pub use error::{LogBufferError, Result};
pub use frame::{align, check_header_length, DATA_FRAME_TYPE, FRAME_ALIGNMENT, PADDING_FRAME_TYPE};
pub use scanner::FrameScanner;
pub use term::{TermBuffer, TERM_METADATA_LENGTH, TERM_TAIL_COUNTER_OFFSET};
