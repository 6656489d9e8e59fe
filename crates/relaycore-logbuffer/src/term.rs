//! A term buffer and its tail-position side channel.

use std::fmt;

use crate::buffer::AtomicBuffer;
use crate::error::{LogBufferError, Result};
use crate::frame::FRAME_ALIGNMENT;

/// Offset of the tail counter within the metadata buffer.
pub const TERM_TAIL_COUNTER_OFFSET: usize = 0;

/// Bytes reserved for term metadata; one cache line so the tail counter
/// does not share a line with anything else.
pub const TERM_METADATA_LENGTH: usize = 64;

/// A fixed-capacity region of framed messages plus the metadata region
/// through which the writer publishes its tail position.
///
/// The pair is owned by the surrounding transport; scanners hold non-owning
/// references to it for their lifetime.
pub struct TermBuffer {
    term: AtomicBuffer,
    metadata: AtomicBuffer,
}

impl TermBuffer {
    /// Pair a term region with its metadata region.
    ///
    /// The term capacity must be a positive multiple of [`FRAME_ALIGNMENT`]
    /// small enough for the 32-bit tail counter, and the metadata buffer
    /// must hold at least [`TERM_METADATA_LENGTH`] bytes.
    pub fn new(term: AtomicBuffer, metadata: AtomicBuffer) -> Result<Self> {
        let capacity = term.capacity();
        if capacity == 0 || capacity % FRAME_ALIGNMENT != 0 || capacity > u32::MAX as usize {
            return Err(LogBufferError::InvalidCapacity { capacity });
        }

        if metadata.capacity() < TERM_METADATA_LENGTH {
            return Err(LogBufferError::MetadataTooSmall {
                capacity: metadata.capacity(),
                required: TERM_METADATA_LENGTH,
            });
        }

        Ok(Self { term, metadata })
    }

    /// Allocate a zeroed term buffer of `capacity` bytes with a fresh
    /// metadata region.
    pub fn allocate(capacity: usize) -> Result<Self> {
        if capacity == 0 || capacity % FRAME_ALIGNMENT != 0 || capacity > u32::MAX as usize {
            return Err(LogBufferError::InvalidCapacity { capacity });
        }

        Self::new(
            AtomicBuffer::new(capacity)?,
            AtomicBuffer::new(TERM_METADATA_LENGTH)?,
        )
    }

    /// Fixed byte size of the term region.
    pub fn capacity(&self) -> usize {
        self.term.capacity()
    }

    /// The region holding the framed messages.
    pub fn buffer(&self) -> &AtomicBuffer {
        &self.term
    }

    /// The metadata side channel.
    pub fn metadata(&self) -> &AtomicBuffer {
        &self.metadata
    }

    /// Acquire read of the writer's published tail offset, clamped to
    /// capacity.
    ///
    /// The raw counter can run past capacity when writers contend for the
    /// final slot of the term; clamping keeps the value meaningful as "bytes
    /// available in this buffer".
    pub fn tail_volatile(&self) -> usize {
        let tail = self.metadata.get_u32_volatile(TERM_TAIL_COUNTER_OFFSET) as usize;
        tail.min(self.capacity())
    }

    /// Unordered read of the tail counter, clamped to capacity.
    ///
    /// Only meaningful on the writer thread; readers use
    /// [`tail_volatile`](Self::tail_volatile).
    pub fn tail(&self) -> usize {
        let tail = self.metadata.get_u32(TERM_TAIL_COUNTER_OFFSET) as usize;
        tail.min(self.capacity())
    }

    /// Release store of the tail counter, making everything behind `tail`
    /// visible to readers.
    pub fn set_tail_ordered(&self, tail: usize) {
        self.metadata
            .put_u32_ordered(TERM_TAIL_COUNTER_OFFSET, tail as u32);
    }
}

impl fmt::Debug for TermBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TermBuffer")
            .field("capacity", &self.capacity())
            .field("tail", &self.tail())
            .finish()
    }
}
