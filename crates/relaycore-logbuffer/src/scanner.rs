//! MTU-bounded scanning of framed messages as the writer's tail advances.

use tracing::trace;

use crate::buffer::AtomicBuffer;
use crate::error::{LogBufferError, Result};
use crate::frame::{self, FRAME_ALIGNMENT};
use crate::term::TermBuffer;

/// Scans a term buffer for whole-frame batches limited by an MTU, assuming
/// the buffer is built append-only with no gaps.
///
/// The scanner reads each frame's length field with acquire ordering; a
/// zero length is the writer's frontier and ends the batch without error.
/// Padding frames contribute only their aligned header to the reported
/// batch — the rest of their footprint is skipped over invisibly.
///
/// An instance is not thread safe. Each consuming thread must have its own
/// scanner.
#[derive(Debug)]
pub struct FrameScanner<'a> {
    term: &'a TermBuffer,
    aligned_header_length: usize,
    offset: usize,
}

impl<'a> FrameScanner<'a> {
    /// Construct a scanner over `term` for frames carrying `header_length`
    /// bytes of header before the payload.
    ///
    /// Fails if `header_length` does not pass
    /// [`frame::check_header_length`].
    pub fn new(term: &'a TermBuffer, header_length: usize) -> Result<Self> {
        frame::check_header_length(header_length)?;

        Ok(Self {
            term,
            aligned_header_length: frame::align(header_length, FRAME_ALIGNMENT),
            offset: 0,
        })
    }

    /// The offset at which the next frame begins.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The header length rounded up to [`FRAME_ALIGNMENT`], fixed at
    /// construction.
    pub fn aligned_header_length(&self) -> usize {
        self.aligned_header_length
    }

    /// Fixed byte size of the term region being scanned.
    pub fn capacity(&self) -> usize {
        self.term.capacity()
    }

    /// Is the scanning of the term buffer complete?
    pub fn is_complete(&self) -> bool {
        self.offset >= self.term.capacity()
    }

    /// Bytes published by the writer but not yet scanned.
    ///
    /// Uses an acquire read of the tail counter. Saturates at zero when the
    /// cursor has been [`seek`](Self::seek)ed past the published tail.
    pub fn remaining(&self) -> usize {
        self.term.tail_volatile().saturating_sub(self.offset)
    }

    /// Scan forward for available frames, limited by what fits in
    /// `mtu_length`.
    ///
    /// Accumulates whole aligned frames until the writer's frontier, the
    /// MTU limit, or the capacity boundary ends the batch. The frame that
    /// would overflow the MTU is left for the next call; a frame is never
    /// split across two notifications. If anything was accumulated the
    /// cursor advances and `handler` is invoked exactly once with the term
    /// region, the batch start offset, and the reported batch length.
    ///
    /// Returns the number of bytes reported to `handler`, 0 if nothing was
    /// available or nothing fit. A single frame larger than `mtu_length`
    /// makes no progress: every call reports 0 and the cursor stays put.
    pub fn scan_next<H>(&mut self, mut handler: H, mtu_length: usize) -> usize
    where
        H: FnMut(&AtomicBuffer, usize, usize),
    {
        let mut length = 0;

        if !self.is_complete() {
            let capacity = self.term.capacity();
            let start = self.offset;
            let buffer = self.term.buffer();

            let mut padding = 0;

            loop {
                let frame_length = frame::frame_length_volatile(buffer, start + length) as usize;
                if frame_length == 0 {
                    break;
                }

                let mut aligned_frame_length = frame::align(frame_length, FRAME_ALIGNMENT);

                if frame::is_padding_frame(buffer, start + length) {
                    padding = aligned_frame_length - self.aligned_header_length;
                    aligned_frame_length = self.aligned_header_length;
                }

                length += aligned_frame_length;

                if length > mtu_length {
                    length -= aligned_frame_length;
                    padding = 0;
                    break;
                }

                if start + length + padding >= capacity {
                    break;
                }
            }

            if length > 0 {
                self.offset += length + padding;
                handler(buffer, start, length);
            }
        }

        length
    }

    /// Reposition the cursor for the next scan.
    ///
    /// Fails with a bounds error if `offset` is beyond the buffer capacity;
    /// the cursor is left unchanged on failure.
    pub fn seek(&mut self, offset: usize) -> Result<()> {
        let capacity = self.term.capacity();
        if offset > capacity {
            return Err(LogBufferError::OffsetOutOfRange { offset, capacity });
        }

        trace!(offset, "frame scanner seek");
        self.offset = offset;

        Ok(())
    }
}
