/// Errors from log-buffer construction and cursor movement.
#[derive(Debug, thiserror::Error)]
pub enum LogBufferError {
    /// The frame header length is incompatible with the frame layout rules.
    #[error("invalid frame header length {header_length} (must be a positive multiple of 8)")]
    InvalidHeaderLength { header_length: usize },

    /// The requested buffer capacity cannot hold aligned frames.
    #[error("invalid term capacity {capacity} (must be a positive multiple of 32 no larger than u32::MAX)")]
    InvalidCapacity { capacity: usize },

    /// The metadata buffer cannot hold the tail counter.
    #[error("metadata buffer too small ({capacity} bytes, need {required})")]
    MetadataTooSmall { capacity: usize, required: usize },

    /// A seek offset fell outside the scannable range.
    #[error("invalid offset {offset}: range is 0 - {capacity}")]
    OffsetOutOfRange { offset: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, LogBufferError>;
