/// Error returned by the bulk collection operations that have no
/// well-defined lock-free semantics over snapshots.
///
/// These operations fail unconditionally, regardless of array contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unsupported snapshot array operation `{operation}`")]
pub struct Unsupported {
    /// Name of the rejected operation.
    pub operation: &'static str,
}
