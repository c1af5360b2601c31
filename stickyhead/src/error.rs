//! Attach-time errors.
//!
//! Everything after a successful attach is best-effort layout
//! synchronization and does not produce errors.

/// Errors that can occur when attaching a controller to a table.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AttachError {
    /// The table has no header row group to pin.
    #[error("table has no header row group")]
    MissingHeader,
}
