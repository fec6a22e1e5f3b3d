//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront domain operations.
///
/// The state containers themselves never fail: updates and removals against
/// missing keys are defined as silent no-ops, and input validity is the
/// caller's responsibility. The only fallible seam is catalog lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(u32),
}
