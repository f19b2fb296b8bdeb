//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── SelectionError   - Option-group constraint violations             │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront-api errors (separate crate)                                │
//! │  └── ApiFailure       - Normalized backend error envelope              │
//! │                                                                         │
//! │  storefront-client errors (separate crate)                             │
//! │  └── FlowError        - What control flows surface to the UI           │
//! │                                                                         │
//! │  Flow: SelectionError ──► FlowError ──► inline notification            │
//! │        ApiFailure     ──► FlowError ──► inline notification            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (group name, bounds)
//! 3. Errors are enum variants, never bare strings
//! 4. A selection error is found and surfaced *before* any network call

use thiserror::Error;

/// Option-group constraint violations.
///
/// Produced by [`crate::options::validate_selection`] for the *first*
/// violated constraint in traversal order. Submission is blocked until the
/// selection is fixed; these never reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Fewer options selected in a group than its `min_selection`.
    #[error("select at least {count} option(s) for {group}")]
    SelectAtLeast { count: u32, group: String },

    /// More options selected in a group than its `max_selection`.
    #[error("select at most {count} option(s) for {group}")]
    SelectAtMost { count: u32, group: String },
}

/// Input validation errors.
///
/// Early checks on user input before it is handed to an action function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },
}
