//! ssm - Browse and copy AWS SSM Parameter Store values.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── get           # Print a single value
//! │   └── output        # Styled error/hint output
//! ├── core/             # Core library components
//! │   ├── config        # Config file and flag merging
//! │   ├── domain/       # Parameter and ParameterType
//! │   ├── service       # fetch-one and list-all
//! │   └── store/        # Parameter store backends
//! │       ├── mod       # ParameterStore trait
//! │       ├── aws       # AWS SDK implementation
//! │       └── memory    # In-memory implementation (tests only)
//! └── tui/              # Interactive list
//!     ├── app           # State machine and messages
//!     ├── view          # Rendering
//!     ├── list          # Filterable selection
//!     ├── theme         # Styles
//!     └── keymap        # Key bindings
//! ```
//!
//! # Features
//!
//! - Single-key mode prints a decrypted value for use in scripts
//! - Interactive fuzzy-filtered list with copy and preview
//! - Batched listing: one describe and one decrypting get per page
//! - Works against LocalStack through a custom endpoint

pub mod cli;
pub mod core;
pub mod error;
pub mod tui;

pub use crate::core::domain::{Parameter, ParameterType};
pub use crate::core::service::ParameterService;
pub use crate::core::store::{AwsSsm, ParameterStore};
#[cfg(any(test, feature = "test-support"))]
pub use crate::core::store::MemoryStore;
pub use crate::error::{Error, Result};
