//! An EasyMotion-style jump motion resolution core for modal editors.
//!
//! Given a motion id (`"w"`, `"t"`, `"bd-jk"`, …) this crate decides which
//! search pattern or offset set applies, which region of the buffer it is
//! restricted to, how the resulting jump composes with a pending operator,
//! and what caret adjustment follows the landing. The interactive labeling
//! itself, the caret, and key dispatch belong to the host: the host
//! implements [`EditorOps`], forwards [`ExecutionResult`] to its jump
//! engine, and applies the [`EditorCommand`]s emitted when the jump
//! finishes.
//!
//! ```no_run
//! use easyjump::{Catalog, Invocation, MotionConfig, Outcome, execute};
//! # fn host(ed: &impl easyjump::EditorOps) -> Result<(), easyjump::MotionError> {
//! let catalog = Catalog::new();
//! let config = MotionConfig::default();
//! let motion = catalog.resolve("w")?;
//! let (invocation, setup) = Invocation::begin(motion, ed);
//! let request = execute(motion, ed, &config)?;
//! // ... host runs `setup`, submits `request` to its jump engine and
//! // eventually reports back:
//! let outcome = Outcome::Cancelled;
//! let commands = invocation.finalize(ed, outcome);
//! # let _ = commands;
//! # Ok(())
//! # }
//! ```

pub mod boundary;
pub mod catalog;
pub mod config;
pub mod executor;
pub mod invocation;
pub mod mapping;
pub mod patterns;
pub mod traits;
pub mod types;

pub use crate::boundary::Boundary;
pub use crate::catalog::{Catalog, LineDirection, MotionDescriptor, MotionError, SearchSpec};
pub use crate::config::MotionConfig;
pub use crate::executor::{ExecutionResult, SearchPattern, execute};
pub use crate::invocation::Invocation;
pub use crate::mapping::{Mapping, MappingModes, default_mappings, plug_command};
pub use crate::patterns::Pattern;
pub use crate::traits::EditorOps;
pub use crate::types::{
    Direction, EditorCommand, LastSearch, MotionType, Outcome, PostStop, VisualKind,
    VisualPosition,
};
