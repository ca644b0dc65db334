//! Context store and layered context resolution
//!
//! Every stack resolves its context before creating any resource. The store
//! is seeded by the caller (usually from the deployment manifest), then
//! [`ContextResolver::resolve`] layers documents onto it:
//!
//! 1. **Base** - whatever the store already holds
//! 2. **Extra contexts** - each path listed under `extraContexts`, in order
//! 3. **Stage context** - `{stageContextPath}/{stage}.json`, when present
//!
//! Each document is applied key by key with [`merge`]: nested mappings are
//! deep-merged, sequences and scalars replace the previous value.
//!
//! # Example
//!
//! ```ignore
//! use stack_core::context::{ContextResolver, ContextStore};
//! use serde_json::json;
//!
//! let mut store = ContextStore::from_value(json!({
//!     "stage": "prd",
//!     "extraContexts": ["config/shared.json"],
//! }))?;
//!
//! let resolver = ContextResolver::for_root("/path/to/project");
//! resolver.resolve(&mut store)?;
//! let domain = store.get_str("domainName");
//! ```

mod merge;
mod options;
mod resolver;
mod stage;
mod store;

pub use merge::{merge, merge_in_place};
pub use options::ResolverOptions;
pub use resolver::{ContextResolver, ResolutionReport};
pub use stage::{ConventionalStagePath, StageKind, StagePathResolver};
pub use store::ContextStore;

/// Ordered list of auxiliary document paths
pub const EXTRA_CONTEXTS_KEY: &str = "extraContexts";

/// Name of the deployment stage
pub const STAGE_KEY: &str = "stage";

/// Directory holding stage documents
pub const STAGE_CONTEXT_PATH_KEY: &str = "stageContextPath";
