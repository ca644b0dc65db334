//! Layered context resolution for infrastructure stacks
//!
//! Every stack (AWS, Azure, Cloudflare) resolves its configuration before any
//! resource is defined:
//!
//! - **Context store**: single-owner key/value context seeded by the caller
//! - **Context resolution**: base context, then `extraContexts` documents in
//!   order, then the document for the current `stage`
//! - **Stack properties**: a fixed key set read back into a read-only snapshot
//!
//! # Architecture
//!
//! ```text
//!        provider constructs (out of tree)
//!                    |
//!          Stack / ResolvedProperties
//!                    |
//!     ContextResolver --- merge policy
//!                    |
//!       stack-fs (DocumentLoader, NormalizedPath)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use stack_core::{ContextResolver, ContextStore, Stack, StackKind};
//! use stack_fs::ContextPath;
//!
//! let resolver = ContextResolver::for_root("/path/to/project");
//! let store = ContextStore::seed_from_manifest(resolver.loader(), ContextPath::Manifest.as_str())?;
//! let stack = Stack::new(StackKind::Aws, &resolver, store)?;
//! let props: stack_core::AwsStackProps = stack.props().deserialize()?;
//! ```

pub mod context;
pub mod error;
pub mod properties;
pub mod stack;

pub use context::{
    ContextResolver, ContextStore, ConventionalStagePath, ResolutionReport, ResolverOptions,
    StageKind, StagePathResolver, merge,
};
pub use error::{Error, Result};
pub use properties::{
    AwsStackProps, AzureStackProps, CloudflareStackProps, CommonStackProps, ResolvedProperties,
    StackKind, resolve_properties,
};
pub use stack::Stack;
