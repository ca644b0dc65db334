//! Stack construction: one resolution pass, then a read-only context

use serde_json::Value;

use crate::context::{ContextResolver, ContextStore, ResolutionReport, StageKind};
use crate::properties::{ResolvedProperties, StackKind, resolve_properties};
use crate::Result;

/// A stack whose context has been fully layered.
///
/// Construction runs exactly one resolution pass over the owned store. After
/// that the store is only reachable through shared references, so
/// constructs can read it but never write to it.
#[derive(Debug)]
pub struct Stack {
    kind: StackKind,
    context: ContextStore,
    props: ResolvedProperties,
    report: ResolutionReport,
}

impl Stack {
    /// Resolve `store` with `resolver` and snapshot the variant's properties.
    pub fn new(kind: StackKind, resolver: &ContextResolver, mut store: ContextStore) -> Result<Self> {
        tracing::debug!(%kind, root = %resolver.loader().root(), "Resolving stack context");
        let report = resolver.resolve(&mut store)?;
        let props = resolve_properties(&store, kind.property_keys());

        Ok(Self {
            kind,
            context: store,
            props,
            report,
        })
    }

    pub fn kind(&self) -> StackKind {
        self.kind
    }

    /// The resolved context store.
    pub fn context(&self) -> &ContextStore {
        &self.context
    }

    /// Shorthand for `context().get(key)`.
    pub fn try_get_context(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }

    /// The property snapshot taken after resolution.
    pub fn props(&self) -> &ResolvedProperties {
        &self.props
    }

    /// What the resolution pass applied.
    pub fn report(&self) -> &ResolutionReport {
        &self.report
    }

    /// Stage name from the resolved properties.
    pub fn stage(&self) -> Option<&str> {
        self.props.get_str("stage")
    }

    /// Classification of the resolved stage; `None` when no stage is set.
    pub fn stage_kind(&self) -> Option<StageKind> {
        self.stage().map(StageKind::from_name)
    }
}
