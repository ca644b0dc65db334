//! Layered context resolution
//!
//! A single pass over the store that applies, in order:
//!
//! 1. the base context already in the store
//! 2. every auxiliary document listed under `extraContexts`, in list order
//! 3. the stage document selected by `stage`, if one exists
//!
//! Control keys are read once, before any layer is applied, so documents
//! cannot change which further documents load.

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde_json::Value;
use stack_fs::{Document, DocumentLoader, NormalizedPath, validate_path_identifier};

use super::merge::merge_in_place;
use super::options::ResolverOptions;
use super::stage::{ConventionalStagePath, StageKind, StagePathResolver};
use super::store::{ContextStore, shape_of};
use super::{EXTRA_CONTEXTS_KEY, STAGE_CONTEXT_PATH_KEY, STAGE_KEY};
use crate::{Error, Result};

/// What a resolution pass applied to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionReport {
    /// Auxiliary documents applied, in application order
    pub auxiliary_documents: Vec<NormalizedPath>,

    /// The stage document, when one was found and applied
    pub stage_document: Option<NormalizedPath>,

    /// Every top-level key written by any layer
    pub touched_keys: BTreeSet<String>,
}

impl ResolutionReport {
    /// Number of document layers applied on top of the base context.
    pub fn layers_applied(&self) -> usize {
        self.auxiliary_documents.len() + usize::from(self.stage_document.is_some())
    }
}

/// Control keys as they stood in the base context.
#[derive(Debug)]
struct ControlKeys {
    extra_contexts: Vec<String>,
    stage: Option<String>,
    stage_context_path: String,
}

impl ControlKeys {
    fn read(store: &ContextStore, options: &ResolverOptions) -> Result<Self> {
        let extra_contexts = match store.get(EXTRA_CONTEXTS_KEY) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        Error::invalid_key(EXTRA_CONTEXTS_KEY, "a sequence of document paths")
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            Some(other) => {
                tracing::debug!(found = shape_of(other), "extraContexts is not a sequence");
                return Err(Error::invalid_key(
                    EXTRA_CONTEXTS_KEY,
                    "a sequence of document paths",
                ));
            }
        };

        let stage = optional_string(store, STAGE_KEY)?;
        if let Some(stage) = &stage {
            validate_path_identifier(stage, "Stage name").map_err(|reason| {
                Error::InvalidStage {
                    stage: stage.clone(),
                    reason,
                }
            })?;
        }

        let stage_context_path = optional_string(store, STAGE_CONTEXT_PATH_KEY)?
            .unwrap_or_else(|| options.default_stage_context_path.clone());

        Ok(Self {
            extra_contexts,
            stage,
            stage_context_path,
        })
    }
}

fn optional_string(store: &ContextStore, key: &str) -> Result<Option<String>> {
    match store.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(Error::invalid_key(key, "a string")),
    }
}

/// Resolves the layered context of a stack against a project root.
pub struct ContextResolver {
    loader: DocumentLoader,
    options: ResolverOptions,
    /// Custom stage → path mapping; the conventional one is used when unset
    stage_paths: Option<Box<dyn StagePathResolver>>,
}

impl ContextResolver {
    /// Create a resolver that loads documents through `loader`.
    pub fn new(loader: DocumentLoader) -> Self {
        Self {
            loader,
            options: ResolverOptions::default(),
            stage_paths: None,
        }
    }

    /// Create a resolver for documents under `root`.
    pub fn for_root(root: impl AsRef<Path>) -> Self {
        Self::new(DocumentLoader::new(root.as_ref()))
    }

    /// Replace the resolver settings.
    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the stage → document path mapping.
    pub fn with_stage_path_resolver(mut self, resolver: impl StagePathResolver + 'static) -> Self {
        self.stage_paths = Some(Box::new(resolver));
        self
    }

    pub fn loader(&self) -> &DocumentLoader {
        &self.loader
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// The stage document path for `stage` under `stage_context_path`.
    pub fn stage_document_path(&self, stage_context_path: &str, stage: &str) -> String {
        match &self.stage_paths {
            Some(custom) => custom.stage_document(stage_context_path, stage),
            None => ConventionalStagePath::new(self.options.document_format)
                .stage_document(stage_context_path, stage),
        }
    }

    /// Run one resolution pass, mutating `store` in place.
    ///
    /// # Errors
    ///
    /// - a control key has the wrong shape, or the stage name is not a safe
    ///   file name; nothing is applied
    /// - an auxiliary document is missing or malformed; layers applied
    ///   before it stay applied, it and later layers are not applied
    /// - the stage document exists but is malformed
    ///
    /// A missing stage document is not an error.
    pub fn resolve(&self, store: &mut ContextStore) -> Result<ResolutionReport> {
        let control = ControlKeys::read(store, &self.options)?;
        let mut report = ResolutionReport::default();

        self.apply_auxiliary_layers(store, &control.extra_contexts, &mut report)?;

        match &control.stage {
            Some(stage) => {
                self.apply_stage_layer(store, stage, &control.stage_context_path, &mut report)?;
            }
            None => {
                tracing::debug!("No stage set; skipping stage context");
            }
        }

        tracing::debug!(
            auxiliary = report.auxiliary_documents.len(),
            stage_applied = report.stage_document.is_some(),
            keys = report.touched_keys.len(),
            "Context resolution complete"
        );
        Ok(report)
    }

    fn apply_auxiliary_layers(
        &self,
        store: &mut ContextStore,
        paths: &[String],
        report: &mut ResolutionReport,
    ) -> Result<()> {
        if paths.is_empty() {
            tracing::debug!("No extra contexts provided; using base context only");
            return Ok(());
        }

        // A path listed twice is reapplied from here rather than re-read.
        let mut loaded: HashMap<NormalizedPath, Document> = HashMap::new();

        for (position, path) in paths.iter().enumerate() {
            let resolved = self.loader.resolve(path);
            let document = match loaded.entry(resolved.clone()) {
                Entry::Occupied(entry) => {
                    tracing::debug!(path = %resolved, position, "Reapplying extra context");
                    entry.into_mut()
                }
                Entry::Vacant(entry) => {
                    tracing::debug!(path = %resolved, position, "Loading extra context");
                    entry.insert(self.loader.load(path)?)
                }
            };
            apply_layer(store, document, &mut report.touched_keys);
            report.auxiliary_documents.push(resolved);
        }
        Ok(())
    }

    fn apply_stage_layer(
        &self,
        store: &mut ContextStore,
        stage: &str,
        stage_context_path: &str,
        report: &mut ResolutionReport,
    ) -> Result<()> {
        let path = self.stage_document_path(stage_context_path, stage);
        let resolved = self.loader.resolve(&path);

        if !self.loader.exists(&path) {
            let kind = StageKind::from_name(stage);
            if kind.is_production() {
                tracing::warn!(stage, path = %resolved, "No stage context; using merged context");
            } else if kind.is_development() {
                tracing::debug!(stage, path = %resolved, "No stage context; using merged context");
            } else {
                tracing::info!(stage, path = %resolved, "No stage context; using merged context");
            }
            return Ok(());
        }

        tracing::debug!(stage, path = %resolved, "Loading stage context");
        let document = self.loader.load(&path)?;
        apply_layer(store, &document, &mut report.touched_keys);
        report.stage_document = Some(resolved);
        Ok(())
    }
}

impl std::fmt::Debug for ContextResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextResolver")
            .field("loader", &self.loader)
            .field("options", &self.options)
            .field("custom_stage_paths", &self.stage_paths.is_some())
            .finish()
    }
}

/// Merge every top-level key of `document` into the store.
fn apply_layer(store: &mut ContextStore, document: &Document, touched: &mut BTreeSet<String>) {
    for (key, value) in document {
        match store.get_mut(key) {
            Some(existing) => merge_in_place(existing, value),
            None => store.set(key.clone(), value.clone()),
        }
        touched.insert(key.clone());
    }
}
