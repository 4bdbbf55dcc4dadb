// Lint registry - Registered lints per artifact kind, filtering and the global instance

use crate::error::{LintError, Result};
use crate::lint::{Lint, LintMetadata, LintSource};
use crate::model::{Artifact, ArtifactKind, Certificate, OcspResponse, RevocationList};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// A lint paired with its descriptor
pub struct RegisteredLint<A> {
    pub metadata: Arc<LintMetadata>,
    pub lint: Arc<dyn Lint<A>>,
}

impl<A> RegisteredLint<A> {
    pub fn new(metadata: LintMetadata, lint: impl Lint<A> + 'static) -> Self {
        Self {
            metadata: Arc::new(metadata),
            lint: Arc::new(lint),
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}

impl<A> Clone for RegisteredLint<A> {
    fn clone(&self) -> Self {
        Self {
            metadata: Arc::clone(&self.metadata),
            lint: Arc::clone(&self.lint),
        }
    }
}

impl<A> std::fmt::Debug for RegisteredLint<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredLint")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

/// A lint ready to be added to a registry, tagged with its artifact kind
#[derive(Debug, Clone)]
pub enum LintRegistration {
    Certificate(RegisteredLint<Certificate>),
    RevocationList(RegisteredLint<RevocationList>),
    OcspResponse(RegisteredLint<OcspResponse>),
}

impl LintRegistration {
    pub fn certificate(metadata: LintMetadata, lint: impl Lint<Certificate> + 'static) -> Self {
        LintRegistration::Certificate(RegisteredLint::new(metadata, lint))
    }

    pub fn revocation_list(
        metadata: LintMetadata,
        lint: impl Lint<RevocationList> + 'static,
    ) -> Self {
        LintRegistration::RevocationList(RegisteredLint::new(metadata, lint))
    }

    pub fn ocsp_response(metadata: LintMetadata, lint: impl Lint<OcspResponse> + 'static) -> Self {
        LintRegistration::OcspResponse(RegisteredLint::new(metadata, lint))
    }

    pub fn metadata(&self) -> &LintMetadata {
        match self {
            LintRegistration::Certificate(entry) => &entry.metadata,
            LintRegistration::RevocationList(entry) => &entry.metadata,
            LintRegistration::OcspResponse(entry) => &entry.metadata,
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        match self {
            LintRegistration::Certificate(_) => ArtifactKind::Certificate,
            LintRegistration::RevocationList(_) => ArtifactKind::RevocationList,
            LintRegistration::OcspResponse(_) => ArtifactKind::OcspResponse,
        }
    }
}

/// Artifact kinds a registry can hold lints for
pub trait Lintable: Artifact + Sized + 'static {
    fn registered(registry: &Registry) -> &BTreeMap<String, RegisteredLint<Self>>;
}

impl Lintable for Certificate {
    fn registered(registry: &Registry) -> &BTreeMap<String, RegisteredLint<Self>> {
        &registry.certificate_lints
    }
}

impl Lintable for RevocationList {
    fn registered(registry: &Registry) -> &BTreeMap<String, RegisteredLint<Self>> {
        &registry.revocation_list_lints
    }
}

impl Lintable for OcspResponse {
    fn registered(registry: &Registry) -> &BTreeMap<String, RegisteredLint<Self>> {
        &registry.ocsp_response_lints
    }
}

/// Criteria for deriving a restricted registry
///
/// Every populated criterion must hold for a lint to be kept. Source exclusions
/// win over source inclusions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    pub include_names: Vec<String>,
    pub exclude_names: Vec<String>,
    pub include_sources: Vec<LintSource>,
    pub exclude_sources: Vec<LintSource>,
    /// Regular expression the lint name must match
    pub name_pattern: Option<String>,
    /// Keep only lints in force at this instant
    pub effective_at: Option<DateTime<Utc>>,
}

impl FilterOptions {
    pub fn is_empty(&self) -> bool {
        self.include_names.is_empty()
            && self.exclude_names.is_empty()
            && self.include_sources.is_empty()
            && self.exclude_sources.is_empty()
            && self.name_pattern.is_none()
            && self.effective_at.is_none()
    }
}

/// One line of `Registry::write_json` output
#[derive(Serialize)]
struct LintDescription<'a> {
    #[serde(flatten)]
    metadata: &'a LintMetadata,
    artifact: ArtifactKind,
}

/// Collection of registered lints, keyed by name within each artifact kind
///
/// Lint names are unique across all kinds. A registry is only mutated while it
/// is being populated; filtering always produces a new registry.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    certificate_lints: BTreeMap<String, RegisteredLint<Certificate>>,
    revocation_list_lints: BTreeMap<String, RegisteredLint<RevocationList>>,
    ocsp_response_lints: BTreeMap<String, RegisteredLint<OcspResponse>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a lint, rejecting duplicate names and invalid effective windows
    pub fn register(&mut self, registration: LintRegistration) -> Result<()> {
        let metadata = registration.metadata();
        metadata.validate()?;
        if self.contains(&metadata.name) {
            return Err(LintError::DuplicateLintName {
                name: metadata.name.clone(),
            });
        }

        debug!(
            "Registered {} lint {} ({})",
            registration.kind(),
            metadata.name,
            metadata.source
        );

        match registration {
            LintRegistration::Certificate(entry) => {
                self.certificate_lints.insert(entry.name().to_string(), entry);
            }
            LintRegistration::RevocationList(entry) => {
                self.revocation_list_lints
                    .insert(entry.name().to_string(), entry);
            }
            LintRegistration::OcspResponse(entry) => {
                self.ocsp_response_lints
                    .insert(entry.name().to_string(), entry);
            }
        }
        Ok(())
    }

    /// Lints registered for artifact kind `A`, in name order
    pub fn lints<A: Lintable>(&self) -> impl Iterator<Item = &RegisteredLint<A>> {
        A::registered(self).values()
    }

    pub fn certificate_lints(&self) -> impl Iterator<Item = &RegisteredLint<Certificate>> {
        self.lints::<Certificate>()
    }

    pub fn revocation_list_lints(&self) -> impl Iterator<Item = &RegisteredLint<RevocationList>> {
        self.lints::<RevocationList>()
    }

    pub fn ocsp_response_lints(&self) -> impl Iterator<Item = &RegisteredLint<OcspResponse>> {
        self.lints::<OcspResponse>()
    }

    /// Every descriptor with its artifact kind, sorted by name
    pub fn all(&self) -> Vec<(ArtifactKind, &LintMetadata)> {
        let mut all: Vec<_> = self
            .certificate_lints
            .values()
            .map(|entry| (ArtifactKind::Certificate, entry.metadata.as_ref()))
            .chain(
                self.revocation_list_lints
                    .values()
                    .map(|entry| (ArtifactKind::RevocationList, entry.metadata.as_ref())),
            )
            .chain(
                self.ocsp_response_lints
                    .values()
                    .map(|entry| (ArtifactKind::OcspResponse, entry.metadata.as_ref())),
            )
            .collect();
        all.sort_by(|a, b| a.1.name.cmp(&b.1.name));
        all
    }

    pub fn names(&self) -> Vec<&str> {
        self.all()
            .into_iter()
            .map(|(_, metadata)| metadata.name.as_str())
            .collect()
    }

    /// Distinct sources of the registered lints
    pub fn sources(&self) -> BTreeSet<LintSource> {
        self.all()
            .into_iter()
            .map(|(_, metadata)| metadata.source)
            .collect()
    }

    pub fn by_name(&self, name: &str) -> Option<&LintMetadata> {
        self.certificate_lints
            .get(name)
            .map(|entry| entry.metadata.as_ref())
            .or_else(|| {
                self.revocation_list_lints
                    .get(name)
                    .map(|entry| entry.metadata.as_ref())
            })
            .or_else(|| {
                self.ocsp_response_lints
                    .get(name)
                    .map(|entry| entry.metadata.as_ref())
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.certificate_lints.len() + self.revocation_list_lints.len() + self.ocsp_response_lints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// New registry holding only the lints whose descriptor satisfies `predicate`
    pub fn filter_by<P>(&self, predicate: P) -> Registry
    where
        P: Fn(&LintMetadata) -> bool,
    {
        fn keep<A>(
            lints: &BTreeMap<String, RegisteredLint<A>>,
            predicate: &impl Fn(&LintMetadata) -> bool,
        ) -> BTreeMap<String, RegisteredLint<A>> {
            lints
                .iter()
                .filter(|(_, entry)| predicate(entry.metadata.as_ref()))
                .map(|(name, entry)| (name.clone(), entry.clone()))
                .collect()
        }

        Registry {
            certificate_lints: keep(&self.certificate_lints, &predicate),
            revocation_list_lints: keep(&self.revocation_list_lints, &predicate),
            ocsp_response_lints: keep(&self.ocsp_response_lints, &predicate),
        }
    }

    /// New registry restricted by `options`
    pub fn filter(&self, options: &FilterOptions) -> Result<Registry> {
        if !options.include_names.is_empty() && !options.exclude_names.is_empty() {
            return Err(LintError::ConflictingNameFilters);
        }
        if let Some(name) = options
            .include_names
            .iter()
            .chain(&options.exclude_names)
            .find(|name| !self.contains(name))
        {
            return Err(LintError::UnknownLintName { name: name.clone() });
        }
        let pattern = options
            .name_pattern
            .as_deref()
            .map(Regex::new)
            .transpose()?;

        if options.is_empty() {
            return Ok(self.clone());
        }

        let filtered = self.filter_by(|metadata| {
            let name = metadata.name.as_str();
            (options.include_names.is_empty() || options.include_names.iter().any(|n| n == name))
                && !options.exclude_names.iter().any(|n| n == name)
                && (options.include_sources.is_empty()
                    || options.include_sources.contains(&metadata.source))
                && !options.exclude_sources.contains(&metadata.source)
                && pattern.as_ref().is_none_or(|re| re.is_match(name))
                && options
                    .effective_at
                    .is_none_or(|at| metadata.is_effective_at(at))
        });

        debug!("Filtered registry from {} to {} lints", self.len(), filtered.len());
        Ok(filtered)
    }

    /// Write one JSON object per lint, one per line, sorted by name
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        for (artifact, metadata) in self.all() {
            serde_json::to_writer(&mut writer, &LintDescription { metadata, artifact })?;
            writeln!(writer)?;
        }
        Ok(())
    }
}

static GLOBAL_REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry, populated from the lint catalog on first use
///
/// # Panics
///
/// Panics if the catalog itself is defective (duplicate names or an inverted
/// effective window); no lint run is meaningful in that state.
pub fn global_registry() -> &'static Registry {
    GLOBAL_REGISTRY.get_or_init(|| match crate::lints::build_registry() {
        Ok(registry) => registry,
        Err(e) => panic!("Lint catalog is defective: {}", e),
    })
}
