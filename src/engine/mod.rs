// Lint engine - Runs a registry's lints against one artifact and aggregates the outcomes
//
// Each lint is resolved independently (see `crate::lint::resolve`) and produces one
// `(name, result)` pair; the pairs are merged into an ordered map once every lint has
// finished, so evaluation order never shows in the output.

pub mod result_set;

use crate::error::{LintError, Result};
use crate::lint::{LintResult, Lintable, Registry, global_registry, resolve};
use crate::model::{Certificate, OcspResponse, RevocationList};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

pub use result_set::{ResultSet, ResultSummary};

/// Version stamped on every result set
pub const RESULT_SCHEMA_VERSION: i64 = 3;

/// Configurable lint driver
///
/// Uses the global registry unless one is supplied. Lints run on rayon's global
/// pool by default, on a dedicated pool when worker threads are set, or inline
/// when parallelism is disabled.
#[derive(Debug, Clone)]
pub struct Linter<'r> {
    registry: Option<&'r Registry>,
    parallel: bool,
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl Default for Linter<'_> {
    fn default() -> Self {
        Self {
            registry: None,
            parallel: true,
            pool: None,
        }
    }
}

impl<'r> Linter<'r> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(mut self, registry: &'r Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Run lints on a dedicated pool of `threads` workers
    pub fn with_worker_threads(mut self, threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(LintError::Config {
                message: "worker_threads must be greater than zero".to_string(),
            });
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("certlint-worker-{}", i))
            .build()
            .map_err(|e| LintError::Config {
                message: format!("Failed to build worker pool: {}", e),
            })?;
        self.pool = Some(Arc::new(pool));
        self.parallel = true;
        Ok(self)
    }

    pub fn registry(&self) -> &Registry {
        match self.registry {
            Some(registry) => registry,
            None => global_registry(),
        }
    }

    /// Run every lint registered for `A`; `None` in, `None` out
    pub fn lint<A: Lintable>(&self, artifact: Option<&A>) -> Option<ResultSet> {
        artifact.map(|artifact| self.run(artifact))
    }

    pub fn lint_certificate(&self, certificate: Option<&Certificate>) -> Option<ResultSet> {
        self.lint(certificate)
    }

    pub fn lint_revocation_list(&self, crl: Option<&RevocationList>) -> Option<ResultSet> {
        self.lint(crl)
    }

    pub fn lint_ocsp_response(&self, response: Option<&OcspResponse>) -> Option<ResultSet> {
        self.lint(response)
    }

    fn run<A: Lintable>(&self, artifact: &A) -> ResultSet {
        let entries: Vec<_> = self.registry().lints::<A>().collect();
        debug!("Running {} {} lints", entries.len(), A::KIND);

        let results: BTreeMap<String, LintResult> = if self.parallel {
            let evaluate = || -> BTreeMap<String, LintResult> {
                entries
                    .par_iter()
                    .map(|entry| (entry.name().to_string(), resolve(entry, artifact)))
                    .collect()
            };
            match &self.pool {
                Some(pool) => pool.install(evaluate),
                None => evaluate(),
            }
        } else {
            entries
                .iter()
                .map(|entry| (entry.name().to_string(), resolve(entry, artifact)))
                .collect()
        };

        ResultSet::new(RESULT_SCHEMA_VERSION, results)
    }
}

/// Lint a certificate against the global registry
pub fn lint_certificate(certificate: Option<&Certificate>) -> Option<ResultSet> {
    lint_certificate_ex(certificate, None)
}

/// Lint a certificate against `registry`, or the global registry when `None`
pub fn lint_certificate_ex(
    certificate: Option<&Certificate>,
    registry: Option<&Registry>,
) -> Option<ResultSet> {
    driver(registry).lint(certificate)
}

pub fn lint_revocation_list(crl: Option<&RevocationList>) -> Option<ResultSet> {
    lint_revocation_list_ex(crl, None)
}

pub fn lint_revocation_list_ex(
    crl: Option<&RevocationList>,
    registry: Option<&Registry>,
) -> Option<ResultSet> {
    driver(registry).lint(crl)
}

pub fn lint_ocsp_response(response: Option<&OcspResponse>) -> Option<ResultSet> {
    lint_ocsp_response_ex(response, None)
}

pub fn lint_ocsp_response_ex(
    response: Option<&OcspResponse>,
    registry: Option<&Registry>,
) -> Option<ResultSet> {
    driver(registry).lint(response)
}

fn driver(registry: Option<&Registry>) -> Linter<'_> {
    match registry {
        Some(registry) => Linter::new().with_registry(registry),
        None => Linter::new(),
    }
}
