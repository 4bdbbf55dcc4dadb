// Lint resolver - Applicability and effective-window resolution for one lint and one artifact

use crate::lint::{Effectiveness, LintResult, RegisteredLint};
use crate::model::Artifact;
use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use tracing::{debug, warn};

thread_local! {
    static RESOLVING: Cell<bool> = const { Cell::new(false) };
}

/// Marks the current thread as evaluating a lint until dropped
struct ResolvingGuard {
    previous: bool,
}

impl ResolvingGuard {
    fn enter() -> Self {
        Self {
            previous: RESOLVING.with(|flag| flag.replace(true)),
        }
    }
}

impl Drop for ResolvingGuard {
    fn drop(&mut self) {
        RESOLVING.with(|flag| flag.set(self.previous));
    }
}

fn is_resolving() -> bool {
    RESOLVING.with(Cell::get)
}

/// Replace the process panic hook so lint panics are only logged at debug level
///
/// Panics raised while a lint is being resolved are already reported as Fatal
/// results. Panics anywhere else still go to the previously installed hook.
/// Installing more than once has no further effect.
pub fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if is_resolving() {
                debug!("Lint panic at {:?}", info.location());
            } else {
                previous(info);
            }
        }));
    });
}

/// Resolve a single lint against an artifact
///
/// Applicability is checked first, then the effective window against the artifact's
/// reference time, and only then is the lint executed. A panic raised by the lint at
/// any stage is contained here and reported as a Fatal result for this lint alone.
pub fn resolve<A: Artifact>(entry: &RegisteredLint<A>, artifact: &A) -> LintResult {
    let outcome = {
        let _guard = ResolvingGuard::enter();
        panic::catch_unwind(AssertUnwindSafe(|| evaluate(entry, artifact)))
    };

    let result = match outcome {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!("Lint {} panicked: {}", entry.name(), message);
            LintResult::fatal(format!("lint panicked: {}", message))
        }
    };

    debug!("{} -> {}", entry.name(), result.status);
    result
}

fn evaluate<A: Artifact>(entry: &RegisteredLint<A>, artifact: &A) -> LintResult {
    if !entry.lint.check_applies(artifact) {
        return LintResult::not_applicable();
    }

    let metadata = &entry.metadata;
    let reference = artifact.reference_time();
    match metadata.effectiveness(reference) {
        Effectiveness::Effective => entry.lint.execute(artifact),
        Effectiveness::NotYetEffective => LintResult::not_effective(format!(
            "{} issued {} predates the lint's effective date {}",
            A::KIND,
            reference.format("%Y-%m-%d %H:%M:%S UTC"),
            metadata
                .effective_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        )),
        Effectiveness::Superseded => LintResult::not_effective(format!(
            "{} issued {} is on or after the lint's ineffective date {}",
            A::KIND,
            reference.format("%Y-%m-%d %H:%M:%S UTC"),
            metadata
                .ineffective_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        )),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
