// Lint catalog - Every lint shipped with certlint, grouped by the body that defines it
//
// Each lint module exposes `registration()`; adding a lint means adding its module and
// one entry to `CATALOG`.

pub mod cabf_br;
pub mod cabf_cs_br;
pub mod etsi;
pub mod rfc;

use crate::error::Result;
use crate::lint::{LintRegistration, Registry};

/// Registration constructors for the built-in lints
pub const CATALOG: &[fn() -> LintRegistration] = &[
    cabf_br::excessively_backdated::registration,
    cabf_cs_br::validity_period_39_months::registration,
    cabf_cs_br::validity_period_460_days::registration,
    etsi::duplicate_qcstatement::registration,
    rfc::crl_has_next_update::registration,
    rfc::ocsp_next_update_after_this_update::registration,
];

/// Add every catalog lint to `registry`
pub fn register_all(registry: &mut Registry) -> Result<()> {
    for registration in CATALOG {
        registry.register(registration())?;
    }
    Ok(())
}

/// A fresh registry holding the whole catalog
pub fn build_registry() -> Result<Registry> {
    let mut registry = Registry::new();
    register_all(&mut registry)?;
    Ok(registry)
}
