// CA/Browser Forum Code Signing Baseline Requirements

pub mod validity_period_39_months;
pub mod validity_period_460_days;
