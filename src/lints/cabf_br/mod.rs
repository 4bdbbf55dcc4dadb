// CA/Browser Forum TLS Baseline Requirements

pub mod excessively_backdated;
