// IETF RFC requirements on revocation lists and OCSP responses

pub mod crl_has_next_update;
pub mod ocsp_next_update_after_this_update;
