// ETSI Electronic Signatures and Infrastructures

pub mod duplicate_qcstatement;
