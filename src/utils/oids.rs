// Object identifiers referenced by lints and the parser

/// qcStatements extension (RFC 3739, ETSI EN 319 412-5)
pub const QC_STATEMENTS: &str = "1.3.6.1.5.5.7.1.3";

/// Embedded SCT list extension (RFC 6962 §3.3)
pub const SCT_LIST: &str = "1.3.6.1.4.1.11129.2.4.2";

/// CRL number extension (RFC 5280 §5.2.3)
pub const CRL_NUMBER: &str = "2.5.29.20";

pub const EKU_SERVER_AUTH: &str = "1.3.6.1.5.5.7.3.1";
pub const EKU_CLIENT_AUTH: &str = "1.3.6.1.5.5.7.3.2";
pub const EKU_CODE_SIGNING: &str = "1.3.6.1.5.5.7.3.3";
pub const EKU_EMAIL_PROTECTION: &str = "1.3.6.1.5.5.7.3.4";
pub const EKU_TIME_STAMPING: &str = "1.3.6.1.5.5.7.3.8";
pub const EKU_OCSP_SIGNING: &str = "1.3.6.1.5.5.7.3.9";
