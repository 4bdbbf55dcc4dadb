// Effective dates - Publication and cutover dates of the requirements in the catalog

use chrono::{DateTime, TimeZone, Utc};
use std::sync::LazyLock;

/// Midnight UTC on the given calendar day
///
/// Only called with literal dates; an impossible date is a catalog defect and panics.
pub fn utc_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    match Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single() {
        Some(date) => date,
        None => panic!("invalid calendar date {}-{:02}-{:02}", year, month, day),
    }
}

/// RFC 5280 publication
pub static RFC5280_DATE: LazyLock<DateTime<Utc>> = LazyLock::new(|| utc_date(2008, 5, 1));

/// RFC 6960 publication
pub static RFC6960_DATE: LazyLock<DateTime<Utc>> = LazyLock::new(|| utc_date(2013, 6, 1));

/// CA/B Forum ballot SC62 (certificate profiles, backdating limit)
pub static SC62_EFFECTIVE_DATE: LazyLock<DateTime<Utc>> =
    LazyLock::new(|| utc_date(2023, 9, 15));

/// Code Signing BRs v1.2
pub static CABF_CS_BRS_1_2_DATE: LazyLock<DateTime<Utc>> =
    LazyLock::new(|| utc_date(2019, 8, 13));

/// Code Signing ballot CSC-31 (460 day maximum validity)
pub static CABF_CS_CSC_31_DATE: LazyLock<DateTime<Utc>> = LazyLock::new(|| utc_date(2026, 3, 1));

/// ETSI EN 319 412-5 v2.6.0
pub static ETSI_EN_319_412_5_V2_6_0_DATE: LazyLock<DateTime<Utc>> =
    LazyLock::new(|| utc_date(2025, 4, 1));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_date_is_midnight() {
        assert_eq!(
            *SC62_EFFECTIVE_DATE,
            Utc.with_ymd_and_hms(2023, 9, 15, 0, 0, 0).unwrap()
        );
    }

    #[test]
    #[should_panic(expected = "invalid calendar date 2023-02-30")]
    fn test_invalid_date_panics() {
        utc_date(2023, 2, 30);
    }

    #[test]
    fn test_catalog_dates_are_valid() {
        let dates = [
            *RFC5280_DATE,
            *RFC6960_DATE,
            *SC62_EFFECTIVE_DATE,
            *CABF_CS_BRS_1_2_DATE,
            *CABF_CS_CSC_31_DATE,
            *ETSI_EN_319_412_5_V2_6_0_DATE,
        ];
        assert!(dates.iter().all(|date| *date > DateTime::<Utc>::MIN_UTC));
    }

    #[test]
    fn test_code_signing_cutover_follows_v1_2() {
        assert!(*CABF_CS_BRS_1_2_DATE < *CABF_CS_CSC_31_DATE);
    }
}
