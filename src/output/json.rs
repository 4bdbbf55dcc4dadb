// JSON Output Module

use crate::engine::ResultSet;
use crate::error::Result;

/// Generate JSON output from a result set
pub fn generate_json(results: &ResultSet, pretty: bool) -> Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(results)?)
    } else {
        Ok(serde_json::to_string(results)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::LintResult;
    use std::collections::BTreeMap;

    fn results() -> ResultSet {
        let mut results = BTreeMap::new();
        results.insert("e_crl_has_next_update".to_string(), LintResult::pass());
        ResultSet::new(3, results)
    }

    #[test]
    fn test_json_generation() {
        let json = generate_json(&results(), false).unwrap();
        assert!(json.contains(r#""e_crl_has_next_update":{"result":"pass"}"#));

        let pretty_json = generate_json(&results(), true).unwrap();
        assert!(pretty_json.contains("e_crl_has_next_update"));
        assert!(pretty_json.contains("\n"));
    }
}
