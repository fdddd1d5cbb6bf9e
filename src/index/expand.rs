use std::sync::Arc;

use super::Entry;

/// Token delimiter in compound names.
pub const DELIMITER: char = '_';

/// Expand a compound name into its index entries: the full name itself, followed by
/// every right-aligned token chain (`a_b_c` -> `a_b_c`, `b_c`, `c`).
///
/// Empty tokens are kept as-is, so `a__b` yields `_b` and `a_` yields an empty key.
pub fn expand(name: &str, score: i64) -> Vec<Entry> {
    let full_name: Arc<str> = Arc::from(name);

    let mut out = Vec::with_capacity(name.matches(DELIMITER).count() + 1);
    out.push(Entry {
        key: Box::from(name),
        full_name: full_name.clone(),
        score,
    });

    // Every delimiter starts the next shorter chain.
    for (pos, _) in name.match_indices(DELIMITER) {
        out.push(Entry {
            key: Box::from(&name[pos + DELIMITER.len_utf8()..]),
            full_name: full_name.clone(),
            score,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(name: &str) -> Vec<String> {
        expand(name, 0).iter().map(|e| e.key.to_string()).collect()
    }

    #[test]
    fn test_chained_tails() {
        assert_eq!(
            keys("alpha_beta_gamma"),
            vec!["alpha_beta_gamma", "beta_gamma", "gamma"]
        );
    }

    #[test]
    fn test_single_token() {
        let entries = expand("house", 5);
        assert_eq!(entries.len(), 1);
        assert_eq!(&*entries[0].key, "house");
        assert_eq!(&*entries[0].full_name, "house");
        assert_eq!(entries[0].score, 5);
    }

    #[test]
    fn test_one_entry_per_token() {
        for name in ["a", "a_b", "a_b_c_d", "x_y_z_w_v"] {
            let tokens = name.split(DELIMITER).count();
            assert_eq!(expand(name, 1).len(), tokens, "{}", name);
        }
    }

    #[test]
    fn test_entries_share_full_name_and_score() {
        let entries = expand("car_wheel", 10);
        for e in &entries {
            assert_eq!(&*e.full_name, "car_wheel");
            assert_eq!(e.score, 10);
        }
        assert!(Arc::ptr_eq(&entries[0].full_name, &entries[1].full_name));
    }

    #[test]
    fn test_empty_tokens_pass_through() {
        assert_eq!(keys("a__b"), vec!["a__b", "_b", "b"]);
        assert_eq!(keys("a_"), vec!["a_", ""]);
        assert_eq!(keys("_a"), vec!["_a", "a"]);
    }
}
