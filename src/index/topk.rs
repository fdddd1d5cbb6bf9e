use serde::Deserialize;

/// Maximum number of suggestions returned per query.
pub const MAX_RESULTS: usize = 10;

/// What to do when a full name shows up again during a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dedup {
    /// Keep the score of the first occurrence and ignore later ones.
    #[default]
    FirstSeen,
    /// Keep the highest score seen for the name.
    MaxScore,
}

/// Bounded accumulator of distinct names. Once full, every new name overwrites
/// the first slot holding the lowest score.
pub struct TopK<'a> {
    items: Vec<(&'a str, i64)>,
    dedup: Dedup,
}

impl<'a> TopK<'a> {
    pub fn new(dedup: Dedup) -> Self {
        Self {
            items: Vec::with_capacity(MAX_RESULTS),
            dedup,
        }
    }

    pub fn offer(&mut self, name: &'a str, score: i64) {
        if let Some(held) = self.items.iter_mut().find(|(n, _)| *n == name) {
            if self.dedup == Dedup::MaxScore && score > held.1 {
                held.1 = score;
            }
            return;
        }

        if self.items.len() < MAX_RESULTS {
            self.items.push((name, score));
            return;
        }

        // min_by_key picks the first of equal minimums.
        if let Some((idx, _)) = self.items.iter().enumerate().min_by_key(|(_, (_, s))| *s) {
            self.items[idx] = (name, score);
        }
    }

    /// Consume the accumulator, returning names by descending score. Equal scores
    /// keep their insertion order.
    pub fn into_sorted(mut self) -> Vec<(&'a str, i64)> {
        self.items.sort_by(|a, b| b.1.cmp(&a.1));
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_descending_stable() {
        let mut t = TopK::new(Dedup::FirstSeen);
        t.offer("a", 1);
        t.offer("b", 5);
        t.offer("c", 1);
        t.offer("d", 5);
        assert_eq!(t.into_sorted(), vec![("b", 5), ("d", 5), ("a", 1), ("c", 1)]);
    }

    #[test]
    fn test_first_seen_ignores_later_scores() {
        let mut t = TopK::new(Dedup::FirstSeen);
        t.offer("a", 1);
        t.offer("a", 100);
        assert_eq!(t.into_sorted(), vec![("a", 1)]);
    }

    #[test]
    fn test_max_score_keeps_highest() {
        let mut t = TopK::new(Dedup::MaxScore);
        t.offer("a", 1);
        t.offer("b", 3);
        t.offer("a", 100);
        t.offer("a", 2);
        assert_eq!(t.into_sorted(), vec![("a", 100), ("b", 3)]);
    }

    #[test]
    fn test_capacity_evicts_first_minimum() {
        let names: Vec<String> = (0..MAX_RESULTS).map(|i| format!("n{}", i)).collect();
        let mut t = TopK::new(Dedup::FirstSeen);
        for (i, n) in names.iter().enumerate() {
            // n0 and n5 both hold the minimum.
            let score = if i == 0 || i == 5 { 0 } else { 10 };
            t.offer(n, score);
        }
        t.offer("late", 7);

        let out = t.into_sorted();
        assert_eq!(out.len(), MAX_RESULTS);
        assert!(!out.iter().any(|(n, _)| *n == "n0"));
        assert!(out.iter().any(|(n, _)| *n == "n5"));
        assert!(out.contains(&("late", 7)));
    }

    #[test]
    fn test_full_set_overwrites_even_with_lower_score() {
        let names: Vec<String> = (0..MAX_RESULTS).map(|i| format!("n{}", i)).collect();
        let mut t = TopK::new(Dedup::FirstSeen);
        for (i, n) in names.iter().enumerate() {
            t.offer(n, 10 + i as i64);
        }
        t.offer("low", 1);

        let out = t.into_sorted();
        assert_eq!(out.len(), MAX_RESULTS);
        assert_eq!(out.last(), Some(&("low", 1)));
        assert!(!out.iter().any(|(n, _)| *n == "n0"));
    }

    #[test]
    fn test_duplicate_does_not_evict_when_full() {
        let names: Vec<String> = (0..MAX_RESULTS).map(|i| format!("n{}", i)).collect();
        let mut t = TopK::new(Dedup::FirstSeen);
        for n in &names {
            t.offer(n, 1);
        }
        t.offer("n3", 50);
        let out = t.into_sorted();
        assert_eq!(out.len(), MAX_RESULTS);
        assert!(out.iter().all(|(_, s)| *s == 1));
    }
}
