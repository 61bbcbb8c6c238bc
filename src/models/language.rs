use std::collections::BTreeMap;

/// Language -> bytes for one repository, as `/repos/{owner}/{repo}/languages` returns it
pub type LanguageBytes = BTreeMap<String, u64>;

/// Accumulated byte counts across repositories. Built fresh for every render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageTally {
    bytes: BTreeMap<String, u64>,
    total: u64,
}

/// A language's share of all counted bytes, in percent
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageShare {
    pub name: String,
    pub percentage: f64,
}

impl LanguageTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, languages: &LanguageBytes) {
        for (lang, bytes) in languages {
            *self.bytes.entry(lang.clone()).or_insert(0) += bytes;
            self.total += bytes;
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Top `limit` languages by share, highest first. Ties keep name order.
    pub fn top(&self, limit: usize) -> Vec<LanguageShare> {
        if self.total == 0 {
            return Vec::new();
        }
        let total = self.total as f64;
        let mut shares: Vec<LanguageShare> = self
            .bytes
            .iter()
            .map(|(name, bytes)| LanguageShare {
                name: name.clone(),
                percentage: *bytes as f64 / total * 100.0,
            })
            .collect();
        shares.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
        shares.truncate(limit);
        shares
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn langs(pairs: &[(&str, u64)]) -> LanguageBytes {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_tally_accumulates_across_repos() {
        let mut tally = LanguageTally::new();
        tally.add(&langs(&[("Rust", 600), ("Shell", 100)]));
        tally.add(&langs(&[("Rust", 200), ("TypeScript", 100)]));
        assert_eq!(tally.total(), 1000);

        let top = tally.top(5);
        assert_eq!(top[0].name, "Rust");
        assert!((top[0].percentage - 80.0).abs() < 1e-9);
        assert_eq!(top.len(), 3);
        // equal shares fall back to name order
        assert_eq!(top[1].name, "Shell");
        assert_eq!(top[2].name, "TypeScript");
    }

    #[test]
    fn test_top_caps_and_empty() {
        assert!(LanguageTally::new().top(5).is_empty());

        let mut tally = LanguageTally::new();
        tally.add(&langs(&[
            ("A", 1),
            ("B", 2),
            ("C", 3),
            ("D", 4),
            ("E", 5),
            ("F", 6),
            ("G", 7),
        ]));
        let top = tally.top(5);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].name, "G");
        assert_eq!(top[4].name, "C");
    }
}
