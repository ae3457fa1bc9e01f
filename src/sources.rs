/// Insertion-ordered mapping from a discovered email address to every source
/// description it was seen in.
///
/// The map is append-only while a lookup runs: merging never drops an email
/// and never deduplicates sources. Duplicate source strings are collapsed
/// (first-seen order preserved) only when the report is rendered, via
/// [`dedup_sources`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailSourceMap {
    entries: Vec<(String, Vec<String>)>,
}

impl EmailSourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct email addresses in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Append every `(email, source)` pair, creating keys in first-seen
    /// order. Sources are kept verbatim, duplicates included.
    pub fn merge(&mut self, pairs: Vec<(String, String)>) {
        for (email, source) in pairs {
            match self.entries.iter_mut().find(|(e, _)| *e == email) {
                Some((_, sources)) => sources.push(source),
                None => self.entries.push((email, vec![source])),
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(email, sources)| (email.as_str(), sources.as_slice()))
    }

    /// Keep only the entries whose email and sources satisfy `keep`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, &[String]) -> bool,
    {
        self.entries.retain(|(email, sources)| keep(email, sources));
    }
}

/// Collapse duplicate source strings, preserving first-seen order.
pub fn dedup_sources(sources: &[String]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::with_capacity(sources.len());
    for source in sources {
        if !seen.contains(&source.as_str()) {
            seen.push(source);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pair(email: &str, source: &str) -> (String, String) {
        (email.to_string(), source.to_string())
    }

    #[test]
    fn merge_groups_by_email_in_first_seen_order() {
        let mut map = EmailSourceMap::new();
        map.merge(vec![pair("a@x.com", "s1"), pair("b@y.com", "s2")]);
        map.merge(vec![pair("a@x.com", "s3")]);

        let entries: Vec<_> = map.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("a@x.com", &["s1".to_string(), "s3".to_string()][..]),
                ("b@y.com", &["s2".to_string()][..]),
            ]
        );
    }

    #[test]
    fn merge_keeps_duplicate_sources_until_dedup() {
        let mut map = EmailSourceMap::new();
        map.merge(vec![
            pair("a@x.com", "s1"),
            pair("a@x.com", "s1"),
            pair("b@y.com", "s2"),
        ]);

        let (_, a_sources) = map.iter().next().unwrap();
        assert_eq!(a_sources.len(), 2);

        assert_eq!(dedup_sources(a_sources), vec!["s1"]);
        let (_, b_sources) = map.iter().nth(1).unwrap();
        assert_eq!(dedup_sources(b_sources), vec!["s2"]);
    }

    #[test]
    fn dedup_preserves_first_seen_order() {
        let sources = vec![
            "s2".to_string(),
            "s1".to_string(),
            "s2".to_string(),
            "s3".to_string(),
            "s1".to_string(),
        ];
        assert_eq!(dedup_sources(&sources), vec!["s2", "s1", "s3"]);
    }

    #[test]
    fn retain_drops_filtered_entries() {
        let mut map = EmailSourceMap::new();
        map.merge(vec![pair("keep@x.com", "s1"), pair("drop@y.com", "s2")]);
        map.retain(|email, _| !email.starts_with("drop"));

        assert_eq!(map.len(), 1);
        assert_eq!(map.iter().next().unwrap().0, "keep@x.com");
    }
}
