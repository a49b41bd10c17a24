//! `.env` file text parsing. Pure functions, independent of the executor.

/// Ordered `KEY=value` mapping parsed from env-file text.
///
/// Keys are case-sensitive. A later duplicate key overwrites the earlier
/// value but keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVarMap {
    entries: Vec<(String, String)>,
}

impl EnvVarMap {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, key: String, value: String) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }
}

/// Parse raw env-file text into an ordered map.
///
/// Rules: trim each line; skip blanks and `#` comments; split on the first
/// `=` only, preserving later `=` characters in the value; strip one layer
/// of matching surrounding quotes.
#[must_use]
pub fn parse_env_string(raw: &str) -> EnvVarMap {
    let mut map = EnvVarMap::default();
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        map.insert(key.to_string(), strip_quotes(value.trim()).to_string());
    }
    map
}

/// Strip one layer of matching surrounding quotes, outer boundary only.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
