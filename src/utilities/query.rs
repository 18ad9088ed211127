//! Helpers for query strings built by plain HTML forms, where any key may
//! repeat and any value may be junk.

use std::str::FromStr;

/// The last non-blank value, parsed. Junk parses to `None`.
pub fn last_value<T: FromStr>(values: &[String]) -> Option<T> {
    last_raw(values)?.parse().ok()
}

/// The last non-blank value, trimmed.
pub fn last_raw(values: &[String]) -> Option<&str> {
    values
        .iter()
        .rev()
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
}

/// Every comma-separated entry across all occurrences of a key.
pub fn comma_separated(values: &[String]) -> impl Iterator<Item = &str> {
    values
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn repeated_keys_keep_the_last_value() {
        assert_eq!(last_value::<u32>(&values(&["2", "3"])), Some(3));
        assert_eq!(last_value::<u32>(&values(&["2", " "])), Some(2));
        assert_eq!(last_value::<u32>(&values(&["wide"])), None);
        assert_eq!(last_value::<u32>(&[]), None);
        assert_eq!(last_raw(&values(&["a", " b "])), Some("b"));
    }

    #[test]
    fn comma_lists_merge_across_occurrences() {
        let raw = values(&["Garden, Pool", "", "Garage"]);
        let merged: Vec<&str> = comma_separated(&raw).collect();
        assert_eq!(merged, vec!["Garden", "Pool", "Garage"]);
    }
}
