//! Pluggable string table for human-readable output.

use std::collections::HashMap;

/// A key-to-template string table with `{name}` placeholder
/// substitution.
///
/// The default table is English. Callers can replace or extend entries
/// with [`Translator::set`]; the formatter consults [`Translator::exists`]
/// before using unit-and-tense override keys (`day_ago`, `week_before`,
/// ...), so a table only needs the entries it wants to specialize.
#[derive(Debug, Clone)]
pub struct Translator {
    strings: HashMap<String, String>,
}

impl Default for Translator {
    fn default() -> Self {
        let mut strings = HashMap::new();
        for (key, template) in [
            ("year", "1 year"),
            ("year_plural", "{count} years"),
            ("month", "1 month"),
            ("month_plural", "{count} months"),
            ("week", "1 week"),
            ("week_plural", "{count} weeks"),
            ("day", "1 day"),
            ("day_plural", "{count} days"),
            ("hour", "1 hour"),
            ("hour_plural", "{count} hours"),
            ("minute", "1 minute"),
            ("minute_plural", "{count} minutes"),
            ("second", "1 second"),
            ("second_plural", "{count} seconds"),
            ("ago", "{time} ago"),
            ("from_now", "{time} from now"),
            ("after", "{time} after"),
            ("before", "{time} before"),
        ] {
            strings.insert(key.to_string(), template.to_string());
        }
        Self { strings }
    }
}

impl Translator {
    /// An empty table with no entries at all.
    pub fn empty() -> Self {
        Self {
            strings: HashMap::new(),
        }
    }

    /// Whether the table has an entry for `key`.
    pub fn exists(&self, key: &str) -> bool {
        self.strings.contains_key(key)
    }

    /// Inserts or replaces an entry.
    pub fn set(&mut self, key: &str, template: &str) {
        self.strings.insert(key.to_string(), template.to_string());
    }

    /// Renders the template for `key`, substituting `{name}`
    /// placeholders from `vars`. A missing key renders as the key
    /// itself, which keeps output readable when a table is incomplete.
    pub fn singular(&self, key: &str, vars: &[(&str, &str)]) -> String {
        let mut out = match self.strings.get(key) {
            Some(template) => template.clone(),
            None => key.to_string(),
        };
        for (name, value) in vars {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }

    /// Renders the singular entry for a count of one and the `_plural`
    /// entry otherwise, with `{count}` available as a placeholder.
    pub fn plural(&self, key: &str, count: i64, vars: &[(&str, &str)]) -> String {
        let count_text = count.to_string();
        let mut vars: Vec<(&str, &str)> = vars.to_vec();
        vars.push(("count", count_text.as_str()));
        if count == 1 {
            self.singular(key, &vars)
        } else {
            self.singular(&format!("{key}_plural"), &vars)
        }
    }
}
