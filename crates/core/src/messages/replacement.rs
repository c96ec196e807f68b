use eldoutils_text::{escape_tags, ColorCode};
use itertools::Itertools;
use regex::{Captures, NoExpand, RegexBuilder};
use std::fmt::{self, Display};

/// A `<key>` placeholder and the value substituted for it.
///
/// Keys are matched case-insensitively. Values are inserted as literal text
/// unless created with [`Replacement::tagged`].
#[derive(Debug, Clone, PartialEq)]
pub struct Replacement {
    key: String,
    value: String,
    color: Option<ColorCode>,
    literal: bool,
}

impl Replacement {
    pub fn new(key: impl Into<String>, value: impl Display) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
            color: None,
            literal: true,
        }
    }

    /// A replacement whose value keeps its markup tags.
    pub fn tagged(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            color: None,
            literal: false,
        }
    }

    pub fn styled(key: impl Into<String>, value: impl Display, color: ColorCode) -> Self {
        Self {
            color: Some(color),
            ..Self::new(key, value)
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> String {
        format!("<{}>", self.key)
    }

    fn rendered(&self, value: &str) -> String {
        let value = if self.literal {
            escape_tags(value)
        } else {
            value.to_string()
        };
        match self.color.map(ColorCode::name) {
            Some(name) => format!("<{name}>{value}</{name}>"),
            None => value,
        }
    }

    /// Substitutes every occurrence of the placeholder in `message`.
    ///
    /// `resolve` is applied to the raw value first, which lets callers expand
    /// embedded locale references before the value is escaped.
    pub fn apply(&self, message: &str, resolve: impl Fn(&str) -> String) -> String {
        let Ok(pattern) = RegexBuilder::new(&regex::escape(&self.placeholder()))
            .case_insensitive(true)
            .build()
        else {
            return message.to_string();
        };
        let value = self.rendered(&resolve(&self.value));
        pattern
            .replace_all(message, NoExpand(&value))
            .into_owned()
    }
}

impl Display for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Replacements(Vec<Replacement>);

impl Replacements {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.0.push(Replacement::new(key, value));
        self
    }

    pub fn push(&mut self, replacement: Replacement) {
        self.0.push(replacement);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|r| r.key.eq_ignore_ascii_case(key))
            .map(Replacement::value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Replacement> {
        self.0.iter()
    }

    /// Substitutes all placeholders in one pass, so inserted values are never
    /// matched against later keys. The first replacement with a key wins.
    pub fn apply(&self, message: &str, resolve: impl Fn(&str) -> String) -> String {
        if self.0.is_empty() {
            return message.to_string();
        }
        let keys = self.0.iter().map(|r| regex::escape(&r.key)).join("|");
        let Ok(pattern) = RegexBuilder::new(&format!("<({keys})>"))
            .case_insensitive(true)
            .build()
        else {
            return message.to_string();
        };
        pattern
            .replace_all(message, |caps: &Captures<'_>| {
                let key = caps[1].to_lowercase();
                match self.0.iter().find(|r| r.key.to_lowercase() == key) {
                    Some(replacement) => replacement.rendered(&resolve(&replacement.value)),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

impl From<Replacement> for Replacements {
    fn from(replacement: Replacement) -> Self {
        Self(vec![replacement])
    }
}

impl From<Vec<Replacement>> for Replacements {
    fn from(replacements: Vec<Replacement>) -> Self {
        Self(replacements)
    }
}

impl FromIterator<Replacement> for Replacements {
    fn from_iter<T: IntoIterator<Item = Replacement>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Replacements {
    type Item = &'a Replacement;
    type IntoIter = std::slice::Iter<'a, Replacement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(value: &str) -> String {
        value.to_string()
    }

    #[test]
    fn placeholders_are_case_insensitive() {
        let replacement = Replacement::new("SYNTAX", "/eldo give");
        assert_eq!(
            replacement.apply("Syntax: <syntax> (<Syntax>)", identity),
            "Syntax: /eldo give (/eldo give)"
        );
    }

    #[test]
    fn values_are_escaped() {
        let replacement = Replacement::new("syntax", "<player>");
        assert_eq!(replacement.apply("<syntax>", identity), "\\<player>");
        let tagged = Replacement::tagged("syntax", "<gold>x");
        assert_eq!(tagged.apply("<syntax>", identity), "<gold>x");
    }

    #[test]
    fn dollar_signs_are_not_expanded() {
        let replacement = Replacement::new("value", "$1");
        assert_eq!(replacement.apply("<value>", identity), "$1");
    }

    #[test]
    fn styled_values_are_wrapped() {
        let replacement = Replacement::styled("min", 3, ColorCode::Gold);
        assert_eq!(replacement.apply("<min>", identity), "<gold>3</gold>");
    }

    #[test]
    fn collection_lookup() {
        let replacements = Replacements::new().with("MIN", 1).with("MAX", 10);
        assert_eq!(replacements.get("max"), Some("10"));
        assert_eq!(
            replacements.apply("<min>-<max>", identity),
            "1-10"
        );
    }

    #[test]
    fn values_are_not_replaced_by_later_keys() {
        let replacements = Replacements::new()
            .with("player", "<max>")
            .with("max", 10)
            .with("MAX", 20);
        assert_eq!(
            replacements.apply("<player> has <max>/<Max>", identity),
            "\\<max> has 10/10"
        );
    }
}
