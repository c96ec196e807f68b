use super::error::CommandResult;
use super::input::Input;
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;

static FLAG: Lazy<Regex> = Lazy::new(|| Regex::new("^-([a-zA-Z]+)$").unwrap());
static NAMED_FLAG: Lazy<Regex> = Lazy::new(|| Regex::new("^--([a-zA-Z-]+)$").unwrap());

/// Out-of-band `-x`, `-abc` and `--name` options of a command line.
///
/// Bare tokens following a flag are joined with a space and become its value.
/// Stacked short flags never carry a value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlagContainer {
    flags: FxHashMap<String, Option<Input>>,
}

struct FlagParser {
    flags: FxHashMap<String, Option<Input>>,
    current: Option<String>,
    values: Vec<String>,
}

impl FlagParser {
    fn flush(&mut self) {
        if let Some(flag) = self.current.take() {
            let value = if self.values.is_empty() {
                None
            } else {
                Some(Input::new(self.values.join(" ")))
            };
            self.values.clear();
            self.flags.insert(flag, value);
        }
    }
}

impl FlagContainer {
    pub fn parse(tokens: &[String]) -> FlagContainer {
        let mut parser = FlagParser {
            flags: FxHashMap::default(),
            current: None,
            values: Vec::new(),
        };

        for token in tokens {
            if let Some(caps) = FLAG.captures(token) {
                parser.flush();
                let flag = &caps[1];
                if flag.len() > 1 {
                    for c in flag.chars() {
                        parser.flags.insert(c.to_string(), None);
                    }
                } else {
                    parser.current = Some(flag.to_string());
                }
                continue;
            }

            if let Some(caps) = NAMED_FLAG.captures(token) {
                parser.flush();
                parser.current = Some(caps[1].to_string());
                continue;
            }

            if parser.current.is_some() {
                parser.values.push(token.clone());
            }
        }
        parser.flush();

        FlagContainer {
            flags: parser.flags,
        }
    }

    /// Whether `token` starts a flag. Negative numbers such as `-5` do not.
    pub fn is_flag_marker(token: &str) -> bool {
        FLAG.is_match(token) || NAMED_FLAG.is_match(token)
    }

    pub fn has(&self, flag: &str) -> bool {
        self.flags.contains_key(flag)
    }

    pub fn has_value(&self, flag: &str) -> bool {
        matches!(self.flags.get(flag), Some(Some(_)))
    }

    pub fn get(&self, flag: &str) -> Option<&Input> {
        self.flags.get(flag).and_then(Option::as_ref)
    }

    /// Maps the flag value, which is `None` for absent or valueless flags.
    pub fn map<T>(
        &self,
        flag: &str,
        map: impl FnOnce(Option<&Input>) -> CommandResult<T>,
    ) -> CommandResult<T> {
        map(self.get(flag))
    }

    pub fn get_if_present<T>(&self, flag: &str, map: impl FnOnce(&Input) -> T) -> Option<T> {
        self.get(flag).map(map)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &str) -> Vec<String> {
        raw.split(' ').map(str::to_string).collect()
    }

    #[test]
    fn short_and_named_flags() {
        let flags = FlagContainer::parse(&tokens("x -a -b val --long-name some text"));
        assert!(flags.has("a"));
        assert!(!flags.has_value("a"));
        assert_eq!(flags.get("b").map(Input::as_str), Some("val"));
        assert_eq!(
            flags.get("long-name").map(Input::as_str),
            Some("some text")
        );
        assert_eq!(flags.len(), 3);
    }

    #[test]
    fn stacked_flags_have_no_value() {
        let flags = FlagContainer::parse(&tokens("-abc value"));
        for flag in ["a", "b", "c"] {
            assert!(flags.has(flag));
            assert!(!flags.has_value(flag));
        }
        assert!(!flags.has("abc"));
    }

    #[test]
    fn negative_numbers_are_not_flags() {
        assert!(!FlagContainer::is_flag_marker("-5"));
        assert!(!FlagContainer::is_flag_marker("--"));
        assert!(FlagContainer::is_flag_marker("-f"));
        let flags = FlagContainer::parse(&tokens("-n -5"));
        assert_eq!(flags.get("n").map(Input::as_str), Some("-5"));
    }

    #[test]
    fn mapping_values() {
        let flags = FlagContainer::parse(&tokens("--count 3"));
        let count = flags.map("count", |input| match input {
            Some(input) => input.as_int(),
            None => Ok(1),
        });
        assert_eq!(count, Ok(3));
        assert_eq!(flags.get_if_present("missing", |i| i.as_str().len()), None);
    }
}
