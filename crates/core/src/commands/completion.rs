//! Helpers for building tab completion suggestions.
//!
//! Numeric helpers validate the partial input and return a single hint entry;
//! invalid input is reported as an error that the adapter shows in place of
//! suggestions.

use super::assertions;
use super::error::CommandResult;
use super::input::Input;
use super::named_enum::NamedEnum;
use super::world::WorldState;
use indexmap::IndexSet;
use std::collections::BTreeMap;

/// Offline players considered when completing player names.
pub const OFFLINE_PLAYER_LIMIT: usize = 1000;

/// Inputs starting with `value`, ignoring case. An empty value matches everything.
pub fn complete<I, S>(value: &str, inputs: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let value = value.to_lowercase();
    inputs
        .into_iter()
        .filter(|input| input.as_ref().to_lowercase().starts_with(&value))
        .map(|input| input.as_ref().to_string())
        .collect()
}

pub fn complete_boolean(value: &str) -> Vec<String> {
    complete(value, ["true", "false"])
}

pub fn complete_enum<T: NamedEnum>(value: &str, lower_case: bool, strip: bool) -> Vec<String> {
    let names = T::values().iter().map(|v| {
        let name = if lower_case {
            v.name().to_lowercase()
        } else {
            v.name().to_string()
        };
        if strip {
            name.replace('_', "")
        } else {
            name
        }
    });
    complete(value, names)
}

/// Known offline players followed by online players, without duplicates.
pub fn complete_players(world: &dyn WorldState, value: &str) -> Vec<String> {
    let offline = world
        .offline_players()
        .into_iter()
        .take(OFFLINE_PLAYER_LIMIT);
    let mut names: IndexSet<String> = complete(value, offline).into_iter().collect();
    names.extend(complete_online_players(world, value));
    names.into_iter().collect()
}

pub fn complete_online_players(world: &dyn WorldState, value: &str) -> Vec<String> {
    complete(value, world.online_players())
}

/// World names with spaces replaced, as command tokens can not contain spaces.
pub fn complete_worlds(world: &dyn WorldState, value: &str, space_replace: &str) -> Vec<String> {
    let names = world
        .worlds()
        .into_iter()
        .map(|name| name.replace(' ', space_replace));
    complete(value, names)
}

pub fn complete_int(value: &str, min: i32, max: i32) -> CommandResult<Vec<String>> {
    let parsed = Input::new(value).as_int()?;
    assertions::range(parsed, min, max)?;
    Ok(vec![format!("{min} » {max}")])
}

pub fn complete_double(value: &str, min: f64, max: f64) -> CommandResult<Vec<String>> {
    let parsed = Input::new(value).as_double()?;
    assertions::range(parsed, min, max)?;
    Ok(vec![format!("{min} » {max}")])
}

pub fn complete_min_int(value: &str, min: i32) -> CommandResult<Vec<String>> {
    let parsed = Input::new(value).as_int()?;
    assertions::min(parsed, min)?;
    Ok(vec![format!("{min}<")])
}

pub fn complete_min_double(value: &str, min: f64) -> CommandResult<Vec<String>> {
    let parsed = Input::new(value).as_double()?;
    assertions::min(parsed, min)?;
    Ok(vec![format!("{min:.2}<")])
}

pub fn complete_max_int(value: &str, max: i32) -> CommandResult<Vec<String>> {
    let parsed = Input::new(value).as_int()?;
    assertions::max(parsed, max)?;
    Ok(vec![format!("{max}>")])
}

pub fn complete_max_double(value: &str, max: f64) -> CommandResult<Vec<String>> {
    let parsed = Input::new(value).as_double()?;
    assertions::max(parsed, max)?;
    Ok(vec![format!("{max:.2}>")])
}

/// A fixed hint for free text, rejecting input longer than `max_length`.
pub fn complete_free_input(
    value: &str,
    max_length: usize,
    default: &str,
) -> CommandResult<Vec<String>> {
    assertions::invalid_length(value, max_length)?;
    Ok(vec![default.to_string()])
}

/// `glass_pane` becomes `gp`.
fn short_name(name: &str) -> String {
    name.split('_').filter_map(|part| part.chars().next()).collect()
}

/// Ranks upper snake case names against a partial input.
///
/// Matches on the short name come first, then prefix matches, then matches on
/// any name part and finally any substring match.
pub fn complete_smart<S: AsRef<str>>(value: &str, names: &[S], lower_case: bool) -> Vec<String> {
    let value = value.to_lowercase();
    let mut short: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    let mut parts: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for name in names {
        let name = name.as_ref();
        if name.starts_with("LEGACY") {
            continue;
        }
        short
            .entry(short_name(name).to_lowercase())
            .or_default()
            .push(name);
        for part in name.split('_').collect::<IndexSet<_>>() {
            parts.entry(part.to_lowercase()).or_default().push(name);
        }
    }

    let mut results: IndexSet<&str> = IndexSet::new();
    for (key, matches) in &short {
        if key.starts_with(&value) {
            results.extend(matches.iter().copied());
        }
    }
    for name in names {
        let name = name.as_ref();
        if !name.starts_with("LEGACY") && name.to_lowercase().starts_with(&value) {
            results.insert(name);
        }
    }
    for (key, matches) in &parts {
        if key.starts_with(&value) {
            results.extend(matches.iter().copied());
        }
    }
    let upper = value.to_uppercase();
    for name in names {
        let name = name.as_ref();
        if !name.starts_with("LEGACY") && name.contains(&upper) {
            results.insert(name);
        }
    }

    results
        .into_iter()
        .map(|name| {
            if lower_case {
                name.to_lowercase()
            } else {
                name.to_string()
            }
        })
        .collect()
}

pub fn complete_material(world: &dyn WorldState, value: &str, lower_case: bool) -> Vec<String> {
    complete_smart(value, &world.materials(), lower_case)
}

pub fn is_command(value: &str, commands: &[&str]) -> bool {
    let value = value.to_lowercase();
    commands
        .iter()
        .any(|command| command.to_lowercase() == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::named_enum::tests::Wool;
    use crate::commands::ErrorKind;

    const MATERIALS: [&str; 6] = [
        "GLASS",
        "GLASS_PANE",
        "GRAY_WOOL",
        "RED_STAINED_GLASS_PANE",
        "STONE",
        "LEGACY_GLASS",
    ];

    #[test]
    fn prefix_matching_ignores_case() {
        assert_eq!(complete("gi", ["give", "Gift", "remove"]), ["give", "Gift"]);
        assert_eq!(complete("", ["a", "b"]), ["a", "b"]);
        assert_eq!(complete_boolean("T"), ["true"]);
    }

    #[test]
    fn enum_names() {
        assert_eq!(complete_enum::<Wool>("red", true, false), ["red_wool"]);
        assert_eq!(complete_enum::<Wool>("LIGHTB", false, true), ["LIGHTBLUEWOOL"]);
    }

    #[test]
    fn numeric_hints() {
        assert_eq!(complete_int("5", 1, 10).unwrap(), ["1 » 10"]);
        let error = complete_int("50", 1, 10).unwrap_err();
        assert_eq!(error.kind(), Some(ErrorKind::InvalidRange));
        let error = complete_int("x", 1, 10).unwrap_err();
        assert_eq!(error.kind(), Some(ErrorKind::InvalidNumber));
        assert_eq!(complete_min_int("3", 1).unwrap(), ["1<"]);
        assert_eq!(complete_max_double("0,5", 2.0).unwrap(), ["2.00>"]);
        assert_eq!(complete_min_double("3", 1.5).unwrap(), ["1.50<"]);
        assert!(complete_max_int("11", 10).is_err());
    }

    #[test]
    fn free_input() {
        assert_eq!(complete_free_input("abc", 5, "<name>").unwrap(), ["<name>"]);
        assert!(complete_free_input("abcdef", 5, "<name>").is_err());
    }

    #[test]
    fn smart_completion_ranks_short_names_first() {
        let results = complete_smart("gp", &MATERIALS, true);
        assert_eq!(results[0], "glass_pane");

        let results = complete_smart("pane", &MATERIALS, false);
        assert_eq!(results, ["GLASS_PANE", "RED_STAINED_GLASS_PANE"]);

        let results = complete_smart("glass", &MATERIALS, false);
        assert_eq!(results[..2], ["GLASS", "GLASS_PANE"]);
        assert!(results.contains(&"RED_STAINED_GLASS_PANE".to_string()));
        assert!(!results.contains(&"LEGACY_GLASS".to_string()));
    }

    #[test]
    fn commands_match_ignoring_case() {
        assert!(is_command("HELP", &["help", "?"]));
        assert!(!is_command("hel", &["help"]));
        assert!(is_command("ÖFFNEN", &["öffnen"]));
    }
}
