use super::error::{CommandError, CommandResult, ErrorKind};
use super::named_enum::NamedEnum;
use super::world::{Material, OfflinePlayer, OnlinePlayer, World, WorldState};
use crate::messages::{Replacement, Replacements};
use eldoutils_text::ColorCode;
use std::fmt;

/// A single raw token with typed accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Input {
    value: String,
}

pub(super) fn invalid_boolean(true_value: &str, false_value: &str) -> CommandError {
    CommandError::new(
        ErrorKind::InvalidBoolean,
        Replacements::new()
            .with("TRUE", true_value)
            .with("FALSE", false_value),
    )
}

pub(super) fn invalid_enum_value<T: NamedEnum>() -> CommandError {
    CommandError::new(
        ErrorKind::InvalidEnumValue,
        Replacement::styled("VALUES", T::names().join(", "), ColorCode::Gold),
    )
}

impl Input {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn as_int(&self) -> CommandResult<i32> {
        self.value
            .parse()
            .map_err(|_| ErrorKind::InvalidNumber.into())
    }

    pub fn as_long(&self) -> CommandResult<i64> {
        self.value
            .parse()
            .map_err(|_| ErrorKind::InvalidNumber.into())
    }

    /// Parses a floating point number, accepting `,` as the decimal separator.
    pub fn as_double(&self) -> CommandResult<f64> {
        self.value
            .replace(',', ".")
            .parse()
            .map_err(|_| ErrorKind::InvalidNumber.into())
    }

    pub fn as_boolean(&self) -> CommandResult<bool> {
        self.as_boolean_with("true", "false")
    }

    pub fn as_boolean_with(&self, true_value: &str, false_value: &str) -> CommandResult<bool> {
        if self.value.eq_ignore_ascii_case(true_value) {
            Ok(true)
        } else if self.value.eq_ignore_ascii_case(false_value) {
            Ok(false)
        } else {
            Err(invalid_boolean(true_value, false_value))
        }
    }

    pub fn as_enum<T: NamedEnum>(&self) -> CommandResult<T> {
        T::parse(&self.value).ok_or_else(invalid_enum_value::<T>)
    }

    pub fn as_enum_stripped<T: NamedEnum>(&self) -> CommandResult<T> {
        T::parse_stripped(&self.value).ok_or_else(invalid_enum_value::<T>)
    }

    pub fn as_material(&self, world: &dyn WorldState) -> CommandResult<Material> {
        world
            .material(&self.value)
            .ok_or_else(|| ErrorKind::InvalidMaterial.into())
    }

    /// Looks up a material ignoring underscores, so `redwool` finds `RED_WOOL`.
    pub fn as_material_stripped(&self, world: &dyn WorldState) -> CommandResult<Material> {
        let value = self.value.replace('_', "");
        world
            .materials()
            .into_iter()
            .find(|name| name.replace('_', "").eq_ignore_ascii_case(&value))
            .map(|name| Material { name })
            .ok_or_else(|| ErrorKind::InvalidMaterial.into())
    }

    pub fn as_player(&self, world: &dyn WorldState) -> CommandResult<OnlinePlayer> {
        world
            .online_player(&self.value)
            .ok_or_else(|| ErrorKind::NotOnline.into())
    }

    pub fn as_offline_player(&self, world: &dyn WorldState) -> CommandResult<OfflinePlayer> {
        world
            .offline_player(&self.value)
            .ok_or_else(|| ErrorKind::UnknownPlayer.into())
    }

    pub fn as_world(&self, world: &dyn WorldState) -> CommandResult<World> {
        world
            .world(&self.value)
            .ok_or_else(|| ErrorKind::UnknownWorld.into())
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::new(value)
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::named_enum::tests::Wool;

    #[test]
    fn numbers() {
        assert_eq!(Input::new("12").as_int(), Ok(12));
        assert_eq!(Input::new("-3").as_long(), Ok(-3));
        assert_eq!(Input::new("1,5").as_double(), Ok(1.5));
        let error = Input::new("twelve").as_int().unwrap_err();
        assert_eq!(error.kind(), Some(ErrorKind::InvalidNumber));
    }

    #[test]
    fn booleans_ignore_case() {
        assert_eq!(Input::new("TRUE").as_boolean(), Ok(true));
        assert_eq!(Input::new("off").as_boolean_with("on", "off"), Ok(false));
        let error = Input::new("maybe").as_boolean_with("yes", "no").unwrap_err();
        assert_eq!(error.kind(), Some(ErrorKind::InvalidBoolean));
        assert_eq!(error.replacements().and_then(|r| r.get("TRUE")), Some("yes"));
    }

    #[test]
    fn enums() {
        assert_eq!(Input::new("white_wool").as_enum::<Wool>(), Ok(Wool::White));
        assert_eq!(Input::new("redwool").as_enum_stripped::<Wool>(), Ok(Wool::Red));
        let error = Input::new("stone").as_enum::<Wool>().unwrap_err();
        assert_eq!(error.kind(), Some(ErrorKind::InvalidEnumValue));
        assert_eq!(
            error.replacements().and_then(|r| r.get("VALUES")),
            Some("RED_WOOL, LIGHT_BLUE_WOOL, WHITE_WOOL")
        );
    }
}
