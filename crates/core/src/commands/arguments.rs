use super::error::{CommandError, CommandResult, ErrorKind};
use super::flags::FlagContainer;
use super::input::Input;
use super::named_enum::NamedEnum;
use super::world::{Material, OfflinePlayer, OnlinePlayer, World, WorldState};
use crate::messages::Replacement;
use itertools::Itertools;

/// The tokens of one command invocation below the current route node.
///
/// Positional inputs are the tokens before the first flag marker. Flags are
/// parsed once from the raw tokens and are unaffected by the quoting mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Arguments {
    raw: Vec<String>,
    inputs: Vec<Input>,
    flags: FlagContainer,
    quoted: bool,
}

/// Resolves `from..to` where negative values count from the end and a `to`
/// below one is relative to the length.
fn resolve_range(len: usize, from: i32, to: i32) -> Option<(usize, usize)> {
    let len = len as i64;
    let to = if to < 1 { len + to as i64 } else { to as i64 };
    let from = if from < 0 { len + from as i64 } else { from as i64 };
    if from > to || from < 0 || to > len {
        return None;
    }
    Some((from as usize, to as usize))
}

/// Regroups tokens enclosed in `"` into single arguments without the quotes.
///
/// A group that is still open at the end of the input is kept as one argument.
pub(crate) fn parse_quoted(tokens: &[String]) -> Vec<String> {
    let mut args = Vec::new();
    let mut group: Vec<&str> = Vec::new();
    let mut open = false;

    for token in tokens {
        if !open && token.len() > 1 && token.starts_with('"') && token.ends_with('"') {
            args.push(token.replace('"', ""));
            continue;
        }
        if token.starts_with('"') {
            open = true;
        }
        if !open {
            args.push(token.clone());
            continue;
        }
        group.push(token);
        if token.ends_with('"') && group.len() > 1 {
            args.push(group.join(" ").replace('"', ""));
            group.clear();
            open = false;
        }
    }
    if !group.is_empty() {
        args.push(group.join(" ").replace('"', ""));
    }
    args
}

impl Arguments {
    pub fn create<I, S>(tokens: I) -> Arguments
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw: Vec<String> = tokens.into_iter().map(Into::into).collect();
        let flags = FlagContainer::parse(&raw);
        let mut arguments = Arguments {
            raw,
            inputs: Vec::new(),
            flags,
            quoted: false,
        };
        arguments.split_args();
        arguments
    }

    /// Splits a command line on whitespace.
    pub fn from_line(line: &str) -> Arguments {
        Arguments::create(line.split_whitespace())
    }

    fn positional(&self) -> &[String] {
        let end = self
            .raw
            .iter()
            .position(|token| FlagContainer::is_flag_marker(token))
            .unwrap_or(self.raw.len());
        &self.raw[..end]
    }

    /// Switches to quoted mode, where `"a b"` forms a single argument.
    pub fn parse_quoted(&mut self) {
        self.inputs = parse_quoted(self.positional())
            .into_iter()
            .map(Input::new)
            .collect();
        self.quoted = true;
    }

    /// Switches back to one argument per token.
    pub fn split_args(&mut self) {
        self.inputs = self.positional().iter().map(Input::new).collect();
        self.quoted = false;
    }

    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    pub fn raw(&self) -> &[String] {
        &self.raw
    }

    pub fn size(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn has_arg(&self, index: usize) -> bool {
        index < self.inputs.len()
    }

    pub fn assert_length(&self, index: usize) -> CommandResult<()> {
        if self.has_arg(index) {
            Ok(())
        } else {
            Err(CommandError::new(
                ErrorKind::MissingArgument,
                Replacement::new("INDEX", index),
            ))
        }
    }

    pub fn get(&self, index: usize) -> CommandResult<&Input> {
        self.assert_length(index)?;
        Ok(&self.inputs[index])
    }

    pub fn first(&self) -> Option<&Input> {
        self.inputs.first()
    }

    pub fn last(&self) -> Option<&Input> {
        self.inputs.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Input> {
        self.inputs.iter()
    }

    pub fn args(&self) -> &[Input] {
        &self.inputs
    }

    pub fn args_from(&self, from: i32) -> &[Input] {
        self.args_range(from, 0)
    }

    pub fn args_range(&self, from: i32, to: i32) -> &[Input] {
        match resolve_range(self.inputs.len(), from, to) {
            Some((from, to)) => &self.inputs[from..to],
            None => &[],
        }
    }

    pub fn join(&self) -> String {
        self.join_with(" ")
    }

    pub fn join_with(&self, delimiter: &str) -> String {
        self.inputs.iter().join(delimiter)
    }

    pub fn join_from(&self, from: i32) -> String {
        self.join_range(from, 0)
    }

    pub fn join_range(&self, from: i32, to: i32) -> String {
        self.args_range(from, to).iter().join(" ").trim().to_string()
    }

    pub fn as_string(&self, index: usize) -> CommandResult<&str> {
        Ok(self.get(index)?.as_str())
    }

    pub fn as_string_or<'a>(&'a self, index: usize, default: &'a str) -> &'a str {
        self.inputs.get(index).map_or(default, Input::as_str)
    }

    pub fn as_int(&self, index: usize) -> CommandResult<i32> {
        self.get(index)?.as_int()
    }

    pub fn as_int_or(&self, index: usize, default: i32) -> CommandResult<i32> {
        self.or(index, default, Input::as_int)
    }

    pub fn as_long(&self, index: usize) -> CommandResult<i64> {
        self.get(index)?.as_long()
    }

    pub fn as_long_or(&self, index: usize, default: i64) -> CommandResult<i64> {
        self.or(index, default, Input::as_long)
    }

    pub fn as_double(&self, index: usize) -> CommandResult<f64> {
        self.get(index)?.as_double()
    }

    pub fn as_double_or(&self, index: usize, default: f64) -> CommandResult<f64> {
        self.or(index, default, Input::as_double)
    }

    pub fn as_boolean(&self, index: usize) -> CommandResult<bool> {
        self.get(index)?.as_boolean()
    }

    pub fn as_boolean_or(&self, index: usize, default: bool) -> CommandResult<bool> {
        self.or(index, default, Input::as_boolean)
    }

    pub fn as_boolean_with(
        &self,
        index: usize,
        true_value: &str,
        false_value: &str,
    ) -> CommandResult<bool> {
        self.get(index)?.as_boolean_with(true_value, false_value)
    }

    pub fn as_boolean_with_or(
        &self,
        index: usize,
        true_value: &str,
        false_value: &str,
        default: bool,
    ) -> CommandResult<bool> {
        self.or(index, default, |input| {
            input.as_boolean_with(true_value, false_value)
        })
    }

    pub fn as_enum<T: NamedEnum>(&self, index: usize) -> CommandResult<T> {
        self.get(index)?.as_enum()
    }

    pub fn as_enum_or<T: NamedEnum>(&self, index: usize, default: T) -> CommandResult<T> {
        self.or(index, default, Input::as_enum)
    }

    pub fn as_enum_stripped<T: NamedEnum>(&self, index: usize) -> CommandResult<T> {
        self.get(index)?.as_enum_stripped()
    }

    pub fn as_enum_stripped_or<T: NamedEnum>(&self, index: usize, default: T) -> CommandResult<T> {
        self.or(index, default, Input::as_enum_stripped)
    }

    pub fn as_material(&self, index: usize, world: &dyn WorldState) -> CommandResult<Material> {
        self.get(index)?.as_material(world)
    }

    pub fn as_material_or(
        &self,
        index: usize,
        world: &dyn WorldState,
        default: Material,
    ) -> CommandResult<Material> {
        self.or(index, default, |input| input.as_material(world))
    }

    pub fn as_material_stripped(
        &self,
        index: usize,
        world: &dyn WorldState,
    ) -> CommandResult<Material> {
        self.get(index)?.as_material_stripped(world)
    }

    pub fn as_material_stripped_or(
        &self,
        index: usize,
        world: &dyn WorldState,
        default: Material,
    ) -> CommandResult<Material> {
        self.or(index, default, |input| input.as_material_stripped(world))
    }

    pub fn as_player(&self, index: usize, world: &dyn WorldState) -> CommandResult<OnlinePlayer> {
        self.get(index)?.as_player(world)
    }

    pub fn as_player_or(
        &self,
        index: usize,
        world: &dyn WorldState,
        default: OnlinePlayer,
    ) -> CommandResult<OnlinePlayer> {
        self.or(index, default, |input| input.as_player(world))
    }

    pub fn as_offline_player(
        &self,
        index: usize,
        world: &dyn WorldState,
    ) -> CommandResult<OfflinePlayer> {
        self.get(index)?.as_offline_player(world)
    }

    pub fn as_offline_player_or(
        &self,
        index: usize,
        world: &dyn WorldState,
        default: OfflinePlayer,
    ) -> CommandResult<OfflinePlayer> {
        self.or(index, default, |input| input.as_offline_player(world))
    }

    pub fn as_world(&self, index: usize, world: &dyn WorldState) -> CommandResult<World> {
        self.get(index)?.as_world(world)
    }

    pub fn as_world_or(
        &self,
        index: usize,
        world: &dyn WorldState,
        default: World,
    ) -> CommandResult<World> {
        self.or(index, default, |input| input.as_world(world))
    }

    fn or<T>(
        &self,
        index: usize,
        default: T,
        parse: impl FnOnce(&Input) -> CommandResult<T>,
    ) -> CommandResult<T> {
        match self.inputs.get(index) {
            Some(input) => parse(input),
            None => Ok(default),
        }
    }

    /// Arguments for the next route level, dropping the first raw token.
    pub fn sub_arguments(&self) -> Arguments {
        self.sub_arguments_n(1)
    }

    pub fn sub_arguments_n(&self, depth: usize) -> Arguments {
        let tail = self.raw.iter().skip(depth).cloned();
        let mut arguments = Arguments::create(tail);
        if self.quoted {
            arguments.parse_quoted();
        }
        arguments
    }

    pub fn flags(&self) -> &FlagContainer {
        &self.flags
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.has(flag)
    }

    pub fn has_flag_value(&self, flag: &str) -> bool {
        self.flags.has_value(flag)
    }

    pub fn flag(&self, flag: &str) -> Option<&Input> {
        self.flags.get(flag)
    }

    pub fn flag_map<T>(
        &self,
        flag: &str,
        map: impl FnOnce(Option<&Input>) -> CommandResult<T>,
    ) -> CommandResult<T> {
        self.flags.map(flag, map)
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Input;
    type IntoIter = std::slice::Iter<'a, Input>;

    fn into_iter(self) -> Self::IntoIter {
        self.inputs.iter()
    }
}
