//! Guard checks used by the router and by command executors.
//!
//! Every check returns `Ok(())` when it passes and a [`CommandError`] that
//! carries the locale key and replacements of the failure otherwise.

use super::argument::Argument;
use super::arguments::Arguments;
use super::error::{CommandError, CommandResult, ErrorKind};
use super::input::{invalid_boolean, invalid_enum_value, Input};
use super::meta::CommandMeta;
use super::named_enum::NamedEnum;
use super::tree::{CommandTree, NodeId};
use super::{CommandSender, SenderKind};
use crate::messages::{Replacement, Replacements};
use eldoutils_text::ColorCode;
use itertools::Itertools;
use std::fmt::Display;

fn syntax(tree: &CommandTree, node: NodeId, arguments: &str) -> Replacement {
    let call = tree.command_call(node);
    let syntax = if arguments.is_empty() {
        call
    } else {
        format!("{call} {arguments}")
    };
    Replacement::new("SYNTAX", syntax)
}

/// Fails with the list of available sub-commands.
pub fn unexpected_route_end(tree: &CommandTree, node: NodeId) -> CommandResult<()> {
    let commands = tree
        .children(node)
        .filter(|child| !tree.meta(*child).is_hidden())
        .map(|child| format!("/{}", tree.command_call(child)))
        .join("\n");
    Err(CommandError::new(
        ErrorKind::EndOfRoute,
        Replacement::new("COMMANDS", commands),
    ))
}

pub fn unknown_route() -> CommandResult<()> {
    Err(ErrorKind::InvalidCommand.into())
}

/// Fails when fewer arguments are present than the node requires.
pub fn invalid_arguments(tree: &CommandTree, node: NodeId, args: &Arguments) -> CommandResult<()> {
    let meta = tree.meta(node);
    if args.size() < meta.required_arguments() {
        return Err(CommandError::new(
            ErrorKind::InvalidArguments,
            syntax(tree, node, &meta.argument_string()),
        ));
    }
    Ok(())
}

/// Like [`invalid_arguments`], but checks against an explicit argument list.
pub fn invalid_arguments_with(
    tree: &CommandTree,
    node: NodeId,
    args: &Arguments,
    arguments: &[Argument],
) -> CommandResult<()> {
    let required = arguments.iter().filter(|a| a.is_required()).count();
    if args.size() < required {
        let arguments = arguments.iter().map(Argument::formatted).join(" ");
        return Err(CommandError::new(
            ErrorKind::InvalidArguments,
            syntax(tree, node, &arguments),
        ));
    }
    Ok(())
}

/// Fails unconditionally with the syntax of the node.
pub fn invalid_syntax(tree: &CommandTree, node: NodeId) -> CommandResult<()> {
    Err(CommandError::new(
        ErrorKind::InvalidArguments,
        syntax(tree, node, &tree.meta(node).argument_string()),
    ))
}

pub fn player(sender: &dyn CommandSender) -> CommandResult<()> {
    is_true(sender.kind() == SenderKind::Player, ErrorKind::OnlyPlayer)
}

pub fn console(sender: &dyn CommandSender) -> CommandResult<()> {
    is_true(sender.kind() == SenderKind::Console, ErrorKind::OnlyConsole)
}

pub fn allowed_sender(meta: &CommandMeta, sender: &dyn CommandSender) -> CommandResult<()> {
    is_true(
        meta.allowed_senders().allows(sender.kind()),
        ErrorKind::InvalidSender,
    )
}

/// Passes when the node declares no permission or the sender has any of them.
pub fn permission(meta: &CommandMeta, sender: &dyn CommandSender, silent: bool) -> CommandResult<()> {
    permission_any(sender, meta.permissions(), silent)
}

pub fn permission_any<'p>(
    sender: &dyn CommandSender,
    permissions: impl IntoIterator<Item = &'p str>,
    silent: bool,
) -> CommandResult<()> {
    let permissions: Vec<&str> = permissions.into_iter().collect();
    if permissions.is_empty() || permissions.iter().any(|p| sender.has_permission(p)) {
        return Ok(());
    }
    if silent {
        return Err(CommandError::Silent);
    }
    Err(CommandError::new(
        ErrorKind::Permission,
        Replacement::new("PERMISSION", permissions.join(", ")),
    ))
}

/// Inclusive range check.
pub fn range<T: PartialOrd + Display>(value: T, min: T, max: T) -> CommandResult<()> {
    if value >= min && value <= max {
        return Ok(());
    }
    Err(CommandError::new(
        ErrorKind::InvalidRange,
        Replacements::from(vec![
            Replacement::styled("MIN", min, ColorCode::Gold),
            Replacement::styled("MAX", max, ColorCode::Gold),
        ]),
    ))
}

pub fn min<T: PartialOrd + Display>(value: T, min: T) -> CommandResult<()> {
    if value >= min {
        return Ok(());
    }
    Err(CommandError::new(
        ErrorKind::TooSmall,
        Replacement::styled("MIN", min, ColorCode::Gold),
    ))
}

pub fn max<T: PartialOrd + Display>(value: T, max: T) -> CommandResult<()> {
    if value <= max {
        return Ok(());
    }
    Err(CommandError::new(
        ErrorKind::TooLarge,
        Replacement::styled("MAX", max, ColorCode::Gold),
    ))
}

pub fn enum_value<T: NamedEnum>(value: &str) -> CommandResult<()> {
    match T::parse(value) {
        Some(_) => Ok(()),
        None => Err(invalid_enum_value::<T>()),
    }
}

pub fn is_integer(value: &str) -> CommandResult<()> {
    Input::new(value).as_int().map(drop)
}

pub fn is_long(value: &str) -> CommandResult<()> {
    Input::new(value).as_long().map(drop)
}

pub fn is_double(value: &str) -> CommandResult<()> {
    Input::new(value).as_double().map(drop)
}

pub fn is_boolean(value: &str) -> CommandResult<()> {
    is_boolean_with(value, "true", "false")
}

pub fn is_boolean_with(value: &str, true_value: &str, false_value: &str) -> CommandResult<()> {
    if value.eq_ignore_ascii_case(true_value) || value.eq_ignore_ascii_case(false_value) {
        return Ok(());
    }
    Err(invalid_boolean(true_value, false_value))
}

/// Fails when `input` has more than `max` characters.
pub fn invalid_length(input: &str, max: usize) -> CommandResult<()> {
    if input.chars().count() <= max {
        return Ok(());
    }
    Err(CommandError::new(
        ErrorKind::InvalidLength,
        Replacement::new("MAX", max),
    ))
}

pub fn missing_argument(args: &Arguments, index: usize) -> CommandResult<()> {
    args.assert_length(index)
}

pub fn is_true(condition: bool, kind: ErrorKind) -> CommandResult<()> {
    is_true_with(condition, kind, Replacements::new())
}

pub fn is_true_with(
    condition: bool,
    kind: ErrorKind,
    replacements: impl Into<Replacements>,
) -> CommandResult<()> {
    if condition {
        Ok(())
    } else {
        Err(CommandError::new(kind, replacements))
    }
}

pub fn is_false(condition: bool, kind: ErrorKind) -> CommandResult<()> {
    is_true(!condition, kind)
}

/// Aborts without output when `condition` holds.
pub fn silent_if(condition: bool) -> CommandResult<()> {
    if condition {
        Err(CommandError::Silent)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::meta::CommandMetaBuilder;
    use crate::commands::named_enum::tests::Wool;
    use eldoutils_text::TextComponent;

    struct Sender(SenderKind, &'static [&'static str]);

    impl CommandSender for Sender {
        fn kind(&self) -> SenderKind {
            self.0
        }

        fn name(&self) -> &str {
            "test"
        }

        fn has_permission(&self, permission: &str) -> bool {
            self.1.iter().any(|p| *p == permission)
        }

        fn send_message(&self, _: &[TextComponent]) {}
    }

    fn kind_of(result: CommandResult<()>) -> Option<ErrorKind> {
        result.err().and_then(|error| error.kind())
    }

    fn tree() -> CommandTree {
        CommandTree::new(
            CommandMetaBuilder::new("eldo")
                .with_sub_command(
                    CommandMetaBuilder::new("give")
                        .add_unlocalized_argument("player", true)
                        .add_unlocalized_argument("amount", true)
                        .build(),
                )
                .with_sub_command(CommandMetaBuilder::new("remove").build())
                .with_sub_command(CommandMetaBuilder::new("reset").hidden().build())
                .build(),
        )
    }

    #[test]
    fn ranges_are_inclusive() {
        assert!(range(1, 1, 5).is_ok());
        assert!(range(5, 1, 5).is_ok());
        assert!(range(2.5, 1.0, 5.0).is_ok());
        let error = range(6, 1, 5).unwrap_err();
        assert_eq!(error.kind(), Some(ErrorKind::InvalidRange));
        assert_eq!(error.replacements().and_then(|r| r.get("max")), Some("5"));
        assert_eq!(kind_of(min(0, 1)), Some(ErrorKind::TooSmall));
        assert_eq!(kind_of(max(0.5, 0.25)), Some(ErrorKind::TooLarge));
    }

    #[test]
    fn argument_count() {
        let tree = tree();
        let give = tree.find(&["give"]).unwrap();
        let error = invalid_arguments(&tree, give, &Arguments::create(["Steve"])).unwrap_err();
        assert_eq!(error.kind(), Some(ErrorKind::InvalidArguments));
        assert_eq!(
            error.replacements().and_then(|r| r.get("syntax")),
            Some("eldo give <player> <amount>")
        );
        assert!(invalid_arguments(&tree, give, &Arguments::create(["Steve", "5"])).is_ok());

        let explicit = [Argument::unlocalized_input("page", false)];
        assert!(invalid_arguments_with(&tree, give, &Arguments::create(Vec::<String>::new()), &explicit).is_ok());
    }

    #[test]
    fn route_end_lists_visible_children() {
        let tree = tree();
        let error = unexpected_route_end(&tree, tree.root()).unwrap_err();
        assert_eq!(error.kind(), Some(ErrorKind::EndOfRoute));
        assert_eq!(
            error.replacements().and_then(|r| r.get("commands")),
            Some("/eldo give\n/eldo remove")
        );
    }

    #[test]
    fn permissions_are_or_combined() {
        let meta = CommandMetaBuilder::new("give")
            .with_permissions(["eldo.give", "eldo.admin"])
            .build();
        let admin = Sender(SenderKind::Player, &["eldo.admin"]);
        let nobody = Sender(SenderKind::Player, &[]);
        assert!(permission(meta.meta(), &admin, false).is_ok());
        let error = permission(meta.meta(), &nobody, false).unwrap_err();
        assert_eq!(error.kind(), Some(ErrorKind::Permission));
        assert_eq!(
            error.replacements().and_then(|r| r.get("permission")),
            Some("eldo.give, eldo.admin")
        );
        assert!(permission(meta.meta(), &nobody, true).unwrap_err().is_silent());
    }

    #[test]
    fn sender_checks() {
        let console = Sender(SenderKind::Console, &[]);
        assert_eq!(kind_of(player(&console)), Some(ErrorKind::OnlyPlayer));
        assert!(super::console(&console).is_ok());

        let meta = CommandMetaBuilder::new("x").allow_player().build();
        assert_eq!(
            kind_of(allowed_sender(meta.meta(), &console)),
            Some(ErrorKind::InvalidSender)
        );
    }

    #[test]
    fn value_checks() {
        assert!(is_integer("42").is_ok());
        assert_eq!(kind_of(is_long("4.2")), Some(ErrorKind::InvalidNumber));
        assert!(is_double("4,2").is_ok());
        assert!(is_boolean("False").is_ok());
        assert_eq!(kind_of(is_boolean_with("maybe", "yes", "no")), Some(ErrorKind::InvalidBoolean));
        assert!(enum_value::<Wool>("red_wool").is_ok());
        assert_eq!(kind_of(enum_value::<Wool>("stone")), Some(ErrorKind::InvalidEnumValue));
        assert!(invalid_length("abc", 3).is_ok());
        assert_eq!(kind_of(invalid_length("abcd", 3)), Some(ErrorKind::InvalidLength));
        assert!(silent_if(true).unwrap_err().is_silent());
        assert!(silent_if(false).is_ok());
        assert_eq!(kind_of(is_false(true, ErrorKind::InvalidSender)), Some(ErrorKind::InvalidSender));
        assert_eq!(
            kind_of(missing_argument(&Arguments::create(["a"]), 1)),
            Some(ErrorKind::MissingArgument)
        );
    }
}
