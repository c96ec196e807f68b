use super::argument::Argument;
use super::node::{CommandNode, NodeKind};
use super::tree::NodeId;
use super::SenderKinds;
use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;

/// The contract of one command node.
///
/// The routing links (`sub_commands`, `default_command` and `parent`) are
/// filled in when the node is placed into a [`CommandTree`](super::CommandTree).
#[derive(Debug, Clone)]
pub struct CommandMeta {
    pub(super) name: String,
    pub(super) aliases: IndexSet<String>,
    pub(super) permissions: IndexSet<String>,
    pub(super) allowed_senders: SenderKinds,
    pub(super) arguments: Vec<Argument>,
    pub(super) required_arguments: usize,
    pub(super) sub_commands: IndexMap<String, NodeId>,
    pub(super) registered_commands: Vec<String>,
    pub(super) default_command: Option<NodeId>,
    pub(super) parent: Option<NodeId>,
    pub(super) hidden: bool,
}

impl CommandMeta {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.aliases.iter().map(String::as_str)
    }

    pub fn permissions(&self) -> impl Iterator<Item = &str> {
        self.permissions.iter().map(String::as_str)
    }

    pub fn has_permissions(&self) -> bool {
        !self.permissions.is_empty()
    }

    pub fn allowed_senders(&self) -> SenderKinds {
        self.allowed_senders
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn required_arguments(&self) -> usize {
        self.required_arguments
    }

    /// Names and aliases, lower-cased, mapped to the child node.
    pub fn sub_commands(&self) -> &IndexMap<String, NodeId> {
        &self.sub_commands
    }

    pub fn sub_command(&self, token: &str) -> Option<NodeId> {
        self.sub_commands.get(&token.to_lowercase()).copied()
    }

    /// Non-hidden sub-command names and aliases offered by tab completion.
    pub fn registered_commands(&self) -> &[String] {
        &self.registered_commands
    }

    pub fn default_command(&self) -> Option<NodeId> {
        self.default_command
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Matches the name or an alias with the same case folding as the sub-command keys.
    pub fn is_command(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.name.to_lowercase() == token
            || self.aliases.iter().any(|alias| alias.to_lowercase() == token)
    }

    pub fn argument_string(&self) -> String {
        self.arguments.iter().map(Argument::formatted).join(" ")
    }
}

pub struct CommandMetaBuilder {
    name: String,
    aliases: IndexSet<String>,
    permissions: IndexSet<String>,
    allowed_senders: SenderKinds,
    arguments: Vec<Argument>,
    sub_commands: Vec<CommandNode>,
    default_command: Option<CommandNode>,
    hidden: bool,
}

impl CommandMetaBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: IndexSet::new(),
            permissions: IndexSet::new(),
            allowed_senders: SenderKinds::empty(),
            arguments: Vec::new(),
            sub_commands: Vec::new(),
            default_command: None,
            hidden: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permissions.insert(permission.into());
        self
    }

    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions
            .extend(permissions.into_iter().map(Into::into));
        self
    }

    pub fn add_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.insert(alias.into());
        self
    }

    pub fn allow_player(self) -> Self {
        self.allow_sender(SenderKinds::PLAYER)
    }

    pub fn allow_console(self) -> Self {
        self.allow_sender(SenderKinds::CONSOLE)
    }

    pub fn allow_sender(mut self, kinds: SenderKinds) -> Self {
        self.allowed_senders |= kinds;
        self
    }

    pub fn add_argument(mut self, name: impl Into<String>, required: bool) -> Self {
        self.arguments.push(Argument::input(name, required));
        self
    }

    pub fn add_unlocalized_argument(mut self, name: impl Into<String>, required: bool) -> Self {
        self.arguments
            .push(Argument::unlocalized_input(name, required));
        self
    }

    pub fn with_arguments(mut self, arguments: impl IntoIterator<Item = Argument>) -> Self {
        self.arguments.extend(arguments);
        self
    }

    pub fn with_sub_command(mut self, command: CommandNode) -> Self {
        self.sub_commands.push(command);
        self
    }

    /// Adds sub-commands created with access to this builder, e.g. to inherit
    /// its permissions.
    pub fn build_sub_commands(mut self, build: impl FnOnce(&mut Vec<CommandNode>, &Self)) -> Self {
        let mut commands = Vec::new();
        build(&mut commands, &self);
        self.sub_commands.extend(commands);
        self
    }

    /// The node routed to when this command is called without arguments.
    pub fn with_default_command(mut self, command: CommandNode) -> Self {
        self.default_command = Some(command);
        self
    }

    /// Excludes the command from tab completion and route listings.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    fn into_meta(self) -> (CommandMeta, Vec<CommandNode>, Option<Box<CommandNode>>) {
        let required_arguments = self
            .arguments
            .iter()
            .filter(|argument| argument.is_required())
            .count();
        let meta = CommandMeta {
            name: self.name,
            aliases: self.aliases,
            permissions: self.permissions,
            allowed_senders: self.allowed_senders,
            arguments: self.arguments,
            required_arguments,
            sub_commands: IndexMap::new(),
            registered_commands: Vec::new(),
            default_command: None,
            parent: None,
            hidden: self.hidden,
        };
        (meta, self.sub_commands, self.default_command.map(Box::new))
    }

    /// Finishes a node that only routes to its sub-commands.
    pub fn build(self) -> CommandNode {
        self.executes(NodeKind::Branch)
    }

    /// Finishes a node that handles the command itself.
    pub fn executes(self, kind: NodeKind) -> CommandNode {
        let (meta, children, default) = self.into_meta();
        CommandNode {
            meta,
            kind,
            children,
            default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::SenderKind;

    #[test]
    fn required_arguments_are_counted() {
        let node = CommandMetaBuilder::new("give")
            .add_unlocalized_argument("player", true)
            .add_unlocalized_argument("amount", true)
            .add_unlocalized_argument("reason", false)
            .build();
        let meta = node.meta();
        assert_eq!(meta.required_arguments(), 2);
        assert!(meta.required_arguments() <= meta.arguments().len());
        assert_eq!(meta.argument_string(), "<player> <amount> [reason]");
    }

    #[test]
    fn is_command_ignores_case() {
        let node = CommandMetaBuilder::new("give").add_alias("g").build();
        assert!(node.meta().is_command("GIVE"));
        assert!(node.meta().is_command("G"));
        assert!(!node.meta().is_command("gift"));
    }

    #[test]
    fn permissions_and_aliases_are_deduplicated() {
        let node = CommandMetaBuilder::new("give")
            .with_permission("eldo.give")
            .with_permissions(["eldo.give", "eldo.admin"])
            .add_alias("g")
            .add_alias("g")
            .build();
        assert_eq!(node.meta().permissions().count(), 2);
        assert_eq!(node.meta().aliases().collect::<Vec<_>>(), ["g"]);
    }

    #[test]
    fn sender_sets() {
        let node = CommandMetaBuilder::new("stop")
            .allow_console()
            .allow_player()
            .build();
        assert_eq!(
            node.meta().allowed_senders(),
            SenderKinds::of([SenderKind::Player, SenderKind::Console])
        );
    }

    #[test]
    fn sub_commands_can_read_the_parent_builder() {
        let node = CommandMetaBuilder::new("eldo")
            .with_permission("eldo.use")
            .build_sub_commands(|commands, parent| {
                let permissions: Vec<String> = parent.permissions.iter().cloned().collect();
                commands.push(
                    CommandMetaBuilder::new("list")
                        .with_permissions(permissions)
                        .build(),
                );
            })
            .build();
        assert_eq!(node.children().len(), 1);
        assert_eq!(
            node.children()[0].meta().permissions().collect::<Vec<_>>(),
            ["eldo.use"]
        );
    }
}
