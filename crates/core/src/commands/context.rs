use super::arguments::Arguments;
use super::error::CommandResult;
use super::meta::CommandMeta;
use super::tree::{CommandTree, NodeId};
use super::world::WorldState;
use super::CommandSender;
use crate::config::Settings;
use crate::localization::Localizer;
use crate::messages::{MessageSender, Replacements};
use std::sync::Arc;

/// Descriptive data of the hosting plugin, shown by the `about` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginMeta {
    pub name: String,
    pub version: String,
    pub authors: Vec<String>,
    pub website: String,
    pub discord: String,
}

/// Services shared by every command invocation.
#[derive(Clone)]
pub struct CommandEnv {
    pub localizer: Arc<Localizer>,
    pub messenger: MessageSender,
    pub world: Arc<dyn WorldState + Send + Sync>,
    pub plugin: PluginMeta,
    /// Regroup `"quoted words"` into single arguments before routing.
    pub quoted_arguments: bool,
}

impl CommandEnv {
    pub fn new(
        settings: &Settings,
        localizer: Arc<Localizer>,
        world: Arc<dyn WorldState + Send + Sync>,
    ) -> Self {
        Self {
            messenger: MessageSender::from_settings(settings, localizer.clone()),
            localizer,
            world,
            plugin: settings.plugin_meta(),
            quoted_arguments: settings.quoted_arguments,
        }
    }
}

/// The state of one command invocation at the current route node.
pub struct CommandContext<'a> {
    env: &'a CommandEnv,
    sender: &'a dyn CommandSender,
    tree: &'a CommandTree,
    node: NodeId,
    label: String,
    args: Arguments,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        env: &'a CommandEnv,
        sender: &'a dyn CommandSender,
        tree: &'a CommandTree,
        label: impl Into<String>,
        args: Arguments,
    ) -> Self {
        Self {
            env,
            sender,
            tree,
            node: tree.root(),
            label: label.into(),
            args,
        }
    }

    /// Moves the context one level down the route.
    pub(super) fn enter(&mut self, node: NodeId, label: impl Into<String>, args: Arguments) {
        self.node = node;
        self.label = label.into();
        self.args = args;
    }

    pub fn env(&self) -> &'a CommandEnv {
        self.env
    }

    pub fn sender(&self) -> &'a dyn CommandSender {
        self.sender
    }

    pub fn tree(&self) -> &'a CommandTree {
        self.tree
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn meta(&self) -> &'a CommandMeta {
        self.tree.meta(self.node)
    }

    /// The token that selected the current node.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn args(&self) -> &Arguments {
        &self.args
    }

    pub fn args_mut(&mut self) -> &mut Arguments {
        &mut self.args
    }

    pub fn world(&self) -> &'a (dyn WorldState + Send + Sync) {
        self.env.world.as_ref()
    }

    pub fn plugin(&self) -> &'a PluginMeta {
        &self.env.plugin
    }

    pub fn localizer(&self) -> &'a Localizer {
        &self.env.localizer
    }

    pub fn messenger(&self) -> &'a MessageSender {
        &self.env.messenger
    }

    pub fn command_call(&self) -> String {
        self.tree.command_call(self.node)
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.sender.has_permission(permission)
    }

    pub fn localize(&self, key: &str) -> String {
        self.env.localizer.localize_for(Some(self.sender), key)
    }

    pub fn reply(&self, message: &str) -> CommandResult<()> {
        self.reply_with(message, &Replacements::new())
    }

    pub fn reply_with(&self, message: &str, replacements: &Replacements) -> CommandResult<()> {
        self.env
            .messenger
            .send_message(self.sender, message, replacements);
        Ok(())
    }

    pub fn error(&self, message: &str) -> CommandResult<()> {
        self.error_with(message, &Replacements::new())
    }

    pub fn error_with(&self, message: &str, replacements: &Replacements) -> CommandResult<()> {
        self.env
            .messenger
            .send_error(self.sender, message, replacements);
        Ok(())
    }
}
