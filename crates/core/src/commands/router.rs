use super::arguments::Arguments;
use super::assertions;
use super::context::{CommandContext, CommandEnv};
use super::error::{CommandError, CommandResult, ErrorKind};
use super::tree::CommandTree;
use super::{completion, CommandSender};
use crate::messages::Replacements;
use itertools::Itertools;
use tracing::trace;

/// The outcome of a tab completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Suggestions(Vec<String>),
    /// A hint or error shown instead of suggestions.
    Message(String),
}

impl Completion {
    pub fn empty() -> Self {
        Completion::Suggestions(Vec::new())
    }

    /// Flattens the completion into the list a chat client expects.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Completion::Suggestions(suggestions) => suggestions,
            Completion::Message(message) => vec![message],
        }
    }
}

impl CommandTree {
    /// Routes a command invocation from the root to the executing node.
    pub fn execute(
        &self,
        env: &CommandEnv,
        sender: &dyn CommandSender,
        label: &str,
        args: Arguments,
    ) -> CommandResult<()> {
        let mut ctx = CommandContext::new(env, sender, self, label, args);
        self.route(&mut ctx)
    }

    /// Routes from the context's current node.
    ///
    /// Checks run in a fixed order: permission, sender kind, allowed senders
    /// and argument count. At most one executor runs.
    pub fn route(&self, ctx: &mut CommandContext<'_>) -> CommandResult<()> {
        loop {
            let id = ctx.node();
            let meta = self.meta(id);
            let sender = ctx.sender();
            trace!("Routing {} at {}", ctx.label(), self.command_call(id));

            assertions::permission(meta, sender, false)?;
            if let Some(handler) = self.kind(id).handler_for(sender.kind())? {
                assertions::allowed_sender(meta, sender)?;
                assertions::invalid_arguments(self, id, ctx.args())?;
                return (handler.execute)(ctx);
            }

            if ctx.args().is_empty() {
                match meta.default_command() {
                    Some(default) => {
                        let label = ctx.label().to_string();
                        let args = ctx.args().clone();
                        ctx.enter(default, label, args);
                        continue;
                    }
                    None => return assertions::unexpected_route_end(self, id),
                }
            }

            if meta.sub_commands().is_empty() {
                return assertions::unexpected_route_end(self, id);
            }

            let token = ctx.args().as_string(0)?.to_string();
            let Some(child) = meta.sub_command(&token) else {
                return assertions::unknown_route();
            };
            let args = ctx.args().sub_arguments();
            ctx.enter(child, token, args);
        }
    }

    /// Computes tab completions from the root.
    pub fn complete(
        &self,
        env: &CommandEnv,
        sender: &dyn CommandSender,
        label: &str,
        args: Arguments,
    ) -> CommandResult<Completion> {
        let mut ctx = CommandContext::new(env, sender, self, label, args);
        self.complete_route(&mut ctx)
    }

    pub fn complete_route(&self, ctx: &mut CommandContext<'_>) -> CommandResult<Completion> {
        loop {
            let id = ctx.node();
            let meta = self.meta(id);
            let sender = ctx.sender();

            if let Err(CommandError::Message { key, replacements }) =
                assertions::permission(meta, sender, false)
            {
                let message = ctx
                    .messenger()
                    .translate_plain(Some(sender), &key, &replacements);
                return Ok(Completion::Message(message));
            }

            match self.kind(id).handler_for(sender.kind()) {
                Ok(Some(handler)) => {
                    return match handler.complete {
                        Some(complete) => complete(ctx).map(Completion::Suggestions),
                        None => Ok(Completion::empty()),
                    };
                }
                Err(_) => return Ok(Completion::empty()),
                Ok(None) => {}
            }

            let raw = ctx.args().raw();
            if raw.len() <= 1 {
                let value = raw.first().map(String::as_str).unwrap_or_default();
                let suggestions = completion::complete(value, meta.registered_commands())
                    .into_iter()
                    .sorted()
                    .collect();
                return Ok(Completion::Suggestions(suggestions));
            }

            let token = raw[0].clone();
            let Some(child) = meta.sub_command(&token) else {
                let message = ctx.messenger().translate_plain(
                    Some(sender),
                    ErrorKind::InvalidCommand.key(),
                    &Replacements::new(),
                );
                return Ok(Completion::Message(message));
            };
            let args = ctx.args().sub_arguments();
            ctx.enter(child, token, args);
        }
    }
}
