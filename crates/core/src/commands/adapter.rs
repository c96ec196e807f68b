use super::arguments::Arguments;
use super::context::CommandEnv;
use super::error::CommandError;
use super::router::Completion;
use super::tree::CommandTree;
use super::CommandSender;
use tracing::debug;

/// Binds a command tree to the host's command dispatch.
///
/// Routing errors never escape the adapter. They are reported to the sender,
/// and invocations always count as handled.
pub struct CommandAdapter {
    tree: CommandTree,
    env: CommandEnv,
}

impl CommandAdapter {
    pub fn new(tree: CommandTree, env: CommandEnv) -> Self {
        Self { tree, env }
    }

    pub fn tree(&self) -> &CommandTree {
        &self.tree
    }

    pub fn env(&self) -> &CommandEnv {
        &self.env
    }

    fn arguments(&self, raw_args: &[String]) -> Arguments {
        let mut args = Arguments::create(raw_args.iter().cloned());
        if self.env.quoted_arguments {
            args.parse_quoted();
        }
        args
    }

    /// Executes a command. Always returns `true`.
    pub fn on_command(&self, sender: &dyn CommandSender, label: &str, raw_args: &[String]) -> bool {
        let args = self.arguments(raw_args);
        if let Err(err) = self.tree.execute(&self.env, sender, label, args) {
            debug!(
                "Command /{} {} by {} failed: {:?}",
                label,
                raw_args.join(" "),
                sender.name(),
                err
            );
            if let CommandError::Message { key, replacements } = err {
                self.env.messenger.send_error(sender, &key, &replacements);
            }
        }
        true
    }

    /// Tab completions for the last token of `raw_args`.
    ///
    /// A failing completer yields its localized error as the only entry.
    pub fn on_tab_complete(
        &self,
        sender: &dyn CommandSender,
        label: &str,
        raw_args: &[String],
    ) -> Vec<String> {
        let args = self.arguments(raw_args);
        match self.tree.complete(&self.env, sender, label, args) {
            Ok(completion) => completion.into_vec(),
            Err(CommandError::Message { key, replacements }) => Completion::Message(
                self.env
                    .messenger
                    .translate_plain(Some(sender), &key, &replacements),
            )
            .into_vec(),
            Err(CommandError::Silent) => Vec::new(),
        }
    }

    /// Dispatches a full command line such as `/eldo give Steve 5`.
    ///
    /// Returns `false` if the label does not belong to this tree.
    pub fn command_line(&self, sender: &dyn CommandSender, line: &str) -> bool {
        let line = line.trim();
        let line = line.strip_prefix('/').unwrap_or(line);
        let mut tokens = line.split_whitespace();
        let Some(label) = tokens.next() else {
            return false;
        };
        if !self.tree.meta(self.tree.root()).is_command(label) {
            return false;
        }
        let raw_args: Vec<String> = tokens.map(str::to_string).collect();
        self.on_command(sender, label, &raw_args)
    }
}
