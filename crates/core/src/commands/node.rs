use super::context::CommandContext;
use super::error::{CommandResult, ErrorKind};
use super::meta::CommandMeta;
use super::SenderKind;

pub type Executor = fn(&mut CommandContext<'_>) -> CommandResult<()>;

pub type Completer = fn(&CommandContext<'_>) -> CommandResult<Vec<String>>;

#[derive(Clone, Copy)]
pub struct Handler {
    pub execute: Executor,
    pub complete: Option<Completer>,
}

impl Handler {
    pub fn new(execute: Executor) -> Self {
        Self {
            execute,
            complete: None,
        }
    }

    pub fn completes(mut self, complete: Completer) -> Self {
        self.complete = Some(complete);
        self
    }
}

/// What a node does when the route ends on it.
#[derive(Clone, Copy)]
pub enum NodeKind {
    /// Routes to sub-commands only.
    Branch,
    Player(Handler),
    Console(Handler),
    PlayerOrConsole { player: Handler, console: Handler },
    Any(Handler),
}

impl NodeKind {
    pub fn player(execute: Executor) -> Self {
        NodeKind::Player(Handler::new(execute))
    }

    pub fn console(execute: Executor) -> Self {
        NodeKind::Console(Handler::new(execute))
    }

    pub fn any(execute: Executor) -> Self {
        NodeKind::Any(Handler::new(execute))
    }

    pub fn player_or_console(player: Executor, console: Executor) -> Self {
        NodeKind::PlayerOrConsole {
            player: Handler::new(player),
            console: Handler::new(console),
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, NodeKind::Branch)
    }

    /// Selects the handler for a sender. `Ok(None)` means the node is a branch.
    pub fn handler_for(&self, sender: SenderKind) -> Result<Option<&Handler>, ErrorKind> {
        match (self, sender) {
            (NodeKind::Branch, _) => Ok(None),
            (NodeKind::Player(handler), SenderKind::Player) => Ok(Some(handler)),
            (NodeKind::Player(_), _) => Err(ErrorKind::OnlyPlayer),
            (NodeKind::Console(handler), SenderKind::Console) => Ok(Some(handler)),
            (NodeKind::Console(_), _) => Err(ErrorKind::OnlyConsole),
            (NodeKind::PlayerOrConsole { player, .. }, SenderKind::Player) => Ok(Some(player)),
            (NodeKind::PlayerOrConsole { console, .. }, SenderKind::Console) => Ok(Some(console)),
            (NodeKind::PlayerOrConsole { .. }, SenderKind::Other) => Err(ErrorKind::InvalidSender),
            (NodeKind::Any(handler), _) => Ok(Some(handler)),
        }
    }
}

/// An owned command definition before it is placed into a
/// [`CommandTree`](super::CommandTree).
pub struct CommandNode {
    pub(super) meta: CommandMeta,
    pub(super) kind: NodeKind,
    pub(super) children: Vec<CommandNode>,
    pub(super) default: Option<Box<CommandNode>>,
}

impl CommandNode {
    pub fn meta(&self) -> &CommandMeta {
        &self.meta
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn children(&self) -> &[CommandNode] {
        &self.children
    }
}
