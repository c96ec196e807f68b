mod adapter;
mod argument;
mod arguments;
pub mod assertions;
pub mod builtin;
pub mod completion;
mod context;
mod error;
mod flags;
mod input;
mod meta;
mod named_enum;
mod node;
mod router;
mod tree;
mod world;

pub use adapter::CommandAdapter;
pub use argument::Argument;
pub use arguments::Arguments;
pub use context::{CommandContext, CommandEnv, PluginMeta};
pub use error::{CommandError, CommandResult, ErrorKind};
pub use flags::FlagContainer;
pub use input::Input;
pub use meta::{CommandMeta, CommandMetaBuilder};
pub use named_enum::NamedEnum;
pub use node::{CommandNode, Completer, Executor, Handler, NodeKind};
pub use router::Completion;
pub use tree::{CommandTree, NodeId};
pub use world::{Material, OfflinePlayer, OnlinePlayer, World, WorldState};

use eldoutils_text::TextComponent;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SenderKind {
    Player,
    Console,
    Other,
}

impl SenderKind {
    pub fn as_set(self) -> SenderKinds {
        match self {
            SenderKind::Player => SenderKinds::PLAYER,
            SenderKind::Console => SenderKinds::CONSOLE,
            SenderKind::Other => SenderKinds::OTHER,
        }
    }
}

impl fmt::Display for SenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SenderKind::Player => f.write_str("player"),
            SenderKind::Console => f.write_str("console"),
            SenderKind::Other => f.write_str("other"),
        }
    }
}

bitflags! {
    /// The sender kinds a command accepts. An empty set accepts everyone.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SenderKinds: u8 {
        const PLAYER = 0x01;
        const CONSOLE = 0x02;
        const OTHER = 0x04;
    }
}

impl SenderKinds {
    pub fn of(kinds: impl IntoIterator<Item = SenderKind>) -> Self {
        kinds
            .into_iter()
            .fold(SenderKinds::empty(), |set, kind| set | kind.as_set())
    }

    pub fn allows(self, kind: SenderKind) -> bool {
        self.is_empty() || self.contains(kind.as_set())
    }
}

/// Anything that can issue commands and receive chat output.
pub trait CommandSender {
    fn kind(&self) -> SenderKind;

    fn name(&self) -> &str;

    fn has_permission(&self, permission: &str) -> bool;

    fn send_message(&self, message: &[TextComponent]);

    /// The client locale, e.g. `de_DE`, if the sender reports one.
    fn locale(&self) -> Option<&str> {
        None
    }
}
