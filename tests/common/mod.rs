#![allow(dead_code)]

use eldoutils_core::commands::{
    completion, CommandAdapter, CommandContext, CommandEnv, CommandMetaBuilder, CommandNode,
    CommandResult, CommandSender, CommandTree, Handler, NodeKind, OfflinePlayer, OnlinePlayer,
    SenderKind, World, WorldState,
};
use eldoutils_core::config::Settings;
use eldoutils_core::localization::Localizer;
use eldoutils_core::messages::Replacements;
use eldoutils_text::{to_plain_text, TextComponent};
use std::cell::RefCell;
use std::sync::Arc;

pub struct TestSender {
    kind: SenderKind,
    permissions: Vec<&'static str>,
    pub output: RefCell<Vec<String>>,
}

impl TestSender {
    pub fn console() -> TestSender {
        TestSender {
            kind: SenderKind::Console,
            permissions: vec!["*"],
            output: RefCell::new(Vec::new()),
        }
    }

    pub fn player(permissions: &[&'static str]) -> TestSender {
        TestSender {
            kind: SenderKind::Player,
            permissions: permissions.to_vec(),
            output: RefCell::new(Vec::new()),
        }
    }

    pub fn other() -> TestSender {
        TestSender {
            kind: SenderKind::Other,
            permissions: vec!["*"],
            output: RefCell::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.output.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.output.borrow().last().cloned()
    }
}

impl CommandSender for TestSender {
    fn kind(&self) -> SenderKind {
        self.kind
    }

    fn name(&self) -> &str {
        match self.kind {
            SenderKind::Player => "Steve",
            SenderKind::Console => "CONSOLE",
            SenderKind::Other => "Block",
        }
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions
            .iter()
            .any(|p| *p == "*" || *p == permission)
    }

    fn send_message(&self, message: &[TextComponent]) {
        self.output.borrow_mut().push(to_plain_text(message));
    }
}

pub struct TestWorld;

impl WorldState for TestWorld {
    fn online_player(&self, name: &str) -> Option<OnlinePlayer> {
        self.online_players()
            .into_iter()
            .find(|player| player.eq_ignore_ascii_case(name))
            .map(|name| OnlinePlayer { name })
    }

    fn offline_player(&self, name: &str) -> Option<OfflinePlayer> {
        self.offline_players()
            .into_iter()
            .find(|player| player.eq_ignore_ascii_case(name))
            .map(|name| OfflinePlayer {
                name,
                last_played: 1,
            })
    }

    fn world(&self, name: &str) -> Option<World> {
        self.worlds()
            .into_iter()
            .find(|world| world == name)
            .map(|name| World { name })
    }

    fn online_players(&self) -> Vec<String> {
        vec!["Steve".to_string(), "Alex".to_string()]
    }

    fn offline_players(&self) -> Vec<String> {
        vec!["Notch".to_string(), "Steve".to_string()]
    }

    fn worlds(&self) -> Vec<String> {
        vec!["world".to_string(), "creative plots".to_string()]
    }

    fn materials(&self) -> Vec<String> {
        ["STONE", "GLASS", "GLASS_PANE", "RED_WOOL"]
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

fn give(ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    let player = ctx.args().as_player(0, ctx.world())?;
    let amount = ctx.args().as_int(1)?;
    ctx.reply_with(
        "Gave <amount> to <player>",
        &Replacements::new()
            .with("amount", amount)
            .with("player", player.name),
    )
}

fn complete_give(ctx: &CommandContext<'_>) -> CommandResult<Vec<String>> {
    let value = ctx.args().last().map_or("", |input| input.as_str());
    match ctx.args().size() {
        0 | 1 => Ok(completion::complete_online_players(ctx.world(), value)),
        _ => completion::complete_int(value, 1, 64),
    }
}

fn reply_label(ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    let text = format!("{} as {}", ctx.label(), ctx.sender().kind());
    ctx.reply(&text)
}

/// `/eldo` with `give`, `remove`, a hidden `reset`, a player/console `where`
/// and a branch `admin` that defaults to `status`.
pub fn sample_tree() -> CommandNode {
    CommandMetaBuilder::new("eldo")
        .add_alias("eu")
        .with_sub_command(
            CommandMetaBuilder::new("give")
                .with_permission("eldo.give")
                .add_unlocalized_argument("player", true)
                .add_unlocalized_argument("amount", true)
                .executes(NodeKind::Any(Handler::new(give).completes(complete_give))),
        )
        .with_sub_command(
            CommandMetaBuilder::new("remove")
                .add_alias("rm")
                .executes(NodeKind::any(reply_label)),
        )
        .with_sub_command(
            CommandMetaBuilder::new("reset")
                .hidden()
                .executes(NodeKind::console(reply_label)),
        )
        .with_sub_command(
            CommandMetaBuilder::new("where")
                .allow_player()
                .allow_console()
                .executes(NodeKind::player_or_console(reply_label, reply_label)),
        )
        .with_sub_command(
            CommandMetaBuilder::new("admin")
                .with_permission("eldo.admin")
                .with_default_command(
                    CommandMetaBuilder::new("status").executes(NodeKind::any(reply_label)),
                )
                .build(),
        )
        .build()
}

pub fn settings() -> Settings {
    Settings {
        prefix: String::new(),
        ..Settings::default()
    }
}

pub fn env() -> CommandEnv {
    CommandEnv::new(&settings(), Arc::new(Localizer::default()), Arc::new(TestWorld))
}

pub fn adapter() -> CommandAdapter {
    CommandAdapter::new(CommandTree::new(sample_tree()), env())
}

pub fn tokens(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}
