use eldoutils_core::commands::{
    assertions, builtin, completion, CommandContext, CommandMetaBuilder, CommandNode,
    CommandResult, ErrorKind, Handler, NamedEnum, NodeKind,
};
use eldoutils_core::messages::Replacements;
use eldoutils_core::named_enum;
use tracing::info;

named_enum! {
    pub enum GameMode {
        Survival => "SURVIVAL",
        Creative => "CREATIVE",
        Adventure => "ADVENTURE",
        Spectator => "SPECTATOR",
    }
}

/// The `/eldo` command tree served by the console.
pub fn eldo() -> CommandNode {
    CommandMetaBuilder::new("eldo")
        .add_alias("eu")
        .with_sub_command(give())
        .with_sub_command(item())
        .with_sub_command(mode())
        .with_sub_command(seen())
        .with_sub_command(reset())
        .with_sub_command(builtin::about())
        .build()
}

fn value<'a>(ctx: &'a CommandContext<'_>) -> &'a str {
    ctx.args().last().map_or("", |input| input.as_str())
}

fn give() -> CommandNode {
    fn execute(ctx: &mut CommandContext<'_>) -> CommandResult<()> {
        let player = ctx.args().as_player(0, ctx.world())?;
        let amount = ctx.args().as_int_or(1, 1)?;
        assertions::range(amount, 1, 64)?;
        if ctx.args().has_flag("s") || ctx.args().has_flag("silent") {
            return Ok(());
        }
        ctx.reply_with(
            "Gave <gold><amount><default> items to <gold><player><default>.",
            &Replacements::new()
                .with("amount", amount)
                .with("player", player.name),
        )
    }

    fn complete(ctx: &CommandContext<'_>) -> CommandResult<Vec<String>> {
        match ctx.args().size() {
            0 | 1 => Ok(completion::complete_online_players(
                ctx.world(),
                value(ctx),
            )),
            2 => completion::complete_int(value(ctx), 1, 64),
            _ => Ok(Vec::new()),
        }
    }

    CommandMetaBuilder::new("give")
        .with_permission("eldo.give")
        .add_unlocalized_argument("player", true)
        .add_unlocalized_argument("amount", false)
        .executes(NodeKind::Any(Handler::new(execute).completes(complete)))
}

fn item() -> CommandNode {
    fn execute(ctx: &mut CommandContext<'_>) -> CommandResult<()> {
        let material = ctx.args().as_material_stripped(0, ctx.world())?;
        ctx.reply_with(
            "Selected <gold><material><default>.",
            &Replacements::new().with("material", material.name),
        )
    }

    fn complete(ctx: &CommandContext<'_>) -> CommandResult<Vec<String>> {
        Ok(completion::complete_material(ctx.world(), value(ctx), true))
    }

    CommandMetaBuilder::new("item")
        .add_alias("material")
        .add_unlocalized_argument("material", true)
        .executes(NodeKind::Any(Handler::new(execute).completes(complete)))
}

fn mode() -> CommandNode {
    fn execute(ctx: &mut CommandContext<'_>) -> CommandResult<()> {
        let mode: GameMode = ctx.args().as_enum_stripped(0)?;
        ctx.reply_with(
            "Game mode set to <gold><mode><default>.",
            &Replacements::new().with("mode", mode.name().to_lowercase()),
        )
    }

    CommandMetaBuilder::new("mode")
        .add_alias("gm")
        .with_permission("eldo.mode")
        .add_unlocalized_argument("mode", true)
        .executes(NodeKind::Player(Handler::new(execute).completes(|ctx| {
            Ok(completion::complete_enum::<GameMode>(value(ctx), true, false))
        })))
}

fn seen() -> CommandNode {
    fn execute(ctx: &mut CommandContext<'_>) -> CommandResult<()> {
        let player = ctx.args().as_offline_player(0, ctx.world())?;
        assertions::is_true(player.has_played_before(), ErrorKind::UnknownPlayer)?;
        let status = if ctx.world().online_player(&player.name).is_some() {
            "online"
        } else {
            "offline"
        };
        ctx.reply_with(
            "<gold><player><default> is <status>.",
            &Replacements::new()
                .with("player", player.name)
                .with("status", status),
        )
    }

    fn complete(ctx: &CommandContext<'_>) -> CommandResult<Vec<String>> {
        Ok(completion::complete_players(ctx.world(), value(ctx)))
    }

    CommandMetaBuilder::new("seen")
        .add_unlocalized_argument("player", true)
        .executes(NodeKind::Any(Handler::new(execute).completes(complete)))
}

fn reset() -> CommandNode {
    CommandMetaBuilder::new("reset")
        .with_permission("eldo.admin")
        .hidden()
        .executes(NodeKind::console(|ctx| {
            info!("{} reset the demo state", ctx.sender().name());
            ctx.reply("Nothing to reset.")
        }))
}
