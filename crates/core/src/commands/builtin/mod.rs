//! Commands every plugin gets for free.

use crate::commands::{CommandMetaBuilder, CommandNode, NodeKind};
use crate::messages::{Replacement, Replacements};
use itertools::Itertools;
use tracing::info;

/// `about`: plugin name, authors, version and support links.
pub fn about() -> CommandNode {
    CommandMetaBuilder::new("about").executes(NodeKind::any(|ctx| {
        let plugin = ctx.plugin();
        let replacements = Replacements::from(vec![
            Replacement::new("PLUGIN_NAME", &plugin.name),
            Replacement::new("AUTHORS", plugin.authors.iter().join(", ")),
            Replacement::new("VERSION", &plugin.version),
            Replacement::new("WEBSITE", &plugin.website),
            Replacement::new("DISCORD", format!("https://discord.gg/{}", plugin.discord)),
        ]);
        ctx.messenger()
            .send_localized_message(ctx.sender(), "commands.about", &replacements);
        Ok(())
    }))
}

/// The root registered in place of the real command tree when startup failed.
///
/// `debug` prints what the plugin knows about itself. Everything else tells the
/// sender how to get there.
pub fn failsave(name: &str) -> CommandNode {
    CommandMetaBuilder::new(name)
        .add_unlocalized_argument("debug", false)
        .executes(NodeKind::any(|ctx| {
            let debug = ctx
                .args()
                .first()
                .is_some_and(|arg| arg.as_str().eq_ignore_ascii_case("debug"));
            if !debug {
                let replacements = Replacements::new().with("ALIAS", ctx.label());
                ctx.messenger()
                    .send_localized_error(ctx.sender(), "commands.failsave", &replacements);
                return Ok(());
            }

            let plugin = ctx.plugin();
            let locales = ctx.localizer().locales();
            let locales = if locales.is_empty() {
                ctx.localizer().default_locale().to_string()
            } else {
                locales.join(", ")
            };
            info!(
                "Debug requested by {}: {} {} (locales: {})",
                ctx.sender().name(),
                plugin.name,
                plugin.version,
                locales
            );
            let replacements = Replacements::new()
                .with("NAME", &plugin.name)
                .with("VERSION", &plugin.version)
                .with("LOCALES", &locales);
            ctx.reply_with(
                "<gold><name></gold> <version><default>\nLocales: <locales>",
                &replacements,
            )
        }))
}
