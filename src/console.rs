use eldoutils_core::commands::{CommandAdapter, CommandSender, SenderKind};
use eldoutils_text::{to_ansi, TextComponent};
use itertools::Itertools;
use rustc_hash::FxHashSet;

/// A command sender attached to the terminal.
pub struct Terminal {
    kind: SenderKind,
    pub name: String,
    permissions: FxHashSet<String>,
    locale: Option<String>,
}

impl Terminal {
    pub fn console() -> Terminal {
        Terminal {
            kind: SenderKind::Console,
            name: "CONSOLE".to_string(),
            permissions: FxHashSet::default(),
            locale: None,
        }
    }

    pub fn player(name: String, permissions: Vec<String>, locale: Option<String>) -> Terminal {
        Terminal {
            kind: SenderKind::Player,
            name,
            permissions: permissions.into_iter().collect(),
            locale,
        }
    }

    pub fn print(&self, text: &str) {
        anstream::println!("{}", text);
    }
}

impl CommandSender for Terminal {
    fn kind(&self) -> SenderKind {
        self.kind
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.kind == SenderKind::Console
            || self.permissions.contains("*")
            || self.permissions.contains(permission)
    }

    fn send_message(&self, message: &[TextComponent]) {
        anstream::println!("{}", to_ansi(message));
    }

    fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }
}

/// Prints the suggestions for a partial command line.
///
/// A trailing space asks for suggestions of the next, still empty, argument.
pub fn complete(adapter: &CommandAdapter, sender: &Terminal, partial: &str) {
    let partial = partial.trim_start();
    let partial = partial.strip_prefix('/').unwrap_or(partial);
    let mut tokens = partial.split(' ').filter(|token| !token.is_empty()).collect_vec();
    if partial.ends_with(' ') {
        tokens.push("");
    }
    let Some((label, args)) = tokens.split_first() else {
        return;
    };
    let args = args.iter().map(|arg| arg.to_string()).collect_vec();
    let suggestions = adapter.on_tab_complete(sender, label, &args);
    if suggestions.is_empty() {
        sender.print("(no suggestions)");
    } else {
        sender.print(&suggestions.join("  "));
    }
}
