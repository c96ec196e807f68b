use crate::localization::Localizer;

/// A declared argument of a command, used for syntax hints and the required
/// argument count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    Input {
        name: String,
        required: bool,
        /// Whether the name is a locale key resolved when the syntax is shown.
        localized: bool,
    },
    SubCommand {
        name: String,
    },
}

impl Argument {
    pub fn input(name: impl Into<String>, required: bool) -> Self {
        Argument::Input {
            name: name.into(),
            required,
            localized: true,
        }
    }

    pub fn unlocalized_input(name: impl Into<String>, required: bool) -> Self {
        Argument::Input {
            name: name.into(),
            required,
            localized: false,
        }
    }

    pub fn sub_command(name: impl Into<String>) -> Self {
        Argument::SubCommand { name: name.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            Argument::Input { name, .. } | Argument::SubCommand { name } => name,
        }
    }

    pub fn is_required(&self) -> bool {
        match self {
            Argument::Input { required, .. } => *required,
            Argument::SubCommand { .. } => true,
        }
    }

    /// `<name>` for required and `[name]` for optional arguments.
    ///
    /// Localized names are embedded as `<i18n:key>` references which the
    /// message sender resolves for the receiving sender.
    pub fn formatted(&self) -> String {
        match self {
            Argument::Input {
                name,
                required,
                localized,
            } => {
                let name = if *localized {
                    Localizer::escape(name)
                } else {
                    name.clone()
                };
                if *required {
                    format!("<{name}>")
                } else {
                    format!("[{name}]")
                }
            }
            Argument::SubCommand { name } => name.clone(),
        }
    }
}
