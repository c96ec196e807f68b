pub(super) const RUNTIME_CODES: &[(&str, &str)] = &[
    (
        "error.invalidArguments",
        "Invalid arguments.\nSyntax: <gold><syntax><default>",
    ),
    ("error.invalidCommand", "Invalid Command"),
    (
        "error.endOfRoute",
        "Please choose a subcommand. Available commands are:\n<gold><commands><default>",
    ),
    (
        "error.permission",
        "You do not have the permission to do this. (<gold><permission><default>)",
    ),
    (
        "error.invalidRange",
        "This value is out of range. Min: <gold><min><default> Max: <gold><max><default>",
    ),
    (
        "error.invalidEnumValue",
        "Invalid input value. Valid inputs are <gold><values><default>.",
    ),
    ("error.invalidMaterial", "Invalid material."),
    ("error.invalidNumber", "Invalid number"),
    (
        "error.invalidBoolean",
        "Invalid value, <gold><true><default> or <gold><false><default>",
    ),
    (
        "error.invalidLength",
        "This input is too long. Max: <gold><max><default> chars.",
    ),
    ("error.notOnline", "Invalid player. This player is not online."),
    (
        "error.unknownPlayer",
        "Invalid player. This player has never played on this server.",
    ),
    ("error.unknownWorld", "Invalid world."),
    ("error.onlyPlayer", "This command can only be used by players."),
    ("error.onlyConsole", "This command can only be used by console."),
    ("error.invalidSender", "This command can not be executed from here."),
    (
        "error.missingArgument",
        "Argument <index> is accessed but not present.",
    ),
    ("error.tooSmall", "The number is too small. Min: <gold><min>"),
    ("error.tooLarge", "The number is too Large. Max: <gold><max>"),
    (
        "commands.about",
        "<bold><gold><plugin_name></bold><default> by <bold><authors></bold>\nVersion: <bold><version></bold>\nSpigot: <bold><website></bold>\nSupport: <bold><discord></bold>",
    ),
    (
        "commands.failsave",
        "<red>The plugin failed to load correctly. Please use <gold>/<alias><red> debug to show the plugin version and loaded locales.",
    ),
];
