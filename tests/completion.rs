mod common;

use common::{adapter, env, sample_tree, tokens, TestSender};
use eldoutils_core::commands::{completion, Arguments, CommandTree, Completion};

#[test]
fn sub_commands_complete_by_prefix() {
    let adapter = adapter();
    let sender = TestSender::console();
    assert_eq!(adapter.on_tab_complete(&sender, "eldo", &tokens("gi")), ["give"]);
    assert_eq!(
        adapter.on_tab_complete(&sender, "eldo", &tokens("R")),
        ["remove", "rm"]
    );
}

#[test]
fn hidden_commands_are_not_suggested() {
    let adapter = adapter();
    let sender = TestSender::console();
    let all = adapter.on_tab_complete(&sender, "eldo", &[]);
    assert_eq!(all, ["admin", "give", "remove", "rm", "where"]);
}

#[test]
fn leaf_completers_receive_their_arguments() {
    let adapter = adapter();
    let sender = TestSender::console();
    assert_eq!(
        adapter.on_tab_complete(&sender, "eldo", &tokens("give a")),
        ["Alex"]
    );
    assert_eq!(
        adapter.on_tab_complete(&sender, "eldo", &tokens("give Alex 3")),
        ["1 » 64"]
    );
    assert_eq!(
        adapter.on_tab_complete(&sender, "eldo", &tokens("give Alex 99")),
        ["This value is out of range. Min: 1 Max: 64"]
    );
}

#[test]
fn missing_permission_is_shown_as_message() {
    let tree = CommandTree::new(sample_tree());
    let sender = TestSender::player(&[]);
    let completion = tree
        .complete(&env(), &sender, "eldo", Arguments::from_line("give St"))
        .unwrap();
    assert_eq!(
        completion,
        Completion::Message("You do not have the permission to do this. (eldo.give)".to_string())
    );
}

#[test]
fn unknown_branches_are_reported() {
    let adapter = adapter();
    let sender = TestSender::console();
    assert_eq!(
        adapter.on_tab_complete(&sender, "eldo", &tokens("fly high")),
        ["Invalid Command"]
    );
}

#[test]
fn leaves_without_completer_suggest_nothing() {
    let adapter = adapter();
    let sender = TestSender::console();
    assert!(adapter
        .on_tab_complete(&sender, "eldo", &tokens("remove x"))
        .is_empty());
}

#[test]
fn players_and_worlds() {
    let world = common::TestWorld;
    assert_eq!(
        completion::complete_players(&world, ""),
        ["Notch", "Steve", "Alex"]
    );
    assert_eq!(
        completion::complete_worlds(&world, "cr", "_"),
        ["creative_plots"]
    );
    assert_eq!(
        completion::complete_material(&world, "gp", false),
        ["GLASS_PANE"]
    );
}

#[test]
fn is_command_ignores_case() {
    assert!(completion::is_command("Give", &["give", "g"]));
    assert!(!completion::is_command("gives", &["give", "g"]));
}
