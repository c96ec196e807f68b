use super::meta::CommandMeta;
use super::node::{CommandNode, NodeKind};
use indexmap::map::Entry;
use itertools::Itertools;
use std::fmt;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct NodeEntry {
    meta: CommandMeta,
    kind: NodeKind,
}

/// An immutable command hierarchy stored as a flat arena.
///
/// Nodes refer to their parent and children by [`NodeId`], so the tree can be
/// shared between threads without any interior mutability.
pub struct CommandTree {
    nodes: Vec<NodeEntry>,
}

impl CommandTree {
    pub fn new(root: CommandNode) -> CommandTree {
        let mut tree = CommandTree { nodes: Vec::new() };
        tree.insert(root, None);
        tree
    }

    fn insert(&mut self, node: CommandNode, parent: Option<NodeId>) -> NodeId {
        let CommandNode {
            mut meta,
            kind,
            children,
            default,
        } = node;
        let id = NodeId(self.nodes.len());
        meta.parent = parent;
        self.nodes.push(NodeEntry { meta, kind });

        let mut sub_commands = indexmap::IndexMap::new();
        let mut registered = Vec::new();
        for child in children {
            let hidden = child.meta.hidden;
            let names: Vec<String> = std::iter::once(child.meta.name.clone())
                .chain(child.meta.aliases.iter().cloned())
                .collect();
            let child_id = self.insert(child, Some(id));
            for name in names {
                match sub_commands.entry(name.to_lowercase()) {
                    Entry::Occupied(mut entry) => {
                        warn!(
                            "Command {} is registered twice below {}",
                            name,
                            self.nodes[id.0].meta.name
                        );
                        entry.insert(child_id);
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(child_id);
                    }
                }
                if !hidden {
                    registered.push(name);
                }
            }
        }
        let default_command = default.map(|node| self.insert(*node, Some(id)));

        let meta = &mut self.nodes[id.0].meta;
        meta.sub_commands = sub_commands;
        meta.registered_commands = registered.into_iter().unique().collect();
        meta.default_command = default_command;
        id
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn meta(&self, id: NodeId) -> &CommandMeta {
        &self.nodes[id.0].meta
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    /// The distinct sub-commands of a node, in registration order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.meta(id).sub_commands.values().copied().unique()
    }

    /// Follows sub-command names from the root, e.g. `["give"]`.
    pub fn find(&self, path: &[&str]) -> Option<NodeId> {
        path.iter()
            .try_fold(self.root(), |id, token| self.meta(id).sub_command(token))
    }

    /// The command names from the root down to `id`, joined by spaces.
    pub fn command_call(&self, id: NodeId) -> String {
        let mut names = vec![self.meta(id).name()];
        let mut current = self.meta(id).parent;
        while let Some(parent) = current {
            names.push(self.meta(parent).name());
            current = self.meta(parent).parent;
        }
        names.into_iter().rev().join(" ")
    }
}

impl fmt::Debug for CommandTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.nodes.iter().map(|node| &node.meta.name))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::meta::CommandMetaBuilder;

    fn tree() -> CommandTree {
        CommandTree::new(
            CommandMetaBuilder::new("eldo")
                .with_sub_command(
                    CommandMetaBuilder::new("give")
                        .add_alias("g")
                        .with_sub_command(CommandMetaBuilder::new("all").build())
                        .build(),
                )
                .with_sub_command(CommandMetaBuilder::new("reset").hidden().build())
                .with_default_command(CommandMetaBuilder::new("help").build())
                .build(),
        )
    }

    #[test]
    fn parents_are_linked() {
        let tree = tree();
        let all = tree.find(&["give", "all"]).unwrap();
        assert_eq!(tree.command_call(all), "eldo give all");
        assert_eq!(tree.meta(all).parent(), tree.find(&["g"]));
    }

    #[test]
    fn sub_command_keys_resolve_to_matching_nodes() {
        let tree = tree();
        let root = tree.meta(tree.root());
        for (key, id) in root.sub_commands() {
            assert!(tree.meta(*id).is_command(key));
        }
        assert_eq!(tree.children(tree.root()).count(), 2);
        assert_eq!(tree.find(&["GIVE"]), tree.find(&["g"]));
    }

    #[test]
    fn non_ascii_names_resolve_to_matching_nodes() {
        let tree = CommandTree::new(
            CommandMetaBuilder::new("eldo")
                .with_sub_command(CommandMetaBuilder::new("Ünlock").add_alias("Öffnen").build())
                .build(),
        );
        let root = tree.meta(tree.root());
        for (key, id) in root.sub_commands() {
            assert!(tree.meta(*id).is_command(key));
        }
        assert_eq!(tree.find(&["ÜNLOCK"]), tree.find(&["öffnen"]));
        assert!(tree.find(&["ünlock"]).is_some());
    }

    #[test]
    fn hidden_commands_are_not_registered() {
        let tree = tree();
        let root = tree.meta(tree.root());
        assert_eq!(root.registered_commands(), ["give", "g"]);
        assert!(root.sub_command("reset").is_some());
    }

    #[test]
    fn default_command_is_not_a_sub_command() {
        let tree = tree();
        let root = tree.meta(tree.root());
        let help = root.default_command().unwrap();
        assert_eq!(tree.meta(help).name(), "help");
        assert!(root.sub_command("help").is_none());
        assert_eq!(tree.command_call(help), "eldo help");
    }
}
