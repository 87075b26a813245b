use termtree::Tree;
use tracing::instrument;

use crate::domain::{KeyBindings, Room};

pub trait RoomTreeConvert {
    /// Renders the subtree as an ASCII tree, children labelled with their door.
    fn to_tree_string(&self, keys: &KeyBindings) -> Tree<String>;
}

impl RoomTreeConvert for Room {
    #[instrument(level = "debug", skip(self), fields(room = self.name()))]
    fn to_tree_string(&self, keys: &KeyBindings) -> Tree<String> {
        fn build(room: &Room, label: String, keys: &KeyBindings) -> Tree<String> {
            let leaves: Vec<_> = room
                .exits()
                .map(|(side, child)| {
                    let label = format!("({}) {}", keys.key_for(side), child.name());
                    build(child, label, keys)
                })
                .collect();
            Tree::new(label).with_leaves(leaves)
        }

        build(self, self.name().to_string(), keys)
    }
}
