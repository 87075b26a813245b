use std::fmt;
use tracing::{instrument, trace};

/// Which door of a room leads to a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Menu label, e.g. `Esquerda`.
    pub fn label(&self) -> &'static str {
        match self {
            Side::Left => "Esquerda",
            Side::Right => "Direita",
        }
    }

    /// Direction phrase used when a door is missing, e.g. `à esquerda`.
    pub fn towards(&self) -> &'static str {
        match self {
            Side::Left => "à esquerda",
            Side::Right => "à direita",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A named room of the mansion and the (at most two) rooms behind its doors.
///
/// Each child is owned exclusively through its `Box`, so the map is always a
/// finite, acyclic binary tree. Doors are wired by assigning `left`/`right`
/// after [`create_room`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    /// Room behind the left door
    pub left: Option<Box<Room>>,
    /// Room behind the right door
    pub right: Option<Box<Room>>,
}

/// Creates a detached room owning a copy of `name`.
pub fn create_room(name: &str) -> Room {
    Room {
        name: name.to_owned(),
        left: None,
        right: None,
    }
}

impl Room {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A room with no doors ends the exploration.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn child(&self, side: Side) -> Option<&Room> {
        match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        }
    }

    /// Doors that actually lead somewhere, left before right.
    pub fn exits(&self) -> impl Iterator<Item = (Side, &Room)> {
        [Side::Left, Side::Right]
            .into_iter()
            .filter_map(move |side| self.child(side).map(|room| (side, room)))
    }

    /// Number of rooms on the longest path from here down to a leaf, inclusive.
    #[instrument(level = "trace", skip(self), fields(room = %self.name))]
    pub fn depth(&self) -> usize {
        1 + self
            .exits()
            .map(|(_, child)| child.depth())
            .max()
            .unwrap_or(0)
    }

    /// Total number of rooms in this subtree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always false; a subtree holds at least its own room.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Collects the names of all rooms without doors, left to right.
    #[instrument(level = "debug", skip(self), fields(room = %self.name))]
    pub fn leaf_names(&self) -> Vec<&str> {
        self.iter()
            .filter(|room| room.is_leaf())
            .map(Room::name)
            .collect()
    }

    /// Pre-order iterator (room, then left subtree, then right subtree).
    pub fn iter(&self) -> RoomIterator<'_> {
        RoomIterator { stack: vec![self] }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub struct RoomIterator<'a> {
    stack: Vec<&'a Room>,
}

impl<'a> Iterator for RoomIterator<'a> {
    type Item = &'a Room;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push right first so the left subtree comes out first
        if let Some(right) = current.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = current.left.as_deref() {
            self.stack.push(left);
        }
        Some(current)
    }
}

/// Releases every room of the tree, children before their parent.
///
/// Consumes the tree: each room is visited and dropped exactly once, left
/// subtree first, then right subtree, then the room itself. The released
/// names are returned in that order. Uses an explicit stack, so long chains
/// of rooms do not grow the call stack.
#[instrument(level = "debug", skip(root), fields(root = %root.name))]
pub fn release_all(root: Room) -> Vec<String> {
    let mut released = Vec::new();
    let mut stack = vec![(root, false)];

    while let Some((mut room, expanded)) = stack.pop() {
        if expanded {
            trace!(room = %room.name, "releasing room");
            released.push(room.name);
            continue;
        }
        let left = room.left.take();
        let right = room.right.take();
        stack.push((room, true));
        if let Some(right) = right {
            stack.push((*right, false));
        }
        if let Some(left) = left {
            stack.push((*left, false));
        }
    }

    released
}
