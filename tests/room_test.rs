//! Tests for building and releasing room trees of various shapes

use std::collections::HashSet;

use rstest::rstest;

use detective_quest::domain::mansion::{
    ATTIC, CELLAR, GARDEN, HALL, KITCHEN, LIBRARY, LIVING_ROOM, STUDY,
};
use detective_quest::{build_mansion, create_room, release_all, Room, Side};

/// Complete tree of the given height, rooms named by their position in a heap.
fn complete(height: u32, index: usize) -> Room {
    let mut room = create_room(&format!("room-{index}"));
    if height > 1 {
        room.left = Some(Box::new(complete(height - 1, 2 * index)));
        room.right = Some(Box::new(complete(height - 1, 2 * index + 1)));
    }
    room
}

/// Chain that alternates left and right doors.
fn zigzag(len: usize) -> Room {
    let mut current = create_room(&format!("z{}", len - 1));
    for i in (0..len - 1).rev() {
        let mut parent = create_room(&format!("z{i}"));
        if i % 2 == 0 {
            parent.left = Some(Box::new(current));
        } else {
            parent.right = Some(Box::new(current));
        }
        current = parent;
    }
    current
}

fn assert_released_once(released: &[String], expected_rooms: usize) {
    let unique: HashSet<&String> = released.iter().collect();
    assert_eq!(released.len(), expected_rooms, "every room released");
    assert_eq!(unique.len(), expected_rooms, "no room released twice");
}

// ============================================================
// Release order and completeness
// ============================================================

#[test]
fn given_mansion_when_releasing_then_children_go_before_parents() {
    let released = release_all(build_mansion());

    assert_eq!(
        released,
        vec![KITCHEN, LIVING_ROOM, CELLAR, ATTIC, STUDY, GARDEN, LIBRARY, HALL]
    );
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
fn given_complete_tree_when_releasing_then_each_room_released_once(#[case] height: u32) {
    let root = complete(height, 1);
    let rooms = root.len();
    assert_eq!(rooms, (1 << height) - 1);

    let released = release_all(root);

    assert_released_once(&released, rooms);
    assert_eq!(released.last().map(String::as_str), Some("room-1"));
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(7)]
fn given_zigzag_chain_when_releasing_then_released_bottom_up(#[case] len: usize) {
    let root = zigzag(len);
    assert_eq!(root.depth(), len);

    let released = release_all(root);

    assert_released_once(&released, len);
    let expected: Vec<String> = (0..len).rev().map(|i| format!("z{i}")).collect();
    assert_eq!(released, expected);
}

#[test]
fn given_every_room_when_releasing_then_parent_follows_its_subtree() {
    let root = build_mansion();
    // parent name -> child names, captured before the tree is consumed
    let edges: Vec<(String, String)> = root
        .iter()
        .flat_map(|room| {
            room.exits()
                .map(|(_, child)| (room.name().to_string(), child.name().to_string()))
                .collect::<Vec<_>>()
        })
        .collect();

    let released = release_all(root);
    let position = |name: &str| released.iter().position(|r| r == name).unwrap();

    for (parent, child) in edges {
        assert!(
            position(&child) < position(&parent),
            "{child} must be released before {parent}"
        );
    }
}

// ============================================================
// Shape queries
// ============================================================

#[test]
fn given_manual_wiring_when_querying_then_doors_match() {
    let mut hall = create_room("Hall");
    let mut corridor = create_room("Corredor");
    corridor.right = Some(Box::new(create_room("Quarto")));
    hall.left = Some(Box::new(corridor));

    assert!(!hall.is_leaf());
    assert!(hall.child(Side::Right).is_none());
    let corridor = hall.child(Side::Left).unwrap();
    assert_eq!(corridor.name(), "Corredor");
    assert_eq!(corridor.child(Side::Right).map(Room::name), Some("Quarto"));
    assert_eq!(hall.leaf_names(), vec!["Quarto"]);
    assert_eq!(hall.depth(), 3);
}
