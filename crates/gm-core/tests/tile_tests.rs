use gm_core::{Coord, GameMap, GlyphMode, MapOptions, Tier, Tile, TileKind};
use proptest::prelude::*;

#[test]
fn test_move_ground_leaves_void() {
    let mut map = GameMap::new();
    let mut ground = Tile::ground(Coord::new(2, 3));
    ground.place(&mut map);

    let fallback = ground.default_fallback();
    ground.move_to(Coord::new(2, 4), &mut map, fallback);

    assert_eq!(map.tile_at(Coord::new(2, 3)).map(|t| t.kind), Some(TileKind::Empty));
    let moved = map.tile_at(Coord::new(2, 4)).unwrap();
    assert_eq!(moved.kind, TileKind::Ground);
    assert_eq!(moved.pos, Coord::new(2, 4));
}

#[test]
fn test_move_treasure_leaves_ground() {
    let mut map = GameMap::new();
    let mut treasure = Tile::treasure(Coord::new(5, 5));
    treasure.place(&mut map);

    let fallback = treasure.default_fallback();
    treasure.move_to(Coord::new(5, 6), &mut map, fallback);

    assert_eq!(map.tile_at(Coord::new(5, 5)).map(|t| t.kind), Some(TileKind::Ground));
    assert_eq!(map.tile_at(Coord::new(5, 6)), Some(&treasure));
}

#[test]
fn test_every_object_kind_leaves_ground() {
    let kinds = [
        TileKind::Generic,
        TileKind::Treasure,
        TileKind::Food,
        TileKind::Wall(None),
        TileKind::VerticalDoor,
        TileKind::HorizontalDoor,
        TileKind::Water,
    ];
    for kind in kinds {
        assert_eq!(kind.tier(), Tier::Object);
        let mut map = GameMap::new();
        Tile::new(kind, Coord::new(0, 0)).place(&mut map);
        assert!(map.move_tile(Coord::new(0, 0), Coord::new(0, 1)));
        assert_eq!(
            map.tile_at(Coord::new(0, 0)).map(|t| t.kind),
            Some(TileKind::Ground),
            "{kind}"
        );
    }
}

#[test]
fn test_moved_wall_keeps_junction() {
    let mut map = GameMap::from_token_grid("##", &MapOptions::default()).unwrap();
    let before = *map.tile_at(Coord::new(0, 0)).unwrap();
    assert!(map.move_tile(Coord::new(0, 0), Coord::new(3, 3)));
    let after = map.tile_at(Coord::new(3, 3)).unwrap();
    assert_eq!(after.kind, before.kind);
    // tokens are untouched by moves
    assert_eq!(map.token_at(Coord::new(0, 0)), Some('#'));
    assert_eq!(map.token_at(Coord::new(3, 3)), None);
}

#[test]
fn test_load_room_with_contents() {
    let grid = "\
#####
#$ f#
|   -
# w #
#####";
    let map = GameMap::from_token_grid(grid, &MapOptions::default()).unwrap();
    assert_eq!(map.len(), 25);
    assert_eq!(
        map.render_rows(GlyphMode::Fancy),
        vec!["┌───┐", "│$ f│", "▒   ▒", "│ ▒ │", "└───┘"]
    );
    assert_eq!(map.tile_at(Coord::new(2, 0)).map(|t| t.kind), Some(TileKind::VerticalDoor));
    assert_eq!(map.tile_at(Coord::new(2, 4)).map(|t| t.kind), Some(TileKind::HorizontalDoor));
}

#[test]
fn test_tiles_sorted_row_major() {
    let map = GameMap::from_token_grid("$f\nw", &MapOptions::default()).unwrap();
    let positions: Vec<Coord> = map.tiles_sorted().iter().map(|t| t.pos).collect();
    assert_eq!(
        positions,
        vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 0)]
    );
}

#[test]
fn test_tile_serializes() {
    let tile = Tile::treasure(Coord::new(1, 2));
    let json = serde_json::to_string(&tile).unwrap();
    let back: Tile = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tile);
}

fn object_kind() -> impl Strategy<Value = TileKind> {
    prop_oneof![
        Just(TileKind::Generic),
        Just(TileKind::Treasure),
        Just(TileKind::Food),
        Just(TileKind::VerticalDoor),
        Just(TileKind::HorizontalDoor),
        Just(TileKind::Water),
    ]
}

proptest! {
    #[test]
    fn prop_move_relocates(
        kind in object_kind(),
        from in (-50i32..50, -50i32..50),
        to in (-50i32..50, -50i32..50),
    ) {
        prop_assume!(from != to);
        let (from, to) = (Coord::from(from), Coord::from(to));
        let mut map = GameMap::new();
        let mut tile = Tile::new(kind, from);
        tile.place(&mut map);
        let fallback = tile.default_fallback();
        tile.move_to(to, &mut map, fallback);

        prop_assert_eq!(tile.pos, to);
        prop_assert_eq!(map.tile_at(to), Some(&tile));
        prop_assert_eq!(map.tile_at(from).map(|t| t.kind), Some(TileKind::Ground));
        prop_assert_eq!(map.len(), 2);
    }

    #[test]
    fn prop_place_then_read_back(kind in object_kind(), row in -100i32..100, col in -100i32..100) {
        let mut map = GameMap::new();
        let mut tile = Tile::new(kind, Coord::new(row, col));
        tile.place(&mut map);
        prop_assert_eq!(
            map.tile_at(Coord::new(row, col)).map(|t| t.appearance()),
            Some(tile.appearance())
        );
    }
}
