use prancheta_board::{
    ArrowItem, BallItem, BlockItem, BlockShape, BoardItem, Item, ItemId, PlayerItem, Scene,
};
use prancheta_core::{BoardError, Point};

fn with_id(mut item: Item, id: &str) -> Item {
    item.common_mut().id = ItemId::from(id);
    item
}

fn ball(id: &str, x: f64, y: f64) -> Item {
    with_id(
        Item::Ball(BallItem::new(Point::new(x, y), "#ffffff", 20.0)),
        id,
    )
}

#[test]
fn test_add_item_rejects_duplicate_id() {
    let scene = Scene::new().add_item(ball("a", 0.0, 0.0)).unwrap();
    let err = scene.add_item(ball("a", 50.0, 50.0)).unwrap_err();
    assert!(matches!(err, BoardError::DuplicateItemId { .. }));
    assert_eq!(scene.len(), 1);
}

#[test]
fn test_functional_updates_leave_original_untouched() {
    let s1 = Scene::new().add_item(ball("a", 0.0, 0.0)).unwrap();
    let s2 = s1.add_item(ball("b", 10.0, 0.0)).unwrap();
    let s3 = s2.remove_item(&"a".into()).unwrap();

    assert_eq!(s1.len(), 1);
    assert_eq!(s2.len(), 2);
    assert_eq!(s3.len(), 1);
    assert!(s3.contains(&"b".into()));
}

#[test]
fn test_topmost_wins_on_overlap() {
    let scene = Scene::from_items(vec![ball("under", 100.0, 100.0), ball("over", 105.0, 100.0)])
        .unwrap();
    let hit = scene.find_topmost_at(Point::new(102.0, 100.0), 5.0).unwrap();
    assert_eq!(hit.id().as_str(), "over");

    let reordered = scene.bring_to_front(&"under".into()).unwrap();
    let hit = reordered
        .find_topmost_at(Point::new(102.0, 100.0), 5.0)
        .unwrap();
    assert_eq!(hit.id().as_str(), "under");
}

#[test]
fn test_selection_is_exact() {
    let scene = Scene::from_items(vec![ball("a", 0.0, 0.0), ball("b", 50.0, 0.0)]).unwrap();
    let selected = scene.set_selection(&["b".into(), "missing".into()]);
    assert_eq!(selected.selected_ids(), vec![ItemId::from("b")]);

    let reselected = selected.set_selection(&["a".into()]);
    assert_eq!(reselected.selected_ids(), vec![ItemId::from("a")]);

    let removed = reselected.remove_selected();
    assert_eq!(removed.len(), 1);
    assert!(removed.contains(&"b".into()));
}

#[test]
fn test_clear_empties_scene() {
    let scene = Scene::from_items(vec![ball("a", 0.0, 0.0)]).unwrap();
    assert!(scene.clear().is_empty());
}

#[test]
fn test_patch_in_place_only_copies_shared_item() {
    let mut live = Scene::from_items(vec![ball("a", 0.0, 0.0), ball("b", 50.0, 0.0)]).unwrap();
    let snapshot = live.clone();

    assert!(live.patch_in_place(&"a".into(), |i| i.translate(3.0, 4.0)));
    assert_eq!(snapshot.get(&"a".into()).unwrap().position(), Point::new(0.0, 0.0));
    assert_eq!(live.get(&"a".into()).unwrap().position(), Point::new(3.0, 4.0));
    assert!(live.shares_item_with(&snapshot, &"b".into()));
}

// Scenario A
#[test]
fn test_ball_hit_radius() {
    let scene = Scene::new().add_item(ball("ball", 100.0, 100.0)).unwrap();
    assert!(scene.find_topmost_at(Point::new(105.0, 100.0), 5.0).is_some());
    assert!(scene.find_topmost_at(Point::new(120.0, 100.0), 5.0).is_none());
}

// Scenario B
#[test]
fn test_arrow_hit_tolerance() {
    let arrow = Item::Arrow(ArrowItem::new(
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        "#000000",
        2.0,
    ));
    let scene = Scene::new().add_item(arrow).unwrap();
    assert!(scene.find_topmost_at(Point::new(50.0, 3.0), 5.0).is_some());
    assert!(scene.find_topmost_at(Point::new(50.0, 10.0), 5.0).is_none());
}

#[test]
fn test_hit_soundness_grid() {
    let items = vec![
        Item::PlayerBlue(PlayerItem::new(Point::new(100.0, 100.0), "#1565c0", 30.0)),
        Item::Block(BlockItem::new(
            Point::new(300.0, 100.0),
            "#ff9800",
            40.0,
            BlockShape::Rectangle,
        )),
        Item::Block(BlockItem::new(
            Point::new(100.0, 300.0),
            "#ff9800",
            40.0,
            BlockShape::Circle,
        )),
    ];

    for item in &items {
        let c = item.position();
        for dx in -30i32..=30 {
            for dy in -30i32..=30 {
                let p = Point::new(c.x + dx as f64, c.y + dy as f64);
                let d = (dx as f64).hypot(dy as f64);
                let expected = match item {
                    Item::PlayerBlue(_) => d <= 15.0,
                    Item::Block(b) if b.shape == BlockShape::Rectangle => {
                        dx.abs() <= 20 && dy.abs() <= 20
                    }
                    Item::Block(_) => d <= 20.0,
                    _ => unreachable!(),
                };
                assert_eq!(
                    item.contains_point(p, 5.0),
                    expected,
                    "{} at offset ({}, {})",
                    item.item_type(),
                    dx,
                    dy
                );
            }
        }
    }
}

#[test]
fn test_missing_size_falls_back_to_defaults() {
    let json = r##"{"type":"block","id":"b","position":{"x":0,"y":0},"color":"#000","shape":"rectangle"}"##;
    let item: Item = serde_json::from_str(json).unwrap();
    let bounds = item.bounds();
    assert_eq!(bounds.width(), 30.0);
    assert_eq!(bounds.height(), 30.0);
}
