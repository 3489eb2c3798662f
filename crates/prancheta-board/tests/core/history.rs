use prancheta_board::{BallItem, HistoryManager, Item, Scene};
use prancheta_core::Point;

fn scene_with(n: usize) -> Scene {
    (0..n)
        .map(|i| Item::Ball(BallItem::new(Point::new(i as f64 * 30.0, 0.0), "#fff", 20.0)))
        .collect()
}

#[test]
fn test_boundaries_are_noops() {
    let mut history = HistoryManager::new(Scene::new(), 50);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert!(history.undo().is_none());
    assert!(history.redo().is_none());
    assert_eq!(history.cursor(), 0);
    assert_eq!(history.depth(), 1);
}

#[test]
fn test_undo_redo_walks_snapshots() {
    let mut history = HistoryManager::new(Scene::new(), 50);
    history.commit(scene_with(1));
    history.commit(scene_with(2));

    assert_eq!(history.undo().map(|s| s.len()), Some(1));
    assert_eq!(history.undo().map(|s| s.len()), Some(0));
    assert!(history.undo().is_none());
    assert_eq!(history.redo().map(|s| s.len()), Some(1));
    assert_eq!(history.redo().map(|s| s.len()), Some(2));
    assert!(history.redo().is_none());
}

#[test]
fn test_commit_discards_redo_branch() {
    let mut history = HistoryManager::new(Scene::new(), 50);
    history.commit(scene_with(1));
    history.commit(scene_with(2));
    history.undo();
    history.undo();

    history.commit(scene_with(3));
    assert!(!history.can_redo());
    assert_eq!(history.depth(), 2);
    assert_eq!(history.current().len(), 3);
}

#[test]
fn test_depth_is_bounded() {
    let mut history = HistoryManager::new(Scene::new(), 5);
    for i in 1..=10 {
        history.commit(scene_with(i));
    }
    assert_eq!(history.depth(), 5);
    assert_eq!(history.current().len(), 10);

    let mut oldest = 0;
    while let Some(scene) = history.undo() {
        oldest = scene.len();
    }
    assert_eq!(oldest, 6);
}

#[test]
fn test_clear_restarts() {
    let mut history = HistoryManager::new(Scene::new(), 50);
    history.commit(scene_with(1));
    history.clear(scene_with(4));
    assert_eq!(history.depth(), 1);
    assert_eq!(history.current().len(), 4);
    assert!(!history.can_undo());
}
