use prancheta_board::{
    render, render_to_image, ArrowItem, BallItem, Item, PlayerItem, RenderOptions, Scene,
    TextItem, Viewport,
};
use prancheta_core::Point;

fn rgb(pixmap: &tiny_skia::Pixmap, x: u32, y: u32) -> (u8, u8, u8) {
    let c = pixmap.pixel(x, y).unwrap().demultiply();
    (c.red(), c.green(), c.blue())
}

#[test]
fn test_empty_scene_draws_background() {
    let pixmap = render(&Scene::new(), &Viewport::default()).unwrap();
    assert_eq!((pixmap.width(), pixmap.height()), (500, 700));
    assert_eq!(rgb(&pixmap, 3, 3), (0x2e, 0x7d, 0x32));
}

#[test]
fn test_items_are_painted() {
    let scene = Scene::from_items(vec![
        Item::Ball(BallItem::new(Point::new(100.0, 100.0), "#ffffff", 20.0)),
        Item::Arrow(ArrowItem::new(
            Point::new(50.0, 300.0),
            Point::new(150.0, 300.0),
            "#ff0000",
            2.0,
        )),
        Item::Arrow(ArrowItem::new(
            Point::new(60.0, 500.0),
            Point::new(60.0, 500.0),
            "#0000ff",
            2.0,
        )),
    ])
    .unwrap();
    let pixmap = render(&scene, &Viewport::default()).unwrap();

    assert_eq!(rgb(&pixmap, 100, 100), (255, 255, 255));
    assert_eq!(rgb(&pixmap, 100, 300), (255, 0, 0));
    // zero-length arrow renders as a dot
    assert_eq!(rgb(&pixmap, 60, 500), (0, 0, 255));
}

#[test]
fn test_text_background_box() {
    let mut text = TextItem::new(Point::new(300.0, 100.0), "#000000", ".", 16.0, "Sans");
    text.width = Some(9.6);
    text.height = Some(19.2);
    text.background_color = Some("#0000ff".into());
    let scene = Scene::from_items(vec![Item::Text(text)]).unwrap();
    let pixmap = render(&scene, &Viewport::default()).unwrap();
    assert_eq!(rgb(&pixmap, 296, 91), (0, 0, 255));
}

#[test]
fn test_selection_handles_only_on_selected() {
    let player = Item::PlayerRed(PlayerItem::new(Point::new(100.0, 200.0), "#ff0000", 30.0));
    let id = player.id().clone();
    let scene = Scene::from_items(vec![player]).unwrap();

    let plain = render(&scene, &Viewport::default()).unwrap();
    assert_eq!(rgb(&plain, 115, 215), (0x2e, 0x7d, 0x32));

    let selected = scene.set_selection(&[id]);
    let decorated = render(&selected, &Viewport::default()).unwrap();
    assert_eq!(rgb(&decorated, 115, 215), (255, 255, 255));
}

#[test]
fn test_invalid_color_falls_back() {
    let scene = Scene::from_items(vec![Item::Ball(BallItem::new(
        Point::new(100.0, 100.0),
        "not-a-color",
        20.0,
    ))])
    .unwrap();
    let pixmap = render(&scene, &Viewport::default()).unwrap();
    assert_eq!(rgb(&pixmap, 100, 100), (255, 255, 255));
}

#[test]
fn test_render_to_image_matches_viewport() {
    let image = render_to_image(
        &Scene::new(),
        &Viewport::new(200.0, 300.0),
        &RenderOptions::default(),
    );
    assert_eq!(image.dimensions(), (200, 300));
    assert_eq!(image.get_pixel(3, 3).0, [0x2e, 0x7d, 0x32]);
}

#[test]
fn test_rendering_does_not_mutate_scene() {
    let scene = Scene::from_items(vec![Item::Ball(BallItem::new(
        Point::new(10.0, 10.0),
        "#ffffff",
        20.0,
    ))])
    .unwrap();
    let before = scene.clone();
    let _ = render(&scene, &Viewport::default());
    assert_eq!(scene, before);
}
