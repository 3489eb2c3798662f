use prancheta_board::{
    ArrowItem, BallItem, BlockItem, BlockShape, DocumentCodec, DocumentMeta, DrawingPath,
    FreeDrawItem, Item, PlayerItem, PranchetaData, Scene, TextAlignment, TextItem,
};
use prancheta_core::{FieldDimensions, Point};

fn full_scene() -> Scene {
    let mut player = PlayerItem::new(Point::new(50.0, 60.0), "#1565c0", 30.0);
    player.number = Some(7);
    let mut text = TextItem::new(Point::new(250.0, 80.0), "#000000", "Saída", 18.0, "Sans");
    text.bold = true;
    text.alignment = TextAlignment::Left;
    text.background_color = Some("#ffffff".into());
    text.opacity = 0.8;
    text.width = Some(54.0);
    text.height = Some(21.6);
    let stroke = DrawingPath {
        points: vec![Point::new(10.0, 10.0), Point::new(20.5, 30.25)],
        color: "#ff0000".into(),
        thickness: 3.0,
        timestamp: 1_700_000_000_000,
        widths: Some(vec![3.0, 1.5]),
    };

    Scene::from_items(vec![
        Item::PlayerBlue(player),
        Item::PlayerRed(PlayerItem::new(Point::new(80.0, 60.0), "#c62828", 30.0)),
        Item::Ball(BallItem::new(Point::new(100.0, 100.0), "#ffffff", 20.0)),
        Item::Block(BlockItem::new(
            Point::new(150.0, 150.0),
            "#ff9800",
            30.0,
            BlockShape::Triangle,
        )),
        Item::Text(text),
        Item::Arrow(ArrowItem::new(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            "#000000",
            2.0,
        )),
        Item::FreeDraw(FreeDrawItem::from_path(stroke)),
    ])
    .unwrap()
}

#[test]
fn test_round_trip_preserves_items() {
    let scene = full_scene().set_selection(&[]);
    let mut meta = DocumentMeta::default();
    let doc = DocumentCodec::serialize(&scene, &mut meta);
    let json = DocumentCodec::to_json(&doc).unwrap();

    let parsed = DocumentCodec::from_json(&json).unwrap();
    let restored = DocumentCodec::deserialize(&parsed).unwrap();
    assert_eq!(restored, scene);
    assert_eq!(
        serde_json::to_string(&parsed.items).unwrap(),
        serde_json::to_string(&doc.items).unwrap()
    );
    assert_eq!(parsed.created_at, doc.created_at);
}

#[test]
fn test_document_is_camel_case() {
    let mut meta = DocumentMeta::default();
    let doc = DocumentCodec::serialize(&full_scene(), &mut meta);
    let value = serde_json::to_value(&doc).unwrap();

    assert!(value.get("fieldDimensions").is_some());
    assert!(value.get("backgroundColor").is_some());
    assert!(value.get("createdAt").is_some());
    assert!(value.get("updatedAt").is_some());
    let types: Vec<&str> = value["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["type"].as_str().unwrap())
        .collect();
    assert_eq!(
        types,
        ["player-blue", "player-red", "ball", "block", "text", "arrow", "free-draw"]
    );
    assert_eq!(value["items"][4]["fontSize"], 18.0);
    assert_eq!(value["items"][5]["endPosition"]["x"], 100.0);
}

// Scenario D
#[test]
fn test_empty_scene_keeps_field_dimensions() {
    let mut meta = DocumentMeta::new(FieldDimensions::new(300.0, 400.0), "#2e7d32");
    let doc = DocumentCodec::serialize(&Scene::new(), &mut meta);
    let json = DocumentCodec::to_json(&doc).unwrap();

    let parsed = DocumentCodec::from_json(&json).unwrap();
    let scene = DocumentCodec::deserialize(&parsed).unwrap();
    assert!(scene.is_empty());
    assert_eq!(parsed.field_dimensions, FieldDimensions::new(300.0, 400.0));
}

#[test]
fn test_unknown_type_is_malformed() {
    let json = r##"{"id":"d","items":[{"type":"cone","id":"x","position":{"x":0,"y":0},"color":"#000"}],
        "fieldDimensions":{"width":500,"height":700},"backgroundColor":"#2e7d32"}"##;
    let err = DocumentCodec::from_json(json).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn test_duplicate_ids_are_malformed() {
    let ball = r##"{"type":"ball","id":"same","position":{"x":0,"y":0},"color":"#fff"}"##;
    let json = format!(r#"{{"id":"d","items":[{ball},{ball}]}}"#);
    let doc: PranchetaData = DocumentCodec::from_json(&json).unwrap();
    let err = DocumentCodec::deserialize(&doc).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("boards").join("plan.json");
    let mut meta = DocumentMeta::default();
    let doc = DocumentCodec::serialize(&full_scene(), &mut meta);

    DocumentCodec::save_to_file(&doc, &path).unwrap();
    let loaded = DocumentCodec::load_from_file(&path).unwrap();
    assert_eq!(loaded.items, doc.items);
    assert_eq!(loaded.id, meta.id);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DocumentCodec::load_from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, prancheta_core::BoardError::Io(_)));
}
