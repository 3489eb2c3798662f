use prancheta_board::{
    BlockShape, BoardResponse, InteractionState, Item, ItemId, ResizeHandle, TacticalBoard,
    TextPatch, Tool,
};
use prancheta_core::Point;
use prancheta_settings::EditorConfig;

fn board() -> TacticalBoard {
    TacticalBoard::new(Vec::new(), EditorConfig::default()).unwrap()
}

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn click(board: &mut TacticalBoard, at: Point) -> BoardResponse {
    board.pointer_down(at);
    board.pointer_up(at)
}

fn place(board: &mut TacticalBoard, tool: Tool, at: Point) -> ItemId {
    board.set_tool(tool);
    board.pointer_down(at);
    board.pointer_up(at);
    board.scene().iter().last().unwrap().id().clone()
}

#[test]
fn test_placement_commits_once() {
    let mut board = board();
    board.set_tool(Tool::PlayerRed);
    assert_eq!(board.pointer_down(p(60.0, 60.0)), BoardResponse::Committed);
    assert_eq!(board.pointer_up(p(60.0, 60.0)), BoardResponse::None);

    assert_eq!(board.history().depth(), 2);
    let item = board.scene().iter().next().unwrap();
    assert!(matches!(item, Item::PlayerRed(_)));
    assert_eq!(item.position(), p(60.0, 60.0));
    assert!(board.state().is_idle());
}

#[test]
fn test_placement_uses_color_and_block_shape() {
    let mut board = board();
    board.set_color("#ff9800").unwrap();
    board.set_block_shape(BlockShape::Triangle);
    place(&mut board, Tool::Block, p(200.0, 200.0));

    let Some(Item::Block(block)) = board.scene().iter().next() else {
        panic!("expected a block");
    };
    assert_eq!(block.shape, BlockShape::Triangle);
    assert_eq!(block.common.color, "#ff9800");
}

#[test]
fn test_players_default_to_team_colors() {
    let mut board = board();
    let blue = place(&mut board, Tool::PlayerBlue, p(60.0, 60.0));
    let red = place(&mut board, Tool::PlayerRed, p(160.0, 60.0));
    let ball = place(&mut board, Tool::Ball, p(260.0, 60.0));
    assert_eq!(board.scene().get(&blue).unwrap().color(), "#1565c0");
    assert_eq!(board.scene().get(&red).unwrap().color(), "#c62828");
    assert_eq!(board.scene().get(&ball).unwrap().color(), "#000000");

    board.set_color("#ffeb3b").unwrap();
    let blue = place(&mut board, Tool::PlayerBlue, p(60.0, 160.0));
    let red = place(&mut board, Tool::PlayerRed, p(160.0, 160.0));
    assert_eq!(board.scene().get(&blue).unwrap().color(), "#ffeb3b");
    assert_eq!(board.scene().get(&red).unwrap().color(), "#ffeb3b");
}

#[test]
fn test_invalid_color_rejected() {
    let mut board = board();
    assert!(board.set_color("verde").is_err());
    assert_eq!(board.color(), "#000000");
}

#[test]
fn test_placement_tool_on_item_selects_it() {
    let mut board = board();
    let id = place(&mut board, Tool::Ball, p(100.0, 100.0));
    board.pointer_down(p(102.0, 100.0));
    assert!(matches!(board.state(), InteractionState::Dragging { .. }));
    board.pointer_up(p(102.0, 100.0));

    assert_eq!(board.scene().len(), 1);
    assert_eq!(board.selected_id(), Some(&id));
    assert_eq!(board.history().depth(), 2);
}

#[test]
fn test_select_empty_space_clears_selection() {
    let mut board = board();
    place(&mut board, Tool::Ball, p(100.0, 100.0));
    board.set_tool(Tool::Select);
    click(&mut board, p(100.0, 100.0));
    assert!(board.selected_id().is_some());

    assert_eq!(click(&mut board, p(400.0, 600.0)), BoardResponse::None);
    assert!(board.selected_id().is_none());
    assert!(board.state().is_idle());
}

#[test]
fn test_click_without_move_does_not_commit() {
    let mut board = board();
    place(&mut board, Tool::Ball, p(100.0, 100.0));
    board.set_tool(Tool::Select);
    let depth = board.history().depth();
    click(&mut board, p(100.0, 100.0));
    assert_eq!(board.history().depth(), depth);
}

#[test]
fn test_resize_from_corner_handle() {
    let mut board = board();
    let id = place(&mut board, Tool::Ball, p(100.0, 100.0));
    board.set_tool(Tool::Select);
    click(&mut board, p(100.0, 100.0));

    board.pointer_down(p(110.0, 110.0));
    assert!(matches!(
        board.state(),
        InteractionState::Resizing {
            handle: ResizeHandle::SouthEast,
            ..
        }
    ));
    board.pointer_move(p(120.0, 130.0));
    assert_eq!(board.pointer_up(p(120.0, 130.0)), BoardResponse::Committed);

    let bounds = board.scene().bounds(&id).unwrap();
    assert_eq!(bounds.width(), 40.0);
    assert_eq!(bounds.height(), 60.0);
    assert_eq!(board.history().depth(), 3);
}

#[test]
fn test_resize_floors_at_minimum() {
    let mut board = board();
    let id = place(&mut board, Tool::Block, p(100.0, 100.0));
    board.set_tool(Tool::Select);
    click(&mut board, p(100.0, 100.0));

    board.pointer_down(p(85.0, 85.0));
    board.pointer_move(p(101.0, 99.0));
    board.pointer_up(p(101.0, 99.0));

    let bounds = board.scene().bounds(&id).unwrap();
    assert_eq!(bounds.width(), 10.0);
    assert_eq!(bounds.height(), 10.0);
}

#[test]
fn test_edge_handle_resizes_one_axis() {
    let mut config = EditorConfig::default();
    config.interaction.edge_handles = true;
    let mut board = TacticalBoard::new(Vec::new(), config).unwrap();
    let id = place(&mut board, Tool::Block, p(100.0, 100.0));
    board.set_tool(Tool::Select);
    click(&mut board, p(100.0, 100.0));

    board.pointer_down(p(100.0, 85.0));
    board.pointer_move(p(140.0, 60.0));
    board.pointer_up(p(140.0, 60.0));

    let bounds = board.scene().bounds(&id).unwrap();
    assert_eq!(bounds.width(), 30.0);
    assert_eq!(bounds.height(), 80.0);
}

#[test]
fn test_arrow_gesture() {
    let mut board = board();
    board.set_tool(Tool::Arrow);
    board.pointer_down(p(0.0, 0.0));
    board.pointer_move(p(50.0, 0.0));
    assert!(board.preview().is_some());
    assert_eq!(board.scene().len(), 0);
    board.pointer_up(p(100.0, 0.0));

    let Some(Item::Arrow(arrow)) = board.scene().iter().next() else {
        panic!("expected an arrow");
    };
    assert_eq!(arrow.start(), p(0.0, 0.0));
    assert_eq!(arrow.end_position, p(100.0, 0.0));
    assert_eq!(board.history().depth(), 2);
}

#[test]
fn test_zero_length_arrow_is_accepted() {
    let mut board = board();
    board.set_tool(Tool::Arrow);
    click(&mut board, p(30.0, 30.0));
    assert_eq!(board.scene().len(), 1);
}

#[test]
fn test_tool_change_mid_gesture_is_ignored() {
    let mut board = board();
    board.set_tool(Tool::Arrow);
    board.pointer_down(p(0.0, 0.0));
    board.set_tool(Tool::Ball);
    board.set_color("#ff0000").unwrap();
    board.pointer_up(p(40.0, 0.0));

    let item = board.scene().iter().next().unwrap();
    assert!(matches!(item, Item::Arrow(_)));
    assert_eq!(item.color(), "#000000");
}

#[test]
fn test_free_draw_session_appends_strokes() {
    let mut board = board();
    board.set_tool(Tool::FreeDraw);
    for offset in [0.0, 40.0] {
        board.pointer_down(p(10.0, 10.0 + offset));
        board.pointer_move(p(20.0, 15.0 + offset));
        board.pointer_move(p(30.0, 10.0 + offset));
        board.pointer_up(p(30.0, 10.0 + offset));
    }

    assert_eq!(board.scene().len(), 1);
    let Some(Item::FreeDraw(free)) = board.scene().iter().next() else {
        panic!("expected a free-draw item");
    };
    assert_eq!(free.paths.len(), 2);
    assert_eq!(board.history().depth(), 3);

    board.set_tool(Tool::Select);
    board.set_tool(Tool::FreeDraw);
    board.pointer_down(p(200.0, 200.0));
    board.pointer_up(p(200.0, 200.0));
    assert_eq!(board.scene().len(), 2);
}

#[test]
fn test_text_placement_enters_edit_mode() {
    let mut board = board();
    board.set_tool(Tool::Text);
    let response = board.pointer_down(p(200.0, 200.0));
    let BoardResponse::EditText(text) = response else {
        panic!("expected text edit request");
    };
    assert_eq!(text.text, "Texto");
    assert!(matches!(board.state(), InteractionState::EditingText { .. }));
    board.pointer_up(p(200.0, 200.0));
    assert!(board.editing_text().is_some());

    let response = board.commit_text_edit(&TextPatch::text("Ataque")).unwrap();
    assert_eq!(response, BoardResponse::Committed);
    assert!(board.state().is_idle());

    let Some(Item::Text(text)) = board.scene().iter().next() else {
        panic!("expected text");
    };
    assert_eq!(text.text, "Ataque");
    let width = text.width.unwrap();
    assert!((width - 6.0 * 16.0 * 0.6).abs() < 1e-9);
    assert_eq!(board.history().depth(), 3);
}

#[test]
fn test_cancel_text_edit_commits_nothing() {
    let mut board = board();
    let id = place(&mut board, Tool::Text, p(200.0, 200.0));
    board.cancel_text_edit();
    board.set_tool(Tool::Select);
    let depth = board.history().depth();

    let response = board.double_click(p(200.0, 200.0));
    assert!(matches!(response, BoardResponse::EditText(ref t) if t.common.id == id));
    assert_eq!(board.cancel_text_edit(), BoardResponse::None);
    assert!(board.state().is_idle());
    assert_eq!(board.history().depth(), depth);
}

#[test]
fn test_double_click_player_requests_number() {
    let mut board = board();
    let id = place(&mut board, Tool::PlayerBlue, p(100.0, 100.0));
    board.set_tool(Tool::Select);

    let response = board.double_click(p(100.0, 100.0));
    assert_eq!(
        response,
        BoardResponse::RequestJerseyNumber {
            id: id.clone(),
            current: None
        }
    );
    let depth = board.history().depth();
    assert_eq!(
        board.set_player_number(&id, Some(10)).unwrap(),
        BoardResponse::Committed
    );
    assert_eq!(board.history().depth(), depth + 1);
    let (player, _) = board.scene().get(&id).unwrap().as_player().unwrap();
    assert_eq!(player.number, Some(10));

    assert!(board.set_player_number(&"missing".into(), Some(1)).is_err());
}

#[test]
fn test_jersey_number_ignored_mid_drag() {
    let mut board = board();
    let id = place(&mut board, Tool::PlayerBlue, p(100.0, 100.0));
    board.set_tool(Tool::Select);
    board.pointer_down(p(100.0, 100.0));
    board.pointer_move(p(130.0, 100.0));
    let depth = board.history().depth();

    assert_eq!(
        board.set_player_number(&id, Some(7)).unwrap(),
        BoardResponse::None
    );
    assert_eq!(board.history().depth(), depth);

    assert_eq!(board.pointer_up(p(130.0, 100.0)), BoardResponse::Committed);
    assert_eq!(board.history().depth(), depth + 1);
    let (player, _) = board.scene().get(&id).unwrap().as_player().unwrap();
    assert_eq!(player.number, None);
}

#[test]
fn test_pointer_cancel_finishes_drag_at_last_position() {
    let mut board = board();
    let id = place(&mut board, Tool::Ball, p(100.0, 100.0));
    board.set_tool(Tool::Select);
    board.pointer_down(p(100.0, 100.0));
    board.pointer_move(p(140.0, 120.0));

    assert_eq!(board.pointer_cancel(), BoardResponse::Committed);
    assert!(board.state().is_idle());
    assert_eq!(board.scene().get(&id).unwrap().position(), p(140.0, 120.0));
}

#[test]
fn test_unmatched_events_are_noops() {
    let mut board = board();
    assert_eq!(board.pointer_move(p(10.0, 10.0)), BoardResponse::None);
    assert_eq!(board.pointer_up(p(10.0, 10.0)), BoardResponse::None);
    assert_eq!(board.double_click(p(10.0, 10.0)), BoardResponse::None);
    assert_eq!(
        board.commit_text_edit(&TextPatch::default()).unwrap(),
        BoardResponse::None
    );
    assert!(board.state().is_idle());
    assert_eq!(board.history().depth(), 1);
}

#[test]
fn test_editor_actions() {
    let mut board = board();
    let a = place(&mut board, Tool::Ball, p(100.0, 100.0));
    let b = place(&mut board, Tool::Ball, p(130.0, 100.0));
    board.set_tool(Tool::Select);

    click(&mut board, p(92.0, 100.0));
    assert_eq!(board.selected_id(), Some(&a));

    assert!(board.bring_selected_to_front());
    assert_eq!(board.scene().iter().last().unwrap().id(), &a);
    assert!(!board.bring_selected_to_front());

    assert!(board.nudge_selected(board.nudge_step(), 0.0));
    assert_eq!(board.scene().get(&a).unwrap().position(), p(101.0, 100.0));

    assert!(board.delete_selected());
    assert!(!board.scene().contains(&a));
    assert!(!board.delete_selected());

    assert!(board.clear_board());
    assert!(!board.scene().contains(&b));
    assert!(!board.clear_board());
}

#[test]
fn test_device_coordinates_are_scaled() {
    let mut board = board();
    board.viewport_mut().set_display_size(250.0, 350.0);
    let logical = board.to_logical(50.0, 50.0);
    assert_eq!(logical, p(100.0, 100.0));
}
