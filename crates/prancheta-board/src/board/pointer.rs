//! Pointer gestures.

use prancheta_core::Point;

use super::TacticalBoard;
use crate::interaction::{handle_at, BoardResponse, InteractionState, Tool};
use crate::model::{
    ArrowItem, BallItem, BlockItem, BoardItem, DrawingPath, FreeDrawItem, Item, PlayerItem,
    TextItem,
};

impl TacticalBoard {
    pub fn pointer_down(&mut self, p: Point) -> BoardResponse {
        self.pointer_down_with_pressure(p, None)
    }

    /// Starts a gesture with the tool and color active right now.
    pub fn pointer_down_with_pressure(&mut self, p: Point, pressure: Option<f64>) -> BoardResponse {
        self.last_pointer = Some(p);
        if !self.state.is_idle() {
            return BoardResponse::None;
        }

        match self.tool {
            Tool::Select => self.begin_select(p),
            Tool::PlayerBlue | Tool::PlayerRed | Tool::Ball | Tool::Block | Tool::Text => {
                let tolerance = self.config.interaction.hit_tolerance;
                if self.scene.find_topmost_at(p, tolerance).is_some() {
                    self.begin_select(p)
                } else {
                    self.place_item(self.tool, p)
                }
            }
            Tool::Arrow => {
                self.state = InteractionState::DrawingArrow {
                    start: p,
                    current: p,
                    color: self.color.clone(),
                    thickness: self.config.defaults.arrow_thickness,
                };
                tracing::debug!("Arrow started at ({:.1}, {:.1})", p.x, p.y);
                BoardResponse::Repaint
            }
            Tool::FreeDraw => {
                self.drawing.start_drawing(
                    p,
                    &self.color,
                    self.config.drawing.stroke_thickness,
                    pressure,
                );
                self.state = InteractionState::FreeDrawing;
                BoardResponse::Repaint
            }
        }
    }

    fn begin_select(&mut self, p: Point) -> BoardResponse {
        let interaction = &self.config.interaction;

        if let Some(selected) = self.scene.selected().filter(|i| i.is_resizable()) {
            if let Some(handle) = handle_at(
                &selected.bounds(),
                p,
                interaction.handle_size,
                interaction.edge_handles,
            ) {
                let id = selected.id().clone();
                tracing::debug!("Resize {} from {}", id, handle.short_name());
                self.state = InteractionState::Resizing {
                    id,
                    handle,
                    changed: false,
                };
                return BoardResponse::Repaint;
            }
        }

        match self.scene.find_topmost_at(p, interaction.hit_tolerance) {
            Some(item) => {
                let id = item.id().clone();
                let offset = p - item.center();
                self.scene = self.scene.set_selection(std::slice::from_ref(&id));
                tracing::debug!("Drag {} started", id);
                self.state = InteractionState::Dragging {
                    id,
                    offset,
                    moved: false,
                };
                BoardResponse::Repaint
            }
            None if self.scene.selected().is_some() => {
                self.scene = self.scene.set_selection(&[]);
                BoardResponse::Repaint
            }
            None => BoardResponse::None,
        }
    }

    fn place_item(&mut self, tool: Tool, p: Point) -> BoardResponse {
        let color = self.placement_color(tool);
        let defaults = &self.config.defaults;
        let item = match tool {
            Tool::PlayerBlue => Item::PlayerBlue(PlayerItem::new(p, color, defaults.player_size)),
            Tool::PlayerRed => Item::PlayerRed(PlayerItem::new(p, color, defaults.player_size)),
            Tool::Ball => Item::Ball(BallItem::new(p, color, defaults.ball_size)),
            Tool::Block => Item::Block(BlockItem::new(
                p,
                color,
                defaults.block_size,
                self.block_shape,
            )),
            Tool::Text => {
                let mut text = TextItem::new(
                    p,
                    color,
                    defaults.text_placeholder.clone(),
                    defaults.font_size,
                    defaults.font_family.clone(),
                );
                self.measure_text(&mut text);
                Item::Text(text)
            }
            Tool::Select | Tool::Arrow | Tool::FreeDraw => return BoardResponse::None,
        };

        let id = item.id().clone();
        let item_type = item.item_type();
        match self.scene.add_item(item) {
            Ok(scene) => self.scene = scene,
            Err(err) => {
                tracing::warn!("Could not place {}: {}", item_type, err);
                return BoardResponse::None;
            }
        }
        self.commit(item_type.as_str());

        if let Some(text) = self.scene.get(&id).and_then(|i| i.as_text()).cloned() {
            self.state = InteractionState::EditingText { id };
            return BoardResponse::EditText(text);
        }
        BoardResponse::Committed
    }

    pub fn pointer_move(&mut self, p: Point) -> BoardResponse {
        self.pointer_move_with_pressure(p, None)
    }

    /// Updates the running gesture live. Never commits.
    pub fn pointer_move_with_pressure(&mut self, p: Point, pressure: Option<f64>) -> BoardResponse {
        self.last_pointer = Some(p);
        let min_size = self.config.interaction.min_item_size;

        match &mut self.state {
            InteractionState::Dragging { id, offset, moved } => {
                let target = p - *offset;
                let mut changed = false;
                self.scene.patch_in_place(id, |item| {
                    if item.center() != target {
                        item.move_center_to(target);
                        changed = true;
                    }
                });
                *moved |= changed;
                BoardResponse::Repaint
            }
            InteractionState::Resizing {
                id,
                handle,
                changed,
            } => {
                let handle = *handle;
                let mut resized = false;
                self.scene.patch_in_place(id, |item| {
                    let before = item.bounds();
                    item.resize(handle, p, min_size);
                    resized = item.bounds() != before;
                });
                *changed |= resized;
                BoardResponse::Repaint
            }
            InteractionState::DrawingArrow { current, .. } => {
                *current = p;
                BoardResponse::Repaint
            }
            InteractionState::FreeDrawing => {
                self.drawing.continue_drawing(p, pressure);
                BoardResponse::Repaint
            }
            InteractionState::Idle | InteractionState::EditingText { .. } => BoardResponse::None,
        }
    }

    /// Ends the running gesture at `p`, committing at most one entry.
    pub fn pointer_up(&mut self, p: Point) -> BoardResponse {
        self.last_pointer = Some(p);

        match std::mem::take(&mut self.state) {
            InteractionState::Dragging { moved: true, .. } => {
                self.commit("move");
                BoardResponse::Committed
            }
            InteractionState::Resizing { changed: true, .. } => {
                self.commit("resize");
                BoardResponse::Committed
            }
            InteractionState::Dragging { .. } | InteractionState::Resizing { .. } => {
                BoardResponse::None
            }
            InteractionState::DrawingArrow {
                start,
                color,
                thickness,
                ..
            } => {
                let arrow = Item::Arrow(ArrowItem::new(start, p, color, thickness));
                match self.scene.add_item(arrow) {
                    Ok(scene) => {
                        self.scene = scene;
                        self.commit("arrow");
                        BoardResponse::Committed
                    }
                    Err(err) => {
                        tracing::warn!("Could not add arrow: {}", err);
                        BoardResponse::Repaint
                    }
                }
            }
            InteractionState::FreeDrawing => match self.drawing.finish_drawing() {
                Some(path) => self.finalize_stroke(path),
                None => BoardResponse::Repaint,
            },
            state @ InteractionState::EditingText { .. } => {
                self.state = state;
                BoardResponse::None
            }
            InteractionState::Idle => BoardResponse::None,
        }
    }

    /// Pointer released outside the canvas: finish at the last known position.
    pub fn pointer_cancel(&mut self) -> BoardResponse {
        match self.last_pointer {
            Some(p) => self.pointer_up(p),
            None => BoardResponse::None,
        }
    }

    /// Adds a finished stroke, extending the session's free-draw item when
    /// it still exists.
    fn finalize_stroke(&mut self, path: DrawingPath) -> BoardResponse {
        let target = self
            .free_draw_target
            .clone()
            .filter(|id| matches!(self.scene.get(id), Some(Item::FreeDraw(_))));

        let next = match &target {
            Some(id) => self.scene.update_item(id, |item| {
                if let Some(free) = item.as_free_draw_mut() {
                    free.paths.push(path);
                    free.common.position = free.bounds().center();
                }
            }),
            None => {
                let item = FreeDrawItem::from_path(path);
                self.free_draw_target = Some(item.common.id.clone());
                self.scene.add_item(Item::FreeDraw(item))
            }
        };

        match next {
            Ok(scene) => {
                self.scene = scene;
                self.commit("free-draw");
                BoardResponse::Committed
            }
            Err(err) => {
                tracing::warn!("Could not store stroke: {}", err);
                BoardResponse::Repaint
            }
        }
    }

    /// Double-click opens the text dialog on text items and asks for a
    /// jersey number on players.
    pub fn double_click(&mut self, p: Point) -> BoardResponse {
        self.last_pointer = Some(p);
        if !self.state.is_idle() {
            return BoardResponse::None;
        }

        let tolerance = self.config.interaction.hit_tolerance;
        let Some(item) = self.scene.find_topmost_at(p, tolerance) else {
            return BoardResponse::None;
        };

        if let Some(text) = item.as_text() {
            let text = text.clone();
            let id = text.common.id.clone();
            self.scene = self.scene.set_selection(std::slice::from_ref(&id));
            tracing::debug!("Editing text {}", id);
            self.state = InteractionState::EditingText { id };
            return BoardResponse::EditText(text);
        }

        if let Some((player, _)) = item.as_player() {
            return BoardResponse::RequestJerseyNumber {
                id: player.common.id.clone(),
                current: player.number,
            };
        }

        BoardResponse::None
    }
}
