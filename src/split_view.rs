// Vertical split widget for egui: top panel, drag handle, bottom panel.
// All sizing decisions live in SplitController; this file only maps egui
// responses to gesture events and lays out the three rects.

use std::hash::Hash;

use egui::{Color32, CursorIcon, Id, Layout, Pos2, Rect, Response, Rounding, Sense, Ui, Vec2};

use crate::split_controller::SplitController;

const HANDLE_SIZE: Vec2 = Vec2::new(50.0, 10.0);
const HANDLE_DRAG_SCALE: f32 = 0.8;

/// Rect of the handle strip sitting directly below a top panel of `top_height`
pub fn handle_rect(whole: Rect, top_height: f32, handle_gap: f32) -> Rect {
    Rect::from_min_size(
        Pos2::new(whole.min.x, whole.min.y + top_height.max(0.0)),
        Vec2::new(whole.width(), handle_gap),
    )
}

/// Splits a ui into a top and a bottom area separated by a draggable handle.
pub struct SplitView<'a> {
    id: Id,
    controller: &'a mut SplitController,
}

impl<'a> SplitView<'a> {
    pub fn new(id_source: impl Hash, controller: &'a mut SplitController) -> Self {
        Self {
            id: Id::new(id_source),
            controller,
        }
    }

    /// Show the split and fill it with content.
    /// The callback receives two UIs - top panel first, bottom panel second
    pub fn show(mut self, ui: &mut Ui, add_contents: impl FnOnce(&mut Ui, &mut Ui)) {
        let whole_rect = Rect::from_min_size(ui.next_widget_position(), ui.available_size());
        self.controller.set_total_height(whole_rect.height());
        let handle_gap = self.controller.config().handle_gap;

        let dt = ui.input(|i| i.stable_dt);
        if self.controller.tick(dt) {
            ui.ctx().request_repaint();
        }

        let hit_rect = handle_rect(whole_rect, self.controller.top_panel_height(), handle_gap);
        let resp = ui.interact(hit_rect, self.id, Sense::click_and_drag());
        self.handle_gesture(ui, &resp);

        if resp.hovered() || self.controller.is_dragging() {
            ui.ctx().set_cursor_icon(CursorIcon::ResizeRow);
        }

        let top_height = self.controller.top_panel_height().max(0.0);
        let bottom_height = self.controller.bottom_panel_height().max(0.0);

        let top_rect = Rect::from_min_size(whole_rect.min, Vec2::new(whole_rect.width(), top_height));
        let sep_rect = handle_rect(whole_rect, top_height, handle_gap);
        let bottom_rect = Rect::from_min_size(
            Pos2::new(whole_rect.min.x, sep_rect.max.y),
            Vec2::new(whole_rect.width(), bottom_height),
        );

        self.paint_handle(ui, sep_rect);

        let mut ui_top = ui.child_ui(top_rect, Layout::default(), None);
        ui_top.set_clip_rect(top_rect);
        let mut ui_bottom = ui.child_ui(bottom_rect, Layout::default(), None);
        ui_bottom.set_clip_rect(bottom_rect);

        add_contents(&mut ui_top, &mut ui_bottom);

        ui.allocate_rect(whole_rect, Sense::hover());
    }

    fn handle_gesture(&mut self, ui: &Ui, resp: &Response) {
        if resp.drag_started() {
            self.controller.on_drag_start();
        }

        if resp.dragged() {
            // Cumulative translation since the pointer went down
            let translation = ui.input(|i| {
                match (i.pointer.press_origin(), i.pointer.interact_pos()) {
                    (Some(origin), Some(pos)) => Some(pos.y - origin.y),
                    _ => None,
                }
            });
            if let Some(translation) = translation {
                self.controller.on_drag_move(translation);
            }
        }

        if resp.drag_stopped() {
            self.controller.on_drag_end();
        } else if self.controller.is_dragging() && !resp.dragged() {
            // Drag was taken away from us (focus loss, pointer gone)
            self.controller.on_drag_cancel();
        }
    }

    fn paint_handle(&self, ui: &Ui, sep_rect: Rect) {
        let scale = if self.controller.is_dragging() {
            HANDLE_DRAG_SCALE
        } else {
            1.0
        };
        let size = HANDLE_SIZE * scale;
        let pill = Rect::from_center_size(sep_rect.center(), size);

        ui.painter().rect_filled(
            pill,
            Rounding::same(size.y / 2.0),
            Color32::GRAY.gamma_multiply(0.4),
        );
    }
}
