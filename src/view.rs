//! file: view.rs
//! author: Jacob Xie
//! date: 2026/10/18 12:02:33 Sunday
//! brief: gpui rendering of the maze plus the actions that drive it.

use gpui::{
    App, Context, FocusHandle, Focusable, Hsla, Render, Window, actions, div, prelude::*, px, rgb,
};
use tracing::debug;

use crate::{
    config::Config,
    maze::{EdgeState, Heading, Location, MazeModel, Redraw, Rotation, Tile},
};

/// One floor cell in doubled coordinates.
const PLAYER_STEP: i32 = 2;
const CURSOR_STEP: i32 = 2;

actions!(
    maze,
    [
        TurnLeft,
        TurnRight,
        TurnAround,
        StepForward,
        StepBackward,
        CursorUp,
        CursorDown,
        CursorLeft,
        CursorRight,
        ToggleNorth,
        ToggleEast,
        ToggleSouth,
        ToggleWest,
        QuitEditor
    ]
);

pub struct MazeView {
    model: MazeModel<Redraw>,
    focus_handle: FocusHandle,
    cell_px: f32,
    edge_px: f32,
}

impl MazeView {
    pub fn new(model: MazeModel<Redraw>, config: &Config, cx: &mut Context<Self>) -> Self {
        Self {
            model,
            focus_handle: cx.focus_handle(),
            cell_px: config.cell_px,
            edge_px: config.edge_px(),
        }
    }

    fn handle_rotate(&mut self, rotation: Rotation, cx: &mut Context<Self>) {
        self.model.rotate_player(rotation);
        self.flush(cx);
    }

    fn handle_advance(&mut self, steps: i32, cx: &mut Context<Self>) {
        self.model.advance_player(steps);
        self.flush(cx);
    }

    fn handle_cursor(&mut self, heading: Heading, cx: &mut Context<Self>) {
        let (dr, dc) = heading.vector();
        self.model.move_cursor((dr * CURSOR_STEP, dc * CURSOR_STEP));
        self.flush(cx);
    }

    fn handle_toggle(&mut self, side: Heading, cx: &mut Context<Self>) {
        self.model.toggle_edge(side);
        self.flush(cx);
    }

    fn flush(&mut self, cx: &mut Context<Self>) {
        let pending = self.model.observer_mut().take();
        if pending.is_empty() {
            return;
        }
        debug!(
            cells = ?pending.cells,
            player = pending.player,
            cursor = pending.cursor,
            "redraw"
        );
        cx.notify();
    }

    fn tile_color(tile: Tile) -> u32 {
        match tile {
            Tile::Floor(_) => 0x0f172a,
            Tile::Edge(EdgeState::Empty) => 0x1e293b,
            Tile::Edge(EdgeState::Wall) => 0xe2e8f0,
            Tile::Edge(EdgeState::Door) => 0xf59e0b,
            Tile::Corner => 0x334155,
        }
    }

    fn extent(&self, index: usize) -> f32 {
        if index % 2 == 1 {
            self.cell_px
        } else {
            self.edge_px
        }
    }
}

/// Grid address of the tile a doubled-space location is drawn on.
fn grid_address(location: Location) -> (usize, usize) {
    ((location.row + 1) as usize, (location.col + 1) as usize)
}

impl Render for MazeView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle(cx).is_focused(window);
        let player = self.model.player_location();
        let heading = self.model.player_heading();
        let cursor = self.model.cursor_location();
        let player_at = grid_address(player);
        let cursor_at = grid_address(cursor);
        let cursor_color: Hsla = rgb(0xf87171).into();

        let grid = div()
            .flex()
            .flex_col()
            .children(self.model.grid().rows().enumerate().map(|(i, row)| {
                div()
                    .flex()
                    .children(row.iter().enumerate().map(|(j, tile)| {
                        let cell = div()
                            .w(px(self.extent(j)))
                            .h(px(self.extent(i)))
                            .flex()
                            .items_center()
                            .justify_center()
                            .bg(rgb(Self::tile_color(*tile)));
                        let cell = if (i, j) == cursor_at {
                            cell.border_2().border_color(cursor_color).rounded_sm()
                        } else {
                            cell
                        };
                        if (i, j) == player_at {
                            cell.text_sm()
                                .text_color(rgb(0x34d399))
                                .child(heading.glyph())
                        } else {
                            cell
                        }
                    }))
            }));

        let instructions = [
            "J / L to turn, U to turn around",
            "I / K to step",
            "Arrows move the cursor",
            "W A S D cycle the cursor's walls",
            "Q or Esc to quit",
        ];

        div()
            .bg(rgb(0x020617))
            .text_color(rgb(0xf8fafc))
            .size_full()
            .p_5()
            .gap_4()
            .flex()
            .flex_col()
            .track_focus(&self.focus_handle(cx))
            .key_context("gpui-maze")
            .on_action(cx.listener(|this, _: &TurnLeft, _, cx| {
                this.handle_rotate(Rotation::ThreeQuarter, cx)
            }))
            .on_action(
                cx.listener(|this, _: &TurnRight, _, cx| this.handle_rotate(Rotation::Quarter, cx)),
            )
            .on_action(
                cx.listener(|this, _: &TurnAround, _, cx| this.handle_rotate(Rotation::Half, cx)),
            )
            .on_action(
                cx.listener(|this, _: &StepForward, _, cx| this.handle_advance(PLAYER_STEP, cx)),
            )
            .on_action(
                cx.listener(|this, _: &StepBackward, _, cx| this.handle_advance(-PLAYER_STEP, cx)),
            )
            .on_action(
                cx.listener(|this, _: &CursorUp, _, cx| this.handle_cursor(Heading::North, cx)),
            )
            .on_action(
                cx.listener(|this, _: &CursorDown, _, cx| this.handle_cursor(Heading::South, cx)),
            )
            .on_action(
                cx.listener(|this, _: &CursorLeft, _, cx| this.handle_cursor(Heading::West, cx)),
            )
            .on_action(
                cx.listener(|this, _: &CursorRight, _, cx| this.handle_cursor(Heading::East, cx)),
            )
            .on_action(
                cx.listener(|this, _: &ToggleNorth, _, cx| this.handle_toggle(Heading::North, cx)),
            )
            .on_action(
                cx.listener(|this, _: &ToggleEast, _, cx| this.handle_toggle(Heading::East, cx)),
            )
            .on_action(
                cx.listener(|this, _: &ToggleSouth, _, cx| this.handle_toggle(Heading::South, cx)),
            )
            .on_action(
                cx.listener(|this, _: &ToggleWest, _, cx| this.handle_toggle(Heading::West, cx)),
            )
            .child(
                div()
                    .flex()
                    .gap_4()
                    .items_center()
                    .child(div().text_xl().child(format!(
                        "Player ({}, {}) {:?}",
                        player.row, player.col, heading
                    )))
                    .child(
                        div()
                            .text_lg()
                            .text_color(rgb(0xfca5a5))
                            .child(format!("Cursor ({}, {})", cursor.row, cursor.col)),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(rgb(0x94a3b8))
                            .child(if is_focused {
                                "Focused"
                            } else {
                                "Click inside the window to take control"
                            }),
                    ),
            )
            .child(
                div()
                    .p_4()
                    .rounded_2xl()
                    .bg(rgb(0x111827))
                    .shadow_lg()
                    .child(grid),
            )
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap_3()
                    .text_sm()
                    .text_color(rgb(0xcbd5f5))
                    .children(instructions.into_iter().map(|text| {
                        div()
                            .px_3()
                            .py_2()
                            .rounded_md()
                            .bg(rgb(0x1e293b))
                            .child(text)
                    })),
            )
    }
}

impl Focusable for MazeView {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
