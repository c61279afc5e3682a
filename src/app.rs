//! file: app.rs
//! author: Jacob Xie
//! date: 2026/10/18 12:40:51 Sunday
//! brief:

use gpui::{
    App, AppContext, Application, Bounds, Focusable, KeyBinding, WindowBounds, WindowOptions, px,
    size,
};
use tracing::{error, info};

use crate::{
    config::Config,
    maze::{MazeModel, Redraw},
    view::{
        CursorDown, CursorLeft, CursorRight, CursorUp, MazeView, QuitEditor, StepBackward,
        StepForward, ToggleEast, ToggleNorth, ToggleSouth, ToggleWest, TurnAround, TurnLeft,
        TurnRight,
    },
};

const WINDOW_PADDING: f32 = 120.0;
const MIN_WINDOW_WIDTH: f32 = 640.0;

pub fn run(model: MazeModel<Redraw>, config: Config) {
    Application::new().run(move |cx: &mut App| {
        cx.bind_keys([
            KeyBinding::new("j", TurnLeft, None),
            KeyBinding::new("l", TurnRight, None),
            KeyBinding::new("u", TurnAround, None),
            KeyBinding::new("i", StepForward, None),
            KeyBinding::new("k", StepBackward, None),
            KeyBinding::new("up", CursorUp, None),
            KeyBinding::new("down", CursorDown, None),
            KeyBinding::new("left", CursorLeft, None),
            KeyBinding::new("right", CursorRight, None),
            KeyBinding::new("w", ToggleNorth, None),
            KeyBinding::new("d", ToggleEast, None),
            KeyBinding::new("s", ToggleSouth, None),
            KeyBinding::new("a", ToggleWest, None),
            KeyBinding::new("q", QuitEditor, None),
            KeyBinding::new("escape", QuitEditor, None),
        ]);

        let (width, height) = window_size(&model, &config);
        let bounds = Bounds::centered(None, size(px(width), px(height)), cx);
        let window = match cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            |_, cx| cx.new(|cx| MazeView::new(model, &config, cx)),
        ) {
            Ok(window) => window,
            Err(err) => {
                error!(%err, "failed to open maze window");
                cx.quit();
                return;
            }
        };

        if let Err(err) = window.update(cx, |view: &mut MazeView, window, cx| {
            window.focus(&view.focus_handle(cx));
            cx.activate(true);
        }) {
            error!(%err, "failed to focus maze window");
        }

        info!(width, height, "maze window opened");
        cx.on_action(|_: &QuitEditor, cx| cx.quit());
        cx.activate(true);
    });
}

/// Grid extent plus room for the status line and instructions.
fn window_size(model: &MazeModel<Redraw>, config: &Config) -> (f32, f32) {
    let (height, width) = model.grid_shape();
    let extent = |tiles: usize| {
        let cells = (tiles / 2) as f32;
        cells * config.cell_px + (cells + 1.0) * config.edge_px()
    };
    (
        (extent(width) + WINDOW_PADDING).max(MIN_WINDOW_WIDTH),
        extent(height) + 2.0 * WINDOW_PADDING,
    )
}
