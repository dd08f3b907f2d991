//! Application context: staged startup, frame loop, staged teardown
//!
//! `App` owns every process-lifetime resource (window, rendering context,
//! graphics resources, match state) and borrows its collaborators through
//! `Harness`. Startup walks a nested table of lifecycle items; any
//! failure unwinds whatever already started and `startup` reports false.

use glam::Vec2;
use log::info;

use crate::consts::*;
use crate::gfx::{
    BALL_FRAGMENT_SHADER, BALL_VERTEX_SHADER, ContextHandle, GameResources, Graphics, MeshHandle,
    MeshKind, PADDLE_FRAGMENT_SHADER, ProgramHandle, QUAD_VERTEX_SHADER, WindowHandle,
    create_program_from_sources,
};
use crate::lifecycle::{LifetimeItem, cleanup_items, try_init_items};
use crate::platform::{Clock, Key, WindowSystem};
use crate::sim::{FrameInput, GameState, tick};

const WINDOW_TITLE: &str = "lepong";

/// Borrowed collaborators the app runs against
pub struct Harness<'a> {
    pub window_system: &'a mut dyn WindowSystem,
    pub gfx: &'a mut dyn Graphics,
    pub clock: &'a dyn Clock,
}

/// The owning application context
///
/// Also the lifecycle context: every item in the startup tables operates
/// on `&mut App`.
pub struct App<'a> {
    harness: Harness<'a>,
    window: WindowHandle,
    context: ContextHandle,
    resources: GameResources,
    state: GameState,
    input: FrameInput,
}

impl<'a> App<'a> {
    pub fn new(harness: Harness<'a>, seed: u64) -> Self {
        Self {
            harness,
            window: WindowHandle::NONE,
            context: ContextHandle::NONE,
            resources: GameResources::default(),
            state: GameState::new(seed),
            input: FrameInput::default(),
        }
    }

    /// Initializes every subsystem and resource, in order
    ///
    /// Returns false after rolling back whatever had started.
    pub fn startup(&mut self) -> bool {
        try_init_items(self, &game_items())
    }

    /// Releases everything `startup` acquired, in reverse order
    pub fn cleanup(&mut self) {
        cleanup_items(self, &game_items());
    }

    /// Drives the match until the window system reports shutdown
    ///
    /// The loop body runs once more after the shutdown signal so the
    /// final batch of events still produces a coherent frame.
    pub fn run(&mut self) {
        self.begin_run();

        let mut running = true;
        let mut last = self.harness.clock.now();

        while running {
            let input = &mut self.input;
            running = self
                .harness
                .window_system
                .poll_events(&mut |key, pressed| apply_key(input, key, pressed));

            let now = self.harness.clock.now();
            let delta = (now - last).min(MAX_DELTA);
            last = now;

            tick(&mut self.state, &self.input, delta);
            self.input.end_frame();

            self.render();
        }

        self.finish_run();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn begin_run(&mut self) {
        self.harness.window_system.show_window(self.window);
        info!("rendering context: {}", self.harness.gfx.context_info());

        self.state.reset_round();
        self.state.position_paddles_on_terrain();
    }

    fn finish_run(&mut self) {
        self.harness.window_system.hide_window(self.window);
    }

    fn render(&mut self) {
        let gfx = &mut *self.harness.gfx;
        gfx.clear();

        gfx.draw_quad(
            self.resources.ball_quad_mesh,
            self.resources.ball_program,
            self.state.ball.object.position,
            Vec2::splat(self.state.ball.radius * 2.0),
        );

        for paddle in &self.state.paddles {
            gfx.draw_quad(
                self.resources.quad_mesh,
                self.resources.paddle_program,
                paddle.object.position,
                paddle.size,
            );
        }

        gfx.present(self.context);
    }
}

/// Routes a key transition into the frame input
///
/// Held keys track both edges; launch latches on press and stays set
/// until a tick consumes it.
fn apply_key(input: &mut FrameInput, key: Key, pressed: bool) {
    match key {
        Key::P1Up => input.p1_up = pressed,
        Key::P1Down => input.p1_down = pressed,
        Key::P2Up => input.p2_up = pressed,
        Key::P2Down => input.p2_down = pressed,
        Key::Launch => {
            if pressed {
                input.launch = true;
            }
        }
    }
}

// Startup tables. Nesting mirrors ownership: subsystems first, then the
// window-bound state, then the resources living inside the context.

fn game_items<'h>() -> [LifetimeItem<App<'h>>; 2] {
    [
        LifetimeItem::new("systems", init_systems, cleanup_systems),
        LifetimeItem::new("game-state", init_game_state, cleanup_game_state),
    ]
}

fn system_items<'h>() -> [LifetimeItem<App<'h>>; 2] {
    [
        LifetimeItem::new("window-system", init_window_system, cleanup_window_system),
        LifetimeItem::new(
            "graphics-system",
            init_graphics_system,
            cleanup_graphics_system,
        ),
    ]
}

fn state_items<'h>() -> [LifetimeItem<App<'h>>; 3] {
    [
        LifetimeItem::new("window", init_window, cleanup_window),
        LifetimeItem::new("rendering-context", init_context, cleanup_context),
        LifetimeItem::new("graphics-resources", init_resources, cleanup_resources),
    ]
}

fn resource_items<'h>() -> [LifetimeItem<App<'h>>; 4] {
    [
        LifetimeItem::new("paddle-program", init_paddle_program, cleanup_paddle_program),
        LifetimeItem::new("ball-program", init_ball_program, cleanup_ball_program),
        LifetimeItem::new("quad-mesh", init_quad_mesh, cleanup_quad_mesh),
        LifetimeItem::new("ball-quad-mesh", init_ball_quad_mesh, cleanup_ball_quad_mesh),
    ]
}

fn init_systems(app: &mut App) -> bool {
    try_init_items(app, &system_items())
}

fn cleanup_systems(app: &mut App) {
    cleanup_items(app, &system_items());
}

fn init_window_system(app: &mut App) -> bool {
    app.harness.window_system.startup()
}

fn cleanup_window_system(app: &mut App) {
    app.harness.window_system.shutdown();
}

fn init_graphics_system(app: &mut App) -> bool {
    app.harness.gfx.startup()
}

fn cleanup_graphics_system(app: &mut App) {
    app.harness.gfx.shutdown();
}

fn init_game_state(app: &mut App) -> bool {
    try_init_items(app, &state_items())
}

fn cleanup_game_state(app: &mut App) {
    cleanup_items(app, &state_items());
}

fn init_window(app: &mut App) -> bool {
    app.window =
        app.harness
            .window_system
            .create_window(WINDOW_TITLE, WIN_WIDTH as u32, WIN_HEIGHT as u32);

    app.window.is_valid()
}

fn cleanup_window(app: &mut App) {
    app.harness.window_system.destroy_window(app.window);
    app.window = WindowHandle::NONE;
}

fn init_context(app: &mut App) -> bool {
    app.context = app.harness.gfx.create_context(app.window);

    if !app.context.is_valid() {
        return false;
    }

    if !app.harness.gfx.make_context_current(app.context) {
        // A failed item releases its own partial work before reporting.
        app.harness.gfx.destroy_context(app.context);
        app.context = ContextHandle::NONE;
        return false;
    }

    true
}

fn cleanup_context(app: &mut App) {
    app.harness.gfx.destroy_context(app.context);
    app.context = ContextHandle::NONE;
}

fn init_resources(app: &mut App) -> bool {
    try_init_items(app, &resource_items())
}

fn cleanup_resources(app: &mut App) {
    cleanup_items(app, &resource_items());
}

fn init_paddle_program(app: &mut App) -> bool {
    app.resources.paddle_program = create_program_from_sources(
        app.harness.gfx,
        QUAD_VERTEX_SHADER,
        PADDLE_FRAGMENT_SHADER,
    );

    app.resources.paddle_program.is_valid()
}

fn cleanup_paddle_program(app: &mut App) {
    app.harness.gfx.delete_program(app.resources.paddle_program);
    app.resources.paddle_program = ProgramHandle::NONE;
}

fn init_ball_program(app: &mut App) -> bool {
    app.resources.ball_program =
        create_program_from_sources(app.harness.gfx, BALL_VERTEX_SHADER, BALL_FRAGMENT_SHADER);

    app.resources.ball_program.is_valid()
}

fn cleanup_ball_program(app: &mut App) {
    app.harness.gfx.delete_program(app.resources.ball_program);
    app.resources.ball_program = ProgramHandle::NONE;
}

fn init_quad_mesh(app: &mut App) -> bool {
    app.resources.quad_mesh = app.harness.gfx.create_mesh(MeshKind::Quad);
    app.resources.quad_mesh.is_valid()
}

fn cleanup_quad_mesh(app: &mut App) {
    app.harness.gfx.destroy_mesh(app.resources.quad_mesh);
    app.resources.quad_mesh = MeshHandle::NONE;
}

fn init_ball_quad_mesh(app: &mut App) -> bool {
    app.resources.ball_quad_mesh = app.harness.gfx.create_mesh(MeshKind::TexturedQuad);
    app.resources.ball_quad_mesh.is_valid()
}

fn cleanup_ball_quad_mesh(app: &mut App) {
    app.harness.gfx.destroy_mesh(app.resources.ball_quad_mesh);
    app.resources.ball_quad_mesh = MeshHandle::NONE;
}
