//! lepong entry point
//!
//! Wires headless stand-in collaborators to the core and plays a short
//! scripted match. Real window and graphics backends live outside this
//! crate; the stand-ins here are just enough to drive the whole stack
//! end to end and exercise the staged startup, the frame loop and the
//! scoring rules.

use std::process::ExitCode;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::{debug, error, info};

use lepong::gfx::{
    ContextHandle, Graphics, MeshHandle, MeshKind, ProgramHandle, ShaderHandle, ShaderKind,
    WindowHandle,
};
use lepong::platform::{Key, SystemClock, WindowSystem};
use lepong::{App, Harness};

/// Frame period the stand-in window system paces the loop at
const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Window system replacement that scripts its own input
///
/// Each poll sleeps one frame period (standing in for vsync), emits a
/// canned batch of key transitions and quits after a fixed number of
/// frames. The script relaunches the ball periodically and sweeps both
/// paddles so a few points get scored.
struct ScriptedWindowSystem {
    frame: u32,
    total_frames: u32,
}

impl ScriptedWindowSystem {
    fn new(total_frames: u32) -> Self {
        Self {
            frame: 0,
            total_frames,
        }
    }
}

impl WindowSystem for ScriptedWindowSystem {
    fn startup(&mut self) -> bool {
        true
    }

    fn shutdown(&mut self) {}

    fn create_window(&mut self, title: &str, width: u32, height: u32) -> WindowHandle {
        debug!("created window \"{title}\" ({width}x{height})");
        WindowHandle(1)
    }

    fn destroy_window(&mut self, _window: WindowHandle) {}

    fn show_window(&mut self, _window: WindowHandle) {}

    fn hide_window(&mut self, _window: WindowHandle) {}

    fn poll_events(&mut self, on_key: &mut dyn FnMut(Key, bool)) -> bool {
        thread::sleep(FRAME_PERIOD);

        let frame = self.frame;
        self.frame += 1;

        // Relaunch periodically so a new rally starts after every point.
        if frame % 120 == 0 {
            on_key(Key::Launch, true);
        }
        if frame % 120 == 1 {
            on_key(Key::Launch, false);
        }

        match frame % 240 {
            30 => {
                on_key(Key::P1Up, true);
                on_key(Key::P2Down, true);
            }
            110 => {
                on_key(Key::P1Up, false);
                on_key(Key::P2Down, false);
            }
            150 => {
                on_key(Key::P1Down, true);
                on_key(Key::P2Up, true);
            }
            230 => {
                on_key(Key::P1Down, false);
                on_key(Key::P2Up, false);
            }
            _ => {}
        }

        self.frame < self.total_frames
    }
}

/// Graphics replacement that only tracks handles and counts frames
#[derive(Default)]
struct HeadlessGraphics {
    next_handle: u32,
    frames: u32,
}

impl HeadlessGraphics {
    fn new() -> Self {
        Self {
            next_handle: 1,
            frames: 0,
        }
    }

    fn next(&mut self) -> u32 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }
}

impl Graphics for HeadlessGraphics {
    fn startup(&mut self) -> bool {
        true
    }

    fn shutdown(&mut self) {
        debug!("rendered {} frames", self.frames);
    }

    fn create_context(&mut self, _window: WindowHandle) -> ContextHandle {
        ContextHandle(self.next())
    }

    fn destroy_context(&mut self, _context: ContextHandle) {}

    fn make_context_current(&mut self, _context: ContextHandle) -> bool {
        true
    }

    fn context_info(&self) -> String {
        "headless, no device".to_string()
    }

    fn compile_shader(&mut self, _kind: ShaderKind, _source: &str) -> ShaderHandle {
        ShaderHandle(self.next())
    }

    fn link_program(&mut self, _vertex: ShaderHandle, _fragment: ShaderHandle) -> ProgramHandle {
        ProgramHandle(self.next())
    }

    fn delete_shader(&mut self, _shader: ShaderHandle) {}

    fn delete_program(&mut self, _program: ProgramHandle) {}

    fn create_mesh(&mut self, _kind: MeshKind) -> MeshHandle {
        MeshHandle(self.next())
    }

    fn destroy_mesh(&mut self, _mesh: MeshHandle) {}

    fn clear(&mut self) {}

    fn draw_quad(
        &mut self,
        _mesh: MeshHandle,
        _program: ProgramHandle,
        _position: glam::Vec2,
        _size: glam::Vec2,
    ) {
    }

    fn present(&mut self, _context: ContextHandle) {
        self.frames += 1;
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis() as u64)
        .unwrap_or_default();
    info!("match seed: {seed}");

    let mut window_system = ScriptedWindowSystem::new(600);
    let mut gfx = HeadlessGraphics::new();
    let clock = SystemClock::new();

    let mut app = App::new(
        Harness {
            window_system: &mut window_system,
            gfx: &mut gfx,
            clock: &clock,
        },
        seed,
    );

    if !app.startup() {
        error!("startup failed");
        return ExitCode::FAILURE;
    }

    app.run();

    let scores = app.state().scores;
    app.cleanup();

    info!("final score: {} - {}", scores[0], scores[1]);
    ExitCode::SUCCESS
}
