//! Graphics collaborator boundary
//!
//! The core drives rendering through one trait and a set of opaque `u32`
//! handles. Zero is the universal failure value for every handle kind, so
//! staged startup can test any acquisition with `is_valid` and report the
//! failure as a plain boolean.

use glam::Vec2;
use log::error;

macro_rules! declare_handle {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name(pub u32);

        impl $name {
            pub const NONE: Self = Self(0);

            pub fn is_valid(self) -> bool {
                self.0 != 0
            }
        }
    };
}

declare_handle!(
    /// A window created by the window system
    WindowHandle
);
declare_handle!(
    /// A rendering context attached to a window
    ContextHandle
);
declare_handle!(
    /// A compiled shader stage
    ShaderHandle
);
declare_handle!(
    /// A linked shader program
    ProgramHandle
);
declare_handle!(
    /// An uploaded mesh
    MeshHandle
);

/// Shader stage selector for `compile_shader`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

/// The two mesh layouts the match renders with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshKind {
    /// Unit quad, positions only (paddles)
    Quad,
    /// Unit quad with texture coordinates (ball)
    TexturedQuad,
}

/// Rendering backend behind one subsystem boundary
///
/// Every acquisition returns a handle where zero means failure; the
/// backend logs its own failure detail before returning. Mutation of
/// backend state goes through `&mut self`, matching the single-threaded
/// ownership of the frame loop.
pub trait Graphics {
    fn startup(&mut self) -> bool;
    fn shutdown(&mut self);

    fn create_context(&mut self, window: WindowHandle) -> ContextHandle;
    fn destroy_context(&mut self, context: ContextHandle);
    fn make_context_current(&mut self, context: ContextHandle) -> bool;

    /// Human-readable description of the current context (vendor,
    /// renderer, version), logged once at the start of a run.
    fn context_info(&self) -> String;

    fn compile_shader(&mut self, kind: ShaderKind, source: &str) -> ShaderHandle;
    fn link_program(&mut self, vertex: ShaderHandle, fragment: ShaderHandle) -> ProgramHandle;
    fn delete_shader(&mut self, shader: ShaderHandle);
    fn delete_program(&mut self, program: ProgramHandle);

    fn create_mesh(&mut self, kind: MeshKind) -> MeshHandle;
    fn destroy_mesh(&mut self, mesh: MeshHandle);

    fn clear(&mut self);
    fn draw_quad(&mut self, mesh: MeshHandle, program: ProgramHandle, position: Vec2, size: Vec2);
    fn present(&mut self, context: ContextHandle);
}

/// Handle table for everything the match renders with
///
/// Owned by the app context and filled by the graphics-resources stage;
/// handles start at `NONE` and return to it on cleanup.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameResources {
    pub paddle_program: ProgramHandle,
    pub ball_program: ProgramHandle,
    pub quad_mesh: MeshHandle,
    pub ball_quad_mesh: MeshHandle,
}

/// Compiles a vertex and a fragment shader, links them, and deletes both
/// shaders regardless of the link outcome.
///
/// Returns `ProgramHandle::NONE` if any step fails. Shader and program
/// diagnostics are the backend's concern; this only reports which stage
/// gave up.
pub fn create_program_from_sources(
    gfx: &mut dyn Graphics,
    vertex_source: &str,
    fragment_source: &str,
) -> ProgramHandle {
    let vertex = gfx.compile_shader(ShaderKind::Vertex, vertex_source);

    if !vertex.is_valid() {
        error!("vertex shader compilation failed");
        return ProgramHandle::NONE;
    }

    let fragment = gfx.compile_shader(ShaderKind::Fragment, fragment_source);

    if !fragment.is_valid() {
        error!("fragment shader compilation failed");
        gfx.delete_shader(vertex);
        return ProgramHandle::NONE;
    }

    let program = gfx.link_program(vertex, fragment);

    // The program keeps what it needs; the stage objects are disposable
    // whether or not the link worked.
    gfx.delete_shader(vertex);
    gfx.delete_shader(fragment);

    if !program.is_valid() {
        error!("program link failed");
    }

    program
}

/// Vertex stage shared by both programs: pixel coordinates in, clip
/// space out, using the window size uniform.
pub const QUAD_VERTEX_SHADER: &str = r#"
#version 330 core

layout(location = 0) in vec2 a_position;

uniform vec2 u_win_size;
uniform vec2 u_origin;
uniform vec2 u_size;

void main()
{
    vec2 pixel = u_origin + a_position * u_size;
    gl_Position = vec4(pixel / u_win_size * 2.0 - 1.0, 0.0, 1.0);
}
"#;

/// Flat fill for the paddles
pub const PADDLE_FRAGMENT_SHADER: &str = r#"
#version 330 core

out vec4 o_color;

void main()
{
    o_color = vec4(1.0);
}
"#;

/// Textured-quad vertex stage for the ball, forwarding texture
/// coordinates so the fragment stage can round the corners off.
pub const BALL_VERTEX_SHADER: &str = r#"
#version 330 core

layout(location = 0) in vec2 a_position;
layout(location = 1) in vec2 a_tex_coords;

uniform vec2 u_win_size;
uniform vec2 u_origin;
uniform vec2 u_size;

out vec2 v_tex_coords;

void main()
{
    vec2 pixel = u_origin + a_position * u_size;
    gl_Position = vec4(pixel / u_win_size * 2.0 - 1.0, 0.0, 1.0);
    v_tex_coords = a_tex_coords;
}
"#;

/// Discards fragments outside the inscribed circle of the ball quad
pub const BALL_FRAGMENT_SHADER: &str = r#"
#version 330 core

in vec2 v_tex_coords;

out vec4 o_color;

void main()
{
    if (distance(v_tex_coords, vec2(0.5)) > 0.5)
    {
        discard;
    }

    o_color = vec4(1.0);
}
"#;
