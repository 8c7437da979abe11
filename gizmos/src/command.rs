use planar_geometry::{Color, Matrix4, Vector3};

/// The plane's local 2D space: origin at the plane's position, `x`/`y` spanning the plane.
pub struct PlaneSpace;

pub type FaceRect = euclid::Rect<f64, PlaneSpace>;

/// A single debug primitive for an external renderer to draw.
#[derive(Debug, Clone, PartialEq, derive_more::From)]
pub enum DrawCommand {
    Ray(RayGizmo),
    SolidRectangle(RectangleGizmo),
    DottedLine(DottedLineGizmo),
    SolidDisc(DiscGizmo),
    Label(Label),
}

/// A line from `origin` to `origin + vector`, in world space.
#[derive(Debug, Clone, PartialEq)]
pub struct RayGizmo {
    pub origin: Vector3,
    pub vector: Vector3,
    pub color: Color,
}

/// A filled rectangle with outline, `rect` in the plane's local space.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleGizmo {
    pub local_to_world: Matrix4,
    pub rect: FaceRect,
    pub face: Color,
    pub outline: Color,
}

/// Points are in the local space `local_to_world` maps from.
#[derive(Debug, Clone, PartialEq)]
pub struct DottedLineGizmo {
    pub local_to_world: Matrix4,
    pub from: Vector3,
    pub to: Vector3,
    /// Dash length in screen pixels.
    pub screen_space_size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiscGizmo {
    pub local_to_world: Matrix4,
    pub center: Vector3,
    pub normal: Vector3,
    pub radius: f64,
}

/// Text anchored at a world space position.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub anchor: Vector3,
    pub text: String,
}

pub trait GizmoSink {
    fn draw(&mut self, command: DrawCommand);
}

impl GizmoSink for Vec<DrawCommand> {
    fn draw(&mut self, command: DrawCommand) {
        self.push(command);
    }
}
