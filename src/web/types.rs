//! Core types produced by the weaving stages

use serde::Serialize;

use crate::geometry::{Line, Vector};

/// A point where the auxiliary spiral crossed a spoke
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AuxPoint {
    pub point: Vector,
    /// Distance of `point` from the hub
    pub distance: f64,
    /// Cumulative spiral distance at the moment of the crossing, before jitter
    pub sweep: f64,
}

/// A radial thread from the hub to the border
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spoke {
    line: Line,
    angle: f64,
    /// Auxiliary crossings in the order they were recorded
    pub aux_points: Vec<AuxPoint>,
    /// Capture crossings in generation order
    pub cap_points: Vec<Vector>,
}

impl Spoke {
    /// Spoke from `hub` to `end`, tagged with `angle` for good
    pub fn new(hub: Vector, end: Vector, angle: f64) -> Self {
        Self {
            line: Line::new(hub, end),
            angle,
            aux_points: Vec::new(),
            cap_points: Vec::new(),
        }
    }

    pub fn line(&self) -> &Line {
        &self.line
    }

    /// Angle fixed when the spoke was created
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn start(&self) -> Vector {
        self.line.start()
    }

    pub fn end(&self) -> Vector {
        self.line.end()
    }

    pub fn length(&self) -> f64 {
        self.line.length()
    }
}

/// The triangle, hub and frame threads a web hangs from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebFrame {
    pub top_a: Vector,
    pub top_b: Vector,
    pub bottom: Vector,
    pub hub: Vector,
    /// Triangle edge between the two top origins
    pub bridge: Line,
    /// Triangle edge from top A down to the bottom origin
    pub anchor_a: Line,
    /// Triangle edge from top B down to the bottom origin
    pub anchor_b: Line,
    /// Frame thread cutting across the corner at top A
    pub frame_a: Line,
    /// Frame thread cutting across the corner at top B
    pub frame_b: Line,
    /// Frame thread cutting across the corner at the bottom origin
    pub frame_c: Line,
    /// Origin-to-hub lines, in origin order (top A, top B, bottom)
    pub branches: [Line; 3],
}

impl WebFrame {
    pub fn origins(&self) -> [Vector; 3] {
        [self.top_a, self.top_b, self.bottom]
    }

    /// The six lines no spoke may cross
    pub fn border(&self) -> [Line; 6] {
        [
            self.bridge,
            self.anchor_a,
            self.anchor_b,
            self.frame_a,
            self.frame_b,
            self.frame_c,
        ]
    }
}

/// Record of a spoke added by gap filling
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Insertion {
    pub angle: f64,
    /// Width of the gap that was split, in degrees
    pub gap: f64,
    /// Angular distance to the nearer neighbour at insertion time
    pub clearance: f64,
    /// Candidate draws it took
    pub attempts: usize,
}

/// Direction of travel around the sorted spoke list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Towards increasing angle (clockwise on a y-down canvas)
    Clockwise,
    /// Towards decreasing angle
    CounterClockwise,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Neighbouring index in a circular list of `len` items
    pub fn step(self, index: usize, len: usize) -> usize {
        match self {
            Direction::Clockwise => (index + 1) % len,
            Direction::CounterClockwise => (index + len - 1) % len,
        }
    }
}

/// What a segment represents in the finished web
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentRole {
    Bridge,
    AnchorA,
    AnchorB,
    FrameA,
    FrameB,
    FrameC,
    Branch,
    Spoke,
    Auxiliary,
    Capture,
}

/// A tagged line segment handed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub role: SegmentRole,
    pub start: Vector,
    pub end: Vector,
}

impl Segment {
    pub fn new(role: SegmentRole, line: &Line) -> Self {
        Self {
            role,
            start: line.start(),
            end: line.end(),
        }
    }

    pub fn line(&self) -> Line {
        Line::new(self.start, self.end)
    }
}

/// Everything one weave produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebGeometry {
    pub width: f64,
    pub height: f64,
    pub hub: Vector,
    /// Top A, top B, bottom
    pub origins: [Vector; 3],
    pub frame: WebFrame,
    /// Sorted by angle in [0, 360)
    pub spokes: Vec<Spoke>,
    pub insertions: Vec<Insertion>,
    /// Index of the spoke where the auxiliary spiral stopped
    pub terminal_spoke: usize,
    pub aux_direction: Direction,
    /// All segments, frame first, then spokes, auxiliary and capture threads
    pub segments: Vec<Segment>,
}

impl WebGeometry {
    /// Segments carrying `role`, in generation order
    pub fn segments_with_role(&self, role: SegmentRole) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter().filter(move |s| s.role == role)
    }

    pub fn count_role(&self, role: SegmentRole) -> usize {
        self.segments_with_role(role).count()
    }
}
