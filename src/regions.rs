//! Region table: where each body part lives in a skin and where it lands on the totem
//!
//! All values are compile-time constants. Coordinates in [`RegionSpec::source`]
//! are in skin pixel space; mask cells are in the local space of the region
//! image after cropping and resampling.

/// Width and height of the finished totem texture.
pub const TOTEM_SIZE: u32 = 32;

/// A rectangle given as origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// A pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// How an extracted region is resized before masking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resample {
    /// Keep the cropped size.
    None,
    /// Nearest-neighbor scale to exactly this width and height.
    Nearest { width: u32, height: u32 },
}

/// A cell whose alpha is forced to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskCell {
    /// A single pixel.
    Point(u32, u32),
    /// An inclusive rectangle `(x1, y1, x2, y2)`.
    Rect(u32, u32, u32, u32),
}

impl MaskCell {
    /// Whether the cell covers the given local coordinate.
    pub fn covers(&self, x: u32, y: u32) -> bool {
        match *self {
            MaskCell::Point(px, py) => px == x && py == y,
            MaskCell::Rect(x1, y1, x2, y2) => x >= x1 && x <= x2 && y >= y1 && y <= y2,
        }
    }
}

/// The four body parts placed on a totem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Head,
    LeftArm,
    RightArm,
    Body,
}

impl Region {
    /// All regions in paste order.
    pub const ALL: [Region; 4] = [Region::Head, Region::LeftArm, Region::RightArm, Region::Body];

    pub fn name(&self) -> &'static str {
        match self {
            Region::Head => "head",
            Region::LeftArm => "left-arm",
            Region::RightArm => "right-arm",
            Region::Body => "body",
        }
    }

    /// The table entry for this region.
    pub fn spec(&self) -> &'static RegionSpec {
        &REGION_TABLE[*self as usize]
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Extraction, resampling, masking and placement rules for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSpec {
    pub region: Region,
    /// Source rectangle in the skin.
    pub source: Rect,
    /// Top-left corner on the totem canvas.
    pub dest: Point,
    pub resample: Resample,
    pub mask: &'static [MaskCell],
}

/// Head cells punched transparent: the top and bottom rows plus the rounded
/// top corners.
pub const HEAD_MASK: &[MaskCell] = &[
    MaskCell::Rect(0, 0, 15, 0),
    MaskCell::Point(0, 1),
    MaskCell::Point(1, 1),
    MaskCell::Point(14, 1),
    MaskCell::Point(15, 1),
    MaskCell::Point(0, 2),
    MaskCell::Point(15, 2),
    MaskCell::Rect(0, 15, 15, 15),
];

/// Second head layer (hat), only read when the overlay is enabled.
pub const HEAD_OVERLAY_RECT: Rect = Rect::new(40, 8, 8, 8);

/// The region table, indexed by `Region as usize` and ordered for pasting.
pub const REGION_TABLE: [RegionSpec; 4] = [
    RegionSpec {
        region: Region::Head,
        source: Rect::new(8, 8, 8, 8),
        dest: Point::new(8, 1),
        resample: Resample::Nearest { width: 16, height: 16 },
        mask: HEAD_MASK,
    },
    RegionSpec {
        region: Region::LeftArm,
        source: Rect::new(44, 20, 3, 9),
        dest: Point::new(8, 17),
        resample: Resample::None,
        mask: &[],
    },
    RegionSpec {
        region: Region::RightArm,
        source: Rect::new(36, 52, 3, 9),
        dest: Point::new(21, 17),
        resample: Resample::None,
        mask: &[],
    },
    RegionSpec {
        region: Region::Body,
        source: Rect::new(20, 20, 8, 12),
        dest: Point::new(12, 16),
        resample: Resample::None,
        mask: &[],
    },
];
