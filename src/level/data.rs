//! Level domain: static platform definitions.

use crate::level::geometry::Aabb;

pub const DEFAULT_PLATFORM_COLOR: [u8; 3] = [0, 200, 0];
pub const DEFAULT_PLATFORM_KIND: &str = "default";

/// Cosmetic data carried by a platform. Physics never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlatformTag {
    pub color: [u8; 3],
    pub kind: String,
}

impl PlatformTag {
    pub fn new(color: [u8; 3], kind: impl Into<String>) -> Self {
        Self {
            color,
            kind: kind.into(),
        }
    }
}

impl Default for PlatformTag {
    fn default() -> Self {
        Self::new(DEFAULT_PLATFORM_COLOR, DEFAULT_PLATFORM_KIND)
    }
}

/// A static obstacle. Geometry is fixed once the platform is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Platform {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    tag: PlatformTag,
}

impl Platform {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            tag: PlatformTag::default(),
        }
    }

    pub fn with_tag(mut self, tag: PlatformTag) -> Self {
        self.tag = tag;
        self
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn tag(&self) -> &PlatformTag {
        &self.tag
    }

    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(
            self.x as f32,
            self.y as f32,
            self.width as f32,
            self.height as f32,
        )
    }
}
