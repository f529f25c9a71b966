use crate::feed::MaterializedFeed;

use gallery_data::{
    model::{ImageMeta, ModelSummary},
    ModelId,
};

/// Masonry column width in pixels when the host picks none.
pub const DEFAULT_COLUMN_WIDTH: u32 = 300;

/// Horizontal gap between masonry columns.
pub const COLUMN_GUTTER: u32 = 16;

/// Extra viewports of tiles kept rendered around the visible area.
pub const OVERSCAN: u32 = 10;

/// Caption block height with name and stats lines.
pub const CAPTION_TWO_LINES: u32 = 66;

/// Caption block height with the name line only.
pub const CAPTION_ONE_LINE: u32 = 33;

/// Tile height when the image dimensions are unknown.
pub const FALLBACK_TILE_HEIGHT: u32 = 300;

const DAY_SECONDS: i64 = 86_400;

/// Masonry measurements handed to the grid renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileMetrics {
    pub column_width: u32,

    pub gutter: u32,

    pub overscan: u32,

    /// Captions show name and stats on separate lines.
    pub two_line_captions: bool,
}

impl Default for TileMetrics {
    fn default() -> Self {
        Self {
            column_width: DEFAULT_COLUMN_WIDTH,
            gutter: COLUMN_GUTTER,
            overscan: OVERSCAN,
            two_line_captions: true,
        }
    }
}

impl TileMetrics {
    fn caption_height(&self) -> u32 {
        if self.two_line_captions {
            CAPTION_TWO_LINES
        } else {
            CAPTION_ONE_LINE
        }
    }

    /// Image height scaled to the column, plus the caption block.
    ///
    /// Unknown or degenerate dimensions get the flat fallback height,
    /// a non positive column width falls back to the default.
    pub fn tile_height(&self, image: &ImageMeta) -> u32 {
        let (width, height) = match (image.width, image.height) {
            (Some(width), Some(height)) if width > 0 && height > 0 => {
                (width as u64, height as u64)
            }
            _ => return FALLBACK_TILE_HEIGHT,
        };

        let column = if self.column_width > 0 {
            self.column_width
        } else {
            DEFAULT_COLUMN_WIDTH
        };

        let scaled = (column as u64 * height / width) as u32;

        scaled + self.caption_height()
    }
}

/// What the virtualized grid needs to place one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: ModelId,

    pub height: u32,
}

/// Tiles for the whole feed, in render order.
pub fn tiles(feed: &MaterializedFeed<ModelSummary>, metrics: &TileMetrics) -> Vec<Tile> {
    feed.items()
        .iter()
        .map(|model| Tile {
            id: model.id,
            height: metrics.tile_height(&model.image),
        })
        .collect()
}

/// Card ribbon for recent activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    New,
    Updated,
}

/// New when created within a day, updated when only the latest version is.
pub fn badge(created_at: i64, last_version_at: Option<i64>, now: i64) -> Option<Badge> {
    if now - created_at < DAY_SECONDS {
        return Some(Badge::New);
    }

    match last_version_at {
        Some(version) if now - version < DAY_SECONDS => Some(Badge::Updated),
        _ => None,
    }
}
