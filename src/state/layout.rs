// Masonry placement of preview tiles on the virtual canvas.
use crate::model::{ComponentDescriptor, ComponentKind};
use crate::state::camera::{Point, Rect};

/// Where the grid is centred on the virtual canvas.
pub const CANVAS_ORIGIN: Point = Point::new(3000.0, 3000.0);
/// Side of the square virtual canvas.
pub const CANVAS_SIZE: f64 = 6000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct MasonryConfig {
    pub columns: usize,
    pub column_width: f64,
    pub gap: f64,
}

impl Default for MasonryConfig {
    fn default() -> Self {
        Self {
            columns: 3,
            column_width: 380.0,
            gap: 24.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTile {
    pub kind: ComponentKind,
    pub bounds: Rect,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MasonryLayout {
    pub tiles: Vec<PlacedTile>,
    /// Box enclosing every tile; `None` when there are no tiles.
    pub content_bounds: Option<Rect>,
}

/// Each tile goes into the currently shortest column (leftmost on ties), and the
/// finished grid is centred on [`CANVAS_ORIGIN`].
pub fn masonry(items: &[&ComponentDescriptor], cfg: &MasonryConfig) -> MasonryLayout {
    let columns = cfg.columns.max(1).min(items.len().max(1));
    let mut heights = vec![0.0_f64; columns];
    let mut tiles = Vec::with_capacity(items.len());
    for d in items {
        let (col, top) = heights
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::INFINITY), |best, (i, h)| if h < best.1 { (i, h) } else { best });
        let y = if top > 0.0 { top + cfg.gap } else { 0.0 };
        tiles.push(PlacedTile {
            kind: d.kind,
            bounds: Rect {
                x: col as f64 * (cfg.column_width + cfg.gap),
                y,
                width: cfg.column_width,
                height: d.tile_height,
            },
        });
        heights[col] = y + d.tile_height;
    }
    if tiles.is_empty() {
        return MasonryLayout::default();
    }
    let width = columns as f64 * cfg.column_width + (columns - 1) as f64 * cfg.gap;
    let height = heights.iter().copied().fold(0.0, f64::max);
    let dx = CANVAS_ORIGIN.x - width * 0.5;
    let dy = CANVAS_ORIGIN.y - height * 0.5;
    for t in &mut tiles {
        t.bounds.x += dx;
        t.bounds.y += dy;
    }
    MasonryLayout {
        tiles,
        content_bounds: Some(Rect {
            x: dx,
            y: dy,
            width,
            height,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CATALOG;

    fn all() -> Vec<&'static ComponentDescriptor> {
        CATALOG.iter().collect()
    }

    #[test]
    fn tiles_go_to_shortest_column() {
        let items = all();
        let cfg = MasonryConfig::default();
        let layout = masonry(&items, &cfg);
        // first row fills columns left to right
        let xs: Vec<_> = layout.tiles[..3].iter().map(|t| t.bounds.x).collect();
        assert!(xs[0] < xs[1] && xs[1] < xs[2]);
        // the fourth tile lands under the shortest of the first three (cta-split, 240)
        assert_eq!(layout.tiles[3].bounds.x, layout.tiles[2].bounds.x);
        assert_eq!(
            layout.tiles[3].bounds.y,
            layout.tiles[2].bounds.y + 240.0 + cfg.gap
        );
    }

    #[test]
    fn bounds_enclose_every_tile_and_centre_on_origin() {
        let layout = masonry(&all(), &MasonryConfig::default());
        let b = layout.content_bounds.unwrap();
        for t in &layout.tiles {
            assert!(t.bounds.x >= b.x - 1e-9 && t.bounds.y >= b.y - 1e-9);
            assert!(t.bounds.x + t.bounds.width <= b.x + b.width + 1e-9);
            assert!(t.bounds.y + t.bounds.height <= b.y + b.height + 1e-9);
        }
        let c = b.center();
        assert!((c.x - CANVAS_ORIGIN.x).abs() < 1e-9);
        assert!((c.y - CANVAS_ORIGIN.y).abs() < 1e-9);
    }

    #[test]
    fn empty_and_narrow_inputs() {
        assert_eq!(masonry(&[], &MasonryConfig::default()), MasonryLayout::default());
        let one = [&CATALOG[0]];
        let layout = masonry(&one, &MasonryConfig::default());
        assert_eq!(layout.content_bounds.unwrap().width, 380.0);
    }
}
