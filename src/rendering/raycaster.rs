//! # Ray Caster
//!
//! Casts one ray per screen strip and finds the nearest wall it hits.
//!
//! Each ray is walked along two families of grid lines independently: the
//! horizontal lines (`y = k·tile`) and the vertical lines (`x = k·tile`).
//! Both walks are the same [`AxisTraversal`], fed with axis-specific start
//! and step vectors. The nearer of the two hits wins.

use crate::game::{Grid, Player, Point, EMPTY_TILE};
use crate::utils::{normalize_angle, EPSILON};
use std::f64::consts::{FRAC_PI_2, PI};

/// Distance reported when neither traversal finds a wall.
///
/// Finite, so comparisons and products with it never yield NaN.
pub const NO_HIT_DISTANCE: f64 = f64::MAX;

/// Which family of grid lines a traversal crosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridAxis {
    /// Lines of constant y
    Horizontal,
    /// Lines of constant x
    Vertical,
}

/// Quadrant flags of a ray. Exactly one of `up`/`down` and one of
/// `left`/`right` is set.
///
/// Angles on an axis are degenerate: `0` and `π` count as "up", `π/2` and
/// `3π/2` count as "left". Those are exactly the angles at which the
/// traversal on the matching axis is skipped, so the flag is never used to
/// step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Facing {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Facing {
    /// Classifies a normalized angle.
    pub fn from_angle(angle: f64) -> Self {
        let down = angle > 0.0 && angle < PI;
        let right = angle < FRAC_PI_2 || angle > 1.5 * PI;
        Self {
            up: !down,
            down,
            left: !right,
            right,
        }
    }
}

/// Result of casting one ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayRecord {
    /// Ray angle, normalized to `[0, 2π)`
    pub angle: f64,
    /// Point where the ray meets the wall
    pub hit: Point,
    /// Euclidean distance from the ray origin to `hit`
    pub distance: f64,
    /// The hit lies on a vertical grid line (`x = k·tile`)
    pub hit_vertical: bool,
    /// Tile id of the wall that was hit
    pub material: u8,
    /// Quadrant flags of the ray
    pub facing: Facing,
}

impl RayRecord {
    /// Position of the hit along the wall face, in `[0, tile_size)`.
    ///
    /// Vertical-line hits run along y, horizontal-line hits along x, so
    /// textures tile consistently with the wall orientation.
    pub fn wall_offset(&self, tile_size: f64) -> f64 {
        let along = if self.hit_vertical {
            self.hit.y
        } else {
            self.hit.x
        };
        let offset = along.rem_euclid(tile_size);
        if offset >= tile_size {
            0.0
        } else {
            offset
        }
    }

    /// True when a wall was found.
    pub fn is_hit(&self) -> bool {
        self.distance < NO_HIT_DISTANCE
    }
}

/// The nearest wall found along one family of grid lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisHit {
    pub point: Point,
    pub material: u8,
    pub distance: f64,
}

/// A walk along successive crossings of one family of grid lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTraversal {
    axis: GridAxis,
    start: Point,
    step: Point,
    /// The ray travels toward decreasing coordinates on this axis, so the
    /// cell past each crossing is the one before the line.
    backward: bool,
}

impl AxisTraversal {
    /// Traversal over horizontal grid lines, or `None` when the ray runs
    /// parallel to them.
    pub fn horizontal(origin: Point, angle: f64, tile: f64) -> Option<Self> {
        let (sin, cos) = angle.sin_cos();
        if sin.abs() < EPSILON {
            return None;
        }
        let facing = Facing::from_angle(angle);
        let cot = cos / sin;

        let mut first_y = (origin.y / tile).floor() * tile;
        if facing.down {
            first_y += tile;
        }
        let first_x = origin.x + (first_y - origin.y) * cot;
        let step_y = if facing.down { tile } else { -tile };

        Some(Self {
            axis: GridAxis::Horizontal,
            start: Point::new(first_x, first_y),
            step: Point::new(step_y * cot, step_y),
            backward: facing.up,
        })
    }

    /// Traversal over vertical grid lines, or `None` when the ray runs
    /// parallel to them.
    pub fn vertical(origin: Point, angle: f64, tile: f64) -> Option<Self> {
        let (sin, cos) = angle.sin_cos();
        if cos.abs() < EPSILON {
            return None;
        }
        let facing = Facing::from_angle(angle);
        let tan = sin / cos;

        let mut first_x = (origin.x / tile).floor() * tile;
        if facing.right {
            first_x += tile;
        }
        let first_y = origin.y + (first_x - origin.x) * tan;
        let step_x = if facing.right { tile } else { -tile };

        Some(Self {
            axis: GridAxis::Vertical,
            start: Point::new(first_x, first_y),
            step: Point::new(step_x, step_x * tan),
            backward: facing.left,
        })
    }

    pub fn axis(&self) -> GridAxis {
        self.axis
    }

    /// Walks crossings until a wall cell is found or the walk leaves the
    /// world. Bounded by `rows + cols + 2` steps.
    pub fn run(&self, grid: &Grid, origin: Point) -> Option<AxisHit> {
        let width = grid.world_width();
        let height = grid.world_height();
        let max_steps = grid.rows() + grid.cols() + 2;
        let mut point = self.start;

        for _ in 0..max_steps {
            let inside = point.x >= 0.0 && point.x <= width && point.y >= 0.0 && point.y <= height;
            if !inside {
                return None;
            }

            let (row, col) = self.cell_past(point, grid.tile_size());
            if grid.is_wall_cell(row, col) {
                return Some(AxisHit {
                    point,
                    material: grid.cell(row, col).unwrap_or(EMPTY_TILE),
                    distance: origin.distance_to(point),
                });
            }

            point = point + self.step;
        }

        None
    }

    /// The cell on the far side of the grid line that `point` sits on.
    fn cell_past(&self, point: Point, tile: f64) -> (isize, isize) {
        let back = if self.backward { 1 } else { 0 };
        match self.axis {
            GridAxis::Horizontal => (
                (point.y / tile).round() as isize - back,
                (point.x / tile).floor() as isize,
            ),
            GridAxis::Vertical => (
                (point.y / tile).floor() as isize,
                (point.x / tile).round() as isize - back,
            ),
        }
    }
}

/// Casts a single ray from `origin`.
///
/// Never fails: if neither traversal finds a wall the record carries
/// [`NO_HIT_DISTANCE`], the origin as its hit point and material `0`.
///
/// # Examples
///
/// ```
/// use tilecaster::{cast_ray, Grid, Point};
///
/// let grid = Grid::bordered(5, 5, 64.0, 2).unwrap();
/// let ray = cast_ray(&grid, Point::new(160.0, 160.0), 0.0);
/// assert_eq!(ray.material, 2);
/// assert!((ray.distance - 96.0).abs() < 1e-9);
/// assert!(ray.hit_vertical);
/// ```
pub fn cast_ray(grid: &Grid, origin: Point, angle: f64) -> RayRecord {
    let angle = normalize_angle(angle);
    let facing = Facing::from_angle(angle);
    let tile = grid.tile_size();

    let horizontal =
        AxisTraversal::horizontal(origin, angle, tile).and_then(|walk| walk.run(grid, origin));
    let vertical =
        AxisTraversal::vertical(origin, angle, tile).and_then(|walk| walk.run(grid, origin));

    let nearest = match (horizontal, vertical) {
        (Some(h), Some(v)) if v.distance < h.distance => Some((v, true)),
        (Some(h), _) => Some((h, false)),
        (None, Some(v)) => Some((v, true)),
        (None, None) => None,
    };

    match nearest {
        Some((hit, hit_vertical)) => RayRecord {
            angle,
            hit: hit.point,
            distance: hit.distance,
            hit_vertical,
            material: hit.material,
            facing,
        },
        None => RayRecord {
            angle,
            hit: origin,
            distance: NO_HIT_DISTANCE,
            hit_vertical: false,
            material: EMPTY_TILE,
            facing,
        },
    }
}

/// Field of view and horizontal resolution of the rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Field of view in radians
    pub fov: f64,
    /// Number of rays per frame
    pub num_rays: usize,
}

impl Camera {
    pub fn new(fov: f64, num_rays: usize) -> Self {
        Self { fov, num_rays }
    }

    /// Angle of ray `index`, spanning the field of view left to right.
    pub fn ray_angle(&self, player_angle: f64, index: usize) -> f64 {
        let spacing = self.fov / self.num_rays.max(1) as f64;
        normalize_angle(player_angle - self.fov / 2.0 + index as f64 * spacing)
    }
}

/// Casts every ray of the camera from the player's pose.
pub fn cast_all(grid: &Grid, player: &Player, camera: &Camera) -> Vec<RayRecord> {
    let mut rays = Vec::with_capacity(camera.num_rays);
    cast_all_into(grid, player, camera, &mut rays);
    rays
}

/// Like [`cast_all`], reusing `rays` as the output buffer.
pub fn cast_all_into(grid: &Grid, player: &Player, camera: &Camera, rays: &mut Vec<RayRecord>) {
    rays.clear();
    rays.extend(
        (0..camera.num_rays)
            .map(|index| cast_ray(grid, player.position, camera.ray_angle(player.angle, index))),
    );
}
