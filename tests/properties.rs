//! Property tests for the geometry helpers, the ray caster and the movement
//! integrator.

use proptest::prelude::*;
use std::f64::consts::TAU;
use tilecaster::{
    angle_difference, cast_ray, distance_between_points, normalize_angle, Grid, Player, Point,
    TurnIntent, WalkIntent,
};

const TILE: f64 = 64.0;

fn walk_intent() -> impl Strategy<Value = WalkIntent> {
    prop_oneof![
        Just(WalkIntent::Backward),
        Just(WalkIntent::None),
        Just(WalkIntent::Forward),
    ]
}

fn turn_intent() -> impl Strategy<Value = TurnIntent> {
    prop_oneof![
        Just(TurnIntent::Left),
        Just(TurnIntent::None),
        Just(TurnIntent::Right),
    ]
}

proptest! {
    #[test]
    fn distance_is_symmetric_and_non_negative(
        x1 in -1.0e4..1.0e4f64,
        y1 in -1.0e4..1.0e4f64,
        x2 in -1.0e4..1.0e4f64,
        y2 in -1.0e4..1.0e4f64,
    ) {
        let forward = distance_between_points(x1, y1, x2, y2);
        let backward = distance_between_points(x2, y2, x1, y1);
        prop_assert!(forward >= 0.0);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn distance_is_zero_only_for_equal_points(
        x in -1.0e4..1.0e4f64,
        y in -1.0e4..1.0e4f64,
        dx in 1.0e-3..1.0e3f64,
    ) {
        prop_assert_eq!(distance_between_points(x, y, x, y), 0.0);
        prop_assert!(distance_between_points(x, y, x + dx, y) > 0.0);
    }

    #[test]
    fn normalized_angle_is_in_range(angle in -1.0e3..1.0e3f64) {
        let normalized = normalize_angle(angle);
        prop_assert!(normalized >= 0.0);
        prop_assert!(normalized < TAU);
    }

    #[test]
    fn normalized_angle_ignores_full_turns(angle in -100.0..100.0f64, turns in -20i32..20) {
        let shifted = normalize_angle(angle + turns as f64 * TAU);
        prop_assert!(angle_difference(shifted, normalize_angle(angle)) < 1e-9);
    }

    #[test]
    fn rays_from_inside_a_closed_room_always_hit(
        x in 1.01..8.99f64,
        y in 1.01..6.99f64,
        angle in 0.0..TAU,
    ) {
        let grid = Grid::bordered(8, 10, TILE, 3).unwrap();
        let origin = Point::new(x * TILE, y * TILE);

        let ray = cast_ray(&grid, origin, angle);

        prop_assert!(ray.is_hit());
        prop_assert_eq!(ray.material, 3);
        prop_assert!(ray.distance > 0.0);
        prop_assert!(ray.distance <= (8.0 * TILE).hypot(6.0 * TILE) + 1e-6);
    }

    #[test]
    fn player_never_ends_inside_a_wall(
        steps in prop::collection::vec((walk_intent(), turn_intent(), 0.0..0.05f64), 1..60),
    ) {
        let grid = Grid::bordered(6, 6, TILE, 1).unwrap();
        let mut player = Player::new(Point::new(3.0 * TILE, 3.0 * TILE), 0.0, 400.0, 3.0);

        for (walk, turn, dt) in steps {
            player.walk = walk;
            player.turn = turn;
            player.advance(&grid, dt);
            prop_assert!(!grid.has_wall_at(player.position.x, player.position.y));
            prop_assert!(player.angle >= 0.0 && player.angle < TAU);
        }
    }
}
