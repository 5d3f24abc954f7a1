//! Performance tests for the frame pipeline

use std::time::Instant;
use tilecaster::{
    cast_all, Camera, GameState, InputState, RaycasterConfig, TilecasterResult, TurnIntent,
};

#[test]
fn test_full_frame_performance() -> TilecasterResult<()> {
    // Default map at full resolution: one ray per screen column
    let config = RaycasterConfig::default();
    let mut state = GameState::new(config)?;
    let input = InputState {
        turn: TurnIntent::Right,
        ..InputState::default()
    };

    let start = Instant::now();
    let iterations = 20;

    for _ in 0..iterations {
        state.tick(&input, 1.0 / 30.0);
    }

    let elapsed = start.elapsed();
    let avg_time_per_frame = elapsed / iterations;

    println!(
        "Average frame time: {:?} ({} iterations)",
        avg_time_per_frame, iterations
    );

    // Generous bound so unoptimized test builds pass; release frames are
    // far below the 33ms budget
    assert!(
        avg_time_per_frame.as_millis() < 500,
        "Frame took too long: {:?}",
        avg_time_per_frame
    );

    Ok(())
}

#[test]
fn test_ray_casting_performance() -> TilecasterResult<()> {
    let config = RaycasterConfig::default();
    let grid = config.build_grid()?;
    let mut player = config.build_player();
    let camera = Camera::new(config.fov_radians(), config.num_rays());

    let start = Instant::now();
    let iterations = 50;

    for i in 0..iterations {
        player.angle = i as f64 * 0.1;
        let rays = cast_all(&grid, &player, &camera);
        assert_eq!(rays.len(), camera.num_rays);
    }

    let elapsed = start.elapsed();
    let avg_time_per_cast = elapsed / iterations;

    println!("Average cast_all time: {:?}", avg_time_per_cast);

    assert!(
        avg_time_per_cast.as_millis() < 100,
        "Casting took too long: {:?}",
        avg_time_per_cast
    );

    Ok(())
}
