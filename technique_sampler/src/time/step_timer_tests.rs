use std::time::Duration;
use super::*;

const EPS: f64 = 1e-9;

// ============================================================================
// Variable timestep
// ============================================================================

#[test]
fn test_new_timer_has_no_frames() {
    let timer = StepTimer::new();
    assert_eq!(timer.frame_count(), 0);
    assert_eq!(timer.elapsed_seconds(), 0.0);
    assert_eq!(timer.total_seconds(), 0.0);
    assert!(!timer.is_fixed_time_step());
}

#[test]
fn test_variable_step_runs_one_update_per_tick() {
    let mut timer = StepTimer::new();

    assert_eq!(timer.advance(Duration::from_millis(16)), 1);
    assert_eq!(timer.advance(Duration::from_millis(20)), 1);

    assert_eq!(timer.frame_count(), 2);
    assert!((timer.elapsed_seconds() - 0.020).abs() < EPS);
    assert!((timer.total_seconds() - 0.036).abs() < EPS);
}

#[test]
fn test_variable_step_zero_delta_still_updates() {
    let mut timer = StepTimer::new();
    assert_eq!(timer.advance(Duration::ZERO), 1);
    assert_eq!(timer.frame_count(), 1);
    assert_eq!(timer.elapsed_seconds(), 0.0);
}

#[test]
fn test_delta_is_clamped() {
    let mut timer = StepTimer::new();
    timer.advance(Duration::from_secs(3));
    assert!((timer.elapsed_seconds() - 0.1).abs() < EPS);
}

#[test]
fn test_first_tick_measures_zero() {
    let mut timer = StepTimer::new();
    assert_eq!(timer.tick(), 1);
    assert_eq!(timer.elapsed_seconds(), 0.0);
}

// ============================================================================
// Fixed timestep
// ============================================================================

#[test]
fn test_fixed_step_accumulates_until_target() {
    let mut timer = StepTimer::fixed(Duration::from_millis(10));

    assert_eq!(timer.advance(Duration::from_millis(4)), 0);
    assert_eq!(timer.frame_count(), 0);
    assert_eq!(timer.advance(Duration::from_millis(4)), 0);
    assert_eq!(timer.advance(Duration::from_millis(4)), 1);
    assert_eq!(timer.frame_count(), 1);
    assert!((timer.elapsed_seconds() - 0.010).abs() < EPS);
}

#[test]
fn test_fixed_step_catches_up_with_multiple_updates() {
    let mut timer = StepTimer::fixed(Duration::from_millis(10));
    assert_eq!(timer.advance(Duration::from_millis(35)), 3);
    assert_eq!(timer.frame_count(), 3);
    assert!((timer.total_seconds() - 0.030).abs() < EPS);
}

#[test]
fn test_fixed_step_snaps_near_target_delta() {
    let mut timer = StepTimer::fixed(Duration::from_millis(10));
    assert_eq!(timer.advance(Duration::from_micros(9_900)), 1);
    assert_eq!(timer.advance(Duration::from_micros(10_100)), 1);
    assert_eq!(timer.frame_count(), 2);
}

#[test]
fn test_zero_target_is_replaced() {
    let mut timer = StepTimer::new();
    timer.set_target_elapsed(Duration::ZERO);
    assert_eq!(timer.target_elapsed(), Duration::from_millis(1));
}

// ============================================================================
// Frames per second
// ============================================================================

#[test]
fn test_frames_per_second_counts_full_second() {
    let mut timer = StepTimer::new();
    for _ in 0..20 {
        timer.advance(Duration::from_millis(50));
    }
    assert_eq!(timer.frames_per_second(), 20);
}

#[test]
fn test_frames_per_second_counts_ticks_not_catch_up_updates() {
    // Every tick runs two fixed updates; the rate shown is still one per tick
    let mut timer = StepTimer::fixed(Duration::from_secs_f64(1.0 / 60.0));
    for _ in 0..30 {
        assert_eq!(timer.advance(Duration::from_micros(33_334)), 2);
    }
    assert_eq!(timer.frame_count(), 60);
    assert_eq!(timer.frames_per_second(), 30);
}

#[test]
fn test_frames_per_second_skips_ticks_without_update() {
    let mut timer = StepTimer::fixed(Duration::from_millis(10));
    for _ in 0..200 {
        timer.advance(Duration::from_millis(5));
    }
    assert_eq!(timer.frame_count(), 100);
    assert_eq!(timer.frames_per_second(), 100);
}

#[test]
fn test_reset_elapsed_time_clears_pending_steps() {
    let mut timer = StepTimer::fixed(Duration::from_millis(10));
    timer.advance(Duration::from_millis(8));
    timer.reset_elapsed_time();
    assert_eq!(timer.advance(Duration::from_millis(8)), 0);
    assert_eq!(timer.frame_count(), 0);
}
