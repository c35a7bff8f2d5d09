// Host-side tests for the native render-thread driver.

mod common;

use common::*;
use std::thread;
use std::time::{Duration, Instant};
use swirl_core::*;

const TICK: Duration = Duration::from_millis(1);

fn wait_until(timeout: Duration, mut cond: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if cond() {
            return true;
        }
        thread::sleep(Duration::from_millis(2));
    }
    cond()
}

#[test]
fn thread_draws_frames_until_stopped() {
    let surface = RecordingSurface::default();
    let platform = PlatformState::new(Size::new(320.0, 240.0));
    let mut driver = SwirlThread::spawn(surface.clone(), SwirlConfig::default(), platform, TICK);

    assert!(wait_until(Duration::from_secs(5), || driver.frames_drawn() >= 3));
    driver.stop();
    assert!(!driver.is_running());

    let after_stop = surface.ops().len();
    thread::sleep(Duration::from_millis(20));
    assert_eq!(surface.ops().len(), after_stop, "no drawing after stop");
    assert_eq!(surface.strokes().len() % 7, 0, "whole frames only");
}

#[test]
fn stop_is_idempotent_and_drop_is_safe() {
    let surface = RecordingSurface::default();
    let platform = PlatformState::new(Size::new(100.0, 100.0));
    let mut driver = SwirlThread::spawn_default(surface, SwirlConfig::default(), platform);
    driver.stop();
    driver.stop();
    drop(driver);
}

#[test]
fn reduced_motion_thread_never_draws() {
    let surface = RecordingSurface::default();
    let platform = PlatformState {
        reduced_motion: true,
        ..PlatformState::new(Size::new(320.0, 240.0))
    };
    let mut driver = SwirlThread::spawn(surface.clone(), SwirlConfig::default(), platform, TICK);

    assert!(wait_until(Duration::from_secs(5), || !driver.is_running()));
    driver.stop();
    assert_eq!(driver.frames_drawn(), 0);
    assert_eq!(surface.draw_calls(), 0);
    assert!(surface.last_resize().is_some(), "surface is still sized");
}

#[test]
fn resize_from_another_thread_reaches_the_next_frame() {
    let surface = RecordingSurface::default();
    let platform = PlatformState {
        pixel_ratio: 3.0,
        ..PlatformState::new(Size::new(800.0, 600.0))
    };
    let mut driver = SwirlThread::spawn(surface.clone(), SwirlConfig::default(), platform, TICK);
    assert!(wait_until(Duration::from_secs(5), || driver.frames_drawn() >= 1));
    assert_eq!(surface.last_resize().unwrap().pixel_ratio, 2.0);

    driver.set_pixel_ratio(1.5);
    driver.resize(Size::new(400.0, 200.0), None);
    let resized = wait_until(Duration::from_secs(5), || {
        surface
            .ops()
            .iter()
            .any(|op| matches!(op, Op::Trail(s, _) if *s == Size::new(400.0, 200.0)))
    });
    driver.stop();
    assert!(resized);

    let m = surface.last_resize().unwrap();
    assert_eq!(m.logical, Size::new(400.0, 200.0));
    assert_eq!(m.pixel_ratio, 1.5);
    assert_eq!(m.backing_size(), (600, 300));
}
