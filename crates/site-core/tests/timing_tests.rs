use site_core::timing::{Debouncer, FrameCoalescer};

#[test]
fn coalesces_same_frame_updates_to_the_last_value() {
    let mut c = FrameCoalescer::new();
    // Three scroll events inside one frame window: exactly one schedule.
    assert!(c.push(10.0));
    assert!(!c.push(50.0));
    assert!(!c.push(90.0));
    assert!(c.is_pending());
    assert_eq!(c.take(), 90.0);
    assert!(!c.is_pending());
}

#[test]
fn next_event_after_take_schedules_again() {
    let mut c = FrameCoalescer::new();
    assert!(c.push(1.0));
    c.take();
    assert!(c.push(2.0));
    assert_eq!(c.take(), 2.0);
}

#[test]
fn debounce_burst_fires_exactly_once() {
    let mut d = Debouncer::new(200.0);
    // Five resize events within 50ms; each arms a timer, but only the timer
    // holding the final deadline token may fire.
    let deadlines: Vec<f64> = (0..5).map(|i| d.trigger(i as f64 * 10.0)).collect();
    let fired = deadlines.iter().filter(|dl| d.expire(**dl)).count();
    assert_eq!(fired, 1);
}

#[test]
fn only_the_latest_deadline_expires() {
    let mut d = Debouncer::new(200.0);
    let first = d.trigger(0.0);
    let second = d.trigger(50.0);
    assert!(!d.expire(first), "superseded timer must not fire");
    assert!(d.expire(second));
    assert!(!d.expire(second), "already disarmed");
}

#[test]
fn deadline_is_trigger_time_plus_delay() {
    let mut d = Debouncer::new(200.0);
    assert_eq!(d.trigger(1000.0), 1200.0);
    assert_eq!(d.delay_ms(), 200.0);
}
