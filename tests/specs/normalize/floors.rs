//! Values below their minimum are raised to it.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn below_floor_values_are_raised() {
    let mut options = Options {
        lock_ttl: Duration::from_millis(50),
        retry_count: -5,
        retry_interval: Duration::from_micros(500),
        mode: Mode::PreferReader,
        ..Options::default()
    };

    normalize(&mut options);

    assert_eq!(options.lock_ttl, Duration::from_millis(100));
    assert_eq!(options.retry_count, 1);
    assert_eq!(options.retry_interval, Duration::from_millis(1));
    assert_eq!(options.mode, Mode::PreferReader);
}

#[test]
fn floors_are_inclusive() {
    let options = Options::new()
        .with_lock_ttl(MIN_LOCK_TTL)
        .with_retry_count(MIN_RETRY_COUNT)
        .with_retry_interval(MIN_RETRY_INTERVAL)
        .normalized();

    assert_eq!(options.lock_ttl, Duration::from_millis(100));
    assert_eq!(options.retry_count, 1);
    assert_eq!(options.retry_interval, Duration::from_millis(1));
}

#[test]
fn tiny_ttl_with_short_retries_is_flagged_but_kept() {
    let options = Options::new()
        .with_lock_ttl(Duration::from_secs(30))
        .with_retry_count(3)
        .with_retry_interval(Duration::from_millis(5))
        .normalized();

    assert_eq!(options.lock_ttl, Duration::from_secs(30));
    assert_eq!(
        options.advisories(),
        vec![Advisory::TtlExceedsRetryBudget {
            lock_ttl: Duration::from_secs(30),
            retry_budget: Duration::from_millis(15),
        }]
    );
}
