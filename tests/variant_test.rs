use std::time::Duration;

use approx::relative_eq;
use funcall::prelude::*;
use funcall::testing::expected_total;
use strum::IntoEnumIterator;

#[test]
fn test_no_iterations() {
    for v in Variant::iter() {
        let t = v.measure(0);
        assert_eq!(t.total, 0);
    }
}

#[test]
fn test_five_iterations() {
    for v in Variant::iter() {
        assert_eq!(v.total(5), 10);
    }
}

#[test]
fn test_hundred_thousand_iterations() {
    let totals = Variant::iter()
        .map(|v| v.total(100_000))
        .collect::<Vec<_>>();
    assert_eq!(totals, vec![expected_total(100_000); 4]);
    assert_eq!(totals[0], 4_999_950_000);
}

#[test]
fn test_wraps_like_a_machine_word() {
    let adder = AdderImpl;
    assert_eq!(adder.bind()(Int::MAX, 2), Int::MIN + 1);
    assert_eq!(add(Int::MIN, -1), Int::MAX);
}

// Fastest of a few runs, to dodge the scheduler.
fn best_of(v: Variant, iters: u64, runs: usize) -> Duration {
    (0..runs)
        .map(|_| v.run(iters))
        .min()
        .unwrap_or_default()
}

#[test]
fn test_virtual_is_not_cheaper_than_bare() {
    let n = 100_000;
    let bare = best_of(Variant::Bare, n, 7).as_nanos() as f64;
    let virt = best_of(Variant::Virtual, n, 7).as_nanos() as f64;
    println!("Bare: {bare}ns Virtual: {virt}ns");

    // A performance expectation only. Leave plenty of slack.
    assert!(virt >= bare || relative_eq!(virt, bare, max_relative = 0.5));
}

#[test]
fn test_pointer_and_virtual_are_reported() {
    // No ordering is asserted between these two.
    let report = Harness::builder()
        .iterations(100_000)
        .build()
        .unwrap()
        .run();
    let p = report.get(Variant::Pointer).unwrap();
    let v = report.get(Variant::Virtual).unwrap();
    println!("{p}\n{v}");
    assert_eq!(p.total(), v.total());
    assert_eq!(p.iterations(), 100_000);
}

// Only meaningful with optimizations on: cargo test --release
#[test]
#[cfg(not(debug_assertions))]
fn test_loops_are_not_folded_away() {
    // Work must grow with the iteration count, for the baseline too.
    let small = 1 << 10;
    let large = 1 << 26;
    for v in Variant::iter() {
        let t_small = best_of(v, small, 3);
        let t_large = v.run(large);
        println!("{v}: {small} iters {t_small:?}, {large} iters {t_large:?}");
        // 65536 times the work, asked to show up as at least 64 times the time.
        assert!(
            t_large > t_small * 64 && t_large > Duration::from_millis(1),
            "{v} did not scale with iterations"
        );
    }
}
