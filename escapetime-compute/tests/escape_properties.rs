use escapetime_compute::{
    evaluate_escape, is_in_main_cardioid, is_in_period2_bulb, Bounds, ComplexPoint,
    DiagnosticSink, EscapeSample, EscapeTimeEvaluator, ErrorKind, PixelRect, ThrottledLogSink,
    NO_ESCAPE,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn grid(bounds: Bounds, steps: u32) -> impl Iterator<Item = ComplexPoint> {
    PixelRect::full_canvas(steps, steps)
        .pixels()
        .map(move |(px, py)| bounds.pixel_to_point(px, py, (steps, steps)))
}

#[test]
fn known_members_are_bounded() {
    for (x, y) in [(0.0, 0.0), (-1.0, 0.0), (-0.5, 0.0), (0.25 - 1e-9, 0.0)] {
        assert_eq!(evaluate_escape(x, y, 100).unwrap(), NO_ESCAPE, "({x}, {y})");
    }
}

#[test]
fn far_point_escapes() {
    let value = evaluate_escape(2.0, 2.0, 100).unwrap();
    assert!(value >= 1.0, "value {value}");
}

#[test]
fn never_returns_value_between_zero_and_one() {
    let evaluator = EscapeTimeEvaluator::new(200).unwrap();
    let bounds = Bounds::new(-2.5, 1.5, -2.0, 2.0).unwrap();
    let mut escaped = 0;
    for point in grid(bounds, 120) {
        let value = evaluator.evaluate(point);
        assert!(
            value == 0.0 || value >= 1.0,
            "value {value} at {point:?} is in (0, 1)"
        );
        if value > 0.0 {
            escaped += 1;
        }
    }
    assert!(escaped > 0, "grid should contain escaping points");
}

#[test]
fn shortcut_regions_never_iterate() {
    let evaluator = EscapeTimeEvaluator::default();
    let bounds = Bounds::new(-1.3, 0.4, -0.7, 0.7).unwrap();
    let mut shortcut_hits = 0;
    for point in grid(bounds, 80) {
        if is_in_main_cardioid(point.x, point.y) || is_in_period2_bulb(point.x, point.y) {
            let sample = evaluator.sample(point);
            assert_eq!(sample.value, NO_ESCAPE);
            assert_eq!(sample.iterations, 0, "{point:?} iterated");
            assert!(sample.shortcut.is_some());
            shortcut_hits += 1;
        }
    }
    assert!(shortcut_hits > 100, "only {shortcut_hits} shortcut points");
}

#[test]
fn evaluation_is_bit_identical_on_repeat() {
    let evaluator = EscapeTimeEvaluator::new(300).unwrap();
    for point in grid(Bounds::default(), 40) {
        let a = evaluator.evaluate(point);
        let b = evaluator.evaluate(point);
        assert_eq!(a.to_bits(), b.to_bits(), "{point:?}");
    }
}

#[test]
fn more_iterations_only_reveal_more_escapes() {
    // A point that escapes within a small budget escapes identically with a larger one.
    let small = EscapeTimeEvaluator::new(20).unwrap();
    let large = EscapeTimeEvaluator::new(2000).unwrap();
    for point in grid(Bounds::default(), 30) {
        let v = small.evaluate(point);
        if v > 0.0 {
            assert_eq!(v, large.evaluate(point), "{point:?}");
        }
    }
}

#[test]
fn zero_iterations_is_invalid_argument() {
    let err = evaluate_escape(0.0, 0.0, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[derive(Default)]
struct CountingSink {
    samples: AtomicUsize,
    shortcuts: AtomicUsize,
}

impl DiagnosticSink for CountingSink {
    fn record(&self, sample: &EscapeSample) {
        self.samples.fetch_add(1, Ordering::Relaxed);
        if sample.shortcut.is_some() {
            self.shortcuts.fetch_add(1, Ordering::Relaxed);
        }
    }
}

#[test]
fn diagnostics_sink_sees_every_evaluation() {
    let sink = Arc::new(CountingSink::default());
    let evaluator = EscapeTimeEvaluator::default().with_diagnostics(sink.clone());

    evaluator.evaluate(ComplexPoint::new(0.0, 0.0));
    evaluator.evaluate(ComplexPoint::new(2.0, 2.0));
    evaluator.evaluate(ComplexPoint::new(-1.0, 0.0));

    assert_eq!(sink.samples.load(Ordering::Relaxed), 3);
    assert_eq!(sink.shortcuts.load(Ordering::Relaxed), 2);
}

#[test]
fn diagnostics_do_not_change_results() {
    let plain = EscapeTimeEvaluator::new(150).unwrap();
    let logged = plain
        .clone()
        .with_diagnostics(Arc::new(ThrottledLogSink::new(7, 3)));
    for point in grid(Bounds::default(), 25) {
        assert_eq!(plain.evaluate(point).to_bits(), logged.evaluate(point).to_bits());
    }
}

#[test]
fn evaluator_is_shareable_across_threads() {
    let evaluator = Arc::new(EscapeTimeEvaluator::new(100).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let evaluator = Arc::clone(&evaluator);
            std::thread::spawn(move || evaluator.evaluate(ComplexPoint::new(-2.0 + t as f64, 0.5)))
        })
        .collect();
    let threaded: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let serial: Vec<f64> = (0..4)
        .map(|t| evaluator.evaluate(ComplexPoint::new(-2.0 + t as f64, 0.5)))
        .collect();
    assert_eq!(threaded, serial);
}
