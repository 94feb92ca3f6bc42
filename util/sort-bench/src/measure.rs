//! Timing single runs and condensing repeated runs into one number.

use std::cmp;
use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};

/// Median of several runs plus how far apart the runs around the median were.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Sample {
    #[serde(rename = "median_ms", serialize_with = "serialize_ms")]
    pub median: Duration,
    /// Ratio between the durations just above and just below the median. Only known with at
    /// least 3 runs.
    pub spread: Option<f64>,
}

/// Measures the time it takes to execute `test_fn`.
#[inline(never)]
pub fn measure_duration<R>(test_fn: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let output = black_box(test_fn());

    (output, start.elapsed())
}

/// Analyzes multiple measurement samples, `None` if there are none.
pub fn analyze(durations: &mut [Duration]) -> Option<Sample> {
    let len = durations.len();
    if len == 0 {
        return None;
    }

    durations.sort_unstable();

    let mid = len / 2;
    let median = durations[mid];

    let spread = if len >= 3 {
        let offset = cmp::max((len as f64 / 10.0).round() as usize, 1);
        let low = durations[mid - offset];
        let high = durations[mid + offset];

        (!low.is_zero()).then(|| high.as_secs_f64() / low.as_secs_f64())
    } else {
        None
    };

    Some(Sample { median, spread })
}

pub fn as_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

fn serialize_ms<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(as_ms(*duration))
}
