//! Step timing: `Date.now()` in the browser, `Instant` natively

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn now() -> Stamp {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now() -> Stamp {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
fn ms_between(from: Stamp, to: Stamp) -> f64 {
    (to - from).max(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
fn ms_between(from: Stamp, to: Stamp) -> f64 {
    to.duration_since(from).as_secs_f64() * 1000.0
}

/// Measures a whole step plus the phases inside it
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    start: Stamp,
    lap: Stamp,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        let t = now();
        PerfTimer { start: t, lap: t }
    }

    /// Time since the previous lap (or start), then begin a new lap
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let t = now();
        let ms = ms_between(self.lap, t);
        self.lap = t;
        ms
    }

    pub(crate) fn total_ms(&self) -> f64 {
        ms_between(self.start, now())
    }
}
