use {
    display::{BoundingBox, Readings, ScreenSize},
    rand::{Rng, SeedableRng, rngs::StdRng},
    std::ops::RangeInclusive,
};

/// One update from the device feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub readings: Readings,
    pub bounding_box: Option<BoundingBox>,
}

/// Ranges the simulated detector draws boxes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxRanges {
    pub x: RangeInclusive<i32>,
    pub y: RangeInclusive<i32>,
    pub w: RangeInclusive<i32>,
    pub h: RangeInclusive<i32>,
}

impl BoxRanges {
    pub fn for_screen(screen: ScreenSize) -> Self {
        match screen {
            ScreenSize::TenInch => Self {
                x: 200..=1700,
                y: 100..=800,
                w: 100..=400,
                h: 100..=400,
            },
            ScreenSize::SevenInch => Self {
                x: 100..=600,
                y: 50..=250,
                w: 50..=200,
                h: 50..=200,
            },
        }
    }
}

pub const DISTANCE_RANGE: RangeInclusive<f64> = 10.0..=100.0;
pub const ELEVATION_RANGE: RangeInclusive<f64> = 0.0..=90.0;
pub const AZIMUTH_RANGE: RangeInclusive<f64> = 0.0..=360.0;

/// Stand-in for the sensor and detector: uniform random readings.
pub struct SimulatedTelemetry<R = StdRng> {
    rng: R,
    ranges: BoxRanges,
}

impl SimulatedTelemetry<StdRng> {
    pub fn new(screen: ScreenSize) -> Self {
        Self::with_rng(screen, StdRng::from_entropy())
    }
}

impl<R: Rng> SimulatedTelemetry<R> {
    pub fn with_rng(screen: ScreenSize, rng: R) -> Self {
        Self {
            rng,
            ranges: BoxRanges::for_screen(screen),
        }
    }

    pub fn ranges(&self) -> &BoxRanges {
        &self.ranges
    }

    pub fn next_reading(&mut self) -> Reading {
        let readings = Readings::new(
            self.rng.gen_range(DISTANCE_RANGE),
            self.rng.gen_range(ELEVATION_RANGE),
            self.rng.gen_range(AZIMUTH_RANGE),
        );
        let bounding_box = BoundingBox::new(
            self.rng.gen_range(self.ranges.x.clone()),
            self.rng.gen_range(self.ranges.y.clone()),
            self.rng.gen_range(self.ranges.w.clone()),
            self.rng.gen_range(self.ranges.h.clone()),
        );
        Reading {
            readings,
            bounding_box: Some(bounding_box),
        }
    }
}
