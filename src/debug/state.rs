//! Debug domain: the value probe and its sample history.

use bevy::prelude::*;
use std::collections::VecDeque;

use crate::content::{ProbeConfig, ProbeSource};
use crate::movement::PlayerBody;

impl ProbeSource {
    /// Read the sampled value from the body.
    pub fn read(self, body: &PlayerBody) -> f32 {
        match self {
            Self::VelocityX => body.velocity().x,
            Self::VelocityY => body.velocity().y,
            Self::PositionX => body.position().x,
            Self::PositionY => body.position().y,
            Self::FacingAngle => body.facing_angle_deg(),
        }
    }

    /// Next source in display order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::VelocityX => Self::VelocityY,
            Self::VelocityY => Self::PositionX,
            Self::PositionX => Self::PositionY,
            Self::PositionY => Self::FacingAngle,
            Self::FacingAngle => Self::VelocityX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeSample {
    pub tick: u64,
    pub value: f32,
}

/// Bounded history of one body value, sampled at tick boundaries.
#[derive(Resource, Debug, Clone)]
pub struct ValueProbe {
    source: ProbeSource,
    sample_every: u32,
    capacity: usize,
    report_every: u32,
    samples_since_report: u32,
    history: VecDeque<ProbeSample>,
}

impl Default for ValueProbe {
    fn default() -> Self {
        Self::new(ProbeConfig::default())
    }
}

impl ValueProbe {
    pub fn new(config: ProbeConfig) -> Self {
        let capacity = config.capacity.max(1);
        Self {
            source: config.source,
            sample_every: config.sample_every.max(1),
            capacity,
            report_every: config.report_every,
            samples_since_report: 0,
            history: VecDeque::with_capacity(capacity),
        }
    }

    pub fn source(&self) -> ProbeSource {
        self.source
    }

    /// Switching source discards samples of the old value.
    pub fn set_source(&mut self, source: ProbeSource) {
        self.source = source;
        self.clear();
    }

    pub fn cycle_source(&mut self) -> ProbeSource {
        self.set_source(self.source.next());
        self.source
    }

    pub fn should_sample(&self, tick: u64) -> bool {
        tick % self.sample_every as u64 == 0
    }

    pub fn record(&mut self, tick: u64, value: f32) {
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(ProbeSample { tick, value });
        self.samples_since_report += 1;
    }

    /// True once every `report_every` samples; resets the counter.
    pub fn take_report_due(&mut self) -> bool {
        if self.report_every == 0 || self.samples_since_report < self.report_every {
            return false;
        }
        self.samples_since_report = 0;
        true
    }

    pub fn samples(&self) -> impl Iterator<Item = &ProbeSample> {
        self.history.iter()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn latest(&self) -> Option<ProbeSample> {
        self.history.back().copied()
    }

    pub fn min(&self) -> Option<f32> {
        self.history.iter().map(|s| s.value).reduce(f32::min)
    }

    pub fn max(&self) -> Option<f32> {
        self.history.iter().map(|s| s.value).reduce(f32::max)
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.samples_since_report = 0;
    }
}
