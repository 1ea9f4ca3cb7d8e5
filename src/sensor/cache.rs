//! TTL cache over the last good sensor sample.
//!
//! The cache is the only caller of the sensor link and fully absorbs
//! its failures: a failed acquisition leaves the previous sample in
//! place and still stamps the attempt, so a dead sensor is retried at
//! most once per TTL window instead of on every read.

use crate::config::SENSOR_CACHE_TTL_MS;
use crate::error::Error;
use crate::sensor::decode::SensorSample;

pub struct SampleCache {
    sample: Option<SensorSample>,
    last_attempt_ms: Option<u64>,
}

impl SampleCache {
    pub const fn new() -> Self {
        Self {
            sample: None,
            last_attempt_ms: None,
        }
    }

    /// True when the TTL has elapsed since the last acquisition
    /// attempt (or no attempt has ever been made).
    pub fn refresh_due(&self, now_ms: u64) -> bool {
        match self.last_attempt_ms {
            None => true,
            Some(t) => now_ms.saturating_sub(t) >= SENSOR_CACHE_TTL_MS,
        }
    }

    /// Record the outcome of one acquisition attempt. Successes
    /// replace the sample wholesale; failures leave it untouched.
    /// Either way the attempt is stamped, which restarts the TTL
    /// window. Returns the (possibly stale) cached sample.
    pub fn record(
        &mut self,
        now_ms: u64,
        outcome: Result<SensorSample, Error>,
    ) -> Option<SensorSample> {
        if let Ok(sample) = outcome {
            self.sample = Some(sample);
        }
        self.last_attempt_ms = Some(now_ms);
        self.sample
    }

    /// Return the cached sample, re-acquiring first if the TTL has
    /// elapsed. `acquire` is called at most once per invocation and
    /// only when a refresh is due.
    pub fn get<F>(&mut self, now_ms: u64, acquire: F) -> Option<SensorSample>
    where
        F: FnOnce() -> Result<SensorSample, Error>,
    {
        if self.refresh_due(now_ms) {
            self.record(now_ms, acquire())
        } else {
            self.sample
        }
    }

    /// The cached sample without triggering an acquisition.
    pub fn last(&self) -> Option<SensorSample> {
        self.sample
    }
}
