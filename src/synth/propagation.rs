/// Number of block-rate wind-speed values kept.
pub const HISTORY_CAPACITY: usize = 500;
/// Delay, in blocks, of a tap panned fully right.
pub const MAX_LOOKBACK: usize = 20;

/// Index `floor(pan * MAX_LOOKBACK)` slots behind `newest`, wrapped into the ring.
#[inline]
pub fn delayed_index(newest: usize, pan: f32) -> usize {
    let lookback = (pan.clamp(0.0, 1.0) * MAX_LOOKBACK as f32).floor() as isize;
    (newest as isize - lookback).rem_euclid(HISTORY_CAPACITY as isize) as usize
}

/// Ring of wind-speed control values, one entry per processed block.
///
/// This is a history of block-level control values, not audio: it advances
/// once per `process` call regardless of block length.
#[derive(Clone, Debug)]
pub struct WindSpeedHistory {
    buffer: [f32; HISTORY_CAPACITY],
    write_index: usize,
}

impl WindSpeedHistory {
    pub fn new() -> Self {
        Self {
            buffer: [0.0; HISTORY_CAPACITY],
            write_index: 0,
        }
    }

    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.write_index = 0;
    }

    /// Stores this block's wind speed and advances the write index.
    #[inline]
    pub fn push(&mut self, wind_speed: f32) {
        self.buffer[self.write_index] = wind_speed;
        self.write_index = (self.write_index + 1) % HISTORY_CAPACITY;
    }

    /// Slot the next `push` will overwrite.
    pub fn write_index(&self) -> usize {
        self.write_index
    }

    /// Slot written by the most recent `push`.
    pub fn newest_index(&self) -> usize {
        (self.write_index + HISTORY_CAPACITY - 1) % HISTORY_CAPACITY
    }

    pub fn read_index(&self, pan: f32) -> usize {
        delayed_index(self.newest_index(), pan)
    }

    #[inline]
    pub fn get(&self, index: usize) -> f32 {
        self.buffer[index % HISTORY_CAPACITY]
    }
}

impl Default for WindSpeedHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// One delayed read of the history. The tap's pan decides how far back it looks.
#[derive(Clone, Copy, Debug, Default)]
pub struct DelayTap {
    read_index: usize,
    wind_speed: f32,
}

impl DelayTap {
    pub fn update(&mut self, history: &WindSpeedHistory, pan: f32) -> f32 {
        self.read_index = history.read_index(pan);
        self.wind_speed = history.get(self.read_index);
        self.wind_speed
    }

    pub fn read_index(&self) -> usize {
        self.read_index
    }

    pub fn wind_speed(&self) -> f32 {
        self.wind_speed
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
