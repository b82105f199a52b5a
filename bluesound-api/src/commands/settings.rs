//! Volume, shuffle and repeat

use super::{encode_query, validate_range, DeviceCommand};
use crate::endpoint::Endpoint;
use crate::error::ValidationError;
use bluesound_parser::{PlayQueue, RepeatMode, ShuffleMode, Volume};

/// Set the player volume (`/Volume?level=N`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetVolume {
    /// Volume level 0-100
    pub level: i32,
}

impl SetVolume {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 100;

    pub fn new(level: i32) -> Self {
        Self { level }
    }
}

impl DeviceCommand for SetVolume {
    type Response = Volume;
    const ENDPOINT: Endpoint = Endpoint::Volume;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_range("level", self.level, Self::MIN, Self::MAX)
    }

    fn query(&self) -> Option<String> {
        let level = self.level.to_string();
        Some(encode_query(&[("level", level.as_str())]))
    }

    fn is_success(&self, response: &Volume) -> bool {
        response.level == self.level
    }
}

/// Turn shuffle on or off (`/Shuffle?state=N`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetShuffle {
    /// Raw shuffle state, 0 or 1
    pub state: i32,
}

impl SetShuffle {
    pub fn new(state: i32) -> Self {
        Self { state }
    }
}

impl From<ShuffleMode> for SetShuffle {
    fn from(mode: ShuffleMode) -> Self {
        Self::new(mode.value())
    }
}

impl DeviceCommand for SetShuffle {
    type Response = PlayQueue;
    const ENDPOINT: Endpoint = Endpoint::Shuffle;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_range("state", self.state, ShuffleMode::Off.value(), ShuffleMode::On.value())
    }

    fn query(&self) -> Option<String> {
        let state = self.state.to_string();
        Some(encode_query(&[("state", state.as_str())]))
    }

    fn is_success(&self, response: &PlayQueue) -> bool {
        i32::from(response.shuffle) == self.state
    }
}

/// Change the repeat mode (`/Repeat?state=N`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetRepeat {
    /// Raw repeat state: 0 = all, 1 = track, 2 = off
    pub state: i32,
}

impl SetRepeat {
    pub fn new(state: i32) -> Self {
        Self { state }
    }
}

impl From<RepeatMode> for SetRepeat {
    fn from(mode: RepeatMode) -> Self {
        Self::new(mode.value())
    }
}

impl DeviceCommand for SetRepeat {
    type Response = PlayQueue;
    const ENDPOINT: Endpoint = Endpoint::Repeat;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_range("state", self.state, RepeatMode::All.value(), RepeatMode::Off.value())
    }

    fn query(&self) -> Option<String> {
        let state = self.state.to_string();
        Some(encode_query(&[("state", state.as_str())]))
    }

    fn is_success(&self, response: &PlayQueue) -> bool {
        i32::from(response.repeat) == self.state
    }
}
