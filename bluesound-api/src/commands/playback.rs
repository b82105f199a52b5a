//! Transport controls: play, pause, skip, back and clear

use super::DeviceCommand;
use crate::endpoint::Endpoint;
use bluesound_parser::{CommandState, PlayQueue, TrackId};

/// Resume playback (`/Play`)
#[derive(Debug, Clone, Copy, Default)]
pub struct Play;

impl DeviceCommand for Play {
    type Response = CommandState;
    const ENDPOINT: Endpoint = Endpoint::Play;

    fn is_success(&self, response: &CommandState) -> bool {
        !response.state.is_empty()
    }
}

/// Pause playback (`/Pause`)
#[derive(Debug, Clone, Copy, Default)]
pub struct Pause;

impl DeviceCommand for Pause {
    type Response = CommandState;
    const ENDPOINT: Endpoint = Endpoint::Pause;

    fn is_success(&self, response: &CommandState) -> bool {
        !response.state.is_empty()
    }
}

/// Jump to the next track in the queue (`/Skip`)
#[derive(Debug, Clone, Copy, Default)]
pub struct Skip;

impl DeviceCommand for Skip {
    type Response = TrackId;
    const ENDPOINT: Endpoint = Endpoint::Skip;
}

/// Restart the current track, or go to the previous one (`/Back`)
#[derive(Debug, Clone, Copy, Default)]
pub struct Back;

impl DeviceCommand for Back {
    type Response = TrackId;
    const ENDPOINT: Endpoint = Endpoint::Back;
}

/// Empty the play queue (`/Clear`)
#[derive(Debug, Clone, Copy, Default)]
pub struct Clear;

impl DeviceCommand for Clear {
    type Response = PlayQueue;
    const ENDPOINT: Endpoint = Endpoint::Clear;

    fn is_success(&self, response: &PlayQueue) -> bool {
        response.is_empty()
    }
}
