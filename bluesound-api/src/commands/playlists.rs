//! Saved playlists and the play queue

use super::{encode_query, validate_not_empty, DeviceCommand};
use crate::endpoint::Endpoint;
use crate::error::ValidationError;
use bluesound_parser::{AddSong, PlayQueue, Playlist, Playlists};

/// List the saved playlists (`/Playlists`)
#[derive(Debug, Clone, Copy, Default)]
pub struct GetPlaylists;

impl DeviceCommand for GetPlaylists {
    type Response = Playlists;
    const ENDPOINT: Endpoint = Endpoint::Playlists;
}

/// Fetch the songs of one saved playlist (`/Songs?playlist=NAME`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetPlaylist {
    pub name: String,
}

impl GetPlaylist {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl DeviceCommand for GetPlaylist {
    type Response = Playlist;
    const ENDPOINT: Endpoint = Endpoint::Songs;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_not_empty("playlist", self.name.as_str())
    }

    fn query(&self) -> Option<String> {
        Some(encode_query(&[("playlist", self.name.as_str())]))
    }
}

/// Fetch the current play queue (`/Playlist`)
#[derive(Debug, Clone, Copy, Default)]
pub struct GetPlayQueue;

impl DeviceCommand for GetPlayQueue {
    type Response = PlayQueue;
    const ENDPOINT: Endpoint = Endpoint::Playlist;
}

/// Replace the queue with a saved playlist and start playing it
/// (`/Add?playlist=NAME&playnow=-1`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayPlaylist {
    pub name: String,
}

impl PlayPlaylist {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl DeviceCommand for PlayPlaylist {
    type Response = AddSong;
    const ENDPOINT: Endpoint = Endpoint::Add;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_not_empty("playlist", self.name.as_str())
    }

    fn query(&self) -> Option<String> {
        Some(encode_query(&[("playlist", self.name.as_str()), ("playnow", "-1")]))
    }
}
