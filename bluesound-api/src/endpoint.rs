use std::fmt;

/// The HTTP endpoints exposed by a BluOS player
///
/// Each endpoint is a fixed path relative to the device base URL
/// (`http://<host>:11000/`). Query parameters are added by the command that
/// targets the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Playback snapshot, polled in the background
    Status,
    /// Device identity and sync group, polled in the background
    SyncStatus,
    Play,
    Pause,
    Skip,
    Back,
    /// Empties the play queue
    Clear,
    Volume,
    Shuffle,
    Repeat,
    /// Names of the saved playlists
    Playlists,
    /// Contents of one saved playlist
    Songs,
    /// The current play queue
    Playlist,
    /// Adds songs to the play queue
    Add,
    /// Firmware version
    Version,
}

impl Endpoint {
    /// Path of this endpoint relative to the device base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Status => "Status",
            Endpoint::SyncStatus => "SyncStatus",
            Endpoint::Play => "Play",
            Endpoint::Pause => "Pause",
            Endpoint::Skip => "Skip",
            Endpoint::Back => "Back",
            Endpoint::Clear => "Clear",
            Endpoint::Volume => "Volume",
            Endpoint::Shuffle => "Shuffle",
            Endpoint::Repeat => "Repeat",
            Endpoint::Playlists => "Playlists",
            Endpoint::Songs => "Songs",
            Endpoint::Playlist => "Playlist",
            Endpoint::Add => "Add",
            Endpoint::Version => "Version",
        }
    }

    /// Full request path, with the query string appended when present
    pub fn with_query(&self, query: Option<&str>) -> String {
        match query {
            Some(query) if !query.is_empty() => format!("{}?{}", self.path(), query),
            _ => self.path().to_string(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
