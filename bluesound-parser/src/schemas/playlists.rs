//! Saved playlists and the play queue

use super::modes::{RepeatMode, ShuffleMode};
use crate::xml_decode::{lenient_number, XmlResponse};
use serde::{Deserialize, Serialize};

/// `/Playlists`: names of the playlists saved on the device
///
/// ```xml
/// <playlists service="LocalMusic">
///   <name id="Road Trip">Road Trip</name>
///   <name id="Dinner">Dinner</name>
/// </playlists>
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Playlists {
    #[serde(rename = "@service")]
    pub service: String,
    #[serde(rename = "name")]
    pub entries: Vec<PlaylistName>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaylistName {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "$text")]
    pub name: String,
}

impl XmlResponse for Playlists {
    const ROOT: &'static str = "playlists";
}

impl Playlists {
    /// Playlist names in device order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|candidate| candidate == name)
    }
}

/// A track in a saved playlist or in the play queue
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Song {
    #[serde(rename = "@id", deserialize_with = "lenient_number")]
    pub id: i32,
    #[serde(rename = "@service")]
    pub service: String,
    pub title: String,
    #[serde(rename = "art")]
    pub artist: String,
    #[serde(rename = "alb")]
    pub album: String,
    #[serde(rename = "fn")]
    pub filename: String,
}

/// `/Songs?playlist=NAME`: contents of one saved playlist
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Playlist {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@length", deserialize_with = "lenient_number")]
    pub length: i32,
    #[serde(rename = "song")]
    pub songs: Vec<Song>,
}

impl XmlResponse for Playlist {
    const ROOT: &'static str = "songs";
}

/// `/Playlist`, `/Clear`, `/Shuffle` and `/Repeat`: the current play queue
///
/// The mutating endpoints answer with the queue header only; the shuffle and
/// repeat attributes echo the mode the device actually applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayQueue {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@id", deserialize_with = "lenient_number")]
    pub id: i32,
    #[serde(rename = "@modified", deserialize_with = "lenient_number")]
    pub modified: i16,
    #[serde(rename = "@length", deserialize_with = "lenient_number")]
    pub length: i32,
    #[serde(rename = "@shuffle", deserialize_with = "lenient_number")]
    pub shuffle: i16,
    #[serde(rename = "@repeat", deserialize_with = "lenient_number")]
    pub repeat: i16,
    #[serde(rename = "song")]
    pub songs: Vec<Song>,
}

impl XmlResponse for PlayQueue {
    const ROOT: &'static str = "playlist";
}

impl PlayQueue {
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn shuffle_mode(&self) -> Option<ShuffleMode> {
        ShuffleMode::from_value(i32::from(self.shuffle))
    }

    pub fn repeat_mode(&self) -> Option<RepeatMode> {
        RepeatMode::from_value(i32::from(self.repeat))
    }
}
