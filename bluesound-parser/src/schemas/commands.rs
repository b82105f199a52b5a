//! Responses of the transport and volume commands

use crate::xml_decode::{lenient_number, XmlResponse};
use serde::{Deserialize, Serialize};

/// `<state>play</state>`, returned by `/Play` and `/Pause`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CommandState {
    #[serde(rename = "$text")]
    pub state: String,
}

impl XmlResponse for CommandState {
    const ROOT: &'static str = "state";
}

/// `<id>5</id>`, returned by `/Skip` and `/Back`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackId {
    /// Queue position of the track now playing
    #[serde(rename = "$text", deserialize_with = "lenient_number")]
    pub id: i32,
}

impl XmlResponse for TrackId {
    const ROOT: &'static str = "id";
}

/// `<volume db="-20" mute="0">42</volume>`, returned by `/Volume`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Volume {
    /// Volume level 0-100
    #[serde(rename = "$text", deserialize_with = "lenient_number")]
    pub level: i32,
    #[serde(rename = "@mute", deserialize_with = "lenient_number")]
    pub mute: i16,
    /// Attenuation in dB, as sent by the device
    #[serde(rename = "@db")]
    pub db: String,
    #[serde(rename = "@etag")]
    pub etag: String,
}

impl XmlResponse for Volume {
    const ROOT: &'static str = "volume";
}

impl Volume {
    pub fn is_muted(&self) -> bool {
        self.mute != 0
    }
}

/// `<version>3.20.45</version>`, returned by `/Version`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Version {
    #[serde(rename = "$text")]
    pub version: String,
}

impl XmlResponse for Version {
    const ROOT: &'static str = "version";
}

/// `<addsong count="12" length="12"/>`, returned by `/Add`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AddSong {
    /// Number of songs added to the play queue
    #[serde(rename = "@count", deserialize_with = "lenient_number")]
    pub count: i32,
    /// Resulting length of the play queue
    #[serde(rename = "@length", deserialize_with = "lenient_number")]
    pub length: i32,
}

impl XmlResponse for AddSong {
    const ROOT: &'static str = "addsong";
}
