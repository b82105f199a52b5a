//! `/Status` response: the player's playback snapshot

use super::modes::{RepeatMode, ShuffleMode};
use crate::xml_decode::{lenient_number, XmlResponse};
use serde::{Deserialize, Serialize};

/// Playback snapshot returned by `GET /Status`
///
/// ```xml
/// <status etag="4e26...">
///   <album>The Dark Side of the Moon</album>
///   <artist>Pink Floyd</artist>
///   <name>Time</name>
///   <state>play</state>
///   <volume>25</volume>
///   <repeat>2</repeat>
///   <shuffle>0</shuffle>
///   <secs>132</secs>
///   <totlen>413</totlen>
/// </status>
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerStatus {
    #[serde(rename = "@etag")]
    pub etag: String,
    pub album: String,
    pub artist: String,
    pub name: String,
    pub title1: String,
    pub title2: String,
    pub title3: String,
    pub image: String,
    #[serde(rename = "fn")]
    pub filename: String,
    pub quality: String,
    #[serde(rename = "streamFormat")]
    pub stream_format: String,
    pub service: String,
    /// Playback state as reported by the device (`play`, `pause`, `stop`, `stream`, `connecting`)
    pub state: String,
    #[serde(deserialize_with = "lenient_number")]
    pub volume: i16,
    #[serde(deserialize_with = "lenient_number")]
    pub mute: i16,
    /// Raw repeat mode: 0 = all, 1 = track, 2 = off
    #[serde(deserialize_with = "lenient_number")]
    pub repeat: i16,
    /// Raw shuffle mode: 0 = off, 1 = on
    #[serde(deserialize_with = "lenient_number")]
    pub shuffle: i16,
    /// Elapsed seconds in the current track
    #[serde(deserialize_with = "lenient_number")]
    pub secs: i32,
    /// Total length of the current track in seconds
    #[serde(rename = "totlen", deserialize_with = "lenient_number")]
    pub total_length: i32,
    /// Position of the current track in the play queue
    #[serde(deserialize_with = "lenient_number")]
    pub song: i32,
    /// Play queue id
    #[serde(deserialize_with = "lenient_number")]
    pub pid: i32,
    #[serde(rename = "syncStat", deserialize_with = "lenient_number")]
    pub sync_stat: i32,
}

impl XmlResponse for PlayerStatus {
    const ROOT: &'static str = "status";
}

impl PlayerStatus {
    /// True while the device reports active playback
    pub fn is_playing(&self) -> bool {
        matches!(self.state.as_str(), "play" | "stream")
    }

    /// Title line to show for the current track, preferring `name` over `title1`
    pub fn display_title(&self) -> &str {
        if self.name.is_empty() {
            &self.title1
        } else {
            &self.name
        }
    }

    /// Seconds left in the current track, zero when unknown
    pub fn remaining_secs(&self) -> i32 {
        (self.total_length - self.secs).max(0)
    }

    /// Typed shuffle mode, `None` if the device reported an unknown value
    pub fn shuffle_mode(&self) -> Option<ShuffleMode> {
        ShuffleMode::from_value(i32::from(self.shuffle))
    }

    pub fn repeat_mode(&self) -> Option<RepeatMode> {
        RepeatMode::from_value(i32::from(self.repeat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml_decode::decode;

    #[test]
    fn test_decode_playing_status() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<status etag="4e266c9fbfba6d13">
  <album>The Dark Side of the Moon</album>
  <artist>Pink Floyd</artist>
  <canMovePlayback>true</canMovePlayback>
  <fn>Qobuz:1234</fn>
  <image>/Artwork?service=Qobuz&amp;url=abc</image>
  <name>Time</name>
  <pid>77</pid>
  <quality>hd</quality>
  <repeat>2</repeat>
  <secs>132</secs>
  <service>Qobuz</service>
  <shuffle>1</shuffle>
  <song>3</song>
  <state>play</state>
  <streamFormat>FLAC 44.1/16</streamFormat>
  <syncStat>28</syncStat>
  <title1>Time</title1>
  <totlen>413</totlen>
  <volume>25</volume>
</status>"#;

        let status: PlayerStatus = decode(xml).unwrap();
        assert_eq!(status.etag, "4e266c9fbfba6d13");
        assert_eq!(status.artist, "Pink Floyd");
        assert_eq!(status.filename, "Qobuz:1234");
        assert_eq!(status.image, "/Artwork?service=Qobuz&url=abc");
        assert_eq!(status.volume, 25);
        assert_eq!(status.repeat, 2);
        assert_eq!(status.shuffle, 1);
        assert_eq!(status.secs, 132);
        assert_eq!(status.total_length, 413);
        assert_eq!(status.remaining_secs(), 281);
        assert_eq!(status.stream_format, "FLAC 44.1/16");
        assert_eq!(status.shuffle_mode(), Some(ShuffleMode::On));
        assert_eq!(status.repeat_mode(), Some(RepeatMode::Off));
        assert!(status.is_playing());
    }

    #[test]
    fn test_decode_stopped_status_with_gaps() {
        let xml = br#"<status etag="1"><state>stop</state><secs></secs><volume>9</volume></status>"#;

        let status: PlayerStatus = decode(xml).unwrap();
        assert_eq!(status.state, "stop");
        assert_eq!(status.secs, 0);
        assert_eq!(status.total_length, 0);
        assert_eq!(status.album, "");
        assert!(!status.is_playing());
    }

    #[test]
    fn test_display_title_falls_back_to_title1() {
        let status = PlayerStatus {
            title1: "Radio Paradise".to_string(),
            ..Default::default()
        };
        assert_eq!(status.display_title(), "Radio Paradise");
    }
}
