//! Shuffle and repeat modes as they travel on the wire

use std::fmt;

/// Shuffle mode of the play queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShuffleMode {
    Off = 0,
    On = 1,
}

impl ShuffleMode {
    /// Raw value used in `/Shuffle?state=N` and the `<shuffle>` field
    pub fn value(self) -> i32 {
        self as i32
    }

    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Off),
            1 => Some(Self::On),
            _ => None,
        }
    }
}

impl fmt::Display for ShuffleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::On => write!(f, "on"),
        }
    }
}

/// Repeat mode of the play queue
///
/// The device numbers these in an unusual order: 0 repeats the whole queue,
/// 1 repeats the current track and 2 disables repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepeatMode {
    All = 0,
    Track = 1,
    Off = 2,
}

impl RepeatMode {
    /// Raw value used in `/Repeat?state=N` and the `<repeat>` field
    pub fn value(self) -> i32 {
        self as i32
    }

    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::All),
            1 => Some(Self::Track),
            2 => Some(Self::Off),
            _ => None,
        }
    }
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Track => write!(f, "track"),
            Self::Off => write!(f, "off"),
        }
    }
}
