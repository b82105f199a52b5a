//! Response schemas, one per root element the BluOS API returns
//!
//! | Root element   | Type             | Endpoints                                 |
//! |----------------|------------------|-------------------------------------------|
//! | `status`       | [`PlayerStatus`] | `Status`                                  |
//! | `SyncStatus`   | [`SyncStatus`]   | `SyncStatus`                              |
//! | `state`        | [`CommandState`] | `Play`, `Pause`                           |
//! | `id`           | [`TrackId`]      | `Skip`, `Back`                            |
//! | `volume`       | [`Volume`]       | `Volume`                                  |
//! | `version`      | [`Version`]      | `Version`                                 |
//! | `playlists`    | [`Playlists`]    | `Playlists`                               |
//! | `songs`        | [`Playlist`]     | `Songs`                                   |
//! | `playlist`     | [`PlayQueue`]    | `Playlist`, `Clear`, `Shuffle`, `Repeat`  |
//! | `addsong`      | [`AddSong`]      | `Add`                                     |

pub mod commands;
pub mod modes;
pub mod playlists;
pub mod status;
pub mod sync_status;

pub use commands::{AddSong, CommandState, TrackId, Version, Volume};
pub use modes::{RepeatMode, ShuffleMode};
pub use playlists::{PlayQueue, Playlist, PlaylistName, Playlists, Song};
pub use status::PlayerStatus;
pub use sync_status::{SyncPeer, SyncStatus};
