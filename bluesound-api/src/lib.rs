//! # bluesound-api
//!
//! Controller for Bluesound and other BluOS players over their local HTTP API.
//!
//! A [`Controller`] keeps a background poller running that refreshes the
//! player's `Status` and `SyncStatus` twice a second, and offers the player's
//! controls (play, pause, volume, shuffle, repeat, playlists) as one-shot
//! requests.
//!
//! ```rust,no_run
//! use bluesound_api::{Controller, RepeatMode};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let controller = Controller::new("192.168.1.20")?;
//! controller.start().await?;
//!
//! println!("Now playing on {}: {}", controller.sync_status().name, controller.status().display_title());
//!
//! controller.set_repeat_mode(RepeatMode::Track).await;
//! for name in controller.playlists().await.names() {
//!     println!("playlist: {}", name);
//! }
//!
//! controller.close().await?;
//! # Ok(())
//! # }
//! ```
//!
//! Commands are also available as typed values for callers that want the
//! underlying error instead of a failure value:
//!
//! ```rust,no_run
//! use bluesound_api::{commands::SetVolume, ApiError, Controller};
//!
//! # async fn run(controller: Controller) {
//! match controller.execute(&SetVolume::new(150)).await {
//!     Err(ApiError::InvalidParameter(e)) => eprintln!("rejected: {}", e),
//!     other => println!("{:?}", other),
//! }
//! # }
//! ```

pub mod commands;
pub mod config;
pub mod controller;
pub mod endpoint;
pub mod error;
pub mod logging;
pub mod poller;
pub mod store;

pub use commands::{validate_range, DeviceCommand};
pub use config::ControllerConfig;
pub use controller::Controller;
pub use endpoint::Endpoint;
pub use error::{ApiError, ConfigError, PollerError, Result, ValidationError};
pub use poller::{PollTarget, PollerState, PollerStats};
pub use store::{StatusSnapshot, StatusStore};

// Re-export the lower layers so applications need a single dependency
pub use bluesound_parser::{
    AddSong, CommandState, DecodeError, PlayQueue, PlayerStatus, Playlist, PlaylistName,
    Playlists, RepeatMode, ShuffleMode, Song, SyncPeer, SyncStatus, TrackId, Version, Volume,
};
pub use http_client::{ClientConfig, HttpClient, Transport, TransportError};
