//! The BluOS player controller
//!
//! A [`Controller`] is bound to one player. It owns the transport, the shared
//! [`StatusStore`] and the lifecycle of the background [`poller`](crate::poller),
//! and exposes every command as both a typed [`execute`](Controller::execute)
//! call and a forgiving convenience method.

use crate::commands::{
    Back, Clear, DeviceCommand, GetPlayQueue, GetPlaylist, GetPlaylists, GetVersion, Pause, Play,
    PlayPlaylist, SetRepeat, SetShuffle, SetVolume, Skip,
};
use crate::config::ControllerConfig;
use crate::error::{ApiError, PollerError, Result};
use crate::poller::{Poller, PollerCounters, PollerState, PollerStats};
use crate::store::{StatusSnapshot, StatusStore};
use bluesound_parser::{
    decode, AddSong, CommandState, PlayQueue, PlayerStatus, Playlist, Playlists, RepeatMode,
    ShuffleMode, SyncStatus, TrackId,
};
use http_client::{device_base_url, HttpClient, Transport};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Controller for a single BluOS player
///
/// # Example
///
/// ```rust,no_run
/// use bluesound_api::Controller;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let controller = Controller::new("192.168.1.20")?;
/// controller.start().await?;
///
/// let status = controller.status();
/// println!("{} - {}", status.artist, status.display_title());
///
/// if !controller.set_volume(30).await {
///     eprintln!("volume change was not confirmed");
/// }
///
/// controller.close().await?;
/// # Ok(())
/// # }
/// ```
pub struct Controller {
    transport: Arc<dyn Transport>,
    config: ControllerConfig,
    store: Arc<StatusStore>,
    state: Arc<watch::Sender<PollerState>>,
    counters: Arc<PollerCounters>,
    cancel: CancellationToken,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl Controller {
    /// Create a controller for `host` with the default configuration
    pub fn new(host: &str) -> Result<Self> {
        Self::with_config(host, ControllerConfig::default())
    }

    /// Create a controller for `host` with a custom configuration
    pub fn with_config(host: &str, config: ControllerConfig) -> Result<Self> {
        config.validate()?;
        let client = HttpClient::new(device_base_url(host, config.port), config.client_config())?;
        Ok(Self::build(Arc::new(client), config))
    }

    /// Create a controller that talks through any [`Transport`]
    ///
    /// `config` is used as given. Only its poll interval and shutdown timeout
    /// apply; call [`ControllerConfig::validate`] first if it comes from user input.
    pub fn with_transport(transport: Arc<dyn Transport>, config: ControllerConfig) -> Self {
        Self::build(transport, config)
    }

    fn build(transport: Arc<dyn Transport>, config: ControllerConfig) -> Self {
        let (state, _) = watch::channel(PollerState::Idle);
        Self {
            transport,
            config,
            store: Arc::new(StatusStore::new()),
            state: Arc::new(state),
            counters: Arc::new(PollerCounters::default()),
            cancel: CancellationToken::new(),
            task: Mutex::new(None),
        }
    }

    /// Base URL of the player this controller is bound to
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }


    /// Start the background poller
    ///
    /// Returns once both `Status` and `SyncStatus` have been attempted once,
    /// so the snapshot reflects the device whenever it was reachable.
    pub async fn start(&self) -> std::result::Result<(), PollerError> {
        let ready = {
            let mut task = self.task.lock();
            let current = *self.state.borrow();
            if current != PollerState::Idle {
                return Err(PollerError::AlreadyStarted);
            }

            let poller = Poller::new(
                Arc::clone(&self.transport),
                Arc::clone(&self.store),
                self.config.poll_interval,
                Arc::clone(&self.state),
                Arc::clone(&self.counters),
            );
            let (handle, ready) = poller.spawn(self.cancel.clone());
            *task = Some(handle);
            ready
        };

        ready.await.map_err(|_| PollerError::ExitedBeforeReady)?;
        info!("Controller for {} is ready", self.base_url());
        Ok(())
    }

    /// Stop the poller and wait for it to exit
    ///
    /// A request in flight is allowed to complete. If the task has not exited
    /// within [`shutdown_timeout`](ControllerConfig::shutdown_timeout) this
    /// returns [`PollerError::ShutdownTimeout`] and the state stays `Stopping`
    /// until the task exits; calling `close()` again waits again. Closing a
    /// controller that was never started moves it straight to `Stopped`.
    pub async fn close(&self) -> std::result::Result<(), PollerError> {
        let handle = {
            let mut task = self.task.lock();
            if task.is_none() && *self.state.borrow() == PollerState::Idle {
                self.cancel.cancel();
                self.state.send_replace(PollerState::Stopped);
                return Ok(());
            }
            task.take()
        };

        self.state.send_if_modified(|state| {
            if *state == PollerState::Running {
                *state = PollerState::Stopping;
                true
            } else {
                false
            }
        });
        self.cancel.cancel();
        debug!("Stop requested for poller of {}", self.base_url());

        let Some(mut handle) = handle else {
            // Another close() holds the handle; follow the published state instead
            let mut states = self.state.subscribe();
            let stopped = states.wait_for(|state| *state == PollerState::Stopped);
            return match tokio::time::timeout(self.config.shutdown_timeout, stopped).await {
                Ok(_) => Ok(()),
                Err(_) => Err(PollerError::ShutdownTimeout),
            };
        };

        match tokio::time::timeout(self.config.shutdown_timeout, &mut handle).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                self.state.send_replace(PollerState::Stopped);
                Err(PollerError::TaskFailed(e.to_string()))
            }
            Err(_) => {
                *self.task.lock() = Some(handle);
                warn!(
                    "Poller for {} did not stop within {:?}, a request is still in flight",
                    self.base_url(),
                    self.config.shutdown_timeout
                );
                Err(PollerError::ShutdownTimeout)
            }
        }
    }

    pub fn poller_state(&self) -> PollerState {
        *self.state.borrow()
    }

    /// Receiver notified on every poller state transition
    pub fn subscribe_state(&self) -> watch::Receiver<PollerState> {
        self.state.subscribe()
    }

    pub fn poller_stats(&self) -> PollerStats {
        self.counters.stats()
    }


    /// Most recent playback status, zero-valued until the first successful poll
    pub fn status(&self) -> PlayerStatus {
        self.store.status()
    }

    /// Most recent identity and group status
    pub fn sync_status(&self) -> SyncStatus {
        self.store.sync_status()
    }

    /// Both records read together, with their update times
    pub fn snapshot(&self) -> StatusSnapshot {
        self.store.snapshot()
    }


    /// Execute a command and return the decoded response
    ///
    /// Parameters are validated first; an invalid command fails with
    /// [`ApiError::InvalidParameter`] without sending anything.
    pub async fn execute<C: DeviceCommand>(&self, command: &C) -> Result<C::Response> {
        command.validate()?;

        let path = command.path();
        debug!("Executing {}", path);

        let body = self.transport.get(&path).await?;
        Ok(decode::<C::Response>(&body)?)
    }

    /// Execute a command and require the device to confirm it
    ///
    /// Like [`execute`](Self::execute), but a response that does not satisfy
    /// the command's success predicate becomes [`ApiError::CommandFailed`].
    pub async fn execute_checked<C: DeviceCommand>(&self, command: &C) -> Result<C::Response> {
        let response = self.execute(command).await?;
        if !command.is_success(&response) {
            return Err(ApiError::CommandFailed(format!(
                "{} answered {:?}",
                command.path(),
                response
            )));
        }
        Ok(response)
    }

    async fn confirm<C: DeviceCommand>(&self, command: &C) -> bool {
        match self.execute_checked(command).await {
            Ok(_) => true,
            Err(e) => {
                warn!("{} failed: {}", C::ENDPOINT, e);
                false
            }
        }
    }

    async fn fetch_or_default<C: DeviceCommand>(&self, command: &C) -> C::Response {
        match self.execute(command).await {
            Ok(response) => response,
            Err(e) => {
                warn!("{} failed: {}", C::ENDPOINT, e);
                C::Response::default()
            }
        }
    }


    /// Resume playback, returning the state the player reports
    pub async fn play(&self) -> CommandState {
        let state = self.fetch_or_default(&Play).await;
        info!("Player command: Play - state: {}", state.state);
        state
    }

    pub async fn pause(&self) -> CommandState {
        let state = self.fetch_or_default(&Pause).await;
        info!("Player command: Pause - state: {}", state.state);
        state
    }

    /// Skip to the next track, returning its queue position
    pub async fn skip(&self) -> TrackId {
        self.fetch_or_default(&Skip).await
    }

    pub async fn back(&self) -> TrackId {
        self.fetch_or_default(&Back).await
    }

    /// Set the volume (0-100); true when the player echoes the new level
    pub async fn set_volume(&self, level: i32) -> bool {
        self.confirm(&SetVolume::new(level)).await
    }

    /// Set shuffle from its raw value (0 or 1)
    pub async fn set_shuffle(&self, state: i32) -> bool {
        self.confirm(&SetShuffle::new(state)).await
    }

    pub async fn set_shuffle_mode(&self, mode: ShuffleMode) -> bool {
        self.confirm(&SetShuffle::from(mode)).await
    }

    /// Set repeat from its raw value (0 = all, 1 = track, 2 = off)
    pub async fn set_repeat(&self, state: i32) -> bool {
        self.confirm(&SetRepeat::new(state)).await
    }

    pub async fn set_repeat_mode(&self, mode: RepeatMode) -> bool {
        self.confirm(&SetRepeat::from(mode)).await
    }

    /// Empty the play queue; true when the player reports an empty queue
    pub async fn clear(&self) -> bool {
        self.confirm(&Clear).await
    }

    pub async fn playlists(&self) -> Playlists {
        self.fetch_or_default(&GetPlaylists).await
    }

    /// Songs of the saved playlist `name`
    pub async fn playlist(&self, name: &str) -> Playlist {
        self.fetch_or_default(&GetPlaylist::new(name)).await
    }

    pub async fn play_queue(&self) -> PlayQueue {
        self.fetch_or_default(&GetPlayQueue).await
    }

    /// Replace the queue with the saved playlist `name` and start playing it
    pub async fn play_playlist(&self, name: &str) -> AddSong {
        self.fetch_or_default(&PlayPlaylist::new(name)).await
    }

    /// Firmware version, empty when it could not be read
    pub async fn version(&self) -> String {
        self.fetch_or_default(&GetVersion).await.version
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("base_url", &self.base_url())
            .field("config", &self.config)
            .field("poller_state", &self.poller_state())
            .finish()
    }
}
