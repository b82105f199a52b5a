//! Wire-level command tests against a mock BluOS player

mod support;

use bluesound_api::commands::{SetVolume, Skip};
use bluesound_api::{
    ApiError, ClientConfig, Controller, ControllerConfig, HttpClient, PollerState, RepeatMode,
    ShuffleMode, TransportError,
};
use mockito::{Matcher, Server, ServerGuard};
use std::sync::Arc;
use support::{RecordingTransport, Reply};

fn controller_for(server: &ServerGuard) -> Controller {
    let client = HttpClient::new(server.url(), ClientConfig::default()).expect("client should build");
    Controller::with_transport(Arc::new(client), ControllerConfig::default())
}

/// A catch-all mock that fails the test if any request reaches the server
async fn forbid_requests(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await
}

#[tokio::test]
async fn test_set_volume_confirmed_by_echo() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/Volume")
        .match_query(Matcher::UrlEncoded("level".into(), "42".into()))
        .with_status(200)
        .with_body("<volume>42</volume>")
        .create_async()
        .await;

    let controller = controller_for(&server);
    assert!(controller.set_volume(42).await);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_set_volume_out_of_range_sends_nothing() {
    let mut server = Server::new_async().await;
    let guard = forbid_requests(&mut server).await;

    let controller = controller_for(&server);
    assert!(!controller.set_volume(150).await);
    assert!(!controller.set_volume(-1).await);
    guard.assert_async().await;
}

#[tokio::test]
async fn test_set_volume_not_echoed_is_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/Volume")
        .match_query(Matcher::UrlEncoded("level".into(), "80".into()))
        .with_status(200)
        .with_body(r#"<volume db="-10" mute="0">60</volume>"#)
        .create_async()
        .await;

    let controller = controller_for(&server);
    assert!(!controller.set_volume(80).await);
}

#[tokio::test]
async fn test_every_valid_volume_is_requested_and_confirmed() {
    let transport = RecordingTransport::new();
    for level in 0..=100 {
        transport.route(
            &format!("Volume?level={}", level),
            Reply::xml(&format!("<volume>{}</volume>", level)),
        );
    }
    let controller = Controller::with_transport(transport.clone(), ControllerConfig::default());

    for level in 0..=100 {
        assert!(controller.set_volume(level).await, "level {} not confirmed", level);
    }

    let expected: Vec<String> = (0..=100).map(|level| format!("Volume?level={}", level)).collect();
    assert_eq!(transport.requests(), expected);
}

#[tokio::test]
async fn test_shuffle_and_repeat_ranges() {
    let mut server = Server::new_async().await;
    let guard = forbid_requests(&mut server).await;

    let controller = controller_for(&server);
    assert!(!controller.set_shuffle(2).await);
    assert!(!controller.set_shuffle(-1).await);
    assert!(!controller.set_repeat(3).await);
    assert!(!controller.set_repeat(-1).await);
    guard.assert_async().await;
}

#[tokio::test]
async fn test_set_shuffle_mode() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/Shuffle")
        .match_query(Matcher::UrlEncoded("state".into(), "1".into()))
        .with_status(200)
        .with_body(r#"<playlist modified="0" length="12" id="31" shuffle="1" repeat="0"/>"#)
        .create_async()
        .await;

    let controller = controller_for(&server);
    assert!(controller.set_shuffle_mode(ShuffleMode::On).await);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_set_repeat_reports_mismatch() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/Repeat")
        .match_query(Matcher::UrlEncoded("state".into(), "1".into()))
        .with_status(200)
        .with_body(r#"<playlist length="12" id="31" shuffle="0" repeat="2"/>"#)
        .create_async()
        .await;

    let controller = controller_for(&server);
    assert!(!controller.set_repeat_mode(RepeatMode::Track).await);
}

#[tokio::test]
async fn test_play_and_pause_return_state() {
    let mut server = Server::new_async().await;
    let _play = server
        .mock("GET", "/Play")
        .with_status(200)
        .with_body("<state>play</state>")
        .create_async()
        .await;
    let _pause = server
        .mock("GET", "/Pause")
        .with_status(200)
        .with_body("<state>pause</state>")
        .create_async()
        .await;

    let controller = controller_for(&server);
    assert_eq!(controller.play().await.state, "play");
    assert_eq!(controller.pause().await.state, "pause");
}

#[tokio::test]
async fn test_failures_return_default_values() {
    let mut server = Server::new_async().await;
    let _play = server
        .mock("GET", "/Play")
        .with_status(500)
        .create_async()
        .await;
    let _skip = server
        .mock("GET", "/Skip")
        .with_status(200)
        .with_body("<id>not-a-number</id>")
        .create_async()
        .await;
    let _version = server
        .mock("GET", "/Version")
        .with_status(200)
        .with_body("<state>play</state>")
        .create_async()
        .await;

    let controller = controller_for(&server);
    assert_eq!(controller.play().await.state, "");
    assert_eq!(controller.skip().await.id, 0);
    assert_eq!(controller.version().await, "");
}

#[tokio::test]
async fn test_skip_back_and_version() {
    let mut server = Server::new_async().await;
    let _skip = server
        .mock("GET", "/Skip")
        .with_status(200)
        .with_body("<id>5</id>")
        .create_async()
        .await;
    let _back = server
        .mock("GET", "/Back")
        .with_status(200)
        .with_body("<id>3</id>")
        .create_async()
        .await;
    let _version = server
        .mock("GET", "/Version")
        .with_status(200)
        .with_body("<version>4.2.8</version>")
        .create_async()
        .await;

    let controller = controller_for(&server);
    assert_eq!(controller.skip().await.id, 5);
    assert_eq!(controller.back().await.id, 3);
    assert_eq!(controller.version().await, "4.2.8");
}

#[tokio::test]
async fn test_clear_requires_empty_queue() {
    let transport = RecordingTransport::new();
    transport.route("Clear", Reply::xml(r#"<playlist modified="1" length="0" id="46"/>"#));
    let controller = Controller::with_transport(transport.clone(), ControllerConfig::default());
    assert!(controller.clear().await);

    transport.route("Clear", Reply::xml(r#"<playlist modified="1" length="4" id="46"/>"#));
    assert!(!controller.clear().await);
}

#[tokio::test]
async fn test_playlists_and_songs() {
    let mut server = Server::new_async().await;
    let _list = server
        .mock("GET", "/Playlists")
        .with_status(200)
        .with_body(r#"<playlists><name id="Road Trip">Road Trip</name><name id="Dinner">Dinner</name></playlists>"#)
        .create_async()
        .await;
    let songs = server
        .mock("GET", "/Songs")
        .match_query(Matcher::UrlEncoded("playlist".into(), "Road Trip".into()))
        .with_status(200)
        .with_body(r#"<songs name="Road Trip" length="1"><song id="0"><title>Roadrunner</title><art>The Modern Lovers</art></song></songs>"#)
        .create_async()
        .await;

    let controller = controller_for(&server);
    let playlists = controller.playlists().await;
    assert!(playlists.contains("Road Trip"));
    assert_eq!(playlists.entries.len(), 2);

    let playlist = controller.playlist("Road Trip").await;
    assert_eq!(playlist.songs.len(), 1);
    assert_eq!(playlist.songs[0].title, "Roadrunner");
    songs.assert_async().await;
}

#[tokio::test]
async fn test_play_playlist_starts_playback() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/Add")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("playlist".into(), "My List".into()),
            Matcher::UrlEncoded("playnow".into(), "-1".into()),
        ]))
        .with_status(200)
        .with_body(r#"<addsong count="12" length="12"/>"#)
        .create_async()
        .await;

    let controller = controller_for(&server);
    let added = controller.play_playlist("My List").await;
    assert_eq!(added.count, 12);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_playlist_names_are_form_encoded_on_the_wire() {
    let transport = RecordingTransport::new();
    let controller = Controller::with_transport(transport.clone(), ControllerConfig::default());

    controller.play_playlist("My List").await;
    controller.playlist("Rock & Roll").await;

    assert_eq!(
        transport.requests(),
        vec!["Add?playlist=My+List&playnow=-1", "Songs?playlist=Rock+%26+Roll"]
    );
}

#[tokio::test]
async fn test_play_queue() {
    let transport = RecordingTransport::new();
    transport.route(
        "Playlist",
        Reply::xml(r#"<playlist name="Now" id="12" length="2" shuffle="0" repeat="2"><song id="0"><title>A</title></song><song id="1"><title>B</title></song></playlist>"#),
    );
    let controller = Controller::with_transport(transport.clone(), ControllerConfig::default());

    let queue = controller.play_queue().await;
    assert_eq!(queue.length, 2);
    assert_eq!(queue.songs[1].title, "B");
    assert_eq!(queue.repeat_mode(), Some(RepeatMode::Off));
}

#[tokio::test]
async fn test_execute_exposes_typed_errors() {
    let transport = RecordingTransport::new();
    transport.route("Volume?level=10", Reply::xml("<volume>9</volume>"));
    transport.route("Skip", Reply::Error(TransportError::Status(503)));
    let controller = Controller::with_transport(transport.clone(), ControllerConfig::default());

    let err = controller.execute(&SetVolume::new(101)).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidParameter(_)));

    let err = controller.execute(&Skip).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(TransportError::Status(503))));

    let volume = controller.execute(&SetVolume::new(10)).await.unwrap();
    assert_eq!(volume.level, 9);

    let err = controller.execute_checked(&SetVolume::new(10)).await.unwrap_err();
    assert!(matches!(err, ApiError::CommandFailed(_)));

    assert_eq!(transport.requests(), vec!["Skip", "Volume?level=10", "Volume?level=10"]);
}

#[tokio::test]
async fn test_controller_polls_real_http_endpoint() {
    let mut server = Server::new_async().await;
    let _status = server
        .mock("GET", "/Status")
        .with_status(200)
        .with_body(support::STATUS_XML)
        .expect_at_least(1)
        .create_async()
        .await;
    let _sync = server
        .mock("GET", "/SyncStatus")
        .with_status(200)
        .with_body(support::SYNC_STATUS_XML)
        .expect_at_least(1)
        .create_async()
        .await;

    let address = server.socket_address();
    let config = ControllerConfig::fast_polling().with_port(address.port());
    let controller = Controller::with_config(&address.ip().to_string(), config).unwrap();

    controller.start().await.unwrap();
    assert_eq!(controller.status().album, "Kind of Blue");
    assert_eq!(controller.sync_status().model_name, "NODE 2i");

    controller.close().await.unwrap();
    assert_eq!(controller.poller_state(), PollerState::Stopped);
}
