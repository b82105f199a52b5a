//! In-memory transport shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use bluesound_api::{Transport, TransportError};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub const STATUS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<status etag="a1">
  <album>Kind of Blue</album>
  <artist>Miles Davis</artist>
  <name>So What</name>
  <repeat>2</repeat>
  <secs>12</secs>
  <shuffle>0</shuffle>
  <state>play</state>
  <totlen>562</totlen>
  <volume>35</volume>
</status>"#;

pub const SYNC_STATUS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<SyncStatus name="Study" model="N130" modelName="NODE 2i" brand="Bluesound" volume="35" etag="7" id="192.168.1.40:11000" mac="90:56:82:AA:BB:CC"></SyncStatus>"#;

/// What the transport answers for a path
#[derive(Debug, Clone)]
pub enum Reply {
    Body(Vec<u8>),
    Error(TransportError),
    /// Answers with the body after a delay
    Delayed(Duration, Vec<u8>),
    /// Never completes
    Hang,
}

impl Reply {
    pub fn xml(body: &str) -> Self {
        Reply::Body(body.as_bytes().to_vec())
    }
}

/// Transport that records every requested path and answers from a route table
///
/// Paths without a route fail with a 404.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<String>>,
    routes: Mutex<HashMap<String, Reply>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A transport answering `Status` and `SyncStatus` like a healthy player
    pub fn healthy_player() -> Arc<Self> {
        let transport = Self::new();
        transport.route("Status", Reply::xml(STATUS_XML));
        transport.route("SyncStatus", Reply::xml(SYNC_STATUS_XML));
        transport
    }

    pub fn route(&self, path: &str, reply: Reply) {
        self.routes.lock().insert(path.to_string(), reply);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, path: &str) -> Result<Vec<u8>, TransportError> {
        self.requests.lock().push(path.to_string());
        let reply = self.routes.lock().get(path).cloned();

        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Error(error)) => Err(error),
            Some(Reply::Delayed(delay, body)) => {
                tokio::time::sleep(delay).await;
                Ok(body)
            }
            Some(Reply::Hang) => std::future::pending().await,
            None => Err(TransportError::Status(404)),
        }
    }

    fn base_url(&self) -> &str {
        "http://recording.test:11000/"
    }
}
