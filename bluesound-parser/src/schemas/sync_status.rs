//! `/SyncStatus` response: device identity and sync group membership

use crate::xml_decode::{lenient_number, XmlResponse};
use serde::{Deserialize, Serialize};

/// Identity snapshot returned by `GET /SyncStatus`
///
/// All identity fields are attributes of the root element. A grouped player
/// additionally carries a `<master>` child (when it follows another player) or
/// one `<slave>` child per follower (when it leads the group).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SyncStatus {
    #[serde(rename = "@icon")]
    pub icon: String,
    #[serde(rename = "@volume", deserialize_with = "lenient_number")]
    pub volume: i32,
    #[serde(rename = "@modelName")]
    pub model_name: String,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@model")]
    pub model: String,
    #[serde(rename = "@brand")]
    pub brand: String,
    #[serde(rename = "@etag", deserialize_with = "lenient_number")]
    pub etag: i32,
    #[serde(rename = "@schemaVersion", deserialize_with = "lenient_number")]
    pub schema_version: i32,
    #[serde(rename = "@syncStat", deserialize_with = "lenient_number")]
    pub sync_stat: i32,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@mac")]
    pub mac: String,
    /// Name of the sync group this player belongs to, empty when ungrouped
    #[serde(rename = "@group")]
    pub group: String,
    pub master: Option<SyncPeer>,
    #[serde(rename = "slave")]
    pub slaves: Vec<SyncPeer>,
}

/// Another player referenced from a sync group
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SyncPeer {
    /// Peer address; `<master>` carries it as text, `<slave>` as an `id` attribute
    #[serde(rename = "$text")]
    pub address: String,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@port", deserialize_with = "lenient_number")]
    pub port: u16,
}

impl SyncPeer {
    /// Address of the peer regardless of how the device encoded it
    pub fn host(&self) -> &str {
        if self.address.is_empty() {
            &self.id
        } else {
            &self.address
        }
    }
}

impl XmlResponse for SyncStatus {
    const ROOT: &'static str = "SyncStatus";
}

impl SyncStatus {
    /// True when this player follows another player
    pub fn is_follower(&self) -> bool {
        self.master.is_some()
    }

    /// True when this player leads at least one other player
    pub fn is_leader(&self) -> bool {
        !self.slaves.is_empty()
    }
}
