use super::DeviceCommand;
use crate::endpoint::Endpoint;
use bluesound_parser::Version;

/// Read the firmware version (`/Version`)
#[derive(Debug, Clone, Copy, Default)]
pub struct GetVersion;

impl DeviceCommand for GetVersion {
    type Response = Version;
    const ENDPOINT: Endpoint = Endpoint::Version;

    fn is_success(&self, response: &Version) -> bool {
        !response.version.is_empty()
    }
}
