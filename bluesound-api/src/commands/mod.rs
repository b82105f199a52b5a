//! Command framework for BluOS endpoints
//!
//! Every control or query the controller can send is a type implementing
//! [`DeviceCommand`]. The trait ties together the endpoint, the validated
//! query string, the response schema and the predicate that decides whether
//! the device confirmed the request.
//!
//! Commands are plain values with no I/O of their own; they are executed by
//! [`Controller::execute`](crate::Controller::execute).

mod device;
mod playback;
mod playlists;
mod settings;

pub use device::GetVersion;
pub use playback::{Back, Clear, Pause, Play, Skip};
pub use playlists::{GetPlayQueue, GetPlaylist, GetPlaylists, PlayPlaylist};
pub use settings::{SetRepeat, SetShuffle, SetVolume};

use crate::endpoint::Endpoint;
use crate::error::ValidationError;
use bluesound_parser::XmlResponse;
use std::fmt::{Debug, Display};
use url::form_urlencoded;

/// Base trait for all BluOS commands
pub trait DeviceCommand: Send + Sync {
    /// Schema of the document the endpoint answers with
    type Response: XmlResponse + Debug + Send;

    /// The endpoint this command targets
    const ENDPOINT: Endpoint;

    /// Check parameters before anything is sent
    ///
    /// A command that fails validation must never reach the network.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Form-url-encoded query string, without the leading `?`
    fn query(&self) -> Option<String> {
        None
    }

    /// Request path relative to the device base URL
    fn path(&self) -> String {
        Self::ENDPOINT.with_query(self.query().as_deref())
    }

    /// Whether a decoded response confirms the command took effect
    fn is_success(&self, _response: &Self::Response) -> bool {
        true
    }
}

/// Check that `value` lies within `min..=max`
pub fn validate_range<T>(parameter: &str, value: T, min: T, max: T) -> Result<(), ValidationError>
where
    T: PartialOrd + Display,
{
    if value < min || value > max {
        return Err(ValidationError::range_error(parameter, min, max, value));
    }
    Ok(())
}

pub(crate) fn validate_not_empty(parameter: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::missing(parameter));
    }
    Ok(())
}

/// Encode query pairs the way an HTML form would (`My List` becomes `My+List`)
pub(crate) fn encode_query(pairs: &[(&str, &str)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, true)]
    #[case(50, true)]
    #[case(100, true)]
    #[case(-1, false)]
    #[case(101, false)]
    fn test_validate_range_bounds(#[case] value: i32, #[case] ok: bool) {
        assert_eq!(validate_range("level", value, 0, 100).is_ok(), ok);
    }

    #[test]
    fn test_validate_range_error_details() {
        let err = validate_range("state", 3, 0, 2).unwrap_err();
        assert_eq!(
            err,
            ValidationError::RangeError {
                parameter: "state".to_string(),
                value: "3".to_string(),
                min: "0".to_string(),
                max: "2".to_string(),
            }
        );
    }

    #[test]
    fn test_encode_query() {
        assert_eq!(encode_query(&[("level", "42")]), "level=42");
        assert_eq!(
            encode_query(&[("playlist", "My List"), ("playnow", "-1")]),
            "playlist=My+List&playnow=-1"
        );
        assert_eq!(
            encode_query(&[("playlist", "Rock & Roll/80s")]),
            "playlist=Rock+%26+Roll%2F80s"
        );
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("playlist", "Dinner").is_ok());
        assert_eq!(
            validate_not_empty("playlist", ""),
            Err(ValidationError::missing("playlist"))
        );
    }
}
