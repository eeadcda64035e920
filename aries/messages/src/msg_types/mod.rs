pub mod protocols;
pub mod role;

use std::{fmt, str::FromStr};

use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::{AsRefStr, EnumIter, EnumString};

pub use self::role::Role;
use crate::error::{MsgTypeError, MsgTypeResult};

/// Prefix shared by every protocol URI this crate understands.
pub const DIDCOMM_ORG_PREFIX: &str = "https://didcomm.org";

/// Names of the supported request/response exchange protocols, as they appear in the `@type`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter)]
pub enum ProtocolName {
    #[strum(serialize = "questionanswer")]
    QuestionAnswer,
    #[strum(serialize = "questionnaire")]
    Questionnaire,
    #[strum(serialize = "questionnaire-submission")]
    Submission,
    #[strum(serialize = "survey")]
    Survey,
}

impl ProtocolName {
    /// The only version of each protocol currently implemented.
    pub const fn supported_version(self) -> (u8, u8) {
        (1, 0)
    }

    pub fn roles(self) -> Vec<Role> {
        match self {
            Self::QuestionAnswer | Self::Questionnaire | Self::Submission => {
                vec![Role::Questioner, Role::Responder]
            }
            Self::Survey => vec![Role::Requester, Role::Responder],
        }
    }
}

/// A fully qualified protocol, e.g. `https://didcomm.org/questionanswer/1.0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Protocol {
    pub name: ProtocolName,
    pub major: u8,
    pub minor: u8,
}

impl Protocol {
    pub const fn new(name: ProtocolName) -> Self {
        let (major, minor) = name.supported_version();
        Self { name, major, minor }
    }

    pub fn roles(&self) -> Vec<Role> {
        self.name.roles()
    }

    /// Resolves a requested version to the one implemented for `name`.
    ///
    /// Any minor version of a supported major version resolves to the implemented minor.
    fn resolve(name: ProtocolName, major: u32, minor: u32) -> MsgTypeResult<Self> {
        let (supported_major, _) = name.supported_version();
        if major != u32::from(supported_major) {
            return Err(MsgTypeError::unsupported_version(format!(
                "{}/{major}.{minor}",
                name.as_ref()
            )));
        }
        Ok(Self::new(name))
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{DIDCOMM_ORG_PREFIX}/{}/{}.{}",
            self.name.as_ref(),
            self.major,
            self.minor
        )
    }
}

impl FromStr for Protocol {
    type Err = MsgTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(rest) = s
            .strip_prefix(DIDCOMM_ORG_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
        else {
            return Err(MsgTypeError::InvalidMsgType(s.to_owned()));
        };

        let Some((name, version)) = rest.split_once('/') else {
            return Err(MsgTypeError::InvalidMsgType(s.to_owned()));
        };

        let name =
            ProtocolName::from_str(name).map_err(|_| MsgTypeError::unknown_protocol(name))?;

        let (major, minor): (u32, u32) = version
            .split_once('.')
            .and_then(|(major, minor)| Some((major.parse().ok()?, minor.parse().ok()?)))
            .ok_or_else(|| MsgTypeError::unsupported_version(version))?;

        Self::resolve(name, major, minor)
    }
}

impl Serialize for Protocol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Protocol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let protocol_str = String::deserialize(deserializer)?;
        Protocol::from_str(&protocol_str).map_err(D::Error::custom)
    }
}

/// Type used for parsing a fully qualified message type. After parsing,
/// it is matched on to determine the actual message struct to deserialize to.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageType<'a> {
    /// The [`Protocol`] part of the message type (e.g: https://didcomm.org/questionanswer/1.0)
    pub protocol: Protocol,
    /// The message kind of the specific protocol (e.g: question)
    pub kind: &'a str,
}

impl<'a> TryFrom<&'a str> for MessageType<'a> {
    type Error = MsgTypeError;

    fn try_from(msg_type_str: &'a str) -> Result<Self, Self::Error> {
        // Split (from the right) at the first '/'.
        // The first element will be the string repr of the protocol
        // while the second will be the message kind.
        let Some((protocol_str, kind)) = msg_type_str.rsplit_once('/') else {
            return Err(MsgTypeError::InvalidMsgType(msg_type_str.to_owned()));
        };

        let protocol = Protocol::from_str(protocol_str)?;
        Ok(Self { protocol, kind })
    }
}

impl fmt::Display for MessageType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.protocol, self.kind)
    }
}

/// Trait implemented by the message kind enums of every protocol.
pub trait MessageKind: AsRef<str> + FromStr + Sized {
    fn protocol() -> Protocol;

    /// Parses the kind part of a `@type` belonging to this protocol.
    fn kind_from_str(kind: &str) -> MsgTypeResult<Self> {
        Self::from_str(kind).map_err(|_| MsgTypeError::unknown_kind(kind))
    }

    /// The full `@type` value of this message kind.
    fn msg_type(&self) -> String {
        format!("{}/{}", Self::protocol(), self.as_ref())
    }
}
