use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

/// The roles an agent can have in a protocol.
/// These are mainly for use in the [discover features](https://github.com/hyperledger/aries-rfcs/blob/main/features/0031-discover-features/README.md) protocol.
#[derive(Copy, Clone, Deserialize, Debug, PartialEq, Eq, Hash, Serialize, AsRefStr, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Questioner,
    Requester,
    Responder,
}
