use strum_macros::{AsRefStr, EnumString};

use crate::msg_types::{MessageKind, Protocol, ProtocolName};

#[derive(Copy, Clone, Debug, AsRefStr, EnumString, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum SubmissionTypeV1_0 {
    Questionnaire,
    Submission,
}

impl MessageKind for SubmissionTypeV1_0 {
    fn protocol() -> Protocol {
        Protocol::new(ProtocolName::Submission)
    }
}
