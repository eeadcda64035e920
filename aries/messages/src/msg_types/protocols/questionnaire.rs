use strum_macros::{AsRefStr, EnumString};

use crate::msg_types::{MessageKind, Protocol, ProtocolName};

#[derive(Copy, Clone, Debug, AsRefStr, EnumString, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum QuestionnaireTypeV1_0 {
    Question,
    Answer,
}

impl MessageKind for QuestionnaireTypeV1_0 {
    fn protocol() -> Protocol {
        Protocol::new(ProtocolName::Questionnaire)
    }
}
