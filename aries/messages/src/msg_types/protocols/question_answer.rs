use strum_macros::{AsRefStr, EnumString};

use crate::msg_types::{MessageKind, Protocol, ProtocolName};

#[derive(Copy, Clone, Debug, AsRefStr, EnumString, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum QuestionAnswerTypeV1_0 {
    Question,
    Answer,
}

impl MessageKind for QuestionAnswerTypeV1_0 {
    fn protocol() -> Protocol {
        Protocol::new(ProtocolName::QuestionAnswer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::misc::test_utils;

    #[test]
    fn test_msg_type_question() {
        test_utils::test_msg_type(
            "https://didcomm.org/questionanswer/1.0",
            "question",
            QuestionAnswerTypeV1_0::protocol(),
        )
    }

    #[test]
    fn test_msg_type_answer() {
        test_utils::test_msg_type(
            "https://didcomm.org/questionanswer/1.0",
            "answer",
            QuestionAnswerTypeV1_0::protocol(),
        )
    }

    #[test]
    fn test_kind_from_str_unknown() {
        assert!(QuestionAnswerTypeV1_0::kind_from_str("problem-report").is_err());
    }
}
