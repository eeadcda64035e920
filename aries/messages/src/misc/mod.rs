pub(crate) mod utils;

pub use utils::MSG_TYPE;

#[cfg(test)]
pub mod test_utils {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};
    use serde_json::{json, Value};

    use super::utils;
    use crate::{
        msg_types::{MessageType, Protocol},
        AriesMessage,
    };

    pub struct DateTimeRfc3339<'a>(pub &'a DateTime<Utc>);

    impl Serialize for DateTimeRfc3339<'_> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            utils::serialize_datetime(self.0, serializer)
        }
    }

    pub struct OptDateTimeRfc3339<'a>(pub &'a Option<DateTime<Utc>>);

    impl Serialize for OptDateTimeRfc3339<'_> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            utils::serialize_opt_datetime(self.0, serializer)
        }
    }

    pub fn test_msg_type(protocol_str: &str, kind_str: &str, protocol: Protocol) {
        let full = format!("{protocol_str}/{kind_str}");
        let parsed = MessageType::try_from(full.as_str()).unwrap();

        assert_eq!(parsed.protocol, protocol);
        assert_eq!(parsed.kind, kind_str);
        assert_eq!(parsed.to_string(), full);
    }

    /// Checks that `msg`, once wrapped into an [`AriesMessage`], serializes to `expected`
    /// with `@id` and `@type` added, and that it deserializes back to the same value.
    pub fn test_constructed_msg<M>(msg: M, msg_type: &str, mut expected: Value)
    where
        AriesMessage: From<M>,
    {
        let msg = AriesMessage::from(msg);

        let obj = expected.as_object_mut().expect("JSON object");
        obj.insert("@id".to_owned(), json!(msg.id()));
        obj.insert("@type".to_owned(), json!(msg_type));

        test_serde(msg, expected);
    }

    pub fn test_serde<T>(value: T, expected: Value)
    where
        T: for<'de> Deserialize<'de> + Serialize + std::fmt::Debug + PartialEq,
    {
        assert_eq!(serde_json::to_value(&value).unwrap(), expected);

        let deserialized = T::deserialize(expected.clone()).unwrap();
        assert_eq!(deserialized, value);

        let deserialized: T = serde_json::from_str(&expected.to_string()).unwrap();
        assert_eq!(deserialized, value);
    }
}
