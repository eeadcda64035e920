use chrono::{DateTime, Utc};
use serde::Serialize;

pub const MSG_TYPE: &str = "@type";

/// Used for serialization of a [`DateTime<Utc>`] to the RFC3339 standard.
pub(crate) fn serialize_datetime<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use chrono::format::{Fixed, Item, Numeric::*, Pad::Zero};

    const FMT_ITEMS: &[Item<'static>] = &[
        Item::Numeric(Year, Zero),
        Item::Literal("-"),
        Item::Numeric(Month, Zero),
        Item::Literal("-"),
        Item::Numeric(Day, Zero),
        Item::Literal("T"),
        Item::Numeric(Hour, Zero),
        Item::Literal(":"),
        Item::Numeric(Minute, Zero),
        Item::Literal(":"),
        Item::Numeric(Second, Zero),
        Item::Fixed(Fixed::Nanosecond3),
        Item::Fixed(Fixed::TimezoneOffsetColonZ),
    ];

    format_args!("{}", dt.format_with_items(FMT_ITEMS.iter())).serialize(serializer)
}

/// Used for serialization of an [`Option<DateTime<Utc>>`] to the RFC3339 standard.
pub(crate) fn serialize_opt_datetime<S>(
    dt: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match dt {
        Some(dt) => serialize_datetime(dt, serializer),
        None => serializer.serialize_none(),
    }
}

/// Implements [`From`] for the given [`crate::msg_parts::MsgParts`] so that it can be converted
/// into an [`crate::AriesMessage`] through the protocol enum it belongs to.
macro_rules! into_msg_with_type {
    ($msg:ty, $protocol:ident, $variant:ident) => {
        impl From<$msg> for $crate::AriesMessage {
            fn from(value: $msg) -> $crate::AriesMessage {
                $crate::AriesMessage::from($protocol::$variant(value))
            }
        }
    };
}

pub(crate) use into_msg_with_type;
