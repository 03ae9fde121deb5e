use time::{format_description::BorrowedFormatItem, macros::format_description, OffsetDateTime};

pub mod messages;

// Fixed width so that the stored text sorts in chronological order.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]Z"
);

/// Renders a timestamp the way it is stored in `DATETIME` columns.
///
/// The value is converted to UTC first; the output is valid RFC 3339.
pub fn encode_timestamp(timestamp: OffsetDateTime) -> Result<String, time::error::Format> {
    timestamp
        .to_offset(time::UtcOffset::UTC)
        .format(TIMESTAMP_FORMAT)
}
