//! Transport layer: HTTP and wire-format details (serialization/deserialization).

use std::fmt;

mod envelope;
mod report;
mod send;
mod settings;

pub use envelope::{TransportError, decode_envelope, extract_error_message};
pub use report::{
    RECEIVE_ARCHIVE_PATH, RECEIVE_LATEST_PATH, RECEIVE_LIVE_PATH, REPORT_ARCHIVE_PATH,
    REPORT_DAILY_PACK_PATH, REPORT_TODAY_LIVE_PATH, archive_query, latest_receive_query,
    pagination_query, receive_live_query, report_message_path, report_pack_path,
};
pub use send::{
    SEND_BULK_PATH, SEND_BY_URL_PATH, SEND_LIKE_TO_LIKE_PATH, SEND_VERIFY_PATH,
    delete_scheduled_path, encode_like_to_like_body, encode_send_bulk_body, encode_verify_body,
    send_by_url_query,
};
pub use settings::{CREDIT_PATH, LINE_NUMBERS_PATH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// HTTP methods used by the SMS.IR API.
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
