use crate::domain::{ArchiveQuery, MessageId, PackId, Pagination, ReceiveLiveQuery};

pub const REPORT_TODAY_LIVE_PATH: &str = "/v1/send/live";
pub const REPORT_ARCHIVE_PATH: &str = "/v1/send/archive";
pub const REPORT_DAILY_PACK_PATH: &str = "/v1/send/pack";
pub const RECEIVE_LATEST_PATH: &str = "/v1/receive/latest";
pub const RECEIVE_LIVE_PATH: &str = "/v1/receive/live";
pub const RECEIVE_ARCHIVE_PATH: &str = "/v1/receive/archive";

/// Path for one message's delivery report.
pub fn report_message_path(message_id: MessageId) -> String {
    format!("/v1/send/{}", message_id.value())
}

/// Path for the messages of one pack.
pub fn report_pack_path(pack_id: &PackId) -> String {
    format!("/v1/send/pack/{}", pack_id.as_str())
}

/// Query pairs for plain paginated listings. Unset values are omitted so the
/// server applies its own defaults.
pub fn pagination_query(pagination: &Pagination) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(page_number) = pagination.page_number {
        query.push(("pageNumber", page_number.to_string()));
    }
    if let Some(page_size) = pagination.page_size {
        query.push(("pageSize", page_size.to_string()));
    }
    query
}

/// Query pairs for the date-bounded archive listings.
pub fn archive_query(query: &ArchiveQuery) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(from_date) = query.from_date {
        pairs.push(("fromDate", from_date.value().to_string()));
    }
    if let Some(to_date) = query.to_date {
        pairs.push(("toDate", to_date.value().to_string()));
    }
    pairs.extend(pagination_query(&query.pagination));
    pairs
}

/// Query pairs for today's received messages.
pub fn receive_live_query(query: &ReceiveLiveQuery) -> Vec<(&'static str, String)> {
    let mut pairs = pagination_query(&query.pagination);
    if let Some(sort_by_newest) = query.sort_by_newest {
        pairs.push(("sortByNewest", sort_by_newest.to_string()));
    }
    pairs
}

/// Query pairs for the latest received messages.
pub fn latest_receive_query(count: Option<u32>) -> Vec<(&'static str, String)> {
    match count {
        Some(count) => vec![("count", count.to_string())],
        None => Vec::new(),
    }
}
