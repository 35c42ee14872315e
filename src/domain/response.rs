use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
/// API-level status carried in every response envelope.
///
/// The raw integer is preserved as-is even when unknown to this crate; `1`
/// is the documented success value.
pub struct ApiStatus(i32);

impl ApiStatus {
    /// The documented success status.
    pub const SUCCESS: ApiStatus = ApiStatus(1);

    /// Construct a status from its integer representation.
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the integer status as provided by SMS.IR.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Whether this status signals success.
    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Uniform response envelope returned by every SMS.IR endpoint:
/// `{status, message, data}`.
///
/// `data` is `None` when the provider reports a non-success `status` with a
/// `null` payload inside a 2xx response.
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub status: ApiStatus,
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Whether the API-level status signals success.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Consume the envelope and take the payload, if any.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Result of a bulk or like-to-like send: the pack created by the provider.
pub struct SendPack {
    pub pack_id: String,
    pub message_ids: Vec<u64>,
    pub cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Result of a single-message send (verification code or legacy URL send).
pub struct SentMessage {
    pub message_id: u64,
    pub cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Result of deleting a scheduled pack: the credit refunded and the number
/// of messages removed.
pub struct ScheduledDeletion {
    pub returned_credit_count: f64,
    pub sms_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
/// Delivery state of a sent message.
///
/// The raw integer is preserved as-is; the provider extends this set without
/// notice.
pub struct DeliveryState(i32);

impl DeliveryState {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn as_i32(self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One sent message as returned by the delivery-report endpoints.
pub struct MessageReport {
    pub message_id: u64,
    pub mobile: u64,
    pub message_text: String,
    pub send_date_time: i64,
    pub line_number: u64,
    pub cost: f64,
    pub delivery_state: DeliveryState,
    #[serde(default)]
    pub delivery_date_time: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Summary of one pack as returned by the daily-pack report.
pub struct PackSummary {
    pub pack_id: String,
    pub recipient_count: u64,
    pub creation_date_time: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One inbound message as returned by the receive-report endpoints.
///
/// `receive_return_id` is absent on the live endpoint.
pub struct ReceivedMessage {
    #[serde(default)]
    pub receive_return_id: Option<u64>,
    pub message_text: String,
    pub number: u64,
    pub mobile: u64,
    pub received_date_time: i64,
}
