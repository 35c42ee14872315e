//! Grouped operation handles, mirroring the provider's send / report /
//! settings endpoint families. The flat [`SmsIr`](super::SmsIr) methods
//! delegate here, so both facades share one implementation per operation.

use crate::domain::{
    ArchiveQuery, Envelope, LineNumber, MessageId, MessageReport, PackId, PackSummary, Pagination,
    ReceiveLiveQuery, ReceivedMessage, ScheduledDeletion, SendBulk, SendByUrl, SendLikeToLike,
    SendPack, SendVerifyCode, SentMessage,
};
use crate::transport::{self, HttpMethod, TransportError};

use super::{Dispatcher, SmsIrError};

fn encode_error(err: TransportError) -> SmsIrError {
    SmsIrError::Encode(Box::new(err))
}

#[derive(Clone, Copy)]
/// Send operations: bulk, like-to-like, scheduled deletion, verification
/// codes, and the legacy URL endpoint.
pub struct SendApi<'a> {
    pub(super) dispatch: &'a Dispatcher,
    pub(super) line_number: LineNumber,
}

impl SendApi<'_> {
    /// POST `/v1/send/bulk`: one message to many recipients.
    pub async fn bulk(&self, request: SendBulk) -> Result<Envelope<SendPack>, SmsIrError> {
        let body =
            transport::encode_send_bulk_body(&request, self.line_number).map_err(encode_error)?;
        self.dispatch
            .request_envelope(HttpMethod::Post, transport::SEND_BULK_PATH, &[], Some(body))
            .await
    }

    /// POST `/v1/send/liketolike`: paired messages and recipients.
    pub async fn like_to_like(
        &self,
        request: SendLikeToLike,
    ) -> Result<Envelope<SendPack>, SmsIrError> {
        let body = transport::encode_like_to_like_body(&request, self.line_number)
            .map_err(encode_error)?;
        self.dispatch
            .request_envelope(
                HttpMethod::Post,
                transport::SEND_LIKE_TO_LIKE_PATH,
                &[],
                Some(body),
            )
            .await
    }

    /// DELETE `/v1/send/scheduled/{packId}`: cancel a scheduled pack.
    pub async fn delete_scheduled(
        &self,
        pack_id: &PackId,
    ) -> Result<Envelope<ScheduledDeletion>, SmsIrError> {
        let path = transport::delete_scheduled_path(pack_id);
        self.dispatch
            .request_envelope(HttpMethod::Delete, &path, &[], None)
            .await
    }

    /// POST `/v1/send/verify/`: template-based verification code.
    pub async fn verify_code(
        &self,
        request: SendVerifyCode,
    ) -> Result<Envelope<SentMessage>, SmsIrError> {
        let body = transport::encode_verify_body(&request).map_err(encode_error)?;
        self.dispatch
            .request_envelope(HttpMethod::Post, transport::SEND_VERIFY_PATH, &[], Some(body))
            .await
    }

    /// GET `/v1/send`: the legacy query-string send.
    pub async fn by_url(&self, request: SendByUrl) -> Result<Envelope<SentMessage>, SmsIrError> {
        let query =
            transport::send_by_url_query(&request, self.dispatch.api_key(), self.line_number);
        self.dispatch
            .request_envelope(HttpMethod::Get, transport::SEND_BY_URL_PATH, &query, None)
            .await
    }
}

#[derive(Clone, Copy)]
/// Delivery and receive report operations.
pub struct ReportApi<'a> {
    pub(super) dispatch: &'a Dispatcher,
}

impl ReportApi<'_> {
    /// GET `/v1/send/{messageId}`: delivery report for one message.
    pub async fn message(
        &self,
        message_id: MessageId,
    ) -> Result<Envelope<MessageReport>, SmsIrError> {
        let path = transport::report_message_path(message_id);
        self.dispatch
            .request_envelope(HttpMethod::Get, &path, &[], None)
            .await
    }

    /// GET `/v1/send/live`: messages sent today.
    pub async fn today_live(
        &self,
        pagination: Pagination,
    ) -> Result<Envelope<Vec<MessageReport>>, SmsIrError> {
        let query = transport::pagination_query(&pagination);
        self.dispatch
            .request_envelope(HttpMethod::Get, transport::REPORT_TODAY_LIVE_PATH, &query, None)
            .await
    }

    /// GET `/v1/send/archive`: sent messages within a date range.
    pub async fn archive(
        &self,
        query: ArchiveQuery,
    ) -> Result<Envelope<Vec<MessageReport>>, SmsIrError> {
        let query = transport::archive_query(&query);
        self.dispatch
            .request_envelope(HttpMethod::Get, transport::REPORT_ARCHIVE_PATH, &query, None)
            .await
    }

    /// GET `/v1/send/pack`: packs created today.
    pub async fn daily_pack(
        &self,
        pagination: Pagination,
    ) -> Result<Envelope<Vec<PackSummary>>, SmsIrError> {
        let query = transport::pagination_query(&pagination);
        self.dispatch
            .request_envelope(HttpMethod::Get, transport::REPORT_DAILY_PACK_PATH, &query, None)
            .await
    }

    /// GET `/v1/send/pack/{packId}`: all messages of one pack.
    pub async fn pack_by_id(
        &self,
        pack_id: &PackId,
    ) -> Result<Envelope<Vec<MessageReport>>, SmsIrError> {
        let path = transport::report_pack_path(pack_id);
        self.dispatch
            .request_envelope(HttpMethod::Get, &path, &[], None)
            .await
    }

    /// GET `/v1/receive/latest`: latest received messages.
    pub async fn latest_receive(
        &self,
        count: Option<u32>,
    ) -> Result<Envelope<Vec<ReceivedMessage>>, SmsIrError> {
        let query = transport::latest_receive_query(count);
        self.dispatch
            .request_envelope(HttpMethod::Get, transport::RECEIVE_LATEST_PATH, &query, None)
            .await
    }

    /// GET `/v1/receive/live`: messages received today.
    pub async fn receive_live(
        &self,
        query: ReceiveLiveQuery,
    ) -> Result<Envelope<Vec<ReceivedMessage>>, SmsIrError> {
        let query = transport::receive_live_query(&query);
        self.dispatch
            .request_envelope(HttpMethod::Get, transport::RECEIVE_LIVE_PATH, &query, None)
            .await
    }

    /// GET `/v1/receive/archive`: received messages within a date range.
    pub async fn receive_archive(
        &self,
        query: ArchiveQuery,
    ) -> Result<Envelope<Vec<ReceivedMessage>>, SmsIrError> {
        let query = transport::archive_query(&query);
        self.dispatch
            .request_envelope(HttpMethod::Get, transport::RECEIVE_ARCHIVE_PATH, &query, None)
            .await
    }
}

#[derive(Clone, Copy)]
/// Account settings operations.
pub struct SettingsApi<'a> {
    pub(super) dispatch: &'a Dispatcher,
}

impl SettingsApi<'_> {
    /// GET `/v1/credit`: current credit balance.
    pub async fn credit(&self) -> Result<Envelope<f64>, SmsIrError> {
        self.dispatch
            .request_envelope(HttpMethod::Get, transport::CREDIT_PATH, &[], None)
            .await
    }

    /// GET `/v1/line`: line numbers enabled for the account.
    pub async fn line_numbers(&self) -> Result<Envelope<Vec<u64>>, SmsIrError> {
        self.dispatch
            .request_envelope(HttpMethod::Get, transport::LINE_NUMBERS_PATH, &[], None)
            .await
    }
}
