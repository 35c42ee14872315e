//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    ArchiveQuery, Pagination, ReceiveLiveQuery, SEND_MAX_RECIPIENTS, SendBulk, SendByUrl,
    SendLikeToLike, SendVerifyCode, TemplateParameter,
};
pub use response::{
    ApiStatus, DeliveryState, Envelope, MessageReport, PackSummary, ReceivedMessage, ScheduledDeletion,
    SendPack, SentMessage,
};
pub use validation::ValidationError;
pub use value::{
    ApiKey, LineNumber, MessageId, MessageText, Mobile, PackId, TemplateId, UnixTimestamp, Username,
};
