//! Typed Rust client for the SMS.IR HTTP API v2.
//!
//! The crate is layered: a domain layer of strong types, a transport layer
//! for wire-format quirks, and a small client layer orchestrating requests.
//! Every operation issues exactly one HTTP call and returns the provider's
//! `{status, message, data}` envelope; HTTP and transport failures surface
//! as [`SmsIrError`].
//!
//! ```rust,no_run
//! use smsir::{Credentials, MessageText, Mobile, SendBulk, SmsIr};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsir::SmsIrError> {
//!     let client = SmsIr::new(Credentials::new("...", 30007732000000)?);
//!     let request = SendBulk::new(
//!         MessageText::new("hello")?,
//!         vec![Mobile::new("09123456789")?],
//!     )?;
//!     let envelope = client.send_bulk(request).await?;
//!     println!("pack: {:?}", envelope.data);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, ReportApi, SendApi, SettingsApi, SmsIr, SmsIrBuilder, SmsIrError};
pub use domain::{
    ApiKey, ApiStatus, ArchiveQuery, DeliveryState, Envelope, LineNumber, MessageId, MessageReport,
    MessageText, Mobile, PackId, PackSummary, Pagination, ReceiveLiveQuery, ReceivedMessage,
    SEND_MAX_RECIPIENTS, ScheduledDeletion, SendBulk, SendByUrl, SendLikeToLike, SendPack,
    SendVerifyCode, SentMessage, TemplateId, TemplateParameter, UnixTimestamp, Username,
    ValidationError,
};
