use serde::Serialize;

use crate::domain::{
    ApiKey, LineNumber, PackId, SendBulk, SendByUrl, SendLikeToLike, SendVerifyCode,
};

use super::envelope::TransportError;

pub const SEND_BULK_PATH: &str = "/v1/send/bulk";
pub const SEND_LIKE_TO_LIKE_PATH: &str = "/v1/send/liketolike";
pub const SEND_VERIFY_PATH: &str = "/v1/send/verify/";
pub const SEND_BY_URL_PATH: &str = "/v1/send";

/// Path for deleting one scheduled pack.
pub fn delete_scheduled_path(pack_id: &PackId) -> String {
    format!("/v1/send/scheduled/{}", pack_id.as_str())
}

// The bulk endpoint mixes casings on the wire: `lineNumber` is camelCase
// while the message fields are PascalCase.
#[derive(Debug, Serialize)]
struct SendBulkWire<'a> {
    #[serde(rename = "lineNumber")]
    line_number: u64,
    #[serde(rename = "MessageText")]
    message_text: &'a str,
    #[serde(rename = "Mobiles")]
    mobiles: Vec<&'a str>,
    #[serde(rename = "SendDateTime", skip_serializing_if = "Option::is_none")]
    send_date_time: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendLikeToLikeWire<'a> {
    line_number: u64,
    message_texts: Vec<&'a str>,
    mobiles: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    send_date_time: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendVerifyCodeWire<'a> {
    mobile: &'a str,
    template_id: u32,
    parameters: Vec<TemplateParameterWire<'a>>,
}

#[derive(Debug, Serialize)]
struct TemplateParameterWire<'a> {
    name: &'a str,
    value: &'a str,
}

/// Encode the `/v1/send/bulk` JSON body. The request's line number wins over
/// the client default.
pub fn encode_send_bulk_body(
    request: &SendBulk,
    default_line: LineNumber,
) -> Result<String, TransportError> {
    let wire = SendBulkWire {
        line_number: request.line_number().unwrap_or(default_line).value(),
        message_text: request.message().as_str(),
        mobiles: request.mobiles().iter().map(|m| m.as_str()).collect(),
        send_date_time: request.send_at().map(|at| at.value()),
    };
    Ok(serde_json::to_string(&wire)?)
}

/// Encode the `/v1/send/liketolike` JSON body.
pub fn encode_like_to_like_body(
    request: &SendLikeToLike,
    default_line: LineNumber,
) -> Result<String, TransportError> {
    let wire = SendLikeToLikeWire {
        line_number: request.line_number().unwrap_or(default_line).value(),
        message_texts: request.messages().iter().map(|t| t.as_str()).collect(),
        mobiles: request.mobiles().iter().map(|m| m.as_str()).collect(),
        send_date_time: request.send_at().map(|at| at.value()),
    };
    Ok(serde_json::to_string(&wire)?)
}

/// Encode the `/v1/send/verify/` JSON body.
pub fn encode_verify_body(request: &SendVerifyCode) -> Result<String, TransportError> {
    let wire = SendVerifyCodeWire {
        mobile: request.mobile().as_str(),
        template_id: request.template_id().value(),
        parameters: request
            .parameters()
            .iter()
            .map(|p| TemplateParameterWire {
                name: p.name(),
                value: p.value(),
            })
            .collect(),
    };
    Ok(serde_json::to_string(&wire)?)
}

/// Query pairs for the legacy `GET /v1/send` endpoint. The API key is sent
/// as the `password` parameter, which is how the v1 panel API authenticated.
pub fn send_by_url_query(
    request: &SendByUrl,
    api_key: &ApiKey,
    default_line: LineNumber,
) -> Vec<(&'static str, String)> {
    vec![
        ("username", request.username().as_str().to_owned()),
        ("password", api_key.as_str().to_owned()),
        (
            "line",
            request
                .line_number()
                .unwrap_or(default_line)
                .value()
                .to_string(),
        ),
        ("mobile", request.mobile().as_str().to_owned()),
        ("text", request.text().as_str().to_owned()),
    ]
}
