//! Serialization of hand-off tokens to and from the scannable code payload.
//!
//! Two JSON shapes exist in the wild: the current share-code shape and a
//! legacy return shape issued by an earlier generation of the app. Decoding
//! tries them in that fixed order and reports anything else as
//! unrecognized; it never panics on malformed input.

use serde::Deserialize;
use serde_json::json;

use crate::handshake::HandshakeError;
use crate::ids::{BookId, ShareId, UserId};

/// A structurally valid scanned payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScannedToken {
    /// Current shape: the opaque share id minted by the mediator.
    Share(ShareId),
    /// Legacy return codes still held on printed or screenshotted QR codes.
    LegacyReturn { book_uid: BookId, lender_uid: UserId },
}

#[derive(Debug, Deserialize)]
struct ShareCodePayload {
    #[serde(rename = "shareId")]
    share_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LegacyReturnPayload {
    #[serde(rename = "bookUid")]
    book_uid: Option<String>,
    #[serde(rename = "lenderUid")]
    lender_uid: Option<String>,
}

/// Renders a share id into the payload embedded in the scannable code.
pub fn encode_share_code(share_id: &ShareId) -> String {
    json!({ "shareId": share_id.as_str() }).to_string()
}

/// Parses a scanned payload, trying the current shape first, then the
/// legacy shape. Null or empty fields do not count as a structural match.
pub fn decode(raw: &str) -> Result<ScannedToken, HandshakeError> {
    if let Ok(payload) = serde_json::from_str::<ShareCodePayload>(raw) {
        if let Some(share_id) = payload.share_id.filter(|s| !s.is_empty()) {
            return Ok(ScannedToken::Share(ShareId::from(share_id)));
        }
    }

    if let Ok(payload) = serde_json::from_str::<LegacyReturnPayload>(raw) {
        let book_uid = payload.book_uid.filter(|s| !s.is_empty());
        let lender_uid = payload.lender_uid.filter(|s| !s.is_empty());
        if let (Some(book_uid), Some(lender_uid)) = (book_uid, lender_uid) {
            return Ok(ScannedToken::LegacyReturn {
                book_uid: BookId::from(book_uid),
                lender_uid: UserId::from(lender_uid),
            });
        }
    }

    Err(HandshakeError::NotRecognized)
}
