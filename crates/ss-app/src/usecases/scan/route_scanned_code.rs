use tracing::debug;

use ss_core::ids::{BookId, ShareId, UserId};
use ss_core::token::{self, ScannedToken};
use ss_core::HandshakeError;

/// Where a scanned code should send the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanRoute {
    /// Plain product barcode: an ISBN for the catalog lookup flow.
    Isbn(String),
    /// Current share code: open the accept screen for this token.
    AcceptTransaction(ShareId),
    /// Legacy return code from an earlier generation of the app; the ids
    /// let a fallback screen watch the local ledger instead.
    LegacyReturn { book_uid: BookId, lender_uid: UserId },
}

/// Dispatches whatever the camera pipeline produced.
///
/// The pipeline hands over a raw string and whether it came from a
/// structured code; everything else happens here so that an unreadable
/// code surfaces as a typed outcome the screen can turn into a re-scan
/// prompt, never as a panic.
#[derive(Default)]
pub struct RouteScannedCodeUseCase;

impl RouteScannedCodeUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(
        &self,
        raw: &str,
        is_structured_code: bool,
    ) -> Result<ScanRoute, HandshakeError> {
        if !is_structured_code {
            debug!("plain barcode scanned, routing to catalog lookup");
            return Ok(ScanRoute::Isbn(raw.trim().to_string()));
        }

        match token::decode(raw)? {
            ScannedToken::Share(share_id) => Ok(ScanRoute::AcceptTransaction(share_id)),
            ScannedToken::LegacyReturn {
                book_uid,
                lender_uid,
            } => Ok(ScanRoute::LegacyReturn {
                book_uid,
                lender_uid,
            }),
        }
    }
}
