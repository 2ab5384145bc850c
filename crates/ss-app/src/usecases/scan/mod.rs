pub mod route_scanned_code;

pub use route_scanned_code::{RouteScannedCodeUseCase, ScanRoute};
