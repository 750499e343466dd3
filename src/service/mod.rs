pub mod recognizer;
pub mod scan_session;

pub use recognizer::{classify, AddressRecognizer};
pub use scan_session::{IgnoreReason, ScanDecision, ScanSession};
