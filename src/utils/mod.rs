pub mod chain_normalizer;
pub mod string_utils;

// Re-export commonly used functions
pub use chain_normalizer::normalize_scheme;
pub use string_utils::mask_address;
