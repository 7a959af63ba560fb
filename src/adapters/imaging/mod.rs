//! Image adapters. Tone classification stub and payload encoding.

pub mod base64_encoder;
pub mod random_classifier;

pub use base64_encoder::Base64ImageEncoder;
pub use random_classifier::RandomToneClassifier;
