//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by the web adapter into the application
//! - Outbound: Called by the application into infrastructure

pub mod inbound;
pub mod outbound;

pub use inbound::RecommendationPort;
pub use outbound::{
    ImageEncoderPort, OraclePort, OraclePrompt, StyleQuery, StylistPort, ToneClassifierPort,
};
