//! Oracle adapters. Implement OraclePort for LLM access.
//!
//! Provides an OpenAI-compatible HTTP adapter and a mock adapter for demo mode and tests.

pub mod mock_adapter;
pub mod openai_adapter;

pub use mock_adapter::MockOracle;
pub use openai_adapter::OpenAiOracle;
