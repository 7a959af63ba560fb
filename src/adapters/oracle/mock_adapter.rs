//! Mock oracle for demo mode and tests.
//!
//! Returns canned replies without network access. Counts calls and keeps the
//! last prompt so tests can assert on what would have been sent.

use crate::domain::DomainError;
use crate::ports::{OraclePort, OraclePrompt};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

const DEMO_VISION_REPLY: &str = r#"{
  "skin_tone_analysis": {
    "detected_tone": "Medium",
    "undertone": "warm",
    "color_harmony_explanation": "[DEMO] Warm undertones pair well with saturated jewel tones."
  },
  "outfit_recommendations": {
    "tops": ["[DEMO] Royal blue silk shirt", "[DEMO] Crimson knit top"],
    "bottoms": ["[DEMO] Charcoal tailored trousers"],
    "shoes": ["[DEMO] Tan leather loafers"],
    "dresses": ["[DEMO] Plum wrap dress"],
    "outerwear": ["[DEMO] Forest green blazer"]
  },
  "color_palette": {
    "best_colors": ["Royal Blue", "Crimson", "Forest Green", "Plum", "Teal"],
    "metal_tones": ["Gold", "Bronze"],
    "colors_to_avoid": ["Brown", "Muted Olive"]
  },
  "accessories": {
    "jewelry": ["[DEMO] Gold hoop earrings"],
    "bags": ["[DEMO] Structured tan tote"],
    "watches": ["[DEMO] Gold-tone analog watch"],
    "other": ["[DEMO] Silk scarf in teal"]
  },
  "hairstyle_suggestions": {
    "recommended_styles": ["[DEMO] Soft layered cut"],
    "maintenance_tips": ["[DEMO] Trim every 8 weeks"],
    "color_recommendations": ["[DEMO] Warm chocolate brown"]
  },
  "makeup_tips": {
    "foundation": ["[DEMO] Warm beige with golden undertone"],
    "lipstick": ["[DEMO] Berry red"],
    "eyeshadow": ["[DEMO] Bronze and plum"]
  },
  "shopping_links": {
    "amazon_in": ["royal blue silk shirt"],
    "myntra": ["plum wrap dress"],
    "ajio": ["forest green blazer"]
  },
  "styling_tips": ["[DEMO] Anchor bold colours with neutral bottoms"],
  "confidence_boosters": ["[DEMO] Jewel tones brighten a warm complexion"]
}"#;

const DEMO_TEXT_REPLY: &str = "[DEMO] Build outfits around your primary palette, keep accessories \
     in a single metal tone, and use accent colours sparingly for contrast.";

enum MockBehaviour {
    Canned,
    Reply(String),
    Fail(String),
}

/// Mock oracle.
///
/// Simulates network latency with a configurable delay.
pub struct MockOracle {
    delay_ms: u64,
    behaviour: MockBehaviour,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<OraclePrompt>>,
}

impl MockOracle {
    /// Canned demo replies, default delay (100ms).
    pub fn new() -> Self {
        Self::build(100, MockBehaviour::Canned)
    }

    /// Canned demo replies with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self::build(delay_ms, MockBehaviour::Canned)
    }

    /// Always answers with `reply`, no delay.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self::build(0, MockBehaviour::Reply(reply.into()))
    }

    /// Always fails with an `OracleTransport` error, no delay.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::build(0, MockBehaviour::Fail(message.into()))
    }

    fn build(delay_ms: u64, behaviour: MockBehaviour) -> Self {
        Self {
            delay_ms,
            behaviour,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<OraclePrompt> {
        self.last_prompt
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Default for MockOracle {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl OraclePort for MockOracle {
    async fn complete(&self, prompt: &OraclePrompt) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_prompt
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(prompt.clone());

        info!(
            vision = prompt.is_vision(),
            prompt_len = prompt.user.len(),
            "[MOCK] Simulating oracle call"
        );

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        match &self.behaviour {
            MockBehaviour::Canned if prompt.is_vision() => Ok(DEMO_VISION_REPLY.to_string()),
            MockBehaviour::Canned => Ok(DEMO_TEXT_REPLY.to_string()),
            MockBehaviour::Reply(reply) => Ok(reply.clone()),
            MockBehaviour::Fail(message) => Err(DomainError::OracleTransport(message.clone())),
        }
    }
}
