//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the palette catalog and input rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod palette;
pub mod recommendation;
pub mod validation;

pub use entities::{
    ColorPalette, EncodedImage, ImageReference, RecommendationRequest, RecommendationResult,
    SkinAnalysis, SkinTone, ToneAssessment, UserInputs,
};
pub use errors::{DomainError, InputField};
pub use palette::{palette_for, palette_for_label};
pub use recommendation::{
    Accessories, HairstyleSuggestions, MakeupTips, OutfitRecommendations, PaletteAdvice,
    ShoppingLinks, SkinToneAnalysis, StyleRecommendation,
};
pub use validation::{Enumerations, InputValidator, ValidatedInput};
