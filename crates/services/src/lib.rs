#![forbid(unsafe_code)]

pub mod assessment_service;
pub mod delay;
pub mod error;
pub mod text_generation;

pub use focus_core::Clock;

pub use assessment_service::AssessmentService;
pub use delay::DelaySampler;
pub use error::{TextGenerationError, UNAVAILABLE_MESSAGE};
pub use text_generation::{ChatMessage, ChatRole, TextGenerationConfig, TextGenerationService};
