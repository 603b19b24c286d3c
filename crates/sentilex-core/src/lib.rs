//! Lexicon-driven sentiment scoring for professional English text.
//!
//! ```
//! let results = sentilex_core::analyze("Thank you for your time");
//! assert_eq!(results[0].sentiment, sentilex_core::Sentiment::Appreciation);
//! ```

pub mod analyzer;
pub mod config;
pub mod context;
pub mod dimensions;
pub mod fallback;
pub mod lexicon;
pub mod matcher;
pub mod scoring;
pub mod types;

pub use analyzer::{analyze, AnalysisReport, CategoryTrace, SentimentAnalyzer};
pub use config::AnalyzerConfig;
pub use context::{analyze_context, classify, CommunicationPattern, ContextAnalysis, TextMetrics};
pub use dimensions::{
    emotion_intensity, summarize, wheel_ring, BaseEmotion, EmotionalProfile, Level, Pad, Polarity,
    WheelRing,
};
pub use fallback::FallbackTier;
pub use lexicon::{validate, Lexicon, LexiconIssue, LexiconReport};
pub use types::{CommunicationContext, Intensity, Sentiment, SentimentResult, UnknownSentiment};
