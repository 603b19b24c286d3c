//! Shared engine types: sentiment ids, communication contexts, results.
//!
//! These are the values that cross the engine boundary. The presentation layer
//! picks colors and labels from `Sentiment`, so the enumeration is closed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentiment category id.
///
/// Declaration order is also the tie-break order for equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    // Positive
    Satisfaction,
    Appreciation,
    Confidence,
    Enthusiasm,
    Optimism,
    Relief,
    Pride,
    // Negative
    Disappointment,
    Frustration,
    Concern,
    Anxiety,
    Dissatisfaction,
    Confusion,
    Overwhelm,
    // Neutral / professional
    Neutrality,
    Urgency,
    Formality,
    Inquiry,
    Consideration,
    Assertiveness,
    Determination,
}

impl Sentiment {
    pub const ALL: [Sentiment; 21] = [
        Sentiment::Satisfaction,
        Sentiment::Appreciation,
        Sentiment::Confidence,
        Sentiment::Enthusiasm,
        Sentiment::Optimism,
        Sentiment::Relief,
        Sentiment::Pride,
        Sentiment::Disappointment,
        Sentiment::Frustration,
        Sentiment::Concern,
        Sentiment::Anxiety,
        Sentiment::Dissatisfaction,
        Sentiment::Confusion,
        Sentiment::Overwhelm,
        Sentiment::Neutrality,
        Sentiment::Urgency,
        Sentiment::Formality,
        Sentiment::Inquiry,
        Sentiment::Consideration,
        Sentiment::Assertiveness,
        Sentiment::Determination,
    ];

    /// Lower-case id, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Satisfaction => "satisfaction",
            Sentiment::Appreciation => "appreciation",
            Sentiment::Confidence => "confidence",
            Sentiment::Enthusiasm => "enthusiasm",
            Sentiment::Optimism => "optimism",
            Sentiment::Relief => "relief",
            Sentiment::Pride => "pride",
            Sentiment::Disappointment => "disappointment",
            Sentiment::Frustration => "frustration",
            Sentiment::Concern => "concern",
            Sentiment::Anxiety => "anxiety",
            Sentiment::Dissatisfaction => "dissatisfaction",
            Sentiment::Confusion => "confusion",
            Sentiment::Overwhelm => "overwhelm",
            Sentiment::Neutrality => "neutrality",
            Sentiment::Urgency => "urgency",
            Sentiment::Formality => "formality",
            Sentiment::Inquiry => "inquiry",
            Sentiment::Consideration => "consideration",
            Sentiment::Assertiveness => "assertiveness",
            Sentiment::Determination => "determination",
        }
    }

    /// Upper-case category label, e.g. `SATISFACTION`.
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown sentiment id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sentiment '{0}'")]
pub struct UnknownSentiment(pub String);

impl FromStr for Sentiment {
    type Err = UnknownSentiment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Sentiment::ALL
            .iter()
            .copied()
            .find(|sentiment| sentiment.as_str() == needle)
            .ok_or_else(|| UnknownSentiment(s.to_string()))
    }
}

/// Inferred setting of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommunicationContext {
    Email,
    Meeting,
    Interview,
    Feedback,
    Project,
    Negotiation,
    Presentation,
    Networking,
    Conflict,
    Leadership,
}

impl CommunicationContext {
    pub const ALL: [CommunicationContext; 10] = [
        CommunicationContext::Email,
        CommunicationContext::Meeting,
        CommunicationContext::Interview,
        CommunicationContext::Feedback,
        CommunicationContext::Project,
        CommunicationContext::Negotiation,
        CommunicationContext::Presentation,
        CommunicationContext::Networking,
        CommunicationContext::Conflict,
        CommunicationContext::Leadership,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommunicationContext::Email => "EMAIL",
            CommunicationContext::Meeting => "MEETING",
            CommunicationContext::Interview => "INTERVIEW",
            CommunicationContext::Feedback => "FEEDBACK",
            CommunicationContext::Project => "PROJECT",
            CommunicationContext::Negotiation => "NEGOTIATION",
            CommunicationContext::Presentation => "PRESENTATION",
            CommunicationContext::Networking => "NETWORKING",
            CommunicationContext::Conflict => "CONFLICT",
            CommunicationContext::Leadership => "LEADERSHIP",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CommunicationContext::Email => "Written professional correspondence",
            CommunicationContext::Meeting => "Synchronous group discussions",
            CommunicationContext::Interview => "Assessment and evaluation conversations",
            CommunicationContext::Feedback => "Performance and quality evaluations",
            CommunicationContext::Project => "Task and deliverable discussions",
            CommunicationContext::Negotiation => "Agreement and compromise discussions",
            CommunicationContext::Presentation => "Information delivery to audiences",
            CommunicationContext::Networking => "Relationship building interactions",
            CommunicationContext::Conflict => "Disagreement resolution contexts",
            CommunicationContext::Leadership => "Guidance and direction communications",
        }
    }
}

impl fmt::Display for CommunicationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative bucket derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    /// <40 low, <70 medium, else high.
    pub fn from_score(score: u8) -> Self {
        if score < 40 {
            Intensity::Low
        } else if score < 70 {
            Intensity::Medium
        } else {
            Intensity::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected sentiment. The returned list is owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    /// Always within 0..=100.
    pub score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Intensity>,
    /// Contexts associated with the matched terms, dominant first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Vec<String>>,
}

impl SentimentResult {
    pub fn new(sentiment: Sentiment, score: u8) -> Self {
        let score = score.min(100);
        Self {
            sentiment,
            score,
            category: Some(sentiment.label()),
            intensity: Some(Intensity::from_score(score)),
            context: None,
        }
    }

    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn with_contexts(mut self, contexts: Vec<String>) -> Self {
        self.context = if contexts.is_empty() { None } else { Some(contexts) };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_roundtrips_through_str() {
        for s in Sentiment::ALL {
            assert_eq!(s.as_str().parse::<Sentiment>().unwrap(), s);
        }
        assert!("joy".parse::<Sentiment>().is_err());
        assert_eq!(" Urgency ".parse::<Sentiment>().unwrap(), Sentiment::Urgency);
    }

    #[test]
    fn intensity_buckets() {
        assert_eq!(Intensity::from_score(0), Intensity::Low);
        assert_eq!(Intensity::from_score(39), Intensity::Low);
        assert_eq!(Intensity::from_score(40), Intensity::Medium);
        assert_eq!(Intensity::from_score(69), Intensity::Medium);
        assert_eq!(Intensity::from_score(70), Intensity::High);
        assert_eq!(Intensity::from_score(100), Intensity::High);
    }

    #[test]
    fn result_serializes_without_empty_fields() {
        let r = SentimentResult::new(Sentiment::Urgency, 72);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["sentiment"], "urgency");
        assert_eq!(json["score"], 72);
        assert_eq!(json["category"], "URGENCY");
        assert_eq!(json["intensity"], "high");
        assert!(json.get("context").is_none());
    }

    #[test]
    fn context_serializes_upper_case() {
        let v = serde_json::to_value(CommunicationContext::Email).unwrap();
        assert_eq!(v, "EMAIL");
    }
}
