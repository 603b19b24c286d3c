//! Polarity groups and pleasure/arousal/dominance placement of sentiments,
//! plus a score-weighted summary of a result list.
//!
//! Also carries the emotion wheel and the base-emotion intensity ladder. Both
//! are descriptive: scoring never reads them.

use crate::types::{Sentiment, SentimentResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

/// Position on one PAD axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    Neutral,
    Low,
}

impl Level {
    pub fn value(&self) -> f64 {
        match self {
            Level::High => 1.0,
            Level::Neutral => 0.0,
            Level::Low => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pad {
    pub pleasure: Level,
    pub arousal: Level,
    pub dominance: Level,
}

impl Sentiment {
    pub fn polarity(&self) -> Polarity {
        use Sentiment::*;
        match self {
            Satisfaction | Appreciation | Confidence | Enthusiasm | Optimism | Relief | Pride => {
                Polarity::Positive
            }
            Disappointment | Frustration | Concern | Anxiety | Dissatisfaction | Confusion
            | Overwhelm => Polarity::Negative,
            Neutrality | Urgency | Formality | Inquiry | Consideration | Assertiveness
            | Determination => Polarity::Neutral,
        }
    }

    /// Sentiments not placed on an axis sit at its neutral point.
    pub fn pad(&self) -> Pad {
        use Sentiment::*;
        let pleasure = match self {
            Satisfaction | Appreciation | Enthusiasm | Confidence | Optimism => Level::High,
            Disappointment | Frustration | Concern | Anxiety | Dissatisfaction => Level::Low,
            _ => Level::Neutral,
        };
        let arousal = match self {
            Urgency | Enthusiasm | Frustration | Anxiety | Assertiveness => Level::High,
            Disappointment | Confusion => Level::Low,
            _ => Level::Neutral,
        };
        let dominance = match self {
            Confidence | Assertiveness | Determination => Level::High,
            Anxiety | Concern | Confusion | Overwhelm => Level::Low,
            _ => Level::Neutral,
        };
        Pad {
            pleasure,
            arousal,
            dominance,
        }
    }
}

/// The eight base emotions the intensity ladder is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseEmotion {
    Joy,
    Trust,
    Fear,
    Surprise,
    Sadness,
    Disgust,
    Anger,
    Anticipation,
}

/// Ring of the emotion wheel, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WheelRing {
    Primary,
    Secondary,
    Tertiary,
}

pub const EMOTION_WHEEL: [(WheelRing, &[&str]); 3] = [
    (
        WheelRing::Primary,
        &["joy", "trust", "fear", "surprise", "sadness", "disgust", "anger", "anticipation"],
    ),
    (
        WheelRing::Secondary,
        &[
            "satisfaction",
            "confidence",
            "anxiety",
            "interest",
            "disappointment",
            "dissatisfaction",
            "frustration",
            "optimism",
        ],
    ),
    (
        WheelRing::Tertiary,
        &[
            "enthusiasm",
            "appreciation",
            "concern",
            "curiosity",
            "regret",
            "discomfort",
            "irritation",
            "eagerness",
        ],
    ),
];

/// (emotion, base, level 1..=3). Three rungs per base emotion.
pub const EMOTION_INTENSITY: &[(&str, BaseEmotion, u8)] = &[
    ("outrage", BaseEmotion::Anger, 3),
    ("anger", BaseEmotion::Anger, 2),
    ("annoyance", BaseEmotion::Anger, 1),
    ("enthusiasm", BaseEmotion::Joy, 3),
    ("satisfaction", BaseEmotion::Joy, 2),
    ("contentment", BaseEmotion::Joy, 1),
    ("panic", BaseEmotion::Fear, 3),
    ("anxiety", BaseEmotion::Fear, 2),
    ("concern", BaseEmotion::Fear, 1),
    ("admiration", BaseEmotion::Trust, 3),
    ("confidence", BaseEmotion::Trust, 2),
    ("acknowledgment", BaseEmotion::Trust, 1),
    ("despair", BaseEmotion::Sadness, 3),
    ("disappointment", BaseEmotion::Sadness, 2),
    ("regret", BaseEmotion::Sadness, 1),
    ("repulsion", BaseEmotion::Disgust, 3),
    ("disapproval", BaseEmotion::Disgust, 2),
    ("discomfort", BaseEmotion::Disgust, 1),
    ("amazement", BaseEmotion::Surprise, 3),
    ("interest", BaseEmotion::Surprise, 2),
    ("curiosity", BaseEmotion::Surprise, 1),
    ("eagerness", BaseEmotion::Anticipation, 3),
    ("anticipation", BaseEmotion::Anticipation, 2),
    ("expectation", BaseEmotion::Anticipation, 1),
];

pub fn wheel_ring(emotion: &str) -> Option<WheelRing> {
    EMOTION_WHEEL
        .iter()
        .find(|(_, names)| names.contains(&emotion))
        .map(|(ring, _)| *ring)
}

/// Base emotion and rung of a named emotion on the intensity ladder.
pub fn emotion_intensity(emotion: &str) -> Option<(BaseEmotion, u8)> {
    EMOTION_INTENSITY
        .iter()
        .find(|(name, _, _)| *name == emotion)
        .map(|(_, base, level)| (*base, *level))
}

impl Sentiment {
    /// Wheel placement, for the sentiments that appear on the wheel.
    pub fn wheel_ring(&self) -> Option<WheelRing> {
        wheel_ring(self.as_str())
    }

    pub fn base_emotion(&self) -> Option<(BaseEmotion, u8)> {
        emotion_intensity(self.as_str())
    }
}

/// Score-weighted emotional summary. Every axis lies in [-1, 1].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionalProfile {
    pub polarity: Polarity,
    /// Positive weight minus negative weight, over total weight.
    pub valence: f64,
    pub pleasure: f64,
    pub arousal: f64,
    pub dominance: f64,
}

impl Default for EmotionalProfile {
    fn default() -> Self {
        Self {
            polarity: Polarity::Neutral,
            valence: 0.0,
            pleasure: 0.0,
            arousal: 0.0,
            dominance: 0.0,
        }
    }
}

pub fn summarize(results: &[SentimentResult]) -> EmotionalProfile {
    let total: f64 = results.iter().map(|r| f64::from(r.score)).sum();
    if total <= 0.0 {
        return EmotionalProfile::default();
    }

    let mut profile = EmotionalProfile::default();
    for r in results {
        let w = f64::from(r.score) / total;
        match r.sentiment.polarity() {
            Polarity::Positive => profile.valence += w,
            Polarity::Negative => profile.valence -= w,
            Polarity::Neutral => {}
        }
        let pad = r.sentiment.pad();
        profile.pleasure += w * pad.pleasure.value();
        profile.arousal += w * pad.arousal.value();
        profile.dominance += w * pad.dominance.value();
    }

    profile.polarity = if profile.valence > 0.0 {
        Polarity::Positive
    } else if profile.valence < 0.0 {
        Polarity::Negative
    } else {
        Polarity::Neutral
    };
    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_cover_all() {
        let positives = Sentiment::ALL
            .iter()
            .filter(|s| s.polarity() == Polarity::Positive)
            .count();
        let negatives = Sentiment::ALL
            .iter()
            .filter(|s| s.polarity() == Polarity::Negative)
            .count();
        assert_eq!(positives, 7);
        assert_eq!(negatives, 7);
    }

    #[test]
    fn summary_is_score_weighted() {
        let results = vec![
            SentimentResult::new(Sentiment::Frustration, 75),
            SentimentResult::new(Sentiment::Appreciation, 25),
        ];
        let p = summarize(&results);
        assert_eq!(p.polarity, Polarity::Negative);
        assert!((p.valence + 0.5).abs() < 1e-9);
        assert!((p.pleasure + 0.5).abs() < 1e-9);
        assert!((p.arousal - 0.75).abs() < 1e-9);
    }

    #[test]
    fn wheel_places_sentiments() {
        assert_eq!(Sentiment::Satisfaction.wheel_ring(), Some(WheelRing::Secondary));
        assert_eq!(Sentiment::Appreciation.wheel_ring(), Some(WheelRing::Tertiary));
        assert_eq!(Sentiment::Urgency.wheel_ring(), None);
        assert_eq!(wheel_ring("anger"), Some(WheelRing::Primary));
    }

    #[test]
    fn intensity_ladder_has_three_rungs_per_base() {
        assert_eq!(Sentiment::Concern.base_emotion(), Some((BaseEmotion::Fear, 1)));
        assert_eq!(Sentiment::Enthusiasm.base_emotion(), Some((BaseEmotion::Joy, 3)));
        assert_eq!(emotion_intensity("outrage"), Some((BaseEmotion::Anger, 3)));
        for (_, base, _) in EMOTION_INTENSITY {
            let rungs: Vec<u8> = EMOTION_INTENSITY
                .iter()
                .filter(|(_, b, _)| b == base)
                .map(|(_, _, l)| *l)
                .collect();
            assert_eq!(rungs, vec![3, 2, 1]);
        }
    }

    #[test]
    fn empty_summary_is_neutral() {
        assert_eq!(summarize(&[]), EmotionalProfile::default());
    }
}
