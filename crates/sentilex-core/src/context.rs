//! Communication-context inference from surface cues.
//!
//! Best effort: a wrong guess only shifts weights, it never fails the call.

use crate::types::CommunicationContext;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

const PRIMARY_POINTS: f64 = 2.0;
const SECONDARY_POINTS: f64 = 1.5;

/// Surface cues per context: (context, primary markers, secondary markers).
/// Each marker is a case-insensitive, boundary-anchored regex fragment.
const MARKERS: &[(CommunicationContext, &[&str], &[&str])] = &[
    (
        CommunicationContext::Email,
        &["dear", "regards", "sincerely", "attached", "attachment", "inbox", "cc", "forwarded", "reply"],
        &["hi", "hello", r"hope this (?:email|message) finds you", "best", "thanks", "please find", "let me know"],
    ),
    (
        CommunicationContext::Meeting,
        &["meeting", "agenda", "minutes", "call", "standup", "stand-up", "discussed", "attendees"],
        &["team", "today", "discuss", "sync", r"action items?", "next steps"],
    ),
    (
        CommunicationContext::Interview,
        &["interview", "candidate", "position", "role", "resume", "hiring", "applicant"],
        &["experience", "skills", "strengths", "qualifications", "background", "opportunity"],
    ),
    (
        CommunicationContext::Feedback,
        &["feedback", "review", "performance", "evaluation", "assessment", "rating"],
        &["improve", "improvement", "well done", "great job", "expectations", "quality"],
    ),
    (
        CommunicationContext::Project,
        &["project", "milestone", r"deliverables?", "sprint", "roadmap", "timeline"],
        &[r"tasks?", "deadline", "scope", "progress", "status", "release"],
    ),
    (
        CommunicationContext::Negotiation,
        &[r"negotiat\w*", "offer", "terms", "contract", "proposal", "counteroffer"],
        &["price", "budget", "agree", "compromise", "deal"],
    ),
    (
        CommunicationContext::Presentation,
        &["presentation", r"slides?", "audience", "keynote", "demo"],
        &["present", "showcase", "overview", "findings"],
    ),
    (
        CommunicationContext::Networking,
        &["connect", "networking", "introduce", "introduction", "linkedin"],
        &["coffee", "chat", "mutual", "community", "event"],
    ),
    (
        CommunicationContext::Conflict,
        &["conflict", r"disagree\w*", "dispute", "complaint", r"escalat\w*"],
        &["tension", "issue", "problem", "concern", "misunderstanding"],
    ),
    (
        CommunicationContext::Leadership,
        &["vision", "strategy", "leadership", "direction", "mission"],
        &["lead", "guide", "empower", "mentor", r"goals?"],
    ),
];

const HONORIFICS: &[&str] = &[
    "dear",
    "sincerely",
    "regards",
    "respectfully",
    r"mr\.?",
    r"ms\.?",
    r"mrs\.?",
    r"dr\.?",
    "thank you",
];
const POLITENESS: &[&str] = &["kindly", "please", "would you", "could you"];

/// Recurring message shapes detected in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationPattern {
    FollowUp,
    RequestAction,
    Deadline,
    Apology,
    Introduction,
}

const PATTERNS: &[(CommunicationPattern, &[&str])] = &[
    (
        CommunicationPattern::FollowUp,
        &["following up", "checking in", "wanted to check", "touching base", "circling back"],
    ),
    (
        CommunicationPattern::RequestAction,
        &["please", "kindly", "would you", "could you", "can you", "request", "require"],
    ),
    (
        CommunicationPattern::Deadline,
        &["by", "due", "deadline", "end of", "no later than", "latest", "before"],
    ),
    (
        CommunicationPattern::Apology,
        &["sorry", "apologize", "regret", "unfortunately", "pardon"],
    ),
    (
        CommunicationPattern::Introduction,
        &["introduce", "introducing", "like to present", "meet", "connecting"],
    ),
];

struct ContextMarkers {
    context: CommunicationContext,
    primary: Vec<Regex>,
    secondary: Vec<Regex>,
}

/// `(?i)\b(?:fragment)\b`. Fragments are regex source, not escaped.
pub(crate) fn marker_pattern(fragment: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\b(?:{})\b", fragment))
}

fn markers(fragments: &[&str]) -> Vec<Regex> {
    fragments
        .iter()
        .filter_map(|f| match marker_pattern(f) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!(marker = %f, error = %e, "Skipping context marker");
                None
            }
        })
        .collect()
}

/// Every marker fragment, labelled with the table it comes from.
pub(crate) fn marker_fragments() -> Vec<(String, &'static str)> {
    let mut out = Vec::new();
    for (context, primary, secondary) in MARKERS {
        for f in primary.iter().chain(secondary.iter()) {
            out.push((context.as_str().to_string(), *f));
        }
    }
    out.extend(HONORIFICS.iter().map(|f| ("honorifics".to_string(), *f)));
    out.extend(POLITENESS.iter().map(|f| ("politeness".to_string(), *f)));
    for (pattern, fragments) in PATTERNS {
        out.extend(fragments.iter().map(|f| (format!("{:?}", pattern), *f)));
    }
    out
}

static CONTEXT_MARKERS: LazyLock<Vec<ContextMarkers>> = LazyLock::new(|| {
    MARKERS
        .iter()
        .map(|(context, primary, secondary)| ContextMarkers {
            context: *context,
            primary: markers(primary),
            secondary: markers(secondary),
        })
        .collect()
});

static HONORIFIC_RE: LazyLock<Vec<Regex>> = LazyLock::new(|| markers(HONORIFICS));
static POLITENESS_RE: LazyLock<Vec<Regex>> = LazyLock::new(|| markers(POLITENESS));

static PATTERN_RE: LazyLock<Vec<(CommunicationPattern, Regex)>> = LazyLock::new(|| {
    PATTERNS
        .iter()
        .filter_map(|(pattern, fragments)| match marker_pattern(&fragments.join("|")) {
            Ok(re) => Some((*pattern, re)),
            Err(e) => {
                tracing::warn!(pattern = ?pattern, error = %e, "Skipping communication pattern");
                None
            }
        })
        .collect()
});

static SENTENCE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence split regex"));

/// Shape metrics of the raw text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_word_length: f64,
    pub formality: f64,
}

impl TextMetrics {
    pub fn measure(text: &str) -> Self {
        let words: Vec<&str> = text
            .split_whitespace()
            .filter(|w| w.chars().any(char::is_alphanumeric))
            .collect();
        let sentence_count = SENTENCE_SPLIT
            .split(text)
            .filter(|s| !s.trim().is_empty())
            .count();
        let avg_word_length = if words.is_empty() {
            0.0
        } else {
            let letters: usize = words
                .iter()
                .map(|w| w.chars().filter(|c| c.is_alphanumeric()).count())
                .sum();
            letters as f64 / words.len() as f64
        };
        Self {
            word_count: words.len(),
            sentence_count,
            avg_word_length,
            formality: formality_score(text),
        }
    }

    /// At most two sentences and under thirty words.
    pub fn is_short(&self) -> bool {
        self.sentence_count <= 2 && self.word_count < 30
    }

    /// Five or more sentences, or over a hundred words.
    pub fn is_long(&self) -> bool {
        self.sentence_count >= 5 || self.word_count > 100
    }
}

fn count(patterns: &[Regex], text: &str) -> usize {
    patterns.iter().map(|re| re.find_iter(text).count()).sum()
}

fn formality_score(text: &str) -> f64 {
    count(&HONORIFIC_RE, text) as f64 + count(&POLITENESS_RE, text) as f64 * 0.5
}

pub fn detect_patterns(text: &str) -> Vec<CommunicationPattern> {
    PATTERN_RE
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(pattern, _)| *pattern)
        .collect()
}

/// Everything the classifier looked at, for tracing and `explain`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextAnalysis {
    pub context: CommunicationContext,
    pub metrics: TextMetrics,
    pub patterns: Vec<CommunicationPattern>,
    pub scores: BTreeMap<CommunicationContext, f64>,
    /// True when the shape heuristic decided instead of the marker scores.
    pub heuristic: bool,
}

pub fn classify(text: &str) -> CommunicationContext {
    analyze_context(text).context
}

pub fn analyze_context(text: &str) -> ContextAnalysis {
    let metrics = TextMetrics::measure(text);
    let patterns = detect_patterns(text);

    let mut scores = BTreeMap::new();
    for markers in CONTEXT_MARKERS.iter() {
        let base = count(&markers.primary, text) as f64 * PRIMARY_POINTS
            + count(&markers.secondary, text) as f64 * SECONDARY_POINTS;
        let score = base + bonus(markers.context, &metrics, &patterns);
        scores.insert(markers.context, score);
    }

    let max = scores.values().copied().fold(0.0_f64, f64::max);
    let leaders: Vec<CommunicationContext> = scores
        .iter()
        .filter(|(_, s)| **s == max)
        .map(|(c, _)| *c)
        .collect();

    let (context, heuristic) = match leaders.as_slice() {
        [single] if max >= 1.0 => (*single, false),
        _ => (shape_heuristic(&metrics), true),
    };

    tracing::debug!(
        context = %context,
        score = max,
        heuristic,
        words = metrics.word_count,
        sentences = metrics.sentence_count,
        "classified context"
    );

    ContextAnalysis {
        context,
        metrics,
        patterns,
        scores,
        heuristic,
    }
}

fn bonus(
    context: CommunicationContext,
    metrics: &TextMetrics,
    patterns: &[CommunicationPattern],
) -> f64 {
    let has = |p: CommunicationPattern| patterns.contains(&p);
    let mut bonus = 0.0;
    match context {
        CommunicationContext::Email => {
            if metrics.formality >= 2.0 {
                bonus += 0.5;
            }
            if has(CommunicationPattern::FollowUp) {
                bonus += 0.5;
            }
            if metrics.is_long() {
                bonus += 0.25;
            }
        }
        CommunicationContext::Meeting if metrics.is_short() => bonus += 0.5,
        CommunicationContext::Project if has(CommunicationPattern::Deadline) => bonus += 0.25,
        CommunicationContext::Networking if has(CommunicationPattern::Introduction) => {
            bonus += 0.5
        }
        CommunicationContext::Conflict if has(CommunicationPattern::Apology) => bonus += 0.5,
        _ => {}
    }
    bonus
}

fn shape_heuristic(metrics: &TextMetrics) -> CommunicationContext {
    if metrics.is_short() {
        CommunicationContext::Meeting
    } else {
        // Long text and the middle ground both read as correspondence.
        CommunicationContext::Email
    }
}
