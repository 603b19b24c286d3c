//! Built-in sentiment categories.
//!
//! Terms are lower-case. Weights run 1..=9; phrase entries are matched as
//! contiguous substrings, word entries on word boundaries.

use super::{CategoryEntry, TermEntry};
use crate::types::CommunicationContext::*;
use crate::types::Sentiment;

const fn word(
    term: &'static str,
    weight: u8,
    contexts: &'static [crate::types::CommunicationContext],
) -> TermEntry {
    TermEntry::word(term, weight, contexts)
}

const fn phrase(
    term: &'static str,
    weight: u8,
    contexts: &'static [crate::types::CommunicationContext],
) -> TermEntry {
    TermEntry::phrase(term, weight, contexts)
}

/// All categories, in `Sentiment` declaration order.
pub fn default_categories() -> Vec<CategoryEntry> {
    let mut categories = Vec::with_capacity(21);
    categories.extend(positive_categories());
    categories.extend(negative_categories());
    categories.extend(professional_categories());
    categories
}

fn positive_categories() -> Vec<CategoryEntry> {
    vec![
        CategoryEntry::new(
            Sentiment::Satisfaction,
            "Feelings of accomplishment and positive outcomes",
        )
        .terms(vec![
            word("satisfied", 7, &[Feedback, Project, Email]),
            word("pleased", 6, &[Feedback, Email]),
            word("delighted", 8, &[Feedback, Email]),
            word("content", 5, &[Feedback]),
            phrase("happy with", 7, &[Feedback, Email]),
            phrase("impressed by", 8, &[Feedback]),
            phrase("excellent work", 9, &[Feedback]),
            phrase("well done", 8, &[Feedback]),
            phrase("great job", 8, &[Feedback]),
            word("outstanding", 9, &[Feedback]),
            phrase("exceeds expectations", 9, &[Feedback]),
            phrase("meets requirements", 6, &[Feedback]),
            word("successful", 7, &[Project, Feedback]),
            word("effective", 6, &[Feedback]),
            word("efficient", 6, &[Feedback]),
            word("productive", 7, &[Meeting, Project]),
            word("beneficial", 7, &[Feedback, Project]),
            word("valuable", 7, &[Feedback]),
            word("worthwhile", 7, &[Feedback, Meeting]),
            word("favorable", 6, &[Feedback]),
            word("promising", 6, &[Project, Feedback]),
        ])
        .intensity(
            &["adequate", "acceptable", "meets requirements", "satisfactory"],
            &["well done", "good job", "pleased with"],
            &["outstanding", "excellent", "exceptional", "exceeds expectations"],
        )
        .antonyms(&["disappointed", "unsatisfied", "displeased", "dissatisfied"]),
        CategoryEntry::new(
            Sentiment::Appreciation,
            "Recognition and gratitude for contributions or support",
        )
        .terms(vec![
            phrase("thank you", 7, &[Email, Meeting]),
            word("grateful", 8, &[Email]),
            word("appreciate", 7, &[Email, Meeting, Feedback]),
            word("thankful", 7, &[Email]),
            phrase("value your", 7, &[Email, Feedback]),
            phrase("acknowledge your", 6, &[Email, Feedback]),
            word("recognition", 6, &[Feedback]),
            word("indebted", 8, &[Email]),
            word("generous", 7, &[Feedback]),
            word("helpful", 6, &[Feedback]),
            word("supportive", 6, &[Feedback]),
            phrase("many thanks", 8, &[Email]),
            phrase("greatly appreciated", 8, &[Email]),
            phrase("thank you for your time", 7, &[Email, Meeting]),
            phrase("couldn't have done it without", 9, &[Feedback]),
            phrase("owe you", 8, &[Email]),
        ])
        .intensity(
            &["thanks", "helpful", "acknowledge"],
            &["thank you", "appreciate", "grateful"],
            &["deeply grateful", "greatly appreciated", "indebted"],
        )
        .antonyms(&["ungrateful", "unappreciative", "thankless"]),
        CategoryEntry::new(
            Sentiment::Confidence,
            "Conviction and belief in capabilities or decisions",
        )
        .terms(vec![
            word("confident", 7, &[Email, Presentation]),
            word("certain", 7, &[Email, Presentation]),
            word("assured", 7, &[Email]),
            word("convinced", 8, &[Email, Presentation]),
            word("sure", 6, &[Email, Meeting]),
            word("trust", 7, &[Email, Meeting]),
            word("believe", 6, &[Email, Meeting]),
            phrase("no doubt", 8, &[Email, Presentation]),
            phrase("with confidence", 8, &[Presentation]),
            phrase("firmly believe", 8, &[Presentation, Email]),
            phrase("assure you", 7, &[Email]),
            word("guarantee", 9, &[Email, Negotiation]),
            phrase("without hesitation", 8, &[Email]),
            phrase("strongly believe", 8, &[Email, Presentation]),
            phrase("in my experience", 7, &[Email, Meeting]),
            phrase("proven track record", 8, &[Interview, Presentation]),
        ])
        .intensity(
            &["believe", "think", "feel"],
            &["confident", "sure", "trust"],
            &["absolutely certain", "guarantee", "without doubt"],
        )
        .antonyms(&["uncertain", "doubtful", "hesitant", "unsure"]),
        CategoryEntry::new(
            Sentiment::Enthusiasm,
            "Strong excitement and engagement about ideas or projects",
        )
        .terms(vec![
            word("excited", 8, &[Email, Meeting]),
            word("enthusiastic", 8, &[Email, Meeting]),
            phrase("looking forward", 7, &[Email]),
            word("eager", 7, &[Email, Interview]),
            word("thrilled", 9, &[Email]),
            phrase("delighted to", 8, &[Email]),
            phrase("passionate about", 8, &[Interview]),
            phrase("keen to", 7, &[Email]),
            phrase("cannot wait", 8, &[Email]),
            phrase("interested in", 6, &[Email, Interview]),
            word("motivated", 7, &[Interview]),
            word("energized", 7, &[Meeting]),
            word("inspired", 7, &[Email, Meeting]),
            phrase("ready to", 6, &[Email, Meeting]),
        ])
        .intensity(
            &["interested", "curious", "looking forward to"],
            &["enthusiastic", "eager", "keen"],
            &["thrilled", "passionate", "extremely excited"],
        )
        .antonyms(&["uninterested", "apathetic", "indifferent", "bored"]),
        CategoryEntry::new(
            Sentiment::Optimism,
            "Positive outlook regarding future prospects",
        )
        .terms(vec![
            word("hopeful", 7, &[Email, Meeting]),
            word("optimistic", 8, &[Email, Meeting, Presentation]),
            word("encouraging", 6, &[Feedback, Meeting]),
            word("upbeat", 6, &[Meeting]),
            word("positive", 5, &[Feedback, Meeting]),
            phrase("looking up", 6, &[Meeting]),
            phrase("on track", 6, &[Project, Meeting]),
            phrase("good progress", 7, &[Project, Feedback]),
            phrase("bright future", 8, &[Presentation, Leadership]),
            phrase("things will improve", 7, &[Email]),
            phrase("moving in the right direction", 7, &[Project, Leadership]),
            phrase("best is yet to come", 8, &[Presentation, Leadership]),
        ])
        .intensity(
            &["hopeful", "positive"],
            &["optimistic", "encouraging", "on track"],
            &["very optimistic", "bright future", "best is yet to come"],
        )
        .antonyms(&["pessimistic", "hopeless", "discouraged", "gloomy"]),
        CategoryEntry::new(
            Sentiment::Relief,
            "Alleviation of tension after resolving issues",
        )
        .terms(vec![
            word("relieved", 8, &[Email, Meeting]),
            word("resolved", 6, &[Project, Email]),
            word("phew", 7, &[]),
            word("finally", 5, &[Email, Project]),
            word("fixed", 5, &[Project]),
            phrase("weight off", 8, &[Email]),
            phrase("glad that", 6, &[Email]),
            phrase("good news", 6, &[Email, Meeting]),
            phrase("back on track", 7, &[Project]),
            phrase("problem solved", 7, &[Project]),
            phrase("sorted out", 6, &[Email]),
            phrase("thank goodness", 8, &[]),
        ])
        .intensity(
            &["resolved", "fixed", "sorted out"],
            &["relieved", "good news", "back on track"],
            &["huge relief", "weight off my shoulders", "thank goodness"],
        )
        .antonyms(&["tense", "stressed", "worried", "anxious"]),
        CategoryEntry::new(
            Sentiment::Pride,
            "Sense of achievement and acknowledgment of excellence",
        )
        .terms(vec![
            word("proud", 8, &[Feedback, Presentation]),
            word("accomplished", 7, &[Feedback, Interview]),
            word("achievement", 7, &[Feedback, Interview]),
            word("milestone", 6, &[Project, Presentation]),
            word("honored", 8, &[Email, Presentation]),
            word("award", 6, &[Presentation]),
            word("record-breaking", 8, &[Presentation]),
            phrase("proud of", 8, &[Feedback]),
            phrase("we achieved", 7, &[Presentation, Project]),
            phrase("hard work paid off", 8, &[Feedback]),
            phrase("led the", 6, &[Interview]),
        ])
        .intensity(
            &["accomplished", "milestone"],
            &["proud", "achievement", "we achieved"],
            &["immensely proud", "honored", "record-breaking"],
        )
        .antonyms(&["ashamed", "embarrassed", "humiliated"]),
    ]
}

fn negative_categories() -> Vec<CategoryEntry> {
    vec![
        CategoryEntry::new(
            Sentiment::Disappointment,
            "Unfulfilled expectations or unsatisfactory results",
        )
        .terms(vec![
            word("disappointed", 7, &[Email, Feedback]),
            word("unfortunate", 6, &[Email, Feedback]),
            word("regret", 7, &[Email]),
            phrase("fell short", 7, &[Feedback]),
            phrase("did not meet expectations", 8, &[Feedback]),
            phrase("below standard", 8, &[Feedback]),
            word("unsatisfactory", 7, &[Feedback]),
            phrase("missed opportunity", 7, &[Feedback]),
            phrase("could have been better", 6, &[Feedback]),
            phrase("not as expected", 7, &[Feedback]),
            word("disheartening", 8, &[Email]),
            word("letdown", 8, &[Email, Feedback]),
            word("unmet", 6, &[Feedback]),
            word("subpar", 7, &[Feedback]),
            word("insufficient", 6, &[Feedback]),
            phrase("needs improvement", 6, &[Feedback]),
        ])
        .intensity(
            &["could be better", "needs improvement", "somewhat disappointed"],
            &["disappointed", "fell short", "unsatisfactory"],
            &["deeply disappointed", "completely unsatisfactory", "major failure"],
        )
        .antonyms(&["satisfied", "pleased", "impressed", "delighted"]),
        CategoryEntry::new(Sentiment::Frustration, "Blocked goals or persistent obstacles")
            .terms(vec![
                word("frustrated", 7, &[Email, Feedback]),
                word("frustrating", 7, &[Email, Feedback]),
                word("challenging", 5, &[Email, Feedback, Meeting]),
                word("difficult", 5, &[Email, Feedback]),
                word("obstacle", 6, &[Project, Meeting]),
                word("impediment", 7, &[Project, Meeting]),
                word("hindered", 7, &[Project, Email]),
                word("blocked", 7, &[Project, Email]),
                word("delayed", 6, &[Project, Email]),
                word("struggle", 7, &[Email, Feedback]),
                word("issue", 5, &[Email, Meeting, Project]),
                word("complication", 6, &[Project, Meeting]),
                word("roadblock", 7, &[Project, Meeting]),
                word("setback", 7, &[Project, Meeting, Email]),
            ])
            .intensity(
                &["challenging", "issue", "difficult"],
                &["frustrated", "struggle", "complication"],
                &["extremely frustrated", "major impediment", "critical blocker"],
            )
            .antonyms(&["facilitated", "streamlined", "smooth", "straightforward"]),
        CategoryEntry::new(Sentiment::Concern, "Worry about potential issues or outcomes")
            .terms(vec![
                word("concerned", 6, &[Email, Meeting]),
                word("worried", 7, &[Email, Meeting]),
                word("apprehensive", 7, &[Email]),
                word("uncertain", 6, &[Email, Meeting]),
                word("cautious", 5, &[Email, Meeting]),
                word("hesitant", 6, &[Email, Meeting]),
                word("reservations", 6, &[Email, Feedback]),
                word("doubt", 7, &[Email, Feedback]),
                word("uneasy", 7, &[Email]),
                word("skeptical", 7, &[Email, Meeting]),
                word("questionable", 7, &[Email, Feedback]),
                phrase("potentially problematic", 7, &[Email, Feedback]),
                phrase("not confident", 7, &[Email, Feedback]),
                phrase("anxious about", 8, &[Email]),
                phrase("wary of", 7, &[Email]),
                word("risk", 6, &[Project, Meeting]),
            ])
            .intensity(
                &["cautious", "uncertain", "hesitant"],
                &["concerned", "worried", "reservations"],
                &["extremely concerned", "deeply worried", "grave concerns"],
            )
            .antonyms(&["confident", "assured", "certain", "comfortable"]),
        CategoryEntry::new(Sentiment::Anxiety, "Unease about uncertainties or challenges")
            .terms(vec![
                word("anxious", 8, &[Email, Meeting]),
                word("nervous", 7, &[Interview, Meeting]),
                word("stressed", 7, &[Email, Meeting]),
                word("panic", 9, &[Email]),
                word("tense", 6, &[Meeting, Conflict]),
                word("restless", 6, &[]),
                word("afraid", 7, &[Email, Meeting]),
                word("fear", 7, &[Email]),
                phrase("on edge", 7, &[]),
                phrase("losing sleep", 8, &[Email]),
                phrase("what if", 5, &[Meeting]),
                phrase("freaking out", 8, &[]),
                phrase("keeps me up at night", 8, &[]),
            ])
            .intensity(
                &["tense", "restless", "what if"],
                &["anxious", "nervous", "stressed"],
                &["panic", "freaking out", "losing sleep"],
            )
            .antonyms(&["calm", "relaxed", "composed", "at ease"]),
        CategoryEntry::new(
            Sentiment::Dissatisfaction,
            "Discontent with situations or deliverables",
        )
        .terms(vec![
            word("dissatisfied", 8, &[Feedback, Email]),
            word("unsatisfied", 7, &[Feedback]),
            word("unhappy", 7, &[Feedback, Email]),
            word("displeased", 8, &[Email, Feedback]),
            word("unacceptable", 8, &[Email, Feedback, Conflict]),
            word("inadequate", 7, &[Feedback]),
            word("poor", 6, &[Feedback]),
            word("complaint", 7, &[Email, Conflict]),
            phrase("not happy", 7, &[Feedback, Email]),
            phrase("not acceptable", 8, &[Email, Conflict]),
            phrase("not good enough", 8, &[Feedback]),
            phrase("fed up", 8, &[Conflict]),
            phrase("not what we asked for", 8, &[Project, Feedback]),
        ])
        .intensity(
            &["not ideal", "poor", "inadequate"],
            &["unhappy", "dissatisfied", "not good enough"],
            &["unacceptable", "completely dissatisfied", "fed up"],
        )
        .antonyms(&["satisfied", "content", "pleased"]),
        CategoryEntry::new(Sentiment::Confusion, "Lack of clarity or understanding")
            .terms(vec![
                word("confused", 8, &[Email, Meeting]),
                word("confusing", 7, &[Email, Feedback]),
                word("unclear", 7, &[Email, Feedback]),
                word("puzzled", 7, &[]),
                word("ambiguous", 6, &[Feedback, Project]),
                word("baffled", 8, &[]),
                word("perplexed", 8, &[]),
                phrase("not sure", 6, &[Email, Meeting]),
                phrase("don't understand", 8, &[Email, Meeting]),
                phrase("doesn't make sense", 8, &[]),
                phrase("could you clarify", 6, &[Email]),
                phrase("what do you mean", 7, &[Meeting]),
                phrase("mixed signals", 7, &[]),
                phrase("not clear", 7, &[Email, Feedback]),
            ])
            .intensity(
                &["unclear", "not sure", "ambiguous"],
                &["confused", "puzzled", "not clear"],
                &["completely lost", "baffled", "doesn't make sense"],
            )
            .antonyms(&["clear", "understood", "obvious"]),
        CategoryEntry::new(Sentiment::Overwhelm, "Excessive pressure or workload")
            .terms(vec![
                word("overwhelmed", 9, &[Email, Meeting]),
                word("swamped", 8, &[Email]),
                word("overloaded", 8, &[Project, Email]),
                word("exhausted", 7, &[]),
                word("burnout", 8, &[Meeting, Leadership]),
                word("backlog", 5, &[Project]),
                phrase("burned out", 8, &[]),
                phrase("too much", 6, &[]),
                phrase("stretched thin", 8, &[Project, Meeting]),
                phrase("drowning in", 8, &[Email]),
                phrase("buried in", 7, &[Email]),
                phrase("can't keep up", 8, &[Project, Meeting]),
                phrase("at capacity", 7, &[Project]),
            ])
            .intensity(
                &["busy", "backlog", "at capacity"],
                &["swamped", "overloaded", "stretched thin"],
                &["overwhelmed", "burned out", "drowning in"],
            )
            .antonyms(&["manageable", "balanced", "relaxed"]),
    ]
}

fn professional_categories() -> Vec<CategoryEntry> {
    vec![
        CategoryEntry::new(Sentiment::Neutrality, "Objective and unbiased perspective")
            .terms(vec![
                word("considering", 5, &[Email, Meeting]),
                word("analyzing", 5, &[Email, Meeting]),
                word("evaluating", 5, &[Email, Feedback]),
                word("assessing", 5, &[Email, Feedback]),
                word("reviewing", 5, &[Email, Meeting]),
                word("examining", 5, &[Email]),
                word("observing", 5, &[Feedback]),
                word("noted", 5, &[Email, Meeting]),
                word("acknowledged", 5, &[Email]),
                word("understood", 5, &[Email]),
                word("recognized", 5, &[Email]),
                word("documented", 5, &[Email, Meeting]),
                word("recorded", 5, &[Meeting]),
                word("registered", 5, &[Email]),
                phrase("neither agree nor disagree", 5, &[Feedback]),
                word("objective", 5, &[Feedback, Meeting]),
                word("impartial", 5, &[Feedback]),
                word("fair", 5, &[Feedback]),
            ])
            .intensity(
                &["noted", "acknowledged", "recorded"],
                &["considering", "reviewing", "evaluating"],
                &["thoroughly analyzing", "comprehensive assessment", "careful examination"],
            )
            .antonyms(&["biased", "prejudiced", "subjective"]),
        CategoryEntry::new(Sentiment::Urgency, "Time-sensitive priority and importance")
            .terms(vec![
                word("urgent", 8, &[Email, Meeting]),
                word("urgently", 8, &[Email]),
                word("immediate", 8, &[Email, Meeting]),
                word("critical", 8, &[Email, Project]),
                word("pressing", 7, &[Email, Meeting]),
                word("priority", 7, &[Email, Project]),
                word("asap", 8, &[Email, Meeting]),
                phrase("as soon as possible", 8, &[Email]),
                word("time-sensitive", 8, &[Email]),
                word("deadline", 7, &[Email, Project]),
                word("crucial", 7, &[Email, Project]),
                phrase("requires immediate attention", 9, &[Email]),
                phrase("high priority", 8, &[Email, Project]),
                word("promptly", 7, &[Email]),
                phrase("without delay", 8, &[Email]),
                word("expedite", 8, &[Email, Project]),
            ])
            .intensity(
                &["timely", "prompt", "soon"],
                &["pressing", "priority", "deadline-driven"],
                &["extremely urgent", "immediate action required", "critical"],
            )
            .antonyms(&["non-urgent", "low priority", "leisurely", "whenever convenient"]),
        CategoryEntry::new(
            Sentiment::Formality,
            "Professional distance and structured communication",
        )
        .terms(vec![
            word("dear", 5, &[Email]),
            word("sincerely", 6, &[Email]),
            word("regards", 6, &[Email]),
            word("respectfully", 7, &[Email]),
            word("hereby", 7, &[Email, Negotiation]),
            word("pursuant", 8, &[Email, Negotiation]),
            word("accordingly", 5, &[Email]),
            word("furthermore", 5, &[Email, Presentation]),
            phrase("please find attached", 7, &[Email]),
            phrase("kind regards", 7, &[Email]),
            phrase("to whom it may concern", 9, &[Email]),
            phrase("i am writing to", 7, &[Email]),
            phrase("please do not hesitate", 7, &[Email]),
            phrase("at your earliest convenience", 8, &[Email]),
        ])
        .intensity(
            &["dear", "regards"],
            &["sincerely", "respectfully", "kind regards"],
            &["to whom it may concern", "pursuant to", "hereby"],
        )
        .antonyms(&["casual", "informal", "hey"]),
        CategoryEntry::new(Sentiment::Inquiry, "Information-seeking and clarification")
            .terms(vec![
                word("wondering", 6, &[Email, Meeting]),
                word("curious", 6, &[Meeting, Interview]),
                word("question", 6, &[Meeting, Email]),
                word("questions", 6, &[Meeting, Email]),
                word("clarify", 7, &[Email, Meeting]),
                word("clarification", 7, &[Email]),
                word("inquire", 7, &[Email]),
                phrase("could you tell me", 7, &[Email]),
                phrase("would you mind", 6, &[Email]),
                phrase("i was wondering", 7, &[Email]),
                phrase("can you explain", 7, &[Meeting]),
                phrase("is it possible", 6, &[Email]),
                phrase("do you know", 6, &[]),
                phrase("following up", 6, &[Email]),
                phrase("checking in", 6, &[Email]),
            ])
            .intensity(
                &["wondering", "checking in"],
                &["question", "could you tell me"],
                &["need clarification", "urgent question"],
            )
            .antonyms(&["certain", "informed"]),
        CategoryEntry::new(
            Sentiment::Consideration,
            "Thoughtful evaluation of options or perspectives",
        )
        .terms(vec![
            word("consider", 6, &[Meeting, Email]),
            word("weigh", 6, &[Meeting]),
            word("options", 5, &[Meeting, Negotiation]),
            word("alternatively", 6, &[Email, Meeting]),
            word("perspective", 6, &[Meeting, Feedback]),
            word("tradeoffs", 7, &[Meeting, Project]),
            word("trade-offs", 7, &[Meeting, Project]),
            phrase("pros and cons", 7, &[Meeting]),
            phrase("on the other hand", 7, &[Meeting, Email]),
            phrase("take into account", 7, &[Feedback]),
            phrase("think it over", 6, &[]),
            phrase("keep in mind", 6, &[Email]),
            phrase("having said that", 6, &[]),
            phrase("let me think", 6, &[Meeting]),
        ])
        .intensity(
            &["consider", "keep in mind"],
            &["weigh", "pros and cons", "on the other hand"],
            &["careful deliberation", "thorough evaluation"],
        )
        .antonyms(&["hasty", "rash", "careless"]),
        CategoryEntry::new(
            Sentiment::Assertiveness,
            "Direct and confident expression of needs or positions",
        )
        .terms(vec![
            word("must", 6, &[Meeting, Negotiation]),
            word("insist", 8, &[Negotiation, Conflict]),
            word("expect", 6, &[Email, Leadership]),
            word("require", 7, &[Email, Negotiation]),
            word("firmly", 7, &[Negotiation]),
            word("non-negotiable", 9, &[Negotiation]),
            phrase("i need", 6, &[Email, Meeting]),
            phrase("we need to", 6, &[Meeting, Leadership]),
            phrase("make sure", 6, &[Meeting]),
            phrase("let me be clear", 8, &[Meeting, Conflict]),
            phrase("i expect", 7, &[Leadership]),
            phrase("bottom line", 7, &[Negotiation]),
            phrase("i recommend", 6, &[]),
        ])
        .intensity(
            &["i recommend", "make sure"],
            &["must", "require", "we need to"],
            &["non-negotiable", "let me be clear", "insist"],
        )
        .antonyms(&["passive", "hesitant", "timid"]),
        CategoryEntry::new(
            Sentiment::Determination,
            "Resolve to achieve objectives despite challenges",
        )
        .terms(vec![
            word("determined", 8, &[Meeting, Interview]),
            word("committed", 7, &[Email, Leadership]),
            word("persevere", 8, &[]),
            word("persistent", 7, &[Interview]),
            word("resolve", 6, &[Leadership]),
            word("dedicated", 7, &[Interview]),
            word("relentless", 8, &[]),
            phrase("no matter what", 8, &[]),
            phrase("will not give up", 9, &[]),
            phrase("see it through", 8, &[Project]),
            phrase("whatever it takes", 8, &[Leadership]),
            phrase("get it done", 7, &[Project, Meeting]),
            phrase("stay the course", 7, &[Leadership]),
            phrase("push through", 7, &[Project]),
        ])
        .intensity(
            &["committed", "get it done"],
            &["determined", "dedicated", "push through"],
            &["relentless", "whatever it takes", "will not give up"],
        )
        .antonyms(&["hesitant", "wavering", "defeated"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_follow_enum_order() {
        let ids: Vec<Sentiment> = default_categories().iter().map(|c| c.id).collect();
        assert_eq!(ids, Sentiment::ALL.to_vec());
    }

    #[test]
    fn phrase_flag_matches_whitespace() {
        for cat in default_categories() {
            for t in &cat.terms {
                assert_eq!(
                    t.is_phrase,
                    t.term.contains(char::is_whitespace),
                    "{} / {}",
                    cat.id,
                    t.term
                );
            }
        }
    }
}
