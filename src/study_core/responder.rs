use tracing::debug;

use super::error::{Error, Result};
use super::templates;
use super::types::ChatTurn;

/// What the latest message is about. Each variant owns one canned reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    StudyPlan,
    Flashcards,
    Concept,
    Homework,
    Exam,
    TimeManagement,
    NoteTaking,
    Motivation,
    Memory,
    Stress,
    Reading,
    Math,
    Writing,
    Science,
    Language,
    GroupStudy,
    Menu,
}

struct Rule {
    topic: Topic,
    keywords: &'static [&'static str],
}

// Groups overlap ("math exam" hits both Exam and Math), so the order here is
// the precedence. Keep it a list.
#[rustfmt::skip]
static RULES: &[Rule] = &[
    Rule { topic: Topic::StudyPlan, keywords: &["study plan", "schedule"] },
    Rule { topic: Topic::Flashcards, keywords: &["flashcard", "quiz", "practice question"] },
    Rule { topic: Topic::Concept, keywords: &["explain", "what is", "how does"] },
    Rule { topic: Topic::Homework, keywords: &["homework", "assignment", "help with"] },
    Rule { topic: Topic::Exam, keywords: &["exam", "test", "study tip"] },
    Rule { topic: Topic::TimeManagement, keywords: &["time management", "procrastination", "productivity"] },
    Rule { topic: Topic::NoteTaking, keywords: &["note", "taking notes"] },
    Rule { topic: Topic::Motivation, keywords: &["motivat", "give up", "tired"] },
    Rule { topic: Topic::Memory, keywords: &["memory", "remember", "memorize"] },
    Rule { topic: Topic::Stress, keywords: &["stress", "anxiety", "overwhelm"] },
    Rule { topic: Topic::Reading, keywords: &["reading", "comprehension", "textbook"] },
    Rule { topic: Topic::Math, keywords: &["math", "algebra", "calculus", "geometry"] },
    Rule { topic: Topic::Writing, keywords: &["essay", "writing", "paper"] },
    Rule { topic: Topic::Science, keywords: &["science", "biology", "chemistry", "physics"] },
    Rule { topic: Topic::Language, keywords: &["language", "vocabulary", "grammar"] },
    Rule { topic: Topic::GroupStudy, keywords: &["group study", "study group"] },
];

impl Topic {
    pub fn template(self) -> &'static str {
        match self {
            Topic::StudyPlan => templates::STUDY_PLAN,
            Topic::Flashcards => templates::FLASHCARD_SEED,
            Topic::Concept => templates::CONCEPT_EXPLANATION,
            Topic::Homework => templates::HOMEWORK_GUIDANCE,
            Topic::Exam => templates::EXAM_TIPS,
            Topic::TimeManagement => templates::TIME_MANAGEMENT,
            Topic::NoteTaking => templates::NOTE_TAKING,
            Topic::Motivation => templates::MOTIVATION,
            Topic::Memory => templates::MEMORY_TECHNIQUES,
            Topic::Stress => templates::STRESS_MANAGEMENT,
            Topic::Reading => templates::READING_COMPREHENSION,
            Topic::Math => templates::MATH_HELP,
            Topic::Writing => templates::WRITING_HELP,
            Topic::Science => templates::SCIENCE_HELP,
            Topic::Language => templates::LANGUAGE_LEARNING,
            Topic::GroupStudy => templates::GROUP_STUDY,
            Topic::Menu => templates::CAPABILITY_MENU,
        }
    }
}

/// Picks the first topic whose keywords occur anywhere in `text`.
/// Matching is plain substring containment on the lowercased text, so
/// "mathematics" counts as "math".
pub fn classify(text: &str) -> Topic {
    let text = text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| text.contains(*keyword)))
        .map_or(Topic::Menu, |rule| rule.topic)
}

/// Canned reply to the most recent turn. Earlier turns are accepted but not read.
pub fn respond(history: &[ChatTurn]) -> Result<String> {
    let last = history
        .last()
        .ok_or_else(|| Error::InvalidInput("conversation history is empty".into()))?;
    let content = last
        .content
        .as_deref()
        .ok_or_else(|| Error::InvalidInput("last turn has no content".into()))?;

    let topic = classify(content);
    debug!(?topic, turns = history.len(), "picked canned response");

    Ok(topic.template().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study_core::types::Role;

    fn ask(text: &str) -> String {
        respond(&[ChatTurn::user(text)]).unwrap()
    }

    #[test]
    fn study_plan_wins_regardless_of_earlier_turns() {
        let history = vec![
            ChatTurn::user("I'm so stressed about math"),
            ChatTurn::assistant(templates::STRESS_MANAGEMENT),
            ChatTurn::user("Can you make me a SCHEDULE?"),
        ];
        assert_eq!(respond(&history).unwrap(), templates::STUDY_PLAN);
        assert_eq!(ask("I need a study plan"), templates::STUDY_PLAN);
    }

    #[test]
    fn earlier_group_wins_when_several_match() {
        assert_eq!(classify("math exam tips"), Topic::Exam);
        assert_eq!(classify("explain my homework"), Topic::Concept);
        assert_eq!(classify("quiz me on my study plan"), Topic::StudyPlan);
        assert_eq!(classify("I'm tired of taking notes"), Topic::NoteTaking);
    }

    #[test]
    fn keywords_match_inside_words() {
        assert_eq!(classify("Mathematics is hard"), Topic::Math);
        assert_eq!(classify("I feel unmotivated"), Topic::Motivation);
        assert_eq!(classify("so overwhelmed"), Topic::Stress);
        // "latest" contains "test"
        assert_eq!(classify("the latest chapter"), Topic::Exam);
    }

    #[test]
    fn each_group_reaches_its_template() {
        let cases = [
            ("practice question please", templates::FLASHCARD_SEED),
            ("how does photosynthesis work", templates::CONCEPT_EXPLANATION),
            ("help with my assignment", templates::HOMEWORK_GUIDANCE),
            ("any study tip?", templates::EXAM_TIPS),
            ("procrastination", templates::TIME_MANAGEMENT),
            ("I want to give up", templates::MOTIVATION),
            ("how to memorize dates", templates::MEMORY_TECHNIQUES),
            ("anxiety", templates::STRESS_MANAGEMENT),
            ("my textbook is dense", templates::READING_COMPREHENSION),
            ("calculus", templates::MATH_HELP),
            ("my essay", templates::WRITING_HELP),
            ("chemistry lab", templates::SCIENCE_HELP),
            ("spanish vocabulary", templates::LANGUAGE_LEARNING),
            ("starting a study group", templates::GROUP_STUDY),
        ];
        for (input, expected) in cases {
            assert_eq!(ask(input), expected, "input: {input}");
        }
    }

    #[test]
    fn unmatched_message_gets_the_menu() {
        assert_eq!(ask("hello there"), templates::CAPABILITY_MENU);
        assert_eq!(ask(""), templates::CAPABILITY_MENU);
    }

    #[test]
    fn same_history_gives_identical_text() {
        let history = vec![ChatTurn::user("algebra help")];
        assert_eq!(respond(&history).unwrap(), respond(&history).unwrap());
    }

    #[test]
    fn empty_history_is_invalid_input() {
        assert!(matches!(respond(&[]), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn last_turn_without_content_is_invalid_input() {
        let history = vec![ChatTurn {
            role: Role::User,
            content: None,
        }];
        assert!(matches!(respond(&history), Err(Error::InvalidInput(_))));
    }
}
