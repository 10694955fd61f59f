use lazy_static::lazy_static;
use regex::Regex;

use super::types::Flashcard;

lazy_static! {
    static ref LIST_MARKER: Regex = Regex::new(r"^[0-9]+\.").unwrap();
    static ref LIST_PREFIX: Regex = Regex::new(r"^[0-9]+\.\s*").unwrap();
}

/// Whether a user message asks for a deck, so its reply should be scanned.
pub fn wants_flashcards(input: &str) -> bool {
    let input = input.to_lowercase();
    input.contains("flashcard") || input.contains("quiz")
}

fn is_question(line: &str) -> bool {
    line.contains('?') || LIST_MARKER.is_match(line)
}

/// Pairs every question-looking line with the next non-blank line.
///
/// A line counts as a question when it contains `?` or starts with a numbered
/// list marker such as `1.`. Lines are not consumed: an answer that itself
/// looks like a question opens the next pair too, so neighbouring question
/// lines produce overlapping cards.
pub fn extract(text: &str) -> Vec<Flashcard> {
    let lines: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    lines
        .windows(2)
        .filter(|pair| is_question(pair[0]))
        .map(|pair| {
            let question = LIST_PREFIX.replace(pair[0], "").trim().to_owned();
            Flashcard::new(question, pair[1].trim().to_owned())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study_core::templates;

    fn pairs(cards: &[Flashcard]) -> Vec<(&str, &str)> {
        cards
            .iter()
            .map(|card| (card.question.as_str(), card.answer.as_str()))
            .collect()
    }

    #[test]
    fn numbered_questions_pair_with_following_line() {
        let cards = extract("1. What is X?\nAnswer: Y\n2. What is Z?\nAnswer: W");
        assert_eq!(
            cards,
            vec![
                Flashcard::new("What is X?".into(), "Answer: Y".into()),
                Flashcard::new("What is Z?".into(), "Answer: W".into()),
            ]
        );
        assert!(cards.iter().all(|card| !card.revealed));
    }

    #[test]
    fn plain_paragraph_yields_nothing() {
        assert!(extract("Just some advice.\nKeep going, you are doing fine.").is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn blank_lines_are_skipped_before_pairing() {
        let cards = extract("1. Q1?\n\nA1\n2. Q2?\n   \nA2");
        assert_eq!(pairs(&cards), vec![("Q1?", "A1"), ("Q2?", "A2")]);
    }

    #[test]
    fn question_on_the_last_line_has_no_answer() {
        assert!(extract("Anything else?").is_empty());
        assert_eq!(pairs(&extract("Why?\nBecause.\nReally?")), vec![("Why?", "Because.")]);
    }

    #[test]
    fn adjacent_question_lines_overlap() {
        // "Q2?" is the answer of the first card and the question of the second.
        let cards = extract("Q1?\nQ2?\nA2");
        assert_eq!(pairs(&cards), vec![("Q1?", "Q2?"), ("Q2?", "A2")]);
    }

    #[test]
    fn marker_must_start_the_line() {
        let cards = extract("  3. indented item\nnext\nsee 4. inline\nafter");
        assert!(cards.is_empty());
    }

    #[test]
    fn numbered_line_without_question_mark_still_counts() {
        let cards = extract("12.Define entropy\r\nA measure of disorder\r\n");
        assert_eq!(pairs(&cards), vec![("Define entropy", "A measure of disorder")]);
    }

    #[test]
    fn seed_template_produces_its_cards() {
        let cards = extract(templates::FLASHCARD_SEED);
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].question, "What is the main purpose of mitochondria in cells?");
        assert_eq!(cards[0].answer, "Answer: Generate ATP energy through cellular respiration");
        assert_eq!(cards[1].question, "Define the Pythagorean theorem");
        assert_eq!(cards[4].question, "What is the capital of France?");
        assert_eq!(cards[4].answer, "Answer: Paris");
    }

    #[test]
    fn trigger_words_are_case_insensitive() {
        assert!(wants_flashcards("Make me FLASHCARDS"));
        assert!(wants_flashcards("quiz me"));
        assert!(!wants_flashcards("practice questions on algebra"));
    }
}
