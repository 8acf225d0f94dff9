use essay_quiz::error::ParseError;
use essay_quiz::parser::{
    extract_corrected_text, extract_error_lines, find_corrected_text, parse_topic_and_question,
    TopicQuestion,
};

#[test]
fn well_formed_topic_and_question() {
    let parsed = parse_topic_and_question("Topic: Oceans\nQuestion: Why is the sea salty?\n").unwrap();
    assert_eq!(
        parsed,
        TopicQuestion {
            topic: "Oceans".to_string(),
            question: "Why is the sea salty?".to_string(),
        }
    );
}

#[test]
fn markers_may_appear_in_any_order_amid_prose() {
    let raw = "Here you go!\n\n**Question:** How do tides shape coastlines?\n**Topic:** Tides\nGood luck.";
    let parsed = parse_topic_and_question(raw).unwrap();
    assert_eq!(parsed.topic, "** Tides");
    assert_eq!(parsed.question, "** How do tides shape coastlines?");
}

#[test]
fn missing_either_marker_is_malformed() {
    assert_eq!(
        parse_topic_and_question("Question: Why?"),
        Err(ParseError::MissingMarker("Topic:"))
    );
    assert_eq!(
        parse_topic_and_question("Topic: Oceans"),
        Err(ParseError::MissingMarker("Question:"))
    );
    assert!(parse_topic_and_question("").is_err());
}

#[test]
fn blank_value_after_marker_is_malformed() {
    assert_eq!(
        parse_topic_and_question("Topic:   \nQuestion: Why?"),
        Err(ParseError::EmptyField("Topic:"))
    );
    assert_eq!(
        parse_topic_and_question("Topic: Oceans\nQuestion:\nWhy is the sea salty?"),
        Err(ParseError::EmptyField("Question:"))
    );
}

#[test]
fn error_free_text_has_no_error_lines() {
    assert!(extract_error_lines("This is fine.\nNo issues here.").is_empty());
    assert!(extract_error_lines("").is_empty());
}

#[test]
fn error_lines_are_selected_and_trimmed() {
    assert_eq!(
        extract_error_lines("Line one ok\nError: missing comma\nline three fine"),
        vec!["Error: missing comma".to_string()]
    );
    assert_eq!(
        extract_error_lines("  1. Spelling ERROR: 'teh'  \nfine\n2. grammatical errors found"),
        vec![
            "1. Spelling ERROR: 'teh'".to_string(),
            "2. grammatical errors found".to_string(),
        ]
    );
}

#[test]
fn last_correction_marker_wins() {
    let raw = "Corrected text: first draft\nMore notes.\nCorrected text:  The sea is salty. ";
    assert_eq!(extract_corrected_text(raw), "The sea is salty.");
    assert_eq!(find_corrected_text(raw).as_deref(), Some("The sea is salty."));
}

#[test]
fn missing_correction_marker_echoes_the_response() {
    let raw = "  No changes needed.\n";
    assert_eq!(extract_corrected_text(raw), "No changes needed.");
    assert_eq!(find_corrected_text(raw), None);
}
