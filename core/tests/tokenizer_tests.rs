use wikisearch_core::tokenizer::{is_single_term, split_terms};

#[test]
fn keeps_case_and_punctuation() {
    let toks: Vec<&str> = split_terms("Running, runner's RUN!").collect();
    assert_eq!(toks, ["Running,", "runner's", "RUN!"]);
}

#[test]
fn only_spaces_separate_terms() {
    let toks: Vec<&str> = split_terms("line one\nline\ttwo").collect();
    assert_eq!(toks, ["line", "one\nline\ttwo"]);
}

#[test]
fn empty_text_is_one_empty_term() {
    let toks: Vec<&str> = split_terms("").collect();
    assert_eq!(toks, [""]);
    assert!(is_single_term(""));
}
