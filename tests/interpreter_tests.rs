//! End-to-end interpreter tests: whole programs in, artifacts out.

use lolrus::{run, Execution, RunError, Value};

fn interpret(source: &str) -> Execution {
    let mut no_input = |_: &str| -> Option<String> { None };
    run(source, &mut no_input)
}

fn interpret_with_input(source: &str, replies: &[&str]) -> Execution {
    let mut queue: Vec<String> = replies.iter().rev().map(|r| r.to_string()).collect();
    let mut read_input = move |_: &str| queue.pop();
    run(source, &mut read_input)
}

#[test]
fn hello_world() {
    let execution = interpret("HAI\nVISIBLE \"hello\"\nKTHXBYE");
    assert!(execution.error.is_none());
    assert_eq!(execution.output, "hello \n");
}

#[test]
fn declaration_with_expression_initializer() {
    let execution = interpret("HAI\nI HAS A x ITZ SUM OF 2 AN 3\nVISIBLE x\nKTHXBYE");
    assert!(execution.error.is_none());
    assert_eq!(execution.output, "5 \n");
    assert_eq!(execution.symbols.it(), &Value::Unset);
    assert_eq!(execution.symbols.get("x"), Some(&Value::Numbr(5)));
}

#[test]
fn float_operand_promotes_the_sum() {
    let execution = interpret(
        "HAI\nI HAS A x ITZ 2.5\nI HAS A y ITZ SUM OF x AN 1\nVISIBLE y\nKTHXBYE",
    );
    assert!(execution.error.is_none());
    assert_eq!(execution.output, "3.5 \n");
    assert_eq!(execution.symbols.get("y"), Some(&Value::Numbar(3.5)));
}

#[test]
fn if_else_takes_the_true_branch() {
    let source = "HAI\nBOTH SAEM 3 AN 3\nO RLY?\nYA RLY\nVISIBLE \"yes\"\nNO WAI\nVISIBLE \"no\"\nOIC\nKTHXBYE";
    let execution = interpret(source);
    assert!(execution.error.is_none());
    assert_eq!(execution.output, "yes \n");
}

#[test]
fn if_else_takes_the_false_branch() {
    let source = "HAI\nBOTH SAEM 3 AN 4\nO RLY?\nYA RLY\nVISIBLE \"yes\"\nNO WAI\nVISIBLE \"no\"\nOIC\nKTHXBYE";
    let execution = interpret(source);
    assert!(execution.error.is_none());
    assert_eq!(execution.output, "no \n");
}

#[test]
fn switch_selects_the_matching_case() {
    let source = "HAI\nI HAS A x ITZ 2\nx\nWTF?\nOMG 1\nVISIBLE \"one\"\nGTFO\nOMG 2\nVISIBLE \"two\"\nGTFO\nOMGWTF\nVISIBLE \"other\"\nOIC\nKTHXBYE";
    let execution = interpret(source);
    assert!(execution.error.is_none());
    assert_eq!(execution.output, "two \n");
}

#[test]
fn switch_falls_back_to_the_default() {
    let source = "HAI\nI HAS A x ITZ 9\nx\nWTF?\nOMG 1\nVISIBLE \"one\"\nGTFO\nOMGWTF\nVISIBLE \"other\"\nOIC\nKTHXBYE";
    let execution = interpret(source);
    assert!(execution.error.is_none());
    assert_eq!(execution.output, "other \n");
}

#[test]
fn switch_falls_through_without_gtfo() {
    let source = "HAI\nI HAS A x ITZ 1\nx\nWTF?\nOMG 1\nVISIBLE \"one\"\nOMG 2\nVISIBLE \"two\"\nOMGWTF\nVISIBLE \"other\"\nOIC\nKTHXBYE";
    let execution = interpret(source);
    assert!(execution.error.is_none());
    assert_eq!(execution.output, "one \ntwo \nother \n");
}

#[test]
fn smoosh_concatenates_in_visible() {
    let execution = interpret("HAI\nVISIBLE SMOOSH \"a\" AN \"b\" AN \"c\" MKAY\nKTHXBYE");
    assert!(execution.error.is_none());
    assert_eq!(execution.output, "abc \n");
}

#[test]
fn missing_kthxbye_is_the_sole_output_line() {
    let execution = interpret("HAI\nVISIBLE \"hello\"");
    assert_eq!(execution.error, Some(RunError::NoKthxbye));
    assert_eq!(
        execution.output,
        "Error 02: Program has no KTHXBYE code delimiter.\n"
    );
}

#[test]
fn empty_program_produces_two_lexemes_and_it() {
    let execution = interpret("HAI\nKTHXBYE");
    assert!(execution.error.is_none());
    assert_eq!(execution.output, "");
    let texts: Vec<&str> = execution.lexemes.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["HAI", "KTHXBYE"]);
    let names: Vec<&str> = execution.symbols.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["IT"]);
}

#[test]
fn integer_division_truncates_and_floats_do_not() {
    let execution = interpret("HAI\nVISIBLE QUOSHUNT OF 7 AN 2\nKTHXBYE");
    assert_eq!(execution.output, "3 \n");
    let execution = interpret("HAI\nVISIBLE QUOSHUNT OF 7.0 AN 2\nKTHXBYE");
    assert_eq!(execution.output, "3.5 \n");
}

#[test]
fn all_of_short_circuits_with_mkay_lexeme() {
    let execution = interpret("HAI\nALL OF WIN AN WIN MKAY\nKTHXBYE");
    assert_eq!(execution.symbols.it(), &Value::Troof(true));
    let execution = interpret("HAI\nALL OF WIN AN FAIL AN WIN MKAY\nKTHXBYE");
    assert_eq!(execution.symbols.it(), &Value::Troof(false));
    let texts: Vec<&str> = execution.lexemes.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["HAI", "ALL OF", "WIN", "AN", "FAIL", "MKAY", "KTHXBYE"]
    );
}

#[test]
fn recursive_variadic_is_rejected() {
    let execution = interpret("HAI\nANY OF WIN AN ALL OF WIN AN WIN MKAY\nKTHXBYE");
    assert_eq!(execution.error, Some(RunError::RecursiveVariadic));
}

#[test]
fn unterminated_if_block_is_error_26() {
    let execution = interpret("HAI\nBOTH SAEM 1 AN 1\nO RLY?\nYA RLY\nVISIBLE \"x\"\nKTHXBYE");
    assert_eq!(execution.error, Some(RunError::UnterminatedBlock));
}

#[test]
fn double_not_restores_the_operand() {
    let execution = interpret("HAI\nI HAS A x ITZ WIN\nNOT NOT x\nKTHXBYE");
    assert!(execution.error.is_none());
    assert_eq!(execution.symbols.it(), &Value::Troof(true));
}

#[test]
fn either_of_short_circuit_emits_no_second_operand() {
    let execution = interpret("HAI\nI HAS A x ITZ WIN\nEITHER OF x AN FAIL\nKTHXBYE");
    assert_eq!(execution.symbols.it(), &Value::Troof(true));
    let texts: Vec<&str> = execution.lexemes.iter().map(|l| l.text.as_str()).collect();
    assert!(!texts.contains(&"FAIL"));
    assert!(!texts.contains(&"MKAY"));
}

#[test]
fn gimmeh_classifies_and_stores_input() {
    let source = "HAI\nI HAS A x\nGIMMEH x\nVISIBLE x\nKTHXBYE";
    let execution = interpret_with_input(source, &["3.5"]);
    assert!(execution.error.is_none());
    assert_eq!(execution.symbols.get("x"), Some(&Value::Numbar(3.5)));
    assert_eq!(execution.output, "3.5 \n");

    let execution = interpret_with_input(source, &["-7"]);
    assert_eq!(execution.symbols.get("x"), Some(&Value::Numbr(-7)));

    let execution = interpret_with_input(source, &["say \"hi\""]);
    assert_eq!(
        execution.symbols.get("x"),
        Some(&Value::Yarn("say \\\"hi\\\"".into()))
    );
}

#[test]
fn gimmeh_in_skipped_branch_consumes_no_input() {
    let source = "HAI\nI HAS A x ITZ 1\nBOTH SAEM 1 AN 1\nO RLY?\nYA RLY\nVISIBLE \"go\"\nNO WAI\nGIMMEH x\nOIC\nKTHXBYE";
    // no replies queued: a prompt from the skipped branch would error
    let execution = interpret_with_input(source, &[]);
    assert!(execution.error.is_none());
    assert_eq!(execution.output, "go \n");
    assert_eq!(execution.symbols.get("x"), Some(&Value::Numbr(1)));
}

#[test]
fn runtime_error_keeps_prior_output() {
    let source = "HAI\nVISIBLE \"first\"\nVISIBLE ghost\nKTHXBYE";
    let execution = interpret(source);
    assert_eq!(
        execution.error,
        Some(RunError::UnknownReference("ghost".into()))
    );
    assert_eq!(
        execution.output,
        "first \nVISIBLE ghost\nError 09: Unknown/Undeclared variable reference ghost.\n"
    );
}

#[test]
fn comments_are_stripped_before_execution() {
    let source = "HAI\nBTW nothing here\nOBTW\nVISIBLE \"not me\"\nTLDR\nVISIBLE \"yes\" BTW trailing\nKTHXBYE";
    let execution = interpret(source);
    assert!(execution.error.is_none());
    assert_eq!(execution.output, "yes \n");
}

#[test]
fn assignment_updates_and_reports_final_symbols() {
    let source = "HAI\nI HAS A x ITZ 1\nI HAS A y ITZ 2\nx R SUM OF y AN 3\nKTHXBYE";
    let execution = interpret(source);
    assert!(execution.error.is_none());
    let entries: Vec<(String, String, String)> = execution
        .symbols
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                value.payload(),
                value.type_tag().to_string(),
            )
        })
        .collect();
    assert_eq!(
        entries,
        vec![
            ("IT".to_string(), String::new(), String::new()),
            ("x".to_string(), "5".to_string(), "NUMBR".to_string()),
            ("y".to_string(), "2".to_string(), "NUMBR".to_string()),
        ]
    );
}

#[test]
fn yarn_case_switch_matches_after_quote_stripping() {
    let source = "HAI\nI HAS A w ITZ \"two\"\nw\nWTF?\nOMG \"one\"\nVISIBLE \"1\"\nGTFO\nOMG \"two\"\nVISIBLE \"2\"\nGTFO\nOMGWTF\nVISIBLE \"?\"\nOIC\nKTHXBYE";
    let execution = interpret(source);
    assert!(execution.error.is_none());
    assert_eq!(execution.output, "2 \n");
}

#[test]
fn condition_must_be_troof_for_if_blocks() {
    let source = "HAI\nI HAS A x ITZ 5\nx\nO RLY?\nYA RLY\nNO WAI\nOIC\nKTHXBYE";
    let execution = interpret(source);
    assert_eq!(execution.error, Some(RunError::ConditionNotTroof));
}

#[test]
fn unset_it_blocks_are_error_34() {
    let execution = interpret("HAI\nO RLY?\nYA RLY\nNO WAI\nOIC\nKTHXBYE");
    assert_eq!(execution.error, Some(RunError::EmptyImplicitVariable));
    let execution = interpret("HAI\nWTF?\nOMG 1\nOMGWTF\nOIC\nKTHXBYE");
    assert_eq!(execution.error, Some(RunError::EmptyImplicitVariable));
}

#[test]
fn reruns_are_identical() {
    let source = "HAI\nI HAS A x ITZ SUM OF 2 AN 3\nBOTH SAEM x AN 5\nO RLY?\nYA RLY\nVISIBLE \"five\"\nNO WAI\nVISIBLE \"not five\"\nOIC\nKTHXBYE";
    let first = interpret(source);
    let second = interpret(source);
    assert_eq!(first.output, second.output);
    assert_eq!(first.lexemes, second.lexemes);
    let first_symbols: Vec<(String, String)> = first
        .symbols
        .iter()
        .map(|(name, value)| (name.to_string(), value.payload()))
        .collect();
    let second_symbols: Vec<(String, String)> = second
        .symbols
        .iter()
        .map(|(name, value)| (name.to_string(), value.payload()))
        .collect();
    assert_eq!(first_symbols, second_symbols);
}
