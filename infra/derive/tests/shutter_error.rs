use shutter_derive::shutter_error;
use std::borrow::Cow;

#[shutter_error]
pub enum ProbeError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Lookup failed{}: {key} ({attempts} attempts)", format_context(.context))]
    Lookup { key: Cow<'static, str>, attempts: u8, context: Option<Cow<'static, str>> },

    #[error("Internal probe error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, ProbeError> {
    Ok(raw.parse::<u32>()?)
}

#[test]
fn ui_expansion_compiles() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/shutter_error_pass.rs");
}

#[test]
fn source_errors_convert_through_question_mark() {
    let err = parse("x").expect_err("non-numeric input must fail");
    assert!(matches!(err, ProbeError::Parse { context: None, .. }));
}

#[test]
fn context_on_source_result_wraps_and_annotates() {
    let err = "x".parse::<u32>().context("reading page number").expect_err("must fail");
    assert!(
        matches!(&err, ProbeError::Parse { context: Some(c), .. } if c == "reading page number")
    );
    assert!(err.to_string().starts_with("Parse error (reading page number): "));
}

#[test]
fn context_on_own_result_overwrites_slot() {
    let res: Result<(), ProbeError> =
        Err(ProbeError::Lookup { key: "Api.Post".into(), attempts: 2, context: None });
    let err = res.context("dispatch").expect_err("must fail");
    assert_eq!(err.to_string(), "Lookup failed (dispatch): Api.Post (2 attempts)");
}

#[test]
fn strings_fall_back_to_internal() {
    let borrowed: ProbeError = "static failure".into();
    let owned: ProbeError = String::from("owned failure").into();
    assert!(
        matches!(borrowed, ProbeError::Internal { ref message, .. } if message == "static failure")
    );
    assert_eq!(owned.to_string(), "Internal probe error: owned failure");
}
