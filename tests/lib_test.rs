//! Library surface tests.

use sherpa::{CommandSpec, ParamSpec, SelectRequest, Selector, SherpaError};

#[test]
fn error_types_are_public() {
    let err = SherpaError::validation("bad declaration");
    assert!(err.to_string().contains("bad declaration"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> sherpa::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn registration_failure_names_the_parameter() {
    let err = CommandSpec::builder("release")
        .param(ParamSpec::string("version").default("patch"))
        .param(ParamSpec::string_list("targets"))
        .build()
        .unwrap_err();

    let msg = err.to_string();
    assert!(matches!(err, SherpaError::Validation { .. }));
    assert!(msg.contains("targets"));
    assert!(msg.contains("release"));
}

#[test]
fn scripted_selection_needs_no_terminal() {
    let selector = Selector::new();
    let request = SelectRequest::new("Pick", ["a", "b"]).provided("b");
    assert_eq!(selector.select(&request).unwrap(), "b");
}

#[test]
fn cancellation_marker_is_stable() {
    // Nested runner processes are classified by this exact text; changing
    // it breaks cancellation propagation across process boundaries.
    assert_eq!(sherpa::CANCEL_MARKER, "Interrupted by user");
}
