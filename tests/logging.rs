use heredoc::{dedent, try_dedent, DedentError, Value};
use tracing_subscriber::EnvFilter;

fn with_trace_subscriber<T>(f: impl FnOnce() -> T) -> T {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("heredoc=trace"))
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}

#[test]
fn output_is_unchanged_under_a_trace_subscriber() {
    let fragments = ["\n    Hello, ", "!\n      Bye.\n"];
    let values = [Value::from("world")];

    let traced = with_trace_subscriber(|| dedent(&fragments, &values));
    assert_eq!(traced, dedent(&fragments, &values));
    assert_eq!(traced, "Hello, world!\n  Bye.");
}

#[test]
fn rejected_template_still_reports_error_when_traced() {
    let result = with_trace_subscriber(|| try_dedent(&["a", "b", "c"], &[Value::Null]));
    assert_eq!(
        result,
        Err(DedentError::FragmentCountMismatch {
            fragments: 3,
            values: 1
        })
    );
}
