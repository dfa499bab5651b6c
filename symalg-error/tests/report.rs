use ariadne::Source;
use symalg_attrs::ErrorKind;
use symalg_error::ErrorKind;

#[derive(Debug, ErrorKind)]
#[error(
    message = format!("unknown function `{}`", name),
    labels = ["this call"],
    help = format!("did you mean `{}`?", suggestion),
)]
struct UnknownThing {
    name: String,
    suggestion: String,
}

#[derive(Debug, ErrorKind)]
#[error(message = "cannot divide an exact whole number by zero")]
struct Unit;

fn render(kind: &dyn ErrorKind, src: &str) -> String {
    let mut out = Vec::new();
    kind.build_report("input", &[0..src.len()])
        .write(("input", Source::from(src)), &mut out)
        .unwrap();
    String::from_utf8(strip_ansi_escapes::strip(out)).unwrap()
}

#[test]
fn message_uses_fields() {
    let kind = UnknownThing { name: "fo".to_string(), suggestion: "f".to_string() };
    assert_eq!(kind.message(), "unknown function `fo`");
}

#[test]
fn report_contains_message_label_and_help() {
    let kind = UnknownThing { name: "fo".to_string(), suggestion: "f".to_string() };
    let report = render(&kind, "fo(x)");
    assert!(report.contains("unknown function `fo`"));
    assert!(report.contains("this call"));
    assert!(report.contains("did you mean `f`?"));
}

#[test]
fn unit_kind_without_labels() {
    let report = render(&Unit, "1 / 0");
    assert!(report.contains("cannot divide an exact whole number by zero"));
}

#[test]
fn downcast_through_any() {
    let kind: Box<dyn ErrorKind> = Box::new(Unit);
    assert!(kind.as_any().downcast_ref::<Unit>().is_some());
    assert!(kind.as_any().downcast_ref::<UnknownThing>().is_none());
}
