use concol::normalize::{normalize, Line};
use concol::{message, number, Element, Message, Metric, Scalar};

fn text(s: &str) -> Line {
    Line::Text(s.to_string())
}

fn metric(name: &str, value: &str, unit: &str) -> Line {
    Line::Metric {
        name: name.to_string(),
        value: value.to_string(),
        unit: unit.to_string(),
    }
}

#[test]
fn text_splits_on_newlines() {
    let lines = normalize("output a string\nwith any number of\ncarriage returns".into());
    assert_eq!(
        &lines[..],
        &[
            text("output a string"),
            text("with any number of"),
            text("carriage returns"),
        ]
    );
}

#[test]
fn text_never_becomes_a_metric() {
    // two fragments with a numeric second line are still text
    let lines = normalize("total\n5".into());
    assert_eq!(&lines[..], &[text("total"), text("5")]);

    let lines = normalize("trailing\n".into());
    assert_eq!(&lines[..], &[text("trailing"), text("")]);
}

#[test]
fn blank_message_is_one_empty_line() {
    assert_eq!(&normalize(Message::blank())[..], &[text("")]);
    assert_eq!(&normalize(().into())[..], &[text("")]);
    assert_eq!(&normalize(Message::default())[..], &[text("")]);
}

#[test]
fn empty_sequence_has_no_lines() {
    assert!(normalize(message![]).is_empty());
}

#[test]
fn sequence_of_strings_expands_embedded_newlines() {
    let lines = normalize(vec!["array string\nwith carriage returns", "and elements"].into());
    assert_eq!(
        &lines[..],
        &[
            text("array string"),
            text("with carriage returns"),
            text("and elements"),
        ]
    );
}

#[test]
fn short_sequence_with_numeric_second_element_is_one_metric() {
    let lines = normalize(message!["modules required", 0]);
    assert_eq!(&lines[..], &[metric("modules required", "0", "")]);

    let lines = normalize(message!["code", 180, " lines"]);
    assert_eq!(&lines[..], &[metric("code", "180", " lines")]);

    // numeric text counts too
    let lines = normalize(vec!["disk", " 2048 ", "MB"].into());
    assert_eq!(&lines[..], &[metric("disk", "2,048", "MB")]);
}

#[test]
fn sequences_of_other_lengths_stay_separate() {
    let lines = normalize(vec!["a", "1", "b", "2"].into());
    assert_eq!(&lines[..], &[text("a"), text("1"), text("b"), text("2")]);

    let lines = normalize(vec!["a", "b"].into());
    assert_eq!(&lines[..], &[text("a"), text("b")]);
}

#[test]
fn tuple_and_metric_shorthands() {
    let expected = [metric("code", "180", " lines")];

    assert_eq!(&normalize(("code", 180, " lines").into())[..], &expected);
    assert_eq!(
        &normalize(Metric::new("code", 180).with_unit(" lines").into())[..],
        &expected
    );
    assert_eq!(&normalize(vec![("code", 180, " lines")].into())[..], &expected);
}

#[test]
fn metric_values_degrade_gracefully() {
    let lines = normalize(message![
        ("ratio", "n/a"),
        ("empty", ""),
        ("nan", f64::NAN),
        ("inf", f64::INFINITY),
        Element::Tuple(vec![Scalar::from("name only")]),
    ]);

    assert_eq!(
        &lines[..],
        &[
            metric("ratio", "n/a", ""),
            metric("empty", "", ""),
            metric("nan", "", ""),
            metric("inf", "∞", ""),
            metric("name only", "", ""),
        ]
    );
}

#[test]
fn empty_tuple_is_a_blank_text_line() {
    let lines = normalize(message!["before", Element::Tuple(Vec::new()), "after"]);
    assert_eq!(&lines[..], &[text("before"), text(""), text("after")]);
}

#[test]
fn numbers_as_elements_are_text() {
    let lines = normalize(message![1, 2.5, "x", -3]);
    assert_eq!(&lines[..], &[text("1"), text("2.5"), text("x"), text("-3")]);
}

#[test]
fn number_text_uses_shortest_form() {
    let lines = normalize(message![1e21, -0.0, 1.5e-7, 123456.0, "x"]);
    assert_eq!(
        &lines[..],
        &[text("1e+21"), text("0"), text("1.5e-7"), text("123456"), text("x")]
    );
}

#[test]
fn radix_literals_render_their_value() {
    let lines = normalize(vec!["mask", "0x1F"].into());
    assert_eq!(&lines[..], &[metric("mask", "31", "")]);

    let lines = normalize(vec!["flags", "0b101", " set"].into());
    assert_eq!(&lines[..], &[metric("flags", "5", " set")]);
}

#[test]
fn mixed_sequence_preserves_order() {
    let lines = normalize(message![
        "\noutput the fibonacci sequence",
        ("first", 1),
        ("second", 1),
        "done",
    ]);

    assert_eq!(
        &lines[..],
        &[
            text(""),
            text("output the fibonacci sequence"),
            metric("first", "1", ""),
            metric("second", "1", ""),
            text("done"),
        ]
    );
}

#[test]
fn grouping_rounds_half_away_from_zero() {
    assert_eq!(number::group(1234.7), "1,235");
    assert_eq!(number::group(0.0), "0");
    assert_eq!(number::group(0.5), "1");
    assert_eq!(number::group(2.5), "3");
    assert_eq!(number::group(-2.5), "-3");
    assert_eq!(number::group(999.4), "999");
    assert_eq!(number::group(1000.0), "1,000");
    assert_eq!(number::group(-1234567.5), "-1,234,568");
    assert_eq!(number::group(123456789.0), "123,456,789");
    assert_eq!(number::group(-0.2), "-0");
    assert_eq!(number::group(f64::NEG_INFINITY), "-∞");
}

#[test]
fn lenient_parsing() {
    assert_eq!(number::parse("42"), Some(42.0));
    assert_eq!(number::parse("  -2.5 "), Some(-2.5));
    assert_eq!(number::parse(".5"), Some(0.5));
    assert_eq!(number::parse("1e3"), Some(1000.0));
    assert_eq!(number::parse("+7"), Some(7.0));
    assert_eq!(number::parse("0x1F"), Some(31.0));
    assert_eq!(number::parse("0b101"), Some(5.0));
    assert_eq!(number::parse("Infinity"), Some(f64::INFINITY));
    assert_eq!(number::parse("-Infinity"), Some(f64::NEG_INFINITY));

    assert_eq!(number::parse(""), None);
    assert_eq!(number::parse("   "), None);
    assert_eq!(number::parse("n/a"), None);
    assert_eq!(number::parse("inf"), None);
    assert_eq!(number::parse("NaN"), None);
    assert_eq!(number::parse("12abc"), None);
    assert_eq!(number::parse("-0x1F"), None);
    assert_eq!(number::parse("."), None);
}
