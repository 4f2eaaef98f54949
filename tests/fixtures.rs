#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Data-driven parse and combine tests
///
/// Cases live in `fixtures/urls.json`. Each entry is either a comment
/// string or a case object. A case with `base` is run through
/// `Url::combine`; otherwise `input` is parsed directly. Component fields
/// that are present must match exactly; names listed in `absent` must not
/// have been parsed at all.
use serde::Deserialize;
use spanurl::{Span, Url, UrlParts};

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
enum TestCase {
    UrlTest {
        input: String,
        #[serde(default)]
        base: Option<String>,
        #[serde(default)]
        spec: Option<String>,
        #[serde(default)]
        scheme: Option<String>,
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        password: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        port: Option<String>,
        #[serde(default)]
        path: Option<String>,
        #[serde(default)]
        query: Option<String>,
        #[serde(default)]
        fragment: Option<String>,
        #[serde(default)]
        is_ipv6: Option<bool>,
        #[serde(default)]
        absent: Vec<String>,
        #[serde(default)]
        failure: Option<String>,
    },
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone)]
struct Failure {
    input: String,
    field: String,
    expected: String,
    actual: String,
}

fn part_by_name(parts: &UrlParts, name: &str) -> Option<Span> {
    match name {
        "scheme" => parts.scheme,
        "username" => parts.username,
        "password" => parts.password,
        "host" => parts.host,
        "port" => parts.port,
        "path" => parts.path,
        "query" => parts.query,
        "fragment" => parts.fragment,
        other => panic!("unknown component {other:?} in fixture"),
    }
}

fn check(failures: &mut Vec<Failure>, input: &str, field: &str, expected: &str, actual: &str) {
    if expected != actual {
        failures.push(Failure {
            input: input.to_string(),
            field: field.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
}

fn run(tests: Vec<TestCase>) -> (usize, Vec<Failure>) {
    let mut count = 0;
    let mut failures = Vec::new();

    for test in tests {
        let TestCase::UrlTest {
            input,
            base,
            spec,
            scheme,
            username,
            password,
            host,
            port,
            path,
            query,
            fragment,
            is_ipv6,
            absent,
            failure,
        } = test
        else {
            continue;
        };
        count += 1;

        let url = match &base {
            Some(base) => Url::new(base.as_str()).combine(&input),
            None => Url::new(input.as_str()),
        };

        if let Some(expected) = failure {
            let actual = url.parse_error().map_or("success", |e| e.as_str());
            check(&mut failures, &input, "failure", &expected, actual);
            continue;
        }
        if !url.is_valid() {
            let actual = url.parse_error().map_or("invalid", |e| e.as_str());
            check(&mut failures, &input, "parsing", "success", actual);
            continue;
        }

        let expected_fields = [
            ("spec", spec.as_deref(), url.spec()),
            ("scheme", scheme.as_deref(), url.scheme()),
            ("username", username.as_deref(), url.username()),
            ("password", password.as_deref(), url.password()),
            ("host", host.as_deref(), url.host()),
            ("port", port.as_deref(), url.port()),
            ("path", path.as_deref(), url.path()),
            ("query", query.as_deref(), url.query()),
            ("fragment", fragment.as_deref(), url.fragment()),
        ];
        for (field, expected, actual) in expected_fields {
            if let Some(expected) = expected {
                check(&mut failures, &input, field, expected, actual);
                // A listed component must also be present, not just empty
                if field != "spec" && part_by_name(url.parts(), field).is_none() {
                    check(&mut failures, &input, field, "present", "absent");
                }
            }
        }
        if let Some(expected) = is_ipv6 {
            check(
                &mut failures,
                &input,
                "is_ipv6",
                &expected.to_string(),
                &url.is_ipv6().to_string(),
            );
        }
        for name in &absent {
            if part_by_name(url.parts(), name).is_some() {
                check(&mut failures, &input, name, "absent", "present");
            }
        }
        assert!(url.parts().fits(url.spec().len()), "{input}: span out of bounds");
    }

    (count, failures)
}

#[test]
fn test_url_fixtures() {
    let test_data = include_str!("./fixtures/urls.json");
    let tests: Vec<TestCase> =
        serde_json::from_str(test_data).expect("Failed to parse fixture data");

    let (count, failures) = run(tests);

    let report: Vec<String> = failures
        .iter()
        .map(|f| {
            format!(
                "{}: {} expected {:?}, got {:?}",
                f.input, f.field, f.expected, f.actual
            )
        })
        .collect();
    assert!(failures.is_empty(), "\n{}\n", report.join("\n"));
    assert!(count >= 30, "Expected at least 30 fixture cases, found {count}");
}
