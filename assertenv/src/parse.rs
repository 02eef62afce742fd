//! Parsing and validation of raw values
//!
//! Every function here is pure. Plain kinds map an empty input to their zero
//! value; required kinds reject it with [`ValueError::UnexpectedEmptyValue`]
//! before applying the plain rule.

use crate::error::ValueError;
use crate::kind::{FieldKind, Value};
use crate::schema::FieldMeta;

/// Separator used for list kinds when none is declared
pub const DEFAULT_SEPARATOR: &str = ",";

/// Parse `raw` according to `kind`, using `meta` for the enum set and list separator
pub fn parse(kind: FieldKind, raw: &str, meta: &FieldMeta) -> Result<Value, ValueError> {
    let values = meta.values.as_deref().unwrap_or_default();
    let separator = meta.separator.as_deref().unwrap_or_default();

    match kind {
        FieldKind::Int => as_int(raw).map(Value::Int),
        FieldKind::RequiredInt => as_required_int(raw).map(Value::Int),
        FieldKind::Text => Ok(Value::Text(as_text(raw).to_owned())),
        FieldKind::RequiredText => as_required_text(raw).map(|s| Value::Text(s.to_owned())),
        FieldKind::Url => as_url(raw).map(Value::Text),
        FieldKind::RequiredUrl => as_required_url(raw).map(Value::Text),
        FieldKind::Enum => as_enum(raw, values).map(|s| Value::Text(s.to_owned())),
        FieldKind::RequiredEnum => {
            as_required_enum(raw, values).map(|s| Value::Text(s.to_owned()))
        }
        FieldKind::TextList => Ok(Value::TextList(as_text_list(raw, separator))),
        FieldKind::RequiredTextList => as_required_text_list(raw, separator).map(Value::TextList),
        FieldKind::IntList => as_int_list(raw, separator).map(Value::IntList),
        FieldKind::RequiredIntList => as_required_int_list(raw, separator).map(Value::IntList),
        FieldKind::HostPort => {
            as_host_port(raw).map(|(host, port)| Value::HostPort { host, port })
        }
        FieldKind::RequiredHostPort => {
            as_required_host_port(raw).map(|(host, port)| Value::HostPort { host, port })
        }
    }
}

fn non_empty(s: &str) -> Result<&str, ValueError> {
    if s.is_empty() {
        return Err(ValueError::UnexpectedEmptyValue);
    }
    Ok(s)
}

/// Base-10 signed integer; empty input is `0`
pub fn as_int(s: &str) -> Result<i64, ValueError> {
    if s.is_empty() {
        return Ok(0);
    }
    s.parse::<i64>().map_err(|e| ValueError::InvalidInteger {
        value: s.to_owned(),
        source: e,
    })
}

pub fn as_required_int(s: &str) -> Result<i64, ValueError> {
    as_int(non_empty(s)?)
}

/// Passthrough
pub fn as_text(s: &str) -> &str {
    s
}

pub fn as_required_text(s: &str) -> Result<&str, ValueError> {
    non_empty(s)
}

/// Absolute URL with a scheme and a host, returned in canonical form.
///
/// Input without a scheme or without a host is a partial URL rather than an
/// invalid one. A root path the parser inserts into a path-less input is
/// dropped again, so `http://localhost:8080` is stored as given.
pub fn as_url(s: &str) -> Result<String, ValueError> {
    use url::{ParseError, Position};

    if s.is_empty() {
        return Ok(String::new());
    }
    let partial = || ValueError::PartialUrlValue {
        value: s.to_owned(),
    };
    let url = url::Url::parse(s).map_err(|e| match e {
        ParseError::RelativeUrlWithoutBase | ParseError::EmptyHost => partial(),
        e => ValueError::InvalidUrl {
            value: s.to_owned(),
            source: e,
        },
    })?;
    if url.scheme().is_empty() || url.host_str().map_or(true, str::is_empty) {
        return Err(partial());
    }
    if url.path() == "/" && !has_path(s) {
        return Ok(format!(
            "{}{}",
            &url[..Position::BeforePath],
            &url[Position::AfterPath..]
        ));
    }
    Ok(url.into())
}

/// Whether the authority of `s` is followed by a `/`
fn has_path(s: &str) -> bool {
    let rest = s.split_once("//").map_or(s, |(_, rest)| rest);
    rest.find(['/', '\\', '?', '#'])
        .is_some_and(|i| matches!(rest.as_bytes()[i], b'/' | b'\\'))
}

pub fn as_required_url(s: &str) -> Result<String, ValueError> {
    as_url(non_empty(s)?)
}

/// Exact, case-sensitive member of the comma-separated `values`
pub fn as_enum<'a>(s: &'a str, values: &str) -> Result<&'a str, ValueError> {
    if s.is_empty() {
        return Ok(s);
    }
    if !values.split(',').any(|v| v == s) {
        return Err(ValueError::InvalidEnumValue {
            value: s.to_owned(),
            allowed: values.to_owned(),
        });
    }
    Ok(s)
}

pub fn as_required_enum<'a>(s: &'a str, values: &str) -> Result<&'a str, ValueError> {
    as_enum(non_empty(s)?, values)
}

fn split<'a>(s: &'a str, separator: &'a str) -> impl Iterator<Item = &'a str> {
    let separator = if separator.is_empty() {
        DEFAULT_SEPARATOR
    } else {
        separator
    };
    s.split(separator)
}

/// Every segment between separators, empty ones included
pub fn as_text_list(s: &str, separator: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    split(s, separator).map(str::to_owned).collect()
}

pub fn as_required_text_list(s: &str, separator: &str) -> Result<Vec<String>, ValueError> {
    let list = as_text_list(non_empty(s)?, separator);
    if list.is_empty() {
        return Err(ValueError::ExpectedAtLeastOneValue);
    }
    Ok(list)
}

/// Every segment must itself be a non-empty integer
pub fn as_int_list(s: &str, separator: &str) -> Result<Vec<i64>, ValueError> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    split(s, separator).map(as_required_int).collect()
}

pub fn as_required_int_list(s: &str, separator: &str) -> Result<Vec<i64>, ValueError> {
    let list = as_int_list(non_empty(s)?, separator)?;
    if list.is_empty() {
        return Err(ValueError::ExpectedAtLeastOneValue);
    }
    Ok(list)
}

/// Split into host and port; empty input is a pair of empty strings
pub fn as_host_port(s: &str) -> Result<(String, String), ValueError> {
    if s.is_empty() {
        return Ok(Default::default());
    }
    let (host, port) = split_host_port(s).map_err(|reason| ValueError::InvalidHostPort {
        value: s.to_owned(),
        reason,
    })?;
    Ok((host.to_owned(), port.to_owned()))
}

pub fn as_required_host_port(s: &str) -> Result<(String, String), ValueError> {
    as_host_port(non_empty(s)?)
}

/// Split `host:port`, `[host]:port` or `[v6:host]:port` on the last colon.
///
/// The host of a bracketed form is returned without brackets. The port is
/// not interpreted, so service names are accepted.
pub fn split_host_port(s: &str) -> Result<(&str, &str), &'static str> {
    const MISSING_PORT: &str = "missing port in address";
    const TOO_MANY_COLONS: &str = "too many colons in address";

    let i = s.rfind(':').ok_or(MISSING_PORT)?;

    let (host, j, k) = if s.starts_with('[') {
        let end = s.find(']').ok_or("missing ']' in address")?;
        match s[end + 1..].chars().next() {
            None => return Err(MISSING_PORT),
            Some(':') if end + 1 == i => {}
            Some(':') => return Err(TOO_MANY_COLONS),
            Some(_) => return Err(MISSING_PORT),
        }
        (&s[1..end], 1, end + 1)
    } else {
        let host = &s[..i];
        if host.contains(':') {
            return Err(TOO_MANY_COLONS);
        }
        (host, 0, 0)
    };

    if s[j..].contains('[') {
        return Err("unexpected '[' in address");
    }
    if s[k..].contains(']') {
        return Err("unexpected ']' in address");
    }

    Ok((host, &s[i + 1..]))
}

/// Inverse of [`split_host_port`]: brackets hosts that contain a colon
pub fn join_host_port(host: &str, port: &str) -> String {
    if host.contains(':') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}
