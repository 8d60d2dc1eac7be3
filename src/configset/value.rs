//! Python-literal values for ConfigSet emission.
//!
//! Waf's `ConfigSet.store` writes `key = <python literal>` lines and loads
//! them back with `eval`. Emitting the same literal syntax (matching
//! Python's `ascii()` escaping) lets a wscript load wafgen output without
//! any custom parsing on the waf side. That rendering is a fixed contract.

use std::collections::BTreeSet;
use std::fmt;
use std::fmt::Write as _;

use indexmap::IndexMap;

/// A value renderable as a Python literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    List(Vec<Value>),
    /// Rendered in sorted order so output is reproducible.
    Set(BTreeSet<String>),
    Dict(IndexMap<String, Value>),
}

impl Value {
    /// A list of strings.
    pub fn str_list<I, S>(items: I) -> Value
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(items.into_iter().map(|s| Value::Str(s.into())).collect())
    }

    /// True for the values the exporter treats as "nothing to emit".
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Str(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Set(items) => items.is_empty(),
            Value::Dict(items) => items.is_empty(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::str_list(items)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(&render_str(s)),

            Value::List(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_char(']')
            }

            // ascii() renders the empty set as `set()`, never `{}`
            Value::Set(items) if items.is_empty() => f.write_str("set()"),
            Value::Set(items) => {
                f.write_char('{')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(&render_str(item))?;
                }
                f.write_char('}')
            }

            Value::Dict(items) => {
                f.write_char('{')?;
                for (i, (k, v)) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", render_str(k), v)?;
                }
                f.write_char('}')
            }
        }
    }
}

/// Render a string the way Python's `ascii()` does: repr quoting rules,
/// `\xXX`/`\uXXXX`/`\UXXXXXXXX` escapes for everything outside printable
/// ASCII.
fn render_str(s: &str) -> String {
    // repr prefers single quotes, switching to double quotes only when the
    // string contains a single quote and no double quote
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            c => {
                let cp = c as u32;
                if cp < 0x100 {
                    let _ = write!(out, "\\x{:02x}", cp);
                } else if cp < 0x1_0000 {
                    let _ = write!(out, "\\u{:04x}", cp);
                } else {
                    let _ = write!(out, "\\U{:08x}", cp);
                }
            }
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_string() {
        assert_eq!(Value::from("abc").to_string(), "'abc'");
    }

    #[test]
    fn test_quote_switching() {
        assert_eq!(Value::from("it's").to_string(), "\"it's\"");
        assert_eq!(Value::from("say \"hi\"").to_string(), "'say \"hi\"'");
        // both quote kinds present: single quotes win, escaped
        assert_eq!(Value::from("'\"").to_string(), "'\\'\"'");
    }

    #[test]
    fn test_control_and_non_ascii_escapes() {
        assert_eq!(Value::from("a\nb\\c").to_string(), "'a\\nb\\\\c'");
        assert_eq!(Value::from("caf\u{e9}").to_string(), "'caf\\xe9'");
        assert_eq!(Value::from("\u{6587}").to_string(), "'\\u6587'");
        assert_eq!(Value::from("\u{1f600}").to_string(), "'\\U0001f600'");
    }

    #[test]
    fn test_list_rendering() {
        let v = Value::str_list(["a", "b"]);
        assert_eq!(v.to_string(), "['a', 'b']");
        assert_eq!(Value::List(vec![]).to_string(), "[]");
    }

    #[test]
    fn test_set_rendering() {
        assert_eq!(Value::Set(BTreeSet::new()).to_string(), "set()");

        let set: BTreeSet<String> = ["b", "a"].iter().map(|s| s.to_string()).collect();
        assert_eq!(Value::Set(set).to_string(), "{'a', 'b'}");
    }

    #[test]
    fn test_dict_rendering() {
        let mut map = IndexMap::new();
        map.insert("os".to_string(), Value::from("Linux"));
        map.insert("arch".to_string(), Value::from("x86_64"));
        assert_eq!(
            Value::Dict(map).to_string(),
            "{'os': 'Linux', 'arch': 'x86_64'}"
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(Value::List(vec![]).is_empty());
        assert!(Value::Str(String::new()).is_empty());
        assert!(!Value::from("x").is_empty());
    }
}
