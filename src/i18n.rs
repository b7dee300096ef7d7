//! Localization and string formatting.
//!
//! Descriptions are built from translation markers and positional format
//! templates. Translation is a pure lookup supplied by the host through
//! the `Localizer` trait; `string_format` fills the templates.

use std::collections::HashMap;
use std::fmt::Write;
use std::iter::Peekable;
use std::str::Chars;

/// Maps translation markers to localized strings.
///
/// # Examples
///
/// ```rust
/// use zzbonus::i18n::{Catalog, Localizer, Untranslated};
///
/// assert_eq!(Untranslated.gettext("Dodge"), "Dodge");
///
/// let mut fr = Catalog::new();
/// fr.insert("Dodge", "Esquive");
/// assert_eq!(fr.gettext("Dodge"), "Esquive");
/// assert_eq!(fr.gettext("Block"), "Block");
/// ```
pub trait Localizer {
    /// Translate a marker.
    fn gettext(&self, msgid: &str) -> String;

    /// Translate a marker within a disambiguating context.
    ///
    /// Falls back to `gettext` by default.
    fn pgettext(&self, context: &str, msgid: &str) -> String {
        let _ = context;
        self.gettext(msgid)
    }
}

/// Returns every marker unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Untranslated;

impl Localizer for Untranslated {
    fn gettext(&self, msgid: &str) -> String {
        msgid.to_string()
    }
}

/// An in-memory translation table.
///
/// Contextual entries take precedence over plain ones. Missing entries
/// fall back to the marker itself.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    plain: HashMap<String, String>,
    contextual: HashMap<(String, String), String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a translation without context.
    pub fn insert(&mut self, msgid: impl Into<String>, translation: impl Into<String>) {
        self.plain.insert(msgid.into(), translation.into());
    }

    /// Add a translation for `msgid` within `context`.
    pub fn insert_with_context(
        &mut self,
        context: impl Into<String>,
        msgid: impl Into<String>,
        translation: impl Into<String>,
    ) {
        self.contextual
            .insert((context.into(), msgid.into()), translation.into());
    }
}

impl Localizer for Catalog {
    fn gettext(&self, msgid: &str) -> String {
        self.plain
            .get(msgid)
            .cloned()
            .unwrap_or_else(|| msgid.to_string())
    }

    fn pgettext(&self, context: &str, msgid: &str) -> String {
        self.contextual
            .get(&(context.to_string(), msgid.to_string()))
            .cloned()
            .unwrap_or_else(|| self.gettext(msgid))
    }
}

/// Argument for `string_format`.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg {
    Str(String),
    Int(i64),
}

impl From<&str> for FormatArg {
    fn from(s: &str) -> Self {
        FormatArg::Str(s.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(s: String) -> Self {
        FormatArg::Str(s)
    }
}

impl From<i32> for FormatArg {
    fn from(i: i32) -> Self {
        FormatArg::Int(i64::from(i))
    }
}

impl From<i64> for FormatArg {
    fn from(i: i64) -> Self {
        FormatArg::Int(i)
    }
}

/// Substitute arguments into a printf-style template.
///
/// Supported directives:
/// - `%%` for a literal percent sign
/// - `%s` and `%d`, consuming arguments in order
/// - `%N$s` and `%N$d`, selecting the 1-based argument `N`
/// - a `+` flag before `d` to always print the sign
///
/// Directives that cannot be parsed, or that refer to a missing argument,
/// are copied through verbatim.
///
/// # Examples
///
/// ```rust
/// use zzbonus::i18n::{string_format, FormatArg};
///
/// let out = string_format(
///     "* %1$s: %2$+d%%",
///     &[FormatArg::from("Speed"), FormatArg::from(15)],
/// );
/// assert_eq!(out, "* Speed: +15%");
///
/// // Arguments can be reordered by the template
/// let out = string_format("%2$s %1$s", &["damage".into(), "fire".into()]);
/// assert_eq!(out, "fire damage");
/// ```
pub fn string_format(template: &str, args: &[FormatArg]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut next_arg = 0usize;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }

        let mut lookahead = chars.clone();
        match parse_directive(&mut lookahead) {
            Some(directive) => {
                let index = match directive.position {
                    Some(position) => position - 1,
                    None => {
                        next_arg += 1;
                        next_arg - 1
                    }
                };
                match args.get(index) {
                    Some(arg) => {
                        write_arg(&mut out, arg, directive.signed);
                        chars = lookahead;
                    }
                    None => out.push('%'),
                }
            }
            None => out.push('%'),
        }
    }

    out
}

struct Directive {
    position: Option<usize>,
    signed: bool,
}

/// Parse what follows a `%`, leaving `chars` after the conversion.
fn parse_directive(chars: &mut Peekable<Chars<'_>>) -> Option<Directive> {
    let mut digits = String::new();
    while let Some(d) = chars.peek().copied().filter(char::is_ascii_digit) {
        digits.push(d);
        chars.next();
    }

    let position = if digits.is_empty() {
        None
    } else {
        if chars.next() != Some('$') {
            return None;
        }
        match digits.parse::<usize>() {
            Ok(n) if n > 0 => Some(n),
            _ => return None,
        }
    };

    let signed = chars.peek() == Some(&'+');
    if signed {
        chars.next();
    }

    match chars.next() {
        Some('s') if !signed => Some(Directive { position, signed }),
        Some('d') => Some(Directive { position, signed }),
        _ => None,
    }
}

fn write_arg(out: &mut String, arg: &FormatArg, signed: bool) {
    // Writing into a String cannot fail.
    let _ = match arg {
        FormatArg::Str(s) => write!(out, "{}", s),
        FormatArg::Int(i) if signed => write!(out, "{:+}", i),
        FormatArg::Int(i) => write!(out, "{}", i),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_arguments() {
        let out = string_format("%s has %d", &["hero".into(), 3.into()]);
        assert_eq!(out, "hero has 3");
    }

    #[test]
    fn test_signed_integers() {
        assert_eq!(string_format("%1$+d", &[5.into()]), "+5");
        assert_eq!(string_format("%1$+d", &[(-5).into()]), "-5");
        assert_eq!(string_format("%1$+d", &[0.into()]), "+0");
        assert_eq!(string_format("%1$d", &[(-7).into()]), "-7");
    }

    #[test]
    fn test_literal_percent() {
        assert_eq!(string_format("100%%", &[]), "100%");
        assert_eq!(string_format("%1$d%%", &[50.into()]), "50%");
    }

    #[test]
    fn test_missing_argument_left_verbatim() {
        assert_eq!(string_format("%2$s!", &["only".into()]), "%2$s!");
        assert_eq!(string_format("%s and %s", &["one".into()]), "one and %s");
    }

    #[test]
    fn test_malformed_directive_left_verbatim() {
        assert_eq!(string_format("50% off", &[]), "50% off");
        assert_eq!(string_format("%0$s", &["x".into()]), "%0$s");
        assert_eq!(string_format("trailing %", &[]), "trailing %");
    }

    #[test]
    fn test_catalog_context_precedence() {
        let mut catalog = Catalog::new();
        catalog.insert("none", "aucun");
        catalog.insert_with_context("type of damage", "%1$s %2$s", "%2$s de %1$s");

        assert_eq!(catalog.pgettext("type of damage", "%1$s %2$s"), "%2$s de %1$s");
        assert_eq!(catalog.pgettext("other", "none"), "aucun");
        assert_eq!(catalog.pgettext("other", "missing"), "missing");
    }
}
