//! Normalization and validation of user supplied text.
//!
//! Sanitizers never fail: they always hand back a (possibly empty) cleaned
//! string. Validators are separate so a value can be cleaned for display even
//! when it is rejected, and re-validated later without being transformed twice.

use once_cell::sync::Lazy;
use regex::Regex;

pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_NAME_LEN: usize = 100;
pub const MIN_NAME_LEN: usize = 2;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_PASSWORD_LEN: usize = 128;
pub const MAX_POST_LEN: usize = 1000;

// Applied one after another, in this order. Case folding is ASCII only.
const DANGEROUS_PATTERNS: [&str; 16] = [
    "javascript:",
    "on[A-Za-z0-9_]+=",
    "script",
    "iframe",
    "object",
    "embed",
    "link",
    "meta",
    "style",
    "expression",
    r"url\(",
    "@import",
    "data:",
    "vbscript:",
    "mocha:",
    "livescript:",
];

static DANGEROUS: Lazy<Vec<Regex>> = Lazy::new(|| {
    DANGEROUS_PATTERNS
        .iter()
        .map(|pattern| {
            Regex::new(&format!("(?i-u){pattern}"))
                .expect("hardcoded sanitizer pattern is invalid")
        })
        .collect()
});

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("hardcoded email regex is invalid")
});

// Browser whitespace: WhiteSpace plus LineTerminator. Unlike Unicode
// White_Space it includes U+FEFF and excludes U+0085.
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+")
        .expect("hardcoded whitespace regex is invalid")
});

fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{b}' | '\u{c}' | '\r' | ' ' | '\u{a0}' | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}' | '\u{2029}' | '\u{202f}' | '\u{205f}' | '\u{3000}' | '\u{feff}'
    )
}

fn js_trim(input: &str) -> &str {
    input.trim_matches(is_js_whitespace)
}

fn strip_angle_brackets(input: &str) -> String {
    input.chars().filter(|c| *c != '<' && *c != '>').collect()
}

/// NUL, C0 controls other than tab/newline/carriage return, and DEL.
fn is_stripped_control(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{7f}')
}

fn strip_controls(input: &str) -> String {
    input.chars().filter(|c| !is_stripped_control(*c)).collect()
}

fn strip_dangerous(input: String) -> String {
    DANGEROUS.iter().fold(input, |text, pattern| {
        pattern.replace_all(&text, "").into_owned()
    })
}

fn truncate_chars(input: &str, max: usize) -> String {
    input.chars().take(max).collect()
}

/// General free text: trims, drops `<`/`>`, removes script-ish keywords and
/// control characters.
///
/// Keyword removal is a single substring pass, so removing one keyword can
/// join the halves of another (`"scr<script>ipt"` becomes `"script"`). Running
/// the function again on such output is not a no-op.
pub fn sanitize_input(input: &str) -> String {
    let text = strip_angle_brackets(js_trim(input));
    strip_controls(&strip_dangerous(text))
}

pub fn sanitize_email(input: &str) -> String {
    let lowered = js_trim(input).to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '@' | '.' | '_' | '-'))
        .collect();
    truncate_chars(&kept, MAX_EMAIL_LEN)
}

/// Display names keep ASCII word characters, whitespace, `.` and `-`.
/// Whitespace runs are collapsed after truncation.
pub fn sanitize_name(input: &str) -> String {
    let kept: String = strip_angle_brackets(js_trim(input))
        .chars()
        .filter(|c| {
            c.is_ascii_alphanumeric() || *c == '_' || is_js_whitespace(*c) || *c == '.' || *c == '-'
        })
        .collect();
    let truncated = truncate_chars(&kept, MAX_NAME_LEN);
    WHITESPACE_RUN.replace_all(&truncated, " ").into_owned()
}

/// Passwords keep case, surrounding whitespace and length; only markup
/// brackets and control characters are removed.
pub fn sanitize_password(input: &str) -> String {
    strip_controls(&strip_angle_brackets(input))
}

pub fn sanitize_post_content(input: &str) -> String {
    truncate_chars(&sanitize_input(input), MAX_POST_LEN)
}

/// Entity-encodes characters that are unsafe inside raw HTML.
pub fn sanitize_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            '`' => out.push_str("&#x60;"),
            '=' => out.push_str("&#x3D;"),
            other => out.push(other),
        }
    }
    out
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email) && email.chars().count() <= MAX_EMAIL_LEN
}

pub fn is_valid_password(password: &str) -> bool {
    let len = password.chars().count();
    (MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len)
}

pub fn is_valid_name(name: &str) -> bool {
    let len = js_trim(name).chars().count();
    (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len)
}
