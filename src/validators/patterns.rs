//! Named validation patterns used by the VCH forms
//!
//! Composite patterns are assembled from the source text of their parts, so
//! a fix to `IP_V4_SOURCE` reaches `ip`, `ipOrFqdn`, `ipList` and
//! `whitelistRegistry` alike. Matching is an unanchored search: anchors are
//! part of each source, which matters for the list patterns where the inner
//! `$`/`^` of the embedded union survive.

use clap::ValueEnum;
use fancy_regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// Rejects `%&*$#@!\/:?"<>;'|`. The doubled `|` before `]` is part of the
// class, not an alternation.
pub const SUPPORTED_CHARS_SOURCE: &str = r#"^[^%|&|*|$|#|@|!|\\|/|:|?|"|<|>|;|'||]+$"#;
pub const UNLIMITED_SOURCE: &str = r"^[Uu]nlimited$";
pub const NUMBER_SOURCE: &str = r"^[0-9]+$";
pub const IP_V4_SOURCE: &str = r"^(([0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])\.){3}([0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])$";
// no `::` compression, uppercase hex only
pub const IP_V6_SOURCE: &str = r"^(?:[A-F0-9]{1,4}:){7}[A-F0-9]{1,4}$";
pub const FQDN_SOURCE: &str = r"^((?=[a-z0-9-]{1,63}\.)(xn--)?[a-z0-9]+(-[a-z0-9]+)*\.)+[a-z]{2,63}$";
pub const CIDR_SOURCE: &str = r"^(?:(?:[0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])\.){3}(?:[0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])(?:/(?:[0-9]|[1-2][0-9]|3[0-2]))$";
pub const WILDCARD_DOMAIN_SOURCE: &str = r"^(\*\.)?([a-z0-9][a-z0-9-]*[a-z0-9]\.)+[a-z]+$";
pub const CAMEL_CASE_SOURCE: &str = r"([a-z])([A-Z])";

/// A compiled, named regular expression.
pub struct Pattern {
    name: &'static str,
    source: String,
    regex: Regex,
}

impl Pattern {
    fn compile(name: &'static str, source: impl Into<String>) -> Self {
        let source = source.into();
        let regex = Regex::new(&source)
            .unwrap_or_else(|e| panic!("built-in pattern '{name}' does not compile: {e}"));
        Self {
            name,
            source,
            regex,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Search `value` for a match. A search that exceeds the backtracking
    /// limit counts as a failed match.
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value).unwrap_or(false)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("name", &self.name)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.source)
    }
}

/// Alternation of whole patterns, each wrapped in a non-capturing group.
fn any_of(sources: &[&str]) -> String {
    sources
        .iter()
        .map(|s| format!("(?:{s})"))
        .collect::<Vec<_>>()
        .join("|")
}

/// Comma separated list of items matching the union of `sources`. The union
/// is joined bare and only its outermost `^` and `$` are dropped.
fn list_of(sources: &[&str]) -> String {
    let joined = sources.join("|");
    let inner = &joined[1..joined.len() - 1];
    format!(r"(\s*({inner})+\s*)(,\s*({inner})+\s*)*")
}

pub static SUPPORTED_CHARS: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::compile("supportedChars", SUPPORTED_CHARS_SOURCE));
pub static UNLIMITED: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::compile("unlimited", UNLIMITED_SOURCE));
pub static NUMBER: LazyLock<Pattern> = LazyLock::new(|| Pattern::compile("number", NUMBER_SOURCE));
pub static UNLIMITED_OR_NUMBER: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::compile("unlimitedOrNumber", any_of(&[UNLIMITED_SOURCE, NUMBER_SOURCE]))
});
pub static IP_V4: LazyLock<Pattern> = LazyLock::new(|| Pattern::compile("ipV4", IP_V4_SOURCE));
pub static IP_V6: LazyLock<Pattern> = LazyLock::new(|| Pattern::compile("ipV6", IP_V6_SOURCE));
pub static IP: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::compile("ip", any_of(&[IP_V4_SOURCE, IP_V6_SOURCE])));
pub static FQDN: LazyLock<Pattern> = LazyLock::new(|| Pattern::compile("fqdn", FQDN_SOURCE));
pub static CIDR: LazyLock<Pattern> = LazyLock::new(|| Pattern::compile("cidr", CIDR_SOURCE));
pub static WILDCARD_DOMAIN: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::compile("wildcardDomain", WILDCARD_DOMAIN_SOURCE));
pub static IP_OR_FQDN: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::compile(
        "ipOrFqdn",
        any_of(&[IP_V4_SOURCE, IP_V6_SOURCE, FQDN_SOURCE]),
    )
});
pub static IP_LIST: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::compile("ipList", list_of(&[IP_V4_SOURCE, IP_V6_SOURCE])));
pub static CIDR_LIST: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::compile("cidrList", list_of(&[CIDR_SOURCE])));
pub static WHITELIST_REGISTRY: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::compile(
        "whitelistRegistry",
        any_of(&[
            IP_V4_SOURCE,
            IP_V6_SOURCE,
            FQDN_SOURCE,
            CIDR_SOURCE,
            WILDCARD_DOMAIN_SOURCE,
        ]),
    )
});
pub static CAMEL_CASE: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::compile("camelCase", CAMEL_CASE_SOURCE));

/// Pattern lookup by name, for callers that pick a pattern at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PatternName {
    SupportedChars,
    Unlimited,
    Number,
    UnlimitedOrNumber,
    IpV4,
    IpV6,
    Ip,
    Fqdn,
    Cidr,
    WildcardDomain,
    IpOrFqdn,
    IpList,
    CidrList,
    WhitelistRegistry,
}

impl PatternName {
    pub fn pattern(self) -> &'static Pattern {
        match self {
            PatternName::SupportedChars => &SUPPORTED_CHARS,
            PatternName::Unlimited => &UNLIMITED,
            PatternName::Number => &NUMBER,
            PatternName::UnlimitedOrNumber => &UNLIMITED_OR_NUMBER,
            PatternName::IpV4 => &IP_V4,
            PatternName::IpV6 => &IP_V6,
            PatternName::Ip => &IP,
            PatternName::Fqdn => &FQDN,
            PatternName::Cidr => &CIDR,
            PatternName::WildcardDomain => &WILDCARD_DOMAIN,
            PatternName::IpOrFqdn => &IP_OR_FQDN,
            PatternName::IpList => &IP_LIST,
            PatternName::CidrList => &CIDR_LIST,
            PatternName::WhitelistRegistry => &WHITELIST_REGISTRY,
        }
    }
}

/// Turn a form key into a label: `cpuLimit` becomes `cpu Limit`.
pub fn split_camel_case(key: &str) -> String {
    CAMEL_CASE.regex.replace_all(key, "$1 $2").into_owned()
}
