//! Regex patterns for numeric claims and the single-field scanner.

use std::sync::LazyLock;

use predikt_core::models::{ClaimKind, NumericalClaim, Scale};
use regex::{Captures, Regex};

/// "$45 billion", "$1.2B", "$500k", "$3,400,000".
static CURRENCY_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\$\s?(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)(?:\s?(trillion|billion|million|thousand|tn|bn|mn|[tbmk]))?\b",
    )
    .unwrap()
});

/// "45 billion USD", "2.5m dollars".
static CURRENCY_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)(?:\s?(trillion|billion|million|thousand|tn|bn|mn|[tbmk]))?\s?(?:usd|us dollars|dollars)\b",
    )
    .unwrap()
});

/// "23%", "-4.5 %", "1,500%", "12 percent".
static PERCENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)([+-]?\b(?:\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?))\s?(?:%|percent\b|per cent\b)",
    )
    .unwrap()
});

/// "1.2 million users", "40,000 active wallets".
static COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,3}(?:,\d{3})+|\d+(?:\.\d+)?)(?:\s?(million|billion|thousand|[mk]))?\s+(?:(?:active|monthly|daily|unique|registered)\s+)?(?:users|wallets|holders|transactions|customers|developers|accounts)\b",
    )
    .unwrap()
});

struct Candidate {
    start: usize,
    end: usize,
    kind: ClaimKind,
    value: f64,
    scale: Scale,
}

/// Scan one field and return its claims in order of appearance.
///
/// Overlapping matches resolve to the earliest start, then the longest span.
pub(crate) fn scan_field(field: &str, text: &str, context_chars: usize) -> Vec<NumericalClaim> {
    let mut candidates = Vec::new();
    collect(&CURRENCY_PREFIX_RE, text, ClaimKind::Currency, &mut candidates);
    collect(&CURRENCY_SUFFIX_RE, text, ClaimKind::Currency, &mut candidates);
    collect(&PERCENT_RE, text, ClaimKind::Percentage, &mut candidates);
    collect(&COUNT_RE, text, ClaimKind::Count, &mut candidates);

    candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut claims = Vec::new();
    let mut covered_until = 0;
    for c in candidates {
        if c.start < covered_until {
            continue;
        }
        covered_until = c.end;
        claims.push(NumericalClaim {
            field: field.to_string(),
            raw: text[c.start..c.end].to_string(),
            value: c.value,
            kind: c.kind,
            scale: c.scale,
            context: context_window(text, c.start, c.end, context_chars).to_lowercase(),
            offset: c.start,
        });
    }
    claims
}

fn collect(re: &Regex, text: &str, kind: ClaimKind, out: &mut Vec<Candidate>) {
    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        // A number glued to a preceding "$" belongs to the currency pattern.
        if kind == ClaimKind::Count && text[..whole.start()].ends_with('$') {
            continue;
        }
        if let Some((value, scale)) = parse_magnitude(&caps, kind) {
            out.push(Candidate {
                start: whole.start(),
                end: whole.end(),
                kind,
                value,
                scale,
            });
        }
    }
}

fn parse_magnitude(caps: &Captures<'_>, kind: ClaimKind) -> Option<(f64, Scale)> {
    let digits = caps.get(1)?.as_str().replace(',', "");
    let number: f64 = digits.parse().ok()?;
    let scale = match kind {
        ClaimKind::Percentage => Scale::Unit,
        _ => caps
            .get(2)
            .map(|m| Scale::from_suffix(m.as_str()))
            .unwrap_or(Scale::Unit),
    };
    let value = number * scale.multiplier();
    value.is_finite().then_some((value, scale))
}

/// Up to `chars` characters on each side of `[start, end)`, match included.
fn context_window(text: &str, start: usize, end: usize, chars: usize) -> &str {
    let from = if chars == 0 {
        start
    } else {
        text[..start]
            .char_indices()
            .rev()
            .take(chars)
            .last()
            .map(|(i, _)| i)
            .unwrap_or(start)
    };
    let to = text[end..]
        .char_indices()
        .nth(chars)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());
    &text[from..to]
}
