//! Weighted `Accept-Language` negotiation.

use std::cmp::Ordering;

/// One entry of an `Accept-Language` header, e.g. `fr-CH` or `en;q=0.8`.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRange {
    pub tag: String,
    pub weight: f32,
}

/// Parses an `Accept-Language` header into ranges ordered by descending
/// weight.
///
/// Entries without a quality parameter weigh 1.0. Entries whose parameter
/// is malformed, out of the 0..=1 range, or exactly zero are dropped.
/// Ties keep header order.
pub fn parse_accept_language(header: &str) -> Vec<LanguageRange> {
    let mut ranges: Vec<LanguageRange> = header
        .split(',')
        .filter_map(|item| {
            let item = item.trim();
            if item.is_empty() {
                return None;
            }
            match item.split_once(';') {
                None => Some(LanguageRange {
                    tag: item.to_string(),
                    weight: 1.0,
                }),
                Some((tag, params)) => {
                    let tag = tag.trim();
                    if tag.is_empty() {
                        return None;
                    }
                    let weight = parse_weight(params)?;
                    Some(LanguageRange {
                        tag: tag.to_string(),
                        weight,
                    })
                }
            }
        })
        .filter(|range| range.weight > 0.0)
        .collect();

    // Stable sort keeps header order for equal weights.
    ranges.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));
    ranges
}

fn parse_weight(params: &str) -> Option<f32> {
    let (key, value) = params.trim().split_once('=')?;
    if key.trim() != "q" {
        return None;
    }
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|q| (0.0..=1.0).contains(q))
}

/// Picks the best supported code for the header.
///
/// Ranges are tried in descending weight; a range matches a supported code
/// case-insensitively, either on the full tag or on its primary subtag
/// (`fr-CH` matches a supported `fr`). The `*` wildcard is skipped since
/// the caller's default already covers "anything".
pub fn negotiate(header: &str, supported: &[String]) -> Option<String> {
    for range in parse_accept_language(header) {
        if range.tag == "*" {
            continue;
        }
        if let Some(code) = match_tag(&range.tag, supported) {
            return Some(code);
        }
    }
    None
}

fn match_tag(tag: &str, supported: &[String]) -> Option<String> {
    if let Some(exact) = supported.iter().find(|code| code.eq_ignore_ascii_case(tag)) {
        return Some(exact.clone());
    }
    let primary = tag.split('-').next().unwrap_or(tag);
    supported
        .iter()
        .find(|code| code.eq_ignore_ascii_case(primary))
        .cloned()
}
