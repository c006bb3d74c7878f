//! Weight Codec
//!
//! A phrase weight is written by wrapping the phrase body: `(body:weight)`.
//! No wrapper means the default weight of `1.0`. Weights are always written
//! with one decimal place and edited in steps that stay inside
//! [`MIN_WEIGHT`]..=[`MAX_WEIGHT`].
//!
//! Malformed numbers never fail: they read back as the default weight.

use crate::checklist::line;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

pub const MIN_WEIGHT: f64 = 0.1;
pub const MAX_WEIGHT: f64 = 2.0;
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// `(body:number)`. The body is matched lazily so that `(a:b:1.2)` keeps
/// `a:b` as its body.
static WEIGHT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^()]+?):(-?[0-9.]+)\)").unwrap());

/// Round to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Effective weight of a phrase. Only the first wrapper counts.
pub fn parse_weight(text: &str) -> f64 {
    WEIGHT_REGEX
        .captures(text)
        .map(|caps| caps[2].parse::<f64>().unwrap_or(DEFAULT_WEIGHT))
        .unwrap_or(DEFAULT_WEIGHT)
}

/// Replace every `(body:weight)` wrapper with its bare body.
pub fn strip_weight(text: &str) -> Cow<'_, str> {
    WEIGHT_REGEX.replace_all(text, "${1}")
}

/// Rewrite a phrase with the given weight.
///
/// Existing wrappers and a cosmetic trailing comma are dropped first. A weight
/// of `1.0` (after rounding to one decimal) yields the bare body.
pub fn set_weight(text: &str, weight: f64) -> String {
    let unwrapped = strip_weight(text);
    let body = line::strip_trailing_comma(&unwrapped).trim();
    let weight = round_to_tenth(weight);

    if weight == DEFAULT_WEIGHT {
        body.to_string()
    } else {
        format!("({}:{:.1})", body, weight)
    }
}

/// Weight label for display, empty for the default weight.
pub fn format_weight_label(text: &str) -> String {
    let weight = parse_weight(text);
    if weight == DEFAULT_WEIGHT {
        String::new()
    } else {
        format!("{:.1}", weight)
    }
}

/// Step the weight of a phrase by `delta`.
///
/// The policy is asymmetric:
/// - a result below [`MIN_WEIGHT`] leaves the text unchanged
/// - a result above [`MAX_WEIGHT`] is refused when increasing and clamped to
///   the ceiling when decreasing
/// - a stored weight above the ceiling snaps to the ceiling on the first
///   decrease, whatever the size of the step
pub fn adjust_weight(text: &str, delta: f64) -> String {
    if !delta.is_finite() {
        log::debug!("ignoring non-finite weight delta {}", delta);
        return text.to_string();
    }

    let current = parse_weight(text);
    let proposed = round_to_tenth(current + delta);

    if proposed < MIN_WEIGHT {
        log::trace!("weight {:.1} is below the floor, keeping {:?}", proposed, text);
        return text.to_string();
    }

    if proposed > MAX_WEIGHT {
        if delta > 0.0 {
            log::trace!("weight {:.1} is above the ceiling, keeping {:?}", proposed, text);
            return text.to_string();
        }
        return set_weight(text, MAX_WEIGHT);
    }

    if current > MAX_WEIGHT && delta < 0.0 {
        return set_weight(text, MAX_WEIGHT);
    }

    set_weight(text, proposed)
}
