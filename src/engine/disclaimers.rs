//! Disclaimer inference
//!
//! Plain substring lookup on the lowercased text, so "dores" also triggers
//! "dor". The baseline disclaimer is always appended last, then duplicates
//! are dropped keeping first-seen order.

use crate::rules::RuleSet;

/// Disclaimers recommended for `text`
pub fn infer(text: &str, rules: &RuleSet) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut needed: Vec<String> = Vec::new();

    for rule in &rules.disclaimers {
        if rule.triggers.iter().any(|t| lower.contains(t.as_str())) {
            push_unique(&mut needed, &rule.disclaimer);
        }
    }

    if let Some(baseline) = &rules.baseline_disclaimer {
        push_unique(&mut needed, baseline);
    }

    needed
}

fn push_unique(list: &mut Vec<String>, disclaimer: &str) {
    if !list.iter().any(|d| d == disclaimer) {
        list.push(disclaimer.to_string());
    }
}
