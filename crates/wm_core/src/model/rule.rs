//! `Rule` and `MonitorRule`: compiled-in client-adoption and per-monitor
//! startup tables.
//!
//! Modeled on a `Keymap`-style static table
//! construction (a `Vec` built once at startup, walked linearly) rather
//! than a hash lookup, since predicates are substring/optional and don't
//! admit a single hash key.

use crate::layout::LayoutKind;

#[derive(Debug, Clone, Default)]
pub struct RulePredicate {
    pub class: Option<String>,
    pub instance: Option<String>,
    pub title: Option<String>,
    pub window_type: Option<String>,
}

impl RulePredicate {
    /// All non-empty predicate fields must hold.
    pub fn matches(&self, class: &str, instance: &str, title: &str, window_type: Option<&str>) -> bool {
        self.class.as_deref().map_or(true, |p| class.contains(p))
            && self.instance.as_deref().map_or(true, |p| instance.contains(p))
            && self.title.as_deref().map_or(true, |p| title.contains(p))
            && self.window_type.as_deref().map_or(true, |p| window_type == Some(p))
    }
}

#[derive(Debug, Clone, Default)]
pub struct RuleEffects {
    pub tags: Option<u32>,
    pub is_floating: Option<bool>,
    pub float_pos: Option<String>,
    pub is_terminal: Option<bool>,
    pub no_swallow: Option<bool>,
    pub monitor: Option<i32>,
    pub match_once: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Rule {
    pub predicate: RulePredicate,
    pub effects: RuleEffects,
}

/// Per-monitor-id (or wildcard, `monitor_id = -1`) startup defaults.
#[derive(Debug, Clone)]
pub struct MonitorRule {
    pub monitor_id: i32,
    pub layout: LayoutKind,
    pub mfact: f32,
    pub nmaster: u32,
    pub show_bar: bool,
    pub tagset: u32,
}

impl MonitorRule {
    pub fn matches(&self, id: i32) -> bool {
        self.monitor_id < 0 || self.monitor_id == id
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdoptedEffects {
    pub tags: Option<u32>,
    pub is_floating: bool,
    pub float_pos: Option<String>,
    pub is_terminal: bool,
    pub no_swallow: bool,
    pub monitor: Option<i32>,
}

/// Apply every matching rule cumulatively, in table order, stopping at
/// the first `match_once` hit.
pub fn apply_rules(rules: &[Rule], class: &str, instance: &str, title: &str, window_type: Option<&str>) -> AdoptedEffects {
    let mut out = AdoptedEffects::default();
    for rule in rules {
        if !rule.predicate.matches(class, instance, title, window_type) {
            continue;
        }
        if let Some(tags) = rule.effects.tags {
            out.tags = Some(tags);
        }
        if let Some(f) = rule.effects.is_floating {
            out.is_floating = f;
        }
        if let Some(ref p) = rule.effects.float_pos {
            out.float_pos = Some(p.clone());
        }
        if let Some(t) = rule.effects.is_terminal {
            out.is_terminal = t;
        }
        if let Some(ns) = rule.effects.no_swallow {
            out.no_swallow = ns;
        }
        if let Some(m) = rule.effects.monitor {
            out.monitor = Some(m);
        }
        if rule.effects.match_once {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matchonce_idempotent() {
        let rules = vec![Rule {
            predicate: RulePredicate { class: Some("kitty".into()), ..Default::default() },
            effects: RuleEffects { tags: Some(4), match_once: true, ..Default::default() },
        }];
        let once = apply_rules(&rules, "kitty", "kitty", "title", None);
        let twice_a = apply_rules(&rules, "kitty", "kitty", "title", None);
        assert_eq!(once.tags, twice_a.tags);
    }

    #[test]
    fn substring_predicate_matching() {
        let pred = RulePredicate { title: Some("sp".into()), ..Default::default() };
        assert!(pred.matches("kitty", "kitty-sp", "kitty-sp-term", None));
        assert!(!pred.matches("kitty", "kitty", "term", None));
    }
}
