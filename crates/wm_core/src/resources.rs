//! X resource database parsing.
//!
//! Modeled on small line-oriented config parsers (no
//! crate pulled in for this — `RESOURCE_MANAGER` is a flat `key:\tvalue`
//! text blob, not worth a combinator dependency, matching the house
//! style observed in `wm_ui`'s own font-pattern string handling).

use crate::config::ColorScheme;

fn parse_hex_color(s: &str) -> Option<u32> {
    let s = s.trim().strip_prefix('#')?;
    if s.len() != 6 {
        return None;
    }
    u32::from_str_radix(s, 16).ok()
}

/// Parse `RESOURCE_MANAGER` text and overlay any recognized, validly
/// formatted `#RRGGBB` keys onto `scheme`. Invalid or missing keys keep
/// the compiled-in default untouched.
pub fn apply_resource_overrides(text: &str, scheme: &mut ColorScheme) {
    let mut values = std::collections::HashMap::new();
    for line in text.lines() {
        let Some((key, val)) = line.split_once(':') else { continue };
        values.insert(key.trim().to_string(), val.trim().to_string());
    }

    macro_rules! apply {
        ($key:literal, $field:ident) => {
            if let Some(v) = values.get($key).and_then(|v| parse_hex_color(v)) {
                scheme.$field = v;
            }
        };
    }
    apply!("foreground", foreground);
    apply!("background", background);
    apply!("accent", accent);
    apply!("secondary", secondary);
    apply!("border", border);
    for i in 0..16 {
        let key = format!("color{i}");
        if let Some(v) = values.get(&key).and_then(|v| parse_hex_color(v)) {
            scheme.palette[i] = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_hex_values_are_ignored() {
        let mut scheme = ColorScheme::default();
        let before = scheme;
        apply_resource_overrides("foreground:\tnotacolor\n", &mut scheme);
        assert_eq!(scheme.foreground, before.foreground);
    }

    #[test]
    fn valid_hex_values_override_defaults() {
        let mut scheme = ColorScheme::default();
        apply_resource_overrides("background:\t#112233\n", &mut scheme);
        assert_eq!(scheme.background, 0x112233);
    }
}
