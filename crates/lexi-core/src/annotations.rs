use lexi_config::language::LanguagePair;

/// Remove trailing grammatical markers ("adj", "ουσ θηλ", "vtr + prep") and
/// dangling `+` connectors until nothing more comes off.
///
/// A marker only matches as a whole trailing token, so "ration" keeps its "n"
/// even though "n" is a marker.
pub fn strip_annotations(text: &str, annotations: &[String]) -> String {
    let mut markers: Vec<&str> = annotations
        .iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .collect();
    markers.sort_by_key(|m| std::cmp::Reverse(m.len()));

    let mut current = text.trim();
    loop {
        let before = current;
        for marker in &markers {
            if let Some(rest) = strip_trailing_token(current, marker) {
                current = rest.trim_end();
            }
            current = current.trim_end_matches('+').trim_end();
        }
        if current == before {
            break;
        }
    }

    current.to_string()
}

fn strip_trailing_token<'t>(text: &'t str, token: &str) -> Option<&'t str> {
    let rest = text.strip_suffix(token)?;
    if rest.is_empty() || rest.ends_with(char::is_whitespace) {
        Some(rest)
    } else {
        None
    }
}

/// Clean candidate words out of one scraped word cell
pub fn parse_words(text: &str, pair: &LanguagePair) -> Vec<String> {
    let profile = pair.profile_for(text.trim());
    let stripped = strip_annotations(text, &profile.annotations);

    stripped
        .split(", ")
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use lexi_config::language::LanguageProfile;

    use super::*;

    fn pair() -> LanguagePair {
        LanguagePair {
            native: LanguageProfile::new("el", &["επίθ", "ουσ θηλ", "ρ αμ + επίρ", "ρ αμ", "επίρ"]),
            reference: LanguageProfile::new("en", &["adj", "n", "vtr", "vtr phrasal sep", "vtr + prep"]),
            ..LanguagePair::default()
        }
    }

    #[test]
    fn test_strip_reference_markers() {
        let pair = pair();
        assert_eq!(parse_words("daily adj", &pair), vec!["daily"]);
        assert_eq!(parse_words("take off vtr phrasal sep", &pair), vec!["take off"]);
        assert_eq!(parse_words("look vtr + prep", &pair), vec!["look"]);
        assert_eq!(parse_words("ration n", &pair), vec!["ration"]);
    }

    #[test]
    fn test_strip_native_markers_and_split() {
        let pair = pair();
        assert_eq!(
            parse_words("ημερήσιος, ημερήσια, ημερήσιο επίθ", &pair),
            vec!["ημερήσιος", "ημερήσια", "ημερήσιο"]
        );
        assert_eq!(parse_words("τρέχω ρ αμ + επίρ", &pair), vec!["τρέχω"]);
        assert_eq!(parse_words("μέρα ουσ θηλ", &pair), vec!["μέρα"]);
    }

    #[test]
    fn test_only_markers_yields_nothing() {
        let pair = pair();
        assert!(parse_words("ρ αμ + επίρ", &pair).is_empty());
        assert!(parse_words("  ", &pair).is_empty());
    }

    #[test]
    fn test_strip_is_idempotent() {
        let markers = pair().native.annotations;
        for text in ["ημερήσιος επίθ", "τρέχω ρ αμ +", "καλά επίρ επίρ", "σπίτι"] {
            let once = strip_annotations(text, &markers);
            assert_eq!(strip_annotations(&once, &markers), once);
        }
        assert_eq!(strip_annotations("καλά επίρ επίρ", &markers), "καλά");
    }
}
