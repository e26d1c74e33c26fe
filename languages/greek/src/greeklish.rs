/// Latin letter -> Greek letter(s) for typing Greek on a Latin keyboard
fn to_greek(c: char) -> Option<&'static str> {
    let greek = match c {
        'a' => "α",
        'b' => "β",
        // No direct equivalent, borrowed words mostly use σ
        'c' => "σ",
        'd' => "δ",
        'e' => "ε",
        'f' => "φ",
        'g' => "γ",
        'h' => "η",
        'i' => "ι",
        'j' => "τζ",
        'k' => "κ",
        'l' => "λ",
        'm' => "μ",
        'n' => "ν",
        'o' => "ο",
        'p' => "π",
        'q' => "κ",
        'r' => "ρ",
        's' => "σ",
        't' => "τ",
        'u' => "υ",
        'v' => "β",
        'w' => "ω",
        'x' => "χ",
        'y' => "υ",
        'z' => "ζ",
        _ => return None,
    };
    Some(greek)
}

/// "Xara" -> "χαρα". Non-Latin characters pass through unchanged.
pub fn greeklish_to_greek(word: &str) -> String {
    let mut out = String::with_capacity(word.len() * 2);
    for c in word.chars().flat_map(char::to_lowercase) {
        match to_greek(c) {
            Some(greek) => out.push_str(greek),
            None => out.push(c),
        }
    }

    // Word-final sigma
    if out.ends_with('σ') {
        out.pop();
        out.push('ς');
    }

    out
}
