//! Case conversions used for routes, file names and translation keys.

/// Word-based kebab case: `ButtonBase` → `button-base`,
/// `Unstable_TrapFocus` → `unstable-trap-focus`, `H1` → `h-1`.
pub fn kebab_case(input: &str) -> String {
    words(input)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Hyphen before every capital after the first character, then lower
/// case: `ButtonBase` → `button-base`, `TableHead` → `table-head`.
///
/// Used to locate style metadata files, which are named this way.
pub fn hyphenate(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    for (index, ch) in input.chars().enumerate() {
        if index > 0 && ch.is_ascii_uppercase() {
            out.push('-');
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}

/// First character upper-cased: `onClick` → `OnClick`.
pub fn upper_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    for run in input.split(|ch: char| !ch.is_alphanumeric()) {
        let chars: Vec<char> = run.chars().collect();
        let mut current = String::new();
        for (index, &ch) in chars.iter().enumerate() {
            if let Some(&prev) = index.checked_sub(1).and_then(|prev| chars.get(prev)) {
                let next = chars.get(index + 1).copied();
                let boundary = (prev.is_lowercase() && ch.is_uppercase())
                    || (prev.is_alphabetic() && ch.is_numeric())
                    || (prev.is_numeric() && ch.is_alphabetic())
                    || (prev.is_uppercase()
                        && ch.is_uppercase()
                        && next.is_some_and(char::is_lowercase));
                if boundary && !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            current.push(ch);
        }
        if !current.is_empty() {
            words.push(current);
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_case_splits_words() {
        assert_eq!(kebab_case("ButtonBase"), "button-base");
        assert_eq!(kebab_case("Unstable_TrapFocus"), "unstable-trap-focus");
        assert_eq!(kebab_case("HTMLElement"), "html-element");
        assert_eq!(kebab_case("H1"), "h-1");
    }

    #[test]
    fn hyphenate_marks_every_capital() {
        assert_eq!(hyphenate("ButtonBase"), "button-base");
        assert_eq!(hyphenate("Badge"), "badge");
        assert_eq!(hyphenate("TableHead"), "table-head");
    }

    #[test]
    fn upper_first_only_touches_the_first_char() {
        assert_eq!(upper_first("onClick"), "OnClick");
        assert_eq!(upper_first("aria-label"), "Aria-label");
        assert_eq!(upper_first(""), "");
    }
}
