use regex::Regex;

/// Compile a shell-style glob into an anchored regex over a single path component.
///
/// Supports `*` (any run of non-`/` characters), `?` (one non-`/` character),
/// `[...]` classes with ranges and a leading `^` for negation, and `\` escapes.
/// Returns `None` for malformed patterns so callers can treat them as non-matching.
pub fn compile(pattern: &str) -> Option<Regex> {
    let regex_str = glob_to_regex(pattern)?;
    Regex::new(&regex_str).ok()
}

fn glob_to_regex(pattern: &str) -> Option<String> {
    let mut regex_pattern = String::with_capacity(pattern.len() * 2 + 2);
    regex_pattern.push('^');

    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '*' => regex_pattern.push_str("[^/]*"),
            '?' => regex_pattern.push_str("[^/]"),
            '\\' => push_literal(&mut regex_pattern, chars.next()?),
            '[' => push_class(&mut regex_pattern, &mut chars)?,
            _ => push_literal(&mut regex_pattern, c),
        }
    }

    regex_pattern.push('$');
    Some(regex_pattern)
}

/// Consume a character class body up to and including the closing `]`.
fn push_class(out: &mut String, chars: &mut std::str::Chars<'_>) -> Option<()> {
    let mut class = String::from("[");
    if chars.clone().next() == Some('^') {
        chars.next();
        class.push('^');
    }

    let mut items = 0;
    loop {
        let lo = match chars.next()? {
            ']' if items > 0 => break,
            c => class_char(c, chars)?,
        };
        push_literal(&mut class, lo);

        if chars.clone().next() == Some('-') {
            chars.next();
            let hi = class_char(chars.next()?, chars)?;
            class.push('-');
            push_literal(&mut class, hi);
        }
        items += 1;
    }

    class.push(']');
    out.push_str(&class);
    Some(())
}

/// Resolve one class member, rejecting unescaped `-` and `]` where a character is required.
fn class_char(c: char, chars: &mut std::str::Chars<'_>) -> Option<char> {
    match c {
        '\\' => chars.next(),
        '-' | ']' => None,
        c => Some(c),
    }
}

fn push_literal(out: &mut String, c: char) {
    out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
}
