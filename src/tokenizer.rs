/// Characters that separate words on an input line.
const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\u{7}'];

/// Splits a line into owned word tokens. Runs of delimiters collapse, so an
/// empty or all-whitespace line yields no tokens. There is no quoting,
/// escaping, or comment syntax.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(&DELIMITERS[..])
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}
