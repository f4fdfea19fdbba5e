use std::{borrow::Cow, fs, path::Path};

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

use crate::core::aliases::AliasEntry;
use crate::highlight::SyntaxHighlighter;

/// Tab completion for the prompt: the first word completes over builtin and
/// alias names, later words complete filesystem paths. The builtin list is
/// handed over by the registry, the alias list is refreshed by the loop.
#[derive(Clone)]
pub struct ShellCompleter {
    builtins: Vec<String>,
    aliases: Vec<String>,
    highlighter: SyntaxHighlighter,
}

impl ShellCompleter {
    pub fn new(builtins: Vec<String>) -> Self {
        ShellCompleter {
            builtins,
            aliases: Vec::new(),
            highlighter: SyntaxHighlighter::new(),
        }
    }

    pub fn update_aliases(&mut self, entries: &[AliasEntry]) {
        self.aliases = entries.iter().map(|e| e.alias.clone()).collect();
    }

    fn complete_command(&self, word: &str) -> Vec<Pair> {
        let mut matches = Vec::new();
        for name in &self.builtins {
            if name.starts_with(word) {
                matches.push(Pair {
                    display: name.clone(),
                    replacement: name.clone(),
                });
            }
        }
        for alias in &self.aliases {
            if alias.starts_with(word) {
                matches.push(Pair {
                    display: format!("{} (alias)", alias),
                    replacement: alias.clone(),
                });
            }
        }
        matches
    }

    fn complete_path(&self, word: &str) -> Vec<Pair> {
        let (dir, prefix) = match word.rfind('/') {
            Some(pos) => (&word[..pos + 1], &word[pos + 1..]),
            None => ("", word),
        };
        let search_dir = if dir.is_empty() { "." } else { dir };

        let mut matches = Vec::new();
        if let Ok(entries) = fs::read_dir(Path::new(search_dir)) {
            for entry in entries.filter_map(Result::ok) {
                let name = entry.file_name().to_string_lossy().into_owned();
                if name.starts_with(prefix) {
                    matches.push(Pair {
                        display: name.clone(),
                        replacement: format!("{}{}", dir, name),
                    });
                }
            }
        }
        matches
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlighter.highlight_command(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(self.highlighter.highlight_hint(hint))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_up_to_cursor = &line[..pos];
        let mut words: Vec<&str> = line_up_to_cursor.split_whitespace().collect();

        if line_up_to_cursor.ends_with(' ') {
            words.push("");
        }

        let (start, matches) = match words.len() {
            0 => (0, self.complete_command("")),
            1 => {
                let word = words[0];
                let start = line_up_to_cursor.rfind(word).unwrap_or(0);
                (start, self.complete_command(word))
            }
            _ => {
                let word = words.last().copied().unwrap_or("");
                let start = if word.is_empty() {
                    pos
                } else {
                    line_up_to_cursor.rfind(word).unwrap_or(pos)
                };
                (start, self.complete_path(word))
            }
        };

        Ok((start, matches))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_builtin_names() {
        let completer = ShellCompleter::new(vec![
            "setshellname".to_string(),
            "setterminator".to_string(),
            "stop".to_string(),
        ]);

        let matches = completer.complete_command("set");
        let names: Vec<&str> = matches.iter().map(|p| p.replacement.as_str()).collect();
        assert_eq!(names, vec!["setshellname", "setterminator"]);
    }

    #[test]
    fn test_completes_alias_names() {
        let mut completer = ShellCompleter::new(vec!["stop".to_string()]);
        completer.update_aliases(&[AliasEntry {
            alias: "ll".to_string(),
            target: "ls".to_string(),
        }]);

        let matches = completer.complete_command("l");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].replacement, "ll");
        assert_eq!(matches[0].display, "ll (alias)");
    }

    #[test]
    fn test_no_matches() {
        let completer = ShellCompleter::new(vec!["stop".to_string()]);

        assert!(completer.complete_command("zzz").is_empty());
    }
}
