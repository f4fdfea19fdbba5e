use std::io::{self, Read, Write};

/// One user-defined rewrite: typing `alias` runs `target`. Both fields are
/// owned copies, never borrows into a reusable line buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub alias: String,
    pub target: String,
}

/// Ordered alias table. Insertion order is significant: lookup and removal
/// both take the first match, so when duplicate alias names exist the
/// earliest surviving entry wins. The table grows without bound.
#[derive(Debug, Default)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    pub fn new() -> Self {
        AliasTable {
            entries: Vec::new(),
        }
    }

    /// Appends an entry. Duplicate alias names are not rejected.
    pub fn add(&mut self, alias: &str, target: &str) {
        self.entries.push(AliasEntry {
            alias: alias.to_owned(),
            target: target.to_owned(),
        });
    }

    /// Removes the first entry whose alias matches, keeping the relative
    /// order of the rest. Silently does nothing when no entry matches.
    pub fn remove(&mut self, alias: &str) {
        if let Some(pos) = self.entries.iter().position(|e| e.alias == alias) {
            self.entries.remove(pos);
        }
    }

    /// Target of the first entry whose alias matches, scanning in insertion
    /// order.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.alias == name)
            .map(|e| e.target.as_str())
    }

    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes one `alias target` line per entry, in insertion order.
    pub fn save_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for entry in &self.entries {
            writeln!(writer, "{} {}", entry.alias, entry.target)?;
        }
        Ok(())
    }

    /// Reads whitespace-separated tokens, pairing them up as
    /// `(alias, target)` and appending each pair exactly as `add` would.
    /// Returns the appended entries so the caller can report them. A
    /// trailing unpaired token is ignored.
    pub fn load_from<R: Read>(&mut self, reader: &mut R) -> io::Result<Vec<AliasEntry>> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let mut loaded = Vec::new();
        let mut words = content.split_whitespace();
        while let (Some(alias), Some(target)) = (words.next(), words.next()) {
            self.add(alias, target);
            loaded.push(AliasEntry {
                alias: alias.to_owned(),
                target: target.to_owned(),
            });
        }
        Ok(loaded)
    }
}
