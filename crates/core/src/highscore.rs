//! High-score module - the persisted top-10 list
//!
//! File format, one record per line:
//!
//! ```text
//! score,player_name,opponent_name
//! ```
//!
//! Fields are not escaped. Instead, commas and control characters are dropped
//! from names when a record is built, so every record stays one line with
//! three fields. Reading is forgiving: blank lines, lines with fewer than
//! three fields, and lines whose first field is not an integer are skipped.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::Serialize;
use thiserror::Error;

use crate::types::HIGH_SCORE_LIMIT;

/// One finished game from one player's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighScore {
    pub score: u16,
    pub player: String,
    /// Empty for solitaire games.
    pub opponent: String,
}

impl HighScore {
    /// Names are passed through [`record_name`].
    pub fn new(score: u16, player: impl Into<String>, opponent: impl Into<String>) -> Self {
        Self {
            score,
            player: record_name(player.into()),
            opponent: record_name(opponent.into()),
        }
    }

    /// Parse one line; `None` for malformed lines.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.trim().split(',');
        let score = fields.next()?.trim().parse::<u16>().ok()?;
        let player = fields.next()?;
        let opponent = fields.next()?;
        Some(Self::new(score, player, opponent))
    }

    pub fn to_line(&self) -> String {
        format!("{},{},{}", self.score, self.player, self.opponent)
    }
}

/// `name` without the characters that would break the line format: the
/// field separator and any control character (newlines included).
pub fn record_name(name: String) -> String {
    let bad = |c: char| c == ',' || c.is_control();
    if name.contains(bad) {
        name.replace(bad, "")
    } else {
        name
    }
}

/// High scores, kept sorted by score (highest first).
///
/// Sorting is stable: among equal scores, earlier entries stay ahead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HighScoreTable {
    entries: Vec<HighScore>,
}

impl HighScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse file contents, skipping malformed lines.
    pub fn parse(text: &str) -> Self {
        let mut entries = Vec::new();
        for (n, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match HighScore::parse_line(line) {
                Some(entry) => entries.push(entry),
                None => log::warn!("skipping malformed high-score line {}: {:?}", n + 1, line),
            }
        }
        let mut table = Self { entries };
        table.sort();
        table
    }

    /// File contents for the top [`HIGH_SCORE_LIMIT`] entries.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for entry in self.top(HIGH_SCORE_LIMIT) {
            out.push_str(&entry.to_line());
            out.push('\n');
        }
        out
    }

    /// Add an entry and re-sort. The list is not truncated here.
    pub fn push(&mut self, entry: HighScore) {
        self.entries.push(entry);
        self.sort();
    }

    /// Keep only the best `limit` entries.
    pub fn truncate(&mut self, limit: usize) {
        self.entries.truncate(limit);
    }

    /// The best `limit` entries.
    pub fn top(&self, limit: usize) -> &[HighScore] {
        &self.entries[..self.entries.len().min(limit)]
    }

    pub fn entries(&self) -> &[HighScore] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn sort(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
    }
}

#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("high-score file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the high-score list lives between sessions.
pub trait HighScoreStore {
    /// Load the list. A store that has never been written loads as empty.
    fn load(&self) -> Result<HighScoreTable, HighScoreError>;

    /// Replace the stored list with the top entries of `table`.
    fn save(&self, table: &HighScoreTable) -> Result<(), HighScoreError>;
}

/// Plain-text file store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: io::Error) -> HighScoreError {
        HighScoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> Result<HighScoreTable, HighScoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(HighScoreTable::parse(&text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HighScoreTable::new()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    /// Writes a sibling temp file, then renames it over the target.
    fn save(&self, table: &HighScoreTable) -> Result<(), HighScoreError> {
        let tmp = self.temp_path();
        fs::write(&tmp, table.to_text()).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            self.io_error(e)
        })
    }
}

/// In-process store. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    text: Rc<RefCell<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Rc::new(RefCell::new(text.into())),
        }
    }

    /// Current stored file contents.
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<HighScoreTable, HighScoreError> {
        Ok(HighScoreTable::parse(&self.text.borrow()))
    }

    fn save(&self, table: &HighScoreTable) -> Result<(), HighScoreError> {
        *self.text.borrow_mut() = table.to_text();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(
            HighScore::parse_line("250,Alice,Bob"),
            Some(HighScore::new(250, "Alice", "Bob"))
        );
        assert_eq!(
            HighScore::parse_line("180,Solo,\n"),
            Some(HighScore::new(180, "Solo", ""))
        );
        // Extra fields are ignored.
        assert_eq!(
            HighScore::parse_line("99,A,B,C"),
            Some(HighScore::new(99, "A", "B"))
        );
    }

    #[test]
    fn test_parse_line_malformed() {
        assert_eq!(HighScore::parse_line("250,Alice"), None);
        assert_eq!(HighScore::parse_line("lots,Alice,Bob"), None);
        assert_eq!(HighScore::parse_line("-5,Alice,Bob"), None);
        assert_eq!(HighScore::parse_line(""), None);
    }

    #[test]
    fn test_parse_table_skips_bad_lines_and_sorts() {
        let text = "120,A,B\nnot a score\n\n300,C,D\n12.5,E,F\n200,G\n250,H,I\n";
        let table = HighScoreTable::parse(text);
        let scores: Vec<u16> = table.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![300, 250, 120]);
    }

    #[test]
    fn test_equal_scores_keep_insertion_order() {
        let mut table = HighScoreTable::new();
        table.push(HighScore::new(200, "first", ""));
        table.push(HighScore::new(300, "top", ""));
        table.push(HighScore::new(200, "second", ""));

        let names: Vec<&str> = table.entries().iter().map(|e| e.player.as_str()).collect();
        assert_eq!(names, vec!["top", "first", "second"]);
    }

    #[test]
    fn test_to_text_caps_at_limit() {
        let mut table = HighScoreTable::new();
        for s in 0..15u16 {
            table.push(HighScore::new(s * 10, format!("p{}", s), "x"));
        }
        let text = table.to_text();
        assert_eq!(text.lines().count(), HIGH_SCORE_LIMIT);
        assert!(text.starts_with("140,p14,x\n"));
        // The in-memory table is not truncated by writing.
        assert_eq!(table.len(), 15);
    }

    #[test]
    fn test_top_and_truncate() {
        let mut table = HighScoreTable::parse("5,a,b\n7,c,d\n6,e,f\n");
        assert_eq!(table.top(2).len(), 2);
        assert_eq!(table.top(50).len(), 3);
        table.truncate(1);
        assert_eq!(table.entries(), &[HighScore::new(7, "c", "d")]);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("high_score.txt"));

        let mut table = HighScoreTable::new();
        for (s, name) in [(150, "a"), (275, "b"), (150, "c"), (90, "d")] {
            table.push(HighScore::new(s, name, "opp"));
        }
        store.save(&table).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, table);
        assert!(!dir.path().join("high_score.txt.tmp").exists());
    }

    #[test]
    fn test_names_cannot_split_or_forge_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("high_score.txt"));

        let mut table = HighScoreTable::new();
        table.push(HighScore::new(0, "Ann\n999", "Ben"));
        table.push(HighScore::new(0, "Ben", "Ann\n999"));
        table.push(HighScore::new(12, "Ann, Jr", "\tCy\r"));
        store.save(&table).unwrap();

        let text = fs::read_to_string(dir.path().join("high_score.txt")).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(!text.lines().any(|l| l.starts_with("999")));

        let loaded = store.load().unwrap();
        assert_eq!(loaded, table);
        assert_eq!(
            loaded.entries(),
            &[
                HighScore::new(12, "Ann Jr", "Cy"),
                HighScore::new(0, "Ann999", "Ben"),
                HighScore::new(0, "Ben", "Ann999"),
            ]
        );
    }

    #[test]
    fn test_record_name() {
        assert_eq!(record_name("Player 1".to_string()), "Player 1");
        assert_eq!(record_name("a,b\nc\u{7f}".to_string()), "abc");
        assert_eq!(record_name(",\n".to_string()), "");
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.txt"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_file_store_write_failure_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("no_such_dir").join("scores.txt"));
        let err = store.save(&HighScoreTable::new()).unwrap_err();
        assert!(err.to_string().contains("scores.txt"));
    }

    #[test]
    fn test_memory_store_shares_contents() {
        let store = MemoryStore::with_text("10,a,b\n");
        let handle = store.clone();

        let mut table = store.load().unwrap();
        table.push(HighScore::new(20, "c", "d"));
        store.save(&table).unwrap();

        assert_eq!(handle.text(), "20,c,d\n10,a,b\n");
    }
}
