use crate::deck::Deck;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

/// Reads decks stored one JSON object per line (`.jsonl`).
pub struct DeckLoader;

impl DeckLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Deck>> {
        let file = File::open(&path)
            .with_context(|| format!("Failed to open file: {}", path.as_ref().display()))?;

        let reader = BufReader::new(file);
        let mut decks = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read line {}", line_num + 1))?;

            if line.trim().is_empty() {
                continue;
            }

            match self.parse_line(&line) {
                Ok(deck) => decks.push(deck),
                Err(e) => {
                    warn!(
                        file = %path.as_ref().display(),
                        line = line_num + 1,
                        error = %e,
                        "skipping malformed deck line"
                    );
                }
            }
        }

        Ok(decks)
    }

    /// Loads every `.jsonl` file below `dir_path`, oldest deck first.
    pub fn load_from_directory<P: AsRef<Path>>(&self, dir_path: P) -> Result<Vec<Deck>> {
        let mut all_decks = Vec::new();
        self.load_from_directory_recursive(dir_path.as_ref(), &mut all_decks)?;
        all_decks.sort_by_key(|deck| deck.created_at());
        Ok(all_decks)
    }

    fn load_from_directory_recursive(&self, dir_path: &Path, decks: &mut Vec<Deck>) -> Result<()> {
        let dir = std::fs::read_dir(dir_path)
            .with_context(|| format!("Failed to read directory: {}", dir_path.display()))?;

        for entry in dir {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if path.extension().is_some_and(|extension| extension == "jsonl") {
                    match self.load_from_file(&path) {
                        Ok(mut file_decks) => decks.append(&mut file_decks),
                        Err(e) => {
                            warn!(file = %path.display(), error = %e, "failed to load deck file");
                        }
                    }
                }
            } else if path.is_dir() {
                if let Err(e) = self.load_from_directory_recursive(&path, decks) {
                    warn!(dir = %path.display(), error = %e, "failed to load deck directory");
                }
            }
        }

        Ok(())
    }

    fn parse_line(&self, line: &str) -> Result<Deck> {
        serde_json::from_str(line).context("Failed to parse deck JSON")
    }
}

impl Default for DeckLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    const WW2: &str = r#"{"topic": "World War II", "size": 10, "shuffle": true, "created_at": "2025-11-24T10:00:00Z"}"#;
    const CELLS: &str = r#"{"topic": "Cell Parts", "size": 20, "definitions_first": true, "created_at": "2025-11-24T09:00:00Z"}"#;

    #[test]
    fn test_parse_valid_line() {
        let loader = DeckLoader::new();
        let deck = loader.parse_line(WW2).unwrap();

        assert_eq!(deck.topic(), "World War II");
        assert_eq!(deck.size(), 10);
        assert!(deck.shuffle());
        assert!(!deck.definitions_first());
    }

    #[test]
    fn test_missing_required_fields() {
        let loader = DeckLoader::new();
        assert!(loader.parse_line(r#"{"topic": "No size"}"#).is_err());
        assert!(loader.parse_line(r#"{"size": -1, "topic": "Negative"}"#).is_err());
    }

    #[test]
    fn test_load_from_file_skips_blank_and_malformed_lines() {
        let loader = DeckLoader::new();
        let mut temp_file = NamedTempFile::new().unwrap();

        let content = format!("{}\n\n{{\"topic\": \"broken\"\n{}\n", WW2, CELLS);
        temp_file.write_all(content.as_bytes()).unwrap();

        let decks = loader.load_from_file(temp_file.path()).unwrap();
        assert_eq!(decks.len(), 2);
        assert_eq!(decks[0].topic(), "World War II");
        assert_eq!(decks[1].topic(), "Cell Parts");
    }

    #[test]
    fn test_load_from_missing_file() {
        let loader = DeckLoader::new();
        assert!(loader.load_from_file("/definitely/not/here.jsonl").is_err());
    }

    #[test]
    fn test_load_from_directory_sorted_by_creation() {
        let loader = DeckLoader::new();
        let dir = tempdir().unwrap();
        let nested = dir.path().join("biology");
        std::fs::create_dir(&nested).unwrap();

        std::fs::write(dir.path().join("history.jsonl"), WW2).unwrap();
        std::fs::write(nested.join("cells.jsonl"), CELLS).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a deck").unwrap();

        let decks = loader.load_from_directory(dir.path()).unwrap();
        let topics: Vec<&str> = decks.iter().map(|deck| deck.topic()).collect();
        assert_eq!(topics, vec!["Cell Parts", "World War II"]);
    }
}
