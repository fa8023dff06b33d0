use vocab_config::ui::UiConfig;
use vocab_types::{Entry, ViewportInsets, WordEntryDetailed};

/// Text rendering of the vocabulary list, clipped to the panel below the navbar
pub struct VocabularyView {
    rows: usize,
}

impl VocabularyView {
    pub fn new(insets: &ViewportInsets, ui: &UiConfig) -> Self {
        let rows = insets.panel_height / ui.line_height.max(1);
        Self {
            rows: (rows as usize).max(1),
        }
    }

    /// Number of lines that fit in the panel
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn render(&self, entries: &[Entry]) -> Vec<String> {
        if entries.is_empty() {
            return vec!["(no words loaded)".to_string()];
        }

        let mut lines = Vec::new();
        for entry in entries {
            render_entry(entry, &mut lines);
        }

        if lines.len() > self.rows {
            let kept = self.rows - 1;
            let hidden = lines.len() - kept;
            lines.truncate(kept);
            lines.push(format!("… ({hidden} more lines)"));
        }

        lines
    }
}

fn render_entry(entry: &Entry, lines: &mut Vec<String>) {
    match entry {
        Entry::Basic(word) => lines.push(word.headword.clone()),
        Entry::Detailed(word) => lines.push(headline(word)),
    }

    for t in entry.translations() {
        lines.push(format!("  {}. {}", t.part_of_speech, t.translation));
    }

    if let Entry::Detailed(word) = entry {
        for p in &word.phrases {
            lines.push(format!("  ~ {}  {}", p.phrase, p.translation));
        }
        for s in &word.sentences {
            lines.push(format!("  > {}  {}", s.sentence, s.translation));
        }
    }
}

fn headline(word: &WordEntryDetailed) -> String {
    let mut line = word.headword.clone();
    if !word.pronunciation_us.is_empty() {
        line.push_str(&format!("  US /{}/", word.pronunciation_us));
    }
    if !word.pronunciation_uk.is_empty() {
        line.push_str(&format!("  UK /{}/", word.pronunciation_uk));
    }
    line
}
