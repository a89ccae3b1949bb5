use std::fs;
use std::path::Path;

use anyhow::Context;

pub const DEFAULT_WORDS: [&str; 20] = [
    "Nonchalant",
    "Dilatory",
    "Superfluous",
    "Condescend",
    "Acrimony",
    "Prodigious",
    "Daunt",
    "Tedious",
    "Mediocre",
    "Mandate",
    "Resignation",
    "Nurture",
    "Fervent",
    "Eclectic",
    "Composed",
    "Versatile",
    "Scathing",
    "Eloquent",
    "Commend",
    "Ecstasy",
];

/// One word per line; blank lines and `#` comments are ignored.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn read_word_list(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read word list {}", path.display()))?;
    Ok(parse_word_list(&text))
}
