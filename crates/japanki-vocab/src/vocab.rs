use crate::category::Category;
use crate::errors::{VocabError, VocabResult};
use std::fmt;

/// One vocabulary entry. Immutable once built; fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocab {
    order: u32,
    hiragana: String,
    kanji: Option<String>,
    meaning: String,
    category: Category,
    example: Option<String>,
    romanji: String,
}

impl Vocab {
    /// Build a record, rejecting blank `hiragana` or `meaning`.
    ///
    /// Blank `kanji` and `example` values are stored as `None`.
    pub fn new(
        order: u32,
        hiragana: impl Into<String>,
        kanji: Option<String>,
        meaning: impl Into<String>,
        category: Category,
        example: Option<String>,
        romanji: impl Into<String>,
    ) -> VocabResult<Self> {
        let hiragana = hiragana.into();
        if hiragana.trim().is_empty() {
            return Err(VocabError::MissingField("hiragana"));
        }

        let meaning = meaning.into();
        if meaning.trim().is_empty() {
            return Err(VocabError::MissingField("meaning"));
        }

        Ok(Self {
            order,
            hiragana,
            kanji: non_blank(kanji),
            meaning,
            category,
            example: non_blank(example),
            romanji: romanji.into(),
        })
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn hiragana(&self) -> &str {
        &self.hiragana
    }

    pub fn kanji(&self) -> Option<&str> {
        self.kanji.as_deref()
    }

    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn example(&self) -> Option<&str> {
        self.example.as_deref()
    }

    pub fn romanji(&self) -> &str {
        &self.romanji
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// `[<category>] | <order> | <hiragana> | <kanji> | <romanji>`, kanji empty when absent
impl fmt::Display for Vocab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] | {} | ", self.category, self.order)?;
        write!(
            f,
            "{} | {} | {}",
            self.hiragana,
            self.kanji().unwrap_or(""),
            self.romanji
        )
    }
}
