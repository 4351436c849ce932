/*!
# Vocabulary Categories

The closed set of tags that partition the vocabulary table. Names are matched
case-insensitively: the first letter is upper-cased and the rest lower-cased
before comparing against the canonical spelling.
*/

use crate::errors::VocabError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Unit,
    Atomic,
    Time,
    People,
    Places,
    Verb,
    Adjadv,
    Color,
    Direction,
    Nature,
    Food,
    Body,
    Home,
    Intangible,
    Activity,
    Wearables,
    Manmade,
    Stationery,
    Transport,
    Sentence,
}

impl Category {
    /// Every category, in table order
    pub const ALL: &'static [Category] = &[
        Category::Unit,
        Category::Atomic,
        Category::Time,
        Category::People,
        Category::Places,
        Category::Verb,
        Category::Adjadv,
        Category::Color,
        Category::Direction,
        Category::Nature,
        Category::Food,
        Category::Body,
        Category::Home,
        Category::Intangible,
        Category::Activity,
        Category::Wearables,
        Category::Manmade,
        Category::Stationery,
        Category::Transport,
        Category::Sentence,
    ];

    pub fn as_str(&self) -> &'static str {
        use Category::*;
        match self {
            Unit => "Unit",
            Atomic => "Atomic",
            Time => "Time",
            People => "People",
            Places => "Places",
            Verb => "Verb",
            Adjadv => "Adjadv",
            Color => "Color",
            Direction => "Direction",
            Nature => "Nature",
            Food => "Food",
            Body => "Body",
            Home => "Home",
            Intangible => "Intangible",
            Activity => "Activity",
            Wearables => "Wearables",
            Manmade => "Manmade",
            Stationery => "Stationery",
            Transport => "Transport",
            Sentence => "Sentence",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self, VocabError> {
        let canonical = capitalize(s);
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == canonical)
            .ok_or_else(|| VocabError::InvalidCategory(s.to_string()))
    }
}

/// Upper-case the first character and lower-case the rest ("tIME" -> "Time")
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
