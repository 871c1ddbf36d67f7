use serde::{Deserialize, Serialize};

/// The four answer choices of a question.
///
/// A struct rather than a map so every record carries exactly four options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOptions {
    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,
}

impl AnswerOptions {
    pub fn new(
        a: impl Into<String>,
        b: impl Into<String>,
        c: impl Into<String>,
        d: impl Into<String>,
    ) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            c: c.into(),
            d: d.into(),
        }
    }

    /// Option text for the given key.
    pub fn get(&self, key: OptionKey) -> &str {
        match key {
            OptionKey::A => &self.a,
            OptionKey::B => &self.b,
            OptionKey::C => &self.c,
            OptionKey::D => &self.d,
        }
    }
}

/// Key of an answer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OptionKey {
    A,
    B,
    C,
    D,
}

impl OptionKey {
    pub const ALL: [OptionKey; 4] = [Self::A, Self::B, Self::C, Self::D];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
        }
    }

    /// Parse a normalized (lowercase) answer letter.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "c" => Some(Self::C),
            "d" => Some(Self::D),
            _ => None,
        }
    }
}

/// One question in the output array.
///
/// Records are built once by the converter and never mutated afterwards.
/// `correct_answer` is kept as a string: letters outside `a..=d` pass
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// 1-based position in the output array.
    pub id: usize,
    #[serde(rename = "tema")]
    pub topic: String,
    #[serde(rename = "pregunta")]
    pub question_text: String,
    #[serde(rename = "opciones")]
    pub options: AnswerOptions,
    #[serde(rename = "respuestaCorrecta")]
    pub correct_answer: String,
    /// Reserved for later enrichment; the converter always leaves it empty.
    #[serde(rename = "explicacion", default)]
    pub explanation: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl QuestionRecord {
    /// The answer key, if the stored letter is one of `a`, `b`, `c`, `d`.
    pub fn answer_key(&self) -> Option<OptionKey> {
        OptionKey::parse(&self.correct_answer)
    }
}
