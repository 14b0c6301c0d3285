//! MBTI personality type colors
//!
//! Each of the 16 types maps to a Tailwind color name used for badges and
//! accents (`bg-{color}-500`, `text-{color}-400`, ...).

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::DisplayError;

/// Color used for missing or unrecognized types.
pub const DEFAULT_MBTI_COLOR: &str = "gray";

/// The 16 MBTI personality types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MbtiType {
    Enfp,
    Enfj,
    Entj,
    Entp,
    Esfj,
    Esfp,
    Estj,
    Estp,
    Infp,
    Infj,
    Intj,
    Intp,
    Isfj,
    Isfp,
    Istj,
    Istp,
}

/// Type code to color name. Built once, never mutated.
static MBTI_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Extrovert - warm colors
        ("ENFP", "purple"),
        ("ENFJ", "pink"),
        ("ENTJ", "red"),
        ("ENTP", "orange"),
        // Extrovert - cool colors
        ("ESFJ", "blue"),
        ("ESFP", "cyan"),
        ("ESTJ", "slate"),
        ("ESTP", "amber"),
        // Introvert - warm colors
        ("INFP", "indigo"),
        ("INFJ", "violet"),
        ("INTJ", "blue"),
        ("INTP", "emerald"),
        // Introvert - cool colors
        ("ISFJ", "teal"),
        ("ISFP", "green"),
        ("ISTJ", "cyan"),
        ("ISTP", "gray"),
    ])
});

impl MbtiType {
    pub const ALL: [MbtiType; 16] = [
        MbtiType::Enfp,
        MbtiType::Enfj,
        MbtiType::Entj,
        MbtiType::Entp,
        MbtiType::Esfj,
        MbtiType::Esfp,
        MbtiType::Estj,
        MbtiType::Estp,
        MbtiType::Infp,
        MbtiType::Infj,
        MbtiType::Intj,
        MbtiType::Intp,
        MbtiType::Isfj,
        MbtiType::Isfp,
        MbtiType::Istj,
        MbtiType::Istp,
    ];

    /// Four-letter uppercase code
    pub fn code(&self) -> &'static str {
        match self {
            MbtiType::Enfp => "ENFP",
            MbtiType::Enfj => "ENFJ",
            MbtiType::Entj => "ENTJ",
            MbtiType::Entp => "ENTP",
            MbtiType::Esfj => "ESFJ",
            MbtiType::Esfp => "ESFP",
            MbtiType::Estj => "ESTJ",
            MbtiType::Estp => "ESTP",
            MbtiType::Infp => "INFP",
            MbtiType::Infj => "INFJ",
            MbtiType::Intj => "INTJ",
            MbtiType::Intp => "INTP",
            MbtiType::Isfj => "ISFJ",
            MbtiType::Isfp => "ISFP",
            MbtiType::Istj => "ISTJ",
            MbtiType::Istp => "ISTP",
        }
    }

    pub fn color(&self) -> &'static str {
        MBTI_COLORS
            .get(self.code())
            .copied()
            .unwrap_or(DEFAULT_MBTI_COLOR)
    }

    pub fn is_extrovert(&self) -> bool {
        self.code().starts_with('E')
    }
}

impl fmt::Display for MbtiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MbtiType {
    type Err = DisplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.to_uppercase();
        MbtiType::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or_else(|| DisplayError::UnknownMbtiType(s.to_string()))
    }
}

/// Resolve the display color for an MBTI code (case-insensitive).
///
/// Missing or unknown codes resolve to [`DEFAULT_MBTI_COLOR`].
pub fn resolve_mbti_color<'a>(code: impl Into<Option<&'a str>>) -> &'static str {
    let code = code.into().unwrap_or_default().to_uppercase();
    match MBTI_COLORS.get(code.as_str()).copied() {
        Some(color) => color,
        None => {
            if !code.is_empty() {
                log::debug!("Unknown MBTI code {code:?}, using {DEFAULT_MBTI_COLOR}");
            }
            DEFAULT_MBTI_COLOR
        }
    }
}
