use std::fmt;
use std::str::FromStr;

/// The moods a visitor can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmotionLabel {
    Masaya,
    Kinikilig,
    Malungkot,
    Pagod,
    Bored,
    Excited,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid emotion: {0}")]
pub struct InvalidEmotion(pub String);

impl EmotionLabel {
    pub const ALL: [EmotionLabel; 6] = [
        EmotionLabel::Masaya,
        EmotionLabel::Kinikilig,
        EmotionLabel::Malungkot,
        EmotionLabel::Pagod,
        EmotionLabel::Bored,
        EmotionLabel::Excited,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Masaya => "Masaya",
            EmotionLabel::Kinikilig => "Kinikilig",
            EmotionLabel::Malungkot => "Malungkot",
            EmotionLabel::Pagod => "Pagod",
            EmotionLabel::Bored => "Bored",
            EmotionLabel::Excited => "Excited",
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Labels are matched exactly as the front end sends them.
impl FromStr for EmotionLabel {
    type Err = InvalidEmotion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmotionLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| InvalidEmotion(s.to_string()))
    }
}

/// Catalog vocabulary for one emotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionMapping {
    pub label: EmotionLabel,
    /// Genres used by the strict query, OR-combined.
    pub genres: &'static [u32],
    /// Wider genre list tried when the strict query finds nothing.
    /// Always starts with `genres`.
    pub expanded_genres: &'static [u32],
    pub keywords: &'static [&'static str],
}

// Genre ids: 12 Adventure, 14 Fantasy, 16 Animation, 18 Drama, 27 Horror,
// 28 Action, 35 Comedy, 36 History, 37 Western, 53 Thriller, 80 Crime,
// 99 Documentary, 878 Science Fiction, 9648 Mystery, 10402 Music,
// 10749 Romance, 10751 Family, 10752 War, 10770 TV Movie.
// Six-digit ids are community keyword-genres (inspirational, nostalgia, ...).
pub fn map_emotion(label: EmotionLabel) -> EmotionMapping {
    let (genres, expanded_genres, keywords): (&'static [u32], &'static [u32], &'static [&'static str]) = match label {
        EmotionLabel::Masaya => (
            &[35, 10751, 16, 14, 10770, 281585, 288816],
            &[35, 10751, 16, 14, 10770, 281585, 288816, 10402, 12, 10749],
            &["feel-good", "heartwarming", "funny", "uplifting", "wholesome"],
        ),
        EmotionLabel::Kinikilig => (
            &[10749],
            &[10749, 35, 18, 10402],
            &["romance", "love", "romantic", "sweet", "heartwarming"],
        ),
        EmotionLabel::Malungkot => (
            &[18, 1647, 5609],
            &[18, 1647, 5609, 10749, 10751, 36, 10752],
            &["emotional", "touching", "dramatic", "sad", "melancholy", "heartfelt", "moving"],
        ),
        EmotionLabel::Pagod => (
            &[35, 16, 10751, 14, 10770, 878, 12, 209897, 305015, 266370, 290395],
            &[35, 16, 10751, 14, 10770, 878, 12, 209897, 305015, 266370, 290395, 10402, 99],
            &["relaxing", "light-hearted", "feel-good", "family-friendly", "uplifting", "easy-watching"],
        ),
        EmotionLabel::Bored => (
            &[28, 12, 35, 53, 80, 9648, 878, 14],
            &[28, 12, 35, 53, 80, 9648, 878, 14, 27, 16, 10751],
            &["exciting", "thrilling", "action-packed", "adventure", "suspense", "engaging"],
        ),
        EmotionLabel::Excited => (
            &[28, 12, 878, 53, 80, 9648, 14, 16],
            &[28, 12, 878, 53, 80, 9648, 14, 16, 27, 10752, 37],
            &["action-packed", "adventure", "thrilling", "exciting", "intense", "epic"],
        ),
    };

    EmotionMapping {
        label,
        genres,
        expanded_genres,
        keywords,
    }
}

/// Parse a label as sent by a client and look up its mapping.
pub fn lookup(name: &str) -> Result<EmotionMapping, InvalidEmotion> {
    name.parse().map(map_emotion)
}
