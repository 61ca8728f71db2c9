//! Static configuration data: the processing stages, the language catalog and
//! the featured result set shown after every run.

use std::fmt;

use serde::{Serialize, Serializer};

pub const STAGE_COUNT: usize = 4;

/// One named phase of the simulated processing pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Intent,
    Discovery,
    Filtering,
    Scoring,
}

impl Stage {
    pub const ALL: [Stage; STAGE_COUNT] = [
        Stage::Intent,
        Stage::Discovery,
        Stage::Filtering,
        Stage::Scoring,
    ];

    pub fn index(self) -> usize {
        match self {
            Stage::Intent => 0,
            Stage::Discovery => 1,
            Stage::Filtering => 2,
            Stage::Scoring => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Stage> {
        Self::ALL.get(index).copied()
    }

    /// The stage that runs after this one, or `None` for the last stage.
    pub fn next(self) -> Option<Stage> {
        Self::from_index(self.index() + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Intent => "Understanding Intent",
            Stage::Discovery => "Discovering Videos & Playlists",
            Stage::Filtering => "Intelligent Filtering",
            Stage::Scoring => "AI Scoring & Ranking",
        }
    }

    pub fn explanation(self) -> &'static str {
        match self {
            Stage::Intent => "We analyze what the user really wants, not just keywords.",
            Stage::Discovery => "We fetch candidate content from YouTube.",
            Stage::Filtering => "Removing irrelevant, low-quality, or mismatched content.",
            Stage::Scoring => {
                "We rank content based on learning value, structure, consistency, and relevance."
            }
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const DEFAULT_LANGUAGE: &str = "en";

pub const LANGUAGES: [Language; 10] = [
    Language { code: "en", name: "English" },
    Language { code: "hi", name: "Hindi" },
    Language { code: "es", name: "Spanish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ko", name: "Korean" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "zh", name: "Chinese" },
    Language { code: "ru", name: "Russian" },
];

/// Looks up a catalog language by its code, ignoring ASCII case.
pub fn find_language(code: &str) -> Option<&'static Language> {
    LANGUAGES
        .iter()
        .find(|language| language.code.eq_ignore_ascii_case(code.trim()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Video,
    Playlist,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultKind::Video => f.write_str("video"),
            ResultKind::Playlist => f.write_str("playlist"),
        }
    }
}

/// Relevance score with one decimal place, stored in tenths (94 is 9.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u16);

impl Score {
    pub const fn from_tenths(tenths: u16) -> Self {
        Self(tenths)
    }

    pub fn tenths(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(f64::from(self.0) / 10.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub thumbnail: &'static str,
    pub kind: ResultKind,
    pub score: Score,
    pub url: &'static str,
    pub channel: &'static str,
}

/// Result set revealed at the end of every run, sorted by descending score.
/// It does not depend on the submitted query or languages.
pub const FEATURED_RESULTS: [ResultItem; 5] = [
    ResultItem {
        id: "1",
        title: "Dynamic Programming Full Course - From Beginner to Advanced",
        description: "Complete guide to Dynamic Programming covering all patterns, from basic recursion to advanced optimization techniques with C++ implementations.",
        thumbnail: "https://images.unsplash.com/photo-1516116216624-53e697fedbea?w=400&h=225&fit=crop",
        kind: ResultKind::Playlist,
        score: Score::from_tenths(94),
        url: "https://youtube.com/playlist?list=example1",
        channel: "Code Academy",
    },
    ResultItem {
        id: "2",
        title: "Understanding DP: The Mental Model You Need",
        description: "Learn the intuition behind dynamic programming - why it works, when to use it, and how to identify DP problems in interviews.",
        thumbnail: "https://images.unsplash.com/photo-1555949963-aa79dcee981c?w=400&h=225&fit=crop",
        kind: ResultKind::Video,
        score: Score::from_tenths(91),
        url: "https://youtube.com/watch?v=example2",
        channel: "Tech Interview Pro",
    },
    ResultItem {
        id: "3",
        title: "DSA Masterclass: DP Problems in C++",
        description: "Comprehensive playlist covering 50+ dynamic programming problems with detailed C++ solutions and complexity analysis.",
        thumbnail: "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=400&h=225&fit=crop",
        kind: ResultKind::Playlist,
        score: Score::from_tenths(89),
        url: "https://youtube.com/playlist?list=example3",
        channel: "Algorithm Masters",
    },
    ResultItem {
        id: "4",
        title: "DP on Trees & Graphs - Advanced Patterns",
        description: "Advanced dynamic programming techniques applied to tree and graph problems, essential for competitive programming.",
        thumbnail: "https://images.unsplash.com/photo-1504639725590-34d0984388bd?w=400&h=225&fit=crop",
        kind: ResultKind::Video,
        score: Score::from_tenths(87),
        url: "https://youtube.com/watch?v=example4",
        channel: "Competitive Coding Hub",
    },
    ResultItem {
        id: "5",
        title: "LeetCode DP Problems Explained - Hindi",
        description: "Top 20 LeetCode dynamic programming problems explained in Hindi with step-by-step approach and code walkthrough.",
        thumbnail: "https://images.unsplash.com/photo-1542831371-29b0f74f9713?w=400&h=225&fit=crop",
        kind: ResultKind::Video,
        score: Score::from_tenths(85),
        url: "https://youtube.com/watch?v=example5",
        channel: "CodeWithDesi",
    },
];
