//! Anime filename keywords
//!
//! Release groups that only (or almost only) publish anime tag their files
//! with a bracketed group name. Finding one of these tags in a filename is a
//! strong anime signal.
//!
//! Matching is a case-sensitive literal substring test: `[SubsPlease]`
//! matches `"[SubsPlease] Frieren - 01 (1080p).mkv"` but `[subsplease]` does
//! not.

/// Built-in fansub and raw-release group tags
pub const BUILTIN_KEYWORDS: &[&str] = &[
    "[HorribleSubs]",
    "[SubsPlease]",
    "[Erai-raws]",
    "[Commie]",
    "[Coalgirls]",
    "[FFF]",
    "[gg]",
    "[UTW]",
    "[Doki]",
    "[Kametsu]",
    "[Judas]",
    "[EMBER]",
    "[ASW]",
    "[Tsundere-Raws]",
    "[DameDesuYo]",
    "[Underwater]",
    "[Vivid]",
    "[Nekomoe kissaten]",
    "[Kaleido-subs]",
    "[Ohys-Raws]",
    "[Leopard-Raws]",
    "[Golumpa]",
    "[Beatrice-Raws]",
    "[VCB-Studio]",
    "[Moozzi2]",
    "[NC-Raws]",
    "[LostYears]",
    "[Yameii]",
    "[Anime Time]",
    "[AnimeRG]",
    "[Cleo]",
    "[Chihiro]",
    "[SallySubs]",
    "[Mezashite]",
    "[Hi10]",
    "[DeadFish]",
    "[Nyanpasu]",
    "[Asenshi]",
    "[GJM]",
    "[Saizen]",
];

/// Read-only set of filename keywords
///
/// Built once at startup and shared between requests behind an `Arc`.
/// Iteration order is insertion order, so the first match is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// The built-in keyword list
    pub fn builtin() -> Self {
        Self::from_keywords(BUILTIN_KEYWORDS.iter().copied())
    }

    /// Built-in keywords followed by operator-supplied extras
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let builtin = BUILTIN_KEYWORDS.iter().map(|k| k.to_string());
        Self::from_keywords(builtin.chain(extra.into_iter().map(Into::into)))
    }

    /// Build a set from arbitrary keywords
    ///
    /// Duplicates are dropped (first occurrence wins). Empty keywords are
    /// dropped since an empty substring matches every filename.
    pub fn from_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for keyword in keywords.into_iter().map(Into::into) {
            if !keyword.is_empty() && !unique.contains(&keyword) {
                unique.push(keyword);
            }
        }
        Self { keywords: unique }
    }

    /// First keyword contained in `file_name`, if any
    pub fn first_match(&self, file_name: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|keyword| file_name.contains(keyword.as_str()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::builtin()
    }
}
