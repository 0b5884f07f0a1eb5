//! Morphological tokens and their artifact projections

/// Result of analyzing one word with a morphological analyzer
///
/// Analyzers may omit either field; what a missing field means is decided by
/// [`MorphologicalToken::from_analyses`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    /// Normalized form (lemma)
    pub lemma: Option<String>,

    /// Tag set (part of speech, case, number, ...)
    pub tags: Option<String>,
}

impl Analysis {
    /// Analysis with both a lemma and a tag set
    pub fn new(lemma: impl Into<String>, tags: impl Into<String>) -> Self {
        Self {
            lemma: Some(lemma.into()),
            tags: Some(tags.into()),
        }
    }

    /// Analysis carrying a tag set only
    pub fn tags_only(tags: impl Into<String>) -> Self {
        Self {
            lemma: None,
            tags: Some(tags.into()),
        }
    }
}

/// A word that survived analysis, with both tag representations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphologicalToken {
    /// Word as it appears in the text
    pub original_word: String,

    /// Lemma from the primary analyzer
    pub normalized_form: String,

    /// Tag set from the primary analyzer
    pub tags_primary: String,

    /// Tag set from the secondary analyzer
    pub tags_secondary: String,
}

impl MorphologicalToken {
    /// Merge the two analyses of `word` into a token
    ///
    /// The token is retained only when the primary analysis has both a lemma
    /// and a tag set, and the secondary analysis has a tag set. Otherwise the
    /// word is dropped (`None`): it contributes to no artifact.
    ///
    /// # Examples
    ///
    /// ```
    /// use scriptorium_domain::{Analysis, MorphologicalToken};
    ///
    /// let token = MorphologicalToken::from_analyses(
    ///     "Cats",
    ///     Some(Analysis::new("cat", "S,pl")),
    ///     Some(Analysis::tags_only("NOUN,plur")),
    /// )
    /// .unwrap();
    /// assert_eq!(token.multiple_tagged(), "cat<NOUN,plur>(S,pl)");
    ///
    /// assert!(MorphologicalToken::from_analyses("Cats", None, None).is_none());
    /// ```
    pub fn from_analyses(
        word: &str,
        primary: Option<Analysis>,
        secondary: Option<Analysis>,
    ) -> Option<Self> {
        let primary = primary?;
        let normalized_form = primary.lemma?;
        let tags_primary = primary.tags?;
        let tags_secondary = secondary?.tags?;

        Some(Self {
            original_word: word.to_string(),
            normalized_form,
            tags_primary,
            tags_secondary,
        })
    }

    /// Lower-cased original word
    pub fn cleaned(&self) -> String {
        self.original_word.to_lowercase()
    }

    /// Lemma with the secondary tag set: `lemma(secondary)`
    pub fn single_tagged(&self) -> String {
        format!("{}({})", self.normalized_form, self.tags_secondary)
    }

    /// Lemma with both tag sets: `lemma<secondary>(primary)`
    pub fn multiple_tagged(&self) -> String {
        format!(
            "{}<{}>({})",
            self.normalized_form, self.tags_secondary, self.tags_primary
        )
    }
}
