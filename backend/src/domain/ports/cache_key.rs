//! Key type shared by card list cache adapters.

/// Cache key under which the raw card list is stored.
///
/// Only [`CardListCacheKey::card_list`] constructs one; adapters never see
/// arbitrary keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardListCacheKey(&'static str);

impl CardListCacheKey {
    /// Key for the single cached resource: the full upstream card list.
    pub fn card_list() -> Self {
        Self("cards")
    }

    /// Borrow the underlying key as a string slice.
    pub fn as_str(&self) -> &str {
        self.0
    }
}

impl std::fmt::Display for CardListCacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for CardListCacheKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::CardListCacheKey;
    use rstest::rstest;

    #[rstest]
    fn card_list_key_is_fixed() {
        let key = CardListCacheKey::card_list();
        assert_eq!(key.as_str(), "cards");
        assert_eq!(key.to_string(), "cards");
        assert_eq!(key, CardListCacheKey::card_list());
    }
}
