//! Merge upstream cards with their stored display configuration.

use std::collections::HashMap;

use super::card::{AggregatedCard, CardConfig, CardId, DEFAULT_SKIN, DEFAULT_TITLE, UpstreamCard};

/// Merge `cards` with `configs`, preserving upstream order.
///
/// Cards without a stored configuration receive [`DEFAULT_TITLE`] and
/// [`DEFAULT_SKIN`]. Configurations for cards the upstream did not return
/// are ignored. When `configs` holds the same id twice the later entry wins.
///
/// # Examples
/// ```
/// use card_aggregator::domain::{aggregate_cards, CardConfig, CardId, UpstreamCard};
///
/// let id = CardId::random();
/// let card = UpstreamCard {
///     id,
///     account: "ACC-1".into(),
///     number: "1111".into(),
///     expiration_month: "04".into(),
///     expiration_year: "2027".into(),
///     currency: "EUR".into(),
///     balance: 0.0,
/// };
/// let config = CardConfig::new(id, "Work", "dark").expect("valid");
/// let merged = aggregate_cards(vec![card], vec![config]);
/// assert_eq!(merged[0].title, "Work");
/// ```
pub fn aggregate_cards(
    cards: Vec<UpstreamCard>,
    configs: impl IntoIterator<Item = CardConfig>,
) -> Vec<AggregatedCard> {
    let by_id: HashMap<CardId, CardConfig> =
        configs.into_iter().map(|config| (config.id, config)).collect();

    cards
        .into_iter()
        .map(|card| {
            let (title, skin) = match by_id.get(&card.id) {
                Some(config) => (config.title.clone(), config.skin.clone()),
                None => (DEFAULT_TITLE.to_owned(), DEFAULT_SKIN.to_owned()),
            };
            AggregatedCard {
                id: card.id,
                number: card.number,
                expiration_month: card.expiration_month,
                expiration_year: card.expiration_year,
                currency: card.currency,
                title,
                skin,
            }
        })
        .collect()
}
