#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Presentation asked for a (re)load from the provider.
    LoadRequested,
    /// User tapped the heart on a card.
    FavoriteToggled(crate::AnimalId),
    /// User applied the search form.
    SearchSubmitted(crate::SearchCriteria),
    /// User reset the search form.
    SearchCleared,
    /// User cleared all favorites.
    FavoritesCleared,
    /// Fallback for placeholder wiring.
    NoOp,
}
