use crate::{CatalogProvider, CatalogStore, Effect, Msg};

/// Applies a message to the store and returns any effects for the presentation layer.
pub fn update<P: CatalogProvider>(
    mut store: CatalogStore<P>,
    msg: Msg,
) -> (CatalogStore<P>, Vec<Effect>) {
    let effects = match msg {
        Msg::LoadRequested => match store.load() {
            Ok(report) if report.skipped.is_empty() => Vec::new(),
            Ok(report) => vec![Effect::ReportSkipped(report.skipped)],
            Err(err) => vec![Effect::ShowLoadError(err)],
        },
        Msg::FavoriteToggled(id) => {
            store.toggle_favorite(id);
            Vec::new()
        }
        Msg::SearchSubmitted(criteria) => {
            let filter = criteria.build();
            if filter.is_unconstrained() {
                store.clear_filter();
            } else {
                store.apply_filter(filter.into_predicate());
            }
            Vec::new()
        }
        Msg::SearchCleared => {
            store.clear_filter();
            Vec::new()
        }
        Msg::FavoritesCleared => {
            store.clear_favorites();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (store, effects)
}
