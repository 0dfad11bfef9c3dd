mod common;

use std::cell::RefCell;
use std::rc::Rc;

use pawfect_core::{CatalogStore, ProviderError, SearchCriteria, StoreEvent};
use pretty_assertions::assert_eq;

use common::{buddy, init_logging, peanut, ScriptedProvider};

fn recorder() -> (Rc<RefCell<Vec<StoreEvent>>>, impl FnMut(&StoreEvent) + 'static) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    (events, move |event: &StoreEvent| sink.borrow_mut().push(event.clone()))
}

#[test]
fn observers_see_each_mutation_in_order() {
    init_logging();
    let provider = ScriptedProvider::returning(vec![buddy(), peanut()]);
    let mut store = CatalogStore::new(&provider);
    let (events, observer) = recorder();
    store.subscribe(observer);

    store.load().unwrap();
    store.toggle_favorite(buddy().id);
    store.apply_filter(SearchCriteria::new().with_breed("terrier").build().into_predicate());
    store.clear_filter();
    store.clear_favorites();

    assert_eq!(
        *events.borrow(),
        vec![
            StoreEvent::CatalogLoaded {
                loaded: 2,
                skipped: 0
            },
            StoreEvent::FavoriteToggled {
                id: buddy().id,
                favorite: true
            },
            StoreEvent::FilterChanged { visible: 1 },
            StoreEvent::FilterChanged { visible: 2 },
            StoreEvent::FavoritesCleared,
        ]
    );
}

#[test]
fn failed_load_notifies_nobody() {
    init_logging();
    let provider = ScriptedProvider::new();
    provider.push_err(ProviderError::permanent("malformed catalog"));
    let mut store = CatalogStore::new(&provider);
    let (events, observer) = recorder();
    store.subscribe(observer);

    assert!(store.load().is_err());
    assert!(events.borrow().is_empty());
}

#[test]
fn observers_run_after_state_is_updated() {
    init_logging();
    let provider = ScriptedProvider::returning(vec![buddy(), peanut()]);
    let mut store = CatalogStore::new(&provider);
    store.load().unwrap();

    // Observers cannot borrow the store, so they record what the event says
    // and the test checks it against the store afterwards.
    let (events, observer) = recorder();
    store.subscribe(observer);
    let favorite = store.toggle_favorite(peanut().id);

    assert_eq!(
        events.borrow().last(),
        Some(&StoreEvent::FavoriteToggled {
            id: peanut().id,
            favorite
        })
    );
    assert_eq!(store.is_favorite(&peanut().id), favorite);
}

#[test]
fn unsubscribed_observers_stop_receiving() {
    init_logging();
    let provider = ScriptedProvider::returning(vec![buddy()]);
    let mut store = CatalogStore::new(&provider);
    let (first_events, first) = recorder();
    let (second_events, second) = recorder();
    let first_id = store.subscribe(first);
    store.subscribe(second);
    assert_eq!(store.observer_count(), 2);

    assert!(store.unsubscribe(first_id));
    assert!(!store.unsubscribe(first_id));
    store.load().unwrap();

    assert!(first_events.borrow().is_empty());
    assert_eq!(second_events.borrow().len(), 1);
    assert_eq!(store.observer_count(), 1);
}
