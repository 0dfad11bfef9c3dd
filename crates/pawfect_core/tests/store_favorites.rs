mod common;

use pawfect_core::CatalogStore;

use common::{animal, buddy, id, init_logging, names, peanut, ScriptedProvider};

#[test]
fn toggle_twice_on_empty_tracker() {
    init_logging();
    let provider = ScriptedProvider::returning(vec![buddy()]);
    let mut store = CatalogStore::new(&provider);
    store.load().unwrap();
    let id_a = buddy().id;

    assert!(store.toggle_favorite(id_a));
    assert!(store.is_favorite(&id_a));
    assert!(!store.toggle_favorite(id_a));
    assert!(!store.is_favorite(&id_a));
}

#[test]
fn favorite_records_follow_catalog_order() {
    init_logging();
    let provider = ScriptedProvider::returning(vec![
        buddy(),
        peanut(),
        animal(3, "Mochi", "Shiba Inu"),
        animal(4, "Biscuit", "Corgi"),
    ]);
    let mut store = CatalogStore::new(&provider);
    store.load().unwrap();

    store.toggle_favorite(id(4));
    store.toggle_favorite(id(1));
    store.toggle_favorite(id(3));

    assert_eq!(names(store.favorite_records()), vec!["Buddy", "Mochi", "Biscuit"]);
    assert_eq!(store.favorite_count(), 3);
}

#[test]
fn unknown_ids_can_be_toggled_but_never_surface() {
    init_logging();
    let provider = ScriptedProvider::returning(vec![buddy(), peanut()]);
    let mut store = CatalogStore::new(&provider);
    store.load().unwrap();

    assert!(store.toggle_favorite(id(77)));
    assert!(store.is_favorite(&id(77)));
    assert!(store.favorite_records().is_empty());
    assert_eq!(store.favorite_count(), 0);
}

#[test]
fn favorites_do_not_depend_on_filter() {
    init_logging();
    let provider = ScriptedProvider::returning(vec![buddy(), peanut()]);
    let mut store = CatalogStore::new(&provider);
    store.load().unwrap();
    store.toggle_favorite(peanut().id);

    store.apply_filter(|record: &pawfect_core::AnimalRecord| record.name == "Buddy");

    assert_eq!(names(store.favorite_records()), vec!["Peanut"]);
}

#[test]
fn clear_favorites_empties_the_set() {
    init_logging();
    let provider = ScriptedProvider::returning(vec![buddy(), peanut()]);
    let mut store = CatalogStore::new(&provider);
    store.load().unwrap();
    store.toggle_favorite(buddy().id);
    store.toggle_favorite(peanut().id);

    store.clear_favorites();

    assert!(!store.is_favorite(&buddy().id));
    assert!(store.favorite_records().is_empty());
}

#[test]
fn favorites_survive_reloads() {
    init_logging();
    let provider = ScriptedProvider::returning(vec![buddy(), peanut()]);
    let mut store = CatalogStore::new(&provider);
    store.load().unwrap();
    store.toggle_favorite(peanut().id);

    provider.push_ok(vec![peanut(), buddy()]);
    store.load().unwrap();
    provider.push_ok(vec![peanut(), buddy()]);
    store.load().unwrap();

    assert!(store.is_favorite(&peanut().id));
    assert_eq!(names(store.favorite_records()), vec!["Peanut"]);
}
