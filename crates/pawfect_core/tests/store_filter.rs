mod common;

use pawfect_core::{AnimalRecord, CatalogStore, SearchCriteria, UrgencyLevel};

use common::{animal, buddy, init_logging, names, peanut, ScriptedProvider};

fn catalog() -> Vec<AnimalRecord> {
    vec![
        buddy(),
        peanut(),
        AnimalRecord {
            location: "Berkeley, CA".to_string(),
            urgency_level: UrgencyLevel::Critical,
            ..animal(3, "Sable", "Black Labrador")
        },
        AnimalRecord {
            location: "Oakland, CA".to_string(),
            urgency_level: UrgencyLevel::Low,
            ..animal(4, "Biscuit", "Corgi")
        },
    ]
}

fn loaded_store(provider: &ScriptedProvider) -> CatalogStore<&ScriptedProvider> {
    provider.push_ok(catalog());
    let mut store = CatalogStore::new(provider);
    store.load().unwrap();
    store
}

fn search(store: &mut CatalogStore<&ScriptedProvider>, criteria: SearchCriteria) -> Vec<String> {
    store.apply_filter(criteria.build().into_predicate());
    names(store.visible_records())
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[test]
fn breed_substring_keeps_only_matches() {
    init_logging();
    let provider = ScriptedProvider::returning(vec![buddy(), peanut()]);
    let mut store = CatalogStore::new(&provider);
    store.load().unwrap();

    store.apply_filter(SearchCriteria::new().with_breed("Lab").build().into_predicate());

    assert_eq!(names(store.visible_records()), vec!["Buddy"]);
}

#[test]
fn text_criteria_ignore_case() {
    init_logging();
    let provider = ScriptedProvider::new();
    let mut store = loaded_store(&provider);

    assert_eq!(
        search(&mut store, SearchCriteria::new().with_breed("LABRADOR")),
        vec!["Buddy", "Sable"]
    );
    assert_eq!(
        search(&mut store, SearchCriteria::new().with_location("oakland")),
        vec!["Peanut", "Biscuit"]
    );
}

#[test]
fn all_criteria_must_match() {
    init_logging();
    let provider = ScriptedProvider::new();
    let mut store = loaded_store(&provider);

    let criteria = SearchCriteria::new()
        .with_breed("lab")
        .with_urgency(UrgencyLevel::Critical)
        .with_location("berkeley");
    assert_eq!(search(&mut store, criteria), vec!["Sable"]);

    let criteria = SearchCriteria::new()
        .with_location("Oakland")
        .with_urgency(UrgencyLevel::Critical);
    assert!(search(&mut store, criteria).is_empty());
}

#[test]
fn urgency_is_an_exact_match() {
    init_logging();
    let provider = ScriptedProvider::new();
    let mut store = loaded_store(&provider);

    assert_eq!(
        search(&mut store, SearchCriteria::new().with_urgency(UrgencyLevel::High)),
        vec!["Peanut"]
    );
}

#[test]
fn size_criterion_always_passes() {
    init_logging();
    let provider = ScriptedProvider::new();
    let mut store = loaded_store(&provider);

    assert_eq!(
        search(&mut store, SearchCriteria::new().with_size("small")),
        vec!["Buddy", "Peanut", "Sable", "Biscuit"]
    );
    assert_eq!(
        search(&mut store, SearchCriteria::new().with_size("giant").with_breed("corgi")),
        vec!["Biscuit"]
    );
}

#[test]
fn clearing_restores_full_catalog() {
    init_logging();
    let provider = ScriptedProvider::new();
    let mut store = loaded_store(&provider);

    search(&mut store, SearchCriteria::new().with_breed("corgi"));
    search(&mut store, SearchCriteria::new().with_breed("nothing like this"));
    store.apply_filter(|_: &AnimalRecord| false);
    store.clear_filter();

    let visible: Vec<&AnimalRecord> = store.visible_records();
    let all: Vec<&AnimalRecord> = store.all_records().iter().collect();
    assert_eq!(visible, all);
}

#[test]
fn filter_is_reusable_across_records() {
    let filter = SearchCriteria::new().with_breed("terrier").build();
    assert!(filter.matches(&peanut()));
    assert!(!filter.matches(&buddy()));
    assert!(filter.matches(&peanut()));
}
