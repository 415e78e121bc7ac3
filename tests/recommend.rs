use std::collections::BTreeSet;

use book_recommender::{
    InteractionKind, InteractionSink, Item, ItemId, MemoryCatalog, MemoryInteractions,
    RecommendError, RecommendationService, Recommender, RecommenderConfig,
};

fn book(id: ItemId, title: &str, category: &str, popularity: u64, description: &str) -> Item {
    Item {
        id,
        title: title.to_string(),
        author: "Test Author".to_string(),
        cover_image_url: format!("https://covers.example/{id}.jpg"),
        category: category.to_string(),
        rating: 4.5,
        popularity,
        description: description.to_string(),
    }
}

fn library() -> Vec<Item> {
    vec![
        book(1, "The Great Gatsby", "Fiction", 800, "A novel about the American dream."),
        book(
            2,
            "To Kill a Mockingbird",
            "Fiction",
            950,
            "A novel about justice and race in the American South.",
        ),
        book(3, "1984", "Science Fiction", 980, "A dystopian novel about a totalitarian society."),
        book(
            4,
            "Dune",
            "Science Fiction",
            900,
            "A science fiction novel about a desert planet and a messianic figure.",
        ),
        book(
            5,
            "Fahrenheit 451",
            "Science Fiction",
            910,
            "A dystopian novel about a future where books are banned.",
        ),
        book(
            6,
            "Brave New World",
            "Science Fiction",
            870,
            "A dystopian novel about a future society that has been genetically engineered.",
        ),
        book(
            7,
            "The Hobbit",
            "Fantasy",
            990,
            "A fantasy novel about a hobbit who goes on an adventure.",
        ),
        book(
            8,
            "The Lord of the Rings",
            "Fantasy",
            1000,
            "An epic fantasy novel about the fight against evil.",
        ),
        book(
            9,
            "A Game of Thrones",
            "Fantasy",
            995,
            "An epic fantasy novel about the struggle for power in the land of Westeros.",
        ),
        book(
            10,
            "The Way of Kings",
            "Fantasy",
            930,
            "An epic fantasy saga set in a world torn by war and storms.",
        ),
        book(
            11,
            "Gone Girl",
            "Mystery",
            840,
            "A thriller about a woman who disappears on her fifth wedding anniversary.",
        ),
        book(
            12,
            "Big Little Lies",
            "Mystery",
            800,
            "A murder mystery set in a tranquil beachside town.",
        ),
        book(
            13,
            "Atomic Habits",
            "Business",
            990,
            "An easy and proven way to build good habits and break bad ones.",
        ),
        book(14, "Zero to One", "Business", 860, "Notes on startups, or how to build the future."),
        book(
            15,
            "Meditations",
            "Philosophy",
            900,
            "A series of personal writings by Marcus Aurelius, Roman Emperor.",
        ),
    ]
}

fn ids(items: &[Item]) -> Vec<ItemId> {
    items.iter().map(|i| i.id).collect()
}

fn service_with(items: Vec<Item>) -> RecommendationService<MemoryCatalog, MemoryInteractions> {
    RecommendationService::new(
        MemoryCatalog::from_items(items),
        MemoryInteractions::new(),
        RecommenderConfig::default(),
    )
}

#[test]
fn cold_start_returns_top_ten_by_popularity_with_id_tie_break() {
    let svc = service_with(library());
    let result = svc.recommend(1).unwrap();
    // 7 and 13 share popularity 990
    assert_eq!(ids(&result), vec![8, 9, 7, 13, 3, 2, 10, 5, 4, 15]);
    for pair in result.windows(2) {
        assert!(pair[0].popularity >= pair[1].popularity);
    }
}

#[test]
fn cold_start_on_small_catalog_returns_everything() {
    let svc = service_with(vec![book(2, "B", "x", 5, "beta"), book(1, "A", "y", 5, "alpha")]);
    assert_eq!(ids(&svc.recommend(1).unwrap()), vec![1, 2]);
}

#[test]
fn favorites_never_appear_in_results() {
    let mut svc = service_with(library());
    for item in [3, 7, 8, 13] {
        svc.interact(42, item, InteractionKind::Favorite).unwrap();
    }
    let result = svc.recommend(42).unwrap();
    assert_eq!(result.len(), 10);
    for id in ids(&result) {
        assert!(![3, 7, 8, 13].contains(&id));
    }
}

#[test]
fn personalized_prefers_same_genre() {
    let mut svc = service_with(library());
    svc.interact(1, 8, InteractionKind::Favorite).unwrap();
    let top: Vec<_> = ids(&svc.recommend(1).unwrap()).into_iter().take(3).collect();
    let fantasy: BTreeSet<ItemId> = BTreeSet::from([7, 9, 10]);
    assert!(top.iter().all(|id| fantasy.contains(id)), "top = {top:?}");
}

#[test]
fn recommendation_is_idempotent() {
    let mut svc = service_with(library());
    svc.interact(9, 4, InteractionKind::Favorite).unwrap();
    svc.interact(9, 11, InteractionKind::Favorite).unwrap();
    let first = svc.recommend(9).unwrap();
    let second = svc.recommend(9).unwrap();
    assert_eq!(first, second);
}

#[test]
fn similar_favorite_raises_score_over_unrelated_item() {
    let items = vec![
        book(1, "Dragon Rider", "Fantasy", 10, "a dragon rider learns sky magic"),
        book(2, "Dragon Keeper", "Fantasy", 10, "a dragon keeper guards sky magic eggs"),
        book(3, "Quarterly Report", "Business", 10, "revenue forecasts and accounting"),
        book(4, "Garden Notes", "Hobby", 10, "growing tomatoes in small pots"),
    ];
    let recommender = <Recommender>::default();
    let before = recommender.score(&items, &BTreeSet::from([4])).unwrap();
    let after = recommender.score(&items, &BTreeSet::from([4, 2])).unwrap();
    // item 1 at row 0, unrelated item 3 at row 2
    let gap_before = before.get(0) - before.get(2);
    let gap_after = after.get(0) - after.get(2);
    assert!(gap_after > gap_before);
}

#[test]
fn single_item_catalog_boundary() {
    let mut svc = service_with(vec![book(1, "Solo", "Fiction", 3, "lonely lighthouse keeper")]);
    assert_eq!(ids(&svc.recommend(5).unwrap()), vec![1]);
    svc.interact(5, 1, InteractionKind::Favorite).unwrap();
    assert!(svc.recommend(5).unwrap().is_empty());
}

#[test]
fn disjoint_vocabulary_scenario() {
    let mut svc = service_with(vec![
        book(1, "Alpha", "Poetry", 100, "sonnets verses rhyme"),
        book(2, "Beta", "Engineering", 50, "bridges steel concrete"),
    ]);
    assert_eq!(ids(&svc.recommend(1).unwrap()), vec![1, 2]);

    svc.interact(1, 1, InteractionKind::Favorite).unwrap();
    let recommender = <Recommender>::default();
    let items = svc.catalog().iter().cloned().collect::<Vec<_>>();
    let scores = recommender.score(&items, &BTreeSet::from([1])).unwrap();
    assert_eq!(scores.get(1), 0.0);
    // zero-scored items are still eligible
    assert_eq!(ids(&svc.recommend(1).unwrap()), vec![2]);
}

#[test]
fn empty_vocabulary_is_an_error_not_an_empty_list() {
    let mut svc = service_with(vec![book(1, "A", "I", 1, "")]);
    assert_eq!(svc.recommend(3).unwrap().len(), 1);
    svc.interact(3, 1, InteractionKind::Favorite).unwrap();
    assert!(matches!(svc.recommend(3), Err(RecommendError::EmptyVocabulary)));
}

#[test]
fn favorites_removed_from_catalog_are_ignored() {
    let mut interactions = MemoryInteractions::new();
    interactions.toggle(1, 99, InteractionKind::Favorite).unwrap();
    interactions.toggle(1, 7, InteractionKind::Favorite).unwrap();
    let svc = RecommendationService::new(
        MemoryCatalog::from_items(library()),
        interactions,
        RecommenderConfig::default(),
    );
    let result = svc.recommend(1).unwrap();
    assert_eq!(result.len(), 10);
    assert!(!ids(&result).contains(&7));
}

#[test]
fn result_is_wire_compatible_json_array() {
    let svc = service_with(library());
    let json = serde_json::to_value(svc.recommend(1).unwrap()).unwrap();
    let array = json.as_array().unwrap();
    assert_eq!(array.len(), 10);
    assert_eq!(array[0]["id"], 8);
    assert_eq!(array[0]["title"], "The Lord of the Rings");
    assert!(array[0]["cover_image_url"].is_string());
}
