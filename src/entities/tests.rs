use std::sync::Arc;

use super::*;

fn names(set: &EntitySet, category: EntityCategory) -> Vec<&str> {
    set.get(category).collect()
}

#[test]
fn test_court_location_and_year() {
    let extractor = PatternExtractor::default();
    let entities = extractor.extract(
        "The Supreme Court of India announced new guidelines in 2020 according to an official statement.",
    );

    assert_eq!(names(&entities, EntityCategory::Organization), vec!["Supreme Court"]);
    assert_eq!(names(&entities, EntityCategory::Location), vec!["India"]);
    assert_eq!(names(&entities, EntityCategory::Date), vec!["2020"]);
    assert!(names(&entities, EntityCategory::Person).is_empty());
}

#[test]
fn test_sensational_headline_has_no_entities() {
    let extractor = PatternExtractor::default();
    let entities = extractor.extract(
        "Breaking: Government secretly approves flying cars for all citizens before it gets deleted! Share this now",
    );
    assert!(entities.is_empty(), "unexpected entities: {entities:?}");
}

#[test]
fn test_lowercase_text_has_no_entities() {
    let extractor = PatternExtractor::default();
    let entities = extractor.extract("this is all lowercase text with no names at all in it");
    assert!(entities.is_empty());
}

#[test]
fn test_title_introduces_person() {
    let extractor = PatternExtractor::default();
    let entities = extractor.extract(
        "Scientists said Dr. Jane Goodall spoke at Oxford University about chimpanzees.",
    );

    assert_eq!(names(&entities, EntityCategory::Person), vec!["Jane Goodall"]);
    assert_eq!(
        names(&entities, EntityCategory::Organization),
        vec!["Oxford University"]
    );
}

#[test]
fn test_title_inside_span_drops_preceding_words() {
    let extractor = PatternExtractor::default();
    let entities =
        extractor.extract("Yesterday Prime Minister Jacinda Ardern visited the harbour.");
    assert_eq!(names(&entities, EntityCategory::Person), vec!["Jacinda Ardern"]);
}

#[test]
fn test_bare_title_is_not_a_person() {
    let extractor = PatternExtractor::default();
    let entities = extractor.extract("He met the President of Kenya on a short visit.");
    assert!(names(&entities, EntityCategory::Person).is_empty());
    assert_eq!(names(&entities, EntityCategory::Location), vec!["Kenya"]);
}

#[test]
fn test_month_dates() {
    let extractor = PatternExtractor::default();
    let entities = extractor.extract(
        "The summit was held on March 15, 2021 in Geneva and again in June 2022.",
    );

    let dates = names(&entities, EntityCategory::Date);
    assert!(dates.contains(&"March 15, 2021"));
    assert!(dates.contains(&"June 2022"));
    assert_eq!(dates.len(), 2);
    assert_eq!(names(&entities, EntityCategory::Location), vec!["Geneva"]);
}

#[test]
fn test_day_month_year_date() {
    let extractor = PatternExtractor::default();
    let entities = extractor.extract("results were published on 15 March 2020 by the team");
    assert_eq!(names(&entities, EntityCategory::Date), vec!["15 March 2020"]);
}

#[test]
fn test_years_outside_range_ignored() {
    let extractor = PatternExtractor::default();
    let entities = extractor.extract("In 1850 and 2150 nothing happened, but 1999 was notable.");
    assert_eq!(names(&entities, EntityCategory::Date), vec!["1999"]);
}

#[test]
fn test_acronyms_are_organizations() {
    let extractor = PatternExtractor::default();
    let entities = extractor.extract("Officials at NASA and the WHO confirmed the report.");

    let orgs = names(&entities, EntityCategory::Organization);
    assert!(orgs.contains(&"NASA"));
    assert!(orgs.contains(&"WHO"));
    assert_eq!(orgs.len(), 2);
}

#[test]
fn test_possessive_and_multiword_locations() {
    let extractor = PatternExtractor::default();
    let entities = extractor.extract("India's economy grew while the United Kingdom watched.");

    let places = names(&entities, EntityCategory::Location);
    assert!(places.contains(&"India"));
    assert!(places.contains(&"United Kingdom"));
}

#[test]
fn test_unknown_two_word_span_is_person() {
    let extractor = PatternExtractor::default();
    let entities = extractor.extract("Reporters met Narendra Modi in Mumbai last week.");

    assert_eq!(names(&entities, EntityCategory::Person), vec!["Narendra Modi"]);
    assert_eq!(names(&entities, EntityCategory::Location), vec!["Mumbai"]);
}

#[test]
fn test_repeated_names_deduplicated() {
    let extractor = PatternExtractor::default();
    let entities = extractor.extract("reports say NASA will return and NASA agrees.");
    assert_eq!(entities.len(), 1);
}

#[test]
fn test_extractor_through_arc() {
    let extractor: Arc<dyn EntityExtractor> = Arc::new(PatternExtractor::default());
    let entities = extractor.extract("flights to Tokyo resumed this week");
    assert_eq!(names(&entities, EntityCategory::Location), vec!["Tokyo"]);
}

#[test]
fn test_static_extractor_ignores_input() {
    let extractor = StaticExtractor::empty()
        .with(EntityCategory::Organization, "Supreme Court")
        .with(EntityCategory::Location, "India");

    assert_eq!(extractor.extract("anything").len(), 2);
    assert_eq!(extractor.extract("").len(), 2);
}

#[test]
fn test_entity_set_rejects_blank_and_duplicates() {
    let mut set = EntitySet::new();
    assert!(set.insert(EntityCategory::Person, "Ada Lovelace"));
    assert!(!set.insert(EntityCategory::Person, "Ada Lovelace"));
    assert!(!set.insert(EntityCategory::Person, "   "));
    assert!(set.insert(EntityCategory::Organization, "Ada Lovelace"));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_entity_set_groups_skip_empty_categories() {
    let set = EntitySet::new()
        .with(EntityCategory::Date, "2020")
        .with(EntityCategory::Person, "Ada Lovelace");

    let groups: Vec<EntityCategory> = set.groups().map(|(c, _)| c).collect();
    assert_eq!(groups, vec![EntityCategory::Person, EntityCategory::Date]);
}

#[test]
fn test_entity_set_records_follow_category_order() {
    let set: EntitySet = vec![
        EntityRecord::new("2020", EntityCategory::Date),
        EntityRecord::new("India", EntityCategory::Location),
        EntityRecord::new("Supreme Court", EntityCategory::Organization),
    ]
    .into_iter()
    .collect();

    let records = set.records();
    assert_eq!(records[0].category, EntityCategory::Organization);
    assert_eq!(records[1].category, EntityCategory::Location);
    assert_eq!(records[2].category, EntityCategory::Date);
}

#[test]
fn test_entity_set_serializes_by_category() {
    let set = EntitySet::new().with(EntityCategory::Location, "India");
    let json = serde_json::to_value(&set).unwrap();

    assert_eq!(json["LOCATION"], serde_json::json!(["India"]));
    assert_eq!(json["PERSON"], serde_json::json!([]));
}
