use super::*;

fn sample() -> Vec<FinalsRecord> {
    vec![
        FinalsRecord::new(1950, "Uruguay", "Brazil"),
        FinalsRecord::new(1954, "West Germany", "Hungary"),
        FinalsRecord::new(1958, "Brazil", "Sweden"),
        FinalsRecord::new(1962, "Brazil", "Czechoslovakia"),
        FinalsRecord::new(1966, "England", "West Germany"),
        FinalsRecord::new(1970, "Brazil", "Italy"),
        FinalsRecord::new(1994, "Brazil", "Italy"),
        FinalsRecord::new(2002, "Brazil", "Germany"),
        FinalsRecord::new(2014, "Germany", "Argentina"),
    ]
}

#[test]
fn west_germany_becomes_germany_in_both_columns() {
    let dataset = Dataset::new(sample());

    let final_1954 = dataset.record_for(Year(1954)).expect("1954 final");
    assert_eq!(final_1954.winner, "Germany");
    assert_eq!(final_1954.runner_up, "Hungary");

    let final_1966 = dataset.record_for(Year(1966)).expect("1966 final");
    assert_eq!(final_1966.runner_up, "Germany");

    assert!(dataset
        .records()
        .iter()
        .all(|r| r.winner != "West Germany" && r.runner_up != "West Germany"));
}

#[test]
fn rule_matches_whole_names_only() {
    assert_eq!(normalize_name("West Germany"), "Germany");
    assert_eq!(normalize_name("West Germany (FRG)"), "West Germany (FRG)");
    assert_eq!(normalize_name("Soviet Union"), "Soviet Union");
    assert_eq!(normalize_name("Czechoslovakia"), "Czechoslovakia");
}

#[test]
fn winning_countries_keep_first_seen_order_without_duplicates() {
    let dataset = Dataset::new(sample());
    assert_eq!(
        dataset.winning_countries(),
        &["Uruguay", "Germany", "Brazil", "England"]
    );
}

#[test]
fn empty_winners_are_left_out_of_the_list() {
    let records = vec![
        FinalsRecord::new(1930, "Uruguay", "Argentina"),
        FinalsRecord::new(2026, "", "Spain"),
        FinalsRecord::new(2030, "  ", ""),
    ];
    assert_eq!(winning_countries(&records), vec!["Uruguay"]);
}

#[test]
fn every_winner_is_listed_exactly_once() {
    let dataset = Dataset::new(sample());
    for record in dataset.records() {
        let listed = dataset
            .winning_countries()
            .iter()
            .filter(|c| **c == record.winner)
            .count();
        assert_eq!(listed, 1, "{}", record.winner);
    }
}

#[test]
fn wins_are_counted_after_normalization() {
    let dataset = Dataset::new(sample());
    assert_eq!(dataset.wins_for("Brazil"), 5);
    assert_eq!(dataset.wins_for("Germany"), 2);
    assert_eq!(dataset.wins_for("West Germany"), 0);
    assert_eq!(dataset.wins_for("Hungary"), 0);
}

#[test]
fn defaults_follow_table_order() {
    let mut records = sample();
    records.rotate_left(2);
    let dataset = Dataset::new(records);
    assert_eq!(dataset.default_country(), Some("Brazil"));
    assert_eq!(dataset.default_year(), Some(Year(1958)));
    assert_eq!(dataset.years().first(), Some(&Year(1958)));
}

#[test]
fn empty_dataset_has_no_defaults() {
    let dataset = Dataset::new(Vec::new());
    assert!(dataset.is_empty());
    assert_eq!(dataset.default_country(), None);
    assert_eq!(dataset.default_year(), None);
}
