use underworld::ranks::{RankTable, RankTier};

#[test]
fn experience_maps_to_highest_reached_tier() {
    let ranks = RankTable::default();
    let standing = ranks.rank_for_experience(1_499);
    assert_eq!(standing.current_rank, "Enforcer");
    assert_eq!(standing.next_rank, Some("Hitman"));
    assert_eq!(standing.xp_to_next, Some(1));

    let top = ranks.rank_for_experience(1_000_000);
    assert_eq!(top.current_rank, "Godfather");
    assert_eq!(top.next_rank, None);
    assert_eq!(top.xp_to_next, None);
}

#[test]
fn rank_values_are_one_based_and_default_to_one() {
    let ranks = RankTable::default();
    assert_eq!(ranks.rank_value("Street Thug"), 1);
    assert_eq!(ranks.rank_value("Hitman"), 4);
    assert_eq!(ranks.rank_value("Godfather"), 8);
    assert_eq!(ranks.rank_value("Pope"), 1);
}

#[test]
fn experience_below_first_threshold_uses_first_tier() {
    let ranks = RankTable::from_json(r#"[{"name":"Rookie","min_xp":10},{"name":"Pro","min_xp":50}]"#)
        .unwrap();
    assert_eq!(ranks.rank_for_experience(3).current_rank, "Rookie");
    assert_eq!(ranks.rank_value_for_experience(60), 2);
}

#[test]
fn rejects_broken_tables() {
    assert!(RankTable::new(vec![]).is_err());
    let unsorted = vec![
        RankTier { name: "B".into(), min_xp: 10 },
        RankTier { name: "A".into(), min_xp: 5 },
    ];
    assert!(RankTable::new(unsorted).is_err());
    let duplicated = vec![
        RankTier { name: "A".into(), min_xp: 0 },
        RankTier { name: "A".into(), min_xp: 5 },
    ];
    assert!(RankTable::new(duplicated).is_err());
    assert!(RankTable::from_json("not json").is_err());
}

#[test]
fn names_keep_table_order() {
    let ranks = RankTable::default();
    let names: Vec<&str> = ranks.rank_names().collect();
    assert_eq!(names.first(), Some(&"Street Thug"));
    assert_eq!(names.last(), Some(&"Godfather"));
    assert_eq!(names.len(), 8);
}
