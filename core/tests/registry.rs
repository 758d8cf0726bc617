use artistmap_core::{ArtistRegistry, LinkPolicy, Mbid, RegistryError};

fn mbid(raw: &str) -> Option<Mbid> {
    Mbid::parse(raw)
}

#[test]
fn test_record_listened_creates_artist() {
    let mut registry = ArtistRegistry::new(LinkPolicy::Bidirectional);
    registry.record_listened("Radiohead", mbid("a74b1b7f-71a5-4011-9441-d0b5e4122711"));

    let artist = registry.get("Radiohead").unwrap();
    assert!(artist.listened);
    assert_eq!(artist.relatedness_count, 1);
    assert!(artist.neighbors.is_empty());
    assert!(artist.can_seed_discovery());
}

#[test]
fn test_record_listened_twice_keeps_one_record() {
    let mut registry = ArtistRegistry::default();
    registry.record_listened("Bjork", mbid("87c5dedd-371d-4a53-9f7f-80522fb7f3cb"));
    registry.record_listened("Bjork", mbid("87c5dedd-371d-4a53-9f7f-80522fb7f3cb"));

    assert_eq!(registry.len(), 1);
}

#[test]
fn test_related_then_listened_flips_flag_and_keeps_fields() {
    let mut registry = ArtistRegistry::new(LinkPolicy::Bidirectional);
    registry.record_listened("Portishead", mbid("8f6bd1e4-fbe1-4f50-aa9b-94c450ec0f11"));
    registry
        .record_related("Portishead", "Massive Attack", mbid("10adbe5e-a2c0-4bf3-8249-2b4cbf6e6ca8"))
        .unwrap();

    let before = registry.get("Massive Attack").unwrap().clone();
    assert!(!before.listened);

    registry.record_listened("Massive Attack", mbid("10adbe5e-a2c0-4bf3-8249-2b4cbf6e6ca8"));

    let after = registry.get("Massive Attack").unwrap();
    assert!(after.listened);
    assert_eq!(after.relatedness_count, before.relatedness_count);
    assert_eq!(after.neighbors, before.neighbors);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_listened_adopts_missing_mbid() {
    let mut registry = ArtistRegistry::default();
    registry.record_listened("Seed", mbid("seed-id"));
    registry.record_related("Seed", "Tricky", None).unwrap();
    assert!(!registry.get("Tricky").unwrap().can_seed_discovery());

    registry.record_listened("Tricky", mbid("tricky-id"));

    assert_eq!(registry.get("Tricky").unwrap().external_id, mbid("tricky-id"));
}

#[test]
fn test_listened_never_resets() {
    let mut registry = ArtistRegistry::default();
    registry.record_listened("A", mbid("a"));
    registry.record_listened("B", mbid("b"));
    registry.record_related("B", "A", mbid("a")).unwrap();
    registry.record_related("B", "A", None).unwrap();

    assert!(registry.get("A").unwrap().listened);
}

#[test]
fn test_relatedness_count_tracks_rediscovery() {
    let mut registry = ArtistRegistry::default();
    registry.record_listened("A", mbid("a"));
    registry.record_listened("B", mbid("b"));
    registry.record_listened("D", mbid("d"));

    registry.record_related("A", "C", mbid("c")).unwrap();
    registry.record_related("B", "C", mbid("c")).unwrap();
    registry.record_related("D", "C", None).unwrap();

    assert_eq!(registry.get("C").unwrap().relatedness_count, 3);
}

#[test]
fn test_relatedness_count_increments_for_listened_artists() {
    let mut registry = ArtistRegistry::default();
    registry.record_listened("A", mbid("a"));
    registry.record_listened("B", mbid("b"));
    registry.record_related("A", "B", mbid("b")).unwrap();

    let b = registry.get("B").unwrap();
    assert!(b.listened);
    assert_eq!(b.relatedness_count, 2);
}

#[test]
fn test_bidirectional_links() {
    let mut registry = ArtistRegistry::new(LinkPolicy::Bidirectional);
    registry.record_listened("A", mbid("a"));
    registry.record_related("A", "C", mbid("c")).unwrap();

    assert_eq!(registry.get("A").unwrap().neighbors, vec!["C"]);
    assert_eq!(registry.get("C").unwrap().neighbors, vec!["A"]);
}

#[test]
fn test_forward_links() {
    let mut registry = ArtistRegistry::new(LinkPolicy::Forward);
    registry.record_listened("A", mbid("a"));
    registry.record_related("A", "C", mbid("c")).unwrap();

    assert_eq!(registry.get("A").unwrap().neighbors, vec!["C"]);
    assert!(registry.get("C").unwrap().neighbors.is_empty());
}

#[test]
fn test_duplicate_links_are_kept() {
    let mut registry = ArtistRegistry::new(LinkPolicy::Bidirectional);
    registry.record_listened("A", mbid("a"));
    registry.record_related("A", "C", mbid("c")).unwrap();
    registry.record_related("A", "C", mbid("c")).unwrap();

    assert_eq!(registry.get("A").unwrap().neighbors, vec!["C", "C"]);
    assert_eq!(registry.get("C").unwrap().neighbors.len(), 2);
}

#[test]
fn test_related_requires_registered_source() {
    let mut registry = ArtistRegistry::default();

    let result = registry.record_related("Ghost", "C", mbid("c"));

    assert_eq!(result, Err(RegistryError::UnknownSource("Ghost".to_string())));
    assert!(registry.is_empty());
}

#[test]
fn test_prune_removes_single_neighbor_related_only() {
    let mut registry = ArtistRegistry::new(LinkPolicy::Bidirectional);
    registry.record_listened("D", mbid("d"));
    registry.record_related("D", "E", mbid("e")).unwrap();

    let pruned = registry.prune_isolated_related();

    assert_eq!(pruned, vec!["E"]);
    assert!(!registry.contains("E"));
    assert!(registry.contains("D"));
    // Dangling reference is left for the assembler to skip.
    assert_eq!(registry.get("D").unwrap().neighbors, vec!["E"]);
}

#[test]
fn test_prune_keeps_shared_related() {
    let mut registry = ArtistRegistry::new(LinkPolicy::Bidirectional);
    registry.record_listened("A", mbid("a"));
    registry.record_listened("B", mbid("b"));
    registry.record_related("A", "C", mbid("c")).unwrap();
    registry.record_related("B", "C", mbid("c")).unwrap();

    let pruned = registry.prune_isolated_related();

    assert!(pruned.is_empty());
    assert!(registry.contains("C"));
}

#[test]
fn test_prune_never_removes_listened() {
    let mut registry = ArtistRegistry::new(LinkPolicy::Bidirectional);
    registry.record_listened("Lonely", None);
    registry.record_listened("A", mbid("a"));
    registry.record_listened("B", mbid("b"));
    registry.record_related("A", "B", mbid("b")).unwrap();

    registry.prune_isolated_related();

    assert!(registry.contains("Lonely"));
    assert!(registry.contains("A"));
    assert!(registry.contains("B"));
}

#[test]
fn test_prune_keeps_related_without_neighbors() {
    // Forward links leave related artists with empty neighbor lists,
    // which is not exactly one.
    let mut registry = ArtistRegistry::new(LinkPolicy::Forward);
    registry.record_listened("A", mbid("a"));
    registry.record_related("A", "C", mbid("c")).unwrap();

    let pruned = registry.prune_isolated_related();

    assert!(pruned.is_empty());
    assert!(registry.contains("C"));
}

#[test]
fn test_snapshot_preserves_discovery_order() {
    let mut registry = ArtistRegistry::default();
    registry.record_listened("Zed", mbid("z"));
    registry.record_related("Zed", "Alpha", mbid("a")).unwrap();
    registry.record_listened("Mid", mbid("m"));

    let snapshot = registry.snapshot();
    let names: Vec<&str> = snapshot.iter().map(|artist| artist.name.as_str()).collect();

    assert_eq!(names, vec!["Zed", "Alpha", "Mid"]);
    assert_eq!(snapshot.listened_count(), 2);
}

#[test]
fn test_artist_without_mbid_is_recorded() {
    let mut registry = ArtistRegistry::default();
    registry.record_listened("F", None);

    let f = registry.get("F").unwrap();
    assert!(f.listened);
    assert!(f.external_id.is_none());
    assert!(!f.can_seed_discovery());
}
