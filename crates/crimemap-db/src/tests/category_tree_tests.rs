//! Tests for category tree assembly against a live database.
//!
//! Run with `cargo test -- --ignored` against a PostGIS-enabled database.

use crate::test_fixtures::TestDatabase;
use crate::CategoryRepository as _;

#[tokio::test]
#[ignore = "requires a PostGIS-enabled database"]
async fn test_tree_groups_subcategories_under_one_category() {
    let test_db = TestDatabase::new().await;

    let theft = test_db.insert_category("Theft").await;
    let burglary = test_db
        .insert_subcategory("Burglary", "Home Burglary")
        .await;
    let robbery = test_db
        .insert_subcategory("Robbery", "Street Robbery")
        .await;
    test_db.link_subcategory(theft, burglary).await;
    test_db.link_subcategory(theft, robbery).await;

    let tree = test_db
        .db
        .categories
        .fetch_tree()
        .await
        .expect("fetch should succeed");

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].id, theft);
    assert_eq!(tree[0].name, "Theft");

    let mut subcategory_ids: Vec<i32> = tree[0].subcategories.iter().map(|s| s.id).collect();
    subcategory_ids.sort_unstable();
    let mut expected = vec![burglary, robbery];
    expected.sort_unstable();
    assert_eq!(subcategory_ids, expected);

    test_db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a PostGIS-enabled database"]
async fn test_tree_has_no_duplicate_categories() {
    let test_db = TestDatabase::new().await;

    let theft = test_db.insert_category("Theft").await;
    let violence = test_db.insert_category("Violence").await;
    let burglary = test_db
        .insert_subcategory("Burglary", "Home Burglary")
        .await;
    let robbery = test_db
        .insert_subcategory("Robbery", "Street Robbery")
        .await;
    let assault = test_db.insert_subcategory("Assault", "Assault").await;
    test_db.link_subcategory(theft, burglary).await;
    test_db.link_subcategory(theft, robbery).await;
    test_db.link_subcategory(violence, assault).await;

    let tree = test_db
        .db
        .categories
        .fetch_tree()
        .await
        .expect("fetch should succeed");

    assert_eq!(tree.len(), 2);
    let mut ids: Vec<i32> = tree.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    let mut expected = vec![theft, violence];
    expected.sort_unstable();
    assert_eq!(ids, expected);

    let theft_node = tree.iter().find(|c| c.id == theft).unwrap();
    assert_eq!(theft_node.subcategories.len(), 2);
    let violence_node = tree.iter().find(|c| c.id == violence).unwrap();
    assert_eq!(violence_node.subcategories.len(), 1);

    test_db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a PostGIS-enabled database"]
async fn test_empty_taxonomy_yields_empty_tree() {
    let test_db = TestDatabase::new().await;

    let tree = test_db
        .db
        .categories
        .fetch_tree()
        .await
        .expect("fetch should succeed");

    assert!(tree.is_empty());

    test_db.cleanup().await;
}
