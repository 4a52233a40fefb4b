use std::fs;

use chrono::{TimeZone, Utc};
use insight_core::record::{Note, ProductRecord};
use insight_core::snapshot::{DatasetSnapshot, SnapshotError};
use tempfile::tempdir;

fn make_product(id: &str, brand: &str) -> ProductRecord {
    let mut product = ProductRecord::new(id, format!("{brand} {id}"));
    product.brand = Some(brand.to_string());
    product
}

fn make_note(id: &str, product: &str) -> Note {
    Note::new(id, "note", "u1", product).with_likes(1)
}

#[test]
fn snapshot_loads_from_disk_and_validates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    fs::write(
        &path,
        r#"{
          "products": [
            { "id": "p1", "name": "Chamomile", "brand": "Meadow", "certified": true },
            { "id": "p2", "name": "Peppermint" }
          ],
          "notes": [
            { "id": "n1", "label": "Calming", "author": "u1", "product": "p1", "likes": 4,
              "createdAt": "2024-03-01T08:00:00Z" },
            { "id": "n2", "label": "Fresh", "author": "u2", "product": "p2" }
          ]
        }"#,
    )
    .unwrap();

    let snapshot = DatasetSnapshot::from_path(&path).unwrap();

    assert_eq!(snapshot.products.len(), 2);
    assert_eq!(snapshot.products[0].certified, Some(true));
    assert_eq!(snapshot.products[1].brand, None);
    assert_eq!(
        snapshot.notes[0].created_at,
        Some(Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap())
    );
    assert_eq!(snapshot.notes[1].likes, None);
}

#[test]
fn missing_file_reports_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = DatasetSnapshot::from_path(&path).unwrap_err();

    match err {
        SnapshotError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = DatasetSnapshot::from_reader("{ \"products\": [".as_bytes()).unwrap_err();

    assert!(matches!(err, SnapshotError::Serialization(_)));
}

#[test]
fn duplicate_ids_are_rejected() {
    let dup_products = DatasetSnapshot::new(
        vec![make_product("p1", "A"), make_product("p1", "B")],
        vec![],
    );
    assert!(matches!(dup_products, Err(SnapshotError::DuplicateProductId(id)) if id == "p1"));

    let dup_notes = DatasetSnapshot::new(
        vec![make_product("p1", "A")],
        vec![make_note("n1", "p1"), make_note("n1", "p1")],
    );
    assert!(matches!(dup_notes, Err(SnapshotError::DuplicateNoteId(id)) if id == "n1"));
}

#[test]
fn dangling_product_reference_is_rejected() {
    let result = DatasetSnapshot::new(vec![make_product("p1", "A")], vec![make_note("n1", "p9")]);

    match result {
        Err(SnapshotError::UnknownProduct { note, product }) => {
            assert_eq!(note, "n1");
            assert_eq!(product, "p9");
        }
        other => panic!("expected UnknownProduct, got {other:?}"),
    }
}

#[test]
fn version_ignores_record_order_but_tracks_content() {
    let a = DatasetSnapshot::new(
        vec![make_product("p1", "A"), make_product("p2", "B")],
        vec![make_note("n1", "p1"), make_note("n2", "p2")],
    )
    .unwrap();
    let b = DatasetSnapshot::new(
        vec![make_product("p2", "B"), make_product("p1", "A")],
        vec![make_note("n2", "p2"), make_note("n1", "p1")],
    )
    .unwrap();
    let c = DatasetSnapshot::new(
        vec![make_product("p1", "A"), make_product("p2", "B")],
        vec![make_note("n1", "p1").with_replies(1), make_note("n2", "p2")],
    )
    .unwrap();

    let va = a.version().unwrap();
    assert!(va.as_str().starts_with("sha256:"));
    assert_eq!(va.as_str().len(), "sha256:".len() + 64);
    assert_eq!(va, b.version().unwrap());
    assert_ne!(va, c.version().unwrap());
}
