use folio::features::contact::Contact;
use folio_database::Database;

#[test]
fn default_features_are_listed() {
    let enabled = folio::features::ENABLED;
    assert!(enabled.contains(&"contact"));
    assert!(enabled.contains(&"profile"));
    assert!(!enabled.contains(&"billing"));
}

#[test]
fn every_migration_has_a_unique_key() {
    let migrations = folio::migrations();
    assert!(!migrations.is_empty());

    let mut keys: Vec<_> = migrations.iter().map(|m| (m.slice, m.version)).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), migrations.len());
}

#[tokio::test]
async fn init_registers_the_contact_slice() {
    let db = Database::builder()
        .url("mem://")
        .session("folio_test", "facade")
        .migrations(folio::migrations())
        .init()
        .await
        .expect("in-memory database");

    let slices = folio::init(&db);
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].id, std::any::TypeId::of::<Contact>());
    assert!(slices[0].downcast_ref::<Contact>().is_some());
}
