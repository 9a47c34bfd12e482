use nameplate::report::{self, NAME_REPORT_VERSION};
use nameplate::{ComponentRegistry, ComponentType, NameOrigin, UNKNOWN_NAME};
use tempfile::tempdir;

// The report recorder is process-wide state, so everything that touches it
// lives in this single test.
#[test]
fn report_captures_resolutions_and_round_trips() {
    let temp = tempdir().expect("temp dir");
    let path = temp.path().join("reports/names.json");
    report::enable_reporting(Some(path.clone()));

    let mut registry = ComponentRegistry::new();
    let image = registry.register(ComponentType::with_display_name("Image [from Image.react]"));
    let anonymous = registry.register(ComponentType::default());
    assert_eq!(registry.display_name(image), "Image");
    assert_eq!(registry.display_name(anonymous), UNKNOWN_NAME);
    // Cached lookups do not record again.
    assert_eq!(registry.display_name(image), "Image");

    let snapshot = report::snapshot();
    assert_eq!(snapshot.version, NAME_REPORT_VERSION);
    assert_eq!(snapshot.records.len(), 2);

    let first = &snapshot.records[0];
    assert_eq!(first.component, image);
    assert_eq!(first.raw.as_deref(), Some("Image [from Image.react]"));
    assert_eq!(first.resolved, "Image");
    assert_eq!(first.origin, NameOrigin::DisplayName);

    let second = &snapshot.records[1];
    assert_eq!(second.component, anonymous);
    assert_eq!(second.raw, None);
    assert_eq!(second.resolved, UNKNOWN_NAME);
    assert_eq!(second.origin, NameOrigin::Unknown);

    let flushed = report::flush().expect("flush report");
    assert_eq!(flushed.as_deref(), Some(path.as_path()));
    let loaded = report::load(&path).expect("load report");
    assert_eq!(loaded.version, NAME_REPORT_VERSION);
    assert_eq!(loaded.records.len(), 2);
    assert_eq!(loaded.records[0].resolved, "Image");

    report::disable_reporting();
    assert!(report::snapshot().records.is_empty());
    // With reporting disabled there is no output path left to write to.
    let flushed = report::flush().expect("flush report");
    assert_eq!(flushed, None);
}
