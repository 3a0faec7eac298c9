#![forbid(unsafe_code)]
use tempfile::tempdir;
use weekly_roster::catalog::parse_label;
use weekly_roster::{
    shift_duration_hours, AvailabilityTable, Day, DayShifts, HoursSummary, RosterError, Scheduler,
    ShiftCatalog, Sheet, REQUIRED_COLUMNS, STANDARD_CATALOG_VERSION,
};

#[test]
fn durations_follow_twelve_hour_clock() {
    assert_eq!(shift_duration_hours("12 PM - 4 PM").unwrap(), 4);
    assert_eq!(shift_duration_hours("4 PM - 7 PM").unwrap(), 3);
    assert_eq!(shift_duration_hours("2 PM - 7 PM").unwrap(), 5);
    assert_eq!(shift_duration_hours("9 AM - 5 PM").unwrap(), 8);
    assert_eq!(shift_duration_hours("4 PM – 7 PM").unwrap(), 3);
}

#[test]
fn durations_crossing_midnight_wrap() {
    assert_eq!(shift_duration_hours("10 PM - 12 AM").unwrap(), 2);
    assert_eq!(shift_duration_hours("8 PM - 12 AM").unwrap(), 4);
    assert_eq!(shift_duration_hours("10 PM - 6 AM").unwrap(), 8);
    assert_eq!(parse_label("12 AM - 12 PM").unwrap(), (0, 12));
}

#[test]
fn malformed_labels_fail_with_format_error() {
    for label in ["", "noon to four", "12 PM", "13 PM - 4 PM", "12 XM - 4 PM", "0 AM - 4 AM", "12PM - 4PM"] {
        let err = shift_duration_hours(label).unwrap_err();
        assert!(matches!(err, RosterError::Format { .. }), "{label:?}: {err}");
    }
}

#[test]
fn standard_catalog_is_versioned_and_valid() {
    let catalog = ShiftCatalog::standard();
    assert_eq!(catalog.version, STANDARD_CATALOG_VERSION);
    catalog.validate().unwrap();

    let days: Vec<Day> = catalog.days.iter().map(|d| d.day).collect();
    assert_eq!(days, Day::ALL.to_vec());
    assert_eq!(catalog.shifts_for(Day::Sunday).len(), 4);
    assert_eq!(catalog.shifts_for(Day::Friday)[0], "2 PM - 7 PM");

    let week: u32 = catalog
        .days
        .iter()
        .flat_map(|d| d.shifts.iter())
        .map(|l| shift_duration_hours(l).unwrap())
        .sum();
    assert_eq!(week, 12 + 10 + 10 + 10 + 10 + 10 + 12);
}

#[test]
fn validate_rejects_duplicates_and_bad_labels() {
    let dup_day = ShiftCatalog::new(
        "v",
        vec![
            DayShifts { day: Day::Monday, shifts: vec!["2 PM - 5 PM".into()] },
            DayShifts { day: Day::Monday, shifts: vec![] },
        ],
    );
    assert!(matches!(dup_day.validate(), Err(RosterError::Catalog(_))));

    let dup_label = ShiftCatalog::new(
        "v",
        vec![DayShifts { day: Day::Monday, shifts: vec!["2 PM - 5 PM".into(), "2 PM - 5 PM".into()] }],
    );
    assert!(matches!(dup_label.validate(), Err(RosterError::Catalog(_))));

    let bad_label = ShiftCatalog::new(
        "v",
        vec![DayShifts { day: Day::Monday, shifts: vec!["afternoon".into()] }],
    );
    assert!(matches!(bad_label.validate(), Err(RosterError::Format { .. })));
}

#[test]
fn export_and_load_catalog_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let catalog = ShiftCatalog::standard();
    catalog.export_json(&path).unwrap();

    let loaded = ShiftCatalog::load_from_file(&path).unwrap();
    assert_eq!(loaded, catalog);
}

#[test]
fn loading_missing_catalog_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = ShiftCatalog::load_from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, RosterError::Io { .. }));
}

#[test]
fn malformed_label_surfaces_when_hours_are_computed() {
    let catalog = ShiftCatalog::new(
        "broken",
        vec![DayShifts { day: Day::Tuesday, shifts: vec!["late evening".into()] }],
    );
    let headers = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
    let row = ["Ann", "Lee", "ann@example.com", "na", "na", "yes", "na", "na", "na", "na"]
        .iter()
        .map(|c| c.to_string())
        .collect();
    let sheet = Sheet::new(headers, vec![row]).unwrap();

    let table = AvailabilityTable::build(&catalog, &sheet.records());
    let roster = Scheduler::seeded(0).assign(&table);
    assert!(roster.worker_at(Day::Tuesday, "late evening").is_some());

    let err = HoursSummary::from_roster(&roster).unwrap_err();
    assert!(matches!(err, RosterError::Format { ref label, .. } if label == "late evening"));
}
