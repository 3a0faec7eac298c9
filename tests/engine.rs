#![forbid(unsafe_code)]
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use weekly_roster::{
    check_roster, shift_duration_hours, AvailabilityTable, Day, DayShifts, HoursSummary,
    IssueKind, Scheduler, ShiftCatalog, Sheet, Worker, REQUIRED_COLUMNS,
};

fn sheet(rows: &[(&str, &str, [&str; 7])]) -> Sheet {
    let headers = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
    let rows = rows
        .iter()
        .map(|(first, last, days)| {
            let mut row = vec![first.to_string(), last.to_string(), format!("{first}@example.com")];
            row.extend(days.iter().map(|d| d.to_string()));
            row
        })
        .collect();
    Sheet::new(headers, rows).unwrap()
}

fn sunday_catalog(labels: &[&str]) -> ShiftCatalog {
    ShiftCatalog::new(
        "test",
        vec![DayShifts {
            day: Day::Sunday,
            shifts: labels.iter().map(|l| l.to_string()).collect(),
        }],
    )
}

const ALL_DAYS: [&str; 7] = ["any", "any", "any", "any", "any", "any", "any"];
const NO_DAYS: [&str; 7] = ["na", "", "NA", "Na", " ", "na", ""];

#[test]
fn two_workers_two_shifts_no_double_booking() {
    let catalog = sunday_catalog(&["12 PM - 4 PM", "4 PM - 7 PM"]);
    let sheet = sheet(&[("Alice", "A", ALL_DAYS), ("Bob", "B", ALL_DAYS)]);
    let table = AvailabilityTable::build(&catalog, &sheet.records());

    for seed in 0..50 {
        let roster = Scheduler::seeded(seed).assign(&table);
        let day = roster.day(Day::Sunday).unwrap();
        let workers: HashSet<_> = day.slots.iter().filter_map(|s| s.worker.clone()).collect();
        assert_eq!(workers.len(), 2, "seed {seed}");

        let summary = HoursSummary::from_roster(&roster).unwrap();
        assert_eq!(summary.total(), 7);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary.entries()[0].hours, 4);
        assert_eq!(summary.entries()[1].hours, 3);
    }
}

#[test]
fn empty_availability_leaves_shift_unassigned() {
    let catalog = sunday_catalog(&["12 PM - 4 PM"]);
    let sheet = sheet(&[("Alice", "A", NO_DAYS)]);
    let table = AvailabilityTable::build(&catalog, &sheet.records());

    let roster = Scheduler::seeded(7).assign(&table);
    let day = roster.day(Day::Sunday).unwrap();
    assert_eq!(day.slots.len(), 1);
    assert!(day.slots[0].worker.is_none());
    assert_eq!(roster.unassigned_count(), 1);

    let issues = check_roster(&roster);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::Unassigned);
}

#[test]
fn single_worker_fills_every_shift_by_fallback() {
    let catalog = sunday_catalog(&["12 PM - 4 PM", "4 PM - 7 PM", "10 PM - 12 AM"]);
    let sheet = sheet(&[("Alice", "Smith", ALL_DAYS)]);
    let table = AvailabilityTable::build(&catalog, &sheet.records());

    let roster = Scheduler::seeded(1).assign(&table);
    let alice = Worker::new("Alice Smith");
    for slot in &roster.day(Day::Sunday).unwrap().slots {
        assert_eq!(slot.worker.as_ref(), Some(&alice));
    }

    let summary = HoursSummary::from_roster(&roster).unwrap();
    assert_eq!(summary.hours_for(&alice), Some(4 + 3 + 2));

    let doubles = check_roster(&roster)
        .into_iter()
        .filter(|i| matches!(i.kind, IssueKind::DoubleBooked(_)))
        .count();
    assert_eq!(doubles, 2);
}

#[test]
fn all_na_sheet_yields_empty_roster_and_summary() {
    let catalog = ShiftCatalog::standard();
    let sheet = sheet(&[("Alice", "A", NO_DAYS), ("Bob", "B", NO_DAYS)]);
    let table = AvailabilityTable::build(&catalog, &sheet.records());

    let roster = Scheduler::from_clock().assign(&table);
    assert_eq!(roster.unassigned_count(), roster.slots().count());
    assert!(HoursSummary::from_roster(&roster).unwrap().is_empty());
}

#[test]
fn standard_roster_covers_every_catalog_slot_in_order() {
    let catalog = ShiftCatalog::standard();
    let sheet = sheet(&[
        ("Alice", "A", ALL_DAYS),
        ("Bob", "B", ["na", "mornings", "", "all day", "na", "after 5", "na"]),
        ("Chloe", "C", ["10-6", "na", "na", "na", "na", "na", "any"]),
        ("Dan", "D", ALL_DAYS),
    ]);
    let records = sheet.records();
    let table = AvailabilityTable::build(&catalog, &records);

    for seed in [3_u64, 17, 99, 2024] {
        let roster = Scheduler::with_rng(StdRng::seed_from_u64(seed)).assign(&table);
        assert_eq!(roster.catalog_version(), catalog.version);
        assert_eq!(roster.days().len(), catalog.days.len());

        for (day_roster, day_shifts) in roster.days().iter().zip(&catalog.days) {
            assert_eq!(day_roster.day, day_shifts.day);
            let labels: Vec<_> = day_roster.slots.iter().map(|s| s.label.as_str()).collect();
            assert_eq!(labels, day_shifts.shifts);

            let available: HashSet<Worker> = records
                .iter()
                .filter(|r| r.availability(day_roster.day).is_available())
                .map(|r| r.worker.clone())
                .collect();
            let assigned: Vec<&Worker> =
                day_roster.slots.iter().filter_map(|s| s.worker.as_ref()).collect();
            if !available.is_empty() {
                assert_eq!(assigned.len(), day_roster.slots.len());
            }
            assert!(assigned.iter().all(|w| available.contains(*w)));

            let distinct: HashSet<_> = assigned.iter().collect();
            assert!(distinct.len() <= day_roster.slots.len());
            if available.len() >= day_roster.slots.len() {
                assert_eq!(distinct.len(), day_roster.slots.len());
            }
        }

        let expected: u32 = roster
            .slots()
            .filter(|(_, s)| s.worker.is_some())
            .map(|(_, s)| shift_duration_hours(&s.label).unwrap())
            .sum();
        assert_eq!(HoursSummary::from_roster(&roster).unwrap().total(), expected);
    }
}

#[test]
fn same_seed_gives_same_roster() {
    let catalog = ShiftCatalog::standard();
    let sheet = sheet(&[
        ("Alice", "A", ALL_DAYS),
        ("Bob", "B", ALL_DAYS),
        ("Chloe", "C", ALL_DAYS),
        ("Dan", "D", ALL_DAYS),
        ("Eve", "E", ALL_DAYS),
    ]);
    let table = AvailabilityTable::build(&catalog, &sheet.records());

    let a = Scheduler::seeded(42).assign(&table);
    let b = Scheduler::seeded(42).assign(&table);
    assert_eq!(a, b);
}

#[test]
fn assignment_does_not_reorder_availability_table() {
    let catalog = sunday_catalog(&["12 PM - 4 PM", "4 PM - 7 PM"]);
    let sheet = sheet(&[
        ("Alice", "A", ALL_DAYS),
        ("Bob", "B", ALL_DAYS),
        ("Chloe", "C", ALL_DAYS),
    ]);
    let table = AvailabilityTable::build(&catalog, &sheet.records());
    let before = table.clone();

    let mut scheduler = Scheduler::seeded(5);
    let _ = scheduler.assign(&table);
    let _ = scheduler.assign(&table);
    assert_eq!(table, before);
}

#[test]
fn equal_totals_keep_first_appearance_order() {
    let catalog = ShiftCatalog::new(
        "ties",
        vec![
            DayShifts {
                day: Day::Sunday,
                shifts: vec!["2 PM - 5 PM".into(), "5 PM - 8 PM".into(), "8 PM - 11 PM".into()],
            },
            DayShifts {
                day: Day::Monday,
                shifts: vec!["2 PM - 4 PM".into()],
            },
        ],
    );
    let sheet = sheet(&[
        ("Alice", "A", ["any", "na", "na", "na", "na", "na", "na"]),
        ("Bob", "B", ["any", "na", "na", "na", "na", "na", "na"]),
        ("Chloe", "C", ["any", "na", "na", "na", "na", "na", "na"]),
        ("Dan", "D", ["na", "any", "na", "na", "na", "na", "na"]),
    ]);
    let table = AvailabilityTable::build(&catalog, &sheet.records());

    for seed in [4_u64, 21, 77, 1000] {
        let roster = Scheduler::seeded(seed).assign(&table);
        let summary = HoursSummary::from_roster(&roster).unwrap();

        let mut first_seen: Vec<Worker> = Vec::new();
        for (_, slot) in roster.slots() {
            if let Some(w) = &slot.worker {
                if !first_seen.contains(w) {
                    first_seen.push(w.clone());
                }
            }
        }
        let tied: Vec<Worker> = first_seen
            .into_iter()
            .filter(|w| summary.hours_for(w) == Some(3))
            .collect();
        assert_eq!(tied.len(), 3, "seed {seed}");

        let order: Vec<Worker> = summary.entries().iter().map(|e| e.worker.clone()).collect();
        assert_eq!(&order[..3], tied.as_slice(), "seed {seed}");
        assert_eq!(order[3], Worker::new("Dan D"));
    }
}
