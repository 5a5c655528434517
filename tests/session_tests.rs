use chrono::NaiveDate;
use receipt_core::domain::Category;
use receipt_core::session::{EmptyBuckets, Session};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn identical_text_builds_distinct_records_with_equal_interpretation() {
    let mut session = Session::new();
    let first = session.record_scan("Dinner at Thai Restaurant $32.40").clone();
    let total_after_first = session.running_total();
    let second = session.record_scan("Dinner at Thai Restaurant $32.40").clone();

    assert_ne!(first.id, second.id);
    assert_eq!(first.amount, second.amount);
    assert_eq!(first.category, second.category);
    assert_eq!(first.confidence, second.confidence);
    assert!(session.running_total() >= total_after_first);
}

#[test]
fn category_totals_cover_only_categories_with_records() {
    let mut session = Session::new();
    session.record_scan_on("lunch $10.00", day(2024, 5, 1));
    session.record_scan_on("dinner $5.00", day(2024, 5, 2));
    session.record_scan_on("bus ticket $3.00", day(2024, 5, 3));

    let totals = session.category_totals();
    assert_eq!(totals.get(&Category::Food), Some(&15.0));
    assert_eq!(totals.get(&Category::Transport), Some(&3.0));
    assert!(!totals.contains_key(&Category::Office));
}

#[test]
fn views_are_idempotent_between_appends() {
    let mut session = Session::new();
    session.record_scan_on("pharmacy $12.00", day(2024, 4, 2));
    session.record_scan_on("cinema $9.00", day(2024, 6, 20));

    assert_eq!(session.category_totals(), session.category_totals());
    assert_eq!(
        session.monthly_totals(EmptyBuckets::ZeroFill),
        session.monthly_totals(EmptyBuckets::ZeroFill)
    );
}

#[test]
fn monthly_view_buckets_real_scan_dates() {
    let mut session = Session::new();
    session.record_scan_on("lunch $10.00", day(2024, 1, 15));
    session.record_scan_on("dinner $20.00", day(2024, 1, 28));
    session.record_scan_on("taxi $6.00", day(2024, 4, 2));

    let omitted = session.monthly_totals(EmptyBuckets::Omit);
    assert_eq!(omitted.len(), 2);
    assert_eq!(omitted[0].month, day(2024, 1, 1));
    assert_eq!(omitted[0].total, 30.0);
    assert_eq!(omitted[1].month, day(2024, 4, 1));

    let filled = session.monthly_totals(EmptyBuckets::ZeroFill);
    assert_eq!(filled.len(), 4);
    assert_eq!(filled[1].month, day(2024, 2, 1));
    assert_eq!(filled[1].total, 0.0);
}

#[test]
fn low_signal_scan_is_still_visible_for_manual_correction() {
    let mut session = Session::new();
    let record = session.record_scan("~~ smudged ink ~~");
    assert_eq!(record.amount, 0.0);
    assert_eq!(record.category, Category::Other);
    assert_eq!(session.record_count(), 1);
}
