//! Custom assertion helpers for derived views

use domain_payments::{PaidPayment, UpcomingPayment};

/// Panics unless the rows are sorted non-decreasing by due date
pub fn assert_ascending_by_due(rows: &[UpcomingPayment]) {
    let violation = rows
        .windows(2)
        .find(|pair| pair[0].schedule.due_on() > pair[1].schedule.due_on());
    assert!(
        violation.is_none(),
        "upcoming payments are not sorted ascending by due date: {:?}",
        violation
    );
}

/// Panics unless the rows are sorted non-increasing by paid date
pub fn assert_descending_by_paid(rows: &[PaidPayment<'_>]) {
    let violation = rows
        .windows(2)
        .find(|pair| pair[0].schedule.paid_date < pair[1].schedule.paid_date);
    assert!(
        violation.is_none(),
        "payment history is not sorted descending by paid date"
    );
}

/// Panics if any row is settled or outside the inclusive day window
pub fn assert_all_unsettled_and_windowed(
    rows: &[UpcomingPayment],
    today: chrono::NaiveDate,
    window_days: u32,
) {
    let window_end = today + chrono::Duration::days(i64::from(window_days));
    for row in rows {
        assert!(
            row.schedule.paid_date.is_none(),
            "settled installment {} leaked into upcoming payments",
            row.schedule.id
        );
        let due = row
            .schedule
            .due_on()
            .expect("upcoming payment without a due date");
        assert!(
            due >= today && due <= window_end,
            "installment {} due {} is outside [{}, {}]",
            row.schedule.id,
            due,
            today,
            window_end
        );
    }
}
