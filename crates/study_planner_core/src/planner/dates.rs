use chrono::NaiveDate;

/// Whole days from `today` until `exam_date`. Zero or negative when the exam
/// is today or already past.
pub fn days_until(today: NaiveDate, exam_date: NaiveDate) -> i64 {
    (exam_date - today).num_days()
}
