//! Month sequence construction for one year.
//!
//! Every month is a beginning segment (days `b6`..`b1`), a pivot day (`b0`
//! then `0`) and an end segment (days `1`..`6` plus a tail whose length
//! follows the month's [`MonthLength`]). Each label covers one half-day.

use chronal_numeral::{Digit, YearName};

use crate::anomaly::{MonthLength, TERMS_PER_YEAR};
use crate::label::DateLabel;
use crate::year::YearRecord;

// Digit::ALL runs bC (0) .. b0 (12), 0 (13) .. C (25).
const NEG_MONTHS_END: usize = 12;
const POS_MONTHS_START: usize = 13;
const DAY_7: Digit = Digit::ALL[20];
const DAY_8: Digit = Digit::ALL[21];
const DAY_NEG_7: Digit = Digit::ALL[5];
const DAY_NEG_8: Digit = Digit::ALL[4];

/// Labels per year: two per day.
pub fn label_count(total_days: i32) -> usize {
    2 * total_days.max(0) as usize
}

struct MonthSequenceBuilder {
    /// Position in half-days since JD 0.
    cursor: i64,
    labels: Vec<DateLabel>,
}

impl MonthSequenceBuilder {
    fn new(start_jd: f64, capacity: usize) -> Self {
        Self {
            cursor: 2 * start_jd.round_ties_even() as i64,
            labels: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, year: YearName, month: Digit, day: Digit) {
        let epoch = self.cursor as f64 / 2.0;
        self.labels.push(DateLabel::new(epoch, year, month, day));
        self.cursor += 1;
    }

    fn push_day(&mut self, year: YearName, month: Digit, day: Digit) {
        self.push(year, month, day);
        self.push(year, month, day);
    }

    fn beginning(&mut self, year: YearName, month: Digit) {
        // b6 down to b1
        for day in Digit::ALL[6..=11].iter().copied() {
            self.push_day(year, month, day);
        }
    }

    fn middle(&mut self, year: YearName, month: Digit) {
        self.push(year, month, Digit::NEG_ZERO);
        self.push(year, month, Digit::ZERO);
    }

    fn end(&mut self, year: YearName, month: Digit, next: Digit, length: MonthLength) {
        // 1 through 6
        for day in Digit::ALL[14..=19].iter().copied() {
            self.push_day(year, month, day);
        }
        match length {
            MonthLength::Short => {
                self.push(year, month, DAY_7);
                self.push(year, next, DAY_NEG_7);
            }
            MonthLength::Nominal => {
                self.push_day(year, month, DAY_7);
                self.push_day(year, next, DAY_NEG_7);
            }
            MonthLength::Long => {
                self.push_day(year, month, DAY_7);
                self.push(year, month, DAY_8);
                self.push(year, next, DAY_NEG_8);
                self.push_day(year, next, DAY_NEG_7);
            }
        }
    }

    fn month(&mut self, year: YearName, month: Digit, next: Digit, length: MonthLength) {
        self.beginning(year, month);
        self.middle(year, month);
        self.end(year, month, next, length);
    }

    /// Epoch of the next label that would be pushed.
    fn next_epoch(&self) -> f64 {
        self.cursor as f64 / 2.0
    }
}

/// Builds the full half-day label sequence for one year.
///
/// The year runs from the midday of `bC`'s pivot day to the whole-day half
/// of `C`'s pivot day. Months `bC` through `b0` carry the primary name; the
/// name switches to the shadow name at the midday of the `b0`/`0` pivot day.
///
/// The sequence holds `2 * (360 + sum of codes)` labels in strictly
/// increasing half-day steps.
///
/// # Example
///
/// ```
/// use chronal_calendar::{AnomalyCode, YearRecord, build_year};
/// use chronal_numeral::ChronologyCounter;
///
/// let names = ChronologyCounter::new(11520).names().unwrap();
/// let record = YearRecord::new(2435825.2, AnomalyCode::default(), names).unwrap();
/// let labels = build_year(&record);
/// assert_eq!(labels.len(), 720);
/// assert_eq!(labels[0].to_string(), "2435825.0,1b4b0b0.bC0");
/// ```
pub fn build_year(record: &YearRecord) -> Vec<DateLabel> {
    let (labels, _) = build_year_with_end(record);
    labels
}

/// Like [`build_year`], also returning the epoch just past the last label.
pub fn build_year_with_end(record: &YearRecord) -> (Vec<DateLabel>, f64) {
    let lengths = record.anomalies().lengths();
    let before = record.names().before_pivot;
    let after = record.names().after_pivot;
    let months = &Digit::ALL;

    let mut builder = MonthSequenceBuilder::new(
        record.start_jd(),
        label_count(record.anomalies().total_days()),
    );

    // bC: only the midday of its pivot day belongs to this year
    builder.push(before, months[0], Digit::ZERO);
    builder.end(before, months[0], months[1], lengths[0]);

    // bB .. b1
    for m in 1..NEG_MONTHS_END {
        builder.month(before, months[m], months[m + 1], lengths[m]);
    }

    // pivot month: b0 before the switch, 0 after it
    let pivot_neg = months[NEG_MONTHS_END];
    let pivot_pos = months[POS_MONTHS_START];
    builder.beginning(before, pivot_neg);
    builder.push(before, pivot_neg, Digit::NEG_ZERO);
    builder.push(after, pivot_pos, Digit::ZERO);
    builder.end(after, pivot_pos, months[POS_MONTHS_START + 1], lengths[NEG_MONTHS_END]);

    // 1 .. B
    for term in (NEG_MONTHS_END + 1)..TERMS_PER_YEAR {
        let m = term + 1;
        builder.month(after, months[m], months[m + 1], lengths[term]);
    }

    // C: only the whole-day half of its pivot day
    let last = months[months.len() - 1];
    builder.beginning(after, last);
    builder.push(after, last, Digit::NEG_ZERO);

    let end = builder.next_epoch();
    (builder.labels, end)
}
