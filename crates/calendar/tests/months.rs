use chronal_calendar::{AnomalyCode, DateLabel, YearRecord, build_year, build_year_with_end};
use chronal_numeral::{ChronologyCounter, Glyphs};

fn record(values: &[i32; 24], start_jd: f64) -> YearRecord {
    let names = ChronologyCounter::new(11520).names().unwrap();
    let code = AnomalyCode::try_from(&values[..]).unwrap();
    YearRecord::new(start_jd, code, names).unwrap()
}

/// Deterministic spread of anomaly codes for property checks.
fn codes(seed: u64) -> [i32; 24] {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut values = [0; 24];
    for v in &mut values {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        *v = ((state >> 33) % 3) as i32 - 1;
    }
    values
}

#[test]
fn epochs_strictly_increase_by_half_days() {
    for seed in 0..200 {
        let values = codes(seed);
        let labels = build_year(&record(&values, 2451900.3));
        for pair in labels.windows(2) {
            assert_eq!(pair[1].epoch() - pair[0].epoch(), 0.5, "seed {seed}");
        }
    }
}

#[test]
fn label_count_follows_code_sum() {
    for seed in 0..200 {
        let values = codes(seed);
        let sum: i32 = values.iter().sum();
        let (labels, end) = build_year_with_end(&record(&values, 2451900.3));
        assert_eq!(labels.len() as i32, 2 * (360 + sum), "seed {seed}");
        assert_eq!(end, 2451900.0 + f64::from(360 + sum));
    }
}

#[test]
fn year_lengths() {
    let zeros = [0; 24];
    assert_eq!(build_year(&record(&zeros, 2435825.0)).len(), 720);

    let mut long = [0; 24];
    long[7] = 1;
    assert_eq!(build_year(&record(&long, 2435825.0)).len(), 722);

    let mut short = [0; 24];
    short[17] = -1;
    assert_eq!(build_year(&record(&short, 2435825.0)).len(), 718);
}

#[test]
fn matches_reference_sequence() {
    let mut values = [0; 24];
    values[0] = -1;
    values[1] = 1;
    values[12] = 1;
    values[23] = -1;
    let labels = build_year(&record(&values, 2451900.3));
    let at = |i: usize| labels[i].to_string();

    assert_eq!(labels.len(), 720);
    assert_eq!(at(0), "2451900.0,1b4b0b0.bC0");
    assert_eq!(at(1), "2451900.5,1b4b0b0.bC1");
    assert_eq!(at(12), "2451906.0,1b4b0b0.bC6");
    // short month: one half-day of 7 on each side
    assert_eq!(at(13), "2451906.5,1b4b0b0.bC7");
    assert_eq!(at(14), "2451907.0,1b4b0b0.bBb7");
    assert_eq!(at(15), "2451907.5,1b4b0b0.bBb6");
    assert_eq!(at(28), "2451914.0,1b4b0b0.bB0");
    assert_eq!(at(29), "2451914.5,1b4b0b0.bB1");
    // long month: 7, 7, 8 then b8, b7, b7
    assert_eq!(at(41), "2451920.5,1b4b0b0.bB7");
    assert_eq!(at(42), "2451921.0,1b4b0b0.bB7");
    assert_eq!(at(43), "2451921.5,1b4b0b0.bB8");
    assert_eq!(at(44), "2451922.0,1b4b0b0.bAb8");
    assert_eq!(at(45), "2451922.5,1b4b0b0.bAb7");
    assert_eq!(at(46), "2451923.0,1b4b0b0.bAb7");
    assert_eq!(at(47), "2451923.5,1b4b0b0.bAb6");
    // the name switches at the pivot of b0/0
    assert_eq!(at(359), "2452079.5,1b4b0b0.b0b0");
    assert_eq!(at(360), "2452080.0,1b400.00");
    assert_eq!(at(717), "2452258.5,1b400.Cb1");
    assert_eq!(at(718), "2452259.0,1b400.Cb1");
    assert_eq!(at(719), "2452259.5,1b400.Cb0");
}

#[test]
fn pivot_switch_position_tracks_first_half() {
    let mut values = [0; 24];
    values[2] = 1;
    values[5] = 1;
    values[9] = -1;
    values[15] = -1;
    let labels = build_year(&record(&values, 2435825.0));
    let switch = labels
        .iter()
        .position(|l| l.tag(Glyphs::Ascii).starts_with("1b400."))
        .unwrap();
    assert_eq!(switch, 360 + 2);
    assert_eq!(labels[switch - 1].tag(Glyphs::Ascii), "1b4b0b0.b0b0");
    assert_eq!(labels[switch].tag(Glyphs::Ascii), "1b400.00");
    assert!(labels[..switch].iter().all(|l| l.month().is_negative()));
    assert!(labels[switch..].iter().all(|l| !l.month().is_negative()));
}

#[test]
fn months_appear_in_order() {
    let labels = build_year(&record(&codes(7), 2435825.0));
    let mut months: Vec<String> = Vec::new();
    for label in &labels {
        let symbol = label.month().symbol().to_string();
        if months.last() != Some(&symbol) {
            months.push(symbol);
        }
    }
    let expected = [
        "bC", "bB", "bA", "b9", "b8", "b7", "b6", "b5", "b4", "b3", "b2", "b1", "b0", "0", "1",
        "2", "3", "4", "5", "6", "7", "8", "9", "A", "B", "C",
    ];
    assert_eq!(months, expected);
}

#[test]
fn every_label_spans_one_half_day() {
    let labels: Vec<DateLabel> = build_year(&record(&codes(3), 2435825.0));
    let first = labels[0].epoch();
    for (i, label) in labels.iter().enumerate() {
        assert_eq!(label.epoch(), first + 0.5 * i as f64);
    }
}
