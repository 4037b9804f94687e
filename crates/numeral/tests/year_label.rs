use chronal_numeral::{
    Glyphs, NumeralError, TailSign, YearLabel, YearName, chronal_year, encode_fixed, render,
};

#[test]
fn advance_agrees_with_non_negative_encoding() {
    for start in [-30_000, -1, 0, chronal_year(1957)] {
        let mut label = YearLabel::new(start).unwrap();
        for step in 0..15_000 {
            let value = start + step;
            let expected = encode_fixed::<4>(value, TailSign::NonNegative).unwrap();
            assert_eq!(label.digits(), &expected, "value {value}");
            label.advance().unwrap();
        }
    }
}

#[test]
fn latex_rows_from_1957() {
    let mut label = YearLabel::new(chronal_year(1957)).unwrap();
    let mut rows = Vec::new();
    for _ in 0..13 {
        rows.push(label.to_latex());
        label.advance().unwrap();
    }
    assert_eq!(rows[0], "1\\bar400");
    assert_eq!(rows[1], "1\\bar401");
    assert_eq!(rows[11], "1\\bar40B");
    assert_eq!(rows[12], "1\\bar41\\bar{C}");
}

#[test]
fn label_and_shadow_name_match() {
    let year = chronal_year(2024);
    let label = YearLabel::new(year).unwrap();
    let shadow = YearName::encode(year, TailSign::NonNegative).unwrap();
    assert_eq!(label.digits(), shadow.digits());
    assert_eq!(label.to_latex(), render(shadow.digits(), Glyphs::Latex));
}

#[test]
fn overflow_is_reported() {
    // Cb0b0b1, the largest non-negative-tail value
    let max = 12 * 13_824 - 1;
    let mut label = YearLabel::new(max).unwrap();
    assert!(matches!(
        label.advance(),
        Err(NumeralError::Overflow { width: 4, .. })
    ));
    assert_eq!(label.value(), max);
    assert!(YearLabel::new(max + 1).is_err());
}
