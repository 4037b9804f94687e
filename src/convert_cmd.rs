//! Convert command: print an integer in every glyph set.

use anyhow::Result;

use chronal_numeral::{ChronologyCounter, Glyphs, TailSign, decode, encode, render};

use crate::cli::ConvertArgs;

/// Print `args.value` as a chronal numeral.
pub fn run(args: ConvertArgs) -> Result<()> {
    for line in describe(args.value) {
        println!("{line}");
    }
    Ok(())
}

fn describe(value: i64) -> Vec<String> {
    let digits = encode(value, TailSign::of(value));
    debug_assert_eq!(decode(&digits), value);
    let mut lines = vec![
        format!("ascii:   {}", render(&digits, Glyphs::Ascii)),
        format!("unicode: {}", render(&digits, Glyphs::Unicode)),
        format!("latex:   {}", render(&digits, Glyphs::Latex)),
    ];
    // only values that fit a 4-digit year name have primary and shadow forms
    if let Ok(names) = ChronologyCounter::new(value).names() {
        lines.push(format!("primary: {}", names.before_pivot));
        lines.push(format!("shadow:  {}", names.after_pivot));
    }
    lines
}
