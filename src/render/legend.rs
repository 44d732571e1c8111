//! Category names above the chart, each next to a tick in its colour.

use std::io::{self, Write};

use crate::core::{
    color::{Color, Painter},
    constants::TICK,
};

pub fn write_legend<W: Write + ?Sized, P: Painter + ?Sized>(
    out: &mut W,
    categories: &[String],
    colors: &[Option<Color>],
    painter: &P,
) -> io::Result<()> {
    let mut line = String::new();
    for (i, name) in categories.iter().enumerate() {
        painter.paint(
            &mut line,
            colors.get(i).copied().flatten(),
            &format!("{TICK} {name}  "),
        );
    }
    writeln!(out, "{line}\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::Tagged;

    #[test]
    fn legend_entries_are_coloured() {
        let mut out = Vec::new();
        write_legend(
            &mut out,
            &["boys".to_owned(), "girls".to_owned()],
            &[Some(Color::Red), Some(Color::Blue)],
            &Tagged,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<91>▇ boys  </><94>▇ girls  </>\n\n\n"
        );
    }

    #[test]
    fn legend_without_colours() {
        let mut out = Vec::new();
        write_legend(&mut out, &["only".to_owned()], &[None], &Tagged).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "▇ only  \n\n\n");
    }
}
