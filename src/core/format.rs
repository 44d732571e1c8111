//! Value formatting for the text that trails every bar.
//!
//! Templates follow the familiar brace syntax: `"{:<5.2f}"`, `"{:+.1%}"`,
//! `"$ {:,.0f}"`.  At most one replacement field is allowed; literal text
//! around it is kept verbatim and `{{` / `}}` escape braces.
//!
//! Spec grammar inside the field:
//! `[[fill]align][sign][0][width][,|_][.precision][type]`
//! with `type` one of `f F e E g G %` or absent.

use crate::core::error::FormatError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Align {
    Left,
    Right,
    Center,
    /// Padding goes between the sign and the digits.
    AfterSign,
}

impl Align {
    const fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Self::Left),
            '>' => Some(Self::Right),
            '^' => Some(Self::Center),
            '=' => Some(Self::AfterSign),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Sign {
    #[default]
    Minus,
    Plus,
    Space,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Kind {
    /// No type letter: shortest form, always with a fractional digit.
    #[default]
    Repr,
    Fixed { upper: bool },
    Exp { upper: bool },
    General { upper: bool },
    Percent,
}

#[derive(Clone, Debug, PartialEq)]
struct Spec {
    fill: char,
    align: Option<Align>,
    sign: Sign,
    width: usize,
    grouping: Option<char>,
    precision: Option<usize>,
    kind: Kind,
}

impl Default for Spec {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: None,
            sign: Sign::Minus,
            width: 0,
            grouping: None,
            precision: None,
            kind: Kind::Repr,
        }
    }
}

/// Parsed `--format` template.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueFormat {
    prefix: String,
    spec: Option<Spec>,
    suffix: String,
}

impl ValueFormat {
    pub fn parse(template: &str) -> Result<Self, FormatError> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut spec: Option<Spec> = None;
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            let out = if spec.is_some() {
                &mut suffix
            } else {
                &mut prefix
            };
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    out.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    out.push('}');
                }
                '{' => {
                    if spec.is_some() {
                        return Err(FormatError::MultipleFields);
                    }
                    let mut field = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(ch) => field.push(ch),
                            None => return Err(FormatError::Unclosed),
                        }
                    }
                    spec = Some(parse_field(&field)?);
                }
                '}' => return Err(FormatError::StrayBrace),
                _ => out.push(c),
            }
        }

        Ok(Self {
            prefix,
            spec,
            suffix,
        })
    }

    /// Render `value` through the template.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        let mut out = self.prefix.clone();
        if let Some(spec) = &self.spec {
            out.push_str(&spec.apply(value));
        }
        out.push_str(&self.suffix);
        out
    }
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            spec: Some(Spec {
                align: Some(Align::Left),
                width: 5,
                precision: Some(2),
                kind: Kind::Fixed { upper: false },
                ..Spec::default()
            }),
            suffix: String::new(),
        }
    }
}

impl std::str::FromStr for ValueFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// --- Parsing ---

/// Largest width or precision `core::fmt` can honour.
const MAX_FIELD: usize = 65_535;

fn parse_field(field: &str) -> Result<Spec, FormatError> {
    let (name, spec) = field.split_once(':').unwrap_or((field, ""));
    if !(name.is_empty() || name == "0") {
        return Err(FormatError::UnsupportedField(name.to_owned()));
    }
    parse_spec(spec)
}

fn parse_spec(s: &str) -> Result<Spec, FormatError> {
    let invalid = || FormatError::InvalidSpec(s.to_owned());
    let chars: Vec<char> = s.chars().collect();
    let mut spec = Spec::default();
    let mut i = 0;

    match (chars.first(), chars.get(1).copied().and_then(Align::from_char)) {
        (Some(&fill), Some(align)) => {
            spec.fill = fill;
            spec.align = Some(align);
            i = 2;
        }
        (Some(&c), None) => {
            if let Some(align) = Align::from_char(c) {
                spec.align = Some(align);
                i = 1;
            }
        }
        (None, _) => return Ok(spec),
    }

    match chars.get(i) {
        Some('+') => {
            spec.sign = Sign::Plus;
            i += 1;
        }
        Some('-') => i += 1,
        Some(' ') => {
            spec.sign = Sign::Space;
            i += 1;
        }
        _ => {}
    }

    if chars.get(i) == Some(&'0') {
        if spec.align.is_none() {
            spec.fill = '0';
            spec.align = Some(Align::AfterSign);
        }
        i += 1;
    }

    let (width, next) = take_digits(&chars, i);
    spec.width = width.unwrap_or(0);
    if spec.width > MAX_FIELD {
        return Err(invalid());
    }
    i = next;

    if let Some(&g @ (',' | '_')) = chars.get(i) {
        spec.grouping = Some(g);
        i += 1;
    }

    if chars.get(i) == Some(&'.') {
        let (precision, next) = take_digits(&chars, i + 1);
        spec.precision = Some(
            precision
                .filter(|&p| p <= MAX_FIELD)
                .ok_or_else(invalid)?,
        );
        i = next;
    }

    if let Some(&t) = chars.get(i) {
        spec.kind = match t {
            'f' => Kind::Fixed { upper: false },
            'F' => Kind::Fixed { upper: true },
            'e' => Kind::Exp { upper: false },
            'E' => Kind::Exp { upper: true },
            'g' => Kind::General { upper: false },
            'G' => Kind::General { upper: true },
            '%' => Kind::Percent,
            other => return Err(FormatError::UnknownType(other)),
        };
        i += 1;
    }

    if i == chars.len() {
        Ok(spec)
    } else {
        Err(invalid())
    }
}

/// Parse a run of ASCII digits starting at `start`.
fn take_digits(chars: &[char], start: usize) -> (Option<usize>, usize) {
    let mut end = start;
    let mut n: usize = 0;
    while let Some(d) = chars.get(end).and_then(|c| c.to_digit(10)) {
        n = n.saturating_mul(10).saturating_add(d as usize);
        end += 1;
    }
    ((end > start).then_some(n), end)
}

// --- Rendering ---

impl Spec {
    fn apply(&self, value: f64) -> String {
        let negative = value.is_sign_negative() && !value.is_nan();
        let body = self.body(value.abs());
        let sign = if negative {
            "-"
        } else {
            match self.sign {
                Sign::Minus => "",
                Sign::Plus => "+",
                Sign::Space => " ",
            }
        };

        let len = sign.chars().count() + body.chars().count();
        let pad = self.width.saturating_sub(len);
        let fill = |n: usize| self.fill.to_string().repeat(n);

        match self.align.unwrap_or(Align::Right) {
            Align::Left => format!("{sign}{body}{}", fill(pad)),
            Align::Right => format!("{}{sign}{body}", fill(pad)),
            Align::Center => {
                let left = pad / 2;
                format!("{}{sign}{body}{}", fill(left), fill(pad - left))
            }
            Align::AfterSign => format!("{sign}{}{body}", fill(pad)),
        }
    }

    /// Digits for a non-negative magnitude.
    fn body(&self, a: f64) -> String {
        let upper = matches!(
            self.kind,
            Kind::Fixed { upper: true } | Kind::Exp { upper: true } | Kind::General { upper: true }
        );
        if a.is_nan() {
            return if upper { "NAN" } else { "nan" }.to_owned();
        }
        if a.is_infinite() {
            return if upper { "INF" } else { "inf" }.to_owned();
        }

        let digits = match self.kind {
            Kind::Fixed { .. } => format!("{a:.p$}", p = self.precision.unwrap_or(6)),
            Kind::Percent => {
                format!("{:.p$}%", a * 100.0, p = self.precision.unwrap_or(6))
            }
            Kind::Exp { upper } => exponent(a, self.precision.unwrap_or(6), upper),
            Kind::General { upper } => general(a, self.precision.unwrap_or(6), upper, false),
            Kind::Repr => match self.precision {
                Some(p) => general(a, p, false, true),
                None => shortest(a),
            },
        };

        match self.grouping {
            Some(sep) => group_thousands(&digits, sep),
            None => digits,
        }
    }
}

/// Decimal exponent Rust picks for `a` at `p` fractional mantissa digits.
fn exponent_of(a: f64, p: usize) -> i32 {
    let s = format!("{a:.p$e}");
    s.split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0)
}

/// `1.23e+04` style: explicit exponent sign, at least two exponent digits.
fn exponent(a: f64, p: usize, upper: bool) -> String {
    let s = format!("{a:.p$e}");
    let (mantissa, exp) = s.split_once('e').unwrap_or((s.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    format!(
        "{mantissa}{}{}{:02}",
        if upper { 'E' } else { 'e' },
        if exp < 0 { '-' } else { '+' },
        exp.unsigned_abs()
    )
}

/// Shortest round-trip digits; exponent form below `1e-4` and from `1e16` up.
fn shortest(a: f64) -> String {
    let sci = format!("{a:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    if a != 0.0 && !(-4..16).contains(&exp) {
        return format!(
            "{mantissa}e{}{:02}",
            if exp < 0 { '-' } else { '+' },
            exp.unsigned_abs()
        );
    }
    let mut s = a.to_string();
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}

/// `g` presentation: `p` significant digits, trailing zeros removed.
fn general(a: f64, p: usize, upper: bool, keep_point: bool) -> String {
    let p = p.max(1);
    let exp = if a == 0.0 { 0 } else { exponent_of(a, p - 1) };
    let sig = i32::try_from(p).unwrap_or(i32::MAX);

    if (-4..sig).contains(&exp) {
        let decimals = usize::try_from(sig - 1 - exp).unwrap_or(0);
        let mut s = strip_zeros(&format!("{a:.decimals$}")).to_owned();
        if keep_point && !s.contains('.') {
            s.push_str(".0");
        }
        s
    } else {
        let s = exponent(a, p - 1, upper);
        let split = s.find(['e', 'E']).unwrap_or(s.len());
        format!("{}{}", strip_zeros(&s[..split]), &s[split..])
    }
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Insert `sep` every three digits of the leading integer part.
fn group_thousands(s: &str, sep: char) -> String {
    let int_len = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let (int, rest) = s.split_at(int_len);
    let mut out = String::with_capacity(s.len() + int_len / 3);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int_len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(template: &str, v: f64) -> String {
        ValueFormat::parse(template).unwrap().format(v)
    }

    #[test]
    fn default_matches_left_aligned_two_decimals() {
        let d = ValueFormat::default();
        assert_eq!(d, ValueFormat::parse("{:<5.2f}").unwrap());
        assert_eq!(d.format(20.5), "20.50");
        assert_eq!(d.format(0.0), "0.00 ");
        assert_eq!(d.format(100.0), "100.00");
    }

    #[test]
    fn fixed_alignment_and_fill() {
        assert_eq!(fmt("{:>8.1f}", 12.34), "    12.3");
        assert_eq!(fmt("{:*^9.1f}", 1.0), "***1.0***");
        assert_eq!(fmt("{:08.2f}", -3.5), "-0003.50");
        assert_eq!(fmt("{:6.1f}", 2.0), "   2.0");
    }

    #[test]
    fn sign_options() {
        assert_eq!(fmt("{:+.1f}", 3.0), "+3.0");
        assert_eq!(fmt("{: .1f}", 3.0), " 3.0");
        assert_eq!(fmt("{:+.1f}", -3.0), "-3.0");
        assert_eq!(fmt("{:.2f}", -0.001), "-0.00");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(fmt("{:,.0f}", 1_234_567.0), "1,234,567");
        assert_eq!(fmt("{:_.2f}", 1234.5), "1_234.50");
        assert_eq!(fmt("{:,.0f}", 999.0), "999");
    }

    #[test]
    fn exponent_and_percent() {
        assert_eq!(fmt("{:.2e}", 12345.0), "1.23e+04");
        assert_eq!(fmt("{:.1E}", 0.00012), "1.2E-04");
        assert_eq!(fmt("{:.1%}", 0.25), "25.0%");
    }

    #[test]
    fn general_switches_notation() {
        assert_eq!(fmt("{:g}", 0.0001), "0.0001");
        assert_eq!(fmt("{:g}", 0.00001), "1e-05");
        assert_eq!(fmt("{:g}", 1_500_000.0), "1.5e+06");
        assert_eq!(fmt("{:g}", 20.5), "20.5");
        assert_eq!(fmt("{:g}", 0.0), "0");
    }

    #[test]
    fn bare_field_keeps_a_fraction() {
        assert_eq!(fmt("{}", 1.0), "1.0");
        assert_eq!(fmt("{}", 2.25), "2.25");
        assert_eq!(fmt("{:.2}", 1.0), "1.0");
        assert_eq!(fmt("{0}", 3.0), "3.0");
    }

    #[test]
    fn bare_field_uses_exponent_at_the_extremes() {
        assert_eq!(fmt("{}", 1e20), "1e+20");
        assert_eq!(fmt("{}", 1e16), "1e+16");
        assert_eq!(fmt("{}", 1e15), "1000000000000000.0");
        assert_eq!(fmt("{}", 0.0001), "0.0001");
        assert_eq!(fmt("{}", 0.00001), "1e-05");
        assert_eq!(fmt("{}", -1.5e-7), "-1.5e-07");
        assert_eq!(fmt("{}", 0.0), "0.0");
    }

    #[test]
    fn literal_text_and_escapes() {
        assert_eq!(fmt("$ {:.0f}", 3.0), "$ 3");
        assert_eq!(fmt("{{{:.0f}}}", 7.0), "{7}");
        assert_eq!(fmt("n/a", 7.0), "n/a");
    }

    #[test]
    fn non_finite() {
        assert_eq!(fmt("{:.2f}", f64::INFINITY), "inf");
        assert_eq!(fmt("{:.2F}", f64::NAN), "NAN");
    }

    #[test]
    fn rejects_malformed_templates() {
        assert_eq!(ValueFormat::parse("{:q}"), Err(FormatError::UnknownType('q')));
        assert_eq!(ValueFormat::parse("{} {}"), Err(FormatError::MultipleFields));
        assert_eq!(ValueFormat::parse("{:.2"), Err(FormatError::Unclosed));
        assert_eq!(ValueFormat::parse("a}b"), Err(FormatError::StrayBrace));
        assert!(matches!(
            ValueFormat::parse("{:.f}"),
            Err(FormatError::InvalidSpec(_))
        ));
        assert!(matches!(
            ValueFormat::parse("{x}"),
            Err(FormatError::UnsupportedField(_))
        ));
        assert!(matches!(
            ValueFormat::parse("{:99999999999999999999999}"),
            Err(FormatError::InvalidSpec(_))
        ));
        assert!(matches!(
            ValueFormat::parse("{:.100000f}"),
            Err(FormatError::InvalidSpec(_))
        ));
    }

    #[test]
    fn largest_width_and_precision_still_render() {
        assert_eq!(fmt("{:65535.0f}", 1.0).len(), 65_535);
        assert!(fmt("{:.65535f}", 1.0).starts_with("1.000"));
    }
}
