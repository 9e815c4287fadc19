use nom::{
    Parser,
    character::complete::{char, i64 as integer, space0},
    combinator::all_consuming,
    number::complete::double,
    sequence::{delimited, separated_pair},
};

use crate::error::{Result, TuningError};
use crate::utils::cents_to_ratio;

/// How a scale degree token is read, decided purely by its characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DegreeKind {
    Cents,
    Ratio,
    Decimal,
}

impl DegreeKind {
    pub fn classify(token: &str) -> Self {
        if token.contains('.') {
            DegreeKind::Cents
        } else if token.contains('/') {
            DegreeKind::Ratio
        } else {
            DegreeKind::Decimal
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Degree {
    Cents(f64),
    Ratio { numerator: i64, denominator: i64 },
    Decimal(f64),
}

fn parse_cents(input: &str) -> nom::IResult<&str, f64> {
    all_consuming(double).parse(input)
}

fn parse_ratio(input: &str) -> nom::IResult<&str, (i64, i64)> {
    all_consuming(separated_pair(
        delimited(space0, integer, space0),
        char('/'),
        delimited(space0, integer, space0),
    ))
    .parse(input)
}

fn parse_decimal(input: &str) -> nom::IResult<&str, f64> {
    all_consuming(double).parse(input)
}

impl Degree {
    pub fn parse(token: &str) -> Result<Self> {
        let body = token.trim();
        let degree = match DegreeKind::classify(body) {
            DegreeKind::Cents => match parse_cents(body) {
                Ok((_, cents)) => Degree::Cents(cents),
                Err(_) => {
                    return Err(TuningError::InvalidCents {
                        token: token.to_string(),
                    });
                }
            },
            DegreeKind::Ratio => match parse_ratio(body) {
                Ok((_, (_, 0))) => {
                    return Err(TuningError::ZeroDenominator {
                        token: token.to_string(),
                    });
                }
                Ok((_, (numerator, denominator))) => Degree::Ratio {
                    numerator,
                    denominator,
                },
                Err(_) => {
                    return Err(TuningError::InvalidRatio {
                        token: token.to_string(),
                    });
                }
            },
            DegreeKind::Decimal => match parse_decimal(body) {
                Ok((_, value)) => Degree::Decimal(value),
                Err(_) => {
                    return Err(TuningError::InvalidDecimal {
                        token: token.to_string(),
                    });
                }
            },
        };
        log::trace!("degree {:?} -> {:?}", token, degree);
        Ok(degree)
    }

    pub fn kind(&self) -> DegreeKind {
        match self {
            Degree::Cents(_) => DegreeKind::Cents,
            Degree::Ratio { .. } => DegreeKind::Ratio,
            Degree::Decimal(_) => DegreeKind::Decimal,
        }
    }

    /// Linear ratio of this degree. `span` is the number of cents treated as
    /// one doubling; [`normalize`] uses `100 * scale.len()`.
    pub fn ratio(&self, span: f64) -> f64 {
        match *self {
            Degree::Cents(cents) => cents_to_ratio(cents, span),
            Degree::Ratio {
                numerator,
                denominator,
            } => numerator as f64 / denominator as f64,
            Degree::Decimal(value) => value,
        }
    }
}

pub fn cents_span(len: usize) -> f64 {
    (len * 100) as f64
}

/// Cents are scaled by the degree count (`100 * len` cents per doubling), so
/// only a 12 degree scale reads cents the conventional 1200-per-octave way.
pub fn normalize<S: AsRef<str>>(scale: &[S]) -> Result<Vec<f64>> {
    let span = cents_span(scale.len());
    scale
        .iter()
        .map(|token| Degree::parse(token.as_ref()).map(|d| d.ratio(span)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(DegreeKind::classify("375."), DegreeKind::Cents);
        assert_eq!(DegreeKind::classify("233.9850002884625"), DegreeKind::Cents);
        assert_eq!(DegreeKind::classify("5/4"), DegreeKind::Ratio);
        assert_eq!(DegreeKind::classify("2"), DegreeKind::Decimal);
        // the dot wins over the slash
        assert_eq!(DegreeKind::classify("3/2.0"), DegreeKind::Cents);
        // a dotted value is always cents, never a decimal ratio
        assert_eq!(DegreeKind::classify("1.5"), DegreeKind::Cents);
    }

    #[test]
    fn test_parse_each_kind() {
        assert_eq!(Degree::parse("375.").unwrap(), Degree::Cents(375.0));
        assert_eq!(
            Degree::parse("3/2").unwrap(),
            Degree::Ratio {
                numerator: 3,
                denominator: 2
            }
        );
        assert_eq!(Degree::parse("2").unwrap(), Degree::Decimal(2.0));
        assert_eq!(Degree::parse(" 9/8 ").unwrap().kind(), DegreeKind::Ratio);
        assert_eq!(
            Degree::parse("3 / 2").unwrap(),
            Degree::Ratio {
                numerator: 3,
                denominator: 2
            }
        );
        assert_eq!(Degree::parse("-50.0").unwrap(), Degree::Cents(-50.0));
    }

    #[test]
    fn test_ratio_exact() {
        assert_eq!(Degree::parse("3/2").unwrap().ratio(400.0), 1.5);
        assert_eq!(Degree::parse("1323/1024").unwrap().ratio(1200.0), 1.2919921875);
    }

    #[test]
    fn test_cents_scale_with_degree_count() {
        let scale = ["100.", "200.", "300.", "400.", "500.", "600."];
        let ratios = normalize(&scale).unwrap();
        assert_eq!(ratios.len(), 6);
        assert!((ratios[5] - 2.0).abs() < 1e-12);
        assert!((ratios[2] - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_mixed_scale() {
        let ratios = normalize(&["5/4", "233.9850002884625", "375.", "2"]).unwrap();
        assert_eq!(ratios[0], 1.25);
        assert!((ratios[1] - 1.5).abs() < 1e-12);
        assert!((ratios[2] - 1.9152065613971474).abs() < 1e-12);
        assert_eq!(ratios[3], 2.0);
    }

    #[test]
    fn test_empty_scale_normalizes_to_nothing() {
        let empty: [&str; 0] = [];
        assert!(normalize(&empty).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(matches!(
            Degree::parse("abc."),
            Err(TuningError::InvalidCents { .. })
        ));
        assert!(matches!(
            Degree::parse("3/x"),
            Err(TuningError::InvalidRatio { .. })
        ));
        assert!(matches!(
            Degree::parse("3/2/1"),
            Err(TuningError::InvalidRatio { .. })
        ));
        assert!(matches!(
            Degree::parse("3/0"),
            Err(TuningError::ZeroDenominator { .. })
        ));
        assert!(matches!(
            Degree::parse("two"),
            Err(TuningError::InvalidDecimal { .. })
        ));
        assert!(matches!(
            Degree::parse(""),
            Err(TuningError::InvalidDecimal { .. })
        ));
    }

    #[test]
    fn test_normalize_propagates_first_error() {
        let result = normalize(&["9/8", "oops", "2/1"]);
        assert!(matches!(result, Err(TuningError::InvalidDecimal { token }) if token == "oops"));
    }
}
