//! Unit expression parser
//!
//! Grammar:
//!
//! ```text
//! expr   := power (('*' | '/' | 'per' | <juxtaposition>) power)*
//! power  := factor (('^' | '**') '-'? int)?  |  ident int      (e.g. "m2")
//! factor := ident | number | '(' expr ')'
//! ```
//!
//! Identifiers are resolved through a caller-supplied lookup so the parser
//! stays independent of the unit table.

use smartconv_application::ResolveError;
use smartconv_domain::{Dimension, Unit};
use std::fmt;

/// Deepest parenthesis nesting accepted in one expression
const MAX_NESTING: usize = 32;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(String),
    Number(f64),
    Mul,
    Div,
    Pow,
    Minus,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(s) => write!(f, "{}", s),
            Token::Number(n) => write!(f, "{}", n),
            Token::Mul => write!(f, "*"),
            Token::Div => write!(f, "/"),
            Token::Pow => write!(f, "^"),
            Token::Minus => write!(f, "-"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

#[derive(Debug, Clone)]
struct Lexed {
    token: Token,
    /// Whitespace precedes this token
    spaced: bool,
}

fn is_ident_char(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '°' || c == '%'
}

fn tokenize(input: &str) -> Result<Vec<Lexed>, ResolveError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();
    let mut spaced = false;

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            spaced = true;
            chars.next();
            continue;
        }

        let token = if is_ident_char(c) {
            let mut end = start;
            while let Some(&(i, c)) = chars.peek() {
                if !is_ident_char(c) {
                    break;
                }
                end = i + c.len_utf8();
                chars.next();
            }
            match &input[start..end] {
                "per" => Token::Div,
                ident => Token::Ident(ident.to_string()),
            }
        } else if c.is_ascii_digit() || c == '.' {
            let mut end = start;
            while let Some(&(i, c)) = chars.peek() {
                if !(c.is_ascii_digit() || c == '.') {
                    break;
                }
                end = i + 1;
                chars.next();
            }
            let literal = &input[start..end];
            let number = literal
                .parse::<f64>()
                .map_err(|_| ResolveError::Syntax(format!("invalid number '{}'", literal)))?;
            Token::Number(number)
        } else {
            chars.next();
            match c {
                '*' => {
                    if chars.peek().is_some_and(|&(_, next)| next == '*') {
                        chars.next();
                        Token::Pow
                    } else {
                        Token::Mul
                    }
                }
                '·' | '×' => Token::Mul,
                '/' => Token::Div,
                '^' => Token::Pow,
                '-' => Token::Minus,
                '(' => Token::LParen,
                ')' => Token::RParen,
                other => {
                    return Err(ResolveError::Syntax(format!(
                        "unexpected character '{}'",
                        other
                    )));
                }
            }
        };

        tokens.push(Lexed { token, spaced });
        spaced = false;
    }

    Ok(tokens)
}

/// Parse `input` into a [`Unit`], resolving identifiers with `lookup`.
pub fn parse_expression<F>(input: &str, lookup: F) -> Result<Unit, ResolveError>
where
    F: Fn(&str) -> Option<Unit>,
{
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ResolveError::Syntax("empty unit expression".to_string()));
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        lookup,
        compound: false,
        offset_atoms: Vec::new(),
        depth: 0,
    };

    let unit = parser.parse_product()?;
    if let Some(extra) = parser.peek() {
        return Err(ResolveError::Syntax(format!("unexpected '{}'", extra)));
    }

    if parser.compound
        && let Some(name) = parser.offset_atoms.first()
    {
        return Err(ResolveError::OffsetUnitInCompound(name.clone()));
    }

    Ok(unit)
}

struct Parser<F> {
    tokens: Vec<Lexed>,
    pos: usize,
    lookup: F,
    /// Any operator or exponent was applied
    compound: bool,
    offset_atoms: Vec<String>,
    /// Open parentheses enclosing the current position
    depth: usize,
}

impl<F> Parser<F>
where
    F: Fn(&str) -> Option<Unit>,
{
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|l| &l.token)
    }

    fn peek_lexed(&self) -> Option<&Lexed> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|l| l.token.clone());
        self.pos += 1;
        token
    }

    fn parse_product(&mut self) -> Result<Unit, ResolveError> {
        let mut acc = self.parse_power()?;

        loop {
            match self.peek() {
                Some(Token::Mul) => {
                    self.advance();
                    let rhs = self.parse_power()?;
                    acc = acc.multiply(&rhs)?;
                }
                Some(Token::Div) => {
                    self.advance();
                    let rhs = self.parse_power()?;
                    acc = acc.divide(&rhs)?;
                }
                Some(Token::Ident(_)) | Some(Token::Number(_)) | Some(Token::LParen) => {
                    let rhs = self.parse_power()?;
                    acc = acc.multiply(&rhs)?;
                }
                _ => break,
            }
            self.compound = true;
        }

        Ok(acc)
    }

    fn parse_power(&mut self) -> Result<Unit, ResolveError> {
        let is_ident = matches!(self.peek(), Some(Token::Ident(_)));
        let base = self.parse_factor()?;

        if matches!(self.peek(), Some(Token::Pow)) {
            self.advance();
            let exponent = self.parse_exponent()?;
            self.compound = true;
            return Ok(base.powi(exponent)?);
        }

        // "m2", "cm3": an integer glued to an identifier is an exponent
        if is_ident
            && let Some(Lexed {
                token: Token::Number(n),
                spaced: false,
            }) = self.peek_lexed()
        {
            let exponent = integral(*n)?;
            self.advance();
            self.compound = true;
            return Ok(base.powi(exponent)?);
        }

        Ok(base)
    }

    fn parse_exponent(&mut self) -> Result<i32, ResolveError> {
        let negative = if matches!(self.peek(), Some(Token::Minus)) {
            self.advance();
            true
        } else {
            false
        };

        match self.advance() {
            Some(Token::Number(n)) => {
                let exponent = integral(n)?;
                Ok(if negative { -exponent } else { exponent })
            }
            _ => Err(ResolveError::Syntax(
                "expected an integer exponent".to_string(),
            )),
        }
    }

    fn parse_factor(&mut self) -> Result<Unit, ResolveError> {
        match self.advance() {
            Some(Token::Ident(name)) => {
                let unit = (self.lookup)(&name).ok_or(ResolveError::UnknownUnit(name.clone()))?;
                if unit.is_offset() {
                    self.offset_atoms.push(name);
                }
                Ok(unit)
            }
            Some(Token::Number(n)) => {
                if n <= 0.0 {
                    return Err(ResolveError::Syntax(
                        "numeric factor must be positive".to_string(),
                    ));
                }
                Ok(Unit::new("", n, Dimension::dimensionless()))
            }
            Some(Token::LParen) => {
                if self.depth >= MAX_NESTING {
                    return Err(ResolveError::Syntax(
                        "expression nested too deeply".to_string(),
                    ));
                }
                self.depth += 1;
                let inner = self.parse_product();
                self.depth -= 1;
                let inner = inner?;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(ResolveError::Syntax(
                        "missing closing parenthesis".to_string(),
                    )),
                }
            }
            Some(other) => Err(ResolveError::Syntax(format!(
                "expected a unit, found '{}'",
                other
            ))),
            None => Err(ResolveError::Syntax(
                "expression ends unexpectedly".to_string(),
            )),
        }
    }
}

fn integral(n: f64) -> Result<i32, ResolveError> {
    if n.fract() == 0.0 && n.abs() <= 64.0 {
        Ok(n as i32)
    } else {
        Err(ResolveError::Syntax(format!(
            "exponent must be a small integer, got {}",
            n
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartconv_domain::BaseDimension;

    fn lookup(name: &str) -> Option<Unit> {
        let length = Dimension::base(BaseDimension::Length);
        let time = Dimension::base(BaseDimension::Time);
        match name {
            "m" => Some(Unit::new("m", 1.0, length)),
            "km" => Some(Unit::new("km", 1000.0, length)),
            "s" => Some(Unit::new("s", 1.0, time)),
            "h" => Some(Unit::new("h", 3600.0, time)),
            "degC" => Some(
                Unit::new("degC", 1.0, Dimension::base(BaseDimension::Temperature))
                    .with_offset(273.15),
            ),
            _ => None,
        }
    }

    fn speed() -> Dimension {
        Dimension::base(BaseDimension::Length)
            .checked_div(Dimension::base(BaseDimension::Time))
            .unwrap()
    }

    #[test]
    fn test_single_identifier() {
        let unit = parse_expression("km", lookup).unwrap();
        assert_eq!(unit.scale(), 1000.0);
        assert_eq!(unit.dimension(), Dimension::base(BaseDimension::Length));
    }

    #[test]
    fn test_division_and_per() {
        let slash = parse_expression("km/h", lookup).unwrap();
        let per = parse_expression("km per h", lookup).unwrap();
        assert_eq!(slash.dimension(), speed());
        assert!((slash.scale() - 1000.0 / 3600.0).abs() < 1e-12);
        assert_eq!(slash, per);
    }

    #[test]
    fn test_powers() {
        for expr in ["m^2", "m**2", "m2"] {
            let unit = parse_expression(expr, lookup).unwrap();
            assert_eq!(
                unit.dimension(),
                Dimension::base(BaseDimension::Length).checked_powi(2).unwrap()
            );
        }
        let unit = parse_expression("s^-1", lookup).unwrap();
        assert_eq!(unit.dimension().exponent(BaseDimension::Time), -1);
    }

    #[test]
    fn test_precedence_and_parentheses() {
        let accel = parse_expression("m/s**2", lookup).unwrap();
        assert_eq!(accel.dimension().exponent(BaseDimension::Time), -2);

        let grouped = parse_expression("m/(s*s)", lookup).unwrap();
        assert_eq!(grouped.dimension(), accel.dimension());

        let implicit = parse_expression("m s", lookup).unwrap();
        assert_eq!(implicit.dimension().exponent(BaseDimension::Time), 1);
    }

    #[test]
    fn test_numeric_factor() {
        let unit = parse_expression("1/s", lookup).unwrap();
        assert_eq!(unit.dimension().exponent(BaseDimension::Time), -1);
        assert!(parse_expression("0 m", lookup).is_err());
    }

    #[test]
    fn test_offset_unit_alone_keeps_offset() {
        let unit = parse_expression("degC", lookup).unwrap();
        assert_eq!(unit.offset(), 273.15);
        let unit = parse_expression("(degC)", lookup).unwrap();
        assert_eq!(unit.offset(), 273.15);
    }

    #[test]
    fn test_offset_unit_in_compound_rejected() {
        assert_eq!(
            parse_expression("degC/s", lookup),
            Err(ResolveError::OffsetUnitInCompound("degC".to_string()))
        );
    }

    #[test]
    fn test_syntax_errors() {
        assert!(matches!(parse_expression("", lookup), Err(ResolveError::Syntax(_))));
        assert!(matches!(parse_expression("m/", lookup), Err(ResolveError::Syntax(_))));
        assert!(matches!(parse_expression("(m", lookup), Err(ResolveError::Syntax(_))));
        assert!(matches!(parse_expression("m)", lookup), Err(ResolveError::Syntax(_))));
        assert!(matches!(parse_expression("m^x", lookup), Err(ResolveError::Syntax(_))));
        assert!(matches!(parse_expression("m^1.5", lookup), Err(ResolveError::Syntax(_))));
        assert!(matches!(parse_expression("m$", lookup), Err(ResolveError::Syntax(_))));
    }

    #[test]
    fn test_unknown_identifier() {
        assert_eq!(
            parse_expression("m/furlong", lookup),
            Err(ResolveError::UnknownUnit("furlong".to_string()))
        );
    }

    #[test]
    fn test_exponent_overflow_is_a_syntax_error() {
        assert!(matches!(
            parse_expression("m^64*m^64", lookup),
            Err(ResolveError::Syntax(_))
        ));
        assert!(matches!(
            parse_expression("(m^64)^64", lookup),
            Err(ResolveError::Syntax(_))
        ));
        assert!(matches!(
            parse_expression("(km^60)^2", lookup),
            Err(ResolveError::Syntax(_))
        ));
        assert!(parse_expression("m^64/m^63", lookup).is_ok());
    }

    #[test]
    fn test_nesting_limit() {
        let shallow = format!("{}m{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
        assert!(parse_expression(&shallow, lookup).is_ok());

        let deep = format!("{}m{}", "(".repeat(MAX_NESTING + 1), ")".repeat(MAX_NESTING + 1));
        assert_eq!(
            parse_expression(&deep, lookup),
            Err(ResolveError::Syntax("expression nested too deeply".to_string()))
        );

        let hostile = format!("{}m{}", "(".repeat(100_000), ")".repeat(100_000));
        assert!(matches!(
            parse_expression(&hostile, lookup),
            Err(ResolveError::Syntax(_))
        ));
    }
}
