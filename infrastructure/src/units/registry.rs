//! Built-in unit registry
//!
//! Implements the [`UnitResolver`] port on top of the static table in
//! [`super::definitions`]. Identifiers are looked up in this order:
//!
//! 1. Exact symbol (`m`, `degC`, `Hz`)
//! 2. Name or alias, case-insensitive, then with a plural suffix stripped
//! 3. `square_` / `cubic_` modifiers (`square_feet`, `cu_m`)
//! 4. SI or binary prefix symbol plus a unit symbol (`km`, `µs`, `KiB`)
//! 5. SI or binary prefix name plus a unit name (`kilometers`, `mebibyte`)

use super::definitions::{BINARY_PREFIXES, Prefixes, SI_PREFIXES, UNITS, UnitDef};
use super::parser::parse_expression;
use smartconv_application::{ResolveError, UnitDescriptor, UnitResolver};
use smartconv_domain::Unit;
use std::collections::HashMap;
use tracing::trace;

/// Spelled-out power modifiers accepted in front of a unit.
const POWER_MODIFIERS: &[(&str, i32)] = &[
    ("square_", 2),
    ("sq_", 2),
    ("cubic_", 3),
    ("cu_", 3),
];

/// Aliases this short also act as symbols (`l` for litre, `°` for degree).
const SHORT_ALIAS_CHARS: usize = 2;

/// Unit registry backed by the built-in table.
#[derive(Debug, Clone)]
pub struct BuiltinUnitRegistry {
    /// Case-sensitive symbols
    symbols: HashMap<&'static str, &'static UnitDef>,
    /// Lowercased names and aliases
    names: HashMap<String, &'static UnitDef>,
}

impl Default for BuiltinUnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinUnitRegistry {
    pub fn new() -> Self {
        let mut symbols = HashMap::new();
        let mut names = HashMap::new();

        for def in UNITS {
            symbols.insert(def.symbol, def);
            names.insert(def.name.to_lowercase(), def);
            for alias in def.aliases {
                names.entry(alias.to_lowercase()).or_insert(def);
            }
        }

        for def in UNITS {
            for alias in def.aliases {
                if alias.chars().count() <= SHORT_ALIAS_CHARS {
                    symbols.entry(*alias).or_insert(def);
                }
            }
        }

        Self { symbols, names }
    }

    /// Number of base entries in the table (prefixed forms not counted).
    pub fn len(&self) -> usize {
        UNITS.len()
    }

    pub fn is_empty(&self) -> bool {
        UNITS.is_empty()
    }

    /// Resolve a single identifier such as `km` or `square_feet`.
    fn lookup_atom(&self, token: &str) -> Option<Unit> {
        if let Some(def) = self.lookup_plain(token) {
            return Some(def.to_unit().with_name(token));
        }

        // One modifier per identifier: `square_square_m` is unknown
        for (modifier, power) in POWER_MODIFIERS {
            if let Some(head) = token.get(..modifier.len())
                && head.eq_ignore_ascii_case(modifier)
            {
                let rest = &token[modifier.len()..];
                let unit = self
                    .lookup_plain(rest)
                    .map(UnitDef::to_unit)
                    .or_else(|| self.lookup_prefixed(rest))?;
                return Some(unit.powi(*power).ok()?.with_name(token));
            }
        }

        self.lookup_prefixed(token)
    }

    /// Symbol, then name or alias, then singular form of a name.
    fn lookup_plain(&self, token: &str) -> Option<&'static UnitDef> {
        if let Some(&def) = self.symbols.get(token) {
            return Some(def);
        }
        self.lookup_name(&token.to_lowercase())
    }

    fn lookup_name(&self, lower: &str) -> Option<&'static UnitDef> {
        if let Some(&def) = self.names.get(lower) {
            return Some(def);
        }
        singular_forms(lower).find_map(|singular| self.names.get(singular).copied())
    }

    fn lookup_prefixed(&self, token: &str) -> Option<Unit> {
        for (symbol, _, factor) in SI_PREFIXES {
            if let Some(rest) = token.strip_prefix(symbol)
                && let Some(def) = self.symbols.get(rest)
                && def.prefixes != Prefixes::None
            {
                trace!("'{}' = {} * {}", token, symbol, def.name);
                return Some(scaled(def, *factor, token));
            }
        }

        for (symbol, _, factor) in BINARY_PREFIXES {
            if let Some(rest) = token.strip_prefix(symbol)
                && let Some(def) = self.symbols.get(rest)
                && def.prefixes == Prefixes::SiAndBinary
            {
                return Some(scaled(def, *factor, token));
            }
        }

        let lower = token.to_lowercase();
        let named = SI_PREFIXES
            .iter()
            .map(|(_, name, factor)| (name, factor, Prefixes::Si))
            .chain(
                BINARY_PREFIXES
                    .iter()
                    .map(|(_, name, factor)| (name, factor, Prefixes::SiAndBinary)),
            );
        for (name, factor, required) in named {
            if let Some(rest) = lower.strip_prefix(name)
                && let Some(def) = self.lookup_name(rest)
                && accepts(def.prefixes, required)
            {
                return Some(scaled(def, *factor, token));
            }
        }

        None
    }
}

fn accepts(allowed: Prefixes, required: Prefixes) -> bool {
    match required {
        Prefixes::None => true,
        Prefixes::Si => allowed != Prefixes::None,
        Prefixes::SiAndBinary => allowed == Prefixes::SiAndBinary,
    }
}

fn scaled(def: &UnitDef, factor: f64, name: &str) -> Unit {
    Unit::new(name, def.scale * factor, def.to_unit().dimension())
}

/// `inches` -> `inch`, `meters` -> `meter`; never shortens below two characters.
fn singular_forms(word: &str) -> impl Iterator<Item = &str> {
    ["es", "s"]
        .into_iter()
        .filter_map(move |suffix| word.strip_suffix(suffix))
        .filter(|stem| stem.chars().count() >= 2)
}

impl UnitResolver for BuiltinUnitRegistry {
    fn resolve(&self, expression: &str) -> Result<Unit, ResolveError> {
        let expression = expression.trim();

        // "degree Celsius", "square feet", "light years"
        if expression.contains(char::is_whitespace)
            && expression
                .chars()
                .all(|c| c.is_alphabetic() || c.is_whitespace() || c == '_')
        {
            let joined = expression.split_whitespace().collect::<Vec<_>>().join("_");
            if let Some(unit) = self.lookup_atom(&joined) {
                return Ok(unit.with_name(expression));
            }
        }

        let unit = parse_expression(expression, |token| self.lookup_atom(token))?;
        Ok(unit.with_name(expression))
    }

    fn catalog(&self) -> Vec<UnitDescriptor> {
        UNITS
            .iter()
            .map(|def| UnitDescriptor {
                name: def.name.to_string(),
                symbol: def.symbol.to_string(),
                dimension: def.to_unit().dimension(),
                prefixable: def.prefixes != Prefixes::None,
            })
            .collect()
    }
}
