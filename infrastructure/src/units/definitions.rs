//! Built-in unit table
//!
//! Every factor converts one unit into the coherent SI base unit of its
//! dimension (metre, kilogram, second, ampere, kelvin, mole, candela, bit,
//! radian). Offsets are only used by the affine temperature scales.

use smartconv_domain::BaseDimension::{
    Angle, Current, Information, Length, Luminosity, Mass, Substance, Temperature, Time,
};
use smartconv_domain::{BaseDimension, Dimension, Unit};
use std::f64::consts::PI;

/// Which prefix families may be attached to a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefixes {
    None,
    Si,
    /// SI plus binary (`Ki`, `Mi`, ...), for information units
    SiAndBinary,
}

/// A single entry of the unit table
#[derive(Debug, Clone, Copy)]
pub struct UnitDef {
    /// Canonical name, also matched case-insensitively
    pub name: &'static str,
    /// Case-sensitive symbol
    pub symbol: &'static str,
    /// Extra spellings, matched case-insensitively
    pub aliases: &'static [&'static str],
    pub scale: f64,
    pub offset: f64,
    pub dimension: &'static [(BaseDimension, i8)],
    pub prefixes: Prefixes,
}

impl UnitDef {
    pub fn to_unit(&self) -> Unit {
        Unit::new(self.name, self.scale, Dimension::from_pairs(self.dimension)).with_offset(self.offset)
    }
}

const fn def(
    name: &'static str,
    symbol: &'static str,
    aliases: &'static [&'static str],
    scale: f64,
    dimension: &'static [(BaseDimension, i8)],
    prefixes: Prefixes,
) -> UnitDef {
    UnitDef {
        name,
        symbol,
        aliases,
        scale,
        offset: 0.0,
        dimension,
        prefixes,
    }
}

const LENGTH: &[(BaseDimension, i8)] = &[(Length, 1)];
const MASS: &[(BaseDimension, i8)] = &[(Mass, 1)];
const TIME: &[(BaseDimension, i8)] = &[(Time, 1)];
const CURRENT: &[(BaseDimension, i8)] = &[(Current, 1)];
const TEMPERATURE: &[(BaseDimension, i8)] = &[(Temperature, 1)];
const SUBSTANCE: &[(BaseDimension, i8)] = &[(Substance, 1)];
const LUMINOSITY: &[(BaseDimension, i8)] = &[(Luminosity, 1)];
const INFORMATION: &[(BaseDimension, i8)] = &[(Information, 1)];
const ANGLE: &[(BaseDimension, i8)] = &[(Angle, 1)];
const DIMENSIONLESS: &[(BaseDimension, i8)] = &[];
const AREA: &[(BaseDimension, i8)] = &[(Length, 2)];
const VOLUME: &[(BaseDimension, i8)] = &[(Length, 3)];
const SPEED: &[(BaseDimension, i8)] = &[(Length, 1), (Time, -1)];
const FREQUENCY: &[(BaseDimension, i8)] = &[(Time, -1)];
const ANGULAR_SPEED: &[(BaseDimension, i8)] = &[(Angle, 1), (Time, -1)];
const FORCE: &[(BaseDimension, i8)] = &[(Mass, 1), (Length, 1), (Time, -2)];
const ENERGY: &[(BaseDimension, i8)] = &[(Mass, 1), (Length, 2), (Time, -2)];
const POWER: &[(BaseDimension, i8)] = &[(Mass, 1), (Length, 2), (Time, -3)];
const PRESSURE: &[(BaseDimension, i8)] = &[(Mass, 1), (Length, -1), (Time, -2)];
const CHARGE: &[(BaseDimension, i8)] = &[(Current, 1), (Time, 1)];
const VOLTAGE: &[(BaseDimension, i8)] = &[(Mass, 1), (Length, 2), (Time, -3), (Current, -1)];
const RESISTANCE: &[(BaseDimension, i8)] = &[(Mass, 1), (Length, 2), (Time, -3), (Current, -2)];
const CAPACITANCE: &[(BaseDimension, i8)] = &[(Mass, -1), (Length, -2), (Time, 4), (Current, 2)];

const FAHRENHEIT_SCALE: f64 = 5.0 / 9.0;

/// The full unit table.
pub const UNITS: &[UnitDef] = &[
    // Length
    def("meter", "m", &["metre"], 1.0, LENGTH, Prefixes::Si),
    def("inch", "in", &["inches"], 0.0254, LENGTH, Prefixes::None),
    def("foot", "ft", &["feet"], 0.3048, LENGTH, Prefixes::None),
    def("yard", "yd", &[], 0.9144, LENGTH, Prefixes::None),
    def("mile", "mi", &["statute_mile"], 1609.344, LENGTH, Prefixes::None),
    def("nautical_mile", "nmi", &[], 1852.0, LENGTH, Prefixes::None),
    def("angstrom", "Å", &["ångström"], 1e-10, LENGTH, Prefixes::None),
    def("astronomical_unit", "au", &[], 1.495978707e11, LENGTH, Prefixes::None),
    def("light_year", "ly", &["lightyear"], 9.4607304725808e15, LENGTH, Prefixes::None),
    def("parsec", "pc", &[], 3.0856775814913673e16, LENGTH, Prefixes::Si),
    // Mass
    def("gram", "g", &["gramme"], 1e-3, MASS, Prefixes::Si),
    def("tonne", "t", &["metric_ton"], 1000.0, MASS, Prefixes::Si),
    def("pound", "lb", &["lbs"], 0.45359237, MASS, Prefixes::None),
    def("ounce", "oz", &[], 0.028349523125, MASS, Prefixes::None),
    def("stone", "st", &[], 6.35029318, MASS, Prefixes::None),
    def("ton", "ton", &["short_ton"], 907.18474, MASS, Prefixes::None),
    def("long_ton", "long_ton", &[], 1016.0469088, MASS, Prefixes::None),
    def("grain", "gr", &[], 6.479891e-5, MASS, Prefixes::None),
    def("carat", "ct", &[], 2e-4, MASS, Prefixes::None),
    // Time
    def("second", "s", &["sec"], 1.0, TIME, Prefixes::Si),
    def("minute", "min", &[], 60.0, TIME, Prefixes::None),
    def("hour", "h", &["hr"], 3600.0, TIME, Prefixes::None),
    def("day", "d", &[], 86400.0, TIME, Prefixes::None),
    def("week", "wk", &[], 604800.0, TIME, Prefixes::None),
    def("fortnight", "fortnight", &[], 1209600.0, TIME, Prefixes::None),
    def("month", "month", &[], 2629800.0, TIME, Prefixes::None),
    def("year", "yr", &["julian_year"], 31557600.0, TIME, Prefixes::None),
    // Temperature
    def("kelvin", "K", &[], 1.0, TEMPERATURE, Prefixes::Si),
    UnitDef {
        name: "degree_Celsius",
        symbol: "degC",
        aliases: &["celsius", "°C", "degree_celsius", "degrees_celsius", "centigrade"],
        scale: 1.0,
        offset: 273.15,
        dimension: TEMPERATURE,
        prefixes: Prefixes::None,
    },
    UnitDef {
        name: "degree_Fahrenheit",
        symbol: "degF",
        aliases: &["fahrenheit", "°F", "degree_fahrenheit", "degrees_fahrenheit"],
        scale: FAHRENHEIT_SCALE,
        offset: 273.15 - 32.0 * FAHRENHEIT_SCALE,
        dimension: TEMPERATURE,
        prefixes: Prefixes::None,
    },
    def("degree_Rankine", "degR", &["rankine", "°R"], FAHRENHEIT_SCALE, TEMPERATURE, Prefixes::None),
    // Other base units
    def("ampere", "A", &["amp"], 1.0, CURRENT, Prefixes::Si),
    def("mole", "mol", &[], 1.0, SUBSTANCE, Prefixes::Si),
    def("candela", "cd", &[], 1.0, LUMINOSITY, Prefixes::Si),
    // Information
    def("bit", "bit", &[], 1.0, INFORMATION, Prefixes::SiAndBinary),
    def("byte", "B", &["octet"], 8.0, INFORMATION, Prefixes::SiAndBinary),
    // Angle
    def("radian", "rad", &[], 1.0, ANGLE, Prefixes::Si),
    def("degree", "deg", &["°", "arcdeg"], PI / 180.0, ANGLE, Prefixes::None),
    def("arcminute", "arcmin", &["arc_minute"], PI / 10800.0, ANGLE, Prefixes::None),
    def("arcsecond", "arcsec", &["arc_second"], PI / 648000.0, ANGLE, Prefixes::None),
    def("turn", "turn", &["revolution", "rev", "cycle"], 2.0 * PI, ANGLE, Prefixes::None),
    def("gradian", "grad", &["gon"], PI / 200.0, ANGLE, Prefixes::None),
    // Dimensionless
    def("percent", "%", &[], 0.01, DIMENSIONLESS, Prefixes::None),
    def("ppm", "ppm", &[], 1e-6, DIMENSIONLESS, Prefixes::None),
    def("dozen", "dozen", &[], 12.0, DIMENSIONLESS, Prefixes::None),
    // Area
    def("hectare", "ha", &[], 1e4, AREA, Prefixes::None),
    def("acre", "acre", &[], 4046.8564224, AREA, Prefixes::None),
    // Volume
    def("liter", "L", &["l", "litre"], 1e-3, VOLUME, Prefixes::Si),
    def("gallon", "gal", &["us_gallon"], 3.785411784e-3, VOLUME, Prefixes::None),
    def("imperial_gallon", "imperial_gallon", &["uk_gallon"], 4.54609e-3, VOLUME, Prefixes::None),
    def("quart", "qt", &[], 9.46352946e-4, VOLUME, Prefixes::None),
    def("pint", "pt", &[], 4.73176473e-4, VOLUME, Prefixes::None),
    def("cup", "cup", &[], 2.365882365e-4, VOLUME, Prefixes::None),
    def("fluid_ounce", "floz", &["fl_oz"], 2.95735295625e-5, VOLUME, Prefixes::None),
    def("tablespoon", "tbsp", &[], 1.478676478125e-5, VOLUME, Prefixes::None),
    def("teaspoon", "tsp", &[], 4.92892159375e-6, VOLUME, Prefixes::None),
    // Speed and frequency
    def("knot", "kn", &[], 1852.0 / 3600.0, SPEED, Prefixes::None),
    def("mile_per_hour", "mph", &[], 0.44704, SPEED, Prefixes::None),
    def("kilometer_per_hour", "kph", &["kmh"], 1.0 / 3.6, SPEED, Prefixes::None),
    def("hertz", "Hz", &[], 1.0, FREQUENCY, Prefixes::Si),
    def("revolutions_per_minute", "rpm", &[], 2.0 * PI / 60.0, ANGULAR_SPEED, Prefixes::None),
    // Mechanics
    def("newton", "N", &[], 1.0, FORCE, Prefixes::Si),
    def("pound_force", "lbf", &[], 4.4482216152605, FORCE, Prefixes::None),
    def("dyne", "dyn", &[], 1e-5, FORCE, Prefixes::None),
    def("joule", "J", &[], 1.0, ENERGY, Prefixes::Si),
    def("calorie", "cal", &[], 4.184, ENERGY, Prefixes::Si),
    def("watt_hour", "Wh", &[], 3600.0, ENERGY, Prefixes::Si),
    def("electron_volt", "eV", &[], 1.602176634e-19, ENERGY, Prefixes::Si),
    def("british_thermal_unit", "BTU", &["btu", "Btu"], 1055.05585262, ENERGY, Prefixes::None),
    def("erg", "erg", &[], 1e-7, ENERGY, Prefixes::None),
    def("watt", "W", &[], 1.0, POWER, Prefixes::Si),
    def("horsepower", "hp", &[], 745.6998715822702, POWER, Prefixes::None),
    def("pascal", "Pa", &[], 1.0, PRESSURE, Prefixes::Si),
    def("bar", "bar", &[], 1e5, PRESSURE, Prefixes::Si),
    def("atmosphere", "atm", &[], 101325.0, PRESSURE, Prefixes::None),
    def("pound_per_square_inch", "psi", &[], 6894.757293168361, PRESSURE, Prefixes::None),
    def("torr", "Torr", &[], 101325.0 / 760.0, PRESSURE, Prefixes::None),
    def("millimeter_Hg", "mmHg", &["mm_Hg"], 133.322387415, PRESSURE, Prefixes::None),
    // Electromagnetism
    def("coulomb", "C", &[], 1.0, CHARGE, Prefixes::Si),
    def("volt", "V", &[], 1.0, VOLTAGE, Prefixes::Si),
    def("ohm", "Ω", &[], 1.0, RESISTANCE, Prefixes::Si),
    def("farad", "F", &[], 1.0, CAPACITANCE, Prefixes::Si),
];

/// SI prefixes as `(symbol, name, factor)`, longest symbols first.
pub const SI_PREFIXES: &[(&str, &str, f64)] = &[
    ("da", "deca", 1e1),
    ("Q", "quetta", 1e30),
    ("R", "ronna", 1e27),
    ("Y", "yotta", 1e24),
    ("Z", "zetta", 1e21),
    ("E", "exa", 1e18),
    ("P", "peta", 1e15),
    ("T", "tera", 1e12),
    ("G", "giga", 1e9),
    ("M", "mega", 1e6),
    ("k", "kilo", 1e3),
    ("h", "hecto", 1e2),
    ("d", "deci", 1e-1),
    ("c", "centi", 1e-2),
    ("m", "milli", 1e-3),
    ("µ", "micro", 1e-6),
    ("μ", "micro", 1e-6),
    ("u", "micro", 1e-6),
    ("n", "nano", 1e-9),
    ("p", "pico", 1e-12),
    ("f", "femto", 1e-15),
    ("a", "atto", 1e-18),
    ("z", "zepto", 1e-21),
    ("y", "yocto", 1e-24),
    ("r", "ronto", 1e-27),
    ("q", "quecto", 1e-30),
];

/// Binary prefixes as `(symbol, name, factor)`.
pub const BINARY_PREFIXES: &[(&str, &str, f64)] = &[
    ("Ki", "kibi", 1024.0),
    ("Mi", "mebi", 1048576.0),
    ("Gi", "gibi", 1073741824.0),
    ("Ti", "tebi", 1099511627776.0),
    ("Pi", "pebi", 1125899906842624.0),
    ("Ei", "exbi", 1152921504606846976.0),
];
