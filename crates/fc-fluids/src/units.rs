//! Unit-aware input parsing for the form surfaces.
//!
//! Values are entered as free text (`"25C"`, `"1 bar"`, `"50%"`) and parsed
//! to canonical SI base units. The raw text stays in the widget; only the
//! canonical value flows into a computation.

use std::fmt;

use crate::params::ParamKind;

/// Dimension family for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Temperature (canonical: Kelvin)
    Temperature,
    /// Absolute pressure (canonical: Pa)
    Pressure,
    /// Density (canonical: kg/m³)
    Density,
    /// Specific enthalpy (canonical: J/kg)
    SpecificEnthalpy,
    /// Specific entropy (canonical: J/(kg·K))
    SpecificEntropy,
    /// Vapor quality (canonical: 0-1)
    Quality,
}

impl Quantity {
    /// Which quantity family a state parameter kind is entered in.
    pub fn for_param(kind: ParamKind) -> Self {
        match kind {
            ParamKind::Pressure => Self::Pressure,
            ParamKind::Temperature => Self::Temperature,
            ParamKind::Enthalpy => Self::SpecificEnthalpy,
            ParamKind::Entropy => Self::SpecificEntropy,
            ParamKind::Density => Self::Density,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Pressure"),
            Self::Density => write!(f, "Density"),
            Self::SpecificEnthalpy => write!(f, "Specific Enthalpy"),
            Self::SpecificEntropy => write!(f, "Specific Entropy"),
            Self::Quality => write!(f, "Quality"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    ParseError(String),
    /// Unit not recognized for this quantity
    UnknownUnit { unit: String, quantity: String },
    /// Value out of physical range (e.g., negative absolute temperature)
    OutOfRange { value: f64, reason: String },
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
            Self::UnknownUnit { unit, quantity } => {
                write!(f, "Unknown unit '{unit}' for {quantity}")
            }
            Self::OutOfRange { value, reason } => {
                write!(f, "Value {value} out of range: {reason}")
            }
        }
    }
}

impl std::error::Error for UnitError {}

/// Parse a quantity value from user input text into canonical SI units.
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let trimmed = raw_text.trim();

    match quantity {
        Quantity::Temperature => parse_temperature(trimmed),
        Quantity::Pressure => parse_pressure(trimmed),
        Quantity::Density => parse_density(trimmed),
        Quantity::SpecificEnthalpy => parse_specific_enthalpy(trimmed),
        Quantity::SpecificEntropy => parse_specific_entropy(trimmed),
        Quantity::Quality => parse_quality(trimmed),
    }
}

/// Parse temperature, return Kelvin. Bare numbers are taken as Kelvin.
fn parse_temperature(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let kelvin = match unit.to_lowercase().as_str() {
        "" | "k" | "kelvin" => value,
        "c" | "°c" | "celsius" => value + 273.15,
        "f" | "°f" | "fahrenheit" => (value + 459.67) * 5.0 / 9.0,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: "Temperature".to_string(),
            });
        }
    };

    if kelvin <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: kelvin,
            reason: "Absolute temperature must be > 0 K".to_string(),
        });
    }

    Ok(kelvin)
}

/// Parse absolute pressure, return Pa.
fn parse_pressure(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let pa = match unit.to_lowercase().as_str() {
        "" | "pa" | "pascal" => value,
        "kpa" => value * 1e3,
        "mpa" => value * 1e6,
        "bar" => value * 1e5,
        "atm" => value * 101_325.0,
        "psia" => value * 6_894.76,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: "Pressure".to_string(),
            });
        }
    };

    if pa < 0.0 {
        return Err(UnitError::OutOfRange {
            value: pa,
            reason: "Absolute pressure cannot be negative".to_string(),
        });
    }

    Ok(pa)
}

/// Parse density, return kg/m³.
fn parse_density(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let kg_m3 = match unit.to_lowercase().as_str() {
        "" | "kg/m^3" | "kg/m³" | "kg/m3" => value,
        "g/cm^3" | "g/cm³" | "g/cm3" => value * 1e3,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: "Density".to_string(),
            });
        }
    };

    Ok(kg_m3)
}

/// Parse specific enthalpy, return J/kg.
fn parse_specific_enthalpy(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    match unit.to_lowercase().as_str() {
        "" | "j/kg" => Ok(value),
        "kj/kg" => Ok(value * 1e3),
        "mj/kg" => Ok(value * 1e6),
        _ => Err(UnitError::UnknownUnit {
            unit,
            quantity: "Specific Enthalpy".to_string(),
        }),
    }
}

/// Parse specific entropy, return J/(kg·K).
fn parse_specific_entropy(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    match unit.to_lowercase().as_str() {
        "" | "j/(kg·k)" | "j/(kg k)" | "j/(kg*k)" | "j/kgk" => Ok(value),
        "kj/(kg·k)" | "kj/(kg k)" | "kj/(kg*k)" | "kj/kgk" => Ok(value * 1e3),
        _ => Err(UnitError::UnknownUnit {
            unit,
            quantity: "Specific Entropy".to_string(),
        }),
    }
}

/// Parse quality (0-1), accepting percent notation.
fn parse_quality(input: &str) -> Result<f64, UnitError> {
    let trimmed = input.trim();
    let quality = if let Some(stripped) = trimmed.strip_suffix('%') {
        let percent: f64 = stripped.trim().parse().map_err(|_| {
            UnitError::ParseError(format!("Could not parse quality from '{input}'"))
        })?;
        percent / 100.0
    } else {
        trimmed.parse().map_err(|_| {
            UnitError::ParseError(format!("Could not parse quality from '{input}'"))
        })?
    };

    if !(0.0..=1.0).contains(&quality) {
        return Err(UnitError::OutOfRange {
            value: quality,
            reason: "Quality must be between 0 and 1".to_string(),
        });
    }

    Ok(quality)
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// "25C" -> (25.0, "C"), "1 bar" -> (1.0, "bar"), "300" -> (300.0, "").
fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();

    let split_idx = trimmed
        .find(|c: char| !c.is_numeric() && c != '.' && c != '-' && c != '+' && c != 'e' && c != 'E')
        .unwrap_or(trimmed.len());

    let (num_part, unit_part) = trimmed.split_at(split_idx);

    let value: f64 = num_part.trim().parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse numeric value from '{input}'"))
    })?;

    Ok((value, unit_part.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_kelvin() {
        assert_eq!(parse_quantity("300 K", Quantity::Temperature).unwrap(), 300.0);
        assert_eq!(parse_quantity("300", Quantity::Temperature).unwrap(), 300.0);
    }

    #[test]
    fn parse_celsius() {
        let t = parse_quantity("25C", Quantity::Temperature).unwrap();
        assert!((t - 298.15).abs() < 1e-9);
    }

    #[test]
    fn reject_negative_absolute_temperature() {
        assert!(parse_quantity("-300K", Quantity::Temperature).is_err());
    }

    #[test]
    fn parse_pressure_units() {
        assert_eq!(parse_quantity("101325 Pa", Quantity::Pressure).unwrap(), 101_325.0);
        assert_eq!(parse_quantity("1 bar", Quantity::Pressure).unwrap(), 1e5);
        assert_eq!(parse_quantity("1 atm", Quantity::Pressure).unwrap(), 101_325.0);
    }

    #[test]
    fn reject_unknown_pressure_unit() {
        assert!(matches!(
            parse_quantity("10 furlongs", Quantity::Pressure),
            Err(UnitError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn parse_density_units() {
        assert_eq!(parse_quantity("997 kg/m^3", Quantity::Density).unwrap(), 997.0);
        let g_cm3 = parse_quantity("1 g/cm^3", Quantity::Density).unwrap();
        assert!((g_cm3 - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn parse_enthalpy_and_entropy_prefixes() {
        assert_eq!(
            parse_quantity("419 kJ/kg", Quantity::SpecificEnthalpy).unwrap(),
            419_000.0
        );
        assert_eq!(
            parse_quantity("7.3 kJ/(kg K)", Quantity::SpecificEntropy).unwrap(),
            7_300.0
        );
    }

    #[test]
    fn parse_quality_and_percent() {
        assert_eq!(parse_quantity("0.5", Quantity::Quality).unwrap(), 0.5);
        assert_eq!(parse_quantity("50%", Quantity::Quality).unwrap(), 0.5);
        assert!(parse_quantity("1.5", Quantity::Quality).is_err());
    }

    #[test]
    fn quantity_mapping_covers_all_kinds() {
        for kind in ParamKind::ALL {
            // Every parameter kind must be enterable as text.
            let _ = Quantity::for_param(kind);
        }
    }

    #[test]
    fn scientific_notation_values() {
        assert_eq!(
            parse_quantity("1.5e6", Quantity::SpecificEnthalpy).unwrap(),
            1.5e6
        );
    }
}
