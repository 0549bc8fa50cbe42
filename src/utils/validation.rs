//! Utilidades de validación
//!
//! Este módulo contiene funciones helper de validación de campos,
//! reutilizadas por los servicios.

use serde::Serialize;
use validator::ValidationError;

/// Validar que un string no esté vacío (los espacios cuentan como vacío)
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor esté en un rango específico (inclusive)
pub fn validate_range<T: PartialOrd + std::fmt::Display + Serialize>(
    value: T,
    min: T,
    max: T,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Toyota").is_ok());
        assert!(validate_not_empty("").is_err());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range(2020, 1900, 2100).is_ok());
        assert!(validate_range(1900, 1900, 2100).is_ok());
        assert!(validate_range(2100, 1900, 2100).is_ok());
        assert!(validate_range(1899, 1900, 2100).is_err());
        assert!(validate_range(2101, 1900, 2100).is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(40.0).is_ok());
        assert!(validate_positive(0.0).is_err());
        assert!(validate_positive(-1.5).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(0i64).is_ok());
        assert!(validate_non_negative(10000i64).is_ok());
        assert!(validate_non_negative(-1i64).is_err());
    }
}
