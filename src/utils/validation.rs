//! Utilidades de validación
//!
//! Validadores personalizados para usar con `#[validate(custom = "...")]`
//! en los DTOs de entrada.

use validator::ValidationError;

/// Validar que un string no esté vacío ni contenga solo espacios
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de placa de moto
///
/// Acepta letras y dígitos, con guión o espacio opcional (ABC1D23, ABC-1234).
pub fn validate_placa(value: &str) -> Result<(), ValidationError> {
    let clean_plate: String = value.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    let valid = !clean_plate.is_empty()
        && clean_plate.len() <= 10
        && clean_plate.chars().all(|c| c.is_ascii_alphanumeric());
    if !valid {
        let mut error = ValidationError::new("placa");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Pátio Central").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
    }

    #[test]
    fn test_validate_placa() {
        assert!(validate_placa("ABC1D23").is_ok());
        assert!(validate_placa("ABC-1234").is_ok());
        assert!(validate_placa("").is_err());
        assert!(validate_placa("AB#1234").is_err());
        assert!(validate_placa("ABCDEFGHIJK").is_err());
    }
}
