//! Parsing helpers for text form fields.
//!
//! Dialog inputs are bound to `String`s; these helpers turn them into payload
//! values and produce the validation message shown to the user.

use super::EntityId;

/// Trimmed value of a mandatory field
pub fn required(value: &str, label: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("Preencha o campo obrigatório: {}", label));
    }
    Ok(trimmed.to_string())
}

/// `None` for a blank optional field
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Non-negative whole number (quantities, employee count)
pub fn non_negative_int(value: &str, label: &str) -> Result<i64, String> {
    let raw = required(value, label)?;
    let parsed: i64 = raw
        .parse()
        .map_err(|_| format!("Valor inválido para {}: {}", label, raw))?;
    if parsed < 0 {
        return Err(format!("{} não pode ser negativo", label));
    }
    Ok(parsed)
}

/// Non-negative decimal; accepts both `12.50` and `12,50`
pub fn non_negative_decimal(value: &str, label: &str) -> Result<f64, String> {
    let raw = required(value, label)?;
    let parsed: f64 = raw
        .replace(',', ".")
        .parse()
        .map_err(|_| format!("Valor inválido para {}: {}", label, raw))?;
    if !parsed.is_finite() {
        return Err(format!("Valor inválido para {}: {}", label, raw));
    }
    if parsed < 0.0 {
        return Err(format!("{} não pode ser negativo", label));
    }
    Ok(parsed)
}

/// Store reference picked in the "Loja" select
pub fn store_ref(value: &str) -> Result<EntityId, String> {
    let raw = value.trim();
    if raw.is_empty() {
        return Err("Selecione uma loja".to_string());
    }
    raw.parse()
        .map_err(|_| format!("Loja inválida: {}", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims_and_rejects_blank() {
        assert_eq!(required("  Maçã ", "Fruta"), Ok("Maçã".to_string()));
        assert_eq!(
            required("   ", "Fruta"),
            Err("Preencha o campo obrigatório: Fruta".to_string())
        );
    }

    #[test]
    fn test_optional() {
        assert_eq!(optional(""), None);
        assert_eq!(optional(" a@b.com "), Some("a@b.com".to_string()));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(non_negative_int("12", "Quantidade"), Ok(12));
        assert!(non_negative_int("1.5", "Quantidade").is_err());
        assert_eq!(
            non_negative_int("-1", "Quantidade"),
            Err("Quantidade não pode ser negativo".to_string())
        );
        assert_eq!(non_negative_decimal("12,50", "Valor"), Ok(12.5));
        assert_eq!(non_negative_decimal("3", "Valor"), Ok(3.0));
        assert!(non_negative_decimal("abc", "Valor").is_err());
        assert!(non_negative_decimal("NaN", "Valor").is_err());
    }

    #[test]
    fn test_store_ref() {
        assert_eq!(store_ref("7"), Ok(7));
        assert_eq!(store_ref(""), Err("Selecione uma loja".to_string()));
        assert!(store_ref("x").is_err());
    }
}
