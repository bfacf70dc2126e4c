//! Formato de importes para mostrar.
//!
//! El valor almacenado nunca lleva separadores; sólo la vista los inserta.
//! El agrupado trabaja sobre el texto, sin pasar por `f64`, de modo que
//! `parse_amount(format_amount(x)) == x` para cualquier cadena numérica no
//! negativa (incluidos ceros a la izquierda y decimales).

/// `true` si `s` es `dígitos[.dígitos]` con al menos un dígito.
fn is_plain_numeric(s: &str) -> bool {
    let mut parts = s.splitn(2, '.');
    let int = parts.next().unwrap_or("");
    let frac = parts.next().unwrap_or("");
    (!int.is_empty() || !frac.is_empty())
    && int.chars().all(|c| c.is_ascii_digit())
    && frac.chars().all(|c| c.is_ascii_digit())
}

fn group_thousands(int: &str) -> String {
    let len = int.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Inserta separadores `,` cada tres dígitos de la parte entera.
/// Lo que no sea numérico se devuelve sin tocar.
pub fn format_amount(raw: &str) -> String {
    if !is_plain_numeric(raw) {
        return raw.to_string();
    }
    match raw.split_once('.') {
        Some((int, frac)) => format!("{}.{}", group_thousands(int), frac),
        None => group_thousands(raw),
    }
}

/// Quita los separadores de la vista.
pub fn parse_amount(display: &str) -> String {
    display.chars().filter(|c| *c != ',').collect()
}

/// Valor numérico de una entrada (con o sin separadores).
pub fn parse_number(display: &str) -> Option<f64> {
    let raw = parse_amount(display);
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Filtra lo tecleado en un campo de importe: se aceptan dígitos y un único
/// punto decimal; los separadores se descartan. `None` si el texto no es un
/// importe (la entrada anterior se conserva).
pub fn sanitize_amount_input(typed: &str) -> Option<String> {
    let raw = parse_amount(typed.trim());
    if raw.is_empty() || is_plain_numeric(&raw) {
        Some(raw)
    } else {
        None
    }
}

/// Importe con dos decimales y separadores: `1072.0 -> "1,072.00"`.
pub fn format_money(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format!("{:.2}", value.abs());
    let grouped = format_amount(&fixed);
    if value < 0.0 && fixed != "0.00" {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_millions() {
        assert_eq!(format_amount("1000000"), "1,000,000");
        assert_eq!(parse_amount("1,000,000"), "1000000");
        assert_eq!(format_amount("100"), "100");
        assert_eq!(format_amount("1000"), "1,000");
        assert_eq!(format_amount("1234567.891"), "1,234,567.891");
    }

    #[test]
    fn round_trip_is_exact() {
        for raw in ["0", "007", "0001000", "12.", ".5", "1000.50", "98765432109876543210"] {
            assert_eq!(parse_amount(&format_amount(raw)), raw, "{raw}");
        }
    }

    #[test]
    fn non_numeric_is_left_alone() {
        assert_eq!(format_amount(""), "");
        assert_eq!(format_amount("abc"), "abc");
        assert_eq!(format_amount("-1000"), "-1000");
        assert_eq!(format_amount("1.2.3"), "1.2.3");
    }

    #[test]
    fn sanitize_rejects_letters() {
        assert_eq!(sanitize_amount_input("1,500"), Some("1500".to_string()));
        assert_eq!(sanitize_amount_input(""), Some(String::new()));
        assert_eq!(sanitize_amount_input("12a"), None);
        assert_eq!(sanitize_amount_input("1.2.3"), None);
    }

    #[test]
    fn money_two_decimals() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(1072.0), "1,072.00");
        assert_eq!(format_money(50.0), "50.00");
        assert_eq!(format_money(-1500.5), "-1,500.50");
        assert_eq!(format_money(f64::NAN), "0.00");
        assert_eq!(parse_number("1,072.50"), Some(1072.5));
        assert_eq!(parse_number(" "), None);
    }
}
