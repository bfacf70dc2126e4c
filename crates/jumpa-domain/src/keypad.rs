// keypad.rs

/// Teclado de importe: empieza en "0", el primer dígito reemplaza al "0"
/// inicial y el borrado nunca deja el valor vacío.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountKeypad {
    value: String,
    max_digits: usize,
}

impl Default for AmountKeypad {
    fn default() -> Self {
        Self::new(Self::MAX_DIGITS)
    }
}

impl AmountKeypad {
    pub const MAX_DIGITS: usize = 20;

    pub fn new(max_digits: usize) -> Self {
        Self { value: "0".to_string(),
               max_digits }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    fn digit_count(&self) -> usize {
        self.value.chars().filter(|c| *c != '.').count()
    }

    /// Pulsa una tecla (`0`-`9`, `.` o `x` para borrar). Devuelve `false`
    /// si la tecla no tuvo efecto.
    pub fn press(&mut self, key: char) -> bool {
        match key {
            'x' | 'X' => {
                self.backspace();
                true
            }
            '.' => {
                if self.value.contains('.') {
                    return false;
                }
                self.value.push('.');
                true
            }
            d if d.is_ascii_digit() => {
                if self.digit_count() >= self.max_digits {
                    return false;
                }
                if self.value == "0" {
                    self.value = d.to_string();
                } else {
                    self.value.push(d);
                }
                true
            }
            _ => false,
        }
    }

    pub fn backspace(&mut self) {
        if self.value.len() > 1 {
            self.value.pop();
        } else {
            self.value = "0".to_string();
        }
    }

    pub fn reset(&mut self) {
        self.value = "0".to_string();
    }

    pub fn is_zero(&self) -> bool {
        self.value.parse::<f64>().map(|v| v == 0.0).unwrap_or(true)
    }
}
