pub mod script_constants;

pub use script_constants::{LINE_REGEX, MAX_CUE_LENGTH, RESERVED_CUE_WORDS};

/// Builds the `@`-prefixed cross-tool identifier for a character or
/// location name: whitespace is stripped, casing is kept.
pub fn generate_handle(name: &str) -> String {
    let stripped: String = name.chars().filter(|c| !c.is_whitespace()).collect();
    format!("@{}", stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_strips_whitespace() {
        assert_eq!(generate_handle("Sam Wilkinson"), "@SamWilkinson");
        assert_eq!(generate_handle("JOE"), "@JOE");
        assert_eq!(generate_handle("MARY \t ANN"), "@MARYANN");
    }
}
