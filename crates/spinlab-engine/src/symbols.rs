//! Symbol alphabet for the three-reel machine

/// Symbol identifier (reel icon code)
pub type SymbolId = u8;

/// Number of distinct symbols on each reel
pub const SYMBOL_COUNT: u8 = 12;

/// The jackpot symbol ("seven") — pays the premium multipliers
pub const JACKPOT_SYMBOL: SymbolId = 0;

/// The blank symbol ("cross") — never contributes to a match
pub const BLANK_SYMBOL: SymbolId = 7;

/// Display names, indexed by symbol ID
pub const SYMBOL_NAMES: [&str; SYMBOL_COUNT as usize] = [
    "seven", "cherry", "lemon", "orange", "plum", "bell", "grape", "cross",
    "watermelon", "star", "diamond", "clover",
];

/// Get the display name for a symbol, or "?" if out of range
pub fn symbol_name(id: SymbolId) -> &'static str {
    SYMBOL_NAMES.get(id as usize).copied().unwrap_or("?")
}

/// Check whether a symbol can participate in a paying match
pub fn is_paying(id: SymbolId) -> bool {
    id != BLANK_SYMBOL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_not_paying() {
        assert!(!is_paying(BLANK_SYMBOL));
        assert!(is_paying(JACKPOT_SYMBOL));
        for id in 0..SYMBOL_COUNT {
            assert_eq!(is_paying(id), id != 7);
        }
    }

    #[test]
    fn test_symbol_names() {
        assert_eq!(symbol_name(JACKPOT_SYMBOL), "seven");
        assert_eq!(symbol_name(BLANK_SYMBOL), "cross");
        assert_eq!(symbol_name(200), "?");
        assert_eq!(SYMBOL_NAMES.len(), SYMBOL_COUNT as usize);
    }
}
