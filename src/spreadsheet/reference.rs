//! Conversions between 1-based row/column numbers and A1-style references.

/// Converts a 1-based column number to its letters (`1` → `A`, `27` → `AA`).
/// Column `0` has no letters and yields an empty string.
pub fn column_letters(column: usize) -> String {
    let mut column = column;
    let mut letters = String::new();
    while column > 0 {
        column -= 1;
        let digit = char::from_u32(65 + (column % 26) as u32).expect("Hardcode letters");
        column /= 26;
        letters.insert(0, digit);
    }
    letters
}

/// Converts column letters to a 1-based column number, case-insensitive.
/// Returns None for empty input or anything that is not an ASCII letter.
pub fn column_number(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }
    letters.chars().try_fold(0usize, |column, letter| {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        let digit = (letter.to_ascii_uppercase() as usize) - ('A' as usize) + 1;
        column.checked_mul(26)?.checked_add(digit)
    })
}

/// Parses a 1-based row number. Row `0` does not exist in A1 notation.
pub fn row_number(digits: &str) -> Option<usize> {
    digits.parse::<usize>().ok().filter(|row| *row > 0)
}

/// Renders the A1 reference of a cell given its 1-based row and column.
pub fn cell_reference(row: usize, column: usize) -> String {
    format!("{}{}", column_letters(column), row)
}
