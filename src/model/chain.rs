/// Number of letters in the chain label alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Returns the chain label at a zero-based position of the label sequence.
///
/// Labels follow bijective base-26 numbering, the scheme used for
/// spreadsheet columns: `0 → "A"`, `25 → "Z"`, `26 → "AA"`, `701 → "ZZ"`,
/// `702 → "AAA"`.
pub fn label_for_index(index: usize) -> String {
    let mut digits = Vec::new();
    let mut n = index;
    loop {
        digits.push(b'A' + (n % ALPHABET_LEN) as u8);
        if n < ALPHABET_LEN {
            break;
        }
        n = n / ALPHABET_LEN - 1;
    }
    digits.iter().rev().map(|&b| b as char).collect()
}

/// Inverse of [`label_for_index`].
///
/// Returns `None` for empty strings, characters outside `A-Z`, or labels too
/// large to index.
pub fn index_for_label(label: &str) -> Option<usize> {
    if label.is_empty() {
        return None;
    }

    let mut value: usize = 0;
    for b in label.bytes() {
        if !b.is_ascii_uppercase() {
            return None;
        }
        let digit = usize::from(b - b'A') + 1;
        value = value.checked_mul(ALPHABET_LEN)?.checked_add(digit)?;
    }
    Some(value - 1)
}

/// Cursor over the chain label sequence.
///
/// A new cursor starts at `"A"`; each job owns its own cursor so labels never
/// leak between jobs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainLabels {
    cursor: usize,
}

impl ChainLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next unused label and advances the cursor.
    pub fn next_label(&mut self) -> String {
        let label = label_for_index(self.cursor);
        self.cursor += 1;
        label
    }

    /// Takes the next `count` labels.
    pub fn take_labels(&mut self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.next_label()).collect()
    }

    /// Number of labels handed out so far.
    pub fn issued(&self) -> usize {
        self.cursor
    }
}

impl Iterator for ChainLabels {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.next_label())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
