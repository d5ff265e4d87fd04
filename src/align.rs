//! Global sequence alignment between two words.
//!
//! The score is a weighted edit distance: substitutions are cheap between
//! letters of the same class (vowel or consonant) and expensive across
//! classes, and every inserted or deleted character costs a fixed gap.

use const_format::formatcp;

const LOWER_VOWELS: &str = "aeiou";
const UPPER_VOWELS: &str = "AEIOU";
const VOWELS: &str = formatcp!("{}{}", LOWER_VOWELS, UPPER_VOWELS);

/// Penalties used by the aligner. Lower totals mean more similar words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Costs {
    /// Cost of inserting or deleting one character.
    pub gap: u32,
    /// Substituting a vowel for a vowel, or a consonant for a consonant.
    pub same_class: u32,
    /// Substituting across the vowel/consonant divide.
    pub cross_class: u32,
}

impl Default for Costs {
    fn default() -> Self {
        Costs {
            gap: 2,
            same_class: 1,
            cross_class: 3,
        }
    }
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Cost of aligning `a` against `b`. Exact matches are case-sensitive.
pub fn mismatch_cost(a: char, b: char, costs: &Costs) -> u32 {
    if a == b {
        return 0;
    }

    if is_vowel(a) == is_vowel(b) {
        costs.same_class
    } else {
        costs.cross_class
    }
}

/// Cost of `len` consecutive gaps, saturating at `u32::MAX`.
fn gap_run(len: usize, gap: u32) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX).saturating_mul(gap)
}

/// Row-major `(rows + 1) x (cols + 1)` grid of partial alignment costs.
struct AlignmentTable {
    width: usize,
    cells: Vec<u32>,
}

impl AlignmentTable {
    fn new(rows: usize, cols: usize, gap: u32) -> Self {
        let width = cols + 1;
        let mut table = AlignmentTable {
            width,
            cells: vec![0; (rows + 1) * width],
        };

        for i in 1..=rows {
            table.set(i, 0, gap_run(i, gap));
        }
        for j in 1..=cols {
            table.set(0, j, gap_run(j, gap));
        }

        table
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.width + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: u32) {
        self.cells[i * self.width + j] = value;
    }
}

/// Alignment score of two words with the default costs.
pub fn score(word1: &str, word2: &str) -> u32 {
    score_with_costs(word1, word2, &Costs::default())
}

pub fn score_with_costs(word1: &str, word2: &str, costs: &Costs) -> u32 {
    let a: Vec<char> = word1.chars().collect();
    let b: Vec<char> = word2.chars().collect();
    score_chars(&a, &b, costs)
}

/// Full quadratic dynamic program over two character slices.
pub fn score_chars(word1: &[char], word2: &[char], costs: &Costs) -> u32 {
    let rows = word1.len();
    let cols = word2.len();
    let mut table = AlignmentTable::new(rows, cols, costs.gap);

    for i in 1..=rows {
        let row_char = word1[i - 1];
        for j in 1..=cols {
            let diagonal = table
                .get(i - 1, j - 1)
                .saturating_add(mismatch_cost(row_char, word2[j - 1], costs));
            let up = table.get(i - 1, j).saturating_add(costs.gap);
            let left = table.get(i, j - 1).saturating_add(costs.gap);
            table.set(i, j, diagonal.min(up).min(left));
        }
    }

    table.get(rows, cols)
}
