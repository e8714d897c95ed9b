//! Declarative state distributions for randomized initialization.

use weald_core::ConfigError;

/// One entry of a [`Composition`]: either a given share or the single
/// allowed "infer the remainder" sentinel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Share {
    /// An explicit fraction or count, depending on the composition form.
    Given(f64),
    /// Absorb every cell not claimed by the given entries.
    Remainder,
}

/// An ordered distribution of states across the grid.
///
/// Entry `i` describes state tag `i`. The two forms differ only in how
/// a [`Share::Given`] value is read: as a fraction of the cell count or
/// as an absolute count (truncated to an integer). At most one entry
/// may be [`Share::Remainder`]; a second one is an unrecoverable
/// configuration error, not something the engine will guess around.
#[derive(Clone, Debug, PartialEq)]
pub enum Composition {
    /// Shares are fractions that must total 1.0 (absent a remainder).
    Fractions(Vec<Share>),
    /// Shares are absolute cell counts that must total the grid's cell
    /// count (absent a remainder).
    Counts(Vec<Share>),
}

/// Tolerance for the fraction-sum check. Loader-supplied fractions come
/// from parsed decimal text, so exact unity cannot be required.
const FRACTION_SUM_EPSILON: f64 = 1e-9;

impl Composition {
    /// Convenience constructor for the fraction form.
    pub fn fractions(shares: impl IntoIterator<Item = Share>) -> Self {
        Self::Fractions(shares.into_iter().collect())
    }

    /// Convenience constructor for the count form.
    pub fn counts(shares: impl IntoIterator<Item = Share>) -> Self {
        Self::Counts(shares.into_iter().collect())
    }

    /// Number of states this composition describes.
    pub fn state_count(&self) -> usize {
        self.entries().len()
    }

    fn entries(&self) -> &[Share] {
        match self {
            Self::Fractions(v) | Self::Counts(v) => v,
        }
    }

    /// Resolve to per-state cell counts totalling exactly `cell_count`.
    ///
    /// The remainder entry (if present) receives `cell_count` minus the
    /// sum of the given entries. Without a remainder, the fraction form
    /// must sum to 1.0 and the last entry absorbs truncation slack; the
    /// count form must sum to `cell_count` exactly.
    pub fn resolve(&self, cell_count: usize) -> Result<Vec<usize>, ConfigError> {
        let entries = self.entries();
        if entries.is_empty() {
            return Err(ConfigError::EmptyComposition);
        }
        let remainder = find_remainder(entries)?;

        let mut counts = vec![0usize; entries.len()];
        let mut given_sum = 0usize;
        for (i, share) in entries.iter().enumerate() {
            if let Share::Given(v) = share {
                let n = match self {
                    Self::Fractions(_) => (cell_count as f64 * v).trunc() as usize,
                    Self::Counts(_) => v.trunc() as usize,
                };
                counts[i] = n;
                given_sum += n;
            }
        }

        match remainder {
            Some(i) => {
                if given_sum > cell_count {
                    return Err(ConfigError::CompositionMismatch {
                        expected: cell_count,
                        actual: given_sum,
                    });
                }
                counts[i] = cell_count - given_sum;
            }
            None => match self {
                Self::Fractions(_) => {
                    let fraction_sum: f64 = entries
                        .iter()
                        .map(|s| match s {
                            Share::Given(v) => *v,
                            Share::Remainder => 0.0,
                        })
                        .sum();
                    if (fraction_sum - 1.0).abs() > FRACTION_SUM_EPSILON {
                        return Err(ConfigError::CompositionMismatch {
                            expected: cell_count,
                            actual: (cell_count as f64 * fraction_sum).round() as usize,
                        });
                    }
                    // Truncation slack lands on the last entry.
                    let last = counts.len() - 1;
                    let others = given_sum - counts[last];
                    if others > cell_count {
                        return Err(ConfigError::CompositionMismatch {
                            expected: cell_count,
                            actual: others,
                        });
                    }
                    counts[last] = cell_count - others;
                }
                Self::Counts(_) => {
                    if given_sum != cell_count {
                        return Err(ConfigError::CompositionMismatch {
                            expected: cell_count,
                            actual: given_sum,
                        });
                    }
                }
            },
        }
        Ok(counts)
    }
}

/// Locate the remainder entry, rejecting a second one.
fn find_remainder(entries: &[Share]) -> Result<Option<usize>, ConfigError> {
    let mut found = None;
    for (i, share) in entries.iter().enumerate() {
        if matches!(share, Share::Remainder) {
            match found {
                None => found = Some(i),
                Some(first) => {
                    return Err(ConfigError::MultipleRemainders { first, second: i });
                }
            }
        }
    }
    Ok(found)
}
