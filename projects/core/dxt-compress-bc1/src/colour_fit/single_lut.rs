//! Lookup tables for the single colour fit.
//!
//! For every 8-bit target value and every hardware codebook, the tables hold the 5 or 6 bit
//! endpoint pair that reproduces the target at codebook index 0 or 2, together with the
//! remaining error. They are built once by enumerating every realisable endpoint pair and
//! then spreading the nearest solutions into the gaps.

use std::sync::OnceLock;

/// An endpoint pair (in 5 or 6 bit units) and the error it leaves for one target value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct SourceBlock {
    pub start: u8,
    pub end: u8,
    pub error: u8,
}

/// Candidate solutions for one target value: `sources[0]` reaches the target at
/// codebook index 0, `sources[1]` at codebook index 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct SingleColourLookup {
    pub sources: [SourceBlock; 2],
}

pub(crate) type LookupTable = [SingleColourLookup; 256];

/// Lookup tables for every channel width and codebook size.
pub(crate) struct SingleColourTables {
    /// 5 bit channel, 3 colour codebook
    pub lookup_5_3: LookupTable,
    /// 6 bit channel, 3 colour codebook
    pub lookup_6_3: LookupTable,
    /// 5 bit channel, 4 colour codebook
    pub lookup_5_4: LookupTable,
    /// 6 bit channel, 4 colour codebook
    pub lookup_6_4: LookupTable,
}

/// Returns the process-wide tables, building them on first use.
pub(crate) fn single_colour_tables() -> &'static SingleColourTables {
    static TABLES: OnceLock<SingleColourTables> = OnceLock::new();
    TABLES.get_or_init(|| SingleColourTables {
        lookup_5_3: build_lookup(5, 3),
        lookup_6_3: build_lookup(6, 3),
        lookup_5_4: build_lookup(5, 4),
        lookup_6_4: build_lookup(6, 4),
    })
}

#[derive(Clone, Copy)]
struct Candidate {
    start: u8,
    end: u8,
    error: i32,
}

/// Expands a 5 or 6 bit value to 8 bits by replicating the top bits.
#[inline]
fn expand(value: i32, bits: u32) -> i32 {
    (value << (8 - bits)) | (value >> (2 * bits - 8))
}

fn build_lookup(bits: u32, colours: usize) -> LookupTable {
    let unset = Candidate {
        start: 0,
        end: 0,
        error: 255,
    };
    let mut values = [[unset; 4]; 256];

    // Mark every exactly reachable target with the first endpoint pair reaching it.
    let count = 1i32 << bits;
    for value1 in 0..count {
        for value2 in 0..count {
            let a = expand(value1, bits);
            let b = expand(value2, bits);

            let codes = if colours == 3 {
                [a, b, (a + b) / 2, 0]
            } else {
                [a, b, (2 * a + b) / 3, (a + 2 * b) / 3]
            };

            for (index, &target) in codes.iter().enumerate().take(colours) {
                let candidate = &mut values[target as usize][index];
                if candidate.error != 0 {
                    *candidate = Candidate {
                        start: value1 as u8,
                        end: value2 as u8,
                        error: 0,
                    };
                }
            }
        }
    }

    // Fill unreachable targets from their neighbours until nothing changes.
    loop {
        let mut stable = true;
        for index in 0..colours {
            for target in 0..256 {
                if target != 255 {
                    let next = values[target + 1][index];
                    if values[target][index].error > next.error + 1 {
                        values[target][index] = Candidate {
                            error: next.error + 1,
                            ..next
                        };
                        stable = false;
                    }
                }
                if target != 0 {
                    let previous = values[target - 1][index];
                    if values[target][index].error > previous.error + 1 {
                        values[target][index] = Candidate {
                            error: previous.error + 1,
                            ..previous
                        };
                        stable = false;
                    }
                }
            }
        }

        if stable {
            break;
        }
    }

    let to_source = |candidate: Candidate| SourceBlock {
        start: candidate.start,
        end: candidate.end,
        error: candidate.error as u8,
    };

    core::array::from_fn(|target| SingleColourLookup {
        sources: [to_source(values[target][0]), to_source(values[target][2])],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn decode(source: &SourceBlock, bits: u32, colours: usize, index: usize) -> i32 {
        let a = expand(source.start as i32, bits);
        let b = expand(source.end as i32, bits);
        match (index, colours) {
            (0, _) => a,
            (2, 3) => (a + b) / 2,
            (2, 4) => (2 * a + b) / 3,
            _ => unreachable!(),
        }
    }

    #[rstest]
    #[case(5, 3)]
    #[case(6, 3)]
    #[case(5, 4)]
    #[case(6, 4)]
    fn table_errors_match_decoded_values(#[case] bits: u32, #[case] colours: usize) {
        let table = build_lookup(bits, colours);
        for (target, lookup) in table.iter().enumerate() {
            for (slot, index) in [0usize, 2].into_iter().enumerate() {
                let source = &lookup.sources[slot];
                let decoded = decode(source, bits, colours, index);
                assert_eq!(
                    (decoded - target as i32).unsigned_abs(),
                    source.error as u32,
                    "bits={bits} colours={colours} target={target} index={index}"
                );
            }
        }
    }

    #[test]
    fn extremes_are_exact() {
        let tables = single_colour_tables();
        for table in [
            &tables.lookup_5_3,
            &tables.lookup_6_3,
            &tables.lookup_5_4,
            &tables.lookup_6_4,
        ] {
            assert_eq!(table[0].sources[0].error, 0);
            assert_eq!(table[255].sources[0].error, 0);
        }
        assert_eq!(tables.lookup_5_4[255].sources[0].start, 31);
        assert_eq!(tables.lookup_6_4[255].sources[0].start, 63);
    }

    #[test]
    fn interpolated_entries_improve_on_endpoints() {
        // 6 bit green: 2 is not representable as an endpoint (0 -> 0, 1 -> 4),
        // but 2/3 * 0 + 1/3 * 8 rounds down to 2 in the 4 colour codebook.
        let tables = single_colour_tables();
        assert!(tables.lookup_6_4[2].sources[0].error > 0);
        assert_eq!(tables.lookup_6_4[2].sources[1].error, 0);
    }
}
