//! Delimiter detection for the tolerant parse.

/// Candidate delimiters, in tie-break order.
const CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Number of non-empty lines inspected.
const SAMPLE_LINES: usize = 10;

/// Guess the field delimiter from the first lines of a file.
///
/// A candidate must appear in the header line. Among those, the one whose
/// per-line count agrees with the header on the most lines wins, then the one
/// producing more fields. Falls back to comma when nothing qualifies.
pub fn sniff_delimiter(sample: &str) -> u8 {
    let lines: Vec<&str> = sample
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .take(SAMPLE_LINES)
        .collect();
    let Some(first) = lines.first() else {
        return b',';
    };

    let mut best: Option<(u8, usize, usize)> = None;
    for candidate in CANDIDATES {
        let header_count = count_unquoted(first, candidate);
        if header_count == 0 {
            continue;
        }
        let agreeing = lines
            .iter()
            .filter(|line| count_unquoted(line, candidate) == header_count)
            .count();
        let better = match best {
            None => true,
            Some((_, best_agreeing, best_count)) => {
                agreeing > best_agreeing || (agreeing == best_agreeing && header_count > best_count)
            }
        };
        if better {
            best = Some((candidate, agreeing, header_count));
        }
    }
    best.map_or(b',', |(delimiter, _, _)| delimiter)
}

/// Count delimiter bytes outside double-quoted sections.
fn count_unquoted(line: &str, delimiter: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for byte in line.bytes() {
        if byte == b'"' {
            in_quotes = !in_quotes;
        } else if byte == delimiter && !in_quotes {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma() {
        assert_eq!(sniff_delimiter("date,a,b\n1,2,3\n"), b',');
    }

    #[test]
    fn test_semicolon() {
        assert_eq!(sniff_delimiter("date;a;b\n1;2;3\n4;5;6\n"), b';');
    }

    #[test]
    fn test_tab() {
        assert_eq!(sniff_delimiter("date\ta\n2020-01-01\t3\n"), b'\t');
    }

    #[test]
    fn test_quoted_commas_ignored() {
        let sample = "\"place, name\";value\n\"a, b\";1\n";
        assert_eq!(sniff_delimiter(sample), b';');
    }

    #[test]
    fn test_delimiter_must_appear_in_header() {
        // Commas appear inside values but never in the header.
        let sample = "date|note\n1|a,b,c\n2|d\n3|e\n";
        assert_eq!(sniff_delimiter(sample), b'|');
    }

    #[test]
    fn test_consistency_beats_raw_count() {
        // Semicolons agree on every line; commas only on the header.
        let sample = "date;a,b;c\n1;2;3\n4;5;6\n";
        assert_eq!(sniff_delimiter(sample), b';');
    }

    #[test]
    fn test_no_delimiter_defaults_to_comma() {
        assert_eq!(sniff_delimiter("date\n2020-01-01\n"), b',');
        assert_eq!(sniff_delimiter(""), b',');
    }

    #[test]
    fn test_count_unquoted() {
        assert_eq!(count_unquoted("a,\"b,c\",d", b','), 2);
    }
}
