//! Line codec for the semicolon-delimited student file
//!
//! Format: UTF-8 text, one record per line, fields separated by `;` with no
//! quoting. The first line is the header `id;name;email;gpa`. Lines starting
//! with `#` are comments. Parsing is deliberately lenient: malformed lines
//! are skipped (and counted) rather than failing the whole file.

use tracing::warn;

use crate::models::Student;

/// Header line written at the top of every saved file
pub const FILE_HEADER: &str = "id;name;email;gpa";

const SEPARATOR: char = ';';

/// Result of decoding a whole file
#[derive(Debug, Default, PartialEq)]
pub struct Decoded {
    /// Records in file order
    pub students: Vec<Student>,
    /// Count of data lines skipped as malformed (too few fields or bad id)
    pub skipped: usize,
}

/// Outcome of parsing a single line
enum Line {
    Record(Student),
    /// Blank line, comment, or header
    Ignored,
    /// Data line that could not be parsed
    Malformed,
}

/// Decode file contents into records
///
/// Blank lines, comments, and the header are ignored. Data lines with fewer
/// than four fields or an unparsable id are skipped and counted. A data line
/// with an unparsable gpa is still loaded, with the gpa defaulted to 0.0.
pub fn decode(text: &str) -> Decoded {
    let mut decoded = Decoded::default();
    for (lineno, raw) in text.lines().enumerate() {
        match parse_line(raw) {
            Line::Record(student) => decoded.students.push(student),
            Line::Ignored => {}
            Line::Malformed => {
                warn!(line = lineno + 1, "skipping malformed line");
                decoded.skipped += 1;
            }
        }
    }
    decoded
}

fn parse_line(raw: &str) -> Line {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with("id;") {
        return Line::Ignored;
    }

    // Split must keep empty fields so trailing separators still yield 4 parts
    let parts: Vec<&str> = line.split(SEPARATOR).collect();
    if parts.len() < 4 {
        return Line::Malformed;
    }

    let Ok(id) = parts[0].trim().parse::<u32>() else {
        return Line::Malformed;
    };

    // name/email are trusted verbatim; a bad gpa does not reject the record
    let gpa = parts[3].trim().parse::<f64>().unwrap_or(0.0);
    Line::Record(Student::new(id, parts[1], parts[2], gpa))
}

/// Encode records into file contents: header plus one line per record
///
/// Field escaping is lossy and kept that way for compatibility: literal
/// newlines in name/email become spaces and literal `;` become `,`.
pub fn encode(students: &[Student]) -> String {
    let mut out = String::with_capacity(FILE_HEADER.len() + 1 + students.len() * 32);
    out.push_str(FILE_HEADER);
    out.push('\n');
    for s in students {
        out.push_str(&format!(
            "{};{};{};{}\n",
            s.id,
            sanitize(&s.name),
            sanitize(&s.email),
            s.gpa
        ));
    }
    out
}

fn sanitize(field: &str) -> String {
    field.replace('\n', " ").replace(SEPARATOR, ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_basic() {
        let text = "id;name;email;gpa\n1;Ada;ada@example.com;9.5\n2;Grace;grace@example.com;8\n";
        let decoded = decode(text);
        assert_eq!(decoded.skipped, 0);
        assert_eq!(decoded.students.len(), 2);
        assert_eq!(decoded.students[0], Student::new(1, "Ada", "ada@example.com", 9.5));
        assert_eq!(decoded.students[1].gpa, 8.0);
    }

    #[test]
    fn test_decode_skips_comments_blanks_and_header() {
        let text = "# roster file\n\nid;name;email;gpa\n   \n1;Ada;ada@example.com;9.5\n";
        let decoded = decode(text);
        assert_eq!(decoded.students.len(), 1);
        assert_eq!(decoded.skipped, 0, "comments and blanks are not malformed");
    }

    #[test]
    fn test_decode_skips_short_lines_but_keeps_neighbors() {
        let text = "1;Ada;ada@example.com;9.5\n2;Broken;no-gpa-field\n3;Grace;grace@example.com;8.0\n";
        let decoded = decode(text);
        assert_eq!(decoded.students.len(), 2);
        assert_eq!(decoded.students[0].id, 1);
        assert_eq!(decoded.students[1].id, 3);
        assert_eq!(decoded.skipped, 1);
    }

    #[test]
    fn test_decode_skips_unparsable_id() {
        let decoded = decode("not-a-number;Ada;ada@example.com;9.5\n");
        assert!(decoded.students.is_empty());
        assert_eq!(decoded.skipped, 1);
    }

    #[test]
    fn test_decode_defaults_bad_gpa_to_zero() {
        let decoded = decode("1;Ada;ada@example.com;excellent\n");
        assert_eq!(decoded.skipped, 0, "a bad gpa does not reject the line");
        assert_eq!(decoded.students.len(), 1);
        assert_eq!(decoded.students[0].gpa, 0.0);
    }

    #[test]
    fn test_decode_keeps_trailing_empty_fields() {
        // Empty email still counts as a field; the split must not collapse it
        let decoded = decode("1;Ada;;9.5\n");
        assert_eq!(decoded.students.len(), 1);
        assert_eq!(decoded.students[0].email, "");

        // Trailing separator: four fields with an empty gpa, which defaults
        let decoded = decode("2;Ada;ada@example.com;\n");
        assert_eq!(decoded.students.len(), 1);
        assert_eq!(decoded.students[0].gpa, 0.0);
    }

    #[test]
    fn test_decode_takes_name_and_email_verbatim() {
        let decoded = decode("1;  Ada  ; spaced@example.com ;5\n");
        // Outer line trim applies, inner field whitespace is preserved
        assert_eq!(decoded.students[0].name, "  Ada  ");
        assert_eq!(decoded.students[0].email, " spaced@example.com ");
    }

    #[test]
    fn test_decode_extra_fields_uses_first_four() {
        let decoded = decode("1;Ada;ada@example.com;9.5;extra\n");
        assert_eq!(decoded.students.len(), 1);
        assert_eq!(decoded.students[0].gpa, 9.5);
    }

    #[test]
    fn test_encode_writes_header_and_records() {
        let students = vec![
            Student::new(1, "Ada", "ada@example.com", 9.5),
            Student::new(2, "Grace", "grace@example.com", 8.0),
        ];
        let text = encode(&students);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(FILE_HEADER));
        assert_eq!(lines.next(), Some("1;Ada;ada@example.com;9.5"));
        assert_eq!(lines.next(), Some("2;Grace;grace@example.com;8"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_encode_escapes_separator_and_newline() {
        let students = vec![Student::new(1, "Ada;Lovelace", "line\nbreak@example.com", 5.0)];
        let text = encode(&students);
        assert!(text.contains("1;Ada,Lovelace;line break@example.com;5"));
    }

    #[test]
    fn test_round_trip() {
        let students = vec![
            Student::new(1, "Ada", "ada@example.com", 9.5),
            Student::new(4, "Grace", "grace@example.com", 0.0),
        ];
        let decoded = decode(&encode(&students));
        assert_eq!(decoded.students, students);
        assert_eq!(decoded.skipped, 0);
    }
}
