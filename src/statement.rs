use crate::error::PrepareError;
use crate::row::Row;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Insert(Row),
    Select,
}

impl Statement {
    /// Parse one trimmed input line.
    ///
    /// `insert <id> <username> <email>` and a bare `select` are the only
    /// accepted forms. Anything starting with `insert` that does not fit the
    /// insert shape is a syntax error; everything else is unrecognized. The
    /// first token must be exactly `insert`, so `inserted 1 a b` is a syntax
    /// error rather than an insert.
    ///
    /// The line is raw bytes: username and email are stored without any
    /// character set check.
    pub fn prepare(input: &[u8]) -> Result<Statement, PrepareError> {
        if input.starts_with(b"insert") {
            return prepare_insert(input);
        }
        if input == b"select" {
            return Ok(Statement::Select);
        }
        Err(PrepareError::UnrecognizedStatement(
            String::from_utf8_lossy(input).into_owned(),
        ))
    }
}

fn prepare_insert(input: &[u8]) -> Result<Statement, PrepareError> {
    let tokens: Vec<&[u8]> = input
        .split(u8::is_ascii_whitespace)
        .filter(|token| !token.is_empty())
        .collect();
    let [b"insert", id, username, email] = tokens.as_slice() else {
        return Err(PrepareError::SyntaxError);
    };

    let id = parse_id(id).ok_or(PrepareError::SyntaxError)?;
    Ok(Statement::Insert(Row::new(id, username, email)))
}

// Plain decimal digits only; `str::parse` would also take a leading `+`.
fn parse_id(token: &[u8]) -> Option<u32> {
    if token.is_empty() || !token.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(token).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EMAIL_SIZE, USERNAME_SIZE};

    #[test]
    fn test_prepare_insert() {
        let statement = Statement::prepare(b"insert 1 alice alice@x.com").unwrap();
        assert_eq!(
            statement,
            Statement::Insert(Row::new(1, b"alice", b"alice@x.com"))
        );
    }

    #[test]
    fn test_prepare_insert_collapses_whitespace() {
        let statement = Statement::prepare(b"insert   9\tbob  bob@y.org").unwrap();
        assert_eq!(statement, Statement::Insert(Row::new(9, b"bob", b"bob@y.org")));
    }

    #[test]
    fn test_prepare_insert_wrong_token_count() {
        for input in [
            "insert",
            "insert 1",
            "insert 1 alice",
            "insert 1 alice a@x.com extra",
        ] {
            assert_eq!(
                Statement::prepare(input.as_bytes()),
                Err(PrepareError::SyntaxError),
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_prepare_insert_bad_id() {
        for input in [
            "insert foo bar baz",
            "insert -1 a b",
            "insert +1 a b",
            "insert 1.5 a b",
            "insert 4294967296 a b",
        ] {
            assert_eq!(
                Statement::prepare(input.as_bytes()),
                Err(PrepareError::SyntaxError),
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_prepare_insert_max_id() {
        let statement = Statement::prepare(b"insert 4294967295 a b").unwrap();
        assert_eq!(statement, Statement::Insert(Row::new(u32::MAX, b"a", b"b")));
    }

    #[test]
    fn test_prepare_insert_prefix_is_syntax_error() {
        assert_eq!(
            Statement::prepare(b"inserted 1 a b"),
            Err(PrepareError::SyntaxError)
        );
    }

    #[test]
    fn test_prepare_insert_truncates_long_fields() {
        let username = "u".repeat(USERNAME_SIZE);
        let email = "e".repeat(EMAIL_SIZE + 5);
        let Statement::Insert(row) =
            Statement::prepare(format!("insert 2 {username} {email}").as_bytes()).unwrap()
        else {
            panic!("expected insert");
        };

        assert_eq!(row.username(), &username.as_bytes()[..USERNAME_SIZE - 1]);
        assert_eq!(row.email(), &email.as_bytes()[..EMAIL_SIZE - 1]);
    }

    #[test]
    fn test_prepare_insert_keeps_raw_bytes() {
        let Statement::Insert(row) = Statement::prepare(b"insert 1 \xffa e@\xfe").unwrap() else {
            panic!("expected insert");
        };

        assert_eq!(row.username(), &[0xff, b'a']);
        assert_eq!(row.email(), &[b'e', b'@', 0xfe]);
    }

    #[test]
    fn test_prepare_unrecognized_echoes_lossily() {
        assert_eq!(
            Statement::prepare(b"\xffoo"),
            Err(PrepareError::UnrecognizedStatement("\u{fffd}oo".into()))
        );
    }

    #[test]
    fn test_prepare_select() {
        assert_eq!(Statement::prepare(b"select"), Ok(Statement::Select));
    }

    #[test]
    fn test_prepare_select_with_arguments_is_unrecognized() {
        assert_eq!(
            Statement::prepare(b"select *"),
            Err(PrepareError::UnrecognizedStatement("select *".into()))
        );
    }

    #[test]
    fn test_prepare_unrecognized() {
        assert_eq!(
            Statement::prepare(b"foobar"),
            Err(PrepareError::UnrecognizedStatement("foobar".into()))
        );
        assert_eq!(
            Statement::prepare(b""),
            Err(PrepareError::UnrecognizedStatement(String::new()))
        );
    }
}
