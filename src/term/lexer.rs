//! Tokenizer for Erlang term files
//!
//! Produces the token stream consumed by [`super::parser`]. Only the subset of
//! Erlang's lexical grammar that occurs in configuration term files is covered:
//! atoms (plain and quoted), strings, numbers, character literals, binaries,
//! maps and the punctuation between them. `%` starts a comment running to the
//! end of the line.

use std::iter::Peekable;
use std::str::Chars;

use super::parser::TermParseError;

/// A lexical token with its source position
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub line: usize,
    pub column: usize,
}

/// Token kinds produced by the lexer
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Atom(String),
    Str(String),
    Int(i64),
    Float(f64),
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LParen,
    RParen,
    BinOpen,
    BinClose,
    MapOpen,
    Arrow,
    Pipe,
    Colon,
    Comma,
    Dot,
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
}

/// Tokenize a whole term document
///
/// # Errors
///
/// Returns a [`TermParseError`] on the first character that cannot start a
/// token, with the line and column where it was found.
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>, TermParseError> {
    let mut lexer = Lexer {
        chars: source.chars().peekable(),
        line: 1,
        column: 1,
    };
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

impl Lexer<'_> {
    fn error(&self, message: impl Into<String>) -> TermParseError {
        TermParseError {
            line: self.line,
            column: self.column,
            message: message.into(),
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.chars.peek() == Some(&expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn skip_trivia(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c.is_whitespace() {
                self.bump();
            } else if c == '%' {
                while let Some(&c) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.bump();
                }
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Result<Option<SpannedToken>, TermParseError> {
        self.skip_trivia();
        let (line, column) = (self.line, self.column);
        let Some(&c) = self.chars.peek() else {
            return Ok(None);
        };

        let token = match c {
            '{' => {
                self.bump();
                Token::LBrace
            }
            '}' => {
                self.bump();
                Token::RBrace
            }
            '[' => {
                self.bump();
                Token::LBracket
            }
            ']' => {
                self.bump();
                Token::RBracket
            }
            '(' => {
                self.bump();
                Token::LParen
            }
            ')' => {
                self.bump();
                Token::RParen
            }
            ',' => {
                self.bump();
                Token::Comma
            }
            '|' => {
                self.bump();
                Token::Pipe
            }
            '.' => {
                self.bump();
                Token::Dot
            }
            '<' => {
                self.bump();
                if self.eat('<') {
                    Token::BinOpen
                } else {
                    return Err(self.error("expected '<<'"));
                }
            }
            '>' => {
                self.bump();
                if self.eat('>') {
                    Token::BinClose
                } else {
                    return Err(self.error("expected '>>'"));
                }
            }
            '=' => {
                self.bump();
                if self.eat('>') {
                    Token::Arrow
                } else {
                    return Err(self.error("expected '=>'"));
                }
            }
            ':' => {
                self.bump();
                // := in map updates is equivalent to => for our purposes
                if self.eat('=') { Token::Arrow } else { Token::Colon }
            }
            '#' => {
                self.bump();
                if self.eat('{') {
                    Token::MapOpen
                } else {
                    return Err(self.error("expected '#{'"));
                }
            }
            '"' => self.scan_string()?,
            '\'' => self.scan_quoted_atom()?,
            '$' => self.scan_char_literal()?,
            '-' => {
                self.bump();
                match self.chars.peek() {
                    Some(d) if d.is_ascii_digit() => self.scan_number(true)?,
                    _ => return Err(self.error("expected a digit after '-'")),
                }
            }
            c if c.is_ascii_digit() => self.scan_number(false)?,
            c if c.is_alphabetic() || c == '_' => self.scan_atom(),
            other => return Err(self.error(format!("unexpected character '{other}'"))),
        };

        Ok(Some(SpannedToken {
            token,
            line,
            column,
        }))
    }

    fn scan_atom(&mut self) -> Token {
        let mut name = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_alphanumeric() || c == '_' || c == '@' {
                name.push(c);
                self.bump();
            } else {
                break;
            }
        }
        Token::Atom(name)
    }

    fn scan_quoted_atom(&mut self) -> Result<Token, TermParseError> {
        self.bump();
        let name = self.scan_delimited('\'')?;
        Ok(Token::Atom(name))
    }

    fn scan_string(&mut self) -> Result<Token, TermParseError> {
        self.bump();
        let value = self.scan_delimited('"')?;
        Ok(Token::Str(value))
    }

    fn scan_delimited(&mut self, delimiter: char) -> Result<String, TermParseError> {
        let mut value = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error(format!("unterminated '{delimiter}'"))),
                Some(c) if c == delimiter => return Ok(value),
                Some('\\') => {
                    let Some(escaped) = self.bump() else {
                        return Err(self.error("unterminated escape sequence"));
                    };
                    value.push(unescape(escaped));
                }
                Some(c) => value.push(c),
            }
        }
    }

    fn scan_char_literal(&mut self) -> Result<Token, TermParseError> {
        self.bump();
        match self.bump() {
            None => Err(self.error("unterminated character literal")),
            Some('\\') => {
                let Some(escaped) = self.bump() else {
                    return Err(self.error("unterminated escape sequence"));
                };
                Ok(Token::Int(unescape(escaped) as i64))
            }
            Some(c) => Ok(Token::Int(c as i64)),
        }
    }

    fn scan_number(&mut self, negative: bool) -> Result<Token, TermParseError> {
        let mut digits = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
                self.bump();
            } else {
                break;
            }
        }

        // 16#ff style radix literals
        if self.chars.peek() == Some(&'#') {
            self.bump();
            let radix: u32 = digits
                .parse()
                .map_err(|_| self.error("invalid number radix"))?;
            if !(2..=36).contains(&radix) {
                return Err(self.error("invalid number radix"));
            }
            let mut body = String::new();
            while let Some(&c) = self.chars.peek() {
                if c.is_ascii_alphanumeric() {
                    body.push(c);
                    self.bump();
                } else {
                    break;
                }
            }
            let value = i64::from_str_radix(&body, radix)
                .map_err(|_| self.error("invalid radix literal"))?;
            return Ok(Token::Int(if negative { -value } else { value }));
        }

        // A '.' is only part of the number when a digit follows; otherwise it
        // terminates the enclosing form.
        let mut is_float = false;
        if self.chars.peek() == Some(&'.') {
            let mut lookahead = self.chars.clone();
            lookahead.next();
            if lookahead.peek().is_some_and(char::is_ascii_digit) {
                is_float = true;
                digits.push('.');
                self.bump();
                while let Some(&c) = self.chars.peek() {
                    if c.is_ascii_digit() {
                        digits.push(c);
                        self.bump();
                    } else {
                        break;
                    }
                }
            }
        }
        if is_float && (self.eat('e') || self.eat('E')) {
            digits.push('e');
            if self.eat('-') {
                digits.push('-');
            } else if self.eat('+') {
                digits.push('+');
            }
            while let Some(&c) = self.chars.peek() {
                if c.is_ascii_digit() {
                    digits.push(c);
                    self.bump();
                } else {
                    break;
                }
            }
        }

        if is_float {
            let value: f64 = digits
                .parse()
                .map_err(|_| self.error("invalid float literal"))?;
            Ok(Token::Float(if negative { -value } else { value }))
        } else {
            let value: i64 = digits
                .parse()
                .map_err(|_| self.error("invalid integer literal"))?;
            Ok(Token::Int(if negative { -value } else { value }))
        }
    }
}

fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        's' => ' ',
        '0' => '\0',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source)
            .expect("tokenize should succeed")
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn test_tokenize_atoms() {
        assert_eq!(
            kinds("kernel stdlib cowboy_router"),
            vec![
                Token::Atom("kernel".to_string()),
                Token::Atom("stdlib".to_string()),
                Token::Atom("cowboy_router".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_quoted_atom() {
        assert_eq!(
            kinds("'odd name' 'with\\'quote'"),
            vec![
                Token::Atom("odd name".to_string()),
                Token::Atom("with'quote".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_strings_with_escapes() {
        assert_eq!(
            kinds(r#""1.0.0" "a\nb""#),
            vec![
                Token::Str("1.0.0".to_string()),
                Token::Str("a\nb".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_numbers() {
        assert_eq!(
            kinds("42 -7 3.14 16#ff"),
            vec![
                Token::Int(42),
                Token::Int(-7),
                Token::Float(3.14),
                Token::Int(255),
            ]
        );
    }

    #[test]
    fn test_tokenize_char_literal() {
        assert_eq!(kinds("$a $\\n"), vec![Token::Int(97), Token::Int(10)]);
    }

    #[test]
    fn test_form_dot_is_not_a_float() {
        assert_eq!(
            kinds("{vsn, 1}."),
            vec![
                Token::LBrace,
                Token::Atom("vsn".to_string()),
                Token::Comma,
                Token::Int(1),
                Token::RBrace,
                Token::Dot,
            ]
        );
    }

    #[test]
    fn test_tokenize_comments() {
        assert_eq!(
            kinds("%% header comment\ndeps % trailing\n[]"),
            vec![
                Token::Atom("deps".to_string()),
                Token::LBracket,
                Token::RBracket,
            ]
        );
    }

    #[test]
    fn test_tokenize_binary_and_map_punctuation() {
        assert_eq!(
            kinds("<<\"bin\">> #{a => 1}"),
            vec![
                Token::BinOpen,
                Token::Str("bin".to_string()),
                Token::BinClose,
                Token::MapOpen,
                Token::Atom("a".to_string()),
                Token::Arrow,
                Token::Int(1),
                Token::RBrace,
            ]
        );
    }

    #[test]
    fn test_tokenize_error_position() {
        let err = tokenize("{ok,\n  ^}").expect_err("should fail");
        assert_eq!(err.line, 2);
        assert_eq!(err.column, 3);
    }

    #[test]
    fn test_tokenize_unterminated_string() {
        assert!(tokenize("\"open").is_err());
    }
}
