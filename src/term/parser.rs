//! Recursive-descent parser for Erlang term documents
//!
//! A document is a sequence of dot-terminated top-level forms, which is what
//! both `rebar.config` and `.app`/`.app.src` resource files contain. The
//! parser is deliberately permissive: binaries, maps, improper list tails and
//! parenthesized terms are all accepted, so that a modern `rebar.config` with
//! relx or profile sections still produces a usable term tree. A document that
//! cannot be parsed yields a [`TermParseError`]; callers treat that as "no
//! information available" rather than a fatal condition.

use thiserror::Error;

use super::Term;
use super::lexer::{self, SpannedToken, Token};

/// Failure to parse a term document, with the offending source position
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}, column {column}: {message}")]
pub struct TermParseError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

/// Parse a term document into its top-level forms
///
/// The trailing dot after the final form may be omitted. Parsing the same
/// byte content always yields a structurally identical result.
///
/// # Errors
///
/// Returns a [`TermParseError`] for unbalanced delimiters, unterminated
/// literals or any construct outside the supported term subset.
pub fn parse(source: &str) -> Result<Vec<Term>, TermParseError> {
    let tokens = lexer::tokenize(source)?;
    let mut parser = Parser { tokens, pos: 0 };
    let mut forms = Vec::new();
    while !parser.at_end() {
        forms.push(parser.parse_term()?);
        if !parser.at_end() {
            parser.expect(&Token::Dot)?;
        }
    }
    Ok(forms)
}

struct Parser {
    tokens: Vec<SpannedToken>,
    pos: usize,
}

impl Parser {
    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    fn bump(&mut self) -> Option<SpannedToken> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn error_here(&self, message: impl Into<String>) -> TermParseError {
        let (line, column) = self
            .tokens
            .get(self.pos.min(self.tokens.len().saturating_sub(1)))
            .map_or((1, 1), |t| (t.line, t.column));
        TermParseError {
            line,
            column,
            message: message.into(),
        }
    }

    fn expect(&mut self, expected: &Token) -> Result<(), TermParseError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.error_here(format!("expected {expected:?}")))
        }
    }

    fn parse_term(&mut self) -> Result<Term, TermParseError> {
        let Some(token) = self.bump() else {
            return Err(self.error_here("unexpected end of input"));
        };
        match token.token {
            Token::Atom(name) => Ok(Term::Atom(name)),
            Token::Str(value) => Ok(Term::Str(value)),
            Token::Int(value) => Ok(Term::Int(value)),
            Token::Float(value) => Ok(Term::Float(value)),
            Token::LBrace => self.parse_tuple(),
            Token::LBracket => self.parse_list(),
            Token::BinOpen => self.parse_binary(),
            Token::MapOpen => self.parse_map(),
            Token::LParen => {
                let inner = self.parse_term()?;
                self.expect(&Token::RParen)?;
                Ok(inner)
            }
            other => Err(self.error_here(format!("unexpected {other:?}"))),
        }
    }

    fn parse_tuple(&mut self) -> Result<Term, TermParseError> {
        let mut elements = Vec::new();
        if self.eat(&Token::RBrace) {
            return Ok(Term::Tuple(elements));
        }
        loop {
            elements.push(self.parse_term()?);
            if self.eat(&Token::Comma) {
                continue;
            }
            self.expect(&Token::RBrace)?;
            return Ok(Term::Tuple(elements));
        }
    }

    fn parse_list(&mut self) -> Result<Term, TermParseError> {
        let mut elements = Vec::new();
        if self.eat(&Token::RBracket) {
            return Ok(Term::List(elements));
        }
        loop {
            elements.push(self.parse_term()?);
            if self.eat(&Token::Comma) {
                continue;
            }
            // Improper tail: keep the tail term as a trailing element
            if self.eat(&Token::Pipe) {
                elements.push(self.parse_term()?);
            }
            self.expect(&Token::RBracket)?;
            return Ok(Term::List(elements));
        }
    }

    fn parse_binary(&mut self) -> Result<Term, TermParseError> {
        let mut value = String::new();
        if self.eat(&Token::BinClose) {
            return Ok(Term::Binary(value));
        }
        loop {
            match self.bump().map(|t| t.token) {
                Some(Token::Str(part)) => value.push_str(&part),
                Some(Token::Int(byte)) => {
                    if let Some(c) = u8::try_from(byte).ok().map(char::from) {
                        value.push(c);
                    }
                }
                Some(other) => {
                    return Err(self.error_here(format!("unexpected {other:?} in binary")));
                }
                None => return Err(self.error_here("unterminated binary")),
            }
            // Skip a size specifier such as the 8 in <<1:8>>
            if self.eat(&Token::Colon) {
                self.bump();
            }
            if self.eat(&Token::Comma) {
                continue;
            }
            self.expect(&Token::BinClose)?;
            return Ok(Term::Binary(value));
        }
    }

    fn parse_map(&mut self) -> Result<Term, TermParseError> {
        let mut pairs = Vec::new();
        if self.eat(&Token::RBrace) {
            return Ok(Term::Map(pairs));
        }
        loop {
            let key = self.parse_term()?;
            self.expect(&Token::Arrow)?;
            let value = self.parse_term()?;
            pairs.push((key, value));
            if self.eat(&Token::Comma) {
                continue;
            }
            self.expect(&Token::RBrace)?;
            return Ok(Term::Map(pairs));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_app_resource_document() {
        let source = r#"
            %% -*- erlang -*-
            {application, myapp,
             [{description, "My application"},
              {vsn, "0.1.0"},
              {applications, [kernel, stdlib, cowboy]}]}.
        "#;
        let forms = parse(source).expect("parse should succeed");
        assert_eq!(forms.len(), 1);
        let Term::Tuple(elements) = &forms[0] else {
            panic!("expected a tuple form");
        };
        assert_eq!(elements[0], Term::Atom("application".to_string()));
        assert_eq!(elements[1], Term::Atom("myapp".to_string()));
        assert!(matches!(elements[2], Term::List(_)));
    }

    #[test]
    fn test_parse_rebar_config_document() {
        let source = r#"
            {erl_opts, [debug_info, {i, "include"}]}.
            {deps, [
                cowboy,
                {jsx, "3.1.0"},
                {meck, {git, "https://github.com/eproxus/meck.git", {tag, "0.9.2"}}}
            ]}.
        "#;
        let forms = parse(source).expect("parse should succeed");
        assert_eq!(forms.len(), 2);
        assert!(matches!(&forms[1], Term::Tuple(e) if e[0] == Term::Atom("deps".to_string())));
    }

    #[test]
    fn test_parse_tolerates_missing_final_dot() {
        let forms = parse("{deps, []}").expect("parse should succeed");
        assert_eq!(forms.len(), 1);
    }

    #[test]
    fn test_parse_empty_document() {
        assert_eq!(parse("").expect("parse should succeed"), vec![]);
        assert_eq!(parse("  %% only comments\n").expect("ok"), vec![]);
    }

    #[test]
    fn test_parse_binaries_and_maps() {
        let forms = parse(r#"{relx, [#{name => <<"rel">>, <<"vsn">> => "1"}]}."#)
            .expect("parse should succeed");
        let Term::Tuple(elements) = &forms[0] else {
            panic!("expected a tuple form");
        };
        let Term::List(items) = &elements[1] else {
            panic!("expected a list");
        };
        let Term::Map(pairs) = &items[0] else {
            panic!("expected a map");
        };
        assert_eq!(pairs[0].1, Term::Binary("rel".to_string()));
        assert_eq!(pairs[1].0, Term::Binary("vsn".to_string()));
    }

    #[test]
    fn test_parse_improper_list_tail() {
        let forms = parse("[a | b].").expect("parse should succeed");
        let Term::List(elements) = &forms[0] else {
            panic!("expected a list form");
        };
        assert_eq!(elements.len(), 2);
    }

    #[test]
    fn test_parse_unbalanced_tuple_fails() {
        let err = parse("{deps, [a, b}.").expect_err("should fail");
        assert!(err.message.contains("expected"));
    }

    #[test]
    fn test_parse_missing_dot_between_forms_fails() {
        assert!(parse("{a, 1} {b, 2}.").is_err());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let source = "{deps, [cowboy, {jsx, \"3.1.0\"}]}.\n{plugins, [rebar3_hex]}.";
        let first = parse(source).expect("parse should succeed");
        let second = parse(source).expect("parse should succeed");
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_nested_depth() {
        let forms = parse("{a, {b, {c, {d, [{e, [f]}]}}}}.").expect("parse should succeed");
        assert_eq!(forms.len(), 1);
    }
}
