use std::iter::Peekable;
use std::str::CharIndices;
use crate::{Error, Result};

/// Parsed column value expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Field(String),
    Column(String),
    Literal(String),
    Number(f64),
    Call(Func, Vec<Expr>),
    List(Vec<Expr>),
    Or(Vec<Expr>),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Func {
    Concat,
    KubeObject,
    Subtract,
    Multiply,
}

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Open,
    Close,
    LBracket,
    RBracket,
    Comma,
    Or,
    Str(String),
    Num(f64),
    Ident(String),
}

const COLUMN: &str = "column.";

impl Func {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "concat"     => Some(Func::Concat),
            "kubeObject" => Some(Func::KubeObject),
            "subtract"   => Some(Func::Subtract),
            "multiply"   => Some(Func::Multiply),
            _            => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Func::Concat     => "concat",
            Func::KubeObject => "kubeObject",
            Func::Subtract   => "subtract",
            Func::Multiply   => "multiply",
        }
    }

    fn check(self, args: &[Expr]) -> Result<()> {
        let (ok, expected) = match self {
            Func::Concat     => (args.len() >= 2, "at least 2"),
            Func::KubeObject => (args.len() == 4, "4"),
            Func::Subtract   => (args.len() == 2, "2"),
            Func::Multiply   => (args.len() == 2, "2"),
        };

        match ok {
            true  => Ok(()),
            false => Err(Error::Arity {
                func:     self.name(),
                expected: expected,
                found:    args.len(),
            }),
        }
    }
}

impl Expr {
    /// Ids of the columns this expression references.
    pub fn columns(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.collect(&mut ids);
        ids
    }

    fn collect<'a>(&'a self, ids: &mut Vec<&'a str>) {
        match self {
            Expr::Column(id)     => ids.push(id),
            Expr::Call(_, args)  => args.iter().for_each(|e| e.collect(ids)),
            Expr::List(items)    => items.iter().for_each(|e| e.collect(ids)),
            Expr::Or(alts)       => alts.iter().for_each(|e| e.collect(ids)),
            Expr::Field(_)       => (),
            Expr::Literal(_)     => (),
            Expr::Number(_)      => (),
        }
    }
}

/// Parse an expression:
///
/// ```text
/// expr := alt ("or" alt)*
/// alt  := "[" expr ("," expr)* "]" | func "(" expr ("," expr)* ")" | term
/// term := column.<id> | <field> | '<string>' | <number>
/// ```
pub fn parse(src: &str) -> Result<Expr> {
    let tokens = lex(src)?;
    let mut parser = Parser {
        src:    src,
        tokens: tokens,
        pos:    0,
    };

    let expr = parser.expr()?;

    match parser.tokens.get(parser.pos) {
        Some(t) => Err(parser.error(format!("unexpected {:?}", t))),
        None    => Ok(expr),
    }
}

struct Parser<'a> {
    src:    &'a str,
    tokens: Vec<Token>,
    pos:    usize,
}

impl<'a> Parser<'a> {
    fn expr(&mut self) -> Result<Expr> {
        let mut alts = vec![self.alt()?];

        while self.peek() == Some(&Token::Or) {
            self.pos += 1;
            alts.push(self.alt()?);
        }

        Ok(match alts.len() {
            1 => alts.remove(0),
            _ => Expr::Or(alts),
        })
    }

    fn alt(&mut self) -> Result<Expr> {
        match self.next() {
            Some(Token::LBracket) => Ok(Expr::List(self.items(Token::RBracket)?)),
            Some(Token::Ident(name)) if self.peek() == Some(&Token::Open) => {
                self.pos += 1;
                let args = self.items(Token::Close)?;
                self.call(&name, args)
            },
            Some(Token::Ident(name)) => self.reference(name),
            Some(Token::Str(s))      => Ok(Expr::Literal(s)),
            Some(Token::Num(n))      => Ok(Expr::Number(n)),
            Some(t)                  => Err(self.error(format!("unexpected {:?}", t))),
            None                     => Err(self.error("unexpected end of input")),
        }
    }

    fn items(&mut self, close: Token) -> Result<Vec<Expr>> {
        let mut items = vec![self.expr()?];
        loop {
            match self.next() {
                Some(Token::Comma)      => items.push(self.expr()?),
                Some(t) if t == close   => return Ok(items),
                Some(t)                 => return Err(self.error(format!("unexpected {:?}", t))),
                None                    => return Err(self.error(format!("missing {:?}", close))),
            }
        }
    }

    fn call(&self, name: &str, args: Vec<Expr>) -> Result<Expr> {
        let func = Func::from_name(name).ok_or_else(|| {
            self.error(format!("unknown function {}", name))
        })?;

        func.check(&args)?;

        if func == Func::Multiply {
            match &args[1] {
                Expr::Number(_)                             => (),
                Expr::Literal(s) if s.parse::<f64>().is_ok() => (),
                _ => return Err(self.error("multiply factor must be a numeric literal")),
            }
        }

        Ok(Expr::Call(func, args))
    }

    fn reference(&self, name: String) -> Result<Expr> {
        if !name.starts_with(COLUMN) {
            return Ok(Expr::Field(name));
        }

        match &name[COLUMN.len()..] {
            "" => Err(self.error("missing column id")),
            id => Ok(Expr::Column(id.to_owned())),
        }
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn error<S: Into<String>>(&self, msg: S) -> Error {
        Error::Parse(self.src.to_owned(), msg.into())
    }
}

fn lex(src: &str) -> Result<Vec<Token>> {
    let error  = |msg: String| Error::Parse(src.to_owned(), msg);
    let mut cs = src.char_indices().peekable();
    let mut ts = Vec::new();

    while let Some(&(i, c)) = cs.peek() {
        let token = match c {
            _ if c.is_whitespace() => {
                cs.next();
                continue;
            },
            '(' => Token::Open,
            ')' => Token::Close,
            '[' => Token::LBracket,
            ']' => Token::RBracket,
            ',' => Token::Comma,
            '\'' => {
                cs.next();
                let s = take(&mut cs, |c| c != '\'');
                match cs.next() {
                    Some(_) => ts.push(Token::Str(s)),
                    None    => return Err(error(format!("unterminated string at {}", i))),
                }
                continue;
            },
            '-' | '0'..='9' => {
                let s = take(&mut cs, |c| c == '-' || c == '+' || c == '.' || c.is_ascii_alphanumeric());
                match s.parse() {
                    Ok(n)  => ts.push(Token::Num(n)),
                    Err(_) => return Err(error(format!("invalid number '{}' at {}", s, i))),
                }
                continue;
            },
            _ if c.is_ascii_alphabetic() || c == '_' => {
                let s = take(&mut cs, |c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
                ts.push(match s.as_str() {
                    "or" => Token::Or,
                    _    => Token::Ident(s),
                });
                continue;
            },
            _ => return Err(error(format!("unexpected '{}' at {}", c, i))),
        };

        cs.next();
        ts.push(token);
    }

    Ok(ts)
}

fn take<F: Fn(char) -> bool>(cs: &mut Peekable<CharIndices>, accept: F) -> String {
    let mut s = String::new();
    while let Some(&(_, c)) = cs.peek() {
        if !accept(c) {
            break;
        }
        s.push(c);
        cs.next();
    }
    s
}
