use crate::error_handling::*;
use crate::operations::*;
use crate::scanning::*;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    number(f64),
    /// Constant reference, name already upper case.
    variable(String),
    binary_op(Box<Expr>, BinaryOperation, Box<Expr>),
    unary_op(UnaryOperation, Box<Expr>),
}

impl Expr {
    pub fn binary(left: Expr, operation: BinaryOperation, right: Expr) -> Self {
        Expr::binary_op(Box::new(left), operation, Box::new(right))
    }

    pub fn unary(operation: UnaryOperation, operand: Expr) -> Self {
        Expr::unary_op(operation, Box::new(operand))
    }
}

/// Fully parenthesized rendering, mostly useful for debugging precedence.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::number(value) => write!(f, "{}", value),
            Expr::variable(name) => write!(f, "{}", name),
            Expr::binary_op(left, operation, right) => match operation.precedence() {
                Some(_) => write!(f, "({} {} {})", left, operation, right),
                None => write!(f, "{}({}, {})", operation, left, right),
            },
            Expr::unary_op(UnaryOperation::negate, operand) => write!(f, "(-{})", operand),
            Expr::unary_op(operation, operand) => write!(f, "{}({})", operation, operand),
        }
    }
}

/// Recursive descent over the grammar
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/' | '%') factor)*
/// factor     := power ('^' power)*
/// power      := unary
/// unary      := '-' unary | '+' unary | function_name primary | primary
/// primary    := number | identifier | '(' expression ')'
/// ```
///
/// Every binary level is left associative, `^` included: `2^3^2` is `(2^3)^2`.
pub struct Parser<S: Scanner> {
    source: S,
}

impl<S: Scanner> Parser<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Parses one complete expression and requires the input to end there.
    pub fn parse(&mut self) -> Result<Expr> {
        let expression = self.parse_expression()?;
        if self.source.is_valid() {
            return Err(CalcError::did_not_expect(
                self.source.get_current().to_string(),
            ));
        }
        Ok(expression)
    }

    fn parse_expression(&mut self) -> Result<Expr> {
        self.parse_chain(1, Self::parse_term)
    }

    fn parse_term(&mut self) -> Result<Expr> {
        self.parse_chain(2, Self::parse_factor)
    }

    fn parse_factor(&mut self) -> Result<Expr> {
        self.parse_chain(3, Self::parse_power)
    }

    fn parse_power(&mut self) -> Result<Expr> {
        self.parse_unary()
    }

    /// Folds `operand (op operand)*` to the left for every operator whose
    /// precedence equals `precedence`.
    fn parse_chain(
        &mut self,
        precedence: u8,
        mut operand: impl FnMut(&mut Self) -> Result<Expr>,
    ) -> Result<Expr> {
        let mut left = operand(self)?;
        while let Some(operation) = self.current_operator(precedence) {
            self.source.advance();
            let right = operand(self)?;
            left = Expr::binary(left, operation, right);
        }
        Ok(left)
    }

    fn current_operator(&self, precedence: u8) -> Option<BinaryOperation> {
        match self.source.get_current() {
            Token::operator(symbol) => BinaryOperation::from_symbol(*symbol)
                .filter(|operation| operation.precedence() == Some(precedence)),
            _ => None,
        }
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        match self.source.get_current() {
            Token::operator('-') => {
                self.source.advance();
                let operand = self.parse_unary()?;
                Ok(Expr::unary(UnaryOperation::negate, operand))
            }
            Token::operator('+') => {
                self.source.advance();
                self.parse_unary()
            }
            Token::identifier(name) => match name.parse::<UnaryOperation>() {
                Ok(operation) => {
                    self.source.advance();
                    let operand = self.parse_primary()?;
                    Ok(Expr::unary(operation, operand))
                }
                Err(_) => self.parse_primary(),
            },
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        let expression = match self.source.get_current() {
            Token::number(value) => Expr::number(*value),
            Token::identifier(name) => Expr::variable(name.to_uppercase()),
            Token::left_paren => {
                self.source.advance();
                let expression = self.parse_expression()?;
                if self.source.get_current() != &Token::right_paren {
                    return Err(CalcError::unclosed_paren(
                        self.source.get_current().to_string(),
                    ));
                }
                expression
            }
            token => {
                return Err(CalcError::unexpected_token {
                    expected: "number, identifier, or '('".into(),
                    found: token.to_string(),
                })
            }
        };
        self.source.advance();
        Ok(expression)
    }
}

/// Tokenizes and parses `text`. Blank input is rejected before tokenizing.
pub fn parse(text: &str) -> Result<Expr> {
    if text.trim().is_empty() {
        return Err(CalcError::empty_expression);
    }

    let tokens = tokenize(text)?;
    let expression = Parser::new(TokenScanner::new(tokens)).parse()?;
    tracing::debug!(%expression, "parsed");
    Ok(expression)
}
