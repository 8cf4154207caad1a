// Interpreter Pattern - evaluate an expression tree
// Terminals yield literals; non-terminals evaluate both children and combine
// them. Trees are immutable once built.

use std::io::Write;

use crate::config::CatalogConfig;
use crate::error::{PatternError, Result};

pub trait Expression {
    fn interpret(&self) -> Result<i64>;

    /// Infix rendering with every binary node, the root included, wrapped
    /// in parentheses.
    fn render(&self) -> String;
}

pub struct Number(pub i64);

impl Expression for Number {
    fn interpret(&self) -> Result<i64> {
        Ok(self.0)
    }

    fn render(&self) -> String {
        self.0.to_string()
    }
}

macro_rules! binary_expression {
    ($name:ident, $symbol:literal, $checked:ident) => {
        pub struct $name {
            left: Box<dyn Expression>,
            right: Box<dyn Expression>,
        }

        impl $name {
            pub fn new(left: impl Expression + 'static, right: impl Expression + 'static) -> Self {
                Self {
                    left: Box::new(left),
                    right: Box::new(right),
                }
            }
        }

        impl Expression for $name {
            fn interpret(&self) -> Result<i64> {
                let left = self.left.interpret()?;
                let right = self.right.interpret()?;
                left.$checked(right)
                    .ok_or(PatternError::ArithmeticOverflow { op: $symbol })
            }

            fn render(&self) -> String {
                format!("({} {} {})", self.left.render(), $symbol, self.right.render())
            }
        }
    };
}

binary_expression!(Addition, "+", checked_add);
binary_expression!(Subtraction, "-", checked_sub);
binary_expression!(Multiplication, "*", checked_mul);

// ============================================================================
// Driver
// ============================================================================

pub fn demo(out: &mut dyn Write, _config: &CatalogConfig) -> Result<()> {
    // 1 + 2 + 3
    let expression = Addition::new(Addition::new(Number(1), Number(2)), Number(3));
    writeln!(out, "Expression: {}", expression.render())?;
    writeln!(out, "Result: {}", expression.interpret()?)?;

    // (10 - 4) * 7
    let expression = Multiplication::new(Subtraction::new(Number(10), Number(4)), Number(7));
    writeln!(out, "Expression: {}", expression.render())?;
    writeln!(out, "Result: {}", expression.interpret()?)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
