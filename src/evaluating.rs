use crate::error_handling::*;
use crate::operations::*;
use crate::parsing::*;

/// Walks an expression tree bottom-up. The angle mode is the only state and
/// changes only through `set_angle_mode`.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    angle_mode: AngleMode,
    constants: Constants,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_angle_mode(angle_mode: AngleMode) -> Self {
        Self {
            angle_mode,
            ..Self::default()
        }
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn set_angle_mode(&mut self, angle_mode: AngleMode) {
        tracing::debug!(from = %self.angle_mode, to = %angle_mode, "angle mode changed");
        self.angle_mode = angle_mode;
    }

    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    pub fn evaluate(&self, expression: &Expr) -> Result<f64> {
        let value = self.evaluate_node(expression)?;
        tracing::trace!(value, mode = %self.angle_mode, "evaluated");
        Ok(value)
    }

    fn evaluate_node(&self, expression: &Expr) -> Result<f64> {
        match expression {
            Expr::number(value) => Ok(*value),
            Expr::variable(name) => self
                .constants
                .get(name)
                .ok_or_else(|| CalcError::undefined(name.clone())),
            Expr::binary_op(left, operation, right) => {
                let left = self.evaluate_node(left)?;
                let right = self.evaluate_node(right)?;
                operation.call(left, right)
            }
            Expr::unary_op(operation, operand) => {
                let operand = self.evaluate_node(operand)?;
                operation.call(operand, self.angle_mode)
            }
        }
    }
}
