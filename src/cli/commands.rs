use log::{debug, info};
use serde_json::{json, Value};

use crate::calculator::{self, Outcome};
use crate::config::OutputFormat;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide => "Division",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    pub fn apply(&self, a: f64, b: f64) -> Outcome<f64> {
        match self {
            Operation::Add => Ok(calculator::add(a, b)),
            Operation::Subtract => Ok(calculator::subtract(a, b)),
            Operation::Multiply => Ok(calculator::multiply(a, b)),
            Operation::Divide => calculator::divide(a, b),
        }
    }
}

/// One evaluated operation together with its operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
    pub outcome: Outcome<f64>,
}

impl Calculation {
    pub fn evaluate(operation: Operation, a: f64, b: f64) -> Self {
        let outcome = operation.apply(a, b);
        debug!(
            "{name}({a}, {b}) -> {outcome:?}",
            name = operation.name()
        );
        Self {
            operation,
            a,
            b,
            outcome,
        }
    }

    /// `10 / 2 = 5`, or the error text when the operation failed.
    pub fn expression(&self) -> String {
        match self.outcome {
            Ok(result) => format!(
                "{a} {sym} {b} = {result}",
                a = self.a,
                sym = self.operation.symbol(),
                b = self.b
            ),
            Err(e) => calculator::error_to_string(e),
        }
    }

    /// Labelled line as printed by the demo.
    pub fn demo_line(&self) -> String {
        match self.outcome {
            Ok(_) => format!("{}: {}", self.operation.label(), self.expression()),
            Err(_) => format!("{} error: {}", self.operation.label(), self.expression()),
        }
    }

    pub fn to_json(&self) -> Value {
        match self.outcome {
            Ok(result) => json!({
                "operation": self.operation.name(),
                "a": self.a,
                "b": self.b,
                "result": result,
            }),
            Err(e) => json!({
                "operation": self.operation.name(),
                "a": self.a,
                "b": self.b,
                "error": calculator::error_to_string(e),
            }),
        }
    }
}

pub fn demo(a: f64, b: f64, format: OutputFormat) -> Result<()> {
    demo_internal(a, b, format, true).map(|_| ())
}

/// Run the fixed sample computations on `a` and `b`, then divide `a` by zero.
/// Returns the rendered report.
pub fn demo_internal(
    a: f64,
    b: f64,
    format: OutputFormat,
    output_to_console: bool,
) -> Result<String> {
    info!("Running demo with a = {a}, b = {b}");

    let calculations: Vec<Calculation> = Operation::ALL
        .iter()
        .map(|op| Calculation::evaluate(*op, a, b))
        .collect();
    let by_zero = Calculation::evaluate(Operation::Divide, a, 0.0);

    let report = match format {
        OutputFormat::Text => {
            let mut lines = vec![
                "Calculator Demo".to_string(),
                "================================".to_string(),
                String::new(),
                format!("a = {a}, b = {b}"),
                String::new(),
            ];
            lines.extend(calculations.iter().map(Calculation::demo_line));
            lines.push(String::new());
            lines.push("Testing division by zero:".to_string());
            lines.push(by_zero.demo_line());
            lines.join("\n")
        }
        OutputFormat::Json => {
            let results: Vec<Value> = calculations.iter().map(Calculation::to_json).collect();
            serde_json::to_string_pretty(&json!({
                "a": a,
                "b": b,
                "results": results,
                "division_by_zero": by_zero.to_json(),
            }))?
        }
    };

    if output_to_console {
        println!("{report}");
    }

    Ok(report)
}

pub fn calculate(operation: Operation, a: f64, b: f64, format: OutputFormat) -> Result<f64> {
    calculate_internal(operation, a, b, format, true)
}

/// Evaluate a single operation. A failed outcome is reported in the chosen
/// format and then returned as an error.
pub fn calculate_internal(
    operation: Operation,
    a: f64,
    b: f64,
    format: OutputFormat,
    output_to_console: bool,
) -> Result<f64> {
    info!("Calculating {name} of {a} and {b}", name = operation.name());

    let calculation = Calculation::evaluate(operation, a, b);

    if output_to_console {
        match format {
            OutputFormat::Text => {
                if calculation.outcome.is_ok() {
                    println!("{}", calculation.expression());
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&calculation.to_json())?);
            }
        }
    }

    Ok(calculation.outcome?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, CalculatorError};

    #[test]
    fn test_operation_apply() {
        assert_eq!(Operation::Add.apply(10.0, 3.0), Ok(13.0));
        assert_eq!(Operation::Subtract.apply(10.0, 3.0), Ok(7.0));
        assert_eq!(Operation::Multiply.apply(10.0, 3.0), Ok(30.0));
        assert_eq!(Operation::Divide.apply(9.0, 3.0), Ok(3.0));
        assert_eq!(
            Operation::Divide.apply(9.0, 0.0),
            Err(CalculatorError::DivisionByZero)
        );
    }

    #[test]
    fn test_calculation_text() {
        let calc = Calculation::evaluate(Operation::Add, 10.0, 3.0);
        assert_eq!(calc.expression(), "10 + 3 = 13");
        assert_eq!(calc.demo_line(), "Addition: 10 + 3 = 13");

        let calc = Calculation::evaluate(Operation::Divide, 10.0, 0.0);
        assert_eq!(calc.demo_line(), "Division error: Division by zero error");
    }

    #[test]
    fn test_calculation_json() {
        let calc = Calculation::evaluate(Operation::Multiply, 2.5, 4.0);
        let value = calc.to_json();
        assert_eq!(value["operation"], "multiply");
        assert_eq!(value["result"], 10.0);
        assert!(value.get("error").is_none());

        let calc = Calculation::evaluate(Operation::Divide, 1.0, 1e-20);
        let value = calc.to_json();
        assert_eq!(value["error"], "Division by zero error");
        assert!(value.get("result").is_none());
    }

    #[test]
    fn test_demo_text_report() {
        let report = demo_internal(10.0, 3.0, OutputFormat::Text, false).unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Calculator Demo");
        assert!(lines.contains(&"a = 10, b = 3"));
        assert!(lines.contains(&"Addition: 10 + 3 = 13"));
        assert!(lines.contains(&"Subtraction: 10 - 3 = 7"));
        assert!(lines.contains(&"Multiplication: 10 * 3 = 30"));
        assert!(lines.contains(&"Division: 10 / 3 = 3.3333333333333335"));
        assert_eq!(lines[lines.len() - 2], "Testing division by zero:");
        assert_eq!(lines[lines.len() - 1], "Division error: Division by zero error");
    }

    #[test]
    fn test_demo_json_report() {
        let report = demo_internal(10.0, 2.0, OutputFormat::Json, false).unwrap();
        let value: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(value["results"].as_array().unwrap().len(), 4);
        assert_eq!(value["results"][3]["result"], 5.0);
        assert_eq!(value["division_by_zero"]["error"], "Division by zero error");
    }

    #[test]
    fn test_calculate_internal() {
        let result = calculate_internal(Operation::Subtract, 5.0, 8.0, OutputFormat::Text, false);
        assert_eq!(result.unwrap(), -3.0);

        let result = calculate_internal(Operation::Divide, 5.0, 0.0, OutputFormat::Json, false);
        assert!(matches!(
            result,
            Err(AppError::Calculation(CalculatorError::DivisionByZero))
        ));
    }
}
