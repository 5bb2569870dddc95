use crate::ast::{CallExpr, Span};
use crate::call::{Call, Function};
use crate::error::WebcalcError;
use crate::resource_limits::ResourceLimits;
use crate::WebcalcResult;
use pest::iterators::{Pair, Pairs};
use pest::Parser;
use pest_derive::Parser;
use std::sync::Arc;

#[derive(Parser)]
#[grammar = "src/parser/webcalc.pest"]
pub struct CallParser;

/// Parse exactly one call, e.g. `factorial(5)`
pub fn parse_call(input: &str) -> WebcalcResult<Call> {
    let source: Arc<str> = Arc::from(input);
    let pairs =
        CallParser::parse(Rule::single_call, input).map_err(|e| syntax_error(e, &source))?;

    let expr = collect_exprs(pairs, &source)?
        .into_iter()
        .next()
        .ok_or_else(|| WebcalcError::Engine(format!("No parse result for '{}'", input)))?;

    resolve(&expr, &source)
}

/// Parse a batch of calls separated by `;` or newlines
///
/// Blank entries and `#` comments are skipped, so an empty batch is valid.
pub fn parse_calls(input: &str, limits: &ResourceLimits) -> WebcalcResult<Vec<Call>> {
    if input.len() > limits.max_input_bytes {
        return Err(WebcalcError::ResourceLimitExceeded {
            limit_name: "max_input_bytes".to_string(),
            limit_value: format!("{} bytes", limits.max_input_bytes),
            actual_value: format!("{} bytes", input.len()),
            suggestion: "Split the expressions into smaller batches".to_string(),
        });
    }

    let source: Arc<str> = Arc::from(input);
    let exprs = exprs_in(input, &source)?;

    if exprs.len() > limits.max_calls {
        return Err(WebcalcError::ResourceLimitExceeded {
            limit_name: "max_calls".to_string(),
            limit_value: limits.max_calls.to_string(),
            actual_value: exprs.len().to_string(),
            suggestion: "Split the expressions into smaller batches".to_string(),
        });
    }

    exprs.iter().map(|expr| resolve(expr, &source)).collect()
}

/// Parse call syntax only, without checking names, arity or argument range
pub fn parse_exprs(input: &str) -> WebcalcResult<Vec<CallExpr>> {
    exprs_in(input, &Arc::from(input))
}

fn exprs_in(input: &str, source: &Arc<str>) -> WebcalcResult<Vec<CallExpr>> {
    let pairs = CallParser::parse(Rule::call_list, input).map_err(|e| syntax_error(e, source))?;
    collect_exprs(pairs, source)
}

fn collect_exprs(pairs: Pairs<Rule>, source: &Arc<str>) -> WebcalcResult<Vec<CallExpr>> {
    let mut exprs = Vec::new();
    for pair in pairs {
        for inner in pair.into_inner() {
            if inner.as_rule() == Rule::call {
                exprs.push(parse_call_expr(inner, source)?);
            }
        }
    }
    Ok(exprs)
}

fn parse_call_expr(pair: Pair<Rule>, source: &Arc<str>) -> WebcalcResult<CallExpr> {
    let span = Span::from_pest_span(pair.as_span());
    let mut inner = pair.into_inner();

    let name_pair = inner
        .next()
        .ok_or_else(|| WebcalcError::Engine("Call without a function name".to_string()))?;
    let name = name_pair.as_str().to_string();
    let name_span = Span::from_pest_span(name_pair.as_span());

    let mut args = Vec::new();
    if let Some(arguments) = inner.next() {
        for integer in arguments.into_inner() {
            let literal = integer.as_str();
            let value = literal.parse::<i64>().map_err(|_| {
                WebcalcError::parse_with_suggestion(
                    format!("Integer literal '{}' is too large", literal),
                    Span::from_pest_span(integer.as_span()),
                    source.clone(),
                    range_hint(),
                )
            })?;
            args.push(value);
        }
    }

    Ok(CallExpr {
        name,
        args,
        name_span,
        span,
    })
}

fn resolve(expr: &CallExpr, source: &Arc<str>) -> WebcalcResult<Call> {
    let function = expr.name.parse::<Function>().map_err(|_| {
        WebcalcError::parse_with_suggestion(
            format!("Unknown function '{}'", expr.name),
            expr.name_span,
            source.clone(),
            format!("available functions are {}", available_functions()),
        )
    })?;

    Call::new(function, &expr.args).map_err(|e| {
        let suggestion = match e {
            WebcalcError::OutOfRange { .. } => range_hint(),
            _ => format!("call it as {}", function.signature()),
        };
        WebcalcError::parse_with_suggestion(e.to_string(), expr.span, source.clone(), suggestion)
    })
}

fn syntax_error(error: pest::error::Error<Rule>, source: &Arc<str>) -> WebcalcError {
    let (line, col) = match error.line_col {
        pest::error::LineColLocation::Pos(pos) => pos,
        pest::error::LineColLocation::Span(start, _) => start,
    };
    let (start, end) = match error.location {
        pest::error::InputLocation::Pos(pos) => (pos, pos),
        pest::error::InputLocation::Span(span) => span,
    };

    WebcalcError::parse_with_suggestion(
        error.variant.message().to_string(),
        Span {
            start,
            end,
            line,
            col,
        },
        source.clone(),
        "write calls as name(arg, ...), for example add(2, 3)",
    )
}

fn available_functions() -> String {
    Function::ALL
        .iter()
        .map(|f| f.signature())
        .collect::<Vec<_>>()
        .join(", ")
}

fn range_hint() -> String {
    format!("arguments must lie between {} and {}", i32::MIN, i32::MAX)
}
