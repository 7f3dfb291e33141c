use crate::fixtures::{value_kind, FixtureSet};
use crate::types::{Summary, TestResult, TestStatus};
use serde_yaml::Value;
use tracing::warn;

pub const EMPTY_PROMPT_REASON: &str = "Prompt was empty or not a string.";

/// Classification seam. Implementations are pure: no I/O, no state changes.
pub trait Evaluator {
    fn evaluate(&self, category: &str, prompt: &Value) -> (TestStatus, Option<String>);
}

/// Default check: the prompt must be a string with at least one
/// non-whitespace character. Everything else fails, including non-string
/// YAML values, on purpose.
pub struct SimulatedEvaluator;

impl Evaluator for SimulatedEvaluator {
    fn evaluate(&self, _category: &str, prompt: &Value) -> (TestStatus, Option<String>) {
        run_simulated_test(prompt)
    }
}

pub fn run_simulated_test(prompt: &Value) -> (TestStatus, Option<String>) {
    match prompt {
        Value::String(s) if !s.trim().is_empty() => (TestStatus::Passed, None),
        _ => (TestStatus::Failed, Some(EMPTY_PROMPT_REASON.to_string())),
    }
}

/// Summary plus the report lines produced by skipped categories, in the
/// order they were encountered.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub summary: Summary,
    pub warnings: Vec<String>,
}

/// Evaluate every prompt of every list-typed category, in the fixture set's
/// fixed order. A category whose value is not a sequence contributes zero
/// results and one warning; the rest of the run is unaffected.
pub fn run_fixtures<E: Evaluator>(fixtures: &FixtureSet, evaluator: &E) -> RunOutput {
    let mut results = Vec::new();
    let mut warnings = Vec::new();
    for (category, value) in &fixtures.categories {
        let Value::Sequence(prompts) = value else {
            warn!(
                "Expected a list of prompts for category '{category}', but got {}. Skipping.",
                value_kind(value)
            );
            warnings.push(format!(
                "Warning: Prompts for category '{category}' is not a list. Skipping."
            ));
            continue;
        };
        for prompt in prompts {
            let (status, reason) = evaluator.evaluate(category, prompt);
            results.push(TestResult {
                prompt: display_prompt(prompt),
                category: category.clone(),
                status,
                reason,
            });
        }
    }
    let passed = results.iter().filter(|r| r.passed()).count();
    let failed = results.len() - passed;
    RunOutput {
        summary: Summary {
            total: results.len(),
            passed,
            failed,
            results,
        },
        warnings,
    }
}

// Strings go into the report verbatim; anything else renders as compact
// JSON so a failure stays on one line.
fn display_prompt(prompt: &Value) -> String {
    match prompt {
        Value::String(s) => s.clone(),
        other => serde_json::to_string(other)
            .unwrap_or_else(|_| value_kind(other).to_string()),
    }
}
