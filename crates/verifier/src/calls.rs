//! Call graph checks: undefined callees and recursion.
//!
//! Recursion is not part of the language. A call from `f` to `g` is
//! reported when `f` can be reached again from `g`, which covers direct
//! self-calls and longer cycles alike.

use std::collections::HashSet;

use crate::error::VerifyError;
use crate::structural::ProgramContext;

/// Run the call checks.
pub fn check_calls(ctx: &ProgramContext) -> Vec<VerifyError> {
    let mut errors = Vec::new();

    let sites = ctx
        .top_level_calls
        .iter()
        .chain(ctx.functions.iter().flat_map(|f| f.calls.iter()));
    for site in sites {
        if ctx.function(&site.callee).is_none() {
            errors.push(VerifyError::UndefinedFunction {
                line: site.line,
                name: site.callee.clone(),
            });
        }
    }

    for func in &ctx.functions {
        for site in &func.calls {
            if reachable_from(ctx, &site.callee).contains(func.name.as_str()) {
                errors.push(VerifyError::RecursiveCall {
                    line: site.line,
                    name: site.callee.clone(),
                });
            }
        }
    }

    errors.sort_by_key(VerifyError::line);
    errors
}

/// Every function `start` can enter, including `start` itself.
fn reachable_from<'a>(ctx: &'a ProgramContext, start: &'a str) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    let mut pending = vec![start];

    while let Some(name) = pending.pop() {
        if !seen.insert(name) {
            continue;
        }
        if let Some(func) = ctx.function(name) {
            pending.extend(func.calls.iter().map(|c| c.callee.as_str()));
        }
    }

    seen
}
