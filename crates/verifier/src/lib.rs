//! Kizhi verifier — static checks for loaded programs.
//!
//! The verifier checks a `Program` BEFORE execution. It collects ALL
//! errors (not just the first) and returns them. Running an unverified
//! program is allowed; the engine reports the same faults when it reaches
//! them, except recursion, which it can only bound.
//!
//! # Usage
//!
//! ```
//! use kizhi_loader::load;
//! use kizhi_verifier::verify;
//!
//! let program = load("call test\nprint a\ndef test\n    set a 5").unwrap();
//! assert!(verify(&program).is_ok());
//! ```
//!
//! # Passes
//!
//! 1. **Structural** — duplicate definitions, call site collection
//! 2. **Calls** — undefined callees, recursive cycles
//! 3. **Literals** — `set` values must be positive

pub mod calls;
pub mod error;
pub mod literals;
pub mod structural;

pub use error::VerifyError;
pub use structural::check_structural;

use kizhi_common::Program;

/// Verify a program.
///
/// Returns `Ok(())` if the program passes all checks, or
/// `Err(Vec<VerifyError>)` with all errors found.
pub fn verify(program: &Program) -> Result<(), Vec<VerifyError>> {
    let mut all_errors = Vec::new();

    // Pass 1: Structural (builds ProgramContext)
    let (ctx, structural_errors) = structural::check_structural(program);
    all_errors.extend(structural_errors);

    // Pass 2: Calls
    all_errors.extend(calls::check_calls(&ctx));

    // Pass 3: Literals
    all_errors.extend(literals::check_literals(program));

    if all_errors.is_empty() {
        Ok(())
    } else {
        Err(all_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kizhi_loader::load;

    #[test]
    fn empty_program_is_valid() {
        assert!(verify(&load("").unwrap()).is_ok());
    }

    #[test]
    fn multiple_errors_collected() {
        let program = load("set a 0\ncall nowhere\ndef f\n    call f").unwrap();
        let errors = verify(&program).unwrap_err();
        assert_eq!(errors.len(), 3, "expected three errors, got: {errors:?}");
    }

    #[test]
    fn runtime_fault_is_not_a_verification_error() {
        // Missing variables depend on execution order and are left to the engine.
        assert!(verify(&load("print a\nset a 5\nprint a").unwrap()).is_ok());
    }
}
