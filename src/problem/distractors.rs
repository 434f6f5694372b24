//! Plausible wrong-answer generation.
//!
//! Candidates come from a list of common-mistake strategies (near misses,
//! doubling and halving, sign errors, operand confusion, off-by-one, digit
//! reversal) drawn at random for a bounded number of attempts. Strategy
//! candidates must stay plausibly close to the correct answer; when the
//! budget runs out (an answer of 0 admits nothing under the magnitude
//! bound), a widening integer window takes over with uniqueness as the only
//! constraint, finishing with an outward sweep that cannot fail.

use rand::Rng;

use crate::error::{GameError, GameResult};
use crate::problem::{Operator, Problem};

/// Random strategy draws before the widened fallback takes over.
const MAX_STRATEGY_ATTEMPTS: u32 = 40;
/// Random fallback draws before the deterministic sweep.
const MAX_FALLBACK_ATTEMPTS: u32 = 64;
const STRATEGY_COUNT: u32 = 13;

/// Produce `count` unique wrong answers for a problem, none equal to the
/// correct one. Always succeeds.
pub fn generate_distractors(problem: &Problem, count: usize, rng: &mut impl Rng) -> Vec<f64> {
    let mut wrong = Vec::with_capacity(count);
    if let Err(e) = strategy_pass(problem, count, &mut wrong, rng) {
        log::debug!("{e}; widening candidate window");
        widened_fallback(problem.answer, count, &mut wrong, rng);
    }
    wrong
}

fn strategy_pass(
    problem: &Problem,
    count: usize,
    wrong: &mut Vec<f64>,
    rng: &mut impl Rng,
) -> GameResult<()> {
    let c = problem.answer;
    for _ in 0..MAX_STRATEGY_ATTEMPTS {
        if wrong.len() == count {
            break;
        }
        let w = strategy(rng.random_range(0..STRATEGY_COUNT), problem, rng);
        if w != c && !wrong.contains(&w) && plausible(w, c) {
            wrong.push(w);
        }
    }
    if wrong.len() == count {
        Ok(())
    } else {
        Err(GameError::DistractorsExhausted {
            answer: c,
            attempts: MAX_STRATEGY_ATTEMPTS,
        })
    }
}

/// Strategy candidates must sit near the answer and within 5x its
/// magnitude. Both bounds are vacuous traps at answer 0: nothing passes,
/// and the fallback owns that case.
fn plausible(w: f64, c: f64) -> bool {
    let max_diff = (c.abs() * 2.0).max(10.0);
    (w - c).abs() <= max_diff && w.abs() <= c.abs() * 5.0
}

fn strategy(idx: u32, problem: &Problem, rng: &mut impl Rng) -> f64 {
    let c = problem.answer;
    match idx {
        // near misses
        0 => c + near_span(c, rng),
        1 => c - near_span(c, rng),
        // doubled / halved / sign error
        2 => c * 2.0,
        3 => {
            if c != 0.0 {
                (c / 2.0).floor()
            } else {
                1.0
            }
        }
        4 => -c,
        // operand confusion, only when the statement exposes operands
        5 => match problem.operands {
            Some((a, b)) if problem.op != Some(Operator::Add) => a + b,
            _ => c + 1.0,
        },
        6 => match problem.operands {
            Some((a, b)) if problem.op != Some(Operator::Sub) => a - b,
            _ => c - 1.0,
        },
        7 => match problem.operands {
            Some((a, b)) if problem.op != Some(Operator::Mul) => a * b,
            _ => c * 2.0,
        },
        // off by one
        8 => c + 1.0,
        9 => c - 1.0,
        // digit reversal for multi-digit integral answers
        10 => {
            if c.fract() == 0.0 && c.abs() > 9.0 {
                reverse_digits(c.abs() as i64) as f64 * c.signum()
            } else {
                c + 2.0
            }
        }
        // wider offsets
        11 => c + far_span(c, rng),
        _ => c - far_span(c, rng),
    }
}

fn near_span(c: f64, rng: &mut impl Rng) -> f64 {
    let hi = ((c.abs() * 0.2) as i64).max(2);
    rng.random_range(1..=hi) as f64
}

fn far_span(c: f64, rng: &mut impl Rng) -> f64 {
    let hi = ((c.abs() * 0.5) as i64).max(5);
    rng.random_range(3..=hi) as f64
}

fn reverse_digits(mut n: i64) -> i64 {
    let mut out = 0;
    while n > 0 {
        out = out * 10 + n % 10;
        n /= 10;
    }
    out
}

/// Integer sampling around the answer, window growing by one per draw;
/// uniqueness and inequality with the answer are the only constraints.
fn widened_fallback(c: f64, count: usize, wrong: &mut Vec<f64>, rng: &mut impl Rng) {
    let base = c.trunc() as i64;
    for round in 0..MAX_FALLBACK_ATTEMPTS {
        if wrong.len() == count {
            return;
        }
        let window = 20 + round as i64;
        let w = if c.abs() < 10.0 {
            rng.random_range((base - window).max(-window)..=base + window) as f64
        } else {
            (c * rng.random_range(0.2..1.8)).trunc()
        };
        if w != c && !wrong.contains(&w) {
            wrong.push(w);
        }
    }
    // outward integer sweep; terminates unconditionally
    let mut k = 1;
    while wrong.len() < count {
        for w in [(base + k) as f64, (base - k) as f64] {
            if wrong.len() < count && w != c && !wrong.contains(&w) {
                wrong.push(w);
            }
        }
        k += 1;
    }
}
