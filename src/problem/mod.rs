//! Procedural math problem generation.
//!
//! A [`Problem`] is a pure function of a difficulty tier (1-15) and an
//! injected RNG: a displayable statement, the correct answer, and three
//! plausible distractors. Tiers step through families: basic arithmetic,
//! all four operations, powers and roots, simple algebra, then trig,
//! quadratics, geometry, and logarithms.

mod distractors;
mod generate;

pub use distractors::generate_distractors;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::consts;

/// Arithmetic operator attached to expression-style problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Root,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "×",
            Operator::Div => "÷",
            Operator::Pow => "^",
            Operator::Root => "√",
        }
    }
}

/// Shape of a two-operator mixed expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MixedForm {
    /// a×b + c
    MulAdd,
    /// a×b - c
    MulSub,
    /// a + b×c
    AddMul,
    /// a - b×c
    SubMul,
}

impl MixedForm {
    pub fn eval(self, a: i64, b: i64, c: i64) -> i64 {
        match self {
            MixedForm::MulAdd => a * b + c,
            MixedForm::MulSub => a * b - c,
            MixedForm::AddMul => a + b * c,
            MixedForm::SubMul => a - b * c,
        }
    }

    /// Operator joining the product and the lone term.
    pub fn outer_op(self) -> Operator {
        match self {
            MixedForm::MulAdd | MixedForm::AddMul => Operator::Add,
            MixedForm::MulSub | MixedForm::SubMul => Operator::Sub,
        }
    }

    /// Statement text; always describes the expression `eval` computes.
    pub fn text(self, a: i64, b: i64, c: i64) -> String {
        let op = self.outer_op();
        match self {
            MixedForm::MulAdd | MixedForm::MulSub => {
                format!("{a}×{b}{}{c}", op.symbol())
            }
            MixedForm::AddMul | MixedForm::SubMul => {
                format!("{a}{}{b}×{c}", op.symbol())
            }
        }
    }
}

/// Trig function with a precomputed standard-angle table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrigFn {
    Sin,
    Cos,
}

impl TrigFn {
    pub fn name(&self) -> &'static str {
        match self {
            TrigFn::Sin => "sin",
            TrigFn::Cos => "cos",
        }
    }

    /// (angle in degrees, value) pairs the generator draws from.
    pub fn table(&self) -> &'static [(u32, f64)] {
        match self {
            TrigFn::Sin => &[(0, 0.0), (30, 0.5), (45, 0.707), (60, 0.866), (90, 1.0)],
            TrigFn::Cos => &[(0, 1.0), (30, 0.866), (45, 0.707), (60, 0.5), (90, 0.0)],
        }
    }
}

/// Geometry problem shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Square,
    Circle,
    Triangle,
    Rectangle,
}

/// Problem family plus the construction payload where recomputation is
/// meaningful (tests verify stated answers against stated coefficients).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProblemKind {
    /// `num1 op num2` with the operands stored on the problem
    Arithmetic,
    /// base^exp (covers squares, cubes, and general powers)
    Power { base: i64, exp: u32 },
    /// √radicand of a perfect square
    Root { radicand: i64 },
    /// Two-operator expression over (a, b, c)
    Mixed { a: i64, b: i64, c: i64, form: MixedForm },
    /// a·x + b = c (or a·x - b = c), solved for x
    Linear { a: i64, b: i64, c: i64, subtracts: bool },
    /// x + y = sum, x - y = diff; asks for x or y
    System { sum: i64, diff: i64, wants_x: bool },
    /// sin/cos of a standard angle
    Trig { func: TrigFn, angle: u32 },
    /// x² + bx + c = 0 built from integer roots; asks for the root of
    /// smaller absolute value
    Quadratic { b: i64, c: i64 },
    /// Area or perimeter/circumference; `dim2` unused for square and circle
    Geometry { shape: Shape, dim1: i64, dim2: i64, area: bool },
    /// log_base(base^exp)
    Logarithm { base: u32, exp: u32 },
}

/// One generated problem. Immutable once built; one per round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Difficulty tier, clamped to [1, 15]
    pub tier: u32,
    pub kind: ProblemKind,
    /// Outer operator, when the statement has one
    pub op: Option<Operator>,
    /// Raw operand pair, when the statement exposes two; feeds the
    /// operand-confusion distractor strategies
    pub operands: Option<(f64, f64)>,
    /// Display statement, rendered verbatim
    pub text: String,
    pub answer: f64,
    /// Exactly three unique values, none equal to `answer`
    pub distractors: Vec<f64>,
}

impl Problem {
    /// Structural invariants checked after generation.
    pub fn well_formed(&self) -> bool {
        (consts::MIN_TIER..=consts::MAX_TIER).contains(&self.tier)
            && self.distractors.len() == 3
            && !self.distractors.contains(&self.answer)
            && self
                .distractors
                .iter()
                .enumerate()
                .all(|(i, d)| !self.distractors[..i].contains(d))
    }
}

/// Shuffled four-option presentation of a problem's answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerSet {
    /// Four values: the answer and its three distractors
    pub options: Vec<f64>,
    pub correct_index: usize,
}

impl AnswerSet {
    pub fn deal(problem: &Problem, rng: &mut impl Rng) -> Self {
        let mut options = problem.distractors.clone();
        options.shuffle(rng);
        let correct_index = rng.random_range(0..=options.len());
        options.insert(correct_index, problem.answer);
        Self {
            options,
            correct_index,
        }
    }

    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }

    /// Display labels in option order.
    pub fn labels(&self) -> Vec<String> {
        self.options.iter().map(|&v| format_answer(v)).collect()
    }
}

/// Format a numeric answer for display: integers print bare, everything
/// else prints to two decimals with trailing zeros trimmed.
pub fn format_answer(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let s = format!("{value:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
