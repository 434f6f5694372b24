//! Tier-band problem construction.
//!
//! Each band mirrors a stage of the curriculum; ranges scale with the tier
//! inside the first two bands and are fixed within the later ones.

use std::f64::consts::PI;
use std::fmt::Write as _;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::consts;
use crate::problem::{
    MixedForm, Operator, Problem, ProblemKind, Shape, TrigFn, generate_distractors,
};

impl Problem {
    /// Generate a problem for the given difficulty tier (clamped to [1, 15]).
    pub fn generate(tier: u32, rng: &mut impl Rng) -> Self {
        let tier = tier.clamp(consts::MIN_TIER, consts::MAX_TIER);
        let mut problem = match tier {
            1..=3 => basic_arithmetic(tier, rng),
            4..=6 => intermediate_arithmetic(tier, rng),
            7..=9 => powers_and_roots(tier, rng),
            10..=12 => simple_algebra(tier, rng),
            _ => advanced_math(tier, rng),
        };
        problem.distractors = generate_distractors(&problem, 3, rng);
        debug_assert!(problem.well_formed(), "malformed problem: {problem:?}");
        problem
    }
}

/// Addition and subtraction, operands up to 10x tier. Tier 1 is
/// addition-only; subtraction operands swap to keep results non-negative.
fn basic_arithmetic(tier: u32, rng: &mut impl Rng) -> Problem {
    let max = (10 * tier) as i64;
    let mut num1 = rng.random_range(1..=max);
    let mut num2 = rng.random_range(1..=max);

    let op = if tier == 1 || rng.random_bool(0.5) {
        Operator::Add
    } else {
        Operator::Sub
    };
    if op == Operator::Sub && num2 > num1 {
        std::mem::swap(&mut num1, &mut num2);
    }
    let answer = match op {
        Operator::Sub => num1 - num2,
        _ => num1 + num2,
    };

    Problem {
        tier,
        kind: ProblemKind::Arithmetic,
        op: Some(op),
        operands: Some((num1 as f64, num2 as f64)),
        text: format!("{num1} {} {num2}", op.symbol()),
        answer: answer as f64,
        distractors: Vec::new(),
    }
}

/// All four operations, operands up to 8x tier. Division joins at tier 5
/// and is constructed divisor-first so the quotient is always exact.
fn intermediate_arithmetic(tier: u32, rng: &mut impl Rng) -> Problem {
    let max = (8 * tier) as i64;
    let small_max = max / 2;
    let mut num1 = rng.random_range(2..=max);

    let ops: &[Operator] = if tier <= 4 {
        &[Operator::Add, Operator::Sub, Operator::Mul]
    } else {
        &[Operator::Add, Operator::Sub, Operator::Mul, Operator::Div]
    };
    let op = ops.choose(rng).copied().unwrap_or(Operator::Add);

    let (num2, answer) = match op {
        Operator::Add => {
            let n2 = rng.random_range(1..=max);
            (n2, num1 + n2)
        }
        Operator::Sub => {
            let mut n2 = rng.random_range(1..=max);
            if n2 > num1 {
                std::mem::swap(&mut num1, &mut n2);
            }
            (n2, num1 - n2)
        }
        Operator::Mul => {
            // second factor stays small to keep products manageable
            let n2 = rng.random_range(2..=small_max);
            (n2, num1 * n2)
        }
        _ => {
            let n2 = rng.random_range(2..=small_max);
            num1 = n2 * rng.random_range(1..=10);
            (n2, num1 / n2)
        }
    };

    Problem {
        tier,
        kind: ProblemKind::Arithmetic,
        op: Some(op),
        operands: Some((num1 as f64, num2 as f64)),
        text: format!("{num1} {} {num2}", op.symbol()),
        answer: answer as f64,
        distractors: Vec::new(),
    }
}

/// Squares, roots, cubes, general powers, and mixed two-operator
/// expressions.
fn powers_and_roots(tier: u32, rng: &mut impl Rng) -> Problem {
    match rng.random_range(1..=5) {
        1 => {
            let base = rng.random_range(2..=20i64);
            Problem {
                tier,
                kind: ProblemKind::Power { base, exp: 2 },
                op: Some(Operator::Pow),
                operands: None,
                text: format!("{base}^2"),
                answer: (base * base) as f64,
                distractors: Vec::new(),
            }
        }
        2 => {
            let root = rng.random_range(2..=15i64);
            let radicand = root * root;
            Problem {
                tier,
                kind: ProblemKind::Root { radicand },
                op: Some(Operator::Root),
                operands: None,
                text: format!("√{radicand}"),
                answer: root as f64,
                distractors: Vec::new(),
            }
        }
        3 => {
            let base = rng.random_range(2..=10i64);
            Problem {
                tier,
                kind: ProblemKind::Power { base, exp: 3 },
                op: Some(Operator::Pow),
                operands: None,
                text: format!("{base}^3"),
                answer: (base * base * base) as f64,
                distractors: Vec::new(),
            }
        }
        4 => {
            let base = rng.random_range(2..=8i64);
            let exp = rng.random_range(2..=4u32);
            Problem {
                tier,
                kind: ProblemKind::Power { base, exp },
                op: Some(Operator::Pow),
                operands: Some((base as f64, exp as f64)),
                text: format!("{base}^{exp}"),
                answer: base.pow(exp) as f64,
                distractors: Vec::new(),
            }
        }
        _ => {
            let a = rng.random_range(2..=15i64);
            let b = rng.random_range(2..=10i64);
            let c = rng.random_range(2..=20i64);
            let forms = [
                MixedForm::MulAdd,
                MixedForm::MulSub,
                MixedForm::AddMul,
                MixedForm::SubMul,
            ];
            let form = forms.choose(rng).copied().unwrap_or(MixedForm::MulAdd);
            Problem {
                tier,
                kind: ProblemKind::Mixed { a, b, c, form },
                op: Some(form.outer_op()),
                operands: Some((a as f64, b as f64)),
                text: form.text(a, b, c),
                answer: form.eval(a, b, c) as f64,
                distractors: Vec::new(),
            }
        }
    }
}

/// Linear equations and a two-variable sum/difference system, always with
/// integer solutions.
fn simple_algebra(tier: u32, rng: &mut impl Rng) -> Problem {
    match rng.random_range(1..=3) {
        1 => linear_equation(tier, false, rng),
        2 => linear_equation(tier, true, rng),
        _ => {
            let x = rng.random_range(1..=20i64);
            let y = rng.random_range(1..=20i64);
            let sum = x + y;
            let diff = x - y;
            let wants_x = rng.random_bool(0.5);
            let (var, answer) = if wants_x { ("x", x) } else { ("y", y) };
            Problem {
                tier,
                kind: ProblemKind::System { sum, diff, wants_x },
                op: None,
                operands: None,
                text: format!("If x + y = {sum} and x - y = {diff}, then {var} = ?"),
                answer: answer as f64,
                distractors: Vec::new(),
            }
        }
    }
}

fn linear_equation(tier: u32, subtracts: bool, rng: &mut impl Rng) -> Problem {
    let a = rng.random_range(1..=8i64);
    let x = rng.random_range(1..=12i64);
    let b = rng.random_range(1..=20i64);
    let c = if subtracts { a * x - b } else { a * x + b };
    let sign = if subtracts { "-" } else { "+" };
    Problem {
        tier,
        kind: ProblemKind::Linear { a, b, c, subtracts },
        op: None,
        operands: None,
        text: format!("{a}x {sign} {b} = {c}, x = ?"),
        answer: x as f64,
        distractors: Vec::new(),
    }
}

/// Trig tables, root-built quadratics, geometry, and logs/exponents.
fn advanced_math(tier: u32, rng: &mut impl Rng) -> Problem {
    match rng.random_range(1..=5) {
        t @ (1 | 2) => {
            let func = if t == 1 { TrigFn::Sin } else { TrigFn::Cos };
            let table = func.table();
            let (angle, value) = table[rng.random_range(0..table.len())];
            Problem {
                tier,
                kind: ProblemKind::Trig { func, angle },
                op: None,
                operands: None,
                text: format!("{}({angle}°) = ?", func.name()),
                answer: value,
                distractors: Vec::new(),
            }
        }
        3 => quadratic(tier, rng),
        4 => geometry(tier, rng),
        _ => {
            let base = if rng.random_bool(0.5) { 2u32 } else { 10u32 };
            let exp = rng.random_range(1..=5u32);
            let value = (base as i64).pow(exp);
            if rng.random_bool(0.5) {
                Problem {
                    tier,
                    kind: ProblemKind::Logarithm { base, exp },
                    op: None,
                    operands: None,
                    text: format!("log{base}({value}) = ?"),
                    answer: exp as f64,
                    distractors: Vec::new(),
                }
            } else {
                Problem {
                    tier,
                    kind: ProblemKind::Power {
                        base: base as i64,
                        exp,
                    },
                    op: None,
                    operands: None,
                    text: format!("{base}^{exp} = ?"),
                    answer: value as f64,
                    distractors: Vec::new(),
                }
            }
        }
    }
}

/// x² + bx + c = 0 built from two integer roots; asks for the root of
/// smaller absolute value.
fn quadratic(tier: u32, rng: &mut impl Rng) -> Problem {
    let x1 = rng.random_range(-5..=5i64);
    let x2 = rng.random_range(-5..=5i64);
    let b = -(x1 + x2);
    let c = x1 * x2;
    let answer = if x1.abs() <= x2.abs() { x1 } else { x2 };

    let mut equation = String::from("x² ");
    if b > 0 {
        let _ = write!(equation, "+ {b}x ");
    } else if b < 0 {
        let _ = write!(equation, "- {}x ", b.abs());
    }
    if c > 0 {
        let _ = write!(equation, "+ {c} ");
    } else if c < 0 {
        let _ = write!(equation, "- {} ", c.abs());
    }
    equation.push_str("= 0");

    Problem {
        tier,
        kind: ProblemKind::Quadratic { b, c },
        op: None,
        operands: None,
        text: format!("Smaller solution of {equation} = ?"),
        answer: answer as f64,
        distractors: Vec::new(),
    }
}

fn geometry(tier: u32, rng: &mut impl Rng) -> Problem {
    let shapes = [Shape::Square, Shape::Circle, Shape::Triangle, Shape::Rectangle];
    let shape = shapes.choose(rng).copied().unwrap_or(Shape::Square);

    let (kind, text, answer) = match shape {
        Shape::Square => {
            let side = rng.random_range(3..=15i64);
            let area = rng.random_bool(0.5);
            let (answer, text) = if area {
                ((side * side) as f64, format!("Area of square with side {side} = ?"))
            } else {
                ((4 * side) as f64, format!("Perimeter of square with side {side} = ?"))
            };
            (ProblemKind::Geometry { shape, dim1: side, dim2: 0, area }, text, answer)
        }
        Shape::Circle => {
            let radius = rng.random_range(1..=10i64);
            let area = rng.random_bool(0.5);
            let (answer, text) = if area {
                (
                    round2(PI * (radius * radius) as f64),
                    format!("Area of circle with radius {radius} ≈ ?"),
                )
            } else {
                (
                    round2(2.0 * PI * radius as f64),
                    format!("Circumference of circle with radius {radius} ≈ ?"),
                )
            };
            (ProblemKind::Geometry { shape, dim1: radius, dim2: 0, area }, text, answer)
        }
        Shape::Triangle => {
            let base = rng.random_range(5..=20i64);
            let height = rng.random_range(5..=15i64);
            (
                ProblemKind::Geometry { shape, dim1: base, dim2: height, area: true },
                format!("Area of triangle with base {base} and height {height} = ?"),
                ((base * height) / 2) as f64,
            )
        }
        Shape::Rectangle => {
            let length = rng.random_range(5..=20i64);
            let width = rng.random_range(3..=15i64);
            let area = rng.random_bool(0.5);
            let (answer, text) = if area {
                (
                    (length * width) as f64,
                    format!("Area of rectangle with length {length} and width {width} = ?"),
                )
            } else {
                (
                    (2 * (length + width)) as f64,
                    format!("Perimeter of rectangle with length {length} and width {width} = ?"),
                )
            };
            (ProblemKind::Geometry { shape, dim1: length, dim2: width, area }, text, answer)
        }
    };

    Problem {
        tier,
        kind,
        op: None,
        operands: None,
        text,
        answer,
        distractors: Vec::new(),
    }
}

/// Round to two decimal places (π-derived geometry answers).
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
