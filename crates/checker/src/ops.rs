//! Operator semantics over literal values, shared by the constant folder and
//! the evaluator. Integer arithmetic wraps.

use monolit_ast::{BinOp, UnaryOp};
use monolit_atom::AtomIntern;

use crate::ty::{F64Represent, LitValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpError {
    DivisionByZero,
    /// The operand kinds do not support the operator.
    Unsupported,
}

#[derive(Debug, Clone, Copy)]
enum Num {
    Int(i32),
    Long(i64),
    Double(f64),
}

fn as_num(v: &LitValue) -> Option<Num> {
    match *v {
        LitValue::Int(i) => Some(Num::Int(i)),
        LitValue::Char(c) => Some(Num::Int(c as i32)),
        LitValue::Long(l) => Some(Num::Long(l)),
        LitValue::Double(d) => Some(Num::Double(d.val())),
        _ => None,
    }
}

fn promote(l: Num, r: Num) -> (Num, Num) {
    use Num::*;
    match (l, r) {
        (Int(a), Long(b)) => (Long(a as i64), Long(b)),
        (Long(a), Int(b)) => (Long(a), Long(b as i64)),
        (Int(a), Double(b)) => (Double(a as f64), Double(b)),
        (Double(a), Int(b)) => (Double(a), Double(b as f64)),
        (Long(a), Double(b)) => (Double(a as f64), Double(b)),
        (Double(a), Long(b)) => (Double(a), Double(b as f64)),
        same => same,
    }
}

fn double(v: f64) -> LitValue {
    LitValue::Double(F64Represent::new(v))
}

fn arith(op: BinOp, l: Num, r: Num) -> Result<LitValue, OpError> {
    use BinOp::*;
    match promote(l, r) {
        (Num::Int(a), Num::Int(b)) => match op {
            Add => Ok(LitValue::Int(a.wrapping_add(b))),
            Sub => Ok(LitValue::Int(a.wrapping_sub(b))),
            Mul => Ok(LitValue::Int(a.wrapping_mul(b))),
            Div if b == 0 => Err(OpError::DivisionByZero),
            Div => Ok(LitValue::Int(a.wrapping_div(b))),
            Rem if b == 0 => Err(OpError::DivisionByZero),
            Rem => Ok(LitValue::Int(a.wrapping_rem(b))),
            _ => Err(OpError::Unsupported),
        },
        (Num::Long(a), Num::Long(b)) => match op {
            Add => Ok(LitValue::Long(a.wrapping_add(b))),
            Sub => Ok(LitValue::Long(a.wrapping_sub(b))),
            Mul => Ok(LitValue::Long(a.wrapping_mul(b))),
            Div if b == 0 => Err(OpError::DivisionByZero),
            Div => Ok(LitValue::Long(a.wrapping_div(b))),
            Rem if b == 0 => Err(OpError::DivisionByZero),
            Rem => Ok(LitValue::Long(a.wrapping_rem(b))),
            _ => Err(OpError::Unsupported),
        },
        (Num::Double(a), Num::Double(b)) => match op {
            Add => Ok(double(a + b)),
            Sub => Ok(double(a - b)),
            Mul => Ok(double(a * b)),
            Div => Ok(double(a / b)),
            Rem => Ok(double(a % b)),
            _ => Err(OpError::Unsupported),
        },
        _ => Err(OpError::Unsupported),
    }
}

fn compare(op: BinOp, l: Num, r: Num) -> Result<LitValue, OpError> {
    use BinOp::*;
    let ord = match promote(l, r) {
        (Num::Int(a), Num::Int(b)) => a.partial_cmp(&b),
        (Num::Long(a), Num::Long(b)) => a.partial_cmp(&b),
        (Num::Double(a), Num::Double(b)) => a.partial_cmp(&b),
        _ => return Err(OpError::Unsupported),
    };
    // NaN compares false with everything
    let Some(ord) = ord else {
        return Ok(LitValue::Boolean(false));
    };
    let res = match op {
        Less => ord.is_lt(),
        LessEq => ord.is_le(),
        Great => ord.is_gt(),
        GreatEq => ord.is_ge(),
        _ => return Err(OpError::Unsupported),
    };
    Ok(LitValue::Boolean(res))
}

/// Runtime `==`: numeric kinds compare by value after promotion.
pub fn values_eq(l: &LitValue, r: &LitValue) -> bool {
    if let (LitValue::Char(a), LitValue::Char(b)) = (l, r) {
        return a == b;
    }
    match (as_num(l), as_num(r)) {
        (Some(a), Some(b)) => match promote(a, b) {
            (Num::Int(a), Num::Int(b)) => a == b,
            (Num::Long(a), Num::Long(b)) => a == b,
            (Num::Double(a), Num::Double(b)) => a == b,
            _ => false,
        },
        (None, None) => l == r,
        _ => false,
    }
}

pub fn eval_unary(op: UnaryOp, v: &LitValue) -> Result<LitValue, OpError> {
    match (op, *v) {
        (UnaryOp::Not, LitValue::Boolean(b)) => Ok(LitValue::Boolean(!b)),
        (UnaryOp::Minus, LitValue::Int(i)) => Ok(LitValue::Int(i.wrapping_neg())),
        (UnaryOp::Minus, LitValue::Char(c)) => Ok(LitValue::Int((c as i32).wrapping_neg())),
        (UnaryOp::Minus, LitValue::Long(l)) => Ok(LitValue::Long(l.wrapping_neg())),
        (UnaryOp::Minus, LitValue::Double(d)) => Ok(double(-d.val())),
        _ => Err(OpError::Unsupported),
    }
}

/// `&&` and `||` are evaluated strictly here; short circuiting is the
/// caller's business.
pub fn eval_bin(
    op: BinOp,
    l: &LitValue,
    r: &LitValue,
    atoms: &mut AtomIntern,
) -> Result<LitValue, OpError> {
    use BinOp::*;
    match op {
        Add if matches!(l, LitValue::String(_)) || matches!(r, LitValue::String(_)) => {
            let s = format!("{}{}", l.to_display(atoms), r.to_display(atoms));
            Ok(LitValue::String(atoms.atom(&s)))
        }
        Add | Sub | Mul | Div | Rem => match (as_num(l), as_num(r)) {
            (Some(a), Some(b)) => arith(op, a, b),
            _ => Err(OpError::Unsupported),
        },
        Less | LessEq | Great | GreatEq => match (as_num(l), as_num(r)) {
            (Some(a), Some(b)) => compare(op, a, b),
            _ => Err(OpError::Unsupported),
        },
        EqEq => Ok(LitValue::Boolean(values_eq(l, r))),
        NEq => Ok(LitValue::Boolean(!values_eq(l, r))),
        LogicalAnd | LogicalOr => match (l.as_bool(), r.as_bool()) {
            (Some(a), Some(b)) if op == LogicalAnd => Ok(LitValue::Boolean(a && b)),
            (Some(a), Some(b)) => Ok(LitValue::Boolean(a || b)),
            _ => Err(OpError::Unsupported),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_arithmetic_wraps() {
        let mut atoms = AtomIntern::default();
        let max = LitValue::Int(i32::MAX);
        let one = LitValue::Int(1);
        assert_eq!(
            eval_bin(BinOp::Add, &max, &one, &mut atoms),
            Ok(LitValue::Int(i32::MIN))
        );
        let min = LitValue::Int(i32::MIN);
        let neg = LitValue::Int(-1);
        assert_eq!(
            eval_bin(BinOp::Div, &min, &neg, &mut atoms),
            Ok(LitValue::Int(i32::MIN))
        );
    }

    #[test]
    fn integral_division_by_zero_fails() {
        let mut atoms = AtomIntern::default();
        let r = eval_bin(BinOp::Rem, &LitValue::Long(3), &LitValue::Int(0), &mut atoms);
        assert_eq!(r, Err(OpError::DivisionByZero));
        let d = eval_bin(
            BinOp::Div,
            &LitValue::Double(F64Represent::new(1.0)),
            &LitValue::Int(0),
            &mut atoms,
        );
        assert_eq!(d, Ok(LitValue::Double(F64Represent::new(f64::INFINITY))));
    }

    #[test]
    fn concatenation_renders_both_sides() {
        let mut atoms = AtomIntern::default();
        let s = LitValue::String(atoms.atom("n = "));
        let LitValue::String(res) = eval_bin(BinOp::Add, &s, &LitValue::Long(7), &mut atoms).unwrap()
        else {
            unreachable!()
        };
        assert_eq!(atoms.get(res), "n = 7");
    }

    #[test]
    fn runtime_equality_promotes_numbers() {
        assert!(values_eq(&LitValue::Int(1), &LitValue::Long(1)));
        assert!(values_eq(
            &LitValue::Double(F64Represent::new(0.0)),
            &LitValue::Double(F64Represent::new(-0.0))
        ));
        assert!(!values_eq(&LitValue::Null, &LitValue::Unit));
        assert!(!values_eq(&LitValue::Int(65), &LitValue::Boolean(true)));
    }
}
