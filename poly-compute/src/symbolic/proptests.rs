//! Property-based tests for parsing, differentiation, and simplification.

use proptest::prelude::*;

use crate::symbolic::{derivative, parse, simplify, Bindings, Expr};

// Numbers with at most two fractional digits, so that rendering with six digits is exact
fn number() -> impl Strategy<Value = Expr> {
    prop_oneof![
        (0u32..20).prop_map(|n| Expr::number(n as f64)),
        (0u32..400).prop_map(|n| Expr::number(n as f64 / 4.0)),
    ]
}

fn symbol() -> impl Strategy<Value = Expr> {
    prop_oneof![
        3 => prop::sample::select(vec!["x", "y", "z"]).prop_map(|name| Expr::symbol(name)),
        1 => "[a-zA-Z]{1,3}".prop_map(|name| Expr::symbol(name)),
    ]
}

fn expr() -> impl Strategy<Value = Expr> {
    prop_oneof![number(), symbol()].prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(lhs, rhs)| Expr::sum(lhs, rhs)),
            (inner.clone(), inner).prop_map(|(lhs, rhs)| Expr::product(lhs, rhs)),
        ]
    })
}

// Binds every symbol in the expression to a small integer
fn full_bindings(expr: &Expr, seed: u32) -> Bindings {
    expr.symbols()
        .into_iter()
        .enumerate()
        .map(|(i, symbol)| (Expr::from(symbol.clone()), ((seed as usize + i) % 5) as f64))
        .collect()
}

proptest! {
    #[test]
    fn render_round_trip(e in expr()) {
        prop_assert_eq!(parse(&e.to_string()).unwrap(), e);
    }

    #[test]
    fn equal_implies_same_hash(e in expr()) {
        let copy = e.clone();
        prop_assert_eq!(&copy, &e);
        prop_assert_eq!(copy.hash_code(), e.hash_code());
    }

    #[test]
    fn constant_derivative_is_zero(c in number()) {
        prop_assert_eq!(derivative(&c, &Expr::symbol("x")), Expr::number(0.0));
    }

    #[test]
    fn sum_linearity(f in expr(), g in expr()) {
        let x = Expr::symbol("x");
        prop_assert_eq!(
            derivative(&Expr::sum(f.clone(), g.clone()), &x),
            Expr::sum(derivative(&f, &x), derivative(&g, &x)),
        );
    }

    #[test]
    fn derivative_of_absent_symbol_simplifies_to_zero(f in expr()) {
        let w = Expr::symbol("w");
        prop_assume!(!f.contains_symbol(w.as_symbol().unwrap()));
        prop_assert_eq!(simplify(&derivative(&f, &w), &Bindings::new()), Expr::number(0.0));
    }

    #[test]
    fn simplify_idempotent(e in expr(), y in 0u32..3, bind_some in any::<bool>()) {
        let bindings = if bind_some {
            Bindings::from([(Expr::symbol("x"), 0.0), (Expr::symbol("y"), y as f64)])
        } else {
            Bindings::new()
        };
        let once = simplify(&e, &bindings);
        prop_assert_eq!(simplify(&once, &bindings), once);
    }

    #[test]
    fn fully_bound_simplifies_to_number(e in expr(), seed in 0u32..5) {
        let bindings = full_bindings(&e, seed);
        prop_assert!(simplify(&e, &bindings).as_number().is_some());
    }

    #[test]
    fn simplify_preserves_value(e in expr(), seed in 0u32..5) {
        let bindings = full_bindings(&e, seed);
        let direct = simplify(&e, &bindings);
        let staged = simplify(&simplify(&e, &Bindings::new()), &bindings);
        prop_assert_eq!(staged, direct);
    }
}
