//! Tests for the sampling driver.

use crate::errors::EvalErrorKind;
use crate::sampler::{sample, Sampler, SamplerConfig};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rv_ir::{Distribution, Expr, Scalar, Variable};

#[test]
fn repeated_variable_is_drawn_once() {
    let mut sampler = Sampler::seeded(1);
    let x = Expr::normal("X");
    let diff = &x - &x;
    for _ in 0..1000 {
        assert_eq!(sampler.sample(&diff).unwrap(), Scalar::Float(0.0));
    }
}

#[test]
fn same_name_across_constructions_is_one_draw() {
    let mut sampler = Sampler::seeded(2);
    let diff = Expr::uniform("U") - Expr::uniform("U");
    assert_eq!(sampler.sample(&diff).unwrap(), Scalar::Float(0.0));
}

#[test]
fn different_names_are_independent() {
    let mut sampler = Sampler::seeded(3);
    let diff = Expr::uniform("U") - Expr::uniform("V");
    let nonzero = (0..100)
        .filter(|_| sampler.sample(&diff).unwrap() != Scalar::Float(0.0))
        .count();
    assert!(nonzero > 95, "only {nonzero} of 100 draws differed");
}

#[test]
fn seeded_samplers_repeat() {
    let expr = Expr::normal("X") * Expr::uniform("U");
    let a = Sampler::seeded(42).sample_n(&expr, 16).unwrap();
    let b = Sampler::seeded(42).sample_n(&expr, 16).unwrap();
    assert_eq!(a, b);
}

#[test]
fn uniform_draws_stay_in_unit_interval() {
    let mut sampler = Sampler::seeded(4);
    let u = Expr::uniform("U");
    for value in sampler.sample_n(&u, 1000).unwrap() {
        let x = value.as_f64().unwrap();
        assert!((0.0..1.0).contains(&x), "{x} outside [0, 1)");
    }
}

#[test]
fn symbols_cannot_be_sampled() {
    let mut sampler = Sampler::seeded(5);
    let expr = Expr::symbol("S") + 1;
    let err = sampler.sample(&expr).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::NotImplemented {
            operation: "sample",
            node: "S".to_string(),
        }
    );
}

#[test]
fn custom_distributions_draw_through_their_function() {
    let mut sampler = Sampler::seeded(6);
    let c = Expr::variable(Variable::new("C", Distribution::custom("const", |_| 2.5)));
    assert_eq!(sampler.sample(&(&c * &c)).unwrap(), Scalar::Float(6.25));
}

#[test]
fn given_condition_holds_for_accepted_draw() {
    let mut sampler = Sampler::seeded(7);
    let x = Expr::normal("X");
    let expr = Expr::given(x.pow(2), x.gt(1));
    let var = Variable::normal("X");
    for _ in 0..200 {
        let sample = sampler.sample_traced(&expr).unwrap();
        let drawn = sample.bindings.scalar(&var).and_then(Scalar::as_f64).unwrap();
        assert!(drawn > 1.0, "accepted draw {drawn} violates X > 1");
        assert_eq!(sample.value, Scalar::Float(drawn.powi(2)));
        assert!(sample.trials >= 1);
    }
}

#[test]
fn given_shares_draws_between_clause_and_condition() {
    let mut sampler = Sampler::seeded(8);
    let u = Expr::uniform("U");
    let expr = Expr::given(&u, u.lt(0.25));
    for value in sampler.sample_n(&expr, 500).unwrap() {
        assert!(value.as_f64().is_some_and(|x| x < 0.25));
    }
}

#[test]
fn impossible_condition_exhausts_bound() {
    let config = SamplerConfig::new().with_seed(9).with_max_trials(50);
    let mut sampler = Sampler::new(config);
    let u = Expr::uniform("U");
    let expr = Expr::given(&u, u.gt(2));
    let err = sampler.sample(&expr).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::SamplingExhausted { trials: 50 });
}

#[test]
fn zero_trial_bound_never_draws() {
    let config = SamplerConfig::new().with_max_trials(0);
    let mut sampler = Sampler::with_rng(StdRng::seed_from_u64(10), config);
    let u = Expr::uniform("U");
    let err = sampler.sample(&Expr::given(&u, u.lt(1))).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::SamplingExhausted { trials: 0 });
}

#[test]
fn numeric_condition_is_kind_error() {
    let mut sampler = Sampler::seeded(11);
    let u = Expr::uniform("U");
    let err = sampler.sample(&Expr::given(&u, &u + 1)).unwrap_err();
    assert_eq!(err.to_string(), "condition expects bool, got float");
}

#[test]
fn composed_given_conditions_all_hold() {
    let mut sampler = Sampler::seeded(12);
    let x = Expr::normal("X");
    let y = Expr::normal("Y");
    let expr = Expr::given(&x, x.gt(0)) + Expr::given(&y, y.lt(0));
    let (vx, vy) = (Variable::normal("X"), Variable::normal("Y"));
    for _ in 0..100 {
        let sample = sampler.sample_traced(&expr).unwrap();
        let bx = sample.bindings.scalar(&vx).and_then(Scalar::as_f64).unwrap();
        let by = sample.bindings.scalar(&vy).and_then(Scalar::as_f64).unwrap();
        assert!(bx > 0.0 && by < 0.0);
        assert_eq!(sample.value, Scalar::Float(bx + by));
    }
}

#[test]
fn config_defaults_to_unbounded() {
    let config = SamplerConfig::default();
    assert_eq!(config.max_trials(), None);
    assert_eq!(config.with_max_trials(3).unbounded(), config);
}

#[test]
fn thread_local_sample() {
    let u = Expr::uniform("U");
    let value = sample(&(&u - &u)).unwrap();
    assert_eq!(value, Scalar::Float(0.0));
}
