use symalg_core::error::Error;
use symalg_core::numerical::Number;
use symalg_core::symbolic::{simplify_with_steps, Ctxt, Eval, Expr, Function, Predicate};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// A named sample that produces a line of output, or an error to report.
type Sample = (&'static str, fn() -> Result<String, Error>);

/// `f(x) = 2x + 1` at `x = 5`.
fn linear_function() -> Result<String, Error> {
    let f = Function::new("f", ["x"], Expr::from(2) * Expr::from("x") + Expr::from(1))?;
    let value = f.call(&[Number::from(5)], &Ctxt::new())?;
    Ok(format!("{f}, f(5) = {value}"))
}

/// A recursive function defined by cases.
fn factorial() -> Result<String, Error> {
    let n = || Expr::from("n");
    let fact = Function::new("fact", ["n"], Expr::branch(vec![
        (n().less_or_equal(1), Expr::from(1)),
        (Predicate::True, n() * Expr::call("fact", vec![n() - Expr::from(1)])),
    ]))?;
    let ctxt = Ctxt::new().with_func(fact);
    let value = Expr::call("fact", vec![Expr::from(20)]).eval(&ctxt)?;
    Ok(format!("fact(20) = {value}"))
}

/// The sum of the first `n` squares, with `n` bound in the context.
fn sum_of_squares() -> Result<String, Error> {
    let expr = Expr::sum("k", 1, "n", Expr::from("k").pow(2));
    let ctxt = Ctxt::new().with_var("n", 10);
    Ok(format!("{expr} = {} (n = 10)", expr.eval(&ctxt)?))
}

/// Euler's identity, evaluated in complex arithmetic.
fn euler() -> Result<String, Error> {
    let expr = Expr::e().pow(Expr::i() * Expr::pi()) + Expr::from(1);
    let value = expr.eval_default()?;
    Ok(format!("{expr} = {value}"))
}

/// One simplification pass, with the steps taken.
fn simplification() -> Result<String, Error> {
    let x = || Expr::from("x");
    let expr = Expr::Mul(vec![x(), Expr::Neg(Box::new(Expr::Neg(Box::new(x())))), Expr::from(3), x()]);
    let (simplified, steps) = simplify_with_steps(&expr);
    Ok(format!("{expr} => {simplified} via {steps:?}"))
}

/// The partial derivatives of a function of two variables.
fn derivative() -> Result<String, Error> {
    let (x, y) = (Expr::from("x"), Expr::from("y"));
    let f = Function::new("f", ["x", "y"], x.clone().pow(2) * y.clone().sin() + y / x)?;
    let dfdx = f.derived("x")?;
    let dfdy = f.derived("y")?;
    Ok(format!("{f}\n  {dfdx}\n  {dfdy}"))
}

/// Calls a function that is not defined, to show the error report.
fn unknown_function() -> Result<String, Error> {
    let ctxt = Ctxt::new()
        .with_func(Function::new("sqr", ["x"], Expr::from("x").pow(2))?);
    let value = Expr::call("sq", vec![Expr::from(3)]).eval(&ctxt)?;
    Ok(value.to_string())
}

/// Takes the logarithm of an imaginary number, to show the error report.
fn imaginary_log() -> Result<String, Error> {
    let value = (Expr::from(2) * Expr::i()).log().eval_default()?;
    Ok(value.to_string())
}

const SAMPLES: &[Sample] = &[
    ("linear", linear_function),
    ("factorial", factorial),
    ("sum", sum_of_squares),
    ("euler", euler),
    ("simplify", simplification),
    ("derivative", derivative),
    ("unknown-function", unknown_function),
    ("imaginary-log", imaginary_log),
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args();
    args.next();
    let selected = args.next();

    for (name, sample) in SAMPLES {
        if selected.as_deref().is_some_and(|selected| selected != *name) {
            continue;
        }

        info!(sample = name, "running sample");
        match sample() {
            Ok(output) => println!("{name}: {output}"),
            Err(err) => {
                println!("{name}: error");
                if let Err(io_err) = err.report_to_stderr() {
                    eprintln!("{err} (could not render report: {io_err})");
                }
            },
        }
    }
}
