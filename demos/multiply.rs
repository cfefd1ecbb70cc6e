// Multiply two numbers with a selectable algorithm.
//
// Run the built-in demonstration, 12345 * 54321 with both algorithms:
//     cargo run --example multiply
//
// Or multiply your own operands:
//     cargo run --example multiply -- --strategy karatsuba 123456789 987654321
//
// The strategy can also be chosen through DECIMAL_MUL_STRATEGY. Set RUST_LOG=trace
// to watch the calculator at work.

use decimal_mul::{Calculator, Digits, Error, Strategy};
use std::env;
use std::process;

const USAGE: &str = "usage: multiply [--strategy traditional|karatsuba] [A B]";

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run() -> decimal_mul::Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut strategy = match env::var("DECIMAL_MUL_STRATEGY") {
        Ok(name) => name.parse()?,
        Err(_) => Strategy::default(),
    };
    if args.first().map(String::as_str) == Some("--strategy") {
        let name = args.get(1).ok_or_else(|| Error::custom(USAGE))?;
        strategy = name.parse()?;
        args.drain(..2);
    }

    match args.as_slice() {
        [] => {
            demonstrate();
            Ok(())
        }
        [x, y] => {
            let x: Digits = x.parse()?;
            let y: Digits = y.parse()?;
            let product = Calculator::new(strategy).multiply_digits(&x, &y);
            println!("{} * {} = {} ({})", x, y, product, strategy);
            Ok(())
        }
        _ => Err(Error::custom(USAGE)),
    }
}

fn demonstrate() {
    let x = [1, 2, 3, 4, 5];
    let y = [5, 4, 3, 2, 1];

    let mut calculator = Calculator::new(Strategy::Traditional);
    for strategy in [Strategy::Traditional, Strategy::Karatsuba] {
        calculator.set_strategy(strategy);
        let product = calculator.multiply(&x, &y);

        println!("Product ({}):", strategy);
        for digit in &product {
            print!("{}", digit);
        }
        println!();
    }
}
