use sovran_any::{any_cast, AnyValue, BadCast};
use std::io::Write;

fn init_logger() {
    env_logger::Builder::new()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .parse_default_env()
        .init();
}

fn main() -> Result<(), BadCast> {
    // RUST_LOG=trace shows the failed cast below
    init_logger();

    // Store a string and copy the whole container
    let x = AnyValue::from_value("123");
    let mut y = x.clone();
    println!("{} {}", any_cast::<&str>(&x)?, any_cast::<&str>(&y)?);

    // Reassign the copy with a value of another type
    y.set(15i32);
    println!("{}", any_cast::<i32>(&y)?);

    // An empty container fails every cast
    let mut a = AnyValue::new();
    print!("{} ", a.has_value());
    match any_cast::<char>(&a) {
        Ok(c) => println!("{}", c),
        Err(e) => println!("{}", e),
    }

    // Copy one container into another, then re-emplace the source
    a.clone_from(&y);
    y.emplace::<String, _>("HI!");
    println!("{} {}", any_cast::<i32>(&a)?, any_cast::<String>(&y)?);

    Ok(())
}
