use lazyseq_core::{error::Result, prelude::*};

fn main() -> Result<()> {
    let n = range(0, 2047)
        .filter(|i| i % 2 == 0)
        .map(|i| i + 1)
        .filter(|i| *i > 512)
        .reduce(0, |acc, item, _| acc + item)
        .run();

    let cooperative = spin_on::spin_on(
        range(0, 2047)
            .filter(|i| i % 2 == 0)
            .map(|i| i + 1)
            .filter(|i| *i > 512)
            .reduce(0, |acc, item, _| acc + item)
            .yield_by(32)?,
    );

    let expect = (0..2048)
        .step_by(2)
        .map(|i| i + 1)
        .filter(|i| *i > 512)
        .fold(0, |acc, item| acc + item);

    assert_eq!(n, expect);
    assert_eq!(cooperative, expect);
    println!("sum of odd numbers above 512: {n}");
    Ok(())
}
