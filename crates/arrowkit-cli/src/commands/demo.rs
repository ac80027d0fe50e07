//! Demo command: labelled examples, grouped by section.

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{Context, Result};
use arrowkit::{
    Address, PartialUser, Profile, add, add_three, city_of, compose, count_vowels, create_user,
    display_user, divide, factorial, fetch_data, find_max, frequency_count, greet, is_positive,
    map_filter_reduce, matrix_sum, memoized_counter, multiplier, multiply, operate, parity,
    pipeline, power, reverse, schedule_once, sort_by_field, square, subtract, sum_array, to_upper,
    unique,
};
use arrowkit_config::{ArrowkitConfig, Section};

use crate::style::{Printer, print_header};

/// Runs the given sections in order.
pub fn run(config: &ArrowkitConfig, sections: &[Section]) -> Result<()> {
    let printer = Printer::new(config.output.label_width);
    let timer_delay = Duration::from_millis(config.demo.timer_delay_ms);

    // The deferred and async examples need a runtime; everything else is synchronous.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;

    for section in sections {
        tracing::debug!(%section, "running demo section");
        match section {
            Section::Basics => basics(&printer),
            Section::Intermediate => intermediate(&printer, &runtime, timer_delay)?,
            Section::Data => data(&printer),
            Section::Advanced => advanced(&printer, &runtime)?,
            Section::Practice => practice(&printer)?,
        }
    }
    Ok(())
}

fn basics(p: &Printer) {
    print_header("1. BASIC EXAMPLES");
    p.labeled("Square of 5", square(5));
    p.labeled("Add(3, 7)", add(3, 7));
    p.labeled("User", create_user("Ali", 22));
    p.labeled("Greeting", greet(Some("Anjum")));
    p.labeled("Greeting (default)", greet(None));
    p.labeled("Power(3,4)", power(3.0, Some(4)));
    p.labeled("Square(5)", power(5.0, None));
    p.labeled("5 is", parity(5));
}

fn intermediate(p: &Printer, runtime: &tokio::runtime::Runtime, delay: Duration) -> Result<()> {
    print_header("2. INTERMEDIATE USAGE");
    let numbers = [1, 2, 3, 4, 5];

    let squares: Vec<i32> = numbers.iter().map(|n| square(*n)).collect();
    p.labeled_debug("Squares", squares);
    let evens: Vec<i32> = numbers.iter().copied().filter(|n| n % 2 == 0).collect();
    p.labeled_debug("Even Numbers", evens);
    p.labeled("Sum", sum_array(&numbers));

    let double = multiplier(2);
    p.labeled("Double(10)", double(10));
    p.labeled("Operate add", operate(5, 3, |x, y| x + y));
    p.labeled("Operate multiply", operate(5, 3, |x, y| x * y));

    let millis = delay.as_millis();
    let message = runtime
        .block_on(async move {
            schedule_once(delay, move || format!("executed after {millis} ms")).await
        })
        .context("Deferred callback failed")?;
    p.labeled("Deferred", message);
    Ok(())
}

fn data(p: &Printer) {
    print_header("3. DATA STRUCTURE EXAMPLES");

    let arr = [10, 20, 30, 40, 50];
    let result: Vec<i32> = arr.iter().filter(|x| **x > 25).map(|x| x / 10).collect();
    p.labeled_debug("Result", result);

    let freq: BTreeMap<_, _> = frequency_count(&["js", "python", "js", "c++"])
        .into_iter()
        .collect();
    p.labeled_debug("Frequency", freq);

    let items = [("Book", 100), ("Pen", 20), ("Bag", 300)];
    let sorted = sort_by_field(&items, |item| item.1);
    p.labeled_debug("Sorted Items", sorted);

    p.labeled_debug("Set Values", unique(&[1, 2, 2, 3, 4]));
}

fn advanced(p: &Printer, runtime: &tokio::runtime::Runtime) -> Result<()> {
    print_header("4. ADVANCED CONCEPTS");
    p.labeled("Curried Add", add_three(2)(3)(4));

    let add_one = |x: i32| x + 1;
    let double_num = |x: i32| x * 2;
    p.labeled("Compose(5)", compose(double_num, add_one)(5));

    p.labeled("Async", runtime.block_on(fetch_data()));

    let counter = memoized_counter();
    p.labeled("Counter++", counter.increment()?);
    p.labeled("Counter--", counter.decrement()?);

    p.labeled("Factorial(5)", factorial(5)?);
    p.labeled("Matrix Sum", matrix_sum(&[vec![1, 2], vec![3, 4]])?);
    p.labeled_debug("Unique", unique(&[1, 1, 2, 3, 3, 4]));

    let profile = Profile {
        address: Some(Address {
            city: Some("Skardu".to_string()),
        }),
    };
    p.labeled("City", city_of(Some(&profile)));
    p.labeled("City (missing)", city_of(None));

    p.labeled("User", display_user(&PartialUser::from(create_user("Ali", 25))));
    p.labeled("User (empty)", display_user(&PartialUser::default()));

    let chained = map_filter_reduce(&[1, 2, 3, 4, 5], |x| *x > 2, |x| x * 2, |a, b| a + b, None)?;
    p.labeled("Chained Result", chained);
    p.labeled(
        "Pipeline Result",
        pipeline(5).double().increment().double().get(),
    );
    Ok(())
}

fn practice(p: &Printer) -> Result<()> {
    print_header("5. PRACTICE QUESTIONS");
    p.labeled("Multiply", multiply(3, 4));
    p.labeled("Subtract", subtract(10, 3));
    p.labeled("Divide", divide(8.0, 2.0)?);
    match divide(10.0, 0.0) {
        Ok(value) => p.labeled("Safe Divide", value),
        Err(err) => p.labeled("Safe Divide", format!("error: {err}")),
    }
    p.labeled("Is Positive", is_positive(-5));
    p.labeled("Uppercase", to_upper("arrow"));
    p.labeled("Sum Array", sum_array(&[1, 2, 3, 4]));
    p.labeled(
        "Max",
        find_max(&[3, 7, 2]).map_or_else(|| "none".to_string(), |m| m.to_string()),
    );
    p.labeled("Vowels", count_vowels("JavaScript"));
    p.labeled("Reverse", reverse("Arrow"));
    p.labeled("Factorial", factorial(6)?);
    Ok(())
}
