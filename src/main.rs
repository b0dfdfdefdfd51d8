//! # Builder Recipe Demo
//!
//! With no arguments, runs the standard scenario:
//! 1.  Attach a [`Builder`] to a [`Director`].
//! 2.  Build and print the minimal viable product.
//! 3.  Build and print the full-featured product.
//! 4.  Build and print a custom product (parts A and C) without the director.
//!
//! With arguments, each argument names a [`Recipe`] (`minimal` or `full`) and
//! one product is built and printed per argument.

use builder_recipe::builder::Builder;
use builder_recipe::director::{Director, DirectorError, Recipe};
use builder_recipe::lifecycle::setup_tracing;
use std::cell::RefCell;
use std::process::ExitCode;
use std::rc::Rc;
use tracing::{error, info};

fn main() -> ExitCode {
    setup_tracing();

    let recipes: Result<Vec<Recipe>, _> = std::env::args().skip(1).map(|arg| arg.parse()).collect();
    let recipes = match recipes {
        Ok(recipes) => recipes,
        Err(e) => {
            error!(error = %e, "Invalid arguments");
            return ExitCode::FAILURE;
        }
    };

    let result = if recipes.is_empty() {
        run_standard_scenario()
    } else {
        run_recipes(&recipes)
    };

    match result {
        Ok(()) => {
            info!("Demo completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Demo failed");
            ExitCode::FAILURE
        }
    }
}

fn run_standard_scenario() -> Result<(), DirectorError> {
    let builder = Rc::new(RefCell::new(Builder::new()));
    let mut director = Director::new();
    director.set_builder(&builder);

    println!("Standard basic product:");
    director.build_minimal_viable_product()?;
    println!("{}", builder.borrow_mut().extract_and_reset());

    println!("Standard full featured product:");
    director.build_full_featured_product()?;
    println!("{}", builder.borrow_mut().extract_and_reset());

    // The builder works without a director too.
    println!("Custom product:");
    let product = builder
        .borrow_mut()
        .build_part_a()
        .build_part_c()
        .extract_and_reset();
    println!("{}", product);

    Ok(())
}

fn run_recipes(recipes: &[Recipe]) -> Result<(), DirectorError> {
    let builder = Rc::new(RefCell::new(Builder::new()));
    let director = Director::with_builder(&builder);

    for &recipe in recipes {
        director.construct(recipe)?;
        println!("{}: {}", recipe, builder.borrow_mut().extract_and_reset());
    }

    Ok(())
}
