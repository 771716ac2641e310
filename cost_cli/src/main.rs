//! # Steelcost CLI Application
//!
//! Terminal front end for the steel member cost calculator. Prompts for a
//! member type and its dimensions, quotes weight and tax-inclusive price,
//! and appends the order to `orders.csv`.
//!
//! ## Usage
//!
//! ```text
//! steelcost              # interactive quote, appended to the ledger
//! steelcost view         # list saved orders with the running total
//! steelcost view Shaft   # list saved orders for one member type
//! ```

mod ledger;

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use cost_core::{
    calculate, CostError, DimensionSet, MaterialConstants, MemberCostInput, MemberType,
};

use crate::ledger::{OrderLedger, OrderRecord};

/// Ledger file in the working directory, as the entry forms have always used
const ORDERS_FILE: &str = "orders.csv";

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

/// Map a 1-based menu choice to a member type
fn member_from_choice(choice: usize) -> Option<MemberType> {
    choice
        .checked_sub(1)
        .and_then(|i| MemberType::ALL.get(i))
        .copied()
}

fn prompt_member_type() -> MemberType {
    println!("Member types:");
    for (i, member) in MemberType::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, member);
    }

    loop {
        let choice = prompt_f64("Select member type [1]: ", 1.0) as usize;
        match member_from_choice(choice) {
            Some(member) => return member,
            None => eprintln!(
                "Please select a number between 1 and {}.",
                MemberType::ALL.len()
            ),
        }
    }
}

fn run_quote(constants: &MaterialConstants) -> Result<(), CostError> {
    let member_type = prompt_member_type();

    let default_cost = constants.default_cost_per_kg(member_type);
    let cost_per_kg = prompt_f64(
        &format!("Price per Kg (Rs) [{}]: ", default_cost),
        default_cost,
    );

    let mut dimensions = DimensionSet::new();
    for &dimension in member_type.required_dimensions() {
        let value = prompt_f64(&format!("{} (mm): ", dimension), 0.0);
        if value <= 0.0 {
            // Reject before invoking the calculator, so the user sees the
            // offending field rather than a failed quote.
            eprintln!("Please enter all dimensions.");
            return Err(CostError::invalid_dimension(
                dimension.label(),
                value.to_string(),
                "Dimension must be a positive number of millimeters",
            ));
        }
        dimensions.insert(dimension, value);
    }

    let input = MemberCostInput {
        member_type,
        dimensions,
        cost_per_kg,
    };
    let result = calculate(&input, constants)?;

    println!();
    println!("═══════════════════════════════════════");
    println!("  MEMBER COST QUOTE");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Member:   {}", member_type);
    println!("  {}", input.dimensions.summary());
    println!("  Rate:     Rs {:.2}/kg", cost_per_kg);
    println!();
    println!("Result:");
    println!("  Weight:     {:.2} Kg", result.weight_kg.0);
    println!("  Total Cost: Rs {:.2} (incl. tax)", result.total_cost);
    println!("═══════════════════════════════════════");

    let record = OrderRecord::new(member_type, &input.dimensions, &result);
    OrderLedger::append(Path::new(ORDERS_FILE), record)?;
    println!();
    println!("Order saved to {}", ORDERS_FILE);

    Ok(())
}

fn run_view(member_filter: Option<MemberType>) -> Result<(), CostError> {
    let ledger = OrderLedger::load(Path::new(ORDERS_FILE))?;

    let rows: Vec<&OrderRecord> = match member_filter {
        Some(member) => ledger.filter_by_member(member),
        None => ledger.records.iter().collect(),
    };

    if rows.is_empty() {
        println!("No data available.");
        return Ok(());
    }

    println!(
        "{:<20} {:<16} {:<52} {:>12} {:>16}",
        "Date", "Member Type", "Dimensions", "Weight (Kg)", "Total Cost (Rs)"
    );
    let mut total = 0.0;
    for row in &rows {
        println!(
            "{:<20} {:<16} {:<52} {:>12.2} {:>16.2}",
            row.date.format("%Y-%m-%d %H:%M:%S"),
            row.member_type,
            row.dimensions,
            row.weight_kg,
            row.total_cost
        );
        total += row.total_cost;
    }
    println!();
    println!("{} orders, total Rs {:.2}", rows.len(), total);

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let outcome = match args.first().map(String::as_str) {
        Some("view") => {
            let filter = match args.get(1) {
                Some(name) => match name.parse::<MemberType>() {
                    Ok(member) => Some(member),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                },
                None => None,
            };
            run_view(filter)
        }
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Usage: steelcost [view [member-type]]");
            return ExitCode::FAILURE;
        }
        None => run_quote(&MaterialConstants::default()),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_from_choice_valid_range() {
        assert_eq!(member_from_choice(1), Some(MemberType::Shaft));
        assert_eq!(member_from_choice(6), Some(MemberType::IJoist));
    }

    #[test]
    fn test_member_from_choice_out_of_range() {
        assert_eq!(member_from_choice(0), None);
        assert_eq!(member_from_choice(7), None);
    }
}
