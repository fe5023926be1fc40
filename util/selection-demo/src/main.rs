use std::env;
use std::fmt::Display;
use std::process;

use selection_sort::selection;
use selection_sort::values::{by_last_then_first, lowercase_is_less, Person, Primitive};

const SCENARIOS: [(&str, fn()); 5] = [
    ("numbers", numbers),
    ("floats", floats),
    ("strings", strings),
    ("mixed", mixed),
    ("people", people),
];

fn print_sorted<T: Display>(label: &str, v: &[T]) {
    let joined = v
        .iter()
        .map(|elem| elem.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    println!("{label}: [{joined}]");
}

fn numbers() {
    let mut numbers = [64, 25, 12, 22, 11];
    selection::sort(&mut numbers);
    print_sorted("Sorted Numbers", &numbers);
}

fn floats() {
    let mut floats = [64.5, 25.3, 12.1, 22.4, 11.0];
    selection::sort_by_is_less(&mut floats, |a: &f64, b: &f64| a < b);
    print_sorted("Sorted Floats", &floats);
}

fn strings() {
    let mut strings = ["banana", "Apple", "cherry", "date"];
    selection::sort(&mut strings);
    print_sorted("Sorted Strings", &strings);
}

fn mixed() {
    let mut mixed = [
        Primitive::Int(3),
        Primitive::from("banana"),
        Primitive::Float(1.5),
        Primitive::from("Apple"),
        Primitive::Int(2),
    ];
    selection::sort_by_is_less(&mut mixed, lowercase_is_less);
    print_sorted("Sorted Mixed", &mixed);
}

fn people() {
    let mut people = [
        Person::new("Jerry", "Seinfeld"),
        Person::new("George", "Costanza"),
        Person::new("Elaine", "Bennis"),
        Person::new("Cosmo", "Kramer"),
    ];
    selection::sort_by_is_less(&mut people, by_last_then_first);
    print_sorted("Sorted People by Last Name", &people);
}

fn main() {
    // Runs every scenario, or only those named on the command line.
    let args = env::args().skip(1).collect::<Vec<_>>();

    for arg in &args {
        if !SCENARIOS.iter().any(|(name, _)| name == arg) {
            let names = SCENARIOS.map(|(name, _)| name).join(", ");
            eprintln!("Unknown scenario '{arg}'. Available scenarios: {names}");
            process::exit(2);
        }
    }

    for (name, scenario) in SCENARIOS {
        if args.is_empty() || args.iter().any(|arg| arg == name) {
            scenario();
        }
    }
}
