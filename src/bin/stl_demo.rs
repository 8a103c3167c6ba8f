use std::env;
use std::fmt::Debug;
use std::path::Path;
use std::process;

use colored::Colorize;
use log::{error, info};
use stl_wrappers::config::{ConfigError, DemoConfig};
use stl_wrappers::{ContainerError, List, PriorityQueue, UnorderedMap, Vector};

// =============================================================================
// Output helpers
// =============================================================================

fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold().cyan());
}

fn step(label: &str, detail: impl Debug) {
    info!("{label}: {detail:?}");
    println!("  {} {:<22} {:?}", "✓".green(), label, detail);
}

// =============================================================================
// Walkthroughs
// =============================================================================

fn run_vector(config: &DemoConfig) -> Result<Vec<i64>, ContainerError> {
    section("Vector");

    let empty: Vector<i64> = Vector::new();
    step("new", (empty.len(), empty.capacity()));

    let mut vec: Vector<i64> = Vector::with_len(config.initial_len)?;
    step("with_len", vec.as_slice());

    for &value in &config.push_values {
        vec.push_back(value);
    }
    step("push_back", vec.as_slice());

    vec.emplace_back(|| config.push_values.iter().sum());
    step("emplace_back", vec.as_slice());

    vec.insert(config.insert_index, config.insert_value)?;
    step("insert", vec.as_slice());

    let splice: Vector<i64> = config.splice_values.iter().copied().collect();
    vec.insert_from(config.splice_index, &splice)?;
    step("insert_from", vec.as_slice());

    vec.erase(config.erase_begin, config.erase_end)?;
    step("erase", vec.as_slice());

    vec.reserve(config.reserve)?;
    step("reserve", (vec.len(), vec.capacity()));

    vec.resize(vec.len() + 2)?;
    let last = vec.len() - 1;
    vec[last] = 100;
    step("resize + index", vec.as_slice());

    match vec.at(vec.len()) {
        Ok(value) => step("at(len)", value),
        Err(err) => step("at(len) rejected", err.to_string()),
    }
    step(
        "growth",
        format!("{} allocations, capacity {}", vec.allocations(), vec.capacity()),
    );

    Ok(vec.into_iter().collect())
}

fn run_list() -> Result<(), ContainerError> {
    section("List");

    let mut list = List::new();
    list.push_front(1);
    list.push_front(2);
    list.push_back(3);
    list.insert(1, 99)?;
    list.insert_n(3, 2, 88)?;
    step("insert", list.iter().collect::<Vec<_>>());

    let mut other: std::collections::LinkedList<i32> = [7, 8].into_iter().collect();
    list.splice(0, &mut other)?;
    step("splice", list.iter().collect::<Vec<_>>());

    step("pop_front/pop_back", (list.pop_front(), list.pop_back()));
    Ok(())
}

fn run_map() -> Result<(), ContainerError> {
    section("UnorderedMap");

    let mut counts: UnorderedMap<String, usize> = UnorderedMap::new();
    for word in "the quick fox jumps over the lazy fox the end".split_whitespace() {
        *counts.get_or_default(word.to_string()) += 1;
    }
    step("at(\"the\")", counts.at("the")?);
    if let Err(err) = counts.at("cat") {
        step("at(\"cat\") rejected", err.to_string());
    }
    Ok(())
}

fn run_priority_queue() {
    section("PriorityQueue");

    let mut pq = PriorityQueue::new();
    for value in [10, 5, 20] {
        pq.insert(value);
    }
    step("top", pq.top());
    pq.remove_top();
    step("top after remove", pq.top());
}

fn run(config: &DemoConfig) -> Result<(), ContainerError> {
    run_vector(config)?;
    run_list()?;
    run_map()?;
    run_priority_queue();
    Ok(())
}

fn load_config() -> Result<DemoConfig, ConfigError> {
    match env::args().nth(1) {
        Some(path) => DemoConfig::load(Path::new(&path)),
        None => Ok(DemoConfig::default()),
    }
}

fn main() {
    env_logger::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            error!("config error: {err}");
            eprintln!("{} {err}", "config error:".red().bold());
            process::exit(2);
        }
    };

    if !config.colored {
        colored::control::set_override(false);
    }

    if let Err(err) = run(&config) {
        error!("walkthrough failed: {err}");
        eprintln!("{} {err}", "✗".red());
        process::exit(1);
    }
    println!("\n{}", "All walkthroughs finished".green());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vector_walkthrough() {
        let result = run_vector(&DemoConfig::default()).unwrap();
        assert_eq!(result, vec![0, 0, 0, 30, 0, 0, 10, 20, 30, 0, 100]);
    }

    #[test]
    fn test_bad_insert_index_is_reported() {
        let config = DemoConfig {
            initial_len: 0,
            push_values: vec![],
            insert_index: 5,
            ..DemoConfig::default()
        };
        let err = run_vector(&config).unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_other_walkthroughs_succeed() {
        assert!(run_list().is_ok());
        assert!(run_map().is_ok());
        run_priority_queue();
    }
}
