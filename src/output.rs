// Colored terminal output for inference results.
//
// This module handles all terminal-specific formatting; the main.rs
// command handlers delegate here.

use colored::Colorize;

use crate::pipeline::Inference;

/// Display one scored article: dominant topic plus its top terms.
pub fn display_inference(inference: &Inference, label: &str) {
    println!();
    println!(
        "{} {}",
        format!("Dominant topic for {label}:").bold(),
        format!("#{}", inference.topic_id).cyan().bold()
    );
    display_terms(&inference.terms);
}

/// Display a full topic listing: every topic in the model with its terms.
pub fn display_topic_listing(topics: &[(usize, Vec<String>)]) {
    if topics.is_empty() {
        println!("Model has no topics.");
        return;
    }
    println!("\n{}", format!("=== {} topics ===", topics.len()).bold());
    for (topic_id, terms) in topics {
        println!("\n  {}", format!("Topic #{topic_id}").cyan().bold());
        display_terms(terms);
    }
}

fn display_terms(terms: &[String]) {
    if terms.is_empty() {
        println!("  {}", "(no terms requested)".dimmed());
        return;
    }
    for (rank, term) in terms.iter().enumerate() {
        println!("  {:>3}. {}", rank + 1, term.green());
    }
}
