//! Terminal output formatting.

use brandsense_core::view::{CardView, Treatment};
use brandsense_core::SentimentVerdict;
use colored::{ColoredString, Colorize};

/// Print one card per verdict, in the order returned.
pub fn print_verdicts(verdicts: &[SentimentVerdict]) {
    println!();
    println!("{}", "Analysis Results".bold());
    println!("{}", "─".repeat(40));

    for verdict in verdicts {
        print_card(&CardView::from_verdict(verdict));
    }

    println!("{} brand(s) analyzed", verdicts.len());
}

fn print_card(card: &CardView) {
    println!("{} {}", marker(card.treatment), card.brand_name.bold());
    println!("  {}", colored_label(card.treatment, &card.label));
    println!("  {}", card.summary);
    println!();
}

fn marker(treatment: Treatment) -> ColoredString {
    match treatment {
        Treatment::Positive => "▲".green().bold(),
        Treatment::Negative => "▼".red().bold(),
        Treatment::Neutral => "●".dimmed(),
    }
}

fn colored_label(treatment: Treatment, label: &str) -> ColoredString {
    match treatment {
        Treatment::Positive => label.green(),
        Treatment::Negative => label.red(),
        Treatment::Neutral => label.normal(),
    }
}
