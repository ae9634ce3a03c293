// Colored terminal output for comparison results.
//
// All terminal-specific formatting lives here: the banner, the score line,
// the duplicate/distinct branches with article previews, and the fetch
// spinner. main.rs delegates display to this module.

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::fetch::article::RawArticle;
use crate::similarity::decision::{Decision, Verdict};

use super::{truncate_chars, PREVIEW_CHARS};

const BANNER_WIDTH: usize = 60;

/// Spinner shown while the two sources are being fetched.
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}

pub fn print_header() {
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!(
        "{}",
        format!("{:^width$}", "NEWS COMPARISON", width = BANNER_WIDTH).bold()
    );
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!();
}

pub fn print_separator() {
    println!("{}", "-".repeat(BANNER_WIDTH).dimmed());
}

/// Display a comparison result with article previews.
///
/// Duplicates show one preview (the articles are interchangeable);
/// distinct articles show both so the difference can be eyeballed.
pub fn display_result(decision: &Decision, article_a: &RawArticle, article_b: &RawArticle) {
    print_header();

    println!(
        "Similarity score: {}",
        format!("{:.2}", decision.score).bold()
    );
    println!();

    match decision.verdict {
        Verdict::Duplicate => {
            println!(
                "{}",
                "The articles are very similar and may be duplicates."
                    .red()
                    .bold()
            );
            print_separator();
            display_preview(article_a);
        }
        Verdict::Distinct => {
            println!("{}", "The articles are different.".green());
            print_separator();
            display_preview(article_a);
            print_separator();
            display_preview(article_b);
        }
    }

    print_separator();
}

fn display_preview(article: &RawArticle) {
    println!(
        "{} {}",
        article.source.bold(),
        format!("({})", article.url).dimmed()
    );
    println!();
    println!(
        "{}",
        truncate_chars(article.text.trim(), PREVIEW_CHARS).dimmed()
    );
    println!();
}
