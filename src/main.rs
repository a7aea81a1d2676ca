use clap::Parser;

use kbgrep::{format_results, search_file, Domain, SearchConfig};

mod cli;
use cli::{display, Cli};

fn main() {
    let cli = Cli::parse();

    let data_dir = cli
        .data_dir
        .unwrap_or_else(SearchConfig::default_data_dir);
    let config = SearchConfig::new(data_dir, cli.max_results);

    // One named domain, or every configured domain in order.
    let domains: Vec<Domain> = match cli.domain {
        Some(domain) => vec![domain],
        None => Domain::ALL.to_vec(),
    };

    let mut blocks: Vec<String> = Vec::new();
    for domain in domains {
        let results = search_file(&cli.query, &config.path_for(domain), config.max_results);
        if !results.is_empty() {
            blocks.push(format_results(&results, domain));
        }
    }

    if blocks.is_empty() {
        println!("No results found for: {}", cli.query);
    } else {
        let separator = format!("\n{}\n", display::separator());
        println!("{}", blocks.join(&separator));
    }
}
