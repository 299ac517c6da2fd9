mod args;
mod config;
mod error;
mod html;
mod io;
mod processing;
mod site_map;
mod xml;

use chrono::Utc;
use std::process::ExitCode;

use crate::args::parse_args;
use crate::io::print_error;
use crate::processing::generate_sitemaps;

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            print_error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    match generate_sitemaps(&args, Utc::now()) {
        Ok(summary) => {
            println!(
                "Done: {} posts, {} pages, {} images; wrote {} files to {}",
                summary.posts,
                summary.pages,
                summary.images,
                summary.written.len(),
                args.target.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
