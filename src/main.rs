use std::{env::args_os, process::ExitCode};

use bmp_edge_detector::{detect_edges, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match detect_edges(&arguments) {
        Ok(_) => {
            println!("Edge detection successful");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Edge detection failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
