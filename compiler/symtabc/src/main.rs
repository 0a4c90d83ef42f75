//! Symtab CLI
//!
//! Runs command files against a nested-scope symbol table.

use symtabc::commands::{check_file, lex_file, run_file};
use symtabc::parse_run_options;

fn main() {
    symtabc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        run_file(&parse_run_options(&[]));
        return;
    };

    match command.as_str() {
        "run" => {
            let options = parse_run_options(&args[2..]);
            run_file(&options);
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: symtab check <file>");
                std::process::exit(1);
            }
            check_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: symtab lex <file>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("symtab {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // Flags or a bare path go to `run`
            if command.starts_with("--") || std::path::Path::new(command).is_file() {
                run_file(&parse_run_options(&args[1..]));
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Symtab - nested-scope symbol table");
    println!();
    println!("Usage: symtab [command] [options]");
    println!();
    println!("Commands:");
    println!("  run [file]          Execute a command file (default: read.txt)");
    println!("  check <file>        Parse a command file and report malformed commands");
    println!("  lex <file>          Show the words of a command file with positions");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Run options:");
    println!("  --capacity=<n>      Slots per scope table (default: 101)");
    println!("  --max-scopes=<n>    Maximum scopes, global included (default: 101)");
    println!("  --events            Print raw events instead of the trace");
    println!("  --quiet, -q         Print no trace");
    println!("  --no-report         Skip the final symbol-table report");
    println!();
    println!("Command file syntax:");
    println!("  begin               Open a nested scope");
    println!("  end                 Close the current scope");
    println!("  assign <name> <n>   Bind name to an integer in the current scope");
    println!("  print <name>        Look name up through the enclosing scopes");
    println!();
    println!("Examples:");
    println!("  symtab                          # Run read.txt");
    println!("  symtab run prog.txt --capacity=7");
    println!("  symtab check prog.txt");
}
