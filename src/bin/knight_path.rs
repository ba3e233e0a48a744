use knights_travails::coord::Square;
use knights_travails::report::PathReport;
use knights_travails::search::shortest_path;

fn parse_component(s: &str) -> i8 {
    match s.parse() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("invalid coordinate {s}: {e}");
            std::process::exit(2);
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 5 {
        eprintln!(
            "Usage: knight_path <from_file> <from_rank> <to_file> <to_rank> [--json]\n\n\
             Coordinates are integers in 0..=7."
        );
        std::process::exit(2);
    }

    let origin = Square::new(parse_component(&args[1]), parse_component(&args[2]));
    let destination = Square::new(parse_component(&args[3]), parse_component(&args[4]));

    let mut json = false;
    let mut i = 5;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => {
                json = true;
                i += 1;
            }
            x => {
                eprintln!("Unknown option: {x}");
                std::process::exit(2);
            }
        }
    }

    let path = match shortest_path(origin, destination) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Search failed: {e}");
            std::process::exit(1);
        }
    };

    if json {
        let report = PathReport::new(path);
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to serialize report: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("You made it in {} moves!  Here's your path:", path.len() - 1);
        for square in &path {
            println!("{square}");
        }
    }
}
