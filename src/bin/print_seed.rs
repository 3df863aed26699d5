use mergington_activities::database::seed;

fn main() {
    match serde_json::to_string_pretty(&seed::default_registry()) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("seed export failed: {}", e);
            std::process::exit(1);
        }
    }
}
