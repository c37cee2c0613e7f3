use anyhow::Result;
use std::io::{self, BufRead, Write};
use taskdeck_store::store::TaskStore;

pub fn run(file: &str, target: String) -> Result<()> {
    let store = TaskStore::new(file);

    if target == "all" {
        print!("Are you sure you want to delete all your tasks? (Y/n): ");
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;

        match parse_answer(&answer) {
            Some(true) => {
                store.delete("all")?;
                println!("All tasks deleted successfully");
            }
            Some(false) => println!("Deletion cancelled"),
            None => anyhow::bail!(
                "unknown answer: '{}'. Enter either 'y' or 'n'",
                answer.trim()
            ),
        }
        return Ok(());
    }

    if let Some(task) = store.delete(&target)? {
        println!("Task \"{}\" deleted successfully", task.title);
    }
    Ok(())
}

/// Empty input defaults to yes; otherwise only y/n (any case) is accepted.
fn parse_answer(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "" | "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}
