use anyhow::Result;
use taskdeck_store::store::TaskStore;

pub fn run(file: &str, json: bool) -> Result<()> {
    let store = TaskStore::new(file);
    let tasks = store.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    println!(
        "=== Your Task{} ===",
        if tasks.len() > 1 { "s" } else { "" }
    );
    for task in &tasks {
        let status = if task.completed { "Completed" } else { "Pending" };
        println!();
        println!("[{}] {} ({})", task.id, task.title, status);
        println!("    Description: {}", task.description);
        println!(
            "    Created: {}",
            task.created_at.format("%Y-%m-%d %H:%M:%S %Z")
        );
    }
    Ok(())
}
