use anyhow::Result;
use taskdeck_store::store::TaskStore;

pub fn run(file: &str, id: String) -> Result<()> {
    let store = TaskStore::new(file);
    let task = store.complete(&id)?;

    println!("Task \"{}\" marked as complete", task.title);
    Ok(())
}
