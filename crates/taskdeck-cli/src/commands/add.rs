use anyhow::Result;
use taskdeck_core::task::TaskDraft;
use taskdeck_store::store::TaskStore;

pub fn run(file: &str, title: String, description: String) -> Result<()> {
    let store = TaskStore::new(file);
    let task = store.create(TaskDraft { title, description })?;

    println!("Task added successfully!");
    println!("ID: {}, Title: \"{}\"", task.id, task.title);
    Ok(())
}
