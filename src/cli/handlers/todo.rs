use std::io::{self, BufRead, Write};

use super::{CliResult, ask_index, open_session, report};
use crate::cli::commands::{Mode, TodoCli};
use crate::cli::output::format_task_line;
use crate::cli::prompt::Prompter;
use crate::model::{Session, StorageConfig, Task};
use crate::ops::task_ops;
use crate::ops::{Listing, OpError, Outcome};
use crate::tui::theme::Theme;

fn tasks_file(storage: &StorageConfig) -> &str {
    &storage.tasks_file
}

/// Entry point for the `todo` binary.
pub fn run_todo(cli: TodoCli) -> CliResult {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let mode = match cli.mode {
        Some(mode) => mode,
        None => match ask_mode(&mut prompter)? {
            Some(mode) => mode,
            None => {
                writeln!(prompter.out(), "Invalid choice. Exiting.")?;
                return Ok(());
            }
        },
    };

    let (mut session, config) = open_session::<Task>(&cli.store, tasks_file)?;
    match mode {
        Mode::Cli => todo_menu(&mut session, &mut prompter),
        Mode::Gui => {
            drop(prompter);
            crate::tui::run(session, Theme::from_config(&config.ui))
        }
    }
}

fn ask_mode<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> io::Result<Option<Mode>> {
    writeln!(
        prompter.out(),
        "Select mode:\n1. Command Line Interface (CLI)\n2. Graphical User Interface (GUI)"
    )?;
    let choice = prompter.ask_or_empty("Enter 1 or 2: ")?;
    Ok(match choice.trim() {
        "1" => Some(Mode::Cli),
        "2" => Some(Mode::Gui),
        _ => None,
    })
}

/// Numbered menu loop over a task session. Returns on Exit or end of input.
pub fn todo_menu<R: BufRead, W: Write>(
    session: &mut Session<Task>,
    prompter: &mut Prompter<R, W>,
) -> CliResult {
    loop {
        writeln!(
            prompter.out(),
            "\n--- To-Do List CLI ---\n\
             1. Add Task\n\
             2. List Tasks\n\
             3. Update Task\n\
             4. Mark Task as Done\n\
             5. Delete Task\n\
             6. Exit"
        )?;
        let Some(choice) = prompter.ask("Select an option (1-6): ")? else {
            writeln!(prompter.out())?;
            return Ok(());
        };
        match choice.trim() {
            "1" => add(session, prompter)?,
            "2" => list(session, prompter.out())?,
            "3" => update(session, prompter)?,
            "4" => mark_done(session, prompter)?,
            "5" => delete(session, prompter)?,
            "6" => {
                writeln!(prompter.out(), "Exiting CLI. Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(prompter.out(), "Invalid choice. Please try again.")?,
        }
    }
}

fn add<R: BufRead, W: Write>(
    session: &mut Session<Task>,
    prompter: &mut Prompter<R, W>,
) -> CliResult {
    let text = prompter.ask_or_empty("Enter the task description: ")?;
    match task_ops::add_task(session, &text) {
        Ok(task) => {
            let description = task.description.clone();
            writeln!(prompter.out(), "Task '{}' added.", description)?;
        }
        Err(e) => report(prompter.out(), e, "Empty task not added.")?,
    }
    Ok(())
}

fn list<W: Write>(session: &Session<Task>, out: &mut W) -> CliResult {
    match task_ops::list_tasks(session) {
        Listing::Empty => writeln!(out, "No tasks.")?,
        Listing::Entries(entries) => {
            writeln!(out, "\nYour Tasks:")?;
            for (index, task) in entries {
                writeln!(out, "{}", format_task_line(index, task))?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Show the list, then ask which task to act on.
fn pick<R: BufRead, W: Write>(
    session: &Session<Task>,
    prompter: &mut Prompter<R, W>,
    prompt: &str,
) -> Result<Option<usize>, Box<dyn std::error::Error>> {
    list(session, prompter.out())?;
    match ask_index::<Task, _, _>(prompter, prompt, session.records().len())? {
        Ok(index) => Ok(Some(index)),
        Err(e) => {
            let message = index_message(&e);
            report(prompter.out(), e, message)?;
            Ok(None)
        }
    }
}

fn index_message(err: &OpError) -> &'static str {
    match err {
        OpError::InvalidNumber(_) => "Please enter a valid number.",
        _ => "Invalid task number.",
    }
}

fn update<R: BufRead, W: Write>(
    session: &mut Session<Task>,
    prompter: &mut Prompter<R, W>,
) -> CliResult {
    let Some(index) = pick(session, prompter, "Enter task number to update: ")? else {
        return Ok(());
    };
    let text = prompter.ask_or_empty("Enter new description: ")?;
    match task_ops::update_task(session, index, &text) {
        Ok(Outcome::Updated) => writeln!(prompter.out(), "Task updated.")?,
        Ok(Outcome::Unchanged) => writeln!(prompter.out(), "Task unchanged.")?,
        Err(e) => report(prompter.out(), e, "Empty description. Update canceled.")?,
    }
    Ok(())
}

fn mark_done<R: BufRead, W: Write>(
    session: &mut Session<Task>,
    prompter: &mut Prompter<R, W>,
) -> CliResult {
    let Some(index) = pick(session, prompter, "Enter task number to mark as done: ")? else {
        return Ok(());
    };
    match task_ops::mark_done(session, index) {
        Ok(_) => writeln!(prompter.out(), "Task marked as done.")?,
        Err(e) => report(prompter.out(), e, "Invalid task number.")?,
    }
    Ok(())
}

fn delete<R: BufRead, W: Write>(
    session: &mut Session<Task>,
    prompter: &mut Prompter<R, W>,
) -> CliResult {
    let Some(index) = pick(session, prompter, "Enter task number to delete: ")? else {
        return Ok(());
    };
    match task_ops::delete_task(session, index) {
        Ok(removed) => writeln!(prompter.out(), "Task '{}' deleted.", removed.description)?,
        Err(e) => report(prompter.out(), e, "Invalid task number.")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::RecordStore;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn run_script(path: &Path, script: &str) -> String {
        let mut session = Session::open(RecordStore::<Task>::new(path)).unwrap();
        let mut prompter = Prompter::new(script.as_bytes(), Vec::new());
        todo_menu(&mut session, &mut prompter).unwrap();
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn buy_milk_walkthrough() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        let out = run_script(&path, "1\nBuy milk\n2\n4\n1\n2\n5\n1\n2\n6\n");

        let added = out.find("Task 'Buy milk' added.").unwrap();
        let open = out.find("1. [✗] Buy milk").unwrap();
        let marked = out.find("Task marked as done.").unwrap();
        let done = out.rfind("1. [✓] Buy milk").unwrap();
        let deleted = out.find("Task 'Buy milk' deleted.").unwrap();
        let empty = out.rfind("No tasks.").unwrap();
        assert!(added < open && open < marked && marked < done && done < deleted && deleted < empty);
        assert!(out.ends_with("Exiting CLI. Goodbye!\n"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn empty_task_is_not_added() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        let out = run_script(&path, "1\n   \n6\n");
        assert!(out.contains("Empty task not added."));
        assert!(!path.exists());
    }

    #[test]
    fn update_messages() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        let out = run_script(&path, "1\nold\n3\n1\nnew\n3\n1\n\n3\n1\nnew\n6\n");
        assert!(out.contains("Task updated."));
        assert!(out.contains("Empty description. Update canceled."));
        assert!(out.contains("Task unchanged."));
        let tasks = RecordStore::<Task>::new(&path).load().unwrap();
        assert_eq!(tasks, vec![Task::new("new")]);
    }

    #[test]
    fn bad_numbers_leave_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        run_script(&path, "1\na\n6\n");
        let before = fs::read(&path).unwrap();

        let out = run_script(&path, "3\n0\n4\n2\n5\nabc\n6\n");
        assert!(out.contains("Invalid task number."));
        assert!(out.contains("Please enter a valid number."));
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn invalid_index_does_not_ask_for_description() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        let out = run_script(&path, "3\n1\n6\n");
        assert!(!out.contains("Enter new description"));
    }

    #[test]
    fn unknown_choice_and_eof() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        let out = run_script(&path, "7\n");
        assert!(out.contains("Invalid choice. Please try again."));
        assert!(!path.exists());
    }

    #[test]
    fn mode_prompt() {
        let mut p = Prompter::new(&b"1\n"[..], Vec::new());
        assert_eq!(ask_mode(&mut p).unwrap(), Some(Mode::Cli));
        let mut p = Prompter::new(&b" 2 \n"[..], Vec::new());
        assert_eq!(ask_mode(&mut p).unwrap(), Some(Mode::Gui));
        let mut p = Prompter::new(&b"3\n"[..], Vec::new());
        assert_eq!(ask_mode(&mut p).unwrap(), None);
    }
}
